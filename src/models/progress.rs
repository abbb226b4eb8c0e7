//! 批次进度与批次报告

use crate::models::label::ProcessingResult;
use chrono::{DateTime, Local};
use serde::Serialize;

/// 批次进度：已完成数 / 总数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
}

impl BatchProgress {
    /// 新一轮开始时进度归零
    pub fn start(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// 完成一个文件，不会超过总数
    pub fn advance(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    /// 百分比 (0–100)
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    /// 四舍五入后的整数百分比，用于展示
    pub fn rounded(&self) -> u8 {
        self.percent().round() as u8
    }

    pub fn is_finished(&self) -> bool {
        self.completed == self.total
    }
}

/// 一次批处理的完整结果
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 按文件顺序排列
    pub results: Vec<ProcessingResult>,
    pub progress: BatchProgress,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}
