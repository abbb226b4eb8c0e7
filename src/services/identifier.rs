//! 标识提取服务 - 业务能力层
//!
//! - 运单号：只来自文件名（文件必须以运单号命名）
//! - 订单号：在 PDF 文本中按规则匹配，取扫描顺序中最靠前的一个

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use regex::Regex;

const PDF_SUFFIX: &str = ".pdf";

/// 从文件名中提取运单号
///
/// 去掉 `.pdf` 后缀后剩余部分即为运单号；没有后缀的文件名原样返回。
/// 剩余部分为空时返回 `None`。
pub fn extract_tracking_number(file_name: &str) -> Option<String> {
    let tracking_number = file_name.strip_suffix(PDF_SUFFIX).unwrap_or(file_name);
    if tracking_number.is_empty() {
        None
    } else {
        Some(tracking_number.to_string())
    }
}

/// 使用内置规则从文本中提取订单号
pub fn extract_order_number(text: &str) -> Option<String> {
    OrderNumberMatcher::standard().find(text)
}

/// 订单号规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderNumberPattern {
    /// 9 位连续数字
    NineDigit,
    /// 6 位数字 + `-` + 1 位数字
    SixDigitDashDigit,
    /// 自定义正则
    Custom(String),
}

impl OrderNumberPattern {
    /// 内置规则，顺序即同一位置上的优先级
    pub const BUILTIN: [OrderNumberPattern; 2] = [
        OrderNumberPattern::NineDigit,
        OrderNumberPattern::SixDigitDashDigit,
    ];

    pub fn regex_source(&self) -> &str {
        match self {
            OrderNumberPattern::NineDigit => r"\d{9}",
            OrderNumberPattern::SixDigitDashDigit => r"\d{6}-\d",
            OrderNumberPattern::Custom(source) => source,
        }
    }
}

/// 订单号匹配器
///
/// 所有规则合并为一个有序分支的正则：匹配结果取文本中最左侧的位置，
/// 同一位置上排在前面的规则优先。
#[derive(Debug, Clone)]
pub struct OrderNumberMatcher {
    patterns: Vec<OrderNumberPattern>,
    combined: Regex,
}

impl OrderNumberMatcher {
    /// 按给定顺序构建匹配器
    pub fn new(patterns: Vec<OrderNumberPattern>) -> Result<Self, ConfigError> {
        for pattern in &patterns {
            Regex::new(pattern.regex_source()).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.regex_source().to_string(),
                source,
            })?;
        }

        let alternation = patterns
            .iter()
            .map(|p| format!("(?:{})", p.regex_source()))
            .collect::<Vec<_>>()
            .join("|");

        let combined = Regex::new(&alternation).map_err(|source| ConfigError::InvalidPattern {
            pattern: alternation.clone(),
            source,
        })?;

        Ok(Self { patterns, combined })
    }

    /// 仅包含内置规则
    pub fn standard() -> Self {
        Self {
            patterns: OrderNumberPattern::BUILTIN.to_vec(),
            combined: BUILTIN_RE.clone(),
        }
    }

    /// 内置规则 + 追加的自定义规则
    pub fn with_custom_patterns<I, S>(custom: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut patterns = OrderNumberPattern::BUILTIN.to_vec();
        patterns.extend(custom.into_iter().map(|s| OrderNumberPattern::Custom(s.into())));
        Self::new(patterns)
    }

    pub fn patterns(&self) -> &[OrderNumberPattern] {
        &self.patterns
    }

    /// 返回第一个匹配的订单号
    pub fn find(&self, text: &str) -> Option<String> {
        self.combined.find(text).map(|m| m.as_str().to_string())
    }
}

impl Default for OrderNumberMatcher {
    fn default() -> Self {
        Self::standard()
    }
}

static BUILTIN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\d{9})|(?:\d{6}-\d)").unwrap());
