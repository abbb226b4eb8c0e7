//! 程序配置
//!
//! 默认值 → 可选 TOML 配置文件（`LABEL_PROCESSOR_CONFIG`）→ 环境变量，后者覆盖前者

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// ShipStation 代理地址
pub const SHIPSTATION_PROXY: &str = "https://shipstation-proxy.info-ba2.workers.dev";

/// 标记发货后自动分配的内部用户
pub const DEFAULT_ASSIGN_USER_ID: &str = "1f021469-eff0-4cf3-a9ab-e6edccdc84f7";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 代理服务地址（代理负责转发到 ShipStation）
    pub proxy_base_url: String,
    /// 承运商代码
    pub carrier_code: String,
    /// 发货后分配的内部用户 ID
    pub assign_user_id: String,
    /// HTTP 服务监听地址
    pub listen_addr: String,
    /// 待处理的标签目录；设置后只处理一次该目录然后退出
    pub label_folder: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 额外的订单号正则，追加在内置规则之后
    pub extra_order_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            proxy_base_url: SHIPSTATION_PROXY.to_string(),
            carrier_code: "usps".to_string(),
            assign_user_id: DEFAULT_ASSIGN_USER_ID.to_string(),
            listen_addr: "127.0.0.1:8788".to_string(),
            label_folder: None,
            verbose_logging: false,
            extra_order_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// 使用指定的代理地址创建配置，其余取默认值
    pub fn with_proxy(proxy_base_url: impl Into<String>) -> Self {
        Self {
            proxy_base_url: proxy_base_url.into(),
            ..Self::default()
        }
    }

    /// 从 TOML 文件读取配置，缺失字段取默认值
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::TomlParseFailed { source, .. } => ConfigError::TomlParseFailed {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: String::new(),
            source,
        })
    }

    /// 加载配置：配置文件（如有）+ 环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("LABEL_PROCESSOR_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides(|name| std::env::var(name).ok())
    }

    /// 仅使用默认值 + 环境变量
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(|name| std::env::var(name).ok())
    }

    fn with_env_overrides<F>(self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose_logging = match lookup("VERBOSE_LOGGING") {
            Some(v) => v.parse().map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: "VERBOSE_LOGGING".to_string(),
                value: v.clone(),
                expected_type: "bool".to_string(),
            })?,
            None => self.verbose_logging,
        };

        Ok(Self {
            proxy_base_url: lookup("SHIPSTATION_PROXY_URL").unwrap_or(self.proxy_base_url),
            listen_addr: lookup("LISTEN_ADDR").unwrap_or(self.listen_addr),
            label_folder: lookup("LABEL_FOLDER").or(self.label_folder),
            verbose_logging,
            ..self
        })
    }
}
