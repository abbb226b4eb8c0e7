use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 标签信息提取错误
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    /// 代理 API 调用错误
    #[error(transparent)]
    Api(#[from] ApiError),
    /// 配置错误
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// HTTP 服务错误
    #[error("服务错误: {0}")]
    Server(String),
    /// 其他错误
    #[error("{0}")]
    Other(String),
}

/// 标签信息提取错误
///
/// 这一类错误只影响单个文件，流水线会把它转成失败结果后继续
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// 文件名中没有运单号
    #[error("Tracking number not found in filename")]
    TrackingNumberMissing,
    /// PDF 文本中没有订单号
    #[error("Order number not found")]
    OrderNumberMissing,
    /// PDF 无法解析
    #[error("Failed to read PDF {file}: {reason}")]
    UnreadablePdf { file: String, reason: String },
}

/// 代理 API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("Request to {endpoint} failed: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 非 2xx 响应；标记发货接口的提示用小写 `status`
    #[error("HTTP error! {}: {}", status_word(.endpoint), .status)]
    BadStatus { endpoint: String, status: u16 },
    /// 响应 JSON 解析失败
    #[error("Invalid JSON from {endpoint}: {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// 出错的接口路径
    pub fn endpoint(&self) -> &str {
        match self {
            ApiError::RequestFailed { endpoint, .. }
            | ApiError::BadStatus { endpoint, .. }
            | ApiError::JsonParseFailed { endpoint, .. } => endpoint,
        }
    }
}

fn status_word(endpoint: &str) -> &'static str {
    if endpoint.ends_with("/markasshipped") {
        "status"
    } else {
        "Status"
    }
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 订单号规则不是合法正则
    #[error("订单号规则无效 '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type Result<T> = std::result::Result<T, AppError>;
