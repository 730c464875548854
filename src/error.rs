use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求体相关错误
    #[error("请求错误: {0}")]
    Payload(#[from] PayloadError),
    /// 出题引擎错误
    #[error("出题错误: {0}")]
    Engine(#[from] EngineError),
    /// 文档渲染错误
    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),
    /// 打包错误
    #[error("打包错误: {0}")]
    Archive(#[from] ArchiveError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 请求体错误
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSON 无法解析
    #[error("无法解析请求体: {message}")]
    Malformed { message: String },
    /// 缺少必填字段
    #[error("缺少必填字段: {field}")]
    MissingField { field: &'static str },
    /// 字段取值非法
    #[error("字段 {field} 取值非法: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    /// 题目列表为空
    #[error("题目列表不能为空")]
    EmptyQuestions,
    /// 套数超过上限
    #[error("请求 {requested} 套试卷，超过上限 {max}")]
    TooManySets { requested: usize, max: usize },
}

/// 出题引擎错误
#[derive(Debug, Error)]
pub enum EngineError {
    /// 题目数据不合法
    ///
    /// `index` 为题目在原始列表中的位置（从1开始）
    #[error("第 {index} 题不合法: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// 文档渲染错误
#[derive(Debug, Error)]
pub enum RenderError {
    /// 生成文档失败
    #[error("生成 {set_name} 失败: {source}")]
    BuildFailed {
        set_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 打包错误
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// 写入条目失败
    #[error("写入条目 {entry} 失败: {source}")]
    EntryFailed {
        entry: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 完成压缩包失败
    #[error("完成压缩包失败: {source}")]
    FinishFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
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

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建题目不合法错误
    pub fn invalid_question(index: usize, reason: impl Into<String>) -> Self {
        AppError::Engine(EngineError::InvalidQuestion {
            index,
            reason: reason.into(),
        })
    }

    /// 创建字段非法错误
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::Payload(PayloadError::InvalidValue {
            field,
            reason: reason.into(),
        })
    }

    /// 创建文档渲染错误
    pub fn render_failed(
        set_name: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Render(RenderError::BuildFailed {
            set_name: set_name.into(),
            source: Box::new(source),
        })
    }

    /// 创建压缩包条目写入错误
    pub fn archive_entry_failed(
        entry: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Archive(ArchiveError::EntryFailed {
            entry: entry.into(),
            source: Box::new(source),
        })
    }

    /// HTTP 状态码：调用方数据问题返回 400，其余 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Payload(_) | AppError::Engine(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Payload(PayloadError::Malformed {
            message: err.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = &self as &dyn std::error::Error, "❌ 请求处理失败");
        } else {
            tracing::warn!("⚠️ 请求被拒绝: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
