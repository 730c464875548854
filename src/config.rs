use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "mcq_sets.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 监听地址
    pub bind_address: String,
    /// 单次请求允许生成的最大套数
    pub max_sets: usize,
    /// 请求体大小上限（字节），题目图片内嵌在请求体中
    pub max_payload_bytes: usize,
    /// 下载的压缩包文件名
    pub archive_file_name: String,
    /// 题干图片宽度（英寸）
    pub question_image_width_inches: f64,
    /// 选项图片宽度（英寸）
    pub option_image_width_inches: f64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            max_sets: 100,
            max_payload_bytes: 50 * 1024 * 1024,
            archive_file_name: "mcq_sets.zip".to_string(),
            question_image_width_inches: 3.0,
            option_image_width_inches: 1.5,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 默认值 → TOML 配置文件（若存在） → 环境变量
    ///
    /// 配置文件路径取 `MCQ_SETS_CONFIG`，未设置时使用 [`DEFAULT_CONFIG_FILE`]。
    /// 显式指定的文件不存在时报错，默认文件不存在则跳过。
    pub fn load() -> AppResult<Self> {
        let (path, explicit) = match std::env::var("MCQ_SETS_CONFIG") {
            Ok(path) => (path, true),
            Err(_) => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        if explicit || Path::new(&path).exists() {
            Ok(Self::from_toml_file(&path)?.with_env_overrides())
        } else {
            Ok(Self::from_env())
        }
    }

    /// 从 TOML 文件加载，缺失的字段使用默认值
    pub fn from_toml_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 用环境变量覆盖；无法解析的值保留上一层
    fn with_env_overrides(self) -> Self {
        Self {
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or(self.bind_address),
            max_sets: env_parse("MAX_SETS").unwrap_or(self.max_sets),
            max_payload_bytes: env_parse("MAX_PAYLOAD_BYTES").unwrap_or(self.max_payload_bytes),
            archive_file_name: std::env::var("ARCHIVE_FILE_NAME").unwrap_or(self.archive_file_name),
            question_image_width_inches: env_parse("QUESTION_IMAGE_WIDTH_INCHES")
                .unwrap_or(self.question_image_width_inches),
            option_image_width_inches: env_parse("OPTION_IMAGE_WIDTH_INCHES")
                .unwrap_or(self.option_image_width_inches),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
        }
    }
}

fn env_parse<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
