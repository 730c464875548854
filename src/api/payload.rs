//! 出题请求体
//!
//! `{ "questions": [...], "numSets": 3 }`，在边界处完成类型化与校验

use crate::error::{AppError, AppResult, PayloadError};
use crate::models::Question;
use serde::Deserialize;
use serde_json::Value as JsonValue;

/// 原始请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
    #[serde(default)]
    pub num_sets: Option<JsonValue>,
}

/// 校验通过的请求
#[derive(Debug)]
pub struct ValidatedRequest {
    pub questions: Vec<Question>,
    pub num_sets: usize,
}

impl GenerateRequest {
    /// 解析请求体
    pub fn from_slice(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PayloadError::Malformed {
                message: "请求体为空".to_string(),
            }
            .into());
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// 校验必填字段与取值范围
    ///
    /// # 参数
    /// - `max_sets`: 允许的最大套数
    pub fn validate(self, max_sets: usize) -> AppResult<ValidatedRequest> {
        let questions = self
            .questions
            .ok_or(PayloadError::MissingField { field: "questions" })?;
        let num_sets = parse_num_sets(
            self.num_sets
                .ok_or(PayloadError::MissingField { field: "numSets" })?,
        )?;

        if questions.is_empty() {
            return Err(PayloadError::EmptyQuestions.into());
        }
        if num_sets > max_sets {
            return Err(PayloadError::TooManySets {
                requested: num_sets,
                max: max_sets,
            }
            .into());
        }

        Ok(ValidatedRequest {
            questions,
            num_sets,
        })
    }
}

fn parse_num_sets(value: JsonValue) -> AppResult<usize> {
    let invalid = |reason: &str| AppError::invalid_value("numSets", reason);

    match value {
        JsonValue::Null => Err(PayloadError::MissingField { field: "numSets" }.into()),
        JsonValue::Number(n) => {
            if let Some(v) = n.as_u64() {
                usize::try_from(v).map_err(|_| invalid("数值过大"))
            } else if n.as_i64().is_some() {
                Err(invalid("不能为负数"))
            } else {
                match n.as_f64() {
                    Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
                        Ok(f as usize)
                    }
                    _ => Err(invalid("必须是非负整数")),
                }
            }
        }
        _ => Err(invalid("必须是非负整数")),
    }
}
