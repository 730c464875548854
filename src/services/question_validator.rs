//! 题目校验服务 - 业务能力层
//!
//! 只负责"这道题能不能出"，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::Question;
use std::collections::HashSet;

/// 校验单道题目
///
/// # 参数
/// - `question`: 原始题目
/// - `index`: 题目在原始列表中的位置（从1开始，仅用于错误信息）
///
/// 选项不能为空，选项 id 在同一题内不能重复（按 JSON 原始类型比较）
pub fn validate_question(question: &Question, index: usize) -> AppResult<()> {
    if question.options.is_empty() {
        return Err(AppError::invalid_question(index, "选项列表为空"));
    }

    let mut seen = HashSet::with_capacity(question.options.len());
    for option in &question.options {
        if !seen.insert(&option.id) {
            return Err(AppError::invalid_question(
                index,
                format!("选项 id `{}` 重复", option.id),
            ));
        }
    }

    Ok(())
}

/// 校验整份题目列表，遇到第一道不合法的题即返回
pub fn validate_questions(questions: &[Question]) -> AppResult<()> {
    questions
        .iter()
        .enumerate()
        .try_for_each(|(idx, q)| validate_question(q, idx + 1))
}
