//! 选项打乱服务 - 业务能力层
//!
//! 只处理单个 Question：打乱选项顺序、重新分配字母，
//! 并按选项 id 找回正确答案在新顺序中的字母。

use crate::error::{AppError, AppResult};
use crate::models::{option_letter, ProcessedOption, ProcessedQuestion, Question};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// 选项打乱服务
///
/// 职责：
/// - 对单道题的选项做均匀随机排列
/// - 按排列后的位置分配字母 a, b, c ……
/// - 通过选项 id 重新定位正确答案
/// - 不关心题目顺序，不持有随机源
pub struct OptionShuffler;

impl OptionShuffler {
    /// 处理单道题
    ///
    /// # 参数
    /// - `question`: 原始题目（应已通过校验）
    /// - `source_index`: 题目在原始列表中的位置（从1开始，仅用于错误信息）
    /// - `question_number`: 本套试卷中的题号（从1开始）
    /// - `rng`: 随机源
    ///
    /// # 返回
    /// 返回本套试卷中的题目；选项为空时返回 `InvalidQuestion`
    pub fn shuffle<R: Rng + ?Sized>(
        question: &Question,
        source_index: usize,
        question_number: usize,
        rng: &mut R,
    ) -> AppResult<ProcessedQuestion> {
        let correct_option = question
            .correct_option()
            .ok_or_else(|| AppError::invalid_question(source_index, "选项列表为空"))?;
        let correct_id = &correct_option.id;

        if !question.correct_answer_in_range() {
            debug!(
                "原始第 {} 题的正确答案序号 {} 越界，回退到第一个选项",
                source_index, question.correct_answer
            );
        }

        let mut shuffled: Vec<_> = question.options.iter().collect();
        shuffled.shuffle(rng);

        let mut correct_letter = None;
        let options = shuffled
            .into_iter()
            .enumerate()
            .map(|(position, option)| {
                let letter = option_letter(position);
                if &option.id == correct_id {
                    correct_letter = Some(letter.clone());
                }
                ProcessedOption {
                    letter,
                    text: option.text.clone(),
                    image: option.image.clone(),
                }
            })
            .collect();

        let correct_answer = correct_letter.ok_or_else(|| {
            AppError::invalid_question(source_index, format!("找不到正确选项 {}", correct_id))
        })?;

        Ok(ProcessedQuestion {
            question_number,
            question_text: question.question_text.clone(),
            question_image: question.question_image.clone(),
            options,
            correct_answer,
        })
    }
}
