//! 单套试卷生成流程 - 流程层
//!
//! 核心职责：定义"一套卷子"的完整生成流程
//!
//! 流程顺序：
//! 1. 打乱题目顺序
//! 2. 按新顺序编号
//! 3. 逐题打乱选项并重新定位正确答案

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::AppResult;
use crate::models::{Question, QuestionSet};
use crate::services::OptionShuffler;
use crate::utils::logging::truncate_text;
use crate::workflow::set_ctx::SetCtx;

/// 单套试卷生成流程
///
/// - 编排题目顺序打乱与逐题选项打乱
/// - 不持有随机源，由调用方传入
/// - 只依赖业务能力（services）
pub struct SetFlow {
    verbose_logging: bool,
}

impl SetFlow {
    /// 创建新的生成流程
    pub fn new(verbose_logging: bool) -> Self {
        Self { verbose_logging }
    }

    /// 生成一套试卷
    ///
    /// 题目列表为空时返回没有题目的一套
    pub fn run<R: Rng + ?Sized>(
        &self,
        ctx: &SetCtx,
        questions: &[Question],
        rng: &mut R,
    ) -> AppResult<QuestionSet> {
        // 保留原始位置，错误信息指向原始列表
        let mut order: Vec<(usize, &Question)> = questions.iter().enumerate().collect();
        order.shuffle(&mut *rng);

        let processed = order
            .into_iter()
            .enumerate()
            .map(|(idx, (source_idx, question))| {
                let question_number = idx + 1;
                if self.verbose_logging {
                    debug!(
                        "{} 第 {} 题: {}",
                        ctx,
                        question_number,
                        truncate_text(&question.question_text, 40)
                    );
                }
                OptionShuffler::shuffle(question, source_idx + 1, question_number, &mut *rng)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(QuestionSet {
            set_name: ctx.set_name.clone(),
            questions: processed,
        })
    }
}

impl Default for SetFlow {
    fn default() -> Self {
        Self::new(false)
    }
}
