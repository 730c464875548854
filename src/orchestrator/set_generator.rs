//! 多套试卷生成器 - 编排层
//!
//! ## 职责
//!
//! 出题引擎的入口：给定原始题目列表与套数，生成互相独立的多套试卷。
//!
//! 1. **整体校验**：任何一道题不合法，整个请求失败，不生成任何一套
//! 2. **逐套生成**：每一套的题目顺序、每道题的选项顺序各自独立随机
//! 3. **随机源注入**：随机源由调用方传入，测试可使用固定种子

use crate::error::AppResult;
use crate::models::{Question, QuestionSet};
use crate::services::validate_questions;
use crate::workflow::{SetCtx, SetFlow};
use rand::Rng;
use tracing::info;

/// 多套试卷生成器
pub struct SetGenerator {
    flow: SetFlow,
}

impl SetGenerator {
    /// 创建新的生成器
    pub fn new(verbose_logging: bool) -> Self {
        Self {
            flow: SetFlow::new(verbose_logging),
        }
    }

    /// 生成 `num_sets` 套试卷
    ///
    /// # 参数
    /// - `questions`: 原始题目列表，为空时每套都没有题目
    /// - `num_sets`: 套数，为0时返回空列表
    /// - `rng`: 随机源
    ///
    /// # 返回
    /// 按 `Set A`、`Set B` …… 顺序排列的试卷
    pub fn generate<R: Rng + ?Sized>(
        &self,
        questions: &[Question],
        num_sets: usize,
        rng: &mut R,
    ) -> AppResult<Vec<QuestionSet>> {
        validate_questions(questions)?;

        let sets = (0..num_sets)
            .map(|set_index| {
                let ctx = SetCtx::new(set_index);
                let set = self.flow.run(&ctx, questions, &mut *rng)?;
                info!("{} ✓ 已生成 {} 道题", ctx, set.questions.len());
                Ok(set)
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(sets)
    }
}

impl Default for SetGenerator {
    fn default() -> Self {
        Self::new(false)
    }
}

/// 使用默认生成器生成多套试卷
pub fn generate_sets<R: Rng + ?Sized>(
    questions: &[Question],
    num_sets: usize,
    rng: &mut R,
) -> AppResult<Vec<QuestionSet>> {
    SetGenerator::default().generate(questions, num_sets, rng)
}
