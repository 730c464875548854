//! 套卷生成上下文
//!
//! 封装"我正在生成第几套卷子"这一信息

use crate::models::set_name;
use std::fmt::Display;

/// 套卷生成上下文
#[derive(Debug, Clone)]
pub struct SetCtx {
    /// 套卷索引（从0开始）
    pub set_index: usize,

    /// 套卷名称，如 `Set A`
    pub set_name: String,
}

impl SetCtx {
    /// 根据索引创建上下文，名称由索引推导
    pub fn new(set_index: usize) -> Self {
        Self {
            set_index,
            set_name: set_name(set_index),
        }
    }
}

impl Display for SetCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} #{}]", self.set_name, self.set_index + 1)
    }
}
