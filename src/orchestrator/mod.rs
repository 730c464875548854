//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责多套试卷的生成与打包，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `set_generator` - 多套试卷生成器
//! - 校验整份题目列表
//! - 按套数逐套调用 SetFlow
//! - 随机源由调用方注入
//!
//! ### `archive_builder` - 试卷打包器
//! - 逐套渲染文档（DocumentWriter）
//! - 整体打包（ArchivePackager）
//!
//! ## 层次关系
//!
//! ```text
//! set_generator (处理 N 套)
//!     ↓
//! workflow::SetFlow (处理一套)
//!     ↓
//! services (能力层：校验 / 选项打乱)
//!
//! archive_builder (渲染 + 打包)
//!     ↓
//! infrastructure (基础设施：图片 / docx / zip)
//! ```

pub mod archive_builder;
pub mod set_generator;

pub use archive_builder::ArchiveBuilder;
pub use set_generator::{generate_sets, SetGenerator};
