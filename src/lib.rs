//! # MCQ Sets
//!
//! 把一份单选题题库打乱成多套内容等价的试卷，渲染为 Word 文档并打包下载。
//!
//! ## 架构设计
//!
//! 本系统沿用四层架构，外加一层 HTTP 接口：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露能力，不认识出题流程
//! - `DataUrlResolver` - data URL → 图片字节
//! - `DocxWriter` - 一套试卷 → .docx
//! - `ZipPackager` - 多份文档 → zip
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 只处理单个 Question
//! - `validate_question` - 选项非空、选项 id 不重复
//! - `OptionShuffler` - 打乱选项并按 id 找回正确答案
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一套卷子"的生成流程
//! - `SetCtx` - 上下文封装（套卷序号 + 名称）
//! - `SetFlow` - 打乱题目顺序 → 编号 → 逐题打乱选项
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/set_generator` - 校验整份题库，生成 N 套
//! - `orchestrator/archive_builder` - 逐套渲染并打包
//!
//! ### HTTP 接口（API）
//! - `api/` - axum 路由、请求体校验、错误响应
//!
//! ## 随机源
//!
//! 所有打乱操作都接收调用方传入的 `rand::Rng`，线上使用 `thread_rng()`，
//! 测试使用固定种子的 `StdRng`。

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use api::{router, AppState};
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ProcessedOption, ProcessedQuestion, Question, QuestionOption, QuestionSet};
pub use orchestrator::{generate_sets, ArchiveBuilder, SetGenerator};
pub use workflow::{SetCtx, SetFlow};
