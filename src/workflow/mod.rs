pub mod set_ctx;
pub mod set_flow;

pub use set_ctx::SetCtx;
pub use set_flow::SetFlow;
