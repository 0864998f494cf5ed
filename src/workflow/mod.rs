pub mod check_ctx;
pub mod check_flow;

pub use check_ctx::CheckCtx;
pub use check_flow::CheckFlow;
