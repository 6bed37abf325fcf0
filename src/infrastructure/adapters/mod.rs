//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod notify;
pub mod share;

pub use notify::*;
pub use share::*;
