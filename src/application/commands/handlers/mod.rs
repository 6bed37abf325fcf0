//! Command Handlers 实现

mod share_handlers;

pub use share_handlers::*;
