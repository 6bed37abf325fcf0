//! HTTP Handlers

mod chapter;
mod ping;
mod share;

pub use chapter::*;
pub use ping::*;
pub use share::*;
