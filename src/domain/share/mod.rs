//! Share Context - 分享限界上下文

mod value_objects;

pub use value_objects::{ShareData, ShareMethod};
