//! Content Layer - 内容索引实现

mod memory_index;

pub use memory_index::{ContentIndexFile, InMemoryContentIndex};
