// Adapters layer: concrete implementations for the terminal and the filesystem.

pub mod prompt;
pub mod reporter;
pub mod storage;
