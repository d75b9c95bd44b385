//! File system abstractions and implementations

pub mod filesystem;
pub mod real;

pub use filesystem::{FileSystem, FileSystemError};
pub use real::RealFileSystem;
