//! # Host Collaborators
//!
//! Real implementations of the core's `FileStore` and `Sharer` traits for a
//! desktop operating system.

pub mod launcher;
pub mod store;

pub use launcher::CommandSharer;
pub use store::DiskFileStore;
