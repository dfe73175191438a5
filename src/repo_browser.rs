//! Lazily loaded view of a remote repository's file tree.
//!
//! Folders are listed on first expansion and files are fetched on first selection,
//! both cached in an immutable [`FileTree`] which is replaced wholesale on every update.

mod content;
pub use content::*;
mod error;
pub use error::*;
mod node;
pub use node::*;
mod placeholder;
pub use placeholder::*;
mod repository;
pub use repository::*;
pub mod session;
mod source;
pub use source::*;
mod tree;
pub use tree::*;

#[cfg(test)]
pub(crate) mod mock;
