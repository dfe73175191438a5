pub mod contents;
pub mod get;
