//! The content shown on the page: projects, skills and contact details.

mod contact;
pub use contact::*;
mod project;
pub use project::*;
mod skill;
pub use skill::*;
