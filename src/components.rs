mod app;
pub use app::*;
mod contact;
pub use contact::*;
mod file_tree;
pub use file_tree::*;
mod header;
pub use header::*;
mod hook;
pub use hook::*;
mod home;
pub use home::*;
mod language_switcher;
pub use language_switcher::*;
mod preview;
pub use preview::*;
mod project_demo;
pub use project_demo::*;
mod projects;
pub use projects::*;
mod skills;
pub use skills::*;
mod spinner;
pub use spinner::*;

pub fn stop_propagation() -> yew::prelude::Callback<web_sys::MouseEvent> {
	yew::prelude::Callback::from(|evt: web_sys::MouseEvent| evt.stop_propagation())
}
