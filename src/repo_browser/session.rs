//! State of an open repository browser, driven by [`Action`]s.
//!
//! Requests are issued by the viewing component; their results come back as actions tagged with
//! the session they were started in. Once the browser is re-opened for another project, results
//! belonging to the previous session are discarded.

use super::{
	fetch_content, list_folder, placeholder_tree, resolve_repository, FileTree, Node, NodeKind, RepositoryRef,
	RepositorySource,
};
use std::{borrow::Cow, collections::BTreeSet, rc::Rc};
use yew::Reducible;

/// Short-lived message for the viewer, shown until dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	/// The repository could not be listed, the placeholder tree is shown instead.
	LoadFailed,
}

impl Notice {
	/// Translation key of the notice's text.
	pub fn text_key(&self) -> &'static str {
		match self {
			Self::LoadFailed => "demo.loadFailed",
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserState {
	pub session: u64,
	pub repository: Option<RepositoryRef>,
	/// The fetched tree, `None` until the repository has been listed (or if it could not be).
	pub tree: Option<FileTree>,
	pub is_loading_tree: bool,
	pub notice: Option<Notice>,
	pub expanded: BTreeSet<String>,
	pub selected: Option<String>,
	/// Folders whose listing is in flight.
	pub listing: BTreeSet<String>,
	/// Files whose content is in flight.
	pub loading_files: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
	/// Starts a new session, discarding all state of the previous one.
	Open { session: u64, loading: bool },
	RepositoryLoaded {
		session: u64,
		repository: RepositoryRef,
		tree: FileTree,
	},
	/// The project's url does not name a repository.
	NoRepository { session: u64 },
	RepositoryFailed { session: u64 },
	Toggle { path: String },
	ChildrenLoaded {
		session: u64,
		path: String,
		children: Vec<Node>,
	},
	ChildrenFailed { session: u64, path: String },
	Select { path: String },
	ContentLoaded {
		session: u64,
		path: String,
		content: String,
	},
	DismissNotice,
}

impl Action {
	fn session(&self) -> Option<u64> {
		match self {
			Self::RepositoryLoaded { session, .. }
			| Self::NoRepository { session }
			| Self::RepositoryFailed { session }
			| Self::ChildrenLoaded { session, .. }
			| Self::ChildrenFailed { session, .. }
			| Self::ContentLoaded { session, .. } => Some(*session),
			Self::Open { .. } | Self::Toggle { .. } | Self::Select { .. } | Self::DismissNotice => None,
		}
	}
}

impl BrowserState {
	/// The fetched tree, or the placeholder if there is none.
	pub fn display_tree(&self) -> Cow<'_, FileTree> {
		match &self.tree {
			Some(tree) => Cow::Borrowed(tree),
			None => Cow::Owned(placeholder_tree()),
		}
	}

	pub fn is_expanded(&self, path: &str) -> bool {
		self.expanded.contains(path)
	}

	/// True if toggling `path` expands a folder of the fetched tree which has not been listed yet.
	pub fn toggle_requires_listing(&self, path: &str) -> bool {
		let Some(tree) = &self.tree else {
			return false;
		};
		let Some(node) = tree.get(path) else {
			return false;
		};
		node.is_folder() && !node.is_loaded() && !self.is_expanded(path) && !self.listing.contains(path)
	}

	pub fn is_loading_file(&self, path: &str) -> bool {
		self.loading_files.contains(path)
	}

	/// True if selecting `path` needs the file's content to be fetched.
	pub fn selection_requires_fetch(&self, path: &str) -> bool {
		if self.repository.is_none() || self.is_loading_file(path) {
			return false;
		}
		let Some(node) = self.tree.as_ref().and_then(|tree| tree.get(path)) else {
			return false;
		};
		node.kind() == NodeKind::File && node.content().is_none()
	}

	fn apply(&self, action: Action) -> Option<Self> {
		if let Some(session) = action.session() {
			if session != self.session {
				log::debug!("Discarding result of stale browser session {session}");
				return None;
			}
		}
		let mut next = self.clone();
		match action {
			Action::Open { session, loading } => {
				next = Self {
					session,
					is_loading_tree: loading,
					..Default::default()
				};
			}
			Action::RepositoryLoaded { repository, tree, .. } => {
				next.repository = Some(repository);
				next.tree = Some(tree);
				next.is_loading_tree = false;
				next.notice = None;
			}
			Action::NoRepository { .. } => {
				next.is_loading_tree = false;
			}
			Action::RepositoryFailed { .. } => {
				next.tree = None;
				next.is_loading_tree = false;
				next.notice = Some(Notice::LoadFailed);
			}
			Action::Toggle { path } => {
				if self.toggle_requires_listing(&path) {
					next.listing.insert(path.clone());
				}
				if !next.expanded.remove(&path) {
					next.expanded.insert(path);
				}
			}
			Action::ChildrenLoaded { path, children, .. } => {
				next.listing.remove(&path);
				let tree = self.tree.as_ref()?;
				// a loaded folder keeps its subtree
				if tree.is_loaded(&path) {
					log::debug!("Ignoring repeated listing of {path:?}");
				} else {
					next.tree = Some(tree.with_children(&path, children));
				}
			}
			Action::ChildrenFailed { path, .. } => {
				next.listing.remove(&path);
				// collapse, so that expanding again retries the listing
				next.expanded.remove(&path);
			}
			Action::Select { path } => {
				if self.selection_requires_fetch(&path) {
					next.loading_files.insert(path.clone());
				}
				next.selected = Some(path);
			}
			Action::ContentLoaded { path, content, .. } => {
				if let Some(tree) = &next.tree {
					next.tree = Some(tree.with_content(&path, content));
				}
				next.loading_files.remove(&path);
			}
			Action::DismissNotice => {
				next.notice = None;
			}
		}
		Some(next)
	}
}

impl Reducible for BrowserState {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		match self.apply(action) {
			Some(next) => Rc::new(next),
			None => self,
		}
	}
}

/// Resolves the repository named by `url` and lists its root.
pub async fn load_repository<S>(source: &S, session: u64, url: &str) -> Action
where
	S: RepositorySource + ?Sized,
{
	let repository = match resolve_repository(source, url).await {
		Ok(Some(repository)) => repository,
		Ok(None) => return Action::NoRepository { session },
		Err(err) => {
			log::warn!("{err}");
			return Action::RepositoryFailed { session };
		}
	};
	match FileTree::load_root(source, &repository).await {
		Ok(tree) => Action::RepositoryLoaded {
			session,
			repository,
			tree,
		},
		Err(err) => {
			log::warn!("{err}");
			Action::RepositoryFailed { session }
		}
	}
}

pub async fn load_children<S>(source: &S, session: u64, repository: &RepositoryRef, path: String) -> Action
where
	S: RepositorySource + ?Sized,
{
	match list_folder(source, repository, &path).await {
		Ok(children) => Action::ChildrenLoaded {
			session,
			path,
			children,
		},
		Err(err) => {
			log::warn!("{err}");
			Action::ChildrenFailed { session, path }
		}
	}
}

pub async fn load_content<S>(source: &S, session: u64, repository: &RepositoryRef, path: String) -> Action
where
	S: RepositorySource + ?Sized,
{
	let content = fetch_content(source, repository, &path).await;
	Action::ContentLoaded {
		session,
		path,
		content,
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::repo_browser::mock::{repo, MockSource};
	use futures::executor::block_on;
	use github::EntryKind::*;

	static URL: &str = "https://github.com/acme/widgets";

	fn reduce(state: Rc<BrowserState>, action: Action) -> Rc<BrowserState> {
		state.reduce(action)
	}

	fn opened(session: u64) -> Rc<BrowserState> {
		reduce(Rc::default(), Action::Open { session, loading: true })
	}

	#[test]
	fn listing_404_falls_back_to_placeholder() {
		// the root listing responds with a 404
		let source = MockSource::default();
		let state = opened(1);
		let action = block_on(load_repository(&source, 1, URL));
		assert_eq!(action, Action::RepositoryFailed { session: 1 });
		let state = reduce(state, action);
		assert!(!state.is_loading_tree);
		assert_eq!(state.notice, Some(Notice::LoadFailed));
		assert_eq!(*state.display_tree(), placeholder_tree());

		let state = reduce(state, Action::DismissNotice);
		assert_eq!(state.notice, None);
	}

	#[test]
	fn unrecognized_url_uses_placeholder_silently() {
		let source = MockSource::default();
		let state = opened(1);
		let state = reduce(state, block_on(load_repository(&source, 1, "#")));
		assert_eq!(state.notice, None);
		assert!(!state.is_loading_tree);
		assert_eq!(*state.display_tree(), placeholder_tree());
		assert_eq!(source.request_count(), 0);
	}

	#[test]
	fn expand_and_select() {
		let source = MockSource::default()
			.with_listing("", &[("src", Dir), ("README.md", File)])
			.with_listing("src", &[("lib.rs", File)])
			.with_raw("src/lib.rs", "pub fn add() {}");
		let state = opened(3);
		let state = reduce(state, block_on(load_repository(&source, 3, URL)));
		assert_eq!(state.repository, Some(repo()));

		assert!(state.toggle_requires_listing("src"));
		let state = reduce(state, Action::Toggle { path: "src".into() });
		assert!(state.is_expanded("src"));
		let action = block_on(load_children(&source, 3, &repo(), "src".into()));
		let state = reduce(state, action);
		assert!(state.display_tree().is_loaded("src"));
		assert!(!state.toggle_requires_listing("src"));

		assert!(state.selection_requires_fetch("src/lib.rs"));
		let state = reduce(state, Action::Select { path: "src/lib.rs".into() });
		assert!(state.is_loading_file("src/lib.rs"));
		// a second click while loading does not start another request
		assert!(!state.selection_requires_fetch("src/lib.rs"));
		let action = block_on(load_content(&source, 3, &repo(), "src/lib.rs".into()));
		let state = reduce(state, action);
		assert!(state.loading_files.is_empty());
		assert_eq!(state.display_tree().cached_content("src/lib.rs"), Some("pub fn add() {}"));
		assert!(!state.selection_requires_fetch("src/lib.rs"));

		// collapse
		let state = reduce(state, Action::Toggle { path: "src".into() });
		assert!(!state.is_expanded("src"));
		assert!(!state.toggle_requires_listing("src"));
	}

	#[test]
	fn failed_listing_collapses_for_retry() {
		let source = MockSource::default().with_listing("", &[("src", Dir)]);
		let state = opened(1);
		let state = reduce(state, block_on(load_repository(&source, 1, URL)));
		let state = reduce(state, Action::Toggle { path: "src".into() });
		let state = reduce(state, block_on(load_children(&source, 1, &repo(), "src".into())));
		assert!(!state.is_expanded("src"));
		assert!(state.toggle_requires_listing("src"));
	}

	#[test]
	fn stale_results_are_discarded() {
		let source = MockSource::default().with_listing("", &[("src", Dir)]);
		let stale = block_on(load_repository(&source, 1, URL));
		let state = opened(1);
		let state = reduce(state, Action::Open { session: 2, loading: true });
		let state = reduce(state, stale);
		assert!(state.tree.is_none());
		assert!(state.is_loading_tree);
	}

	#[test]
	fn placeholder_files_need_no_fetch() {
		let state = opened(1);
		let state = reduce(state, Action::RepositoryFailed { session: 1 });
		assert!(!state.selection_requires_fetch("README.md"));
		let state = reduce(state, Action::Select { path: "README.md".into() });
		assert!(state.loading_files.is_empty());
		assert!(state.display_tree().cached_content("README.md").is_some());
	}

	#[test]
	fn reselecting_a_loading_file_fetches_once() {
		let source = MockSource::default()
			.with_listing("", &[("a.rs", File), ("b.rs", File)])
			.with_raw("a.rs", "fn a() {}")
			.with_raw("b.rs", "fn b() {}");
		let mut state = reduce(opened(1), block_on(load_repository(&source, 1, URL)));
		let mut fetches = Vec::new();
		for path in ["a.rs", "b.rs", "a.rs"] {
			if state.selection_requires_fetch(path) {
				fetches.push(path);
			}
			state = reduce(state, Action::Select { path: path.into() });
		}
		assert_eq!(fetches, vec!["a.rs", "b.rs"]);
		assert!(state.is_loading_file("a.rs"));
		assert!(state.is_loading_file("b.rs"));
		assert_eq!(state.selected.as_deref(), Some("a.rs"));

		let state = reduce(state, block_on(load_content(&source, 1, &repo(), "b.rs".into())));
		assert!(!state.is_loading_file("b.rs"));
		assert!(state.is_loading_file("a.rs"));
		assert!(!state.selection_requires_fetch("a.rs"));
		let state = reduce(state, block_on(load_content(&source, 1, &repo(), "a.rs".into())));
		assert!(state.loading_files.is_empty());
		assert_eq!(state.display_tree().cached_content("a.rs"), Some("fn a() {}"));
	}

	#[test]
	fn reopening_a_folder_while_listing_does_not_list_again() {
		let source = MockSource::default()
			.with_listing("", &[("src", Dir)])
			.with_listing("src", &[("bin", Dir), ("lib.rs", File)])
			.with_listing("src/bin", &[("main.rs", File)]);
		let state = reduce(opened(1), block_on(load_repository(&source, 1, URL)));

		assert!(state.toggle_requires_listing("src"));
		let state = reduce(state, Action::Toggle { path: "src".into() });
		let state = reduce(state, Action::Toggle { path: "src".into() });
		assert!(!state.is_expanded("src"));
		// the first listing is still in flight
		assert!(!state.toggle_requires_listing("src"));
		let state = reduce(state, Action::Toggle { path: "src".into() });
		assert!(state.is_expanded("src"));

		let listed = block_on(load_children(&source, 1, &repo(), "src".into()));
		let state = reduce(state, listed.clone());
		assert!(state.listing.is_empty());
		assert!(state.toggle_requires_listing("src/bin"));
		let state = reduce(state, Action::Toggle { path: "src/bin".into() });
		let state = reduce(state, block_on(load_children(&source, 1, &repo(), "src/bin".into())));
		let loaded = state.tree.clone();
		assert!(state.display_tree().is_loaded("src/bin"));
		assert_eq!(state.display_tree().children("src/bin").count(), 1);

		// a late duplicate leaves the loaded subtree alone
		let state = reduce(state, listed);
		assert_eq!(state.tree, loaded);
		assert!(state.display_tree().is_loaded("src/bin"));
		assert!(state.display_tree().get("src/bin/main.rs").is_some());
	}

	#[test]
	fn failed_listing_clears_in_flight_folder() {
		let source = MockSource::default().with_listing("", &[("src", Dir)]);
		let state = reduce(opened(1), block_on(load_repository(&source, 1, URL)));
		let state = reduce(state, Action::Toggle { path: "src".into() });
		assert!(state.listing.contains("src"));
		let state = reduce(state, block_on(load_children(&source, 1, &repo(), "src".into())));
		assert!(state.listing.is_empty());
		assert!(state.toggle_requires_listing("src"));
	}
}
