use super::{ListingError, Node, NodeKind, RepositoryRef, RepositorySource};
use github::EntryKind;
use std::{cmp::Ordering, collections::BTreeMap, rc::Rc};

/// A snapshot of a repository's file tree, keyed by path.
///
/// Trees are values: every update returns a new tree, sharing the untouched nodes with the old one.
/// Only the subtree of the updated folder differs between the two, so results of requests which
/// finish in any order can each be applied to the latest tree without clobbering one another.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileTree {
	roots: Vec<String>,
	nodes: BTreeMap<String, Rc<Node>>,
}

impl FileTree {
	pub fn from_roots(roots: Vec<Node>) -> Self {
		let mut tree = Self::default();
		tree.roots = tree.insert_all(roots);
		tree
	}

	/// Lists the repository root into a new tree.
	pub async fn load_root<S>(source: &S, repo: &RepositoryRef) -> Result<Self, ListingError>
	where
		S: RepositorySource + ?Sized,
	{
		Ok(Self::from_roots(list_folder(source, repo, "").await?))
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn get(&self, path: &str) -> Option<&Node> {
		self.nodes.get(path).map(Rc::as_ref)
	}

	pub fn roots(&self) -> impl Iterator<Item = &Node> + '_ {
		self.roots.iter().filter_map(|path| self.get(path))
	}

	/// The listed children of a folder, empty for files and unknown paths.
	pub fn children<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a Node> + 'a {
		let paths = self.get(path).and_then(Node::child_paths).unwrap_or_default();
		paths.iter().filter_map(|path| self.get(path))
	}

	pub fn is_loaded(&self, path: &str) -> bool {
		self.get(path).map(Node::is_loaded).unwrap_or(false)
	}

	/// Every node in display order (depth first, children in listing order), with its depth.
	pub fn depth_first(&self) -> Vec<(usize, &Node)> {
		let mut output = Vec::with_capacity(self.len());
		let mut stack = self.roots().map(|node| (0, node)).collect::<Vec<_>>();
		stack.reverse();
		while let Some((depth, node)) = stack.pop() {
			output.push((depth, node));
			let mut children = self.children(node.path()).map(|child| (depth + 1, child)).collect::<Vec<_>>();
			children.reverse();
			stack.extend(children);
		}
		output
	}

	/// Returns a tree where the folder at `path` has exactly `children` and is marked loaded.
	/// Any previously listed descendants of the folder are dropped.
	/// Paths which are unknown or not folders leave the tree unchanged.
	pub fn with_children(&self, path: &str, children: Vec<Node>) -> Self {
		let Some(target) = self.nodes.get(path) else {
			return self.clone();
		};
		if target.kind != NodeKind::Folder {
			return self.clone();
		}
		let mut folder = Node::clone(target);
		let mut tree = self.clone();
		tree.remove_descendants(path);
		folder.children = Some(tree.insert_all(children));
		folder.loaded = true;
		tree.nodes.insert(path.to_owned(), Rc::new(folder));
		tree
	}

	/// Lists the folder at `path` if it has not been loaded yet.
	/// Once loaded, the same tree is returned and no request is made.
	/// If the listing fails the folder stays unloaded, so expanding it again retries.
	pub async fn expand<S>(&self, source: &S, repo: &RepositoryRef, path: &str) -> Result<Self, ListingError>
	where
		S: RepositorySource + ?Sized,
	{
		let Some(node) = self.get(path) else {
			return Err(ListingError::UnknownPath(path.to_owned()));
		};
		if node.is_loaded() {
			return Ok(self.clone());
		}
		let children = list_folder(source, repo, path).await?;
		Ok(self.with_children(path, children))
	}

	/// Inserts nodes, returning the paths inserted in order.
	/// A path which is already present keeps its first node.
	fn insert_all(&mut self, nodes: Vec<Node>) -> Vec<String> {
		let mut paths = Vec::with_capacity(nodes.len());
		for node in nodes {
			if self.nodes.contains_key(&node.path) {
				log::warn!("Duplicate entry {:?} in listing, keeping the first", node.path);
				continue;
			}
			paths.push(node.path.clone());
			self.nodes.insert(node.path.clone(), Rc::new(node));
		}
		paths
	}

	fn remove_descendants(&mut self, path: &str) {
		let Some(node) = self.nodes.get(path).cloned() else {
			return;
		};
		for child in node.children.iter().flatten() {
			self.remove_descendants(child);
			self.nodes.remove(child);
		}
	}

	pub(super) fn replace_node(&mut self, node: Node) {
		self.nodes.insert(node.path.clone(), Rc::new(node));
	}
}

/// Folders first, then by case-insensitive name.
pub fn listing_order(a: &Node, b: &Node) -> Ordering {
	a.kind.cmp(&b.kind).then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Requests the immediate children of `path` ("" for the root) as unloaded nodes in listing order.
/// Entries which are neither folders nor files (symlinks, submodules) are skipped.
pub async fn list_folder<S>(source: &S, repo: &RepositoryRef, path: &str) -> Result<Vec<Node>, ListingError>
where
	S: RepositorySource + ?Sized,
{
	let entries = source.list_folder(repo, path).await.map_err(|error| ListingError::Request {
		path: path.to_owned(),
		error,
	})?;
	let mut nodes = entries
		.into_iter()
		.filter_map(|entry| match entry.kind {
			EntryKind::Dir => Some(Node::folder(path, entry.name)),
			EntryKind::File => Some(Node::file(path, entry.name)),
			_ => None,
		})
		.collect::<Vec<_>>();
	nodes.sort_by(listing_order);
	log::debug!("Listed {} entries in {:?} of {}/{}", nodes.len(), path, repo.owner, repo.name);
	Ok(nodes)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::repo_browser::mock::{repo, MockSource};
	use futures::executor::block_on;
	use github::EntryKind::{Dir, File, Submodule};

	fn names<'a>(nodes: impl Iterator<Item = &'a Node>) -> Vec<&'a str> {
		nodes.map(Node::name).collect()
	}

	#[test]
	fn list_root() {
		let source = MockSource::default().with_listing("", &[("src", Dir), ("README.md", File)]);
		let nodes = block_on(list_folder(&source, &repo(), "")).unwrap();
		assert_eq!(nodes, vec![Node::folder("", "src"), Node::file("", "README.md")]);
		assert!(!nodes[0].is_loaded());
		assert!(nodes[1].is_loaded());
	}

	#[test]
	fn list_sorts_folders_first_case_insensitive() {
		let source = MockSource::default().with_listing(
			"pkg",
			&[
				("zeta.rs", File),
				("Alpha.rs", File),
				("tests", Dir),
				("beta.rs", File),
				("Docs", Dir),
				("vendored", Submodule),
			],
		);
		let nodes = block_on(list_folder(&source, &repo(), "pkg")).unwrap();
		assert_eq!(names(nodes.iter()), vec!["Docs", "tests", "Alpha.rs", "beta.rs", "zeta.rs"]);
		assert_eq!(nodes[0].path(), "pkg/Docs");
		for pair in nodes.windows(2) {
			assert_ne!(listing_order(&pair[0], &pair[1]), Ordering::Greater);
		}
	}

	#[test]
	fn list_failure() {
		let source = MockSource::default();
		let result = block_on(list_folder(&source, &repo(), "missing"));
		assert!(matches!(result, Err(ListingError::Request { path, .. }) if path == "missing"));
	}

	#[test]
	fn expand_loads_children() {
		let source = MockSource::default()
			.with_listing("", &[("src", Dir), ("README.md", File)])
			.with_listing("src", &[("main.rs", File), ("bin", Dir)]);
		let tree = block_on(FileTree::load_root(&source, &repo())).unwrap();
		assert!(!tree.is_loaded("src"));

		let expanded = block_on(tree.expand(&source, &repo(), "src")).unwrap();
		assert!(expanded.is_loaded("src"));
		assert_eq!(names(expanded.children("src")), vec!["bin", "main.rs"]);
		assert_eq!(expanded.get("src/main.rs").map(Node::path), Some("src/main.rs"));
		// the original snapshot is untouched
		assert!(!tree.is_loaded("src"));
		assert_eq!(tree.children("src").count(), 0);
	}

	#[test]
	fn expand_is_idempotent_once_loaded() {
		let source = MockSource::default()
			.with_listing("", &[("src", Dir)])
			.with_listing("src", &[("lib.rs", File)]);
		let tree = block_on(FileTree::load_root(&source, &repo())).unwrap();
		let once = block_on(tree.expand(&source, &repo(), "src")).unwrap();
		let requests = source.request_count();
		let twice = block_on(once.expand(&source, &repo(), "src")).unwrap();
		assert_eq!(once, twice);
		assert_eq!(source.request_count(), requests);
	}

	#[test]
	fn expand_failure_keeps_folder_unloaded() {
		let source = MockSource::default().with_listing("", &[("src", Dir)]);
		let tree = block_on(FileTree::load_root(&source, &repo())).unwrap();
		assert!(block_on(tree.expand(&source, &repo(), "src")).is_err());
		assert!(!tree.is_loaded("src"));

		// retrying after the remote recovers
		let source = source.with_listing("src", &[("lib.rs", File)]);
		let tree = block_on(tree.expand(&source, &repo(), "src")).unwrap();
		assert!(tree.is_loaded("src"));
	}

	#[test]
	fn expand_unknown_path() {
		let tree = FileTree::from_roots(vec![Node::folder("", "src")]);
		let result = block_on(tree.expand(&MockSource::default(), &repo(), "lib"));
		assert!(matches!(result, Err(ListingError::UnknownPath(_))));
	}

	#[test]
	fn expand_file_is_noop() {
		let source = MockSource::default();
		let tree = FileTree::from_roots(vec![Node::file("", "README.md")]);
		let expanded = block_on(tree.expand(&source, &repo(), "README.md")).unwrap();
		assert_eq!(tree, expanded);
		assert_eq!(source.request_count(), 0);
	}

	#[test]
	fn concurrent_updates_do_not_clobber() {
		let tree = FileTree::from_roots(vec![Node::folder("", "a"), Node::folder("", "b")]);
		let a_children = vec![Node::file("a", "one.txt")];
		let b_children = vec![Node::file("b", "two.txt")];
		// both listings were requested against `tree`, completing in reverse order
		let latest = tree.with_children("b", b_children);
		let latest = latest.with_children("a", a_children);
		assert_eq!(names(latest.children("a")), vec!["one.txt"]);
		assert_eq!(names(latest.children("b")), vec!["two.txt"]);
	}

	#[test]
	fn reloading_replaces_descendants() {
		let tree = FileTree::from_roots(vec![Node::folder("", "src")]);
		let tree = tree.with_children("src", vec![Node::folder("src", "old")]);
		let tree = tree.with_children("src/old", vec![Node::file("src/old", "gone.rs")]);
		assert_eq!(tree.len(), 3);
		let tree = tree.with_children("src", vec![Node::file("src", "new.rs")]);
		assert_eq!(tree.len(), 2);
		assert!(tree.get("src/old/gone.rs").is_none());
	}

	#[test]
	fn duplicate_entries_keep_first() {
		let tree = FileTree::from_roots(vec![Node::folder("", "src")]);
		let tree = tree.with_children(
			"src",
			vec![Node::file("src", "a.rs").with_content("first"), Node::file("src", "a.rs").with_content("second")],
		);
		assert_eq!(tree.children("src").count(), 1);
		assert_eq!(tree.get("src/a.rs").and_then(Node::content), Some("first"));
	}

	#[test]
	fn files_never_have_children() {
		let tree = FileTree::from_roots(vec![Node::file("", "README.md")]);
		let tree = tree.with_children("README.md", vec![Node::file("README.md", "nested")]);
		assert_eq!(tree.get("README.md").and_then(Node::child_paths), None);
		assert!(tree.get("README.md/nested").is_none());
	}

	#[test]
	fn depth_first_order() {
		let tree = FileTree::from_roots(vec![Node::folder("", "src"), Node::file("", "README.md")]);
		let tree = tree.with_children("src", vec![Node::folder("src", "bin"), Node::file("src", "lib.rs")]);
		let order = tree
			.depth_first()
			.into_iter()
			.map(|(depth, node)| (depth, node.path()))
			.collect::<Vec<_>>();
		assert_eq!(order, vec![(0, "src"), (1, "src/bin"), (1, "src/lib.rs"), (0, "README.md")]);
	}
}
