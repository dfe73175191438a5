/// Folders order before files in a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
	Folder,
	File,
}

/// One entry of a repository's file tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	pub(super) name: String,
	pub(super) kind: NodeKind,
	pub(super) path: String,
	pub(super) content: Option<String>,
	/// Paths of the children, in listing order. Always `None` for files.
	pub(super) children: Option<Vec<String>>,
	pub(super) loaded: bool,
}

impl Node {
	/// A folder whose children have not been listed yet.
	pub fn folder(parent: &str, name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			path: join_path(parent, &name),
			name,
			kind: NodeKind::Folder,
			content: None,
			children: Some(Vec::new()),
			loaded: false,
		}
	}

	/// A file whose content has not been fetched yet. Files have nothing to list, so they are always loaded.
	pub fn file(parent: &str, name: impl Into<String>) -> Self {
		let name = name.into();
		Self {
			path: join_path(parent, &name),
			name,
			kind: NodeKind::File,
			content: None,
			children: None,
			loaded: true,
		}
	}

	/// Pre-populates the content of a file, ignored for folders.
	pub fn with_content(mut self, content: impl Into<String>) -> Self {
		if self.kind == NodeKind::File {
			self.content = Some(content.into());
		}
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> NodeKind {
		self.kind
	}

	pub fn is_folder(&self) -> bool {
		self.kind == NodeKind::Folder
	}

	/// Unique key of the node within its tree.
	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn content(&self) -> Option<&str> {
		self.content.as_deref()
	}

	pub fn child_paths(&self) -> Option<&[String]> {
		self.children.as_deref()
	}

	pub fn is_loaded(&self) -> bool {
		self.loaded
	}
}

pub fn join_path(parent: &str, name: &str) -> String {
	match parent.is_empty() {
		true => name.to_owned(),
		false => format!("{parent}/{name}"),
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn file_has_no_children() {
		let file = Node::file("src", "main.rs");
		assert_eq!(file.path(), "src/main.rs");
		assert_eq!(file.child_paths(), None);
		assert!(file.is_loaded());
	}

	#[test]
	fn folder_starts_unloaded() {
		let folder = Node::folder("", "src");
		assert_eq!(folder.path(), "src");
		assert_eq!(folder.child_paths(), Some(&[][..]));
		assert!(!folder.is_loaded());
		assert_eq!(folder.with_content("ignored").content(), None);
	}
}
