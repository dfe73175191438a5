use super::{ContentDecodeError, ContentUnavailable, FileTree, NodeKind, RepositoryRef, RepositorySource};

/// Shown when a file's inline body is not valid base64.
pub static DECODE_FAILED_TEXT: &str = "// Unable to decode file content";
/// Shown when neither the inline body nor the raw content could be fetched.
pub static UNAVAILABLE_TEXT: &str = "// File content not available";

/// Fetches the text of a file. Never fails: every failure resolves to placeholder text,
/// since the result is always displayed as-is.
///
/// The file's metadata is requested first, decoding the inline body if there is one.
/// Otherwise (or if the metadata request failed) the raw content is requested.
pub async fn fetch_content<S>(source: &S, repo: &RepositoryRef, path: &str) -> String
where
	S: RepositorySource + ?Sized,
{
	match source.file(repo, path).await {
		Ok(metadata) => match metadata.decode() {
			Some(Ok(text)) => return text,
			Some(Err(error)) => {
				let error = ContentDecodeError {
					path: path.to_owned(),
					error,
				};
				log::warn!("{error}");
				return DECODE_FAILED_TEXT.to_owned();
			}
			None => {}
		},
		Err(err) => log::debug!("Metadata of {path:?} unavailable, trying raw content: {err}"),
	}
	match source.raw_file(repo, path).await {
		Ok(text) => text,
		Err(error) => {
			let error = ContentUnavailable {
				path: path.to_owned(),
				error,
			};
			log::warn!("{error}");
			UNAVAILABLE_TEXT.to_owned()
		}
	}
}

impl FileTree {
	/// Returns a tree where the file at `path` has `content`.
	/// Content is only ever set once; files which already have content, folders and
	/// unknown paths leave the tree unchanged.
	pub fn with_content(&self, path: &str, content: String) -> Self {
		let Some(node) = self.get(path) else {
			return self.clone();
		};
		if node.kind != NodeKind::File || node.content.is_some() {
			return self.clone();
		}
		let mut node = node.clone();
		node.content = Some(content);
		let mut tree = self.clone();
		tree.replace_node(node);
		tree
	}

	/// The text of a file, if it has been fetched.
	pub fn cached_content(&self, path: &str) -> Option<&str> {
		self.get(path).and_then(|node| node.content())
	}
}

/// Ensures the file at `path` has content, fetching it only if it was never fetched before.
pub async fn select_file<S>(tree: &FileTree, source: &S, repo: &RepositoryRef, path: &str) -> FileTree
where
	S: RepositorySource + ?Sized,
{
	match tree.get(path) {
		Some(node) if node.kind == NodeKind::File && node.content.is_none() => {}
		_ => return tree.clone(),
	}
	let content = fetch_content(source, repo, path).await;
	tree.with_content(path, content)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::repo_browser::{
		mock::{repo, MockSource},
		Node,
	};
	use futures::executor::block_on;
	use github::FileContent;

	fn base64(content: &str) -> FileContent {
		FileContent {
			content: Some(content.into()),
			encoding: Some("base64".into()),
		}
	}

	#[test]
	fn inline_body() {
		let source = MockSource::default().with_file("README.md", base64("IyBXaWRnZXRz\nCg==\n"));
		let text = block_on(fetch_content(&source, &repo(), "README.md"));
		assert_eq!(text, "# Widgets\n");
		assert_eq!(source.requests(), vec!["file:README.md"]);
	}

	#[test]
	fn raw_fallback_without_inline_body() {
		let source = MockSource::default()
			.with_file("big.txt", FileContent::default())
			.with_raw("big.txt", "hello");
		let text = block_on(fetch_content(&source, &repo(), "big.txt"));
		assert_eq!(text, "hello");
		assert_eq!(source.requests(), vec!["file:big.txt", "raw:big.txt"]);
	}

	#[test]
	fn raw_fallback_after_metadata_failure() {
		let source = MockSource::default().with_raw("a.txt", "raw text");
		assert_eq!(block_on(fetch_content(&source, &repo(), "a.txt")), "raw text");
	}

	#[test]
	fn decode_failure_is_placeholder() {
		let source = MockSource::default().with_file("a.bin", base64("%%%"));
		let text = block_on(fetch_content(&source, &repo(), "a.bin"));
		assert_eq!(text, DECODE_FAILED_TEXT);
		assert!(!text.is_empty());
		// the raw endpoint is not consulted for undecodable bodies
		assert_eq!(source.request_count(), 1);
	}

	#[test]
	fn unavailable_is_placeholder() {
		let source = MockSource::default();
		let text = block_on(fetch_content(&source, &repo(), "nope.txt"));
		assert_eq!(text, UNAVAILABLE_TEXT);
	}

	#[test]
	fn selection_is_memoized() {
		let source = MockSource::default().with_file("main.rs", base64("Zm4gbWFpbigpIHt9"));
		let tree = FileTree::from_roots(vec![Node::file("", "main.rs")]);
		let tree = block_on(select_file(&tree, &source, &repo(), "main.rs"));
		let tree = block_on(select_file(&tree, &source, &repo(), "main.rs"));
		assert_eq!(tree.cached_content("main.rs"), Some("fn main() {}"));
		assert_eq!(source.request_count(), 1);
	}

	#[test]
	fn content_is_set_once() {
		let tree = FileTree::from_roots(vec![Node::file("", "a.txt")]);
		let tree = tree.with_content("a.txt", "first".into());
		let tree = tree.with_content("a.txt", "second".into());
		assert_eq!(tree.cached_content("a.txt"), Some("first"));
	}

	#[test]
	fn folders_have_no_content() {
		let source = MockSource::default();
		let tree = FileTree::from_roots(vec![Node::folder("", "src")]);
		let selected = block_on(select_file(&tree, &source, &repo(), "src"));
		assert_eq!(selected, tree);
		assert_eq!(source.request_count(), 0);
	}
}
