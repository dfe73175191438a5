use super::{join_path, RepositoryRef, RepositorySource};
use futures_util::future::LocalBoxFuture;
use github::{ContentEntry, EntryKind, Error, FileContent};
use std::{cell::RefCell, collections::BTreeMap};

pub fn repo() -> RepositoryRef {
	RepositoryRef {
		owner: "acme".into(),
		name: "widgets".into(),
		default_branch: "main".into(),
	}
}

/// In-memory repository which records every request made against it.
/// Anything not registered responds with a 404.
#[derive(Default)]
pub struct MockSource {
	branch: Option<Result<Option<String>, Error>>,
	listings: BTreeMap<String, Vec<ContentEntry>>,
	files: BTreeMap<String, FileContent>,
	raw: BTreeMap<String, String>,
	requests: RefCell<Vec<String>>,
}

impl MockSource {
	pub fn with_branch(mut self, branch: Option<&str>) -> Self {
		self.branch = Some(Ok(branch.map(str::to_owned)));
		self
	}

	pub fn with_branch_error(mut self, error: Error) -> Self {
		self.branch = Some(Err(error));
		self
	}

	pub fn with_listing(mut self, path: &str, entries: &[(&str, EntryKind)]) -> Self {
		let entries = entries
			.iter()
			.map(|(name, kind)| ContentEntry {
				name: (*name).to_owned(),
				path: join_path(path, name),
				kind: *kind,
			})
			.collect();
		self.listings.insert(path.to_owned(), entries);
		self
	}

	pub fn with_file(mut self, path: &str, file: FileContent) -> Self {
		self.files.insert(path.to_owned(), file);
		self
	}

	pub fn with_raw(mut self, path: &str, text: &str) -> Self {
		self.raw.insert(path.to_owned(), text.to_owned());
		self
	}

	pub fn request_count(&self) -> usize {
		self.requests.borrow().len()
	}

	pub fn requests(&self) -> Vec<String> {
		self.requests.borrow().clone()
	}

	fn respond<T: 'static>(&self, request: String, value: Option<T>) -> LocalBoxFuture<'static, Result<T, Error>> {
		self.requests.borrow_mut().push(request);
		Box::pin(futures::future::ready(value.ok_or(Error::Status(404))))
	}
}

impl RepositorySource for MockSource {
	fn default_branch(&self, _owner: &str, _name: &str) -> LocalBoxFuture<'static, Result<Option<String>, Error>> {
		self.requests.borrow_mut().push("branch".to_owned());
		let result = self.branch.clone().unwrap_or_else(|| Ok(Some("main".to_owned())));
		Box::pin(futures::future::ready(result))
	}

	fn list_folder(&self, _repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<Vec<ContentEntry>, Error>> {
		self.respond(format!("list:{path}"), self.listings.get(path).cloned())
	}

	fn file(&self, _repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<FileContent, Error>> {
		self.respond(format!("file:{path}"), self.files.get(path).cloned())
	}

	fn raw_file(&self, _repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<String, Error>> {
		self.respond(format!("raw:{path}"), self.raw.get(path).cloned())
	}
}
