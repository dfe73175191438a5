use super::RepositoryRef;
use futures_util::future::LocalBoxFuture;
use github::{ContentEntry, FileContent, GithubClient};

/// The remote end of a [`FileTree`](super::FileTree): answers listing and content requests.
pub trait RepositorySource {
	/// The default branch of a repository, if the host reports one.
	fn default_branch(&self, owner: &str, name: &str) -> LocalBoxFuture<'static, Result<Option<String>, github::Error>>;

	/// The immediate children of a folder, `""` being the repository root.
	fn list_folder(
		&self,
		repo: &RepositoryRef,
		path: &str,
	) -> LocalBoxFuture<'static, Result<Vec<ContentEntry>, github::Error>>;

	/// The metadata of a file, which may embed its body.
	fn file(&self, repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<FileContent, github::Error>>;

	/// The plain text of a file.
	fn raw_file(&self, repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<String, github::Error>>;
}

impl RepositorySource for GithubClient {
	fn default_branch(&self, owner: &str, name: &str) -> LocalBoxFuture<'static, Result<Option<String>, github::Error>> {
		let request = self.get_repository(github::repos::get::Args { owner, repo: name });
		Box::pin(async move { Ok(request.await?.default_branch) })
	}

	fn list_folder(
		&self,
		repo: &RepositoryRef,
		path: &str,
	) -> LocalBoxFuture<'static, Result<Vec<ContentEntry>, github::Error>> {
		self.list_directory(github::repos::contents::list::Args {
			owner: &repo.owner,
			repo: &repo.name,
			path,
			version: &repo.default_branch,
		})
	}

	fn file(&self, repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<FileContent, github::Error>> {
		self.get_file(github::repos::contents::get::Args {
			owner: &repo.owner,
			repo: &repo.name,
			path,
			version: &repo.default_branch,
		})
	}

	fn raw_file(&self, repo: &RepositoryRef, path: &str) -> LocalBoxFuture<'static, Result<String, github::Error>> {
		self.get_file_content(github::repos::contents::raw::Args {
			owner: &repo.owner,
			repo: &repo.name,
			path,
			version: &repo.default_branch,
		})
	}
}
