use crate::{check_status, contents_url, Error, FileContent};
use futures_util::future::LocalBoxFuture;

pub struct Args<'a> {
	pub owner: &'a str,
	pub repo: &'a str,
	/// The path to the file in the repository.
	pub path: &'a str,
	pub version: &'a str,
}

impl crate::GithubClient {
	/// Fetches the metadata of a file in a repository.
	/// Files up to 1 MB carry their content inline (see [`FileContent::decode`]).
	pub fn get_file(&self, request: Args<'_>) -> LocalBoxFuture<'static, Result<FileContent, Error>> {
		// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#get-repository-content
		let url = contents_url(request.owner, request.repo, request.path, request.version);
		let builder = self.client.get(url);
		let builder = self.insert_rest_headers(builder, None);
		Box::pin(async move {
			let response = check_status(builder.send().await?)?;
			let data = response.json::<serde_json::Value>().await?;
			Ok(serde_json::from_value::<FileContent>(data)?)
		})
	}
}
