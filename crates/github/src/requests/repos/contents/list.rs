use crate::{check_status, contents_url, ContentEntry, Error};
use futures_util::future::LocalBoxFuture;

pub struct Args<'a> {
	pub owner: &'a str,
	pub repo: &'a str,
	/// The directory in the repository, empty for the root.
	pub path: &'a str,
	pub version: &'a str,
}

impl crate::GithubClient {
	/// Lists the immediate children of a directory in a repository.
	pub fn list_directory(&self, request: Args<'_>) -> LocalBoxFuture<'static, Result<Vec<ContentEntry>, Error>> {
		// https://docs.github.com/en/rest/repos/contents?apiVersion=2022-11-28#get-repository-content
		let url = contents_url(request.owner, request.repo, request.path, request.version);
		let builder = self.client.get(url);
		let builder = self.insert_rest_headers(builder, None);
		Box::pin(async move {
			let response = check_status(builder.send().await?)?;
			let data = response.json::<serde_json::Value>().await?;
			ContentEntry::list_from_value(data)
		})
	}
}
