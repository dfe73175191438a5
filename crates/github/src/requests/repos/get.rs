use crate::{check_status, Error, RepositoryMetadata, GITHUB_API};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;

pub struct Args<'a> {
	pub owner: &'a str,
	pub repo: &'a str,
}

impl crate::GithubClient {
	/// Fetches the metadata of a repository, most notably its default branch.
	pub fn get_repository(&self, request: Args<'_>) -> LocalBoxFuture<'static, Result<RepositoryMetadata, Error>> {
		// https://docs.github.com/en/rest/repos/repos?apiVersion=2022-11-28#get-a-repository
		let builder = self
			.client
			.get(format!("{GITHUB_API}/repos/{}/{}", request.owner, request.repo));
		let builder = self.insert_rest_headers(builder, None);
		let owner = request.owner.to_owned();
		let name = request.repo.to_owned();
		Box::pin(async move {
			#[derive(Deserialize)]
			struct Data {
				#[serde(default)]
				default_branch: Option<String>,
			}
			let response = check_status(builder.send().await?)?;
			let data = response.json::<serde_json::Value>().await?;
			let data = serde_json::from_value::<Data>(data)?;
			log::debug!(target: "github", "{owner}/{name} default branch is {:?}", data.default_branch);
			Ok(RepositoryMetadata {
				owner,
				name,
				default_branch: data.default_branch,
			})
		})
	}
}
