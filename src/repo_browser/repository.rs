use super::{ListingError, ParseError, RepositorySource};

/// Used when the hosting api does not report a default branch.
pub static FALLBACK_BRANCH: &str = "main";

/// The owner/name pair named by a repository url.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryId {
	pub owner: String,
	pub name: String,
}

impl RepositoryId {
	/// Parses `<scheme>://<host>/<owner>/<name>[...]`. The scheme may be omitted.
	/// Anything after the first `.` in the name is dropped (e.g. a `.git` suffix).
	pub fn parse(url: &str) -> Result<Self, ParseError> {
		let error = || ParseError(url.to_owned());
		let url_str = url.trim();
		let parsed = match url::Url::parse(url_str) {
			Ok(parsed) => parsed,
			Err(url::ParseError::RelativeUrlWithoutBase) if !url_str.is_empty() => {
				url::Url::parse(&format!("https://{url_str}")).map_err(|_| error())?
			}
			Err(_) => return Err(error()),
		};
		let mut segments = parsed.path_segments().ok_or_else(error)?.filter(|segment| !segment.is_empty());
		let owner = segments.next().ok_or_else(error)?;
		let name = segments.next().ok_or_else(error)?;
		let name = name.split('.').next().unwrap_or_default();
		if name.is_empty() {
			return Err(error());
		}
		Ok(Self {
			owner: owner.to_owned(),
			name: name.to_owned(),
		})
	}
}

impl std::str::FromStr for RepositoryId {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl std::fmt::Display for RepositoryId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.owner, self.name)
	}
}

/// A repository whose default branch is known.
/// Every listing and content request made while a view is open uses the same reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepositoryRef {
	pub owner: String,
	pub name: String,
	pub default_branch: String,
}

impl RepositoryRef {
	pub fn id(&self) -> RepositoryId {
		RepositoryId {
			owner: self.owner.clone(),
			name: self.name.clone(),
		}
	}
}

/// Resolves a repository url into a reference, issuing one request for the default branch.
/// Unrecognized urls resolve to `None` without any request.
pub async fn resolve_repository<S>(source: &S, url: &str) -> Result<Option<RepositoryRef>, ListingError>
where
	S: RepositorySource + ?Sized,
{
	let id = match RepositoryId::parse(url) {
		Ok(id) => id,
		Err(err) => {
			log::debug!("{err}");
			return Ok(None);
		}
	};
	let branch = source.default_branch(&id.owner, &id.name).await;
	let branch = branch.map_err(|error| ListingError::Repository {
		owner: id.owner.clone(),
		name: id.name.clone(),
		error,
	})?;
	Ok(Some(RepositoryRef {
		owner: id.owner,
		name: id.name,
		default_branch: branch.unwrap_or_else(|| FALLBACK_BRANCH.to_owned()),
	}))
}
