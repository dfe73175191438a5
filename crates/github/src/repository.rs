#[derive(Clone, Debug, PartialEq)]
pub struct RepositoryMetadata {
	pub owner: String,
	pub name: String,
	/// Absent for repositories which have never been initialized.
	pub default_branch: Option<String>,
}
