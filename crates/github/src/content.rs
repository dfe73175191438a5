use crate::Error;
use serde::Deserialize;

/// The type of an item in a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
	Dir,
	File,
	Symlink,
	Submodule,
	Other,
}

impl From<&str> for EntryKind {
	fn from(value: &str) -> Self {
		match value {
			"dir" => Self::Dir,
			"file" => Self::File,
			"symlink" => Self::Symlink,
			"submodule" => Self::Submodule,
			_ => Self::Other,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
	pub name: String,
	/// Path of the entry relative to the repository root.
	pub path: String,
	pub kind: EntryKind,
}

impl ContentEntry {
	pub(crate) fn list_from_value(data: serde_json::Value) -> Result<Vec<Self>, Error> {
		#[derive(Deserialize)]
		struct Entry {
			name: String,
			#[serde(default)]
			path: String,
			#[serde(rename = "type")]
			type_: String,
		}
		let serde_json::Value::Array(items) = data else {
			return Err(Error::InvalidResponse("Expected a directory listing".to_owned().into()));
		};
		let mut entries = Vec::with_capacity(items.len());
		for item in items {
			let entry = serde_json::from_value::<Entry>(item)?;
			entries.push(Self {
				kind: EntryKind::from(entry.type_.as_str()),
				name: entry.name,
				path: entry.path,
			});
		}
		Ok(entries)
	}
}

/// The metadata of a single file, possibly carrying the file's body inline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FileContent {
	#[serde(default)]
	pub content: Option<String>,
	#[serde(default)]
	pub encoding: Option<String>,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
#[error("Invalid base64 content: {0}")]
pub struct DecodeError(pub base64ct::Error);

impl FileContent {
	/// Decodes the inline body into text.
	/// Returns None if there is no inline body, or it uses an encoding other than base64
	/// (github reports `none` for files too large to embed).
	pub fn decode(&self) -> Option<Result<String, DecodeError>> {
		use base64ct::{Base64, Encoding};
		let content = self.content.as_deref().filter(|content| !content.is_empty())?;
		if self.encoding.as_deref() != Some("base64") {
			return None;
		}
		// github wraps the encoded body every 60 characters
		let compact = content.replace(['\n', '\r'], "");
		Some(match Base64::decode_vec(&compact) {
			Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
			Err(err) => Err(DecodeError(err)),
		})
	}
}
