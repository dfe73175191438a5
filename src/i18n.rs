use enumset::EnumSetType;
use std::str::FromStr;

mod broadcast;
pub use broadcast::*;
pub mod preference;
mod provider;
pub use provider::*;
mod translations;

#[derive(Debug, EnumSetType)]
pub enum Language {
	En,
	Vi,
	Ko,
}

impl Default for Language {
	fn default() -> Self {
		Self::En
	}
}

impl Language {
	/// The code the language is persisted as.
	pub fn code(&self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Vi => "vi",
			Self::Ko => "ko",
		}
	}

	pub fn display_name(&self) -> &'static str {
		match self {
			Self::En => "English",
			Self::Vi => "Tiếng Việt",
			Self::Ko => "한국어",
		}
	}

	pub fn flag(&self) -> &'static str {
		match self {
			Self::En => "🇺🇸",
			Self::Vi => "🇻🇳",
			Self::Ko => "🇰🇷",
		}
	}

	/// Looks up the display string for `key`, which is itself the fallback for unknown keys.
	pub fn text<'a>(&self, key: &'a str) -> &'a str {
		match translations::TRANSLATIONS.get(key) {
			Some(texts) => texts[*self as usize],
			None => key,
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid language {0:?}, expected one of: en, vi, ko")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
	type Err = UnknownLanguage;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"en" => Ok(Self::En),
			"vi" => Ok(Self::Vi),
			"ko" => Ok(Self::Ko),
			_ => Err(UnknownLanguage(s.to_owned())),
		}
	}
}
