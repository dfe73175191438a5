//! The display language chosen by the visitor, persisted in local storage.

use super::Language;
use gloo_storage::Storage;

pub static STORAGE_KEY: &str = "language";

/// Picks a language for a browser locale such as `vi-VN` or `ko`.
pub fn detect(locale: &str) -> Language {
	let locale = locale.to_lowercase();
	if locale.starts_with("vi") {
		Language::Vi
	} else if locale.starts_with("ko") {
		Language::Ko
	} else {
		Language::En
	}
}

/// The stored language, otherwise the one matching the browser's locale.
pub fn load() -> Language {
	let stored = gloo_storage::LocalStorage::raw().get_item(STORAGE_KEY).ok().flatten();
	match stored.map(|code| code.parse::<Language>()) {
		Some(Ok(language)) => language,
		Some(Err(err)) => {
			log::warn!("{err}");
			detect(&browser_locale())
		}
		None => detect(&browser_locale()),
	}
}

pub fn store(language: Language) {
	if let Err(err) = gloo_storage::LocalStorage::raw().set_item(STORAGE_KEY, language.code()) {
		log::error!("Failed to persist language {language:?}: {err:?}");
	}
}

fn browser_locale() -> String {
	web_sys::window()
		.and_then(|window| window.navigator().language())
		.unwrap_or_default()
}
