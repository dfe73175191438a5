use super::{preference, Broadcaster, Language};
use yew::prelude::*;

/// The active display language, shared with every component below a [`LanguageProvider`].
#[derive(Clone, PartialEq, Default, Debug)]
pub struct LanguageContext {
	language: Language,
	channel: Broadcaster<Language>,
}

impl LanguageContext {
	pub fn language(&self) -> Language {
		self.language
	}

	pub fn text<'a>(&self, key: &'a str) -> &'a str {
		self.language.text(key)
	}

	/// Persists the language and notifies every subscriber of the change.
	pub fn set(&self, language: Language) {
		log::debug!("Setting language to {language:?}");
		preference::store(language);
		self.channel.broadcast(&language);
	}

	pub fn set_callback(&self) -> Callback<Language> {
		let context = self.clone();
		Callback::from(move |language| context.set(language))
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct LanguageProviderProps {
	/// Channel over which language changes are announced to the whole page.
	pub channel: Broadcaster<Language>,
	#[prop_or_default]
	pub children: Children,
}

#[function_component]
pub fn LanguageProvider(LanguageProviderProps { channel, children }: &LanguageProviderProps) -> Html {
	let language = use_state_eq(preference::load);

	// Listen for changes for as long as this provider is mounted.
	use_effect_with(channel.clone(), {
		let language = language.clone();
		move |channel: &Broadcaster<Language>| {
			let subscription = channel.subscribe(move |value: &Language| language.set(*value));
			move || drop(subscription)
		}
	});

	let context = LanguageContext {
		language: *language,
		channel: channel.clone(),
	};
	html! {
		<ContextProvider<LanguageContext> {context}>
			{children.clone()}
		</ContextProvider<LanguageContext>>
	}
}

/// The context of the nearest [`LanguageProvider`], or the default language outside of one.
#[hook]
pub fn use_language() -> LanguageContext {
	use_context::<LanguageContext>().unwrap_or_default()
}
