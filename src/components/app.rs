use super::{Contact, Header, Home, Projects, Skills};
use crate::i18n::{use_language, Broadcaster, Language, LanguageProvider};
use yew::prelude::*;

#[function_component]
pub fn App() -> Html {
	let channel = use_memo((), |_| Broadcaster::<Language>::default());
	html! {
		<LanguageProvider channel={(*channel).clone()}>
			<DocumentLanguage />
			<div class="App">
				<Header />
				<main class="App__main">
					<Home />
					<Projects />
					<Skills />
					<Contact />
				</main>
			</div>
		</LanguageProvider>
	}
}

/// Mirrors the active language onto the `lang` attribute of the document.
#[function_component]
fn DocumentLanguage() -> Html {
	let language = use_language().language();
	use_effect_with(language, |language| {
		if let Some(root) = gloo_utils::document().document_element() {
			if let Err(err) = root.set_attribute("lang", language.code()) {
				log::warn!("Failed to set document language: {err:?}");
			}
		}
	});
	Html::default()
}
