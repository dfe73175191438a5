use crate::i18n::use_language;
use yew::prelude::*;

#[function_component]
pub fn Spinner() -> Html {
	let language = use_language();
	html! {
		<div class="spinner-border" role="status">
			<span class="visually-hidden">{language.text("common.loading")}</span>
		</div>
	}
}
