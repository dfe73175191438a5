use crate::i18n::{use_language, Language};
use enumset::EnumSet;
use yew::prelude::*;

#[function_component]
pub fn LanguageSwitcher() -> Html {
	let context = use_language();
	let current = context.language();

	let set_language = context.set_callback();

	html! {
		<div class="language-switcher">
			<div class="language-switcher__current">
				<span class="language-switcher__flag">{current.flag()}</span>
				<span class="language-switcher__name">{current.display_name()}</span>
			</div>
			<div class="language-switcher__dropdown">
				{EnumSet::<Language>::all().into_iter().map(|language| {
					let classes = classes!(
						"language-switcher__option",
						(language == current).then_some("language-switcher__option--active"),
					);
					let onclick = set_language.reform(move |_: MouseEvent| language);
					html! {
						<button class={classes} {onclick}>
							<span class="language-switcher__flag">{language.flag()}</span>
							<span class="language-switcher__name">{language.display_name()}</span>
						</button>
					}
				}).collect::<Vec<_>>()}
			</div>
		</div>
	}
}
