use super::LanguageSwitcher;
use crate::i18n::use_language;
use yew::prelude::*;

static SECTIONS: [(&str, &str); 4] = [
	("#home", "nav.home"),
	("#projects", "nav.projects"),
	("#skills", "nav.skills"),
	("#contact", "nav.contact"),
];

#[function_component]
pub fn Header() -> Html {
	let language = use_language();
	let menu_open = use_state_eq(|| false);

	let toggle_menu = Callback::from({
		let menu_open = menu_open.clone();
		move |_: MouseEvent| menu_open.set(!*menu_open)
	});
	// Following a link on a small screen also closes the menu.
	let close_menu = Callback::from({
		let menu_open = menu_open.clone();
		move |_: MouseEvent| menu_open.set(false)
	});

	html! {
		<header class="header">
			<div class="header__container">
				<div class="header__logo">
					<span class="header__logo-text">{"AleamZ"}</span>
				</div>
				<nav class={classes!("header__nav", menu_open.then_some("header__nav--open"))}>
					<ul class="header__nav-list">
						{SECTIONS.iter().map(|(href, key)| html! {
							<li class="header__nav-item">
								<a href={*href} class="header__nav-link" onclick={close_menu.clone()}>
									{language.text(key)}
								</a>
							</li>
						}).collect::<Vec<_>>()}
					</ul>
				</nav>
				<LanguageSwitcher />
				<button
					class={classes!("header__menu-toggle", menu_open.then_some("header__menu-toggle--open"))}
					onclick={toggle_menu}
				>
					<span></span>
					<span></span>
					<span></span>
				</button>
			</div>
		</header>
	}
}
