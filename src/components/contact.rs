use crate::{data::CONTACTS, i18n::use_language};
use yew::prelude::*;

#[function_component]
pub fn Contact() -> Html {
	let language = use_language();
	html! {
		<section id="contact" class="contact">
			<div class="contact__container">
				<div class="contact__header">
					<h2 class="contact__title">
						<span class="contact__title-prefix">{"> "}</span>
						{language.text("contact.title")}
					</h2>
					<p class="contact__subtitle">{language.text("contact.subtitle")}</p>
				</div>
				<div class="contact__content">
					<div class="contact__info">
						{CONTACTS.iter().map(|entry| html! {
							<div class="contact__info-item">
								<div class="contact__info-icon">{entry.icon}</div>
								<div class="contact__info-content">
									<h3>{language.text(entry.title_key)}</h3>
									<p>{language.text(entry.value)}</p>
									{entry.link.map(|(href, label_key)| html! {
										<a {href} target="_blank" rel="noopener noreferrer" class="contact__info-link">
											{language.text(label_key)}
										</a>
									})}
								</div>
							</div>
						}).collect::<Vec<_>>()}
					</div>
				</div>
				<div class="contact__footer">
					<p class="contact__footer-text">{language.text("contact.footer")}</p>
				</div>
			</div>
		</section>
	}
}
