use crate::{
	data::{skills_in, SkillCategory},
	i18n::use_language,
};
use enumset::EnumSet;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long after mounting the skill bars start filling.
static ANIMATE_DELAY_MS: u32 = 500;

static HOBBIES: [(&str, &str); 4] = [
	("✈️", "skills.hobbies.travel"),
	("⚽", "skills.hobbies.football"),
	("🎮", "skills.hobbies.gaming"),
	("🌱", "skills.hobbies.farming"),
];

#[function_component]
pub fn Skills() -> Html {
	let language = use_language();
	let animated = use_state_eq(|| false);

	use_effect_with((), {
		let animated = animated.clone();
		move |_| {
			let timeout = Timeout::new(ANIMATE_DELAY_MS, move || animated.set(true));
			move || drop(timeout)
		}
	});

	let categories = EnumSet::<SkillCategory>::all().into_iter().filter_map(|category| {
		let cards = skills_in(category)
			.enumerate()
			.map(|(index, skill)| {
				let width = if *animated { skill.level } else { 0 };
				let style = format!("width: {width}%; transition-delay: {}ms;", index * 100);
				html! {
					<div class="skills__skill-card">
						<div class="skills__skill-header">
							<span class="skills__skill-icon">{skill.icon}</span>
							<span class="skills__skill-name">{skill.name}</span>
						</div>
						<div class="skills__skill-bar">
							<div class="skills__skill-progress" {style}></div>
						</div>
						<div class="skills__skill-level">{format!("{}%", skill.level)}</div>
					</div>
				}
			})
			.collect::<Vec<_>>();
		(!cards.is_empty()).then(|| html! {
			<div class="skills__category">
				<h3 class="skills__category-title">{language.text(category.text_key())}</h3>
				<div class="skills__category-grid">{cards}</div>
			</div>
		})
	});

	html! {
		<section id="skills" class="skills">
			<div class="skills__container">
				<div class="skills__header">
					<h2 class="skills__title">
						<span class="skills__title-prefix">{"> "}</span>
						{language.text("skills.title")}
					</h2>
					<p class="skills__subtitle">{language.text("skills.subtitle")}</p>
				</div>
				<div class="skills__content">{for categories}</div>
				<div class="skills__hobbies">
					<h3 class="skills__hobbies-title">{language.text("skills.hobbies.title")}</h3>
					<div class="skills__hobbies-grid">
						{HOBBIES.iter().map(|(icon, key)| html! {
							<div class="skills__hobby">
								<div class="skills__hobby-icon">{*icon}</div>
								<h4>{language.text(key)}</h4>
								<p>{language.text(&format!("{key}.desc")).to_owned()}</p>
							</div>
						}).collect::<Vec<_>>()}
					</div>
				</div>
			</div>
		</section>
	}
}
