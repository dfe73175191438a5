use crate::{i18n::use_language, utility::typewriter::Typewriter};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

static NAME: &str = "Nguyen Tien Dat";
static ROLE: &str = "Fullstack Dev";

fn code_sample(language: &crate::i18n::LanguageContext) -> String {
	format!(
		"class Developer {{
  constructor() {{
    this.name = \"{NAME}\";
    this.role = \"{ROLE}\";
    this.skills = ['React', 'TypeScript', 'Node.js', 'ASP.NET', 'MySQL'];
  }}

  code() {{
    return \"{}\";
  }}

  learn() {{
    return \"{}\";
  }}
}}",
		language.text("home.code.building"),
		language.text("home.code.learning"),
	)
}

#[function_component]
pub fn Home() -> Html {
	let language = use_language();
	let typewriter = use_state(|| Typewriter::new(&format!("{NAME} - {ROLE}")));

	// Each state of the typewriter schedules its successor; unmounting cancels the pending step.
	use_effect_with((*typewriter).clone(), {
		let typewriter = typewriter.clone();
		move |current: &Typewriter| {
			let mut next = current.clone();
			let millis = current.delay().as_millis() as u32;
			let timeout = Timeout::new(millis, move || {
				next.step();
				typewriter.set(next);
			});
			move || drop(timeout)
		}
	});

	html! {
		<section id="home" class="home">
			<div class="home__container">
				<div class="home__content">
					<div class="home__greeting">
						<span class="home__greeting-text">{language.text("home.greeting")}</span>
						<div class="home__greeting-binary">{"01001000 01100101 01101100 01101100 01101111"}</div>
					</div>
					<h1 class="home__title">
						<span class="home__title-prefix">{"> "}</span>
						<span class="home__title-text">{typewriter.display()}</span>
						<span class="home__title-cursor">{"|"}</span>
					</h1>
					<p class="home__subtitle">{language.text("home.subtitle")}</p>
					<div class="home__description">
						<p>{language.text("home.description")}</p>
					</div>
					<div class="home__stats">
						{[("1", "home.stats.experience"), ("3", "home.stats.projects"), ("100%", "home.stats.satisfaction")]
							.into_iter()
							.map(|(number, key)| html! {
								<div class="home__stat">
									<span class="home__stat-number">{number}</span>
									<span class="home__stat-label">{language.text(key)}</span>
								</div>
							})
							.collect::<Vec<_>>()}
					</div>
					<div class="home__cta">
						<a href="#projects" class="home__cta-button home__cta-button--primary">
							{language.text("home.cta.viewWork")}
						</a>
						<a href="#contact" class="home__cta-button home__cta-button--secondary">
							{language.text("home.cta.getInTouch")}
						</a>
					</div>
				</div>
				<div class="home__visual">
					<div class="home__code-block">
						<div class="home__code-header">
							<span class="home__code-dot home__code-dot--red"></span>
							<span class="home__code-dot home__code-dot--yellow"></span>
							<span class="home__code-dot home__code-dot--green"></span>
							<span class="home__code-title">{"developer.js"}</span>
						</div>
						<div class="home__code-content">
							<pre><code>{code_sample(&language)}</code></pre>
						</div>
					</div>
				</div>
			</div>
		</section>
	}
}
