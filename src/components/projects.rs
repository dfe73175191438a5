use super::{use_event_listener, EventSource, PreviewFrame, ProjectDemo};
use crate::{
	data::{filter_projects, Category, Project},
	i18n::use_language,
	utility::carousel::{CardTransform, Navigation},
};
use enumset::EnumSet;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
struct CardThumbProps {
	project: &'static Project,
}

#[function_component]
fn CardThumb(CardThumbProps { project }: &CardThumbProps) -> Html {
	let language = use_language();
	let loaded = use_state_eq(|| false);
	match (project.demo_source(), project.preview_image) {
		(Some(url), _) => {
			let onload = Callback::from({
				let loaded = loaded.clone();
				move |_: ()| loaded.set(true)
			});
			html! {
				<PreviewFrame url={url} title="Project thumbnail" class="projects__thumb" lazy={true} {onload}>
					if !*loaded {
						<div class="projects__thumb-placeholder">{language.text("projects.preview.loading")}</div>
					}
				</PreviewFrame>
			}
		}
		(None, Some(image)) => html! {
			<img src={image} alt="Site preview" class="projects__thumb-image" />
		},
		(None, None) => html! {
			<div class="projects__thumb-placeholder">{language.text("projects.preview.unavailable")}</div>
		},
	}
}

#[function_component]
pub fn Projects() -> Html {
	let language = use_language();
	let category = use_state_eq(|| None::<Category>);
	let active = use_state_eq(|| 0usize);
	let selected = use_state_eq(|| None::<&'static Project>);

	let projects = filter_projects(*category);
	let count = projects.len();

	let navigate = Callback::from({
		let active = active.clone();
		move |navigation: Navigation| active.set(navigation.apply(*active, count))
	});
	use_event_listener(EventSource::Document, &["keydown"], {
		let navigate = navigate.clone();
		let selected = selected.clone();
		move |event: &web_sys::Event| {
			let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
				return;
			};
			if selected.is_some() {
				return;
			}
			if let Some(navigation) = Navigation::from_key(&event.key()) {
				navigate.emit(navigation);
			}
		}
	});

	let filters = std::iter::once(None).chain(EnumSet::<Category>::all().into_iter().map(Some));
	let filters = filters.map(|value: Option<Category>| {
		let onclick = Callback::from({
			let category = category.clone();
			let active = active.clone();
			move |_: MouseEvent| {
				category.set(value);
				active.set(0);
			}
		});
		let text_key = value.map_or("projects.filter.all", |value| value.text_key());
		let classes = classes!("projects__filter-btn", (*category == value).then_some("projects__filter-btn--active"));
		html! {
			<button class={classes} {onclick}>{language.text(text_key)}</button>
		}
	});

	let cards = projects.iter().copied().enumerate().map(|(index, project)| {
		let is_active = index == *active;
		let onclick = Callback::from({
			let active = active.clone();
			let selected = selected.clone();
			move |_: MouseEvent| match is_active {
				true => selected.set(Some(project)),
				false => active.set(index),
			}
		});
		let open_demo = Callback::from({
			let selected = selected.clone();
			move |event: MouseEvent| {
				event.stop_propagation();
				selected.set(Some(project));
			}
		});
		html! {
			<div
				key={project.id}
				class={classes!("projects__card3d", is_active.then_some("projects__card3d--active"))}
				style={CardTransform::for_card(index, *active).to_css()}
				{onclick}
			>
				<div class="projects__card3d-inner">
					<div class="projects__thumb">
						<CardThumb {project} />
					</div>
					<div class="projects__meta">
						<h3 class="projects__card-title">{language.text(project.title_key)}</h3>
						<p class="projects__card-description">{language.text(project.description_key)}</p>
						<div class="projects__meta-actions">
							if project.has_public_source() {
								<a href={project.github} class="projects__meta-btn" onclick={super::stop_propagation()}>
									{language.text("projects.view.source")}
								</a>
							}
							<a href={project.live} class="projects__meta-btn" onclick={super::stop_propagation()}>
								{language.text("projects.view.live")}
							</a>
							<button class="projects__meta-btn projects__meta-btn--primary" onclick={open_demo}>
								{language.text("common.open")}
							</button>
						</div>
					</div>
				</div>
			</div>
		}
	});

	let on_close = Callback::from({
		let selected = selected.clone();
		move |_: ()| selected.set(None)
	});

	html! {
		<section id="projects" class="projects">
			<div class="projects__container">
				<div class="projects__header">
					<h2 class="projects__title">
						<span class="projects__title-prefix">{"> "}</span>
						{language.text("projects.title")}
					</h2>
					<p class="projects__subtitle">{language.text("projects.subtitle")}</p>
				</div>
				<div class="projects__filters">{for filters}</div>
				<div class="projects__carousel">
					<button
						class="projects__nav projects__nav--prev"
						aria-label={language.text("common.prev").to_owned()}
						disabled={*active == 0}
						onclick={navigate.reform(|_: MouseEvent| Navigation::Previous)}
					>
						{"‹"}
					</button>
					<div class="projects__carousel-track">{for cards}</div>
					<button
						class="projects__nav projects__nav--next"
						aria-label={language.text("common.next").to_owned()}
						disabled={*active + 1 >= count}
						onclick={navigate.reform(|_: MouseEvent| Navigation::Next)}
					>
						{"›"}
					</button>
				</div>
				<div class="projects__cta">
					<p class="projects__cta-text">{language.text("projects.cta.text")}</p>
					<a href="#contact" class="projects__cta-button">{language.text("home.cta.getInTouch")}</a>
				</div>
			</div>
			if let Some(project) = *selected {
				<ProjectDemo {project} {on_close} />
			}
		</section>
	}
}
