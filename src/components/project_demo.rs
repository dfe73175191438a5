use super::{FileTreeView, PreviewFrame, Spinner};
use crate::{
	data::Project,
	i18n::use_language,
	repo_browser::session::{load_children, load_content, load_repository, Action, BrowserState},
};
use github::GithubClient;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long the live demo may take to load before the note about blocked embedding is shown.
static EMBED_FALLBACK_MS: u32 = 3000;

#[derive(Clone, PartialEq, Properties)]
pub struct ProjectDemoProps {
	pub project: &'static Project,
	pub on_close: Callback<()>,
}

#[function_component]
pub fn ProjectDemo(ProjectDemoProps { project, on_close }: &ProjectDemoProps) -> Html {
	let language = use_language();
	let state = use_reducer(BrowserState::default);
	let next_session = use_mut_ref(|| 0u64);
	let client = use_memo((), |_| match GithubClient::new(None, crate::APP_USER_AGENT) {
		Ok(client) => Some(client),
		Err(err) => {
			log::error!("Failed to create github client: {err}");
			None
		}
	});

	// Every project opened in the modal starts a new browsing session.
	use_effect_with(*project, {
		let state = state.clone();
		let client = client.clone();
		move |project: &&'static Project| {
			let session = {
				let mut next_session = next_session.borrow_mut();
				*next_session += 1;
				*next_session
			};
			let client = (*client).clone();
			match (project.has_public_source(), client) {
				(true, Some(client)) => {
					state.dispatch(Action::Open { session, loading: true });
					let url = project.github;
					wasm_bindgen_futures::spawn_local(async move {
						let action = load_repository(&client, session, url).await;
						state.dispatch(action);
					});
				}
				_ => state.dispatch(Action::Open { session, loading: false }),
			}
		}
	});

	let on_toggle = Callback::from({
		let state = state.clone();
		let client = client.clone();
		move |path: String| {
			let requires_listing = state.toggle_requires_listing(&path);
			state.dispatch(Action::Toggle { path: path.clone() });
			if !requires_listing {
				return;
			}
			let (Some(client), Some(repository)) = ((*client).clone(), state.repository.clone()) else {
				return;
			};
			let session = state.session;
			let state = state.clone();
			wasm_bindgen_futures::spawn_local(async move {
				state.dispatch(load_children(&client, session, &repository, path).await);
			});
		}
	});

	let on_select = Callback::from({
		let state = state.clone();
		let client = client.clone();
		move |path: String| {
			let requires_fetch = state.selection_requires_fetch(&path);
			state.dispatch(Action::Select { path: path.clone() });
			if !requires_fetch {
				return;
			}
			let (Some(client), Some(repository)) = ((*client).clone(), state.repository.clone()) else {
				return;
			};
			let session = state.session;
			let state = state.clone();
			wasm_bindgen_futures::spawn_local(async move {
				state.dispatch(load_content(&client, session, &repository, path).await);
			});
		}
	});

	let close = on_close.reform(|_: MouseEvent| ());
	let dismiss_notice = {
		let state = state.clone();
		Callback::from(move |_: MouseEvent| state.dispatch(Action::DismissNotice))
	};

	html! {
		<div class="project-demo">
			<div class="project-demo__overlay" onclick={close.clone()}></div>
			<div class="project-demo__modal">
				<div class="project-demo__header">
					<h2 class="project-demo__title">
						<span class="project-demo__title-icon">{project.icon}</span>
						{language.text(project.title_key)}
					</h2>
					<button class="project-demo__close-btn" aria-label={language.text("demo.close").to_owned()} onclick={close}>
						{"✕"}
					</button>
				</div>
				if let Some(notice) = state.notice {
					<div class="project-demo__notice" role="alert">
						<span>{language.text(notice.text_key())}</span>
						<button class="project-demo__notice-dismiss" onclick={dismiss_notice}>
							{language.text("demo.dismiss")}
						</button>
					</div>
				}
				<div class="project-demo__content">
					<LiveDemo {project} />
					<div class="project-demo__code-section">
						<h3 class="project-demo__section-title">{language.text("demo.sourceCode")}</h3>
						if project.source_private {
							<div class="project-demo__file-loading" style="padding: 1rem;">
								{"🔒 "}{language.text("demo.sourcePrivate")}
							</div>
						} else {
							<SourceBrowser state={state.clone()} {on_toggle} {on_select} />
						}
					</div>
				</div>
				<div class="project-demo__footer">
					<div class="project-demo__technologies">
						<span class="project-demo__technologies-label">{language.text("demo.technologies")}</span>
						{project.technologies.iter().map(|technology| html! {
							<span class="project-demo__tech-tag">{*technology}</span>
						}).collect::<Vec<_>>()}
					</div>
				</div>
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct LiveDemoProps {
	project: &'static Project,
}

#[function_component]
fn LiveDemo(LiveDemoProps { project }: &LiveDemoProps) -> Html {
	let language = use_language();
	let loaded = use_state_eq(|| false);
	let show_fallback = use_state_eq(|| false);

	// Sites which refuse to be framed never fire `load`, so offer a link after a while.
	use_effect_with((*project, *loaded), {
		let show_fallback = show_fallback.clone();
		move |(_, loaded): &(&'static Project, bool)| {
			show_fallback.set(false);
			let timeout = (!*loaded).then(|| Timeout::new(EMBED_FALLBACK_MS, move || show_fallback.set(true)));
			move || drop(timeout)
		}
	});

	let onload = Callback::from({
		let loaded = loaded.clone();
		move |_: ()| loaded.set(true)
	});

	let preview = match project.demo_source() {
		Some(url) => html! {
			<PreviewFrame {url} title={format!("{} Demo", language.text(project.title_key))} class="project-demo__iframe" {onload}>
				if *show_fallback {
					<div class="project-demo__demo-placeholder" style="position: absolute; inset: 0;">
						<div class="project-demo__demo-placeholder-icon">{"🔓"}</div>
						<p>{language.text("demo.embedBlocked")}</p>
						<a href={url} target="_blank" rel="noopener noreferrer" class="project-demo__demo-link">
							{language.text("demo.openLive")}
						</a>
					</div>
				}
			</PreviewFrame>
		},
		None => html! {
			<div class="project-demo__demo-placeholder">
				<div class="project-demo__demo-placeholder-icon">{"🚀"}</div>
				<p>{language.text("demo.unavailable")}</p>
				<p>{language.text("demo.checkLive")}</p>
			</div>
		},
	};

	html! {
		<div class="project-demo__demo-section">
			<h3 class="project-demo__section-title">{language.text("demo.liveDemo")}</h3>
			{preview}
			<div class="project-demo__demo-actions">
				<a href={project.live} target="_blank" rel="noopener noreferrer" class="project-demo__demo-link">
					{"🌐 "}{language.text("demo.openLive")}
				</a>
				if project.has_public_source() {
					<a href={project.github} target="_blank" rel="noopener noreferrer" class="project-demo__demo-link">
						{"🐙 "}{language.text("demo.viewGithub")}
					</a>
				}
			</div>
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct SourceBrowserProps {
	state: UseReducerHandle<BrowserState>,
	on_toggle: Callback<String>,
	on_select: Callback<String>,
}

#[function_component]
fn SourceBrowser(props: &SourceBrowserProps) -> Html {
	let language = use_language();
	let state = &*props.state;
	let tree = state.display_tree().into_owned();

	let tree_view = match state.is_loading_tree {
		true => html! {
			<div class="project-demo__file-loading">
				<Spinner />
				{language.text("demo.loadingTree")}
			</div>
		},
		false => html! {
			<FileTreeView
				tree={tree.clone()}
				expanded={state.expanded.clone()}
				selected={state.selected.clone()}
				on_toggle={props.on_toggle.clone()}
				on_select={props.on_select.clone()}
			/>
		},
	};

	let selected = state.selected.as_deref().and_then(|path| tree.get(path));
	let viewer = match selected {
		None => html! {
			<div class="project-demo__code-placeholder">
				<div class="project-demo__code-placeholder-icon">{"💻"}</div>
				<p>{language.text("demo.selectFile")}</p>
			</div>
		},
		Some(node) if state.is_loading_file(node.path()) => html! {
			<div class="project-demo__file-loading">{language.text("demo.loadingFile")}</div>
		},
		Some(node) => {
			let content = node
				.content()
				.map(str::to_owned)
				.unwrap_or_else(|| crate::repo_browser::UNAVAILABLE_TEXT.to_owned());
			html! {
				<pre class="project-demo__code-text"><code>{content}</code></pre>
			}
		}
	};
	let viewer_title = match selected {
		Some(node) => format!("📄 {}", node.name()),
		None => language.text("demo.selectFile").to_owned(),
	};

	html! {
		<div class="project-demo__code-container">
			<div class="project-demo__file-tree">
				<h4 class="project-demo__file-tree-title">{"📁 "}{language.text("demo.structure")}</h4>
				{tree_view}
			</div>
			<div class="project-demo__code-viewer">
				<h4 class="project-demo__code-viewer-title">{viewer_title}</h4>
				<div class="project-demo__code-content">{viewer}</div>
			</div>
		</div>
	}
}
