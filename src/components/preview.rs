use super::use_window_resize;
use crate::utility::view_fit::{Fit, PREVIEW_HEIGHT, PREVIEW_WIDTH};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct PreviewFrameProps {
	pub url: AttrValue,
	pub title: AttrValue,
	/// Prefix of the BEM classes of the container, wrapper and iframe.
	pub class: &'static str,
	#[prop_or(false)]
	pub lazy: bool,
	#[prop_or_default]
	pub onload: Callback<()>,
	/// Drawn over the scaled page, e.g. loading or fallback notes.
	#[prop_or_default]
	pub children: Children,
}

/// An iframe rendered at desktop size and scaled down to fit its container.
#[function_component]
pub fn PreviewFrame(props: &PreviewFrameProps) -> Html {
	let container = use_node_ref();
	let fit = use_state_eq(Fit::default);

	let measure = {
		let container = container.clone();
		let fit = fit.clone();
		move || {
			let Some(element) = container.cast::<web_sys::Element>() else {
				return;
			};
			fit.set(Fit::within(element.client_width() as f64, element.client_height() as f64));
		}
	};
	use_effect_with((), {
		let measure = measure.clone();
		move |_| measure()
	});
	use_window_resize(measure);

	let onload = props.onload.reform(|_: Event| ());
	let iframe_style = format!("width: {PREVIEW_WIDTH}px; height: {PREVIEW_HEIGHT}px;");
	html! {
		<div class={format!("{}-container", props.class)} ref={container}>
			<div class={format!("{}-wrapper", props.class)} style={fit.to_css()}>
				<iframe
					src={props.url.clone()}
					title={props.title.clone()}
					class={format!("{}-iframe", props.class)}
					style={iframe_style}
					frameborder="0"
					loading={props.lazy.then_some("lazy")}
					{onload}
				/>
				{props.children.clone()}
			</div>
		</div>
	}
}
