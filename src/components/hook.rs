use gloo_events::EventListener;
use web_sys::{Event, EventTarget};
use yew::prelude::*;
use yew_hooks::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSource {
	Document,
	Window,
}

impl EventSource {
	fn target(self) -> EventTarget {
		match self {
			Self::Document => gloo_utils::document().into(),
			Self::Window => gloo_utils::window().into(),
		}
	}
}

/// Calls `callback` for each of `event_types` dispatched to `source` while the component is mounted.
#[hook]
pub fn use_event_listener<F>(source: EventSource, event_types: &'static [&'static str], callback: F)
where
	F: Fn(&Event) + 'static,
{
	let callback = use_latest(callback);
	use_effect_with((source, event_types), move |(source, event_types)| {
		let target = source.target();
		let listeners = event_types
			.iter()
			.map(|event_type| {
				let callback = callback.clone();
				EventListener::new(&target, *event_type, move |event| (*callback.current())(event))
			})
			.collect::<Vec<_>>();
		move || drop(listeners)
	});
}

/// Calls `callback` whenever the window is resized or the device changes orientation.
#[hook]
pub fn use_window_resize<F>(callback: F)
where
	F: Fn() + 'static,
{
	use_event_listener(EventSource::Window, &["resize", "orientationchange"], move |_| callback());
}
