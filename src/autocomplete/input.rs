use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::FocusEvent;

use super::popup::Autocomplete;
use super::query::SuggestionView;
use crate::api::{Recommendation, WikipediaClient};
use crate::components::thumbnail::Thumbnail;

/// Text input that suggests Wikipedia titles as the user types.
///
/// `value` is owned by the form; every keystroke is reported through `on_change` right
/// away, while lookups only run after the configured quiet period.
#[component]
pub fn WikipediaInput(
	#[prop(into)] id: String,
	#[prop(into)] placeholder: String,
	#[prop(into)] value: Signal<String>,
	#[prop(into)] on_change: Callback<String>,
	#[prop(into)] disabled: Signal<bool>,
	#[prop(into)] invalid: Signal<bool>,
	client: WikipediaClient,
	debounce: Duration,
	input_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
	let client = StoredValue::new_local(client);
	let state = StoredValue::new(Autocomplete::new(debounce.as_millis() as f64));
	let suggestions = RwSignal::new(SuggestionView::Hidden);
	let timer = StoredValue::new(None::<TimeoutHandle>);
	let popup_ref = NodeRef::<leptos::html::Div>::new();

	let refresh = move || suggestions.set(state.with_value(|s| s.view()));

	let fire = move || {
		timer.set_value(None);
		let key = state
			.try_update_value(|s| s.flush())
			.flatten();
		refresh();
		let Some(key) = key else {
			return;
		};
		let client = client.get_value();
		spawn_local(async move {
			let result = client.search(&key).await.map_err(|err| {
				warn!("suggestions for {:?} failed: {}", key, err);
			});
			let current = state
				.try_update_value(|s| s.resolve(&key, result))
				.unwrap_or(false);
			if current {
				refresh();
			}
		});
	};

	let cancel = move || {
		if let Some(handle) = timer.get_value() {
			handle.clear();
		}
		timer.set_value(None);
	};

	let arm = move || {
		cancel();
		match set_timeout_with_handle(fire, debounce) {
			Ok(handle) => timer.set_value(Some(handle)),
			Err(_) => warn!("could not schedule suggestion lookup"),
		}
	};

	let on_input = move |ev: leptos::ev::Event| {
		let text = event_target_value(&ev);
		on_change.run(text.clone());
		let schedule = state
			.try_update_value(|s| s.on_input(&text, js_sys::Date::now()))
			.unwrap_or(false);
		if schedule {
			arm();
		} else {
			cancel();
		}
		refresh();
	};

	let on_focus = move |_: FocusEvent| {
		let text = value.get_untracked();
		let schedule = state
			.try_update_value(|s| s.on_focus(&text, js_sys::Date::now()))
			.unwrap_or(false);
		if schedule {
			arm();
		}
		refresh();
	};

	let on_blur = move |ev: FocusEvent| {
		let into_popup = ev
			.related_target()
			.and_then(|t| t.dyn_into::<web_sys::Node>().ok())
			.zip(popup_ref.get())
			.is_some_and(|(node, popup)| popup.contains(Some(&node)));
		state.update_value(|s| s.on_blur(into_popup));
		refresh();
	};

	let select = move |rec: Recommendation| {
		if let Some(title) = state.try_update_value(|s| s.select(&rec)) {
			on_change.run(title);
		}
		refresh();
	};

	view! {
		<div class="autocomplete">
			<input
				node_ref=input_ref
				id=id
				type="text"
				class="input"
				class:input-invalid=move || invalid.get()
				placeholder=placeholder
				autocomplete="off"
				prop:value=move || value.get()
				prop:disabled=move || disabled.get()
				on:input=on_input
				on:focus=on_focus
				on:blur=on_blur
			/>
			<div
				node_ref=popup_ref
				class="suggestions"
				tabindex="-1"
				style:display=move || {
					if suggestions.get() == SuggestionView::Hidden { "none" } else { "block" }
				}
			>
				{move || match suggestions.get() {
					SuggestionView::Hidden => ().into_any(),
					SuggestionView::Loading => {
						view! {
							<div class="suggestion-status">
								<span class="spinner" aria-hidden="true"></span>
								<p>"Loading..."</p>
							</div>
						}
							.into_any()
					}
					SuggestionView::Error => {
						view! {
							<div class="suggestion-status suggestion-error">
								<span aria-hidden="true">"⚠"</span>
								<p>"Error"</p>
							</div>
						}
							.into_any()
					}
					SuggestionView::Empty => {
						view! {
							<div class="suggestion-status">
								<span aria-hidden="true">"⚠"</span>
								<p>"Not found"</p>
							</div>
						}
							.into_any()
					}
					SuggestionView::List(list) => {
						list.into_iter()
							.map(|rec| {
								let picked = rec.clone();
								view! {
									<button
										type="button"
										class="suggestion"
										on:click=move |_| select(picked.clone())
									>
										<Thumbnail src=rec.thumbnail.clone() alt=rec.title.clone() />
										<div class="entry-text">
											<p class="entry-title">{rec.title}</p>
											<p class="entry-description">{rec.description}</p>
										</div>
									</button>
								}
							})
							.collect_view()
							.into_any()
					}
				}}
			</div>
		</div>
	}
}
