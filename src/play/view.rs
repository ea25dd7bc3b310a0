use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::form::{FieldErrors, FormValues};
use super::submit::{SubmitState, submit_form};
use crate::api::{
	Algorithm, FormField, HttpPathSearch, PathSolutionOption, ResultResponse, WikipediaClient,
};
use crate::autocomplete::WikipediaInput;
use crate::context::AppContext;

#[component]
fn FieldMessage(errors: RwSignal<FieldErrors>, field: FormField) -> impl IntoView {
	move || {
		errors.with(|e| e.get(field).map(str::to_string)).map(|msg| {
			view! { <p class="field-message" role="alert">{msg}</p> }
		})
	}
}

/// Start/target/algorithm form that posts to the backend.
#[component]
pub fn PlayForm(ctx: AppContext, set_result: WriteSignal<Option<ResultResponse>>) -> impl IntoView {
	let values = RwSignal::new(FormValues::default());
	let errors = RwSignal::new(FieldErrors::default());
	let state = RwSignal::new(SubmitState::Idle);
	let busy = Signal::derive(move || state.get().is_submitting());

	let algorithm_ref = NodeRef::<leptos::html::Select>::new();
	let option_ref = NodeRef::<leptos::html::Select>::new();
	let start_ref = NodeRef::<leptos::html::Input>::new();
	let target_ref = NodeRef::<leptos::html::Input>::new();

	let focus = move |field: FormField| {
		let _ = match field {
			FormField::Algorithm => algorithm_ref.get().map(|el| el.focus()),
			FormField::PathSolutionOption => option_ref.get().map(|el| el.focus()),
			FormField::Start => start_ref.get().map(|el| el.focus()),
			FormField::Target => target_ref.get().map(|el| el.focus()),
		};
	};

	let config = ctx.config.get_value();
	let wikipedia = WikipediaClient::new(&config);
	let debounce = config.debounce;

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if busy.get_untracked() {
			return;
		}
		let snapshot = values.get_untracked();
		let search = HttpPathSearch::new(ctx.config.get_value());
		let toaster = ctx.toaster;

		spawn_local(async move {
			let out = submit_form(&snapshot, &search, &toaster, || {
				set_result.set(None);
				errors.set(FieldErrors::default());
				state.set(SubmitState::Submitting);
			})
			.await;

			state.set(out.state);
			errors.set(out.errors);
			if let Some(result) = out.result {
				set_result.set(Some(result));
			}
			// Controls are re-enabled on the next frame; focus after that.
			if let Some(field) = out.focus {
				request_animation_frame(move || focus(field));
			}
		});
	};

	view! {
		<form class="play-form" on:submit=on_submit novalidate=true>
			<div class="field">
				<label for="algorithm">"Algorithm"</label>
				<select
					node_ref=algorithm_ref
					id="algorithm"
					class="input"
					class:input-invalid=move || errors.with(|e| e.get(FormField::Algorithm).is_some())
					prop:disabled=move || busy.get()
					on:change=move |ev| {
						let parsed = Algorithm::parse(&event_target_value(&ev));
						values.update(|v| v.algorithm = parsed);
						errors.update(|e| e.clear(FormField::Algorithm));
					}
				>
					<option value="" disabled=true selected=true>
						"Select algorithm"
					</option>
					{Algorithm::ALL
						.into_iter()
						.map(|a| view! { <option value=a.as_str()>{a.as_str()}</option> })
						.collect_view()}
				</select>
				<p class="field-description">
					"Algorithm used to find the shortest wikipedia path from start to target."
				</p>
				<FieldMessage errors=errors field=FormField::Algorithm />
			</div>

			<div class="field">
				<label for="pathSolutionOption">"Solution Option"</label>
				<select
					node_ref=option_ref
					id="pathSolutionOption"
					class="input"
					class:input-invalid=move || {
						errors.with(|e| e.get(FormField::PathSolutionOption).is_some())
					}
					prop:disabled=move || busy.get()
					on:change=move |ev| {
						let parsed = PathSolutionOption::parse(&event_target_value(&ev));
						values.update(|v| v.path_solution_option = parsed);
						errors.update(|e| e.clear(FormField::PathSolutionOption));
					}
				>
					<option value="" disabled=true selected=true>
						"Select solution option"
					</option>
					{PathSolutionOption::ALL
						.into_iter()
						.map(|o| view! { <option value=o.as_str()>{o.label()}</option> })
						.collect_view()}
				</select>
				<p class="field-description">"Get single or multiple path solutions"</p>
				<FieldMessage errors=errors field=FormField::PathSolutionOption />
			</div>

			<div class="field-row">
				<div class="field">
					<label for="start">"Start"</label>
					<WikipediaInput
						id="start"
						placeholder="Insert start"
						value=Signal::derive(move || values.with(|v| v.start.clone()))
						on_change=move |text: String| {
							values.update(|v| v.start = text);
							errors.update(|e| e.clear(FormField::Start));
						}
						disabled=busy
						invalid=Signal::derive(move || {
							errors.with(|e| e.get(FormField::Start).is_some())
						})
						client=wikipedia.clone()
						debounce=debounce
						input_ref=start_ref
					/>
					<p class="field-description">"Wikipedia title of the starting page"</p>
					<FieldMessage errors=errors field=FormField::Start />
				</div>

				<span class="field-arrow" aria-hidden="true">"→"</span>

				<div class="field">
					<label for="target">"Target"</label>
					<WikipediaInput
						id="target"
						placeholder="Insert target"
						value=Signal::derive(move || values.with(|v| v.target.clone()))
						on_change=move |text: String| {
							values.update(|v| v.target = text);
							errors.update(|e| e.clear(FormField::Target));
						}
						disabled=busy
						invalid=Signal::derive(move || {
							errors.with(|e| e.get(FormField::Target).is_some())
						})
						client=wikipedia
						debounce=debounce
						input_ref=target_ref
					/>
					<p class="field-description">"Wikipedia title of the target page"</p>
					<FieldMessage errors=errors field=FormField::Target />
				</div>
			</div>

			<button type="submit" class="button button-primary" prop:disabled=move || busy.get()>
				"Find Shortest Path"
			</button>
		</form>
	}
}
