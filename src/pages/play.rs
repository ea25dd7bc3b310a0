use leptos::prelude::*;
use leptos_meta::Title;

use crate::api::ResultResponse;
use crate::context::AppContext;
use crate::play::PlayForm;
use crate::result::ResultSection;

/// Search form and, once a search succeeds, its results.
#[component]
pub fn Play(ctx: AppContext) -> impl IntoView {
	let (result, set_result) = signal(None::<ResultResponse>);

	view! {
		<Title text="Play | WikiRace" />
		<main class="page play">
			<section class="play-section">
				<h1>"WikiRace"</h1>
				<PlayForm ctx=ctx set_result=set_result />
			</section>
			{move || {
				result
					.get()
					.map(|result| view! { <ResultSection result=result theme=ctx.theme /> })
			}}
		</main>
	}
}
