use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Landing page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="WikiRace" />
		<main class="page page-center">
			<section class="hero">
				<h1>"WikiRace"</h1>
				<p class="subtitle">
					"Get from one Wikipedia article to another using nothing but the links inside them. "
					"Pick a start, pick a target, and let BFS or IDS find the shortest route."
				</p>
				<A href="/play" attr:class="button button-primary">
					"Play now"
				</A>
			</section>
		</main>
	}
}
