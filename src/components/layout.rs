use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::AppContext;
use crate::theme::Theme;

#[component]
pub fn NavBar(ctx: AppContext) -> impl IntoView {
	let expanded = RwSignal::new(false);
	let close = move |_: leptos::ev::MouseEvent| expanded.set(false);

	view! {
		<nav class="navbar">
			<A href="/" attr:class="brand">
				"WikiRace"
			</A>
			<button
				type="button"
				class="navbar-toggle"
				aria-label="Toggle navigation"
				on:click=move |_| expanded.update(|e| *e = !*e)
			>
				"☰"
			</button>
			<div class="navbar-links" class:expanded=move || expanded.get()>
				<A href="/" on:click=close>
					"Home"
				</A>
				<A href="/play" on:click=close>
					"Play"
				</A>
				<A href="/about" on:click=close>
					"About"
				</A>
				<button
					type="button"
					class="theme-toggle"
					aria-label="Toggle theme"
					on:click=move |_| ctx.toggle_theme()
				>
					{move || match ctx.theme.get() {
						Theme::Light => "☾",
						Theme::Dark => "☀",
					}}
				</button>
			</div>
		</nav>
	}
}

#[component]
pub fn Footer() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();
	view! {
		<footer class="footer">
			<p>{format!("Copyright © {year} WikiRace")}</p>
		</footer>
	}
}
