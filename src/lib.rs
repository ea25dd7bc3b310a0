//! WikiRace client: search form, title autocomplete and path visualisation.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
pub mod api;
pub mod autocomplete;
mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod notify;
mod pages;
pub mod play;
pub mod result;
pub mod theme;

// Top-Level pages
use crate::components::layout::{Footer, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::notify::Toasts;
use crate::pages::about::About;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::play::Play;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Router, shell and page-wide state.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let config = AppConfig::default();
	if let Err(err) = config.validate() {
		error!("configuration problem: {}", err);
	}
	info!("search backend at {}", config.backend_url);
	let ctx = AppContext::new(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || ctx.theme.get().as_str() />

		// sets the document title
		<Title text="WikiRace" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<NavBar ctx=ctx />
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/play") view=move || view! { <Play ctx=ctx /> } />
				<Route path=path!("/about") view=About />
			</Routes>
			<Footer />
			<Toasts toaster=ctx.toaster />
		</Router>
	}
}
