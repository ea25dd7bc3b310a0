//! Page-wide state created once at the root and handed to every page.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::notify::Toaster;
use crate::theme::{self, Theme};

/// Theme, notifications and configuration for one page session.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
	/// Current color scheme.
	pub theme: RwSignal<Theme>,
	/// Page-wide notifications.
	pub toaster: Toaster,
	/// Endpoints and timings, fixed for the session.
	pub config: StoredValue<AppConfig>,
}

impl AppContext {
	/// Loads the stored theme.
	pub fn new(config: AppConfig) -> Self {
		Self {
			theme: RwSignal::new(theme::load_theme()),
			toaster: Toaster::new(),
			config: StoredValue::new(config),
		}
	}

	/// Flip light/dark and remember the choice.
	pub fn toggle_theme(&self) {
		self.theme.update(|t| *t = t.toggled());
		theme::store_theme(self.theme.get_untracked());
	}
}
