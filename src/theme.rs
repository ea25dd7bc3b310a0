//! Light and dark color schemes.

use log::warn;

const STORAGE_KEY: &str = "theme";

/// Page color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Light background, dark text.
	#[default]
	Light,
	/// Dark background, light text.
	Dark,
}

impl Theme {
	/// Value of `data-theme` and of the stored preference.
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	/// Inverse of [`Theme::as_str`].
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"light" => Some(Theme::Light),
			"dark" => Some(Theme::Dark),
			_ => None,
		}
	}

	/// The other scheme.
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Node title color on the graph canvas.
	pub fn text_color(self) -> &'static str {
		match self {
			Theme::Light => "black",
			Theme::Dark => "white",
		}
	}

	/// Link and arrow color on the graph canvas.
	pub fn link_color(self) -> &'static str {
		match self {
			Theme::Light => "#6b7280",
			Theme::Dark => "#FFFFFF",
		}
	}

	/// Canvas background.
	pub fn background(self) -> &'static str {
		match self {
			Theme::Light => "#ffffff",
			Theme::Dark => "#09090b",
		}
	}
}

fn storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Theme saved by a previous visit, light otherwise.
pub fn load_theme() -> Theme {
	storage()
		.and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
		.and_then(|v| Theme::parse(&v))
		.unwrap_or_default()
}

/// Remember `theme` in `localStorage`; failures are only logged.
pub fn store_theme(theme: Theme) {
	let Some(storage) = storage() else {
		return;
	};
	if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
		warn!("could not persist theme preference");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_and_parse() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
		assert_eq!(Theme::parse("sepia"), None);
		assert_eq!(Theme::Dark.link_color(), "#FFFFFF");
		assert_eq!(Theme::Light.text_color(), "black");
	}
}
