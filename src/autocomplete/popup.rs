//! Suggestion popup state for one input.

use super::query::{QueryTable, SuggestionView};
use crate::api::Recommendation;

/// Focus and visibility of one field's suggestion popup on top of its [`QueryTable`].
#[derive(Clone, Debug)]
pub struct Autocomplete {
	table: QueryTable,
	open: bool,
}

impl Autocomplete {
	/// Closed popup over an empty table.
	pub fn new(delay_ms: f64) -> Self {
		Self {
			table: QueryTable::new(delay_ms),
			open: false,
		}
	}

	/// Returns `true` when a debounce timer should be armed.
	pub fn on_input(&mut self, text: &str, now: f64) -> bool {
		self.table.input(text, now);
		self.open = !text.is_empty();
		self.open
	}

	/// Reopen on focus. Reuses the cached state when the text was already searched.
	pub fn on_focus(&mut self, text: &str, now: f64) -> bool {
		if text.is_empty() {
			return false;
		}
		self.open = true;
		if self.table.latest() == Some(text) {
			return false;
		}
		self.table.input(text, now);
		true
	}

	/// `into_popup` is set when focus moved to an element inside the popup.
	pub fn on_blur(&mut self, into_popup: bool) {
		if !into_popup {
			self.open = false;
		}
	}

	/// Close the popup and hand back the title to write into the field.
	pub fn select(&mut self, rec: &Recommendation) -> String {
		self.open = false;
		rec.title.clone()
	}

	/// See [`QueryTable::poll`].
	pub fn poll(&mut self, now: f64) -> Option<String> {
		self.table.poll(now)
	}

	/// See [`QueryTable::flush`].
	pub fn flush(&mut self) -> Option<String> {
		self.table.flush()
	}

	/// See [`QueryTable::resolve`].
	pub fn resolve(&mut self, key: &str, result: Result<Vec<Recommendation>, ()>) -> bool {
		self.table.resolve(key, result)
	}

	/// What to render; `Hidden` whenever the popup is closed.
	pub fn view(&self) -> SuggestionView {
		if !self.open {
			return SuggestionView::Hidden;
		}
		self.table.view()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rec(title: &str) -> Recommendation {
		Recommendation {
			id: 7,
			title: title.into(),
			description: "desc".into(),
			thumbnail: String::new(),
		}
	}

	fn searched(text: &str) -> Autocomplete {
		let mut ac = Autocomplete::new(500.0);
		assert!(ac.on_input(text, 0.0));
		let key = ac.poll(500.0).unwrap();
		ac.resolve(&key, Ok(vec![rec("Cars"), rec("Cars 2")]));
		ac
	}

	#[test]
	fn loading_shown_from_first_keystroke() {
		let mut ac = Autocomplete::new(500.0);
		ac.on_input("C", 0.0);
		assert_eq!(ac.view(), SuggestionView::Loading);
		ac.poll(500.0);
		assert_eq!(ac.view(), SuggestionView::Loading);
		ac.on_blur(false);
		assert_eq!(ac.view(), SuggestionView::Hidden);
	}

	#[test]
	fn blur_outside_closes_but_into_popup_does_not() {
		let mut ac = searched("Cars");
		ac.on_blur(true);
		assert!(matches!(ac.view(), SuggestionView::List(_)));
		ac.on_blur(false);
		assert_eq!(ac.view(), SuggestionView::Hidden);
	}

	#[test]
	fn refocus_with_same_text_uses_cache() {
		let mut ac = searched("Cars");
		ac.on_blur(false);
		assert!(!ac.on_focus("Cars", 1000.0));
		assert_eq!(ac.view(), SuggestionView::List(vec![rec("Cars"), rec("Cars 2")]));
	}

	#[test]
	fn refocus_with_new_text_debounces() {
		let mut ac = searched("Cars");
		ac.on_blur(false);
		assert!(ac.on_focus("Cars 3", 1000.0));
		assert_eq!(ac.poll(1500.0).as_deref(), Some("Cars 3"));
	}

	#[test]
	fn focus_on_empty_field_stays_closed() {
		let mut ac = Autocomplete::new(500.0);
		assert!(!ac.on_focus("", 0.0));
		assert_eq!(ac.view(), SuggestionView::Hidden);
	}

	#[test]
	fn selecting_closes_and_returns_title() {
		let mut ac = searched("Car");
		assert_eq!(ac.select(&rec("Cars 2")), "Cars 2");
		assert_eq!(ac.view(), SuggestionView::Hidden);
	}

	#[test]
	fn clearing_closes_popup() {
		let mut ac = searched("Cars");
		assert!(!ac.on_input("", 900.0));
		assert_eq!(ac.view(), SuggestionView::Hidden);
	}
}
