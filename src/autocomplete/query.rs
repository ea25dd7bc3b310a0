//! Debounced, keyed suggestion lookups.
//!
//! [`QueryTable`] is the bookkeeping behind one autocomplete field. Keystrokes arm a
//! debounce deadline; when it passes, the pending text becomes the *latest* key and is
//! handed out for fetching unless the cache already covers it. Responses are stored under
//! the key they were fetched for, and only the latest key's entry is ever shown, so a slow
//! response for an abandoned query cannot overwrite a newer one.
//!
//! Times are plain milliseconds so the table runs the same under a browser clock and in
//! tests.

use std::collections::HashMap;

use crate::api::Recommendation;

/// Cached outcome of one query string.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState {
	/// Request in flight.
	Loading,
	/// Finished, possibly empty.
	Ready(Vec<Recommendation>),
	/// Request failed; retried on the next lookup.
	Failed,
}

/// What the suggestion popup should show for the latest key.
#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionView {
	/// Popup closed.
	Hidden,
	/// Waiting for the debounce or the response.
	Loading,
	/// Lookup failed.
	Error,
	/// Lookup returned nothing.
	Empty,
	/// Suggestions, in search order.
	List(Vec<Recommendation>),
}

#[derive(Clone, Debug)]
struct Pending {
	key: String,
	due_at: f64,
}

/// Debounce deadline, latest key and per-key cache of one input.
#[derive(Clone, Debug)]
pub struct QueryTable {
	delay_ms: f64,
	pending: Option<Pending>,
	latest: Option<String>,
	cache: HashMap<String, QueryState>,
}

impl QueryTable {
	/// Empty table with a quiet period of `delay_ms`.
	pub fn new(delay_ms: f64) -> Self {
		Self {
			delay_ms,
			pending: None,
			latest: None,
			cache: HashMap::new(),
		}
	}

	/// Register a keystroke. Empty text cancels the pending lookup and forgets the latest key.
	pub fn input(&mut self, text: &str, now: f64) {
		if text.is_empty() {
			self.pending = None;
			self.latest = None;
			return;
		}
		self.pending = Some(Pending {
			key: text.to_string(),
			due_at: now + self.delay_ms,
		});
	}

	/// Promote the pending text once its quiet period has passed.
	///
	/// Returns the key to fetch, or `None` when nothing is due or the cache already holds a
	/// usable entry (finished, or still in flight) for it.
	pub fn poll(&mut self, now: f64) -> Option<String> {
		let due = self.pending.as_ref().is_some_and(|p| now >= p.due_at);
		if !due {
			return None;
		}
		let key = self.pending.take()?.key;
		self.latest = Some(key.clone());

		match self.cache.get(&key) {
			Some(QueryState::Ready(_)) | Some(QueryState::Loading) => None,
			Some(QueryState::Failed) | None => {
				self.cache.insert(key.clone(), QueryState::Loading);
				Some(key)
			}
		}
	}

	/// Promote the pending text now, whatever its deadline. Used when the debounce timer
	/// itself has fired.
	pub fn flush(&mut self) -> Option<String> {
		self.poll(f64::INFINITY)
	}

	/// Store a finished lookup. Returns `true` when it belongs to the latest key and the view
	/// changed.
	pub fn resolve(&mut self, key: &str, result: Result<Vec<Recommendation>, ()>) -> bool {
		let state = match result {
			Ok(list) => QueryState::Ready(list),
			Err(()) => QueryState::Failed,
		};
		self.cache.insert(key.to_string(), state);
		self.is_latest(key)
	}

	/// Whether `key` is what the user last settled on.
	pub fn is_latest(&self, key: &str) -> bool {
		self.latest.as_deref() == Some(key)
	}

	/// Key most recently promoted by [`QueryTable::poll`].
	pub fn latest(&self) -> Option<&str> {
		self.latest.as_deref()
	}

	/// State of the latest key.
	pub fn view(&self) -> SuggestionView {
		let Some(key) = &self.latest else {
			// First lookup still waiting out its debounce.
			return if self.pending.is_some() {
				SuggestionView::Loading
			} else {
				SuggestionView::Hidden
			};
		};
		match self.cache.get(key) {
			None | Some(QueryState::Loading) => SuggestionView::Loading,
			Some(QueryState::Failed) => SuggestionView::Error,
			Some(QueryState::Ready(list)) if list.is_empty() => SuggestionView::Empty,
			Some(QueryState::Ready(list)) => SuggestionView::List(list.clone()),
		}
	}
}
