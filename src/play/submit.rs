//! The play form's submission flow.
//!
//! `Idle -> Submitting -> {Success, ValidationError, NetworkError}`. A form that fails the
//! client-side check never leaves `Idle`.

use log::{error, info, warn};

use super::form::{FieldErrors, FormValues};
use crate::api::{FormField, PathSearch, ResultResponse};
use crate::error::ApiError;
use crate::notify::{Notify, ToastKind};

/// Where the play form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
	/// Editable; also where a client-side validation failure lands.
	#[default]
	Idle,
	/// Request in flight, controls disabled.
	Submitting,
	/// Result received.
	Success,
	/// The backend rejected the request.
	ValidationError,
	/// The request failed in transit or came back unreadable.
	NetworkError,
}

impl SubmitState {
	/// Controls should be disabled.
	pub fn is_submitting(self) -> bool {
		self == SubmitState::Submitting
	}
}

/// Terminal state of one submit attempt and what the form should display.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Submission {
	/// State the form ends in.
	pub state: SubmitState,
	/// Set only on success.
	pub result: Option<ResultResponse>,
	/// Messages to show under the controls.
	pub errors: FieldErrors,
	/// Control that should receive focus.
	pub focus: Option<FormField>,
}

impl Submission {
	fn invalid(errors: FieldErrors) -> Self {
		Self {
			state: SubmitState::Idle,
			focus: errors.first_field(),
			errors,
			result: None,
		}
	}
}

/// Validate `values`, then run the search.
///
/// `on_start` fires once validation passes and before the request goes out, so the
/// caller can clear the previous result and lock the form.
pub async fn submit_form<S, N>(
	values: &FormValues,
	search: &S,
	notify: &N,
	on_start: impl FnOnce(),
) -> Submission
where
	S: PathSearch + ?Sized,
	N: Notify + ?Sized,
{
	let request = match values.validate() {
		Ok(request) => request,
		Err(errors) => return Submission::invalid(errors),
	};
	on_start();

	info!(
		"searching {} -> {} with {} ({})",
		request.start,
		request.target,
		request.algorithm.as_str(),
		request.path_solution_option.as_str()
	);
	let loading = notify.notify(ToastKind::Loading, "Loading...", "Please wait");
	let outcome = search.play(&request).await;
	notify.dismiss(loading);

	match outcome {
		Ok(result) => {
			notify.notify(ToastKind::Success, "Success", "Shortest path found");
			Submission {
				state: SubmitState::Success,
				result: Some(result),
				..Submission::default()
			}
		}
		Err(ApiError::Backend {
			error,
			message,
			fields,
		}) => {
			warn!("search rejected: {}", message);
			notify.notify(ToastKind::Error, &error, &message);
			let mut errors = FieldErrors::default();
			let mut focus = None;
			for field in fields {
				errors.set(field.field, field.message);
				focus = Some(field.field);
			}
			Submission {
				state: SubmitState::ValidationError,
				errors,
				focus,
				result: None,
			}
		}
		Err(err) => {
			error!("search failed: {}", err);
			let (title, description) = err.toast_text();
			notify.notify(ToastKind::Error, &title, &description);
			Submission {
				state: SubmitState::NetworkError,
				..Submission::default()
			}
		}
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use std::cell::{Cell, RefCell};

	use async_trait::async_trait;

	use super::*;
	use crate::api::{Algorithm, FieldError, PathSolutionOption, PlayRequest};
	use crate::error::Result;
	use crate::notify::{ToastId, ToastQueue};

	struct FakeSearch {
		calls: Cell<usize>,
		reply: RefCell<Option<Result<ResultResponse>>>,
	}

	impl FakeSearch {
		fn replying(reply: Result<ResultResponse>) -> Self {
			Self {
				calls: Cell::new(0),
				reply: RefCell::new(Some(reply)),
			}
		}
	}

	#[async_trait(?Send)]
	impl PathSearch for FakeSearch {
		async fn play(&self, _request: &PlayRequest) -> Result<ResultResponse> {
			self.calls.set(self.calls.get() + 1);
			self.reply
				.borrow_mut()
				.take()
				.unwrap_or(Err(ApiError::Status(500)))
		}
	}

	#[derive(Default)]
	struct Recorder(RefCell<ToastQueue>);

	impl Notify for Recorder {
		fn notify(&self, kind: ToastKind, title: &str, description: &str) -> ToastId {
			self.0.borrow_mut().push(kind, title, description)
		}

		fn dismiss(&self, id: ToastId) {
			self.0.borrow_mut().dismiss(id);
		}
	}

	fn values() -> FormValues {
		FormValues {
			algorithm: Some(Algorithm::Ids),
			path_solution_option: Some(PathSolutionOption::Multiple),
			start: "Cars (film)".into(),
			target: "Cars (franchise)".into(),
		}
	}

	fn response() -> ResultResponse {
		serde_json::from_str(
			r#"{"totalTraversed":3,"shortestPathLength":1,"duration":0.1,
			"articles":[{"id":1,"title":"Cars","description":"","thumbnail":"","url":"u"}],
			"paths":[[0]]}"#,
		)
		.unwrap()
	}

	#[tokio::test]
	async fn empty_start_never_reaches_the_network() {
		let search = FakeSearch::replying(Ok(response()));
		let notify = Recorder::default();
		let started = Cell::new(false);
		let form = FormValues {
			start: String::new(),
			..values()
		};

		let out = submit_form(&form, &search, &notify, || started.set(true)).await;

		assert_eq!(search.calls.get(), 0);
		assert!(!started.get());
		assert_eq!(out.state, SubmitState::Idle);
		assert!(out.errors.get(FormField::Start).is_some());
		assert_eq!(out.focus, Some(FormField::Start));
		assert!(notify.0.borrow().toasts().is_empty());
	}

	#[tokio::test]
	async fn success_replaces_result_and_clears_loading() {
		let search = FakeSearch::replying(Ok(response()));
		let notify = Recorder::default();
		let started = Cell::new(false);

		let out = submit_form(&values(), &search, &notify, || started.set(true)).await;

		assert!(started.get());
		assert_eq!(out.state, SubmitState::Success);
		assert_eq!(out.result, Some(response()));
		let queue = notify.0.borrow();
		assert_eq!(queue.toasts().len(), 1);
		assert_eq!(queue.toasts()[0].kind, ToastKind::Success);
	}

	#[tokio::test]
	async fn backend_field_error_marks_only_that_field() {
		let search = FakeSearch::replying(Err(ApiError::Backend {
			error: "Not Found".into(),
			message: "Target page does not exist".into(),
			fields: vec![FieldError {
				field: FormField::Target,
				message: "not found".into(),
			}],
		}));
		let notify = Recorder::default();

		let out = submit_form(&values(), &search, &notify, || {}).await;

		assert_eq!(out.state, SubmitState::ValidationError);
		assert_eq!(out.errors.get(FormField::Start), None);
		assert_eq!(out.errors.get(FormField::Target), Some("not found"));
		assert_eq!(out.focus, Some(FormField::Target));
		let queue = notify.0.borrow();
		assert_eq!(queue.toasts().len(), 1);
		assert_eq!(queue.toasts()[0].title, "Not Found");
		assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
	}

	#[tokio::test]
	async fn last_reported_field_keeps_focus() {
		let search = FakeSearch::replying(Err(ApiError::Backend {
			error: "Bad Request".into(),
			message: "Invalid pages".into(),
			fields: vec![
				FieldError {
					field: FormField::Target,
					message: "not found".into(),
				},
				FieldError {
					field: FormField::Start,
					message: "not found".into(),
				},
			],
		}));
		let out = submit_form(&values(), &search, &Recorder::default(), || {}).await;
		assert_eq!(out.focus, Some(FormField::Start));
	}

	#[tokio::test]
	async fn unreadable_reply_blames_no_field() {
		let search = FakeSearch::replying(Err(ApiError::Decode("unexpected EOF".into())));
		let notify = Recorder::default();

		let out = submit_form(&values(), &search, &notify, || {}).await;

		assert_eq!(out.state, SubmitState::NetworkError);
		assert!(out.errors.is_empty());
		assert_eq!(out.focus, None);
		assert_eq!(out.result, None);
		let queue = notify.0.borrow();
		assert_eq!(queue.toasts().len(), 1);
		assert_eq!(queue.toasts()[0].title, "Error");
	}

	#[tokio::test]
	async fn connection_failure_blames_no_field() {
		// Nothing listens on port 1.
		let refused = reqwest::get("http://127.0.0.1:1").await.unwrap_err();
		let search = FakeSearch::replying(Err(ApiError::Network(refused)));
		let notify = Recorder::default();

		let out = submit_form(&values(), &search, &notify, || {}).await;

		assert_eq!(out.state, SubmitState::NetworkError);
		assert!(out.errors.is_empty());
		assert_eq!(out.focus, None);
		let queue = notify.0.borrow();
		assert_eq!(queue.toasts().len(), 1);
		assert_eq!(queue.toasts()[0].kind, ToastKind::Error);
	}
}
