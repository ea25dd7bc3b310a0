//! Toast notifications.

use std::time::Duration;

use leptos::prelude::*;

/// How long success and error toasts stay up.
pub const TOAST_TIMEOUT: Duration = Duration::from_secs(4);

/// Look and lifetime of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	/// Stays until dismissed by whoever raised it.
	Loading,
	/// Green, auto-dismissed.
	Success,
	/// Red, auto-dismissed.
	Error,
}

impl ToastKind {
	fn class(self) -> &'static str {
		match self {
			ToastKind::Loading => "toast toast-loading",
			ToastKind::Success => "toast toast-success",
			ToastKind::Error => "toast toast-error",
		}
	}
}

/// Handle returned by [`Notify::notify`].
pub type ToastId = u64;

/// One visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	/// Unique within the queue.
	pub id: ToastId,
	/// Look and lifetime.
	pub kind: ToastKind,
	/// Bold first line.
	pub title: String,
	/// Detail line.
	pub description: String,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
	next_id: ToastId,
	toasts: Vec<Toast>,
}

impl ToastQueue {
	/// Append a toast and return its id.
	pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> ToastId {
		let id = self.next_id;
		self.next_id += 1;
		self.toasts.push(Toast {
			id,
			kind,
			title: title.to_string(),
			description: description.to_string(),
		});
		id
	}

	/// Unknown or already dismissed ids are ignored.
	pub fn dismiss(&mut self, id: ToastId) {
		self.toasts.retain(|t| t.id != id);
	}

	/// Visible toasts, oldest first.
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}
}

/// Sink for user-facing notifications.
pub trait Notify {
	/// Show a toast.
	fn notify(&self, kind: ToastKind, title: &str, description: &str) -> ToastId;
	/// Remove a toast early.
	fn dismiss(&self, id: ToastId);
}

/// Reactive [`ToastQueue`] rendered by [`Toasts`].
#[derive(Clone, Copy, Debug)]
pub struct Toaster {
	queue: RwSignal<ToastQueue>,
}

impl Toaster {
	/// Empty toaster in the current reactive owner.
	pub fn new() -> Self {
		Self {
			queue: RwSignal::new(ToastQueue::default()),
		}
	}
}

impl Default for Toaster {
	fn default() -> Self {
		Self::new()
	}
}

impl Notify for Toaster {
	fn notify(&self, kind: ToastKind, title: &str, description: &str) -> ToastId {
		let id = self
			.queue
			.try_update(|q| q.push(kind, title, description))
			.unwrap_or_default();
		if kind != ToastKind::Loading {
			let toaster = *self;
			set_timeout(move || toaster.dismiss(id), TOAST_TIMEOUT);
		}
		id
	}

	fn dismiss(&self, id: ToastId) {
		self.queue.update(|q| q.dismiss(id));
	}
}

/// Toast stack pinned to the top center of the page.
#[component]
pub fn Toasts(
	/// Queue to render.
	toaster: Toaster,
) -> impl IntoView {
	view! {
		<div class="toaster" role="status" aria-live="polite">
			<For
				each=move || toaster.queue.get().toasts().to_vec()
				key=|toast| toast.id
				children=move |toast| {
					let id = toast.id;
					view! {
						<div class=toast.kind.class()>
							<div class="toast-body">
								<p class="toast-title">{toast.title}</p>
								<p class="toast-description">{toast.description}</p>
							</div>
							<button
								type="button"
								class="toast-close"
								aria-label="Close"
								on:click=move |_| toaster.dismiss(id)
							>
								"×"
							</button>
						</div>
					}
				}
			/>
		</div>
	}
}
