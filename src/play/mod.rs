//! The play form: validation, submission and its view.

pub mod form;
pub mod submit;
mod view;

pub use form::{FieldErrors, FormValues};
pub use submit::{SubmitState, Submission, submit_form};
pub use view::PlayForm;
