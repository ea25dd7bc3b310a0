//! Play form values and client-side validation.

use std::collections::BTreeMap;

use crate::api::{Algorithm, FormField, PathSolutionOption, PlayRequest};

/// Raw contents of the play form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
	/// `None` until a value is picked.
	pub algorithm: Option<Algorithm>,
	/// `None` until a value is picked.
	pub path_solution_option: Option<PathSolutionOption>,
	/// Start title as typed.
	pub start: String,
	/// Target title as typed.
	pub target: String,
}

/// Messages attached to form controls, iterated in form order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
	/// Mark `field`, replacing any earlier message.
	pub fn set(&mut self, field: FormField, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	/// Unmark `field`.
	pub fn clear(&mut self, field: FormField) {
		self.0.remove(&field);
	}

	/// Message on `field`, if marked.
	pub fn get(&self, field: FormField) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	/// No control is marked.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Topmost marked control.
	pub fn first_field(&self) -> Option<FormField> {
		self.0.keys().next().copied()
	}
}

impl FormValues {
	/// Check the form before anything is sent.
	pub fn validate(&self) -> Result<PlayRequest, FieldErrors> {
		let mut errors = FieldErrors::default();
		if self.algorithm.is_none() {
			errors.set(FormField::Algorithm, "Please select an algorithm to use");
		}
		if self.path_solution_option.is_none() {
			errors.set(
				FormField::PathSolutionOption,
				"Please select a path solution option",
			);
		}
		if self.start.is_empty() {
			errors.set(FormField::Start, "Please enter a starting wikipedia page");
		}
		if self.target.is_empty() {
			errors.set(FormField::Target, "Please enter a target wikipedia page");
		}

		match (self.algorithm, self.path_solution_option) {
			(Some(algorithm), Some(path_solution_option)) if errors.is_empty() => Ok(PlayRequest {
				algorithm,
				path_solution_option,
				start: self.start.clone(),
				target: self.target.clone(),
			}),
			_ => Err(errors),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> FormValues {
		FormValues {
			algorithm: Some(Algorithm::Bfs),
			path_solution_option: Some(PathSolutionOption::Single),
			start: "Cars (film)".into(),
			target: "Cars (franchise)".into(),
		}
	}

	#[test]
	fn complete_form_becomes_request() {
		let req = filled().validate().unwrap();
		assert_eq!(req.algorithm, Algorithm::Bfs);
		assert_eq!(req.start, "Cars (film)");
	}

	#[test]
	fn empty_start_is_marked() {
		let values = FormValues {
			start: String::new(),
			..filled()
		};
		let errors = values.validate().unwrap_err();
		assert_eq!(
			errors.get(FormField::Start),
			Some("Please enter a starting wikipedia page")
		);
		assert_eq!(errors.get(FormField::Target), None);
		assert_eq!(errors.first_field(), Some(FormField::Start));
	}

	#[test]
	fn blank_form_marks_everything_in_order() {
		let errors = FormValues::default().validate().unwrap_err();
		for field in FormField::ALL {
			assert!(errors.get(field).is_some(), "{field} should be marked");
		}
		assert_eq!(errors.first_field(), Some(FormField::Algorithm));
	}

	#[test]
	fn clearing_one_field_keeps_the_others() {
		let mut errors = FormValues::default().validate().unwrap_err();
		errors.clear(FormField::Algorithm);
		assert_eq!(errors.first_field(), Some(FormField::PathSolutionOption));
	}
}
