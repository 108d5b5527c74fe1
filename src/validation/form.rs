//! Touched-state tracking and submit/reset for the contact form.

use std::collections::BTreeSet;

use super::{validate, FieldError, ValidationReport};
use crate::models::{Field, FormValues};

/// Per-field state as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Not interacted with yet; no verdict is surfaced.
    Untouched,
    Valid,
    Invalid(FieldError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values as submitted; the form has been reset.
    Accepted(FormValues),
    /// Values are kept, every field is now touched.
    Rejected(ValidationReport),
}

/// Form values plus the set of fields the user has interacted with.
///
/// A field becomes touched on blur. Verdicts are recomputed over the whole
/// form on every query, so editing phone immediately re-evaluates email.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FormValues,
    touched: BTreeSet<Field>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn report(&self) -> ValidationReport {
        validate(&self.values)
    }

    pub fn field_state(&self, field: Field) -> FieldState {
        if !self.is_touched(field) {
            return FieldState::Untouched;
        }
        match self.report().error(field) {
            Some(err) => FieldState::Invalid(err),
            None => FieldState::Valid,
        }
    }

    /// Message to display under `field`, only once it has been touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        match self.field_state(field) {
            FieldState::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    /// Every field touched and valid.
    pub fn is_accepted(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&f| self.field_state(f) == FieldState::Valid)
            && self.report().group_error.is_none()
    }

    /// Touches every field, then accepts (and resets) or rejects.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.touched.extend(Field::ALL);
        let report = self.report();
        if report.is_valid {
            tracing::info!(doctor = %self.values.doctor, "Form accepted");
            let submitted = std::mem::take(&mut self.values);
            self.reset();
            SubmitOutcome::Accepted(submitted)
        } else {
            let failing = report.field_errors.values().filter(|e| e.is_some()).count();
            tracing::debug!(failing, group = report.group_error.is_some(), "Form rejected");
            SubmitOutcome::Rejected(report)
        }
    }

    /// Back to initial values, nothing touched.
    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.touched.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(form: &mut FormState) {
        form.change(Field::Name, "Petro Lysenko");
        form.change(Field::Birthdate, "01/01/1980");
        form.change(Field::Sex, "Male");
        form.change(Field::City, "Odesa");
        form.change(Field::Doctor, "Melnyk");
        form.change(Field::Email, "petro@example.com");
    }

    #[test]
    fn fields_start_untouched() {
        let form = FormState::new();
        for field in Field::ALL {
            assert_eq!(form.field_state(field), FieldState::Untouched);
            assert_eq!(form.visible_error(field), None);
        }
        assert!(!form.is_accepted());
    }

    #[test]
    fn blur_surfaces_verdict() {
        let mut form = FormState::new();
        form.blur(Field::Name);
        assert_eq!(form.field_state(Field::Name), FieldState::Invalid(FieldError::Required));
        assert_eq!(form.visible_error(Field::Name).as_deref(), Some("Field is required"));

        form.change(Field::Name, "Olha");
        assert_eq!(form.field_state(Field::Name), FieldState::Valid);
    }

    #[test]
    fn change_before_blur_stays_untouched() {
        let mut form = FormState::new();
        form.change(Field::Name, "123");
        assert_eq!(form.field_state(Field::Name), FieldState::Untouched);
        form.blur(Field::Name);
        assert_eq!(form.field_state(Field::Name), FieldState::Invalid(FieldError::LettersOnly));
    }

    #[test]
    fn editing_phone_revalidates_touched_email() {
        let mut form = FormState::new();
        form.blur(Field::Email);
        assert_eq!(form.field_state(Field::Email), FieldState::Invalid(FieldError::Required));

        form.change(Field::Phone, "+380501234567");
        assert_eq!(form.field_state(Field::Email), FieldState::Valid);

        form.change(Field::Phone, "");
        assert_eq!(form.field_state(Field::Email), FieldState::Invalid(FieldError::Required));
    }

    #[test]
    fn submit_rejects_and_touches_everything() {
        let mut form = FormState::new();
        form.change(Field::Name, "Olha");
        match form.submit() {
            SubmitOutcome::Rejected(report) => {
                assert!(!report.is_valid);
                assert_eq!(report.group_error, Some(FieldError::ContactMissing));
            }
            SubmitOutcome::Accepted(_) => panic!("incomplete form accepted"),
        }
        assert!(Field::ALL.iter().all(|&f| form.is_touched(f)));
        assert_eq!(form.values().name, "Olha");
        assert_eq!(form.visible_error(Field::City).as_deref(), Some("Field is required"));
    }

    #[test]
    fn submit_accepts_and_resets() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        match form.submit() {
            SubmitOutcome::Accepted(values) => {
                assert_eq!(values.name, "Petro Lysenko");
                assert_eq!(values.email, "petro@example.com");
                assert!(values.phone.is_empty());
            }
            SubmitOutcome::Rejected(report) => panic!("valid form rejected: {report:?}"),
        }
        assert_eq!(form.values(), &FormValues::default());
        assert!(Field::ALL.iter().all(|&f| !form.is_touched(f)));
    }

    #[test]
    fn accepted_only_when_all_touched_and_valid() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        assert!(!form.is_accepted());
        for field in Field::ALL {
            form.blur(field);
        }
        assert!(form.is_accepted());

        form.change(Field::Email, "");
        assert!(!form.is_accepted());
    }

    #[test]
    fn reset_clears_values_and_touched() {
        let mut form = FormState::new();
        fill_valid(&mut form);
        form.blur(Field::City);
        form.reset();
        assert_eq!(form.values(), &FormValues::default());
        assert!(!form.is_touched(Field::City));
    }
}
