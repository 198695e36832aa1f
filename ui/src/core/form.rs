//! Consultation form state machine.
//!
//! Lifecycle per form instance:
//! `editing → validating → (rejected → editing) | (submitting → submitted)`
//!
//! Validation happens only on submit attempts. Every rule is evaluated
//! independently (no short-circuit) and the resulting error set replaces
//! the previous one wholesale: a field that became valid between attempts
//! keeps showing its stale error until the user submits again. `Submitted`
//! is terminal; the view swaps to a confirmation panel and the instance
//! never returns to editing.
//!
//! The machine stores typed field markers rather than message strings;
//! views map each marker to its localized Fluent message, so errors follow
//! a mid-session language switch.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields that carry a validation rule. Email, care type, and message are
/// always optional and never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Phone,
    Postcode,
    Consent,
}

/// Raw input values, exactly as typed. Optional inputs stay empty strings
/// until mapped into the boundary record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnquiryFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub postcode: String,
    pub care_type: String,
    pub message: String,
    pub consent: bool,
}

impl EnquiryFields {
    /// Run every rule, independently. Required text fields fail only on the
    /// empty string (no trimming, no format checks); consent must be given.
    pub fn validate(&self) -> BTreeSet<Field> {
        let mut errors = BTreeSet::new();
        if self.name.is_empty() {
            errors.insert(Field::Name);
        }
        if self.phone.is_empty() {
            errors.insert(Field::Phone);
        }
        if self.postcode.is_empty() {
            errors.insert(Field::Postcode);
        }
        if !self.consent {
            errors.insert(Field::Consent);
        }
        errors
    }

    fn to_request(&self) -> ConsultationRequest {
        ConsultationRequest {
            id: Uuid::new_v4(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: optional(&self.email),
            postcode: self.postcode.clone(),
            care_type: optional(&self.care_type),
            message: optional(&self.message),
            consent: self.consent,
        }
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Submission progress for one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// The enquiry record handed to a [`SubmissionService`]. This is the one
/// external boundary contract of the app; everything else stays in-process.
///
/// [`SubmissionService`]: crate::core::submit::SubmissionService
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub postcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub care_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub consent: bool,
}

/// Full form state: values, per-field errors, submission progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnquiryForm {
    pub fields: EnquiryFields,
    pub errors: BTreeSet<Field>,
    pub status: SubmissionStatus,
}

impl EnquiryForm {
    /// A submit attempt. Re-validates everything, replacing the previous
    /// error set (this is the only point where stale errors clear). Returns
    /// the boundary record when validation passes, in which case the status
    /// has moved to `Submitting`; otherwise the form stays in `Editing`.
    ///
    /// Only defined from `Editing`: once submission is in flight or done,
    /// further attempts are ignored.
    pub fn submit(&mut self) -> Option<ConsultationRequest> {
        if self.status != SubmissionStatus::Editing {
            return None;
        }
        self.errors = self.fields.validate();
        if self.errors.is_empty() {
            self.status = SubmissionStatus::Submitting;
            Some(self.fields.to_request())
        } else {
            None
        }
    }

    /// Deferred completion once the submission service resolves.
    pub fn complete(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Submitted;
        }
    }

    pub fn error_on(&self, field: Field) -> bool {
        self.errors.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> EnquiryFields {
        EnquiryFields {
            name: "Maria Nowak".into(),
            phone: "07563 011 244".into(),
            postcode: "DY4 8UU".into(),
            consent: true,
            ..EnquiryFields::default()
        }
    }

    #[test]
    fn empty_required_fields_yield_exactly_four_errors() {
        let mut form = EnquiryForm::default();
        let request = form.submit();

        assert!(request.is_none());
        assert_eq!(form.status, SubmissionStatus::Editing);
        assert_eq!(form.errors.len(), 4);
        for field in [Field::Name, Field::Phone, Field::Postcode, Field::Consent] {
            assert!(form.error_on(field), "expected error on {field:?}");
        }
    }

    #[test]
    fn optional_fields_never_error() {
        let mut form = EnquiryForm {
            fields: valid_fields(),
            ..EnquiryForm::default()
        };
        // email / care type / message all left empty on purpose.
        let request = form.submit().expect("valid form submits");
        assert!(form.errors.is_empty());
        assert_eq!(request.email, None);
        assert_eq!(request.care_type, None);
        assert_eq!(request.message, None);
    }

    #[test]
    fn valid_submit_moves_to_submitting_then_submitted() {
        let mut form = EnquiryForm {
            fields: valid_fields(),
            ..EnquiryForm::default()
        };
        let request = form.submit().expect("valid form submits");
        assert_eq!(form.status, SubmissionStatus::Submitting);
        assert_eq!(request.name, "Maria Nowak");
        assert!(request.consent);

        form.complete();
        assert_eq!(form.status, SubmissionStatus::Submitted);
    }

    // Current behavior, on purpose: validation only runs on submit attempts,
    // so fixing a field does not clear its error until the next attempt.
    #[test]
    fn errors_clear_only_on_the_next_submit_attempt() {
        let mut form = EnquiryForm::default();
        form.submit();
        assert!(form.error_on(Field::Name));

        form.fields.name = "Maria Nowak".into();
        assert!(
            form.error_on(Field::Name),
            "editing a field must not clear its error"
        );

        form.submit();
        assert!(!form.error_on(Field::Name));
        assert!(form.error_on(Field::Phone), "other errors survive the attempt");
    }

    // Matches the rule as written: only the empty string fails, whitespace
    // passes untouched.
    #[test]
    fn whitespace_only_input_counts_as_filled() {
        let mut fields = valid_fields();
        fields.name = "   ".into();
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn submitted_is_terminal() {
        let mut form = EnquiryForm {
            fields: valid_fields(),
            ..EnquiryForm::default()
        };
        form.submit().expect("valid form submits");
        form.complete();

        assert!(form.submit().is_none());
        assert_eq!(form.status, SubmissionStatus::Submitted);
    }

    #[test]
    fn completion_requires_an_inflight_submission() {
        let mut form = EnquiryForm::default();
        form.complete();
        assert_eq!(form.status, SubmissionStatus::Editing);
    }

    #[test]
    fn request_payload_omits_empty_optionals() {
        let mut fields = valid_fields();
        fields.message = "Mornings only, please.".into();
        let request = fields.to_request();

        let payload = serde_json::to_value(&request).expect("record serializes");
        let object = payload.as_object().expect("json object");
        assert!(!object.contains_key("email"));
        assert!(!object.contains_key("care_type"));
        assert_eq!(
            object.get("message").and_then(|v| v.as_str()),
            Some("Mornings only, please.")
        );
    }
}
