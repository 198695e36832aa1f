//! Submission capability for consultation enquiries.
//!
//! There is no real backend; the submission endpoint is entirely mocked.
//! The seam still exists so the form machine can be driven in tests with
//! an instant service instead of a wall-clock delay.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::form::ConsultationRequest;
use crate::core::timing;

/// Acknowledgement from a submission backend, echoing the enquiry id.
/// Submission has no modeled failure path; a rejected variant would belong
/// to a real backend integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub enquiry_id: Uuid,
}

/// Capability: post one enquiry record, resolve with a receipt.
pub trait SubmissionService {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, SubmissionReceipt>;
}

/// Stand-in backend: waits a fixed delay, then accepts unconditionally.
/// The delay is cosmetic (it lets the submitting state render), not a
/// resilience mechanism.
#[derive(Debug, Clone)]
pub struct SimulatedSubmission {
    pub delay_ms: u64,
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self { delay_ms: 1200 }
    }
}

impl SubmissionService for SimulatedSubmission {
    fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, SubmissionReceipt> {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            timing::sleep_ms(delay_ms).await;

            #[cfg(debug_assertions)]
            match serde_json::to_string(&request) {
                Ok(payload) => println!("[enquiry] would post: {payload}"),
                Err(err) => eprintln!("[enquiry] failed serialising payload: {err}"),
            }

            SubmissionReceipt {
                enquiry_id: request.id,
            }
        })
    }
}

/// Cloneable handle provided through root context so the form view never
/// names a concrete backend.
#[derive(Clone)]
pub struct SubmissionHandle(Rc<dyn SubmissionService>);

impl SubmissionHandle {
    pub fn new(service: Rc<dyn SubmissionService>) -> Self {
        Self(service)
    }

    pub fn simulated() -> Self {
        Self(Rc::new(SimulatedSubmission::default()))
    }

    pub fn submit(&self, request: ConsultationRequest) -> LocalBoxFuture<'static, SubmissionReceipt> {
        self.0.submit(request)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::core::form::{EnquiryFields, EnquiryForm, SubmissionStatus};

    /// Resolves without suspending, so machine tests never touch the clock.
    struct InstantSubmission;

    impl SubmissionService for InstantSubmission {
        fn submit(
            &self,
            request: ConsultationRequest,
        ) -> LocalBoxFuture<'static, SubmissionReceipt> {
            Box::pin(async move {
                SubmissionReceipt {
                    enquiry_id: request.id,
                }
            })
        }
    }

    fn filled_form() -> EnquiryForm {
        EnquiryForm {
            fields: EnquiryFields {
                name: "Sarah M.".into(),
                phone: "07563 011 244".into(),
                postcode: "B70".into(),
                consent: true,
                ..EnquiryFields::default()
            },
            ..EnquiryForm::default()
        }
    }

    #[tokio::test]
    async fn full_flow_reaches_submitted_exactly_once() {
        let handle = SubmissionHandle::new(Rc::new(InstantSubmission));
        let mut form = filled_form();

        let request = form.submit().expect("valid form submits");
        assert_eq!(form.status, SubmissionStatus::Submitting);

        let receipt = handle.submit(request.clone()).await;
        assert_eq!(receipt.enquiry_id, request.id);

        form.complete();
        assert_eq!(form.status, SubmissionStatus::Submitted);
        assert!(form.errors.is_empty());

        // A second completion is a no-op; the state stays terminal.
        form.complete();
        assert_eq!(form.status, SubmissionStatus::Submitted);
    }

    #[tokio::test]
    async fn simulated_backend_resolves_after_its_delay() {
        let service = SimulatedSubmission { delay_ms: 5 };
        let request = filled_form().submit().expect("valid form submits");
        let receipt = service.submit(request.clone()).await;
        assert_eq!(receipt.enquiry_id, request.id);
    }
}
