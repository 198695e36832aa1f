use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::app::PHONE_URI;
use crate::content;
use crate::core::form::{EnquiryForm, Field, SubmissionStatus};
use crate::core::nav::AppState;
use crate::core::submit::SubmissionHandle;
use crate::t;

/// The lead-capture form embedded on every page.
///
/// All transition rules live in [`EnquiryForm`]; this component only binds
/// inputs to the field values and feeds submit attempts into a coroutine.
/// The coroutine drives the single asynchronous step: when validation
/// passes it awaits the injected submission service, then flips the
/// machine to its terminal `Submitted` state, which swaps the markup to
/// the confirmation panel.
///
/// Error text is resolved at render time from the typed field markers, so
/// a language switch mid-edit re-localizes any visible errors.
#[component]
pub fn ConsultationForm() -> Element {
    let state = use_context::<AppState>();
    let service = use_context::<SubmissionHandle>();

    let lang_marker = state.language().locale_tag();
    let content = content::for_language(state.language());

    let mut form = use_signal(EnquiryForm::default);

    let coroutine = {
        let form_ref = form;
        use_coroutine(move |mut rx: UnboundedReceiver<EnquiryEvent>| {
            let mut form_signal = form_ref;
            let service = service.clone();

            async move {
                while let Some(event) = rx.next().await {
                    match event {
                        EnquiryEvent::Submit => {
                            let request = form_signal.with_mut(|form| form.submit());
                            if let Some(request) = request {
                                let _receipt = service.submit(request).await;
                                form_signal.with_mut(|form| form.complete());
                            }
                        }
                    }
                }
            }
        })
    };

    let snapshot = form();
    let submitting = snapshot.status == SubmissionStatus::Submitting;

    if snapshot.status == SubmissionStatus::Submitted {
        return rsx! {
            div { id: "consultation-form", class: "enquiry enquiry--success",
                div { style: "display:none", "{lang_marker}" }
                h3 { class: "enquiry__success-title", {t!("form-success-title")} }
                p { class: "enquiry__success-message", {t!("form-success-message")} }
                div { class: "enquiry__direct",
                    p { {t!("form-speak-directly")} }
                    a { class: "enquiry__call", href: PHONE_URI, {t!("form-call-now")} }
                }
            }
        };
    }

    rsx! {
        div { id: "consultation-form", class: "enquiry",
            div { style: "display:none", "{lang_marker}" }
            div { class: "enquiry__header",
                h3 { {t!("form-title")} }
                p { {t!("form-intro")} }
            }

            form {
                class: "enquiry__grid",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    coroutine.send(EnquiryEvent::Submit);
                },

                div { class: "enquiry__field",
                    label { r#for: "enquiry-name", {t!("form-field-name")} " *" }
                    input {
                        id: "enquiry-name",
                        r#type: "text",
                        value: "{snapshot.fields.name}",
                        oninput: move |evt| form.with_mut(|f| f.fields.name = evt.value()),
                    }
                    if snapshot.error_on(Field::Name) {
                        p { class: "enquiry__error", {t!("form-error-name")} }
                    }
                }

                div { class: "enquiry__field",
                    label { r#for: "enquiry-phone", {t!("form-field-phone")} " *" }
                    input {
                        id: "enquiry-phone",
                        r#type: "tel",
                        value: "{snapshot.fields.phone}",
                        oninput: move |evt| form.with_mut(|f| f.fields.phone = evt.value()),
                    }
                    if snapshot.error_on(Field::Phone) {
                        p { class: "enquiry__error", {t!("form-error-phone")} }
                    }
                }

                div { class: "enquiry__field",
                    label { r#for: "enquiry-email", {t!("form-field-email")} }
                    input {
                        id: "enquiry-email",
                        r#type: "email",
                        value: "{snapshot.fields.email}",
                        oninput: move |evt| form.with_mut(|f| f.fields.email = evt.value()),
                    }
                }

                div { class: "enquiry__field",
                    label { r#for: "enquiry-postcode", {t!("form-field-postcode")} " *" }
                    input {
                        id: "enquiry-postcode",
                        r#type: "text",
                        value: "{snapshot.fields.postcode}",
                        oninput: move |evt| form.with_mut(|f| f.fields.postcode = evt.value()),
                    }
                    if snapshot.error_on(Field::Postcode) {
                        p { class: "enquiry__error", {t!("form-error-postcode")} }
                    }
                }

                div { class: "enquiry__field enquiry__field--wide",
                    label { r#for: "enquiry-care-type", {t!("form-field-care-type")} }
                    select {
                        id: "enquiry-care-type",
                        value: "{snapshot.fields.care_type}",
                        oninput: move |evt| form.with_mut(|f| f.fields.care_type = evt.value()),
                        option { value: "", {t!("form-care-placeholder")} }
                        {content.care_options.iter().map(|opt| rsx! {
                            option { key: "{opt}", value: "{opt}", "{opt}" }
                        })}
                    }
                }

                div { class: "enquiry__field enquiry__field--wide",
                    label { r#for: "enquiry-message", {t!("form-field-message")} }
                    textarea {
                        id: "enquiry-message",
                        rows: "4",
                        value: "{snapshot.fields.message}",
                        oninput: move |evt| form.with_mut(|f| f.fields.message = evt.value()),
                    }
                }

                div { class: "enquiry__field enquiry__field--wide enquiry__consent",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: snapshot.fields.consent,
                            oninput: move |evt| form.with_mut(|f| f.fields.consent = evt.checked()),
                        }
                        span {
                            class: if snapshot.error_on(Field::Consent) {
                                "enquiry__consent-text enquiry__consent-text--error"
                            } else {
                                "enquiry__consent-text"
                            },
                            {t!("form-field-consent")}
                        }
                    }
                    if snapshot.error_on(Field::Consent) {
                        p { class: "enquiry__error", {t!("form-error-consent")} }
                    }
                }

                div { class: "enquiry__field enquiry__field--wide",
                    button {
                        r#type: "submit",
                        class: if submitting {
                            "button button--primary enquiry__submit enquiry__submit--busy"
                        } else {
                            "button button--primary enquiry__submit"
                        },
                        disabled: submitting,
                        {t!("form-submit")}
                    }
                    p { class: "enquiry__reassurance", {t!("form-reassurance")} }
                }
            }
        }
    }
}

/// Events processed by the submission coroutine.
#[derive(Debug, Clone)]
enum EnquiryEvent {
    Submit,
}
