//! Contact section: validated form delegating delivery to the mail relay.
//!
//! DESIGN
//! ======
//! Blur shows a field's inline error, input clears it optimistically, and
//! submission re-runs the same per-field validator over everything, so
//! there is exactly one source of truth for what "valid" means. While a
//! send is in flight the submit control is disabled and relabeled; it is
//! restored on both outcomes.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::mail::MailFields;
#[cfg(feature = "hydrate")]
use crate::net::mail::{self, MailConfig};
use crate::state::form::{ContactForm, Field, FieldErrors, validate, validate_field};
use crate::state::notification::{NotificationKind, NotificationState};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const NOT_CONFIGURED_MESSAGE: &str = "Contact form is not configured.";

/// Border cue on invalid inputs.
fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() { "form-input form-input--invalid" } else { "form-input" }
}

/// Decide a submission: either the trimmed relay fields to deliver, or
/// the per-field errors to show. Runs the same rules the blur handlers
/// use, so nothing reaches the relay that a blur check would flag.
fn decide_submission(form: &ContactForm) -> Result<MailFields, FieldErrors> {
    let errors = validate(form);
    if !errors.is_clean() {
        return Err(errors);
    }
    Ok(MailFields {
        from_name: form.name.trim().to_owned(),
        from_email: form.email.trim().to_owned(),
        subject: form.subject.trim().to_owned(),
        message: form.message.trim().to_owned(),
    })
}

#[cfg(feature = "hydrate")]
async fn deliver(
    fields: MailFields,
    form: RwSignal<ContactForm>,
    toast: RwSignal<NotificationState>,
) {
    let Some(config) = MailConfig::from_build_env() else {
        log::warn!("mail relay credentials missing; refusing to fake a send");
        toast.update(|t| t.show(NOT_CONFIGURED_MESSAGE, NotificationKind::Error));
        return;
    };
    match mail::send(&config, &fields).await {
        Ok(()) => {
            toast.update(|t| t.show(SENT_MESSAGE, NotificationKind::Success));
            form.set(ContactForm::default());
        }
        Err(err) => {
            log::warn!("contact form delivery failed: {err}");
            toast.update(|t| t.show(SEND_FAILED_MESSAGE, NotificationKind::Error));
        }
    }
}

/// Contact section with the validated form.
#[component]
pub fn Contact() -> impl IntoView {
    let toast = expect_context::<RwSignal<NotificationState>>();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let blur_check = move |field: Field| {
        let value = form.with(|f| f.value(field).to_owned());
        errors.update(|e| e.set(field, validate_field(field, &value)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let fields = match decide_submission(&form.get()) {
            Ok(fields) => fields,
            Err(field_errors) => {
                errors.set(field_errors);
                toast.update(|t| t.show(MISSING_FIELDS_MESSAGE, NotificationKind::Error));
                return;
            }
        };
        errors.set(FieldErrors::default());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            deliver(fields, form, toast).await;
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fields;
            busy.set(false);
        }
    };

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">"Get In Touch"</h2>
            <div class="contact__layout">
                <div class="contact-item reveal">
                    <h3>"Let's talk"</h3>
                    <p>"Have a project in mind? Send a message and I'll reply within a day."</p>
                </div>

                <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
                    <div class="form-group">
                        <input
                            class=move || input_class(errors.get().name)
                            type="text"
                            name="name"
                            placeholder="Your name"
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                form.update(|f| f.name = event_target_value(&ev));
                                errors.update(|e| e.clear(Field::Name));
                            }
                            on:blur=move |_| blur_check(Field::Name)
                        />
                        {move || {
                            errors.get().name.map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <input
                            class=move || input_class(errors.get().email)
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                                errors.update(|e| e.clear(Field::Email));
                            }
                            on:blur=move |_| blur_check(Field::Email)
                        />
                        {move || {
                            errors.get().email.map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <input
                            class=move || input_class(errors.get().subject)
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            prop:value=move || form.get().subject
                            on:input=move |ev| {
                                form.update(|f| f.subject = event_target_value(&ev));
                                errors.update(|e| e.clear(Field::Subject));
                            }
                            on:blur=move |_| blur_check(Field::Subject)
                        />
                        {move || {
                            errors.get().subject.map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <div class="form-group">
                        <textarea
                            class=move || input_class(errors.get().message)
                            name="message"
                            rows="6"
                            placeholder="Your message"
                            prop:value=move || form.get().message
                            on:input=move |ev| {
                                form.update(|f| f.message = event_target_value(&ev));
                                errors.update(|e| e.clear(Field::Message));
                            }
                            on:blur=move |_| blur_check(Field::Message)
                        ></textarea>
                        {move || {
                            errors.get().message.map(|msg| view! { <div class="field-error">{msg}</div> })
                        }}
                    </div>

                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
