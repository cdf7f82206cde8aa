use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    clock::now_unix_millis,
    config::RelayConfig,
    cooldown::{
        ContactForm, SubmissionEvent, SubmissionLedger, SubmissionState, SubmitRejected,
    },
    frontend::{browser::browser_store, log},
    logging::LogLevel,
    relay,
};

impl Reducible for SubmissionState {
    type Action = SubmissionEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn restore_submission_state() -> SubmissionState {
    let remaining = SubmissionLedger::new(browser_store()).remaining_at(now_unix_millis());
    if remaining > 0 {
        log(
            LogLevel::Info,
            "cooldown_restored",
            serde_json::json!({ "remaining_secs": remaining }),
        );
    }
    SubmissionState::restored(remaining)
}

fn field_setter<E, F>(form: &UseStateHandle<ContactForm>, read: fn(&E) -> String, apply: F) -> Callback<InputEvent>
where
    E: wasm_bindgen::JsCast + 'static,
    F: Fn(&mut ContactForm, String) + 'static,
{
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        let target: E = event.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, read(&target));
        form.set(next);
    })
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let submission = use_reducer(restore_submission_state);
    let form = use_state(ContactForm::default);
    let form_error = use_state(|| None::<String>);

    {
        let dispatcher = submission.dispatcher();
        use_effect_with(submission.is_counting_down(), move |counting| {
            let ticker = counting.then(|| {
                Interval::new(1_000, move || dispatcher.dispatch(SubmissionEvent::Tick))
            });
            move || drop(ticker)
        });
    }

    let on_name = field_setter(&form, HtmlInputElement::value, |form, value| form.name = value);
    let on_email = field_setter(&form, HtmlInputElement::value, |form, value| form.email = value);
    let on_message =
        field_setter(&form, HtmlTextAreaElement::value, |form, value| form.message = value);

    let onsubmit = {
        let submission = submission.clone();
        let form = form.clone();
        let form_error = form_error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = (*form).clone();

            if let Err(rejected) = submission.check(&current) {
                log(
                    LogLevel::Debug,
                    "submission_rejected",
                    serde_json::json!({ "reason": rejected.to_string() }),
                );
                if let SubmitRejected::InvalidForm(error) = rejected {
                    form_error.set(Some(error.to_string()));
                }
                return;
            }

            form_error.set(None);
            submission.dispatch(SubmissionEvent::Started);
            log(LogLevel::Info, "submission_start", serde_json::json!({}));

            let dispatcher = submission.dispatcher();
            let form = form.clone();
            spawn_local(async move {
                match relay::send(&RelayConfig::from_build_env(), &current).await {
                    Ok(()) => {
                        let submitted_at = now_unix_millis();
                        if !SubmissionLedger::new(browser_store()).record(submitted_at) {
                            log(
                                LogLevel::Warn,
                                "cooldown_persist_failed",
                                serde_json::json!({ "submitted_at": submitted_at }),
                            );
                        }
                        dispatcher.dispatch(SubmissionEvent::Delivered);
                        form.set(ContactForm::default());
                        log(LogLevel::Info, "submission_delivered", serde_json::json!({}));
                    }
                    Err(error) => {
                        log(
                            LogLevel::Warn,
                            "submission_failed",
                            serde_json::json!({
                                "error_class": error.class(),
                                "message": error.to_string(),
                            }),
                        );
                        dispatcher.dispatch(SubmissionEvent::Failed);
                    }
                }
            });
        })
    };

    let status_message = submission.status_message().map(|(class, text)| {
        html! { <div class={classes!("status-message", class)} role="status">{text}</div> }
    });

    html! {
        <div class="page contact-page">
            <header class="contact-header">
                <h1 class="section-title">{"Let's Connect"}</h1>
                <p class="contact-subtitle">
                    {"Have a question or want to work together?"}<br />{"Drop me a message!"}
                </p>
            </header>

            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                <div class="input-group">
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        type="text"
                        name="user_name"
                        autocomplete="name"
                        required=true
                        value={form.name.clone()}
                        oninput={on_name}
                    />
                </div>

                <div class="input-group">
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        type="email"
                        name="user_email"
                        autocomplete="email"
                        required=true
                        value={form.email.clone()}
                        oninput={on_email}
                    />
                </div>

                <div class="input-group">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        required=true
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                </div>

                if let Some(error) = (*form_error).clone() {
                    <p class="form-error" role="alert">{error}</p>
                }

                <button
                    type="submit"
                    class={classes!("submit-button", (!submission.is_counting_down()).then_some("is-active"))}
                    disabled={!submission.can_submit()}
                >
                    {submission.button_label()}
                </button>

                {status_message}
            </form>
        </div>
    }
}
