//! Contact form submission state and the resubmission cooldown.
//!
//! Only a successful delivery starts a cooldown. The time of that delivery is
//! persisted under [`LAST_SUBMIT_KEY`] so the cooldown survives reloads; a
//! failed delivery leaves both the timestamp and the countdown untouched.

use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use thiserror::Error;

pub const COOLDOWN_SECONDS: u64 = 5 * 60;
pub const LAST_SUBMIT_KEY: &str = "lastSubmitTime";

/// Synchronous string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Returns `false` when the value could not be written.
    fn set(&self, key: &str, value: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (**self).set(key, value)
    }
}

thread_local! {
    static SESSION_STORE: Rc<MemoryStore> = Rc::new(MemoryStore::default());
}

/// Memory store that lives as long as the page; every caller shares it.
pub fn session_store() -> Rc<MemoryStore> {
    SESSION_STORE.with(Rc::clone)
}

/// Seconds left before another submission is allowed.
pub fn remaining_cooldown(last_submit_ms: Option<u64>, now_ms: u64) -> u64 {
    let Some(last_submit_ms) = last_submit_ms else {
        return 0;
    };

    // A timestamp from the future means the clock moved backwards.
    let Some(elapsed_ms) = now_ms.checked_sub(last_submit_ms) else {
        return COOLDOWN_SECONDS;
    };

    COOLDOWN_SECONDS.saturating_sub(elapsed_ms / 1_000)
}

/// Persisted record of the last successful submission.
pub struct SubmissionLedger<S> {
    store: S,
}

impl<S: KeyValueStore> SubmissionLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn last_submit(&self) -> Option<u64> {
        self.store
            .get(LAST_SUBMIT_KEY)
            .and_then(|value| value.trim().parse::<u64>().ok())
    }

    pub fn remaining_at(&self, now_ms: u64) -> u64 {
        remaining_cooldown(self.last_submit(), now_ms)
    }

    pub fn record(&self, now_ms: u64) -> bool {
        self.store.set(LAST_SUBMIT_KEY, &now_ms.to_string())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(FormField),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), FormError> {
        for (field, value) in [
            (FormField::Name, &self.name),
            (FormField::Email, &self.email),
            (FormField::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::Missing(field));
            }
        }

        if !looks_like_email(self.email.trim()) {
            return Err(FormError::InvalidEmail);
        }

        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("please wait {remaining}s before sending another message")]
    CoolingDown { remaining: u64 },
    #[error(transparent)]
    InvalidForm(#[from] FormError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionEvent {
    Started,
    Delivered,
    Failed,
    Tick,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub remaining_secs: u64,
}

impl SubmissionState {
    pub fn restored(remaining_secs: u64) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            remaining_secs: remaining_secs.min(COOLDOWN_SECONDS),
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending && self.remaining_secs == 0
    }

    pub fn is_counting_down(&self) -> bool {
        self.remaining_secs > 0
    }

    pub fn check(&self, form: &ContactForm) -> Result<(), SubmitRejected> {
        if self.status == SubmissionStatus::Sending {
            return Err(SubmitRejected::AlreadySending);
        }

        if self.remaining_secs > 0 {
            return Err(SubmitRejected::CoolingDown {
                remaining: self.remaining_secs,
            });
        }

        form.validate()?;
        Ok(())
    }

    pub fn apply(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::Started => {
                if self.can_submit() {
                    self.status = SubmissionStatus::Sending;
                }
            }
            SubmissionEvent::Delivered => {
                if self.status == SubmissionStatus::Sending {
                    self.status = SubmissionStatus::Success;
                    self.remaining_secs = COOLDOWN_SECONDS;
                }
            }
            SubmissionEvent::Failed => {
                if self.status == SubmissionStatus::Sending {
                    self.status = SubmissionStatus::Error;
                }
            }
            SubmissionEvent::Tick => {
                self.remaining_secs = self.remaining_secs.saturating_sub(1);
            }
        }
    }

    pub fn button_label(&self) -> String {
        if self.status == SubmissionStatus::Sending {
            "Sending...".to_string()
        } else if self.remaining_secs > 0 {
            format!("Wait {}", format_countdown(self.remaining_secs))
        } else {
            "Send Message".to_string()
        }
    }

    /// CSS class and text of the inline status banner.
    pub fn status_message(&self) -> Option<(&'static str, &'static str)> {
        match self.status {
            SubmissionStatus::Success => Some(("success", "Message sent successfully!")),
            SubmissionStatus::Error => Some(("error", "Something went wrong. Please try again.")),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }
}

pub fn format_countdown(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
