use std::{
    fs::OpenOptions,
    io::Write,
    ops::Deref,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};
use leptos::prelude::ServerFnError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Value used for the `id`/`name` attributes of the form control.
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    Validation(Field),
    #[error("a message is already being sent")]
    Pending,
    #[error("couldn't deliver message: {0}")]
    Delivery(String),
}

/// Values typed into the contact form. Always exactly three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    name: String,
    email: String,
    message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Replaces one field verbatim (no trimming).
    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the form as a deliverable message.
    pub fn message(&self) -> Result<ContactMessage, ContactError> {
        ContactMessage::new(self.name.clone(), self.email.clone(), self.message.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Fails on the first empty field, in form order.
    pub fn new(name: String, email: String, message: String) -> Result<Self, ContactError> {
        let msg = Self {
            name,
            email,
            message,
        };
        for field in Field::ALL {
            if msg.get(field).is_empty() {
                return Err(ContactError::Validation(field));
            }
        }
        Ok(msg)
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Turns the server function's answer into the outcome the form is settled with.
/// Server-side failures already carry a bare reason; anything else is a
/// transport problem and is reported as its display text.
pub fn delivery_outcome(res: Result<(), ServerFnError>) -> Result<(), ContactError> {
    res.map_err(|e| match e {
        ServerFnError::ServerError(reason) => ContactError::Delivery(reason),
        other => ContactError::Delivery(other.to_string()),
    })
}

/// Whatever accepts contact messages on behalf of the site owner.
pub trait Courier: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Shared courier, handed to server functions through context.
#[derive(Clone)]
pub struct CourierHandle(Arc<dyn Courier>);

impl CourierHandle {
    pub fn new(courier: impl Courier + 'static) -> Self {
        Self(Arc::new(courier))
    }
}

impl Deref for CourierHandle {
    type Target = dyn Courier;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

/// Records messages in the server log.
#[cfg(feature = "ssr")]
#[derive(Debug, Default)]
pub struct LogCourier;

#[cfg(feature = "ssr")]
impl Courier for LogCourier {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            message = %message.message,
            "contact form submitted"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct InboxEntry<'a> {
    received_at: DateTime<Utc>,
    #[serde(flatten)]
    message: &'a ContactMessage,
}

/// Appends each message as one JSON line to a file.
#[derive(Debug)]
pub struct InboxCourier {
    path: PathBuf,
    lock: Mutex<()>,
}

impl InboxCourier {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl Courier for InboxCourier {
    fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let entry = InboxEntry {
            received_at: Utc::now(),
            message,
        };
        let line =
            serde_json::to_string(&entry).map_err(|e| ContactError::Delivery(e.to_string()))?;

        let _guard = self
            .lock
            .lock()
            .map_err(|_| ContactError::Delivery("inbox lock poisoned".to_string()))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ContactError::Delivery(format!("{}: {e}", self.path.display())))?;
        writeln!(file, "{line}").map_err(|e| ContactError::Delivery(e.to_string()))?;

        #[cfg(feature = "ssr")]
        tracing::info!(inbox = %self.path.display(), from = %message.email, "contact message stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormData {
        let mut form = ContactFormData::default();
        form.update(Field::Name, "A");
        form.update(Field::Email, "a@b.com");
        form.update(Field::Message, "hi");
        form
    }

    #[test]
    fn test_update_field_is_verbatim() {
        let mut form = ContactFormData::default();
        form.update(Field::Message, "  spaced out  ");
        assert_eq!(form.get(Field::Message), "  spaced out  ");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.get(Field::Email), "");
    }

    #[test]
    fn test_update_field_idempotent() {
        let mut once = ContactFormData::default();
        once.update(Field::Email, "a@b.com");
        let mut twice = once.clone();
        twice.update(Field::Email, "a@b.com");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_message_requires_every_field() {
        let mut form = filled();
        assert!(form.message().is_ok());

        form.update(Field::Email, "");
        assert_eq!(form.message(), Err(ContactError::Validation(Field::Email)));

        form.update(Field::Name, "");
        // reports the first missing field in form order
        assert_eq!(form.message(), Err(ContactError::Validation(Field::Name)));
    }

    #[test]
    fn test_validation_error_names_field() {
        assert_eq!(
            ContactError::Validation(Field::Message).to_string(),
            "Message is required"
        );
    }

    #[test]
    fn test_delivery_outcome_keeps_server_reason() {
        assert_eq!(delivery_outcome(Ok(())), Ok(()));
        assert_eq!(
            delivery_outcome(Err(ServerFnError::ServerError("inbox full".to_string()))),
            Err(ContactError::Delivery("inbox full".to_string()))
        );
    }

    #[test]
    fn test_delivery_outcome_reports_transport_errors() {
        let res = delivery_outcome(Err(ServerFnError::Request("connection refused".to_string())));
        match res {
            Err(ContactError::Delivery(reason)) => assert!(reason.contains("connection refused")),
            other => panic!("expected a delivery error, got {other:?}"),
        }
    }

    #[test]
    fn test_inbox_courier_appends_json_lines() {
        let path = std::env::temp_dir().join(format!(
            "portfolio-inbox-{}-{}.jsonl",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let courier = InboxCourier::new(&path);
        let msg = filled().message().unwrap();
        courier.deliver(&msg).unwrap();
        courier.deliver(&msg).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        let entry: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(entry["name"], "A");
        assert_eq!(entry["email"], "a@b.com");
        assert_eq!(entry["message"], "hi");
        assert!(entry["received_at"].is_string());

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_inbox_courier_reports_unwritable_path() {
        let dir = std::env::temp_dir();
        // a directory can't be opened for appending
        let courier = InboxCourier::new(&dir);
        let res = courier.deliver(&filled().message().unwrap());
        assert!(matches!(res, Err(ContactError::Delivery(_))));
    }
}
