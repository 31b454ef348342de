use std::{path::PathBuf, str::FromStr};

use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::contact::{CourierHandle, InboxCourier, LogCourier};

pub const COURIER_VAR: &str = "CONTACT_COURIER";
pub const INBOX_VAR: &str = "CONTACT_INBOX";
const DEFAULT_INBOX: &str = "contact-inbox.jsonl";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown contact courier '{0}' (expected 'log' or 'inbox')")]
    UnknownCourier(String),
    #[error("CONTACT_INBOX must not be empty")]
    EmptyInbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourierKind {
    #[default]
    Log,
    Inbox,
}

impl FromStr for CourierKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "inbox" => Ok(Self::Inbox),
            other => Err(ConfigError::UnknownCourier(other.to_string())),
        }
    }
}

/// Where contact form messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub courier: CourierKind,
    pub inbox: PathBuf,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            courier: CourierKind::default(),
            inbox: PathBuf::from(DEFAULT_INBOX),
        }
    }
}

impl ContactConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let courier = match lookup(COURIER_VAR) {
            Some(v) => v.parse()?,
            None => CourierKind::default(),
        };
        let inbox = match lookup(INBOX_VAR) {
            Some(v) if v.trim().is_empty() => return Err(ConfigError::EmptyInbox),
            Some(v) => PathBuf::from(v),
            None => PathBuf::from(DEFAULT_INBOX),
        };
        Ok(Self { courier, inbox })
    }

    #[cfg(feature = "ssr")]
    pub fn build_courier(&self) -> CourierHandle {
        match self.courier {
            CourierKind::Log => CourierHandle::new(LogCourier),
            CourierKind::Inbox => CourierHandle::new(InboxCourier::new(self.inbox.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ContactConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ContactConfig::default());
        assert_eq!(config.courier, CourierKind::Log);
        assert_eq!(config.inbox, PathBuf::from("contact-inbox.jsonl"));
    }

    #[test]
    fn test_inbox_courier() {
        let config = ContactConfig::from_lookup(lookup(&[
            ("CONTACT_COURIER", " Inbox "),
            ("CONTACT_INBOX", "/var/lib/portfolio/inbox.jsonl"),
        ]))
        .unwrap();
        assert_eq!(config.courier, CourierKind::Inbox);
        assert_eq!(config.inbox, PathBuf::from("/var/lib/portfolio/inbox.jsonl"));
    }

    #[test]
    fn test_rejects_unknown_courier() {
        let res = ContactConfig::from_lookup(lookup(&[("CONTACT_COURIER", "smtp")]));
        assert_eq!(res, Err(ConfigError::UnknownCourier("smtp".to_string())));
    }

    #[test]
    fn test_rejects_empty_inbox() {
        let res = ContactConfig::from_lookup(lookup(&[("CONTACT_INBOX", "  ")]));
        assert_eq!(res, Err(ConfigError::EmptyInbox));
    }
}
