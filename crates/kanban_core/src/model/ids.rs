//! Id and timestamp collaborators.
//!
//! # Responsibility
//! - Supply fresh entity ids for lists, cards and comments.
//! - Supply the display-formatted creation time for comments.
//!
//! # Invariants
//! - Generated ids never repeat within one generator lifetime.
//! - Both collaborators are substitutable for deterministic tests.

use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

/// en-US style `MM/DD/YYYY, hh:mm AM`.
pub const COMMENT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M %p";

/// Source of unique string ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Source of formatted current-time strings.
pub trait Clock {
    fn now_formatted(&self) -> String;
}

/// Random v4 UUID ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic counter ids with an optional prefix.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: first,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let value = self.next;
        self.next += 1;
        format!("{}{value}", self.prefix)
    }
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_formatted(&self) -> String {
        format_timestamp(&Local::now())
    }
}

/// Always returns the same timestamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn now_formatted(&self) -> String {
        self.0.clone()
    }
}

/// Formats `at` with [`COMMENT_TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(COMMENT_TIMESTAMP_FORMAT).to_string()
}
