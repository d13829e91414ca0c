use std::fmt;

use crate::config::{CliArgs, ConfigDefaults};
use crate::domain::model::{DispatchMethod, ReminderRequest};
use crate::utils::error::{ReminderError, Result};

/// The resolvable fields of a reminder. An enum rather than string keys,
/// so a new field cannot be forgotten in `build` without the compiler
/// noticing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Recipients,
    Phones,
    Message,
    Subject,
    Method,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Recipients => "recipients",
            Field::Phones => "phones",
            Field::Message => "message",
            Field::Subject => "subject",
            Field::Method => "method",
        };
        write!(f, "{name}")
    }
}

/// Merges CLI-supplied values over the JSON defaults, field by field,
/// CLI taking precedence. Pure lookup over the two already-loaded
/// sources.
pub struct RequestBuilder<'a> {
    args: &'a CliArgs,
    defaults: &'a ConfigDefaults,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(args: &'a CliArgs, defaults: &'a ConfigDefaults) -> Self {
        Self { args, defaults }
    }

    /// Resolve every field once. The resulting request is immutable and
    /// never re-merged.
    pub fn build(&self) -> Result<ReminderRequest> {
        Ok(ReminderRequest {
            recipients: self.recipients()?,
            phones: self.phones()?,
            message: self.message()?,
            subject: self.subject()?,
            method: self.method(),
        })
    }

    pub fn recipients(&self) -> Result<Vec<String>> {
        pick_list(
            &self.args.recipients,
            self.defaults.default_recipients(),
            Field::Recipients,
        )
    }

    pub fn phones(&self) -> Result<Vec<String>> {
        pick_list(
            &self.args.phones,
            self.defaults.default_phones(),
            Field::Phones,
        )
    }

    pub fn message(&self) -> Result<String> {
        pick_text(
            self.args.message.as_deref(),
            self.defaults.default_message(),
            Field::Message,
        )
    }

    pub fn subject(&self) -> Result<String> {
        pick_text(
            self.args.subject.as_deref(),
            self.defaults.default_subject(),
            Field::Subject,
        )
    }

    /// The method override is the only optional field: absence from both
    /// sources means the selector falls back to its documented default.
    pub fn method(&self) -> Option<DispatchMethod> {
        self.args.method.or_else(|| self.defaults.default_method())
    }
}

fn pick_list(supplied: &[String], fallback: Option<&[String]>, field: Field) -> Result<Vec<String>> {
    if !supplied.is_empty() {
        return Ok(supplied.to_vec());
    }

    fallback
        .map(<[String]>::to_vec)
        .ok_or_else(|| ReminderError::MissingKey {
            field: field.to_string(),
        })
}

fn pick_text(supplied: Option<&str>, fallback: Option<&str>, field: Field) -> Result<String> {
    supplied
        .filter(|s| !s.trim().is_empty())
        .or(fallback)
        .map(str::to_string)
        .ok_or_else(|| ReminderError::MissingKey {
            field: field.to_string(),
        })
}
