//! Token body classification and resolution.

use std::collections::HashMap;

use crate::constants::{ARROW, CURRENT_TIMESTAMP, SERIAL_NUMBER};
use crate::error::{Error, Result};
use crate::expr::sequence::SequenceCounter;
use crate::expr::{numeric, timestamp};
use crate::ports::clock::Clock;

/// What a token body asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// `currentTimestamp->pattern`: the current time rendered with `pattern`.
    CurrentTimestamp(&'a str),
    /// `serialNumber->format`: the next counter value rendered with `format`.
    SerialNumber(&'a str),
    /// A directive name used without `->argument`.
    BareDirective(&'a str),
    /// Anything else: a caller parameter name.
    Parameter(&'a str),
}

impl<'a> Key<'a> {
    /// Classifies a token body.
    ///
    /// A body is a directive when it starts with a directive name; the
    /// argument is everything after the first `->`.
    #[must_use]
    pub fn parse(body: &'a str) -> Self {
        let is_directive = |name: &str| body.starts_with(name);
        let argument = body.split_once(ARROW).map(|(_, arg)| arg);
        match argument {
            Some(pattern) if is_directive(CURRENT_TIMESTAMP) => Self::CurrentTimestamp(pattern),
            Some(format) if is_directive(SERIAL_NUMBER) => Self::SerialNumber(format),
            None if is_directive(CURRENT_TIMESTAMP) || is_directive(SERIAL_NUMBER) => {
                Self::BareDirective(body)
            }
            _ => Self::Parameter(body),
        }
    }
}

/// Resolves token bodies against caller parameters and the built-in directives.
pub struct KeyResolver<'a> {
    params: &'a HashMap<String, String>,
    counter: &'a SequenceCounter,
    clock: &'a dyn Clock,
}

impl<'a> KeyResolver<'a> {
    /// Creates a resolver for one expansion.
    #[must_use]
    pub fn new(
        params: &'a HashMap<String, String>,
        counter: &'a SequenceCounter,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { params, counter, clock }
    }

    /// Resolves one token body.
    ///
    /// Returns `Ok(None)` for a parameter the caller did not supply. Each
    /// `serialNumber` body consumes exactly one counter value, and only once
    /// its format has parsed.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidExpression`] for a directive without `->argument`
    ///   that is not itself a supplied parameter name.
    /// - [`Error::InvalidFormatPattern`] for a bad date pattern or number format.
    pub fn resolve(&self, body: &str) -> Result<Option<String>> {
        match Key::parse(body) {
            Key::CurrentTimestamp(pattern) => timestamp::format_now(self.clock, pattern).map(Some),
            Key::SerialNumber(printf) => {
                let format = numeric::NumberFormat::parse(printf)?;
                Ok(Some(format.format(self.counter.next_value())))
            }
            Key::BareDirective(name) => match self.params.get(name) {
                Some(value) => Ok(Some(value.clone())),
                None => Err(Error::InvalidExpression { token: name.to_string() }),
            },
            Key::Parameter(name) => Ok(self.params.get(name).cloned()),
        }
    }
}
