// src/absent.rs

//! Accessors and builders that tolerate a missing error.
//!
//! Code that may or may not hold a [`DetailedError`] can call these on the
//! `Option` directly. An absent error reads as empty (`""`, an empty [`Op`],
//! no cause) and builder calls on it stay absent instead of failing.

use std::error::Error;
use std::fmt;

use crate::detailed::DetailedError;
use crate::op::Op;

static EMPTY_OP: Op = Op::EMPTY;

/// Read access to a possibly absent [`DetailedError`].
pub trait MaybeDetailed<'a> {
    /// The message, or `""` when absent.
    fn message(self) -> &'a str;

    /// The operation tag, or the empty tag when absent.
    fn op(self) -> &'a Op;

    fn cause(self) -> Option<&'a (dyn Error + Send + Sync + 'static)>;

    fn unwrap_cause(self) -> Option<&'a (dyn Error + 'static)>;
}

impl<'a> MaybeDetailed<'a> for Option<&'a DetailedError> {
    fn message(self) -> &'a str {
        match self {
            Some(err) => err.message(),
            None => "",
        }
    }

    fn op(self) -> &'a Op {
        match self {
            Some(err) => err.op(),
            None => &EMPTY_OP,
        }
    }

    fn cause(self) -> Option<&'a (dyn Error + Send + Sync + 'static)> {
        self.and_then(DetailedError::cause)
    }

    fn unwrap_cause(self) -> Option<&'a (dyn Error + 'static)> {
        self.and_then(DetailedError::unwrap_cause)
    }
}

/// Fluent decoration of a possibly absent [`DetailedError`]. Every call on
/// `None` returns `None`.
pub trait MaybeDetailedBuilder: Sized {
    #[must_use]
    fn with_message(self, msg: impl Into<String>) -> Self;

    #[must_use]
    fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self;

    #[must_use]
    fn with_cause<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static;

    #[must_use]
    fn with_cause_fmt(self, args: fmt::Arguments<'_>) -> Self;
}

impl MaybeDetailedBuilder for Option<DetailedError> {
    fn with_message(self, msg: impl Into<String>) -> Self {
        self.map(|err| err.with_message(msg))
    }

    fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.map(|err| err.with_message_fmt(args))
    }

    fn with_cause<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.map(|this| this.with_cause(err))
    }

    fn with_cause_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.map(|err| err.with_cause_fmt(args))
    }
}
