// src/detailed.rs

//! The operation-tagged error value.
//!
//! A [`DetailedError`] is created where an operation fails, decorated with a
//! message and (optionally) the lower-level error that caused it, and then
//! propagated upward unchanged. Its `Display` output is only the message;
//! use [`crate::Report`] or [`crate::Chain`] to render or walk the chain.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::op::Op;

/// Message used until [`DetailedError::with_message`] is called.
pub const DEFAULT_MESSAGE: &str = "Internal system error.";

/// A shared handle to a cause. Clones of a chain point at the same cause.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Error carrying an operation tag, a human-readable message and an optional
/// cause.
///
/// Values are meant to be built once and then only read. Sharing a
/// published chain across threads is fine; mutating it after that is not
/// synchronised.
#[derive(Debug, Clone)]
pub struct DetailedError {
    op: Op,
    msg: String,
    cause: Option<Cause>,
}

impl DetailedError {
    /// New error for `op` with [`DEFAULT_MESSAGE`] and no cause.
    pub fn new(op: impl Into<Op>) -> Self {
        Self {
            op: op.into(),
            msg: DEFAULT_MESSAGE.to_string(),
            cause: None,
        }
    }

    /// Wrap an `anyhow` error as the cause of a new error for `op`.
    pub fn from_anyhow(op: impl Into<Op>, err: anyhow::Error) -> Self {
        Self::new(op).with_shared_cause(anyhow_to_cause(err))
    }

    /// Find a `DetailedError` in `err` or anywhere in its source chain.
    pub fn try_cast<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a DetailedError> {
        crate::resolve::as_detailed(err)
    }

    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Set the message from format arguments:
    /// `err.with_message_fmt(format_args!("station {call} missing"))`.
    #[must_use]
    pub fn with_message_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.with_message(args.to_string())
    }

    #[must_use]
    pub fn with_cause<E>(self, err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.with_shared_cause(Arc::new(err))
    }

    /// Attach a cause that is already shared, without wrapping it again.
    #[must_use]
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    /// Record a formatted message error as the cause and use the same text as
    /// this error's message.
    #[must_use]
    pub fn with_cause_fmt(self, args: fmt::Arguments<'_>) -> Self {
        let cause = anyhow::Error::msg(args.to_string());
        let msg = cause.to_string();
        self.with_shared_cause(anyhow_to_cause(cause))
            .with_message(msg)
    }

    pub fn message(&self) -> &str {
        &self.msg
    }

    pub fn op(&self) -> &Op {
        &self.op
    }

    /// The attached cause, or `None` when this is the root of its chain.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// One step down the chain. Same as [`Error::source`].
    pub fn unwrap_cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }

    pub fn is_root(&self) -> bool {
        self.cause.is_none()
    }

    /// Display adapter for the whole chain starting at this error.
    pub fn report(&self) -> crate::resolve::Report<'_> {
        crate::resolve::Report::new(self)
    }
}

impl fmt::Display for DetailedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error for DetailedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.unwrap_cause()
    }
}

fn anyhow_to_cause(err: anyhow::Error) -> Cause {
    let boxed: Box<dyn Error + Send + Sync + 'static> = err.into();
    Arc::from(boxed)
}
