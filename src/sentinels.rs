// src/sentinels.rs

//! Sentinel errors for classification by comparison.

use std::error::Error as StdError;
use std::sync::{Arc, LazyLock};

use thiserror::Error;

use crate::detailed::Cause;
use crate::resolve::root_of;

/// Non-domain-specific "value not found" condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("not found")]
pub struct NotFound;

pub const ERR_NOT_FOUND: NotFound = NotFound;

static SHARED_NOT_FOUND: LazyLock<Cause> = LazyLock::new(|| -> Cause { Arc::new(ERR_NOT_FOUND) });

/// The process-wide shared instance, for attaching with
/// [`crate::DetailedError::with_shared_cause`]. Every call returns the same
/// allocation.
pub fn not_found() -> Cause {
    Arc::clone(&SHARED_NOT_FOUND)
}

/// True when the root cause of `err` is [`ERR_NOT_FOUND`].
pub fn is_not_found(err: &(dyn StdError + 'static)) -> bool {
    root_of(err).downcast_ref::<NotFound>() == Some(&ERR_NOT_FOUND)
}
