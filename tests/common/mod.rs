#![allow(dead_code)]

use std::error::Error;
use std::io;
use std::sync::Arc;

use operr::Cause;

pub use operr_test_utils::{init_tracing, same_node};

/// A shared end-of-file leaf, like `io.EOF`.
pub fn eof() -> Cause {
    Arc::new(io::Error::from(io::ErrorKind::UnexpectedEof))
}

pub fn as_dyn(cause: &Cause) -> &(dyn Error + 'static) {
    &**cause
}
