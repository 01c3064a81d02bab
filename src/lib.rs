// src/lib.rs

//! Operation-tagged errors with cause chains.
//!
//! ```
//! use operr::{DetailedError, root_of};
//!
//! let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
//! let err = DetailedError::new("svc.Fetch")
//!     .with_cause(io)
//!     .with_message("fetch failed");
//!
//! assert_eq!(err.to_string(), "fetch failed");
//! assert_eq!(root_of(&err).to_string(), "eof");
//! ```

pub mod absent;
pub mod detailed;
pub mod op;
pub mod resolve;
pub mod sentinels;

pub use absent::{MaybeDetailed, MaybeDetailedBuilder};
pub use detailed::{Cause, DEFAULT_MESSAGE, DetailedError};
pub use op::Op;
pub use resolve::{Chain, Report, as_detailed, as_detailed_anyhow, chain, root, root_of};
pub use sentinels::{ERR_NOT_FOUND, NotFound, is_not_found, not_found};

pub type Result<T, E = DetailedError> = std::result::Result<T, E>;
