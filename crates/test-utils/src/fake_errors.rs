//! Foreign error types for building chains in tests.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, OnceLock};

use operr::Cause;

/// A foreign error wrapping another one, rendered as `context: source`.
#[derive(Debug)]
pub struct Wrapped {
    context: String,
    source: Cause,
}

impl Wrapped {
    pub fn new<E>(context: &str, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::shared(context, Arc::new(source))
    }

    pub fn shared(context: &str, source: Cause) -> Self {
        Self {
            context: context.to_string(),
            source,
        }
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref() as &(dyn Error + 'static))
    }
}

/// A foreign error whose source is set after construction, which is the only
/// way to close a loop in a cause chain.
///
/// Loops built from `Link`s are never freed; that is acceptable in tests.
pub struct Link {
    name: String,
    next: OnceLock<Cause>,
}

impl Link {
    pub fn new(name: &str) -> Arc<Link> {
        Arc::new(Link {
            name: name.to_string(),
            next: OnceLock::new(),
        })
    }

    /// Set the source. Returns `false` if it was already set.
    pub fn point_to(&self, next: Cause) -> bool {
        self.next.set(next).is_ok()
    }
}

/// Two links pointing at each other: `a -> b -> a`.
pub fn link_cycle(a: &str, b: &str) -> (Arc<Link>, Arc<Link>) {
    let a = Link::new(a);
    let b = Link::new(b);
    a.point_to(b.clone());
    b.point_to(a.clone());
    (a, b)
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// Manual impl: a derived one would recurse forever around a loop.
impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("name", &self.name)
            .field("linked", &self.next.get().is_some())
            .finish()
    }
}

impl Error for Link {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.next.get().map(|next| next.as_ref() as &(dyn Error + 'static))
    }
}
