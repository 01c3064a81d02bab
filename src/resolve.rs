// src/resolve.rs

//! Walking cause chains.
//!
//! Every traversal here goes through [`Error::source`], so chains mixing
//! [`DetailedError`]s and foreign errors are handled the same way. Nodes are
//! tracked by identity (address plus concrete type), never by content, which
//! makes the walks terminate on malformed chains that loop back on themselves.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::detailed::DetailedError;

/// Identity of a chain node.
///
/// The address alone is not enough: a wrapper holding its source inline at
/// offset 0 shares that address with the source. The wide pointer also
/// carries the vtable, which tells the two apart.
type NodeId = *const (dyn Error + 'static);

fn identity(err: &(dyn Error + 'static)) -> NodeId {
    err as NodeId
}

/// Resolve the root cause of `err`.
///
/// Returns `None` for `None`. Otherwise follows `source()` until a node has
/// no cause. If the chain loops, the walk stops at the first node seen twice
/// and returns it.
pub fn root<'a>(err: Option<&'a (dyn Error + 'static)>) -> Option<&'a (dyn Error + 'static)> {
    err.map(root_of)
}

/// [`root`] for a value that is known to be present.
pub fn root_of<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut visited = HashSet::new();
    let mut current = err;

    loop {
        if !visited.insert(identity(current)) {
            debug!(depth = visited.len(), "cycle detected in error chain");
            return current;
        }
        match current.source() {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// Iterate over `err` and each of its causes in order.
pub fn chain<'a>(err: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain::new(err)
}

/// Iterator over an error and its causes. Each distinct node is yielded
/// once; iteration ends at the root or at the first repeated node.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
    visited: HashSet<NodeId>,
}

impl<'a> Chain<'a> {
    pub fn new(err: &'a (dyn Error + 'static)) -> Self {
        Self {
            next: Some(err),
            visited: HashSet::new(),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if !self.visited.insert(identity(current)) {
            return None;
        }
        self.next = current.source();
        Some(current)
    }
}

/// Downcast a single node, looking through `Arc` and `Box` wrappers.
fn downcast_detailed<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a DetailedError> {
    if let Some(detailed) = err.downcast_ref::<DetailedError>() {
        return Some(detailed);
    }
    if let Some(shared) = err.downcast_ref::<Arc<DetailedError>>() {
        return Some(shared.as_ref());
    }
    err.downcast_ref::<Box<DetailedError>>()
        .map(|boxed| boxed.as_ref())
}

/// Find the first [`DetailedError`] in `err`'s chain, `err` included.
pub fn as_detailed<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a DetailedError> {
    let found = chain(err).find_map(downcast_detailed);
    if let Some(detailed) = found {
        trace!(op = %detailed.op(), "found detailed error in chain");
    }
    found
}

/// [`as_detailed`] for errors carried in an [`anyhow::Error`], including
/// ones buried under `.context(..)` layers.
pub fn as_detailed_anyhow(err: &anyhow::Error) -> Option<&DetailedError> {
    let inner: &(dyn Error + Send + Sync + 'static) = err.as_ref();
    as_detailed(inner)
}

/// Renders a whole chain as `outer: inner: root`.
///
/// The alternate form (`{:#}`) prefixes every [`DetailedError`] node with its
/// operation tag in brackets.
#[derive(Clone, Copy)]
pub struct Report<'a>(&'a (dyn Error + 'static));

impl<'a> Report<'a> {
    pub fn new(err: &'a (dyn Error + 'static)) -> Self {
        Report(err)
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in chain(self.0).enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            if f.alternate()
                && let Some(detailed) = downcast_detailed(err)
            {
                write!(f, "[{}] ", detailed.op())?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
