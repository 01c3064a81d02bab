#![allow(dead_code)]

use std::sync::Arc;

use operr::{Cause, DetailedError};

/// Builder for nested `DetailedError` chains.
///
/// Layers are added innermost first: the first `layer` wraps the leaf, the
/// last one is the error returned by `build`.
pub struct ChainBuilder {
    leaf: Option<Cause>,
    layers: Vec<(String, String)>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self {
            leaf: None,
            layers: Vec::new(),
        }
    }

    pub fn leaf(mut self, leaf: Cause) -> Self {
        self.leaf = Some(leaf);
        self
    }

    pub fn io_leaf(self, msg: &str) -> Self {
        self.leaf(Arc::new(std::io::Error::other(msg.to_string())))
    }

    pub fn layer(mut self, op: &str, msg: &str) -> Self {
        self.layers.push((op.to_string(), msg.to_string()));
        self
    }

    /// `depth` layers named `layer.0`, `layer.1`, ...
    pub fn layers(mut self, depth: usize) -> Self {
        for i in 0..depth {
            self = self.layer(&format!("layer.{i}"), &format!("layer {i} failed"));
        }
        self
    }

    pub fn build(self) -> DetailedError {
        let mut current: Option<DetailedError> = None;
        for (op, msg) in self.layers {
            let err = DetailedError::new(op).with_message(msg);
            current = Some(match (current, &self.leaf) {
                (Some(inner), _) => err.with_cause(inner),
                (None, Some(leaf)) => err.with_shared_cause(Arc::clone(leaf)),
                (None, None) => err,
            });
        }
        current.expect("ChainBuilder needs at least one layer")
    }
}

impl Default for ChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An `anyhow` error with `contexts` applied outermost last.
pub fn anyhow_chain(inner: DetailedError, contexts: &[&str]) -> anyhow::Error {
    let mut err = anyhow::Error::new(inner);
    for ctx in contexts {
        err = err.context(ctx.to_string());
    }
    err
}
