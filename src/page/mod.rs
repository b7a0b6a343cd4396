//! Page - Host Page Model
//!
//! The page owns every render target in insertion order. Components look up a
//! target once at setup and keep the returned [`TargetHandle`].

mod target;
mod terminal;

pub use target::*;
pub use terminal::*;

use hashlink::LinkedHashMap;

use crate::error::{Error, Result};

/// Keyed collection of render targets
#[derive(Debug, Default)]
pub struct Page {
    targets: LinkedHashMap<String, TargetHandle>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target, replacing any previous target with the same key
    pub fn add_target(&mut self, target: RenderTarget) -> TargetHandle {
        let key = target.key().to_string();
        let handle = TargetHandle::new(target);
        self.targets.insert(key, handle.clone());
        handle
    }

    /// Look up a target by key
    pub fn target(&self, key: &str) -> Option<TargetHandle> {
        self.targets.get(key).cloned()
    }

    /// Look up a target by key, failing if the page has none
    pub fn require(&self, key: &str) -> Result<TargetHandle> {
        self.target(key).ok_or_else(|| Error::Invalid {
            message: format!("Render target not found: {key}"),
        })
    }

    /// Snapshots of all targets in insertion order
    pub fn snapshots(&self) -> Vec<RenderTarget> {
        self.targets.values().map(TargetHandle::snapshot).collect()
    }
}
