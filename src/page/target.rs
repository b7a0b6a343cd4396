//! RenderTarget - Keyed Output Region
//!
//! A render target is owned by the [`Page`](super::Page); components hold a
//! [`TargetHandle`] and only ever replace its content, style and visibility.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::theme::VisualStyle;

/// Displayed content of a render target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetContent {
    #[default]
    Empty,
    /// Plain text
    Text(String),
    /// One list entry per item
    List(Vec<String>),
    /// Text lines separated by line breaks
    Lines(Vec<String>),
}

impl TargetContent {
    /// Flatten to display text, list entries and lines joined by `\n`
    pub fn text(&self) -> String {
        match self {
            TargetContent::Empty => String::new(),
            TargetContent::Text(text) => text.clone(),
            TargetContent::List(items) | TargetContent::Lines(items) => items.join("\n"),
        }
    }

    /// List entries, empty unless the content is a list
    pub fn list_items(&self) -> &[String] {
        match self {
            TargetContent::List(items) => items,
            _ => &[],
        }
    }
}

/// An addressable output region identified by a stable key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    key: String,
    content: TargetContent,
    style: Option<VisualStyle>,
    visible: bool,
}

impl RenderTarget {
    /// Create a visible, empty target
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: TargetContent::Empty,
            style: None,
            visible: true,
        }
    }

    /// Builder: initial placeholder text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = TargetContent::Text(text.into());
        self
    }

    /// Builder: initial visibility
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    // ==================== Getters ====================

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content(&self) -> &TargetContent {
        &self.content
    }

    pub fn style(&self) -> Option<&VisualStyle> {
        self.style.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    // ==================== Mutations ====================

    /// Drop any displayed content
    pub fn clear(&mut self) {
        self.content = TargetContent::Empty;
    }

    /// Replace the displayed content
    pub fn set_content(&mut self, content: TargetContent) {
        self.content = content;
    }

    pub fn set_style(&mut self, style: VisualStyle) {
        self.style = Some(style);
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Shared reference to a page-owned render target
#[derive(Debug, Clone)]
pub struct TargetHandle(Arc<Mutex<RenderTarget>>);

impl TargetHandle {
    pub(crate) fn new(target: RenderTarget) -> Self {
        Self(Arc::new(Mutex::new(target)))
    }

    /// Run `f` with exclusive access to the target
    pub fn update<R>(&self, f: impl FnOnce(&mut RenderTarget) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the current target state
    pub fn snapshot(&self) -> RenderTarget {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, RenderTarget> {
        // Every mutation leaves a complete target, so poisoning is ignored
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
