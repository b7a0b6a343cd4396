//! Visual Styles
//!
//! Named foreground/background pairings applied to render targets.

use super::colors::{PageColors, Rgb};

/// A foreground/background pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStyle {
    pub foreground: Rgb,
    pub background: Option<Rgb>,
}

impl VisualStyle {
    /// Registration accepted
    pub fn success() -> Self {
        Self {
            foreground: PageColors::success_fg(),
            background: Some(PageColors::success_bg()),
        }
    }

    /// Registration rejected
    pub fn error() -> Self {
        Self {
            foreground: PageColors::error_fg(),
            background: Some(PageColors::error_bg()),
        }
    }

    /// User list fetch failed; text colour only
    pub fn load_failed() -> Self {
        Self {
            foreground: PageColors::load_failed(),
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_error_are_distinct() {
        let ok = VisualStyle::success();
        let err = VisualStyle::error();
        assert_ne!(ok.foreground, err.foreground);
        assert_ne!(ok.background, err.background);
    }

    #[test]
    fn test_load_failed_has_no_background() {
        let style = VisualStyle::load_failed();
        assert_eq!(style.foreground, PageColors::load_failed());
        assert!(style.background.is_none());
    }
}
