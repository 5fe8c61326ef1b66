//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage glyphs throughout the
//! application, supporting emoji, Unicode, and ASCII fallbacks. The brand
//! mark in the navigation bar is theme-dependent, so switching themes swaps
//! the "logo" the way the original dashboard swaps its image asset between
//! light and dark.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Glyphs for the task-type column.
#[derive(Debug, Clone)]
pub struct TaskTypeIcons {
    pub bug: &'static str,
    pub feature: &'static str,
    pub documentation: &'static str,
    pub unknown: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub brand: &'static str,
    pub search: &'static str,
    pub go_to: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub success: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub task_type: TaskTypeIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            task_type: TaskTypeIcons {
                bug: "🐞",
                feature: "🔧",
                documentation: "📄",
                unknown: "❔",
            },
            ui: UiIcons {
                brand: "🗂️",
                search: "🔍",
                go_to: "➜",
                error: "❌",
                info: "💡",
                success: "✅",
                selected: "☑",
                unselected: "☐",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            task_type: TaskTypeIcons {
                bug: "●",
                feature: "◆",
                documentation: "▤",
                unknown: "?",
            },
            ui: UiIcons {
                brand: "◧",
                search: "◎",
                go_to: "→",
                error: "✗",
                info: "ⓘ",
                success: "✓",
                selected: "■",
                unselected: "□",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            task_type: TaskTypeIcons {
                bug: "!",
                feature: "*",
                documentation: "#",
                unknown: "?",
            },
            ui: UiIcons {
                brand: "[=]",
                search: "/",
                go_to: "->",
                error: "X",
                info: "i",
                success: "+",
                selected: "[x]",
                unselected: "[ ]",
            },
        }
    }

    /// Marker for a task type. Total over the enum so rows never render blank.
    #[must_use]
    pub fn task_type_icon(&self, kind: crate::api::TaskType) -> &'static str {
        let icons = self.icons().task_type;
        match kind {
            crate::api::TaskType::Bug => icons.bug,
            crate::api::TaskType::Feature => icons.feature,
            crate::api::TaskType::Documentation => icons.documentation,
            crate::api::TaskType::Unknown => icons.unknown,
        }
    }

    /// Convenience methods for commonly used icons
    #[must_use]
    pub fn brand(&self) -> &'static str {
        self.icons().ui.brand
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn go_to(&self) -> &'static str {
        self.icons().ui.go_to
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn success(&self) -> &'static str {
        self.icons().ui.success
    }

    #[must_use]
    pub fn selected(&self) -> &'static str {
        self.icons().ui.selected
    }

    #[must_use]
    pub fn unselected(&self) -> &'static str {
        self.icons().ui.unselected
    }
}
