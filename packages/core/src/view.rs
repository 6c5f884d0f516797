//! View toggles and transient feedback shared by the list screens.

use serde::{Deserialize, Serialize};

/// Message shown when a request fails; the console does not distinguish causes.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Grid of cards or table of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

/// Collapsible toolbar panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Filter,
    Sort,
    Search,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Search, Panel::Filter, Panel::Sort];

    pub fn label(self) -> &'static str {
        match self {
            Panel::Filter => "Filter",
            Panel::Sort => "Sort",
            Panel::Search => "Search",
        }
    }
}

/// Which toolbar panel is expanded; at most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelToggle(Option<Panel>);

impl PanelToggle {
    pub fn open(&self) -> Option<Panel> {
        self.0
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        self.0 == Some(panel)
    }

    /// Open `panel`, closing any other; toggling the open panel closes it.
    pub fn toggle(&mut self, panel: Panel) {
        self.0 = if self.0 == Some(panel) { None } else { Some(panel) };
    }

    pub fn close(&mut self) {
        self.0 = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification raised by a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    /// Error toast with the generic failure message.
    pub fn failure() -> Self {
        Self::error(GENERIC_FAILURE)
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panels_are_mutually_exclusive() {
        let mut panels = PanelToggle::default();
        assert_eq!(panels.open(), None);

        panels.toggle(Panel::Filter);
        assert!(panels.is_open(Panel::Filter));

        panels.toggle(Panel::Sort);
        assert!(panels.is_open(Panel::Sort));
        assert!(!panels.is_open(Panel::Filter));

        panels.toggle(Panel::Sort);
        assert_eq!(panels.open(), None);
    }

    #[test]
    fn view_mode_toggles() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }
}
