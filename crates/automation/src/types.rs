//! Type definitions for the desktop helper flows.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A rectangle in screen points.
///
/// Used both for a window's frame and for the available desktop area. This
/// is also the JSON shape exchanged with the automation scripts when reading
/// or writing window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge
    pub x: f64,

    /// Top edge
    pub y: f64,

    /// Width in points
    pub width: f64,

    /// Height in points
    pub height: f64,
}

/// The two buttons of the reveal-confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    /// Dismiss without revealing
    No,

    /// Reveal the download in the file manager
    Yes,
}

impl DialogChoice {
    /// Button label shown in the dialog.
    pub fn label(self) -> &'static str {
        match self {
            DialogChoice::No => "No",
            DialogChoice::Yes => "Yes",
        }
    }

    /// Look up a choice by its button label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "No" => Some(DialogChoice::No),
            "Yes" => Some(DialogChoice::Yes),
            _ => None,
        }
    }
}

/// A modal choice dialog to present through the automation surface.
#[derive(Debug, Clone)]
pub struct DialogRequest {
    /// Message body shown in the dialog
    pub message: String,

    /// Window title
    pub title: String,

    /// Buttons in display order
    pub buttons: Vec<DialogChoice>,

    /// Button pre-selected as the default
    pub default_button: DialogChoice,

    /// Button bound to the cancel action
    pub cancel_button: DialogChoice,

    /// How long the dialog waits for input before resolving itself to the
    /// default button
    pub give_up_after: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_labels_round_trip() {
        for choice in [DialogChoice::No, DialogChoice::Yes] {
            assert_eq!(DialogChoice::from_label(choice.label()), Some(choice));
        }
        assert_eq!(DialogChoice::from_label("Maybe"), None);
    }

    #[test]
    fn bounds_serialize_as_flat_rectangle() {
        let bounds = Bounds {
            x: 1.0,
            y: 2.0,
            width: 3.0,
            height: 4.0,
        };
        let json = serde_json::to_string(&bounds).expect("Failed to serialize bounds");
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"width":3.0,"height":4.0}"#);
    }
}
