//! Reveal-confirmation dialog shown after a download completes.

use crate::error::AutomationError;
use crate::surface::AutomationSurface;
use crate::types::{DialogChoice, DialogRequest};
use std::time::Duration;

/// Title shown on the confirmation dialog.
pub const DIALOG_TITLE: &str = "📥 Github Universal Fetcher";

/// How long the dialog waits for input before resolving to the default.
pub const GIVE_UP_AFTER: Duration = Duration::from_secs(8);

impl DialogRequest {
    /// Build the reveal-confirmation dialog for a downloaded file.
    ///
    /// The path is rendered verbatim in the message; callers are
    /// responsible for passing a sensible absolute path.
    pub fn reveal_download(path: &str) -> Self {
        DialogRequest {
            message: format!(
                "Download located at {path}\nWould you like to open the location in Finder?"
            ),
            title: DIALOG_TITLE.to_string(),
            buttons: vec![DialogChoice::No, DialogChoice::Yes],
            default_button: DialogChoice::Yes,
            cancel_button: DialogChoice::No,
            give_up_after: GIVE_UP_AFTER,
        }
    }
}

/// Ask whether to reveal a downloaded file, and reveal it on `Yes`.
///
/// Presents a modal dialog offering `No`/`Yes`, with `Yes` pre-selected. If
/// the user clicks `Yes`, or the dialog gives up after its timeout (the
/// default button wins), the file manager is activated and told to reveal
/// `path`. A `No` click leaves the desktop untouched.
///
/// Calling again with the same path re-prompts; prior answers are not
/// remembered.
///
/// # Arguments
///
/// * `surface` - Automation surface to present the dialog through
/// * `path` - Path of the downloaded file, shown verbatim
///
/// # Returns
///
/// Returns the resolved [`DialogChoice`].
///
/// # Errors
///
/// Returns an error if the automation surface cannot be reached.
pub fn confirm_download<S: AutomationSurface>(
    surface: &mut S,
    path: &str,
) -> Result<DialogChoice, AutomationError> {
    let request = DialogRequest::reveal_download(path);
    let choice = surface.show_choice_dialog(&request)?;

    if choice == DialogChoice::Yes {
        surface.activate_file_manager()?;
        surface.reveal_path(path)?;
    }

    Ok(choice)
}
