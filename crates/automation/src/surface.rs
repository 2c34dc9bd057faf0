//! Capability seam over the OS desktop automation facilities.

use crate::error::AutomationError;
use crate::types::{Bounds, DialogChoice, DialogRequest};

/// The desktop automation capabilities the helper flows consume.
///
/// Implementations must query the OS fresh on every call: the underlying
/// desktop state (process list, front window) changes between invocations
/// and must not be cached.
///
/// Every method may fail with [`AutomationError::Unavailable`] when the
/// automation surface cannot be reached; the flows propagate such failures
/// without retrying.
pub trait AutomationSurface {
    /// Present a modal choice dialog and block until it resolves.
    ///
    /// A dialog that hits its give-up timeout resolves to the request's
    /// default button, exactly as if that button had been clicked.
    fn show_choice_dialog(
        &mut self,
        request: &DialogRequest,
    ) -> Result<DialogChoice, AutomationError>;

    /// Whether the file manager process is running and visible.
    fn file_manager_visible(&mut self) -> Result<bool, AutomationError>;

    /// Bring the file manager to the front.
    fn activate_file_manager(&mut self) -> Result<(), AutomationError>;

    /// Ask the file manager to open/reveal the given path.
    ///
    /// The path is passed through verbatim; the file manager performs
    /// whatever validation it sees fit.
    fn reveal_path(&mut self, path: &str) -> Result<(), AutomationError>;

    /// Bounds of the file manager's frontmost window, or `None` when the
    /// file manager has no open windows.
    fn front_window_bounds(&mut self) -> Result<Option<Bounds>, AutomationError>;

    /// Bounds of the available desktop area.
    fn desktop_bounds(&mut self) -> Result<Bounds, AutomationError>;

    /// Move and resize the file manager's frontmost window.
    fn set_front_window_bounds(&mut self, bounds: Bounds) -> Result<(), AutomationError>;

    /// The directory displayed by the frontmost window, as a POSIX path.
    fn front_window_target(&mut self) -> Result<String, AutomationError>;
}
