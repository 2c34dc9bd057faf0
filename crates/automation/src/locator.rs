//! Visible-directory locator for the file manager's frontmost window.

use crate::error::AutomationError;
use crate::surface::AutomationSurface;
use crate::types::Bounds;

/// Directory reported when no file manager window is visible.
///
/// `~/Downloads` with the tilde expanded; the literal form is used only when
/// the home directory cannot be determined.
pub fn fallback_directory() -> String {
    match dirs::home_dir() {
        Some(home) => home.join("Downloads").to_string_lossy().into_owned(),
        None => "~/Downloads".to_string(),
    }
}

/// Compute the rectangle applied to the front window before its target is
/// read.
///
/// The top-left corner centers the window's current size on the desktop;
/// the new width and height are half the desktop plus half the window, so
/// the window grows rather than staying its size. The invoking tool depends
/// on this exact rectangle; it must not be changed to a symmetric centering.
pub fn reposition_bounds(desktop: Bounds, window: Bounds) -> Bounds {
    let half_width = desktop.width / 2.0;
    let half_height = desktop.height / 2.0;

    Bounds {
        x: half_width - window.width / 2.0,
        y: half_height - window.height / 2.0,
        width: half_width + window.width / 2.0,
        height: half_height + window.height / 2.0,
    }
}

/// Locate the directory currently displayed by the file manager.
///
/// If the file manager is running and visible with at least one open
/// window, it is brought to the front, its frontmost window is repositioned
/// per [`reposition_bounds`], and the directory that window displays is
/// returned. If the file manager is not visible, or visible with zero
/// windows, the fallback directory is returned and no window is touched.
///
/// # Returns
///
/// Returns the displayed directory, or [`fallback_directory`].
///
/// # Errors
///
/// Returns an error if process or window enumeration fails (automation
/// permission denied, no desktop session).
pub fn visible_directory<S: AutomationSurface>(
    surface: &mut S,
) -> Result<String, AutomationError> {
    if !surface.file_manager_visible()? {
        return Ok(fallback_directory());
    }

    surface.activate_file_manager()?;

    let window = match surface.front_window_bounds()? {
        Some(bounds) => bounds,
        None => return Ok(fallback_directory()),
    };

    let desktop = surface.desktop_bounds()?;
    surface.set_front_window_bounds(reposition_bounds(desktop, window))?;

    surface.front_window_target()
}
