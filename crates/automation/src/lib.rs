//! # Automation
//!
//! Desktop automation helpers for a download/fetch tool.
//!
//! Two independent one-shot flows built on a small capability seam over the
//! OS desktop automation facilities:
//!
//! - [`confirm_download`]: ask, via a native modal dialog, whether to
//!   reveal a finished download in the file manager, and reveal it on
//!   `Yes`. The dialog gives up after 8 seconds and resolves to `Yes`.
//! - [`visible_directory`]: report the directory shown by the file
//!   manager's frontmost window, repositioning that window on the way, or
//!   fall back to `~/Downloads` when no window is visible.
//!
//! Both flows are stateless and synchronous: each invocation queries the
//! desktop fresh, performs at most one side effect, and returns.
//!
//! The flows are generic over [`AutomationSurface`]; [`OsaSurface`] is the
//! production implementation driving Finder and System Events through
//! `osascript`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use automation::{confirm_download, visible_directory, OsaSurface};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut surface = OsaSurface::new();
//!
//! let dir = visible_directory(&mut surface)?;
//! println!("current directory: {dir}");
//!
//! confirm_download(&mut surface, "/Users/x/Downloads/archive.zip")?;
//! # Ok(())
//! # }
//! ```

pub mod dialog;
pub mod error;
pub mod locator;
pub mod osa;
pub mod surface;
pub mod types;

// Re-export main types
pub use dialog::{confirm_download, DIALOG_TITLE, GIVE_UP_AFTER};
pub use error::AutomationError;
pub use locator::{fallback_directory, reposition_bounds, visible_directory};
pub use osa::OsaSurface;
pub use surface::AutomationSurface;
pub use types::{Bounds, DialogChoice, DialogRequest};
