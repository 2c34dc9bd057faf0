//! `osascript`-backed implementation of the automation surface.
//!
//! Each capability call runs a one-shot JXA (JavaScript for Automation)
//! snippet through `osascript -l JavaScript` and exchanges JSON with it on
//! stdout. Nothing is cached between calls; the desktop state is queried
//! fresh every time.

use crate::error::AutomationError;
use crate::surface::AutomationSurface;
use crate::types::{Bounds, DialogChoice, DialogRequest};
use serde::Deserialize;
use std::process::Command;
use tracing::debug;

/// AppleScript error code raised when the user presses the cancel button.
const USER_CANCELED: &str = "(-128)";

/// Production surface driving Finder and System Events via `osascript`.
#[derive(Debug, Default)]
pub struct OsaSurface;

/// Reply printed by the dialog snippet.
#[derive(Debug, Deserialize)]
struct DialogReply {
    button: String,

    #[serde(default, rename = "gaveUp")]
    gave_up: bool,
}

impl OsaSurface {
    pub fn new() -> Self {
        OsaSurface
    }

    /// Run a JXA snippet and return its trimmed stdout.
    fn run(&self, kind: &str, script: &str) -> Result<String, AutomationError> {
        let output = Command::new("osascript")
            .args(["-l", "JavaScript", "-e", script])
            .output()
            .map_err(|e| {
                AutomationError::Unavailable(format!("failed to run osascript: {e}"))
            })?;

        debug!(kind, status = %output.status, "ran osascript");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AutomationError::Unavailable(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn parse_reply<T: serde::de::DeserializeOwned>(
    kind: &str,
    raw: &str,
) -> Result<T, AutomationError> {
    serde_json::from_str(raw).map_err(|e| {
        AutomationError::Unavailable(format!("bad {kind} reply {raw:?}: {e}"))
    })
}

/// Render a string as a JavaScript string literal.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Build the JXA snippet presenting a choice dialog.
///
/// The snippet prints `{"button": ..., "gaveUp": ...}` on stdout. A cancel
/// click does not reach stdout at all: it aborts the script with
/// AppleScript error `-128`, which the caller maps back to a choice.
fn dialog_script(request: &DialogRequest) -> String {
    let labels: Vec<&str> = request.buttons.iter().map(|b| b.label()).collect();

    format!(
        r#"(() => {{
    const app = Application.currentApplication();
    app.includeStandardAdditions = true;
    const reply = app.displayDialog({message}, {{
        buttons: {buttons},
        defaultButton: {default_button},
        cancelButton: {cancel_button},
        withTitle: {title},
        givingUpAfter: {give_up},
    }});
    return JSON.stringify({{ button: reply.buttonReturned, gaveUp: reply.gaveUp }});
}})()"#,
        message = js_string(&request.message),
        buttons = serde_json::json!(labels),
        default_button = js_string(request.default_button.label()),
        cancel_button = js_string(request.cancel_button.label()),
        title = js_string(&request.title),
        give_up = request.give_up_after.as_secs(),
    )
}

/// Resolve a finished `osascript` dialog run to a choice.
///
/// A successful run prints a [`DialogReply`]. A cancel click aborts the
/// script with AppleScript error `-128`; that is a user answer, not an
/// automation outage, and resolves to the cancel button. Any other failure
/// propagates.
fn resolve_dialog_outcome(
    request: &DialogRequest,
    outcome: Result<String, AutomationError>,
) -> Result<DialogChoice, AutomationError> {
    match outcome {
        Ok(raw) => {
            let reply: DialogReply = parse_reply("dialog", &raw)?;
            resolve_dialog_reply(request, &reply)
        }
        Err(AutomationError::Unavailable(message)) if message.contains(USER_CANCELED) => {
            Ok(request.cancel_button)
        }
        Err(e) => Err(e),
    }
}

/// Resolve a dialog reply against the request that produced it.
///
/// A gave-up reply carries an empty button name and resolves to the default
/// button, so a timed-out dialog behaves like an explicit default click.
fn resolve_dialog_reply(
    request: &DialogRequest,
    reply: &DialogReply,
) -> Result<DialogChoice, AutomationError> {
    if reply.gave_up {
        return Ok(request.default_button);
    }

    DialogChoice::from_label(&reply.button).ok_or_else(|| {
        AutomationError::Unavailable(format!("unexpected dialog button {:?}", reply.button))
    })
}

impl AutomationSurface for OsaSurface {
    fn show_choice_dialog(
        &mut self,
        request: &DialogRequest,
    ) -> Result<DialogChoice, AutomationError> {
        let script = dialog_script(request);
        resolve_dialog_outcome(request, self.run("dialog", &script))
    }

    fn file_manager_visible(&mut self) -> Result<bool, AutomationError> {
        const SCRIPT: &str = r#"JSON.stringify(Application("System Events").processes.whose({ visible: true, name: "Finder" }).length > 0)"#;

        let raw = self.run("visibility", SCRIPT)?;
        parse_reply("visibility", &raw)
    }

    fn activate_file_manager(&mut self) -> Result<(), AutomationError> {
        self.run("activate", r#"Application("Finder").activate()"#)
            .map(|_| ())
    }

    fn reveal_path(&mut self, path: &str) -> Result<(), AutomationError> {
        let script = format!(
            r#"(() => {{
    const finder = Application("Finder");
    finder.open(Path({path}));
}})()"#,
            path = js_string(path),
        );

        self.run("reveal", &script).map(|_| ())
    }

    fn front_window_bounds(&mut self) -> Result<Option<Bounds>, AutomationError> {
        const SCRIPT: &str = r#"(() => {
    const finder = Application("Finder");
    if (finder.windows.length === 0) {
        return JSON.stringify(null);
    }
    const b = finder.windows[0].bounds();
    return JSON.stringify({ x: b.x, y: b.y, width: b.width, height: b.height });
})()"#;

        let raw = self.run("front-window", SCRIPT)?;
        parse_reply("front-window", &raw)
    }

    fn desktop_bounds(&mut self) -> Result<Bounds, AutomationError> {
        const SCRIPT: &str = r#"(() => {
    const b = Application("Finder").desktop.window.bounds();
    return JSON.stringify({ x: b.x, y: b.y, width: b.width, height: b.height });
})()"#;

        let raw = self.run("desktop", SCRIPT)?;
        parse_reply("desktop", &raw)
    }

    fn set_front_window_bounds(&mut self, bounds: Bounds) -> Result<(), AutomationError> {
        let rect = serde_json::to_string(&bounds).map_err(|e| {
            AutomationError::Unavailable(format!("unencodable bounds: {e}"))
        })?;
        let script = format!(
            r#"Application("Finder").windows[0].bounds = {rect}"#
        );

        self.run("set-bounds", &script).map(|_| ())
    }

    fn front_window_target(&mut self) -> Result<String, AutomationError> {
        const SCRIPT: &str = r#"(() => {
    const url = Application("Finder").windows[0].target().url();
    const path = decodeURIComponent(url.replace(/^file:\/\//, ""));
    return JSON.stringify(path.length > 1 ? path.replace(/\/$/, "") : path);
})()"#;

        let raw = self.run("window-target", SCRIPT)?;
        parse_reply("window-target", &raw)
    }
}
