//! Integration tests for the visible-directory locator.

use automation::{
    fallback_directory, visible_directory, AutomationError, AutomationSurface, Bounds,
    DialogChoice, DialogRequest,
};

/// Scripted desktop state for the locator flow.
struct FakeDesktop {
    visible: bool,
    visibility_fails: bool,
    window: Option<Bounds>,
    desktop: Bounds,
    target: String,
    activations: u32,
    moved_to: Vec<Bounds>,
}

impl FakeDesktop {
    fn hidden() -> Self {
        FakeDesktop {
            visible: false,
            visibility_fails: false,
            window: None,
            desktop: Bounds {
                x: 0.0,
                y: 0.0,
                width: 1920.0,
                height: 1080.0,
            },
            target: "/Users/x/Pictures".to_string(),
            activations: 0,
            moved_to: Vec::new(),
        }
    }

    fn with_window(window: Bounds) -> Self {
        FakeDesktop {
            visible: true,
            window: Some(window),
            ..FakeDesktop::hidden()
        }
    }

    fn without_windows() -> Self {
        FakeDesktop {
            visible: true,
            ..FakeDesktop::hidden()
        }
    }
}

impl AutomationSurface for FakeDesktop {
    fn show_choice_dialog(
        &mut self,
        _request: &DialogRequest,
    ) -> Result<DialogChoice, AutomationError> {
        unreachable!("locator flow never shows dialogs")
    }

    fn file_manager_visible(&mut self) -> Result<bool, AutomationError> {
        if self.visibility_fails {
            return Err(AutomationError::Unavailable(
                "automation permission denied".to_string(),
            ));
        }
        Ok(self.visible)
    }

    fn activate_file_manager(&mut self) -> Result<(), AutomationError> {
        self.activations += 1;
        Ok(())
    }

    fn reveal_path(&mut self, _path: &str) -> Result<(), AutomationError> {
        unreachable!("locator flow never reveals paths")
    }

    fn front_window_bounds(&mut self) -> Result<Option<Bounds>, AutomationError> {
        Ok(self.window)
    }

    fn desktop_bounds(&mut self) -> Result<Bounds, AutomationError> {
        Ok(self.desktop)
    }

    fn set_front_window_bounds(&mut self, bounds: Bounds) -> Result<(), AutomationError> {
        self.moved_to.push(bounds);
        Ok(())
    }

    fn front_window_target(&mut self) -> Result<String, AutomationError> {
        Ok(self.target.clone())
    }
}

#[test]
fn hidden_file_manager_falls_back() {
    let mut desktop = FakeDesktop::hidden();

    let dir = visible_directory(&mut desktop).expect("Failed to run locator flow");

    assert_eq!(dir, fallback_directory());
    assert_eq!(desktop.activations, 0);
    assert!(desktop.moved_to.is_empty());
}

#[test]
fn zero_windows_falls_back_after_activating() {
    let mut desktop = FakeDesktop::without_windows();

    let dir = visible_directory(&mut desktop).expect("Failed to run locator flow");

    assert_eq!(dir, fallback_directory());
    assert_eq!(desktop.activations, 1);
    assert!(desktop.moved_to.is_empty());
}

#[test]
fn repositions_window_and_returns_its_target() {
    let mut desktop = FakeDesktop::with_window(Bounds {
        x: 40.0,
        y: 60.0,
        width: 800.0,
        height: 600.0,
    });

    let dir = visible_directory(&mut desktop).expect("Failed to run locator flow");

    assert_eq!(dir, "/Users/x/Pictures");
    assert_eq!(desktop.activations, 1);
    assert_eq!(
        desktop.moved_to,
        vec![Bounds {
            x: 560.0,
            y: 240.0,
            width: 1360.0,
            height: 840.0,
        }]
    );
}

#[test]
fn small_desktop_geometry() {
    let mut desktop = FakeDesktop::with_window(Bounds {
        x: 0.0,
        y: 0.0,
        width: 300.0,
        height: 200.0,
    });
    desktop.desktop = Bounds {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 500.0,
    };

    visible_directory(&mut desktop).expect("Failed to run locator flow");

    assert_eq!(
        desktop.moved_to,
        vec![Bounds {
            x: 350.0,
            y: 150.0,
            width: 650.0,
            height: 350.0,
        }]
    );
}

#[test]
fn enumeration_failure_propagates() {
    let mut desktop = FakeDesktop::hidden();
    desktop.visibility_fails = true;

    let result = visible_directory(&mut desktop);

    assert!(matches!(result, Err(AutomationError::Unavailable(_))));
    assert_eq!(desktop.activations, 0);
    assert!(desktop.moved_to.is_empty());
}
