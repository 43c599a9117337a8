use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub progress: bool,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs {
        progress: progress_enabled(std::io::stderr().is_terminal(), flags),
    });
}

/// Spinners draw on stderr and only when a human is watching.
fn progress_enabled(is_tty: bool, flags: &GlobalFlags) -> bool {
    is_tty && !flags.quiet && flags.format != OutputFormat::Json
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs { progress: false })
}
