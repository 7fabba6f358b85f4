//! OS color mode detection.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::mode::ColorMode;
use crate::host::ColorSchemeQuery;

/// A function reporting the OS color mode.
pub type ThemeDetector = fn() -> ColorMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used to determine whether the user prefers a light or dark theme.
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = *THEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    detector()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

/// The dark-scheme query for native hosts, answered by [`detect_color_mode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme;

impl ColorSchemeQuery for SystemColorScheme {
    fn matches_dark_preference(&self) -> bool {
        let mode = detect_color_mode();
        tracing::trace!(%mode, "queried OS color mode");
        mode == ColorMode::Dark
    }
}
