//! Color modes and how the initial one is chosen.
//!
//! This module provides:
//!
//! - [`ColorMode`]: The two themes a page can be in, `dark` and `light`
//! - [`StoredPreference`]: What the preference store held for the theme key
//! - [`initial_mode`]: The page-load decision between stored value and OS
//! - [`SystemColorScheme`]: The OS dark-scheme query for native hosts
//!
//! The OS query is backed by a global detector that can be replaced with
//! [`set_theme_detector`], which is how tests force a color mode.

mod adaptive;
mod mode;
mod preference;

pub use adaptive::{detect_color_mode, set_theme_detector, SystemColorScheme, ThemeDetector};
pub use mode::{ColorMode, ParseColorModeError};
pub use preference::{initial_mode, StoredPreference};
