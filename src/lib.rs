//! # Themeswitch
//!
//! Dark/light theme switching for a page, with the choice persisted across
//! sessions.
//!
//! On page load the controller reads the stored preference, falls back to
//! the OS color-scheme preference when nothing is stored, marks the
//! document root with a `dark` or `light` class and reveals one of two
//! indicator icons. Each activation of the toggle button flips the theme,
//! flips the icons and stores the new value.
//!
//! The page is reached only through small capability traits, so the same
//! controller drives a browser page (feature `web`), a file-backed native
//! host or an in-memory page in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{ClassList, ClassSet, MemoryStore, PreferenceStore, ThemeController};
//!
//! let root = ClassSet::new();
//! let dark_icon = ClassSet::from_classes(["hidden"]);
//! let light_icon = ClassSet::from_classes(["hidden"]);
//!
//! let store = MemoryStore::new().with_item("theme", "light");
//! let mut controller = ThemeController::builder(root.clone(), store)
//!     .dark_icon(dark_icon.clone())
//!     .light_icon(light_icon.clone())
//!     .trigger(ClassSet::new())
//!     .init(&|| true);
//!
//! // The stored value wins over the OS preference.
//! assert_eq!(root.to_string(), "light");
//! assert!(!dark_icon.has_class("hidden"));
//!
//! controller.activate();
//! assert_eq!(root.to_string(), "dark");
//! assert!(!light_icon.has_class("hidden"));
//! assert_eq!(controller.store().get_item("theme").as_deref(), Some("dark"));
//! ```
//!
//! ## Hosts
//!
//! - [`ClassSet`] and [`MemoryStore`]: in-memory elements and storage
//! - [`FileStore`]: storage persisted to a JSON file
//! - [`SystemColorScheme`]: OS color mode via `dark-light`, overridable with
//!   [`set_theme_detector`]
//! - `web::mount`: binds to the live document (feature `web`)
//!
//! ## Markup
//!
//! [`ToggleButton`] renders the button and icons the controller expects,
//! using the ids from [`ThemeConfig`].

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod markup;
pub mod store;
pub mod theme;

#[cfg(feature = "web")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::{ThemeController, ThemeControllerBuilder};
pub use error::{Error, Result};
pub use host::{ClassList, ClassSet, ColorSchemeQuery, MemoryStore, PreferenceStore};
pub use markup::{render_toggle_button, ToggleButton};
pub use store::FileStore;
pub use theme::{
    detect_color_mode, initial_mode, set_theme_detector, ColorMode, ParseColorModeError,
    StoredPreference, SystemColorScheme, ThemeDetector,
};
