//! Capabilities the controller needs from its page.
//!
//! The controller never touches a real document or storage directly. It
//! is handed values implementing these traits:
//!
//! - [`ClassList`]: class manipulation on one element
//! - [`PreferenceStore`]: the per-origin key-value store
//! - [`ColorSchemeQuery`]: "does the OS prefer a dark color scheme"
//!
//! Every operation is total. A missing value is `None`, never an error,
//! and implementations backed by fallible APIs log and swallow failures.
//!
//! [`ClassSet`] and [`MemoryStore`] are in-memory implementations used for
//! headless pages and tests. The `web` feature implements the traits for
//! `web_sys` types.

mod memory;

pub use memory::{ClassSet, MemoryStore};

/// Class manipulation on a single element.
///
/// Methods take `&self` because element handles are shared: the page and
/// the controller see the same element.
pub trait ClassList {
    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);

    fn has_class(&self, name: &str) -> bool;

    /// Flips the presence of `name`, returning whether it is now present.
    fn toggle_class(&self, name: &str) -> bool;
}

/// A string key-value store scoped to the page's origin.
pub trait PreferenceStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str);
}

/// Whether the environment prefers a dark color scheme.
pub trait ColorSchemeQuery {
    fn matches_dark_preference(&self) -> bool;
}

impl<F> ColorSchemeQuery for F
where
    F: Fn() -> bool,
{
    fn matches_dark_preference(&self) -> bool {
        self()
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) {
        (**self).set_item(key, value)
    }
}
