//! Stored theme preference and the page-load decision.

use super::mode::ColorMode;

/// The raw value read from the preference store for the theme key.
///
/// Values are kept verbatim. Only the exact strings `"dark"` and `"light"`
/// map to a [`ColorMode`]; anything else is present but meaningless.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoredPreference {
    /// The key does not exist in the store.
    #[default]
    Absent,
    /// The key exists with this value.
    Value(String),
}

impl StoredPreference {
    pub fn from_item(item: Option<String>) -> Self {
        match item {
            Some(value) => StoredPreference::Value(value),
            None => StoredPreference::Absent,
        }
    }

    /// The stored mode, if the value is exactly `"dark"` or `"light"`.
    pub fn mode(&self) -> Option<ColorMode> {
        self.as_str().and_then(|value| value.parse().ok())
    }

    /// Returns true if the key does not exist at all.
    pub fn is_absent(&self) -> bool {
        matches!(self, StoredPreference::Absent)
    }

    /// Returns true if there is no usable value: the key is absent or holds
    /// an empty string.
    ///
    /// Page load only distinguishes presence of the key, while the toggle
    /// handler treats an empty value like a missing one.
    pub fn is_unset(&self) -> bool {
        self.as_str().map_or(true, str::is_empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredPreference::Absent => None,
            StoredPreference::Value(value) => Some(value),
        }
    }
}

/// Decides the color mode to apply on page load.
///
/// Dark if the stored value is `"dark"`, or if no value is stored and the
/// OS prefers a dark scheme. Light otherwise. `prefers_dark` is only
/// called when the key is absent.
pub fn initial_mode(stored: &StoredPreference, prefers_dark: impl FnOnce() -> bool) -> ColorMode {
    if stored.mode() == Some(ColorMode::Dark) || (stored.is_absent() && prefers_dark()) {
        ColorMode::Dark
    } else {
        ColorMode::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn value(s: &str) -> StoredPreference {
        StoredPreference::Value(s.to_string())
    }

    #[test]
    fn test_from_item() {
        assert_eq!(StoredPreference::from_item(None), StoredPreference::Absent);
        assert_eq!(
            StoredPreference::from_item(Some("dark".into())),
            value("dark")
        );
    }

    #[test]
    fn test_mode_only_for_exact_words() {
        assert_eq!(value("dark").mode(), Some(ColorMode::Dark));
        assert_eq!(value("light").mode(), Some(ColorMode::Light));
        assert_eq!(value("DARK").mode(), None);
        assert_eq!(value("").mode(), None);
        assert_eq!(StoredPreference::Absent.mode(), None);
    }

    #[test]
    fn test_unset_covers_empty_value() {
        assert!(StoredPreference::Absent.is_unset());
        assert!(value("").is_unset());
        assert!(!value("light").is_unset());
        assert!(!value("bogus").is_unset());

        assert!(StoredPreference::Absent.is_absent());
        assert!(!value("").is_absent());
    }

    #[test]
    fn test_initial_mode_stored_dark_ignores_os() {
        assert_eq!(initial_mode(&value("dark"), || false), ColorMode::Dark);
    }

    #[test]
    fn test_initial_mode_absent_follows_os() {
        assert_eq!(initial_mode(&StoredPreference::Absent, || true), ColorMode::Dark);
        assert_eq!(initial_mode(&StoredPreference::Absent, || false), ColorMode::Light);
    }

    #[test]
    fn test_initial_mode_present_value_skips_os_query() {
        let asked = Cell::new(false);
        let query = || {
            asked.set(true);
            true
        };

        assert_eq!(initial_mode(&value("light"), query), ColorMode::Light);
        assert!(!asked.get());

        // An empty or unknown value still counts as a stored key.
        assert_eq!(initial_mode(&value(""), || true), ColorMode::Light);
        assert_eq!(initial_mode(&value("sepia"), || true), ColorMode::Light);
    }
}
