//! The theme preference controller.
//!
//! A [`ThemeController`] owns handles to the page elements it manages and
//! the preference store. It is created through [`ThemeControllerBuilder`],
//! whose [`init`](ThemeControllerBuilder::init) runs the page-load logic
//! once. After that the only transition is [`ThemeController::toggle`],
//! run on each activation of the trigger element.
//!
//! # Page load
//!
//! The stored value decides the mode, falling back to the OS query only
//! when the key is absent. The computed class is added to the root without
//! removing the other one, so a class already present in markup survives.
//! The icon for the *other* mode is revealed: dark active shows the light
//! icon, since the icon advertises what the button will switch to.
//!
//! # Toggle
//!
//! Both icons flip. A stored `"light"` switches the root to `dark`;
//! anything else switches it to `light`. When nothing usable was stored, a
//! second pass flips both root classes and stores the mode opposite to
//! what the root held after the first pass. With an unset store and a
//! `dark` root this lands back on `dark`: the icons flip but the theme
//! does not.

use tracing::debug;

use crate::config::ThemeConfig;
use crate::host::{ClassList, ColorSchemeQuery, PreferenceStore};
use crate::theme::{initial_mode, ColorMode, StoredPreference};

/// Builder for [`ThemeController`].
///
/// Icons and trigger accept either an element or an `Option`, so a page
/// lookup can be passed straight through.
pub struct ThemeControllerBuilder<E, S> {
    root: E,
    store: S,
    dark_icon: Option<E>,
    light_icon: Option<E>,
    trigger: Option<E>,
    config: ThemeConfig,
}

impl<E: ClassList, S: PreferenceStore> ThemeControllerBuilder<E, S> {
    /// The icon shown while the light theme is active.
    pub fn dark_icon(mut self, icon: impl Into<Option<E>>) -> Self {
        self.dark_icon = icon.into();
        self
    }

    /// The icon shown while the dark theme is active.
    pub fn light_icon(mut self, icon: impl Into<Option<E>>) -> Self {
        self.light_icon = icon.into();
        self
    }

    /// The element whose activation runs [`ThemeController::toggle`].
    pub fn trigger(mut self, trigger: impl Into<Option<E>>) -> Self {
        self.trigger = trigger.into();
        self
    }

    /// Replaces the default names.
    ///
    /// The config is used as given; call [`ThemeConfig::validate`] first
    /// when it did not come from [`ThemeConfig::from_json`] or
    /// [`ThemeConfig::from_file`].
    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs the page-load logic and returns the ready controller.
    ///
    /// `query` is consulted only if the store has no value for the key.
    pub fn init<Q>(self, query: &Q) -> ThemeController<E, S>
    where
        Q: ColorSchemeQuery + ?Sized,
    {
        let ThemeControllerBuilder {
            root,
            store,
            dark_icon,
            light_icon,
            trigger,
            config,
        } = self;

        let stored = StoredPreference::from_item(store.get_item(&config.storage_key));
        let mode = initial_mode(&stored, || query.matches_dark_preference());

        root.add_class(mode.as_str());
        let revealed = match mode {
            ColorMode::Dark => &light_icon,
            ColorMode::Light => &dark_icon,
        };
        if let Some(icon) = revealed {
            icon.remove_class(&config.hidden_class);
        }

        debug!(
            stored = ?stored.as_str(),
            %mode,
            icon_revealed = revealed.is_some(),
            "applied initial theme"
        );

        ThemeController {
            root,
            store,
            dark_icon,
            light_icon,
            trigger,
            config,
            initial_mode: mode,
        }
    }
}

/// Applies and persists the dark/light theme of one page.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ClassList, ClassSet, MemoryStore, PreferenceStore, ThemeController};
///
/// let root = ClassSet::new();
/// let light_icon = ClassSet::from_classes(["hidden"]);
///
/// let mut controller = ThemeController::builder(root.clone(), MemoryStore::new())
///     .light_icon(light_icon.clone())
///     .trigger(ClassSet::new())
///     .init(&|| true);
///
/// // No stored value and the OS prefers dark.
/// assert!(root.has_class("dark"));
/// assert!(!light_icon.has_class("hidden"));
///
/// controller.store_mut().set_item("theme", "dark");
/// assert!(controller.activate());
/// assert!(root.has_class("light"));
/// assert!(!root.has_class("dark"));
/// assert_eq!(controller.store().get_item("theme").as_deref(), Some("light"));
/// ```
#[derive(Debug)]
pub struct ThemeController<E, S> {
    root: E,
    store: S,
    dark_icon: Option<E>,
    light_icon: Option<E>,
    trigger: Option<E>,
    config: ThemeConfig,
    initial_mode: ColorMode,
}

impl<E: ClassList, S: PreferenceStore> ThemeController<E, S> {
    /// Starts building a controller for `root` backed by `store`.
    pub fn builder(root: E, store: S) -> ThemeControllerBuilder<E, S> {
        ThemeControllerBuilder {
            root,
            store,
            dark_icon: None,
            light_icon: None,
            trigger: None,
            config: ThemeConfig::default(),
        }
    }

    /// Handles one activation of the trigger element.
    ///
    /// Returns `false` without touching anything if the page has no
    /// trigger, since then no handler would ever have been bound.
    pub fn activate(&mut self) -> bool {
        if self.trigger.is_none() {
            debug!("no theme trigger on page, ignoring activation");
            return false;
        }
        self.toggle();
        true
    }

    /// Runs the toggle handler.
    pub fn toggle(&mut self) {
        let hidden = self.config.hidden_class.as_str();
        for icon in [&self.dark_icon, &self.light_icon].into_iter().flatten() {
            icon.toggle_class(hidden);
        }

        let current = self.read_preference();
        let written = if current.mode() == Some(ColorMode::Light) {
            self.switch_root(ColorMode::Dark)
        } else {
            self.switch_root(ColorMode::Light)
        };

        let corrected = if current.is_unset() {
            let target = if self.root.has_class(ColorMode::Dark.as_str()) {
                ColorMode::Light
            } else {
                ColorMode::Dark
            };
            self.root.toggle_class(ColorMode::Dark.as_str());
            self.root.toggle_class(ColorMode::Light.as_str());
            self.write_preference(target);
            Some(target)
        } else {
            None
        };

        debug!(
            previous = ?current.as_str(),
            %written,
            corrected = ?corrected,
            "toggled theme"
        );
    }

    /// Replaces the opposite class with `mode` on the root and stores it.
    fn switch_root(&mut self, mode: ColorMode) -> ColorMode {
        self.root.remove_class(mode.opposite().as_str());
        self.root.add_class(mode.as_str());
        self.write_preference(mode);
        mode
    }

    fn read_preference(&self) -> StoredPreference {
        StoredPreference::from_item(self.store.get_item(&self.config.storage_key))
    }

    fn write_preference(&mut self, mode: ColorMode) {
        self.store.set_item(&self.config.storage_key, mode.as_str());
    }

    /// The mode applied at page load.
    pub fn initial_mode(&self) -> ColorMode {
        self.initial_mode
    }

    /// The value currently stored under the configured key.
    pub fn stored_preference(&self) -> StoredPreference {
        self.read_preference()
    }

    pub fn root(&self) -> &E {
        &self.root
    }

    pub fn dark_icon(&self) -> Option<&E> {
        self.dark_icon.as_ref()
    }

    pub fn light_icon(&self) -> Option<&E> {
        self.light_icon.as_ref()
    }

    pub fn trigger(&self) -> Option<&E> {
        self.trigger.as_ref()
    }

    pub fn has_trigger(&self) -> bool {
        self.trigger.is_some()
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Consumes the controller, returning its store.
    ///
    /// Building a new controller on the returned store simulates a reload.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ClassSet, MemoryStore};

    struct Page {
        root: ClassSet,
        dark_icon: ClassSet,
        light_icon: ClassSet,
    }

    impl Page {
        fn new(root_classes: &[&str]) -> Self {
            Self {
                root: ClassSet::from_classes(root_classes),
                dark_icon: ClassSet::from_classes(["hidden"]),
                light_icon: ClassSet::from_classes(["hidden"]),
            }
        }

        fn load(
            &self,
            store: MemoryStore,
            prefers_dark: bool,
        ) -> ThemeController<ClassSet, MemoryStore> {
            ThemeController::builder(self.root.clone(), store)
                .dark_icon(self.dark_icon.clone())
                .light_icon(self.light_icon.clone())
                .trigger(ClassSet::new())
                .init(&move || prefers_dark)
        }

        fn visible(&self) -> (bool, bool) {
            (
                !self.dark_icon.has_class("hidden"),
                !self.light_icon.has_class("hidden"),
            )
        }
    }

    fn stored(controller: &ThemeController<ClassSet, MemoryStore>) -> Option<String> {
        controller.store().get_item("theme")
    }

    #[test]
    fn test_init_absent_os_dark() {
        let page = Page::new(&[]);
        let controller = page.load(MemoryStore::new(), true);

        assert_eq!(controller.initial_mode(), ColorMode::Dark);
        assert_eq!(page.root.classes(), vec!["dark"]);
        assert_eq!(page.visible(), (false, true));
        assert_eq!(stored(&controller), None);
    }

    #[test]
    fn test_init_absent_os_light() {
        let page = Page::new(&[]);
        let controller = page.load(MemoryStore::new(), false);

        assert_eq!(controller.initial_mode(), ColorMode::Light);
        assert_eq!(page.root.classes(), vec!["light"]);
        assert_eq!(page.visible(), (true, false));
    }

    #[test]
    fn test_init_stored_dark_beats_os() {
        let page = Page::new(&[]);
        page.load(MemoryStore::new().with_item("theme", "dark"), false);
        assert_eq!(page.root.classes(), vec!["dark"]);
    }

    #[test]
    fn test_init_stored_light_beats_os() {
        let page = Page::new(&[]);
        page.load(MemoryStore::new().with_item("theme", "light"), true);
        assert_eq!(page.root.classes(), vec!["light"]);
    }

    #[test]
    fn test_init_does_not_clear_existing_class() {
        let page = Page::new(&["light"]);
        page.load(MemoryStore::new().with_item("theme", "dark"), false);
        assert_eq!(page.root.classes(), vec!["light", "dark"]);
    }

    #[test]
    fn test_init_uses_configured_key() {
        let page = Page::new(&[]);
        let config = ThemeConfig {
            storage_key: "site-theme".to_string(),
            ..ThemeConfig::default()
        };
        let store = MemoryStore::new()
            .with_item("theme", "light")
            .with_item("site-theme", "dark");

        ThemeController::builder(page.root.clone(), store)
            .config(config)
            .init(&|| false);
        assert_eq!(page.root.classes(), vec!["dark"]);
    }

    #[test]
    fn test_toggle_from_light() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new().with_item("theme", "light"), false);
        assert_eq!(page.visible(), (true, false));

        controller.toggle();

        assert_eq!(page.root.classes(), vec!["dark"]);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
        assert_eq!(page.visible(), (false, true));
    }

    #[test]
    fn test_toggle_from_dark() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new().with_item("theme", "dark"), false);

        controller.toggle();

        assert_eq!(page.root.classes(), vec!["light"]);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
        assert_eq!(page.visible(), (true, false));
    }

    #[test]
    fn test_toggle_unset_with_dark_root_stays_dark() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new(), true);
        assert_eq!(page.visible(), (false, true));

        controller.toggle();

        // First pass: root {light}, stored "light". Second pass: the root
        // lacks dark, so both flip back and "dark" is stored.
        assert_eq!(page.root.classes(), vec!["dark"]);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
        assert_eq!(page.visible(), (true, false));
    }

    #[test]
    fn test_toggle_unset_with_light_root_goes_dark() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new(), false);

        controller.toggle();

        assert_eq!(page.root.classes(), vec!["dark"]);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_empty_value_runs_correction() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new().with_item("theme", ""), true);
        // The key exists, so the OS preference is ignored.
        assert_eq!(page.root.classes(), vec!["light"]);

        controller.toggle();

        assert_eq!(page.root.classes(), vec!["dark"]);
        assert_eq!(stored(&controller).as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_unknown_value_takes_light_branch() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new().with_item("theme", "sepia"), true);

        controller.toggle();

        assert_eq!(page.root.classes(), vec!["light"]);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn test_toggle_without_icons() {
        let root = ClassSet::new();
        let mut controller = ThemeController::builder(root.clone(), MemoryStore::new())
            .trigger(ClassSet::new())
            .init(&|| false);

        assert!(controller.activate());
        assert!(controller.activate());
        assert_eq!(root.classes(), vec!["light"]);
        assert_eq!(stored(&controller).as_deref(), Some("light"));
    }

    #[test]
    fn test_activate_without_trigger_is_noop() {
        let page = Page::new(&[]);
        let mut controller = ThemeController::builder(page.root.clone(), MemoryStore::new())
            .dark_icon(page.dark_icon.clone())
            .init(&|| false);

        assert!(!controller.has_trigger());
        assert!(!controller.activate());
        assert_eq!(page.root.classes(), vec!["light"]);
        assert_eq!(page.visible(), (true, false));
        assert_eq!(stored(&controller), None);
    }

    #[test]
    fn test_custom_hidden_class() {
        let dark_icon = ClassSet::from_classes(["invisible"]);
        let config = ThemeConfig {
            hidden_class: "invisible".to_string(),
            ..ThemeConfig::default()
        };
        let mut controller = ThemeController::builder(ClassSet::new(), MemoryStore::new())
            .dark_icon(dark_icon.clone())
            .config(config)
            .init(&|| false);
        assert!(dark_icon.is_empty());

        controller.toggle();
        assert!(dark_icon.has_class("invisible"));
    }

    #[test]
    fn test_into_store_reload() {
        let page = Page::new(&[]);
        let mut controller = page.load(MemoryStore::new().with_item("theme", "light"), false);
        controller.toggle();
        let store = controller.into_store();

        let reloaded = Page::new(&[]);
        let controller = reloaded.load(store, false);
        assert_eq!(controller.initial_mode(), ColorMode::Dark);
        assert_eq!(reloaded.root.classes(), vec!["dark"]);
    }
}
