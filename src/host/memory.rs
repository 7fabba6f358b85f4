//! In-memory elements and storage.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::{ClassList, PreferenceStore};

/// A shared, ordered set of class names standing in for a DOM element.
///
/// Cloning yields another handle to the same element, so a test can keep
/// a handle and observe what the controller did to it.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ClassList, ClassSet};
///
/// let icon = ClassSet::from_classes(["hidden", "w-4"]);
/// let handle = icon.clone();
///
/// icon.remove_class("hidden");
/// assert!(!handle.has_class("hidden"));
/// assert_eq!(handle.to_string(), "w-4");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Rc<RefCell<Vec<String>>>,
}

impl ClassSet {
    /// Creates an element with no classes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the given classes, skipping duplicates.
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Self::new();
        for class in classes {
            set.add_class(class.as_ref());
        }
        set
    }

    /// Returns the classes in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.borrow().is_empty()
    }
}

impl ClassList for ClassSet {
    fn add_class(&self, name: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == name) {
            classes.push(name.to_string());
        }
    }

    fn remove_class(&self, name: &str) {
        self.classes.borrow_mut().retain(|c| c != name);
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == name)
    }

    fn toggle_class(&self, name: &str) -> bool {
        if self.has_class(name) {
            self.remove_class(name);
            false
        } else {
            self.add_class(name);
            true
        }
    }
}

impl fmt::Display for ClassSet {
    /// Formats like a `class` attribute: names separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.borrow().join(" "))
    }
}

impl fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.classes.borrow().iter()).finish()
    }
}

/// A preference store held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item, returning an updated store for chaining.
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    /// Removes an item, returning its previous value.
    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}
