//! Toggle button markup.
//!
//! Renders the button the controller binds to: a `<button>` with the
//! configured trigger id holding two SVG icons, a moon (dark icon) and a
//! sun (light icon). Both icons start hidden; page load reveals one.

use minijinja::{context, Environment};

use crate::config::ThemeConfig;
use crate::error::Result;

const TEMPLATE_NAME: &str = "theme_toggle.html";

const DEFAULT_BUTTON_CLASS: &str =
    "bg-primary text-primary-foreground p-2.5 text-sm bg-none rounded-full";

const TEMPLATE: &str = r#"<button id="{{ toggle_id }}" type="button" class="{{ class }}"{% if label %} aria-label="{{ label }}" title="{{ label }}"{% endif %}>
  <svg id="{{ dark_icon_id }}" class="{{ hidden_class }} w-4 h-4" fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg">
    <path d="M17.293 13.293A8 8 0 016.707 2.707a8.001 8.001 0 1010.586 10.586z"></path>
  </svg>
  <svg id="{{ light_icon_id }}" class="{{ hidden_class }} w-4 h-4" fill="currentColor" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg">
    <path d="M10 2a1 1 0 011 1v1a1 1 0 11-2 0V3a1 1 0 011-1zm4 8a4 4 0 11-8 0 4 4 0 018 0zm-.464 4.95l.707.707a1 1 0 001.414-1.414l-.707-.707a1 1 0 00-1.414 1.414zm2.12-10.607a1 1 0 010 1.414l-.706.707a1 1 0 11-1.414-1.414l.707-.707a1 1 0 011.414 0zM17 11a1 1 0 100-2h-1a1 1 0 100 2h1zm-7 4a1 1 0 011 1v1a1 1 0 11-2 0v-1a1 1 0 011-1zM5.05 6.464A1 1 0 106.465 5.05l-.708-.707a1 1 0 00-1.414 1.414l.707.707zm1.414 8.486l-.707.707a1 1 0 01-1.414-1.414l.707-.707a1 1 0 011.414 1.414zM4 11a1 1 0 100-2H3a1 1 0 000 2h1z" fill-rule="evenodd" clip-rule="evenodd"></path>
  </svg>
</button>"#;

/// Builder for the toggle button markup.
///
/// # Example
///
/// ```rust
/// use themeswitch::{ThemeConfig, ToggleButton};
///
/// let config = ThemeConfig::default();
/// let html = ToggleButton::new(&config)
///     .label("Toggle theme")
///     .render()
///     .unwrap();
///
/// assert!(html.contains(r#"id="theme-toggle""#));
/// assert!(html.contains(r#"id="theme-toggle-dark-icon""#));
/// assert!(html.contains(r#"aria-label="Toggle theme""#));
/// ```
#[derive(Debug, Clone)]
pub struct ToggleButton<'a> {
    config: &'a ThemeConfig,
    class: Option<&'a str>,
    label: Option<&'a str>,
}

impl<'a> ToggleButton<'a> {
    pub fn new(config: &'a ThemeConfig) -> Self {
        Self {
            config,
            class: None,
            label: None,
        }
    }

    /// Appends classes to the button's default classes.
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// Sets the accessible label, used for both `aria-label` and `title`.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn render(self) -> Result<String> {
        let mut class = DEFAULT_BUTTON_CLASS.to_string();
        if let Some(extra) = self.class {
            class.push(' ');
            class.push_str(extra);
        }

        // The `.html` name turns on HTML auto-escaping.
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        let tmpl = env.get_template(TEMPLATE_NAME)?;
        let html = tmpl.render(context! {
            toggle_id => &self.config.toggle_id,
            dark_icon_id => &self.config.dark_icon_id,
            light_icon_id => &self.config.light_icon_id,
            hidden_class => &self.config.hidden_class,
            class => class,
            label => self.label,
        })?;
        Ok(html)
    }
}

/// Renders the toggle button with default classes and no label.
pub fn render_toggle_button(config: &ThemeConfig) -> Result<String> {
    ToggleButton::new(config).render()
}
