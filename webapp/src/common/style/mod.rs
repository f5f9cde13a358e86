use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::PHOTO_MODAL;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}
"#,
    CSS_VARIABLES,
    PHOTO_MODAL
);
