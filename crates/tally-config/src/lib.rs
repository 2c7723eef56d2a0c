//! tally-config
//!
//! Persistent user preferences: the theme mode and its load/save through
//! the shared key/value adapter.

pub mod model;
pub mod preferences;

pub use model::ThemeMode;
pub use preferences::ThemePreferences;
