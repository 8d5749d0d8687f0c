//! Theme system for vue-primer
//!
//! This module owns the light/dark appearance preference of a session:
//! the shared state container, the controller that persists it and
//! reflects it onto the visual root, and the palettes keyed by that root.

pub mod controller;
pub mod palette;
pub mod parser;
pub mod preference;
pub mod root;
pub mod store;

#[cfg(test)]
mod tests;

pub use controller::{ThemeController, ThemeState, DEFAULT_STORAGE_KEY};
pub use palette::{load_style_sheet, Palette, StyleSheet};
pub use preference::{ParsePreferenceError, ThemePreference};
pub use root::{ClassList, VisualRoot};
pub use store::{MemoryStore, PreferenceStore, StoreError, YamlFileStore};
