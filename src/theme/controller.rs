//! Theme controller: the single source of truth for the appearance preference

use log::{debug, trace, warn};
use std::cell::Cell;
use std::rc::Rc;

use super::preference::ThemePreference;
use super::root::VisualRoot;
use super::store::PreferenceStore;

/// Storage key of the persisted preference.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Shared container for the current preference.
///
/// Every clone observes the same value. Flags are computed on read.
#[derive(Debug, Clone, Default)]
pub struct ThemeState(Rc<Cell<ThemePreference>>);

impl ThemeState {
    /// A fresh container holding the default preference.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ThemePreference {
        self.0.get()
    }

    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }

    pub fn is_light(&self) -> bool {
        self.get().is_light()
    }

    fn set(&self, preference: ThemePreference) {
        self.0.set(preference)
    }
}

/// Owns the preference for one session and keeps storage and the
/// visual root in line with it.
///
/// Storage and root are optional: a controller without them only updates
/// the in-memory value, which is what a headless run needs.
pub struct ThemeController {
    state: ThemeState,
    store: Option<Box<dyn PreferenceStore>>,
    root: Option<Box<dyn VisualRoot>>,
    storage_key: String,
}

impl ThemeController {
    /// A controller over `state` with no storage and no visual root.
    pub fn new(state: ThemeState) -> Self {
        Self {
            state,
            store: None,
            root: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn with_root(mut self, root: impl VisualRoot + 'static) -> Self {
        self.root = Some(Box::new(root));
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Handle onto the shared preference, for read-only consumers.
    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn theme(&self) -> ThemePreference {
        self.state.get()
    }

    pub fn is_dark(&self) -> bool {
        self.state.is_dark()
    }

    pub fn is_light(&self) -> bool {
        self.state.is_light()
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// Flips between dark and light, then persists and reflects.
    pub fn toggle_theme(&mut self) {
        let next = self.theme().toggled();
        self.apply(next);
    }

    /// Sets the preference regardless of its current value, then persists
    /// and reflects.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        self.apply(preference);
    }

    /// Reconciles the in-memory preference with storage and the root.
    ///
    /// Meant to run once per session, after storage and root are attached.
    /// A valid persisted value replaces the current one; anything else is
    /// ignored. The root is reflected in every case.
    pub fn init_theme(&mut self) {
        if let Some(saved) = self.read_persisted() {
            debug!("Restoring persisted theme: {saved}");
            self.state.set(saved);
        }
        self.reflect();
    }

    fn apply(&mut self, preference: ThemePreference) {
        trace!("Theme {} -> {}", self.theme(), preference);
        self.state.set(preference);
        self.persist();
        self.reflect();
    }

    fn read_persisted(&self) -> Option<ThemePreference> {
        let store = self.store.as_ref()?;
        match store.get_item(&self.storage_key) {
            Ok(Some(value)) => match value.parse() {
                Ok(preference) => Some(preference),
                Err(e) => {
                    warn!("Ignoring persisted theme: {e}");
                    None
                }
            },
            Ok(None) => {
                debug!("No persisted theme under '{}'", self.storage_key);
                None
            }
            Err(e) => {
                warn!("Could not read persisted theme: {e}");
                None
            }
        }
    }

    fn persist(&mut self) {
        let value = self.theme().as_str();
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.set_item(&self.storage_key, value) {
                warn!("Could not persist theme '{value}': {e}");
            }
        }
    }

    fn reflect(&mut self) {
        let current = self.theme();
        if let Some(root) = self.root.as_mut() {
            root.add_marker(current.marker());
            root.remove_marker(current.toggled().marker());
        }
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme())
            .field("store", &self.has_store())
            .field("root", &self.has_root())
            .field("storage_key", &self.storage_key)
            .finish()
    }
}
