//! Per-session context handed to every consumer.
//!
//! The theme state container lives here rather than in a global, so two
//! sessions in one process never share a preference.

use log::*;

use crate::config::{AppConfig, ConfigPaths};
use crate::quiz::{load_catalog, QuizCatalog};
use crate::theme::{
    load_style_sheet, ClassList, Palette, StyleSheet, ThemeController, ThemeState, YamlFileStore,
};

pub struct Session {
    pub theme: ThemeController,
    pub catalog: QuizCatalog,
    root: ClassList,
    style_sheet: StyleSheet,
}

impl Session {
    /// Builds a session with persistence and a visual root, then reconciles
    /// the theme with what was persisted.
    pub fn new(config: &AppConfig, paths: &ConfigPaths) -> Self {
        let root = ClassList::new();
        let mut theme = ThemeController::new(ThemeState::new())
            .with_root(root.clone())
            .with_storage_key(config.storage_key.clone());
        if config.persist_theme {
            theme = theme.with_store(YamlFileStore::new(&paths.preferences_path));
        } else {
            info!("Theme persistence disabled by config");
        }
        let mut session = Session {
            theme,
            catalog: load_catalog(config.quiz_file.as_deref()),
            root,
            style_sheet: load_style_sheet(),
        };
        session.theme.init_theme();
        session
    }

    /// A session without storage or visual root. Only the in-memory theme
    /// is meaningful.
    pub fn headless(catalog: QuizCatalog) -> Self {
        Session {
            theme: ThemeController::new(ThemeState::new()),
            catalog,
            root: ClassList::new(),
            style_sheet: StyleSheet::default(),
        }
    }

    /// Wraps an already configured controller whose visual root is `root`.
    pub fn from_parts(
        theme: ThemeController,
        root: ClassList,
        catalog: QuizCatalog,
        style_sheet: StyleSheet,
    ) -> Self {
        Session {
            theme,
            catalog,
            root,
            style_sheet,
        }
    }

    pub fn root(&self) -> &ClassList {
        &self.root
    }

    /// Palette selected by the markers on the visual root.
    pub fn palette(&self) -> &Palette {
        self.style_sheet.for_root(&self.root)
    }
}
