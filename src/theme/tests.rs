//! Tests for the theme controller

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    use crate::theme::{
        ClassList, MemoryStore, PreferenceStore, StoreError, ThemeController, ThemePreference,
        ThemeState, VisualRoot, DEFAULT_STORAGE_KEY,
    };

    /// Store handle that tests can inspect after handing a clone to a controller.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl SharedStore {
        fn with_item(key: &str, value: &str) -> Self {
            Self(Rc::new(RefCell::new(MemoryStore::with_item(key, value))))
        }

        fn value(&self, key: &str) -> Option<String> {
            self.0.borrow().get_item(key).unwrap()
        }
    }

    impl PreferenceStore for SharedStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.borrow().get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().set_item(key, value)
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(io::Error::from(io::ErrorKind::StorageFull).into())
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(io::Error::from(io::ErrorKind::StorageFull).into())
        }
    }

    fn full_controller(store: SharedStore, root: ClassList) -> ThemeController {
        ThemeController::new(ThemeState::new())
            .with_store(store)
            .with_root(root)
    }

    fn assert_reflected(root: &ClassList, expected: ThemePreference) {
        assert_eq!(root.markers(), vec![expected.marker().to_string()]);
    }

    #[test]
    fn test_fresh_session_defaults_to_dark() {
        let controller = ThemeController::new(ThemeState::new());
        assert_eq!(controller.theme(), ThemePreference::Dark);
        assert!(controller.is_dark());
        assert!(!controller.is_light());
    }

    #[rstest]
    #[case(0, ThemePreference::Dark)]
    #[case(1, ThemePreference::Light)]
    #[case(2, ThemePreference::Dark)]
    #[case(3, ThemePreference::Light)]
    #[case(10, ThemePreference::Dark)]
    fn test_toggle_parity(#[case] toggles: usize, #[case] expected: ThemePreference) {
        let root = ClassList::new();
        let mut controller = full_controller(SharedStore::default(), root.clone());
        for _ in 0..toggles {
            controller.toggle_theme();
            assert_ne!(controller.is_dark(), controller.is_light());
        }
        assert_eq!(controller.theme(), expected);
        if toggles > 0 {
            assert_reflected(&root, expected);
        }
    }

    #[rstest]
    #[case(ThemePreference::Dark, ThemePreference::Light)]
    #[case(ThemePreference::Light, ThemePreference::Light)]
    #[case(ThemePreference::Light, ThemePreference::Dark)]
    #[case(ThemePreference::Dark, ThemePreference::Dark)]
    fn test_set_theme_is_unconditional(
        #[case] before: ThemePreference,
        #[case] target: ThemePreference,
    ) {
        let store = SharedStore::default();
        let root = ClassList::new();
        let mut controller = full_controller(store.clone(), root.clone());
        controller.set_theme(before);
        controller.set_theme(target);
        assert_eq!(controller.theme(), target);
        assert_eq!(store.value(DEFAULT_STORAGE_KEY).as_deref(), Some(target.as_str()));
        assert_reflected(&root, target);
    }

    #[test]
    fn test_every_toggle_is_persisted() {
        let store = SharedStore::default();
        let mut controller = full_controller(store.clone(), ClassList::new());
        controller.toggle_theme();
        assert_eq!(store.value(DEFAULT_STORAGE_KEY).as_deref(), Some("light"));
        controller.toggle_theme();
        assert_eq!(store.value(DEFAULT_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_shared_state_is_seen_by_every_reader() {
        let state = ThemeState::new();
        let reader = state.clone();
        let mut controller = ThemeController::new(state);
        controller.set_theme(ThemePreference::Light);
        assert_eq!(reader.get(), ThemePreference::Light);
        assert!(reader.is_light());
        assert!(controller.state().is_light());
    }

    #[test]
    fn test_init_restores_persisted_light() {
        let root = ClassList::new();
        let mut controller =
            full_controller(SharedStore::with_item(DEFAULT_STORAGE_KEY, "light"), root.clone());
        controller.init_theme();
        assert_eq!(controller.theme(), ThemePreference::Light);
        assert_reflected(&root, ThemePreference::Light);
    }

    #[test]
    fn test_init_without_persisted_value_still_reflects() {
        let root = ClassList::new();
        let mut controller = full_controller(SharedStore::default(), root.clone());
        controller.init_theme();
        assert_eq!(controller.theme(), ThemePreference::Dark);
        assert_reflected(&root, ThemePreference::Dark);
    }

    #[rstest]
    #[case("blue")]
    #[case("")]
    #[case("Light")]
    fn test_init_ignores_invalid_persisted_value(#[case] persisted: &str) {
        let root = ClassList::new();
        let mut controller =
            full_controller(SharedStore::with_item(DEFAULT_STORAGE_KEY, persisted), root.clone());
        controller.init_theme();
        assert_eq!(controller.theme(), ThemePreference::Dark);
        assert_reflected(&root, ThemePreference::Dark);
    }

    #[test]
    fn test_init_keeps_pre_call_value_when_nothing_persisted() {
        let root = ClassList::new();
        let mut controller = ThemeController::new(ThemeState::new());
        controller.set_theme(ThemePreference::Light);
        let mut controller = ThemeController::new(controller.state().clone())
            .with_store(SharedStore::default())
            .with_root(root.clone());
        controller.init_theme();
        assert_eq!(controller.theme(), ThemePreference::Light);
        assert_reflected(&root, ThemePreference::Light);
    }

    #[test]
    fn test_reflection_replaces_stale_marker_and_keeps_others() {
        let mut root = ClassList::new();
        root.add_marker("light");
        root.add_marker("dark");
        root.add_marker("font-sans");
        let mut controller = full_controller(SharedStore::default(), root.clone());
        controller.set_theme(ThemePreference::Light);
        assert!(root.contains("light"));
        assert!(!root.contains("dark"));
        assert!(root.contains("font-sans"));
    }

    #[test]
    fn test_custom_storage_key() {
        let store = SharedStore::with_item("vue-primer.theme", "light");
        let mut controller = ThemeController::new(ThemeState::new())
            .with_store(store.clone())
            .with_storage_key("vue-primer.theme");
        controller.init_theme();
        assert!(controller.is_light());
        controller.toggle_theme();
        assert_eq!(store.value("vue-primer.theme").as_deref(), Some("dark"));
        assert_eq!(store.value(DEFAULT_STORAGE_KEY), None);
    }

    #[test]
    fn test_headless_controller_never_fails() {
        let mut controller = ThemeController::new(ThemeState::new());
        assert!(!controller.has_store());
        assert!(!controller.has_root());
        controller.init_theme();
        assert!(controller.is_dark());
        controller.toggle_theme();
        assert!(controller.is_light());
        controller.set_theme(ThemePreference::Dark);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_failing_store_leaves_memory_state_intact() {
        let root = ClassList::new();
        let mut controller = ThemeController::new(ThemeState::new())
            .with_store(FailingStore)
            .with_root(root.clone());
        controller.init_theme();
        assert!(controller.is_dark());
        controller.toggle_theme();
        assert!(controller.is_light());
        assert_reflected(&root, ThemePreference::Light);
    }
}
