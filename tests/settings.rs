mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use button_light_controller::settings::{
        COLOR_ADDRESS, MODE_ADDRESS, STEP_DELAY_ADDRESS,
    };
    use button_light_controller::{
        Mode, Settings, SettingsStore, coerce_color_index, coerce_step_delay,
    };

    /// In-memory store with a shared handle so tests can inspect the
    /// bytes after `Settings` takes ownership.
    #[derive(Clone)]
    struct MemoryStore(Rc<RefCell<[u8; 3]>>);

    impl MemoryStore {
        fn new(bytes: [u8; 3]) -> Self {
            Self(Rc::new(RefCell::new(bytes)))
        }

        fn bytes(&self) -> [u8; 3] {
            *self.0.borrow()
        }
    }

    impl SettingsStore for MemoryStore {
        fn read_byte(&mut self, address: u8) -> u8 {
            self.0.borrow()[address as usize]
        }

        fn write_byte(&mut self, address: u8, value: u8) {
            self.0.borrow_mut()[address as usize] = value;
        }
    }

    #[test]
    fn test_coerce_color_index() {
        for raw in 0..7 {
            assert_eq!(coerce_color_index(raw), raw);
        }
        assert_eq!(coerce_color_index(7), 0);
        assert_eq!(coerce_color_index(200), 0);
        assert_eq!(coerce_color_index(255), 0);
    }

    #[test]
    fn test_coerce_step_delay() {
        for raw in 10..=50 {
            assert_eq!(coerce_step_delay(raw), raw);
        }
        assert_eq!(coerce_step_delay(0), 10);
        assert_eq!(coerce_step_delay(9), 10);
        assert_eq!(coerce_step_delay(51), 10);
        assert_eq!(coerce_step_delay(255), 10);
    }

    #[test]
    fn test_mode_cycle_is_two_long() {
        assert_eq!(Mode::StaticColor.next(), Mode::Rainbow);
        assert_eq!(Mode::Rainbow.next(), Mode::StaticColor);
        assert_eq!(Mode::StaticColor.next().next(), Mode::StaticColor);
        assert_eq!(Mode::Rainbow.next().next(), Mode::Rainbow);
    }

    #[test]
    fn test_mode_from_stored_coerces() {
        assert_eq!(Mode::from_stored(0), Mode::StaticColor);
        assert_eq!(Mode::from_stored(1), Mode::Rainbow);
        assert_eq!(Mode::from_stored(2), Mode::StaticColor);
        assert_eq!(Mode::from_stored(255), Mode::StaticColor);
        assert_eq!(Mode::from_raw(2), None);
    }

    #[test]
    fn test_boot_with_erased_storage() {
        // First boot: erased storage reads 0xFF everywhere.
        let store = MemoryStore::new([0xFF, 0xFF, 0xFF]);
        let settings = Settings::load(store.clone());

        assert_eq!(settings.mode(), Mode::StaticColor);
        assert_eq!(settings.color_index(), 0);
        assert_eq!(settings.step_delay_ms(), 250);
        // Boot loading never writes back.
        assert_eq!(store.bytes(), [0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_boot_with_valid_storage() {
        let store = MemoryStore::new([1, 3, 30]);
        let settings = Settings::load(store);

        assert_eq!(settings.mode(), Mode::Rainbow);
        assert_eq!(settings.step_delay_ms(), 30);
    }

    #[test]
    fn test_cycle_color_wraps_after_last() {
        let store = MemoryStore::new([0, 5, 0]);
        let mut settings = Settings::load(store.clone());

        settings.cycle_color();
        assert_eq!(settings.color_index(), 6);
        settings.cycle_color();
        assert_eq!(settings.color_index(), 0);
        assert_eq!(store.bytes()[COLOR_ADDRESS as usize], 0);
    }

    #[test]
    fn test_cycle_color_persists_each_step() {
        let store = MemoryStore::new([0, 0, 0]);
        let mut settings = Settings::load(store.clone());

        for expected in 1..7 {
            settings.cycle_color();
            assert_eq!(settings.color_index(), expected);
            assert_eq!(store.bytes()[COLOR_ADDRESS as usize], expected);
        }
    }

    #[test]
    fn test_cycle_color_ignored_in_rainbow_mode() {
        let store = MemoryStore::new([1, 2, 20]);
        let mut settings = Settings::load(store.clone());

        settings.cycle_color();
        assert_eq!(settings.color_index(), 0);
        assert_eq!(store.bytes()[COLOR_ADDRESS as usize], 2);
    }

    #[test]
    fn test_adjust_rainbow_speed_sequence() {
        let store = MemoryStore::new([1, 0, 50]);
        let mut settings = Settings::load(store.clone());
        assert_eq!(settings.step_delay_ms(), 50);

        for expected in [40, 30, 20, 10, 50] {
            settings.adjust_rainbow_speed();
            assert_eq!(settings.step_delay_ms(), u16::from(expected));
            assert_eq!(store.bytes()[STEP_DELAY_ADDRESS as usize], expected);
        }
    }

    #[test]
    fn test_adjust_rainbow_speed_ignored_in_static_mode() {
        let store = MemoryStore::new([0, 0, 30]);
        let mut settings = Settings::load(store.clone());

        settings.adjust_rainbow_speed();
        assert_eq!(settings.step_delay_ms(), 250);
        assert_eq!(store.bytes()[STEP_DELAY_ADDRESS as usize], 30);
    }

    #[test]
    fn test_switch_mode_persists_and_applies_defaults() {
        let store = MemoryStore::new([0, 4, 30]);
        let mut settings = Settings::load(store.clone());

        settings.switch_mode();
        assert_eq!(settings.mode(), Mode::Rainbow);
        assert_eq!(store.bytes()[MODE_ADDRESS as usize], 1);
        // Entering rainbow via button resets the speed from the static
        // 250ms baseline, which coerces to the fastest delay.
        assert_eq!(settings.step_delay_ms(), 10);
        assert_eq!(store.bytes()[STEP_DELAY_ADDRESS as usize], 10);

        settings.switch_mode();
        assert_eq!(settings.mode(), Mode::StaticColor);
        assert_eq!(store.bytes()[MODE_ADDRESS as usize], 0);
        // The in-memory color index survives the round trip.
        assert_eq!(settings.color_index(), 4);
        assert_eq!(settings.step_delay_ms(), 250);
    }

    #[test]
    fn test_apply_mode_defaults_is_idempotent() {
        let store = MemoryStore::new([0, 3, 20]);
        let mut settings = Settings::load(store.clone());

        settings.apply_mode_defaults(false);
        let first_state = (settings.mode(), settings.color_index(), settings.step_delay_ms());
        let first_bytes = store.bytes();

        settings.apply_mode_defaults(false);
        let second_state = (settings.mode(), settings.color_index(), settings.step_delay_ms());

        assert_eq!(first_state, second_state);
        assert_eq!(first_bytes, store.bytes());
    }
}
