//! Persisted mode and per-mode settings
//!
//! The controller keeps a single in-memory copy of the active mode, the
//! static color index and the rainbow step delay. Every user-visible
//! change is written back to the [`SettingsStore`] immediately, one byte
//! per field, so the strip comes back in the same state after power loss.
//!
//! Out-of-range bytes read from storage (first boot with erased storage
//! reads 0xFF everywhere) are silently coerced to the field's default.
//! This is the only fault class the controller handles.

use embassy_time::Duration;

use crate::color::COLOR_COUNT;

/// Storage address of the mode byte.
pub const MODE_ADDRESS: u8 = 0;
/// Storage address of the static color index.
pub const COLOR_ADDRESS: u8 = 1;
/// Storage address of the rainbow step delay in milliseconds.
pub const STEP_DELAY_ADDRESS: u8 = 2;

/// Fastest rainbow step delay in milliseconds.
pub const MIN_STEP_DELAY_MS: u8 = 10;
/// Slowest rainbow step delay in milliseconds.
pub const MAX_STEP_DELAY_MS: u8 = 50;
/// Speed adjustment granularity in milliseconds.
pub const STEP_DELAY_INCREMENT_MS: u8 = 10;

/// Frame cadence of the static mode. Not persisted and not adjustable.
pub const STATIC_FRAME_DELAY_MS: u16 = 250;

const MODE_ID_STATIC: u8 = 0;
const MODE_ID_RAINBOW: u8 = 1;

const MODE_NAME_STATIC: &str = "static";
const MODE_NAME_RAINBOW: &str = "rainbow";

/// Byte-addressable persistent storage for settings.
///
/// Implement this trait over the platform's EEPROM or flash page.
/// Reads must tolerate arbitrary byte values (uninitialized storage);
/// writes are assumed atomic at byte granularity.
pub trait SettingsStore {
    /// Read one byte from the given address.
    fn read_byte(&mut self, address: u8) -> u8;

    /// Write one byte to the given address.
    fn write_byte(&mut self, address: u8, value: u8);
}

/// Display mode of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    StaticColor = MODE_ID_STATIC,
    Rainbow = MODE_ID_RAINBOW,
}

impl Mode {
    pub fn from_raw(value: u8) -> Option<Self> {
        match value {
            MODE_ID_STATIC => Some(Self::StaticColor),
            MODE_ID_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }

    /// Decode a stored mode byte, coercing unknown values to `StaticColor`.
    pub fn from_stored(value: u8) -> Self {
        Self::from_raw(value).unwrap_or(Self::StaticColor)
    }

    /// The mode after this one in the fixed cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::StaticColor => Self::Rainbow,
            Self::Rainbow => Self::StaticColor,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StaticColor => MODE_NAME_STATIC,
            Self::Rainbow => MODE_NAME_RAINBOW,
        }
    }
}

/// Coerce a stored color index into `[0, COLOR_COUNT)`.
///
/// Out-of-range values map to 0.
pub fn coerce_color_index(raw: u8) -> u8 {
    if raw < COLOR_COUNT { raw } else { 0 }
}

/// Coerce a stored step delay into `[MIN_STEP_DELAY_MS, MAX_STEP_DELAY_MS]`.
///
/// Out-of-range values map to `MIN_STEP_DELAY_MS`.
pub fn coerce_step_delay(raw: u8) -> u8 {
    if (MIN_STEP_DELAY_MS..=MAX_STEP_DELAY_MS).contains(&raw) {
        raw
    } else {
        MIN_STEP_DELAY_MS
    }
}

/// In-memory settings backed by a [`SettingsStore`].
///
/// Single source of truth for the active mode, color index and step
/// delay. All mutating operations persist the changed byte before
/// returning.
pub struct Settings<S: SettingsStore> {
    store: S,
    mode: Mode,
    color_index: u8,
    // u16 because the static baseline (250ms) exceeds the persisted
    // rainbow range.
    step_delay_ms: u16,
}

impl<S: SettingsStore> Settings<S> {
    /// Load settings from storage, coercing invalid bytes.
    ///
    /// Boot-time loading never writes back; storage is only touched
    /// again once the user changes something.
    pub fn load(mut store: S) -> Self {
        let mode = Mode::from_stored(store.read_byte(MODE_ADDRESS));
        let mut settings = Self {
            store,
            mode,
            color_index: 0,
            step_delay_ms: u16::from(MIN_STEP_DELAY_MS),
        };
        settings.apply_mode_defaults(true);
        settings
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn color_index(&self) -> u8 {
        self.color_index
    }

    pub const fn step_delay_ms(&self) -> u16 {
        self.step_delay_ms
    }

    /// Current frame cadence as a duration.
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms as u64)
    }

    /// Switch to the next mode in the fixed cycle and persist it.
    ///
    /// Entering a mode re-applies that mode's defaults, which also
    /// re-persists the per-mode byte.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.next();
        self.store.write_byte(MODE_ADDRESS, self.mode.as_raw());
        self.apply_mode_defaults(false);
    }

    /// Apply the active mode's default values.
    ///
    /// With `from_boot` the per-mode value is read from storage and
    /// coerced; otherwise the current in-memory value is coerced in
    /// place and persisted again. Idempotent in both flavors.
    pub fn apply_mode_defaults(&mut self, from_boot: bool) {
        match self.mode {
            Mode::StaticColor => {
                let raw = if from_boot {
                    self.store.read_byte(COLOR_ADDRESS)
                } else {
                    self.color_index
                };
                self.color_index = coerce_color_index(raw);
                self.step_delay_ms = STATIC_FRAME_DELAY_MS;
                if !from_boot {
                    self.store.write_byte(COLOR_ADDRESS, self.color_index);
                }
            }
            Mode::Rainbow => {
                let raw = if from_boot {
                    self.store.read_byte(STEP_DELAY_ADDRESS)
                } else {
                    self.step_delay_raw()
                };
                self.step_delay_ms = u16::from(coerce_step_delay(raw));
                if !from_boot {
                    self.store
                        .write_byte(STEP_DELAY_ADDRESS, self.step_delay_raw());
                }
            }
        }
    }

    /// Advance the static color circularly through the palette.
    ///
    /// Only meaningful in `StaticColor` mode; does nothing otherwise.
    pub fn cycle_color(&mut self) {
        if self.mode != Mode::StaticColor {
            return;
        }
        self.color_index = if self.color_index < COLOR_COUNT - 1 {
            self.color_index + 1
        } else {
            0
        };
        self.store.write_byte(COLOR_ADDRESS, self.color_index);
    }

    /// Speed up the rainbow by one notch, wrapping back to the slowest
    /// delay once the fastest is passed: 50 -> 40 -> 30 -> 20 -> 10 -> 50.
    ///
    /// Only meaningful in `Rainbow` mode; does nothing otherwise.
    pub fn adjust_rainbow_speed(&mut self) {
        if self.mode != Mode::Rainbow {
            return;
        }
        let current = self.step_delay_raw();
        let next = if current > MIN_STEP_DELAY_MS {
            current
                .saturating_sub(STEP_DELAY_INCREMENT_MS)
                .max(MIN_STEP_DELAY_MS)
        } else {
            MAX_STEP_DELAY_MS
        };
        self.step_delay_ms = u16::from(next);
        self.store.write_byte(STEP_DELAY_ADDRESS, next);
    }

    /// Current step delay narrowed to the persisted byte range.
    #[allow(clippy::cast_possible_truncation)]
    fn step_delay_raw(&self) -> u8 {
        self.step_delay_ms.min(u16::from(u8::MAX)) as u8
    }
}
