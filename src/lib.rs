#![no_std]

pub mod color;
pub mod controller;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod settings;

pub use color::{COLOR_COUNT, PALETTE, Rgb, palette_color, wheel};
pub use controller::{BOOT_BRIGHTNESS, LightController};
pub use input::{ClickEvent, ClickQueue, ClickReceiver, ClickSender};
pub use renderer::Renderer;
pub use scheduler::FrameScheduler;
pub use settings::{
    Mode, Settings, SettingsStore, coerce_color_index, coerce_step_delay,
};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The controller is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Set the global output brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);
}
