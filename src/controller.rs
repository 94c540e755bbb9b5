//! Control loop orchestration
//!
//! Ties settings, input, scheduling and rendering together behind a
//! single [`LightController::tick`] call. The embedding firmware runs
//! one flat loop: poll the buttons (their callbacks push into the click
//! queue), then call `tick` with the current time.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::input::{ClickEvent, ClickReceiver};
use crate::renderer::Renderer;
use crate::scheduler::FrameScheduler;
use crate::settings::{Mode, Settings, SettingsStore};

/// Brightness applied to the output driver once at boot.
pub const BOOT_BRIGHTNESS: u8 = 255;

/// The controller core: mode state machine plus non-blocking animation.
///
/// `LED_COUNT` is the number of pixels on the strip,
/// `CLICK_QUEUE_SIZE` the capacity of the click queue the receiver was
/// taken from.
pub struct LightController<'a, S, O, const LED_COUNT: usize, const CLICK_QUEUE_SIZE: usize>
where
    S: SettingsStore,
    O: OutputDriver,
{
    settings: Settings<S>,
    renderer: Renderer<LED_COUNT>,
    scheduler: FrameScheduler,
    clicks: ClickReceiver<'a, CLICK_QUEUE_SIZE>,
    output: O,
}

impl<'a, S, O, const LED_COUNT: usize, const CLICK_QUEUE_SIZE: usize>
    LightController<'a, S, O, LED_COUNT, CLICK_QUEUE_SIZE>
where
    S: SettingsStore,
    O: OutputDriver,
{
    /// Create the controller: load persisted settings and apply the
    /// boot brightness to the output driver.
    pub fn new(store: S, mut output: O, clicks: ClickReceiver<'a, CLICK_QUEUE_SIZE>) -> Self {
        output.set_brightness(BOOT_BRIGHTNESS);
        Self {
            settings: Settings::load(store),
            renderer: Renderer::new(),
            scheduler: FrameScheduler::new(),
            clicks,
            output,
        }
    }

    /// Run one loop iteration: handle pending clicks, then render a
    /// frame if one is due.
    ///
    /// Never blocks. Returns whether a frame was written to the output
    /// driver.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.process_clicks();

        if !self.scheduler.is_frame_due(now) {
            return false;
        }

        let frame = self
            .renderer
            .render(self.settings.mode(), self.settings.color_index());
        self.output.write(frame);
        self.scheduler.schedule_next(now, self.settings.step_delay());
        true
    }

    /// Drain the click queue, applying each click to the settings.
    ///
    /// Clicks are handled in arrival order, each exactly once, before
    /// any frame of this iteration renders.
    fn process_clicks(&mut self) {
        while let Ok(click) = self.clicks.try_receive() {
            match click {
                ClickEvent::Mode => {
                    self.settings.switch_mode();
                    #[cfg(feature = "esp32-log")]
                    println!("mode: {}", self.settings.mode().as_str());
                }
                ClickEvent::Action => match self.settings.mode() {
                    Mode::StaticColor => {
                        self.settings.cycle_color();
                        #[cfg(feature = "esp32-log")]
                        println!("color: {}", self.settings.color_index());
                    }
                    Mode::Rainbow => {
                        self.settings.adjust_rainbow_speed();
                        #[cfg(feature = "esp32-log")]
                        println!("step delay: {}ms", self.settings.step_delay_ms());
                    }
                },
            }
        }
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings<S> {
        &self.settings
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<LED_COUNT> {
        &self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
