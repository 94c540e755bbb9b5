//! Console preview for the two-button controller
//!
//! Runs the control loop on host time with a scripted click sequence and
//! prints each committed frame as a row of colored blocks. Storage is a
//! plain in-memory array, so every run starts from "erased" bytes.

use std::io::{Write as _, stdout};
use std::thread::sleep;
use std::time::{Duration as StdDuration, Instant as StdInstant};

use button_light_controller::{
    ClickEvent, ClickQueue, Instant, LightController, OutputDriver, Rgb,
    SettingsStore,
};

const LED_COUNT: usize = 9;
const QUEUE_SIZE: usize = 8;
const RUN_SECONDS: u64 = 20;

/// Volatile stand-in for the EEPROM.
struct MemoryStore([u8; 3]);

impl SettingsStore for MemoryStore {
    fn read_byte(&mut self, address: u8) -> u8 {
        self.0[address as usize]
    }

    fn write_byte(&mut self, address: u8, value: u8) {
        self.0[address as usize] = value;
    }
}

/// Prints frames as ANSI truecolor blocks.
struct ConsoleStrip;

impl OutputDriver for ConsoleStrip {
    fn write(&mut self, colors: &[Rgb]) {
        let mut out = stdout().lock();
        let _ = write!(out, "\r");
        for led in colors {
            let _ = write!(out, "\x1b[38;2;{};{};{}m\u{2588}\u{2588}", led.r, led.g, led.b);
        }
        let _ = write!(out, "\x1b[0m");
        let _ = out.flush();
    }

    fn set_brightness(&mut self, _brightness: u8) {}
}

fn main() {
    static CLICKS: ClickQueue<QUEUE_SIZE> = ClickQueue::new();

    let store = MemoryStore([0xFF, 0xFF, 0xFF]);
    let mut controller: LightController<'_, _, _, LED_COUNT, QUEUE_SIZE> =
        LightController::new(store, ConsoleStrip, CLICKS.receiver());

    // Scripted clicks: cycle a few colors, then switch to rainbow and
    // speed it up twice.
    let script: [(u64, ClickEvent); 6] = [
        (2000, ClickEvent::Action),
        (4000, ClickEvent::Action),
        (6000, ClickEvent::Action),
        (8000, ClickEvent::Mode),
        (12000, ClickEvent::Action),
        (16000, ClickEvent::Action),
    ];
    let mut next_click = 0;

    let start = StdInstant::now();
    loop {
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        if elapsed_ms >= RUN_SECONDS * 1000 {
            break;
        }

        if next_click < script.len() && elapsed_ms >= script[next_click].0 {
            let _ = CLICKS.sender().try_send(script[next_click].1);
            next_click += 1;
        }

        controller.tick(Instant::from_millis(elapsed_ms));
        sleep(StdDuration::from_millis(1));
    }
    println!();
}
