//! Button click events and their delivery into the control loop.
//!
//! The debouncing input driver lives outside this crate; it reports one
//! [`ClickEvent`] per completed press-release cycle through a
//! [`ClickSender`]. Events are queued in a fixed-capacity channel built
//! on `critical-section` and `heapless::Deque`, so senders may run in
//! interrupt context while the control loop drains on the main thread.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

/// A single completed button click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    /// Button one: switch to the next mode.
    Mode,
    /// Button two: cycle the color or adjust the rainbow speed,
    /// depending on the current mode.
    Action,
}

/// Error returned when the click queue is full.
///
/// Callers in interrupt context should drop the click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFullError(pub ClickEvent);

/// Error returned when draining an empty click queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmptyError;

/// Bounded, interrupt-safe queue of pending clicks.
///
/// `SIZE` is the maximum number of unhandled clicks; the control loop
/// drains the queue every iteration, so a small capacity suffices.
pub struct ClickQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ClickEvent, SIZE>>>,
}

impl<const SIZE: usize> ClickQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle, one per button callback.
    pub const fn sender(&self) -> ClickSender<'_, SIZE> {
        ClickSender { queue: self }
    }

    /// Get the receiver handle for the control loop.
    pub const fn receiver(&self) -> ClickReceiver<'_, SIZE> {
        ClickReceiver { queue: self }
    }

    fn try_send(&self, event: ClickEvent) -> Result<(), QueueFullError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(QueueFullError)
        })
    }

    fn try_receive(&self) -> Result<ClickEvent, QueueEmptyError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmptyError)
        })
    }
}

impl<const SIZE: usize> Default for ClickQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender half of a [`ClickQueue`].
#[derive(Clone, Copy)]
pub struct ClickSender<'a, const SIZE: usize> {
    queue: &'a ClickQueue<SIZE>,
}

impl<const SIZE: usize> ClickSender<'_, SIZE> {
    /// Report a click. Fails when the queue is full.
    pub fn try_send(&self, event: ClickEvent) -> Result<(), QueueFullError> {
        self.queue.try_send(event)
    }
}

/// Receiver half of a [`ClickQueue`].
#[derive(Clone, Copy)]
pub struct ClickReceiver<'a, const SIZE: usize> {
    queue: &'a ClickQueue<SIZE>,
}

impl<const SIZE: usize> ClickReceiver<'_, SIZE> {
    /// Take the oldest pending click, if any.
    pub fn try_receive(&self) -> Result<ClickEvent, QueueEmptyError> {
        self.queue.try_receive()
    }
}
