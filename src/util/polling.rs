//! Fixed-interval polling controller.
//!
//! The controller calls its callback once on start, then every `delay_ms`
//! until stopped or dropped. Scheduling goes through the `Timer` trait so the
//! browser uses `gloo-timers` while tests drive a simulated clock.
//!
//! The controller never inspects what the callback does: async fetches it
//! spawns, and their failures, belong to the caller. Overlapping in-flight
//! work is the caller's to resolve as well.

#[cfg(test)]
#[path = "polling_test.rs"]
mod polling_test;

use std::cell::Cell;
use std::rc::Rc;

/// Repeating-timer backend.
pub trait Timer {
    /// Identity of one armed interval, owned by the controller that armed it.
    type Handle;

    /// Invoke `tick` every `delay_ms` until the handle is cancelled.
    fn schedule_repeating(&self, delay_ms: u32, tick: Rc<dyn Fn()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollingOptions {
    /// Milliseconds between automatic invocations. Zero disables automatic
    /// ticks; the callback then only runs on start and on demand.
    pub delay_ms: u32,
}

impl PollingOptions {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

struct Armed<H> {
    handle: H,
    live: Rc<Cell<bool>>,
}

/// Polling controller bound to one callback.
pub struct Poller<T: Timer> {
    timer: T,
    callback: Rc<dyn Fn()>,
    options: PollingOptions,
    active: bool,
    armed: Option<Armed<T::Handle>>,
}

impl<T: Timer> Poller<T> {
    pub fn new<F>(timer: T, callback: F, options: PollingOptions) -> Self
    where
        F: Fn() + 'static,
    {
        Self { timer, callback: Rc::new(callback), options, active: false, armed: None }
    }

    /// Invoke the callback immediately and arm the interval. No-op if already active.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        (self.callback)();
        self.arm();
    }

    /// Invoke the callback now without disturbing the schedule.
    pub fn poll_now(&self) {
        if self.active {
            (self.callback)();
        }
    }

    /// Change the interval. An active controller re-arms from this moment
    /// without an extra invocation.
    pub fn set_delay(&mut self, delay_ms: u32) {
        if self.options.delay_ms == delay_ms {
            return;
        }
        self.options.delay_ms = delay_ms;
        if self.active {
            self.disarm();
            self.arm();
        }
    }

    /// Cancel the schedule. Nothing fires after this returns.
    pub fn stop(&mut self) {
        self.active = false;
        self.disarm();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn delay_ms(&self) -> u32 {
        self.options.delay_ms
    }

    fn arm(&mut self) {
        if self.options.delay_ms == 0 {
            return;
        }
        let live = Rc::new(Cell::new(true));
        let tick_live = Rc::clone(&live);
        let callback = Rc::clone(&self.callback);
        let tick: Rc<dyn Fn()> = Rc::new(move || {
            if tick_live.get() {
                callback();
            }
        });
        let handle = self.timer.schedule_repeating(self.options.delay_ms, tick);
        self.armed = Some(Armed { handle, live });
    }

    fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.live.set(false);
            self.timer.cancel(armed.handle);
        }
    }
}

impl<T: Timer> Drop for Poller<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `Timer` backed by `gloo_timers::callback::Interval`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

#[cfg(feature = "hydrate")]
impl Timer for BrowserTimer {
    type Handle = gloo_timers::callback::Interval;

    fn schedule_repeating(&self, delay_ms: u32, tick: Rc<dyn Fn()>) -> Self::Handle {
        gloo_timers::callback::Interval::new(delay_ms, move || tick())
    }

    fn cancel(&self, handle: Self::Handle) {
        // Dropping the interval clears it.
        drop(handle);
    }
}

/// Poll `callback` for the lifetime of the calling component.
///
/// Changes to `delay` re-arm the running interval.
#[cfg(feature = "hydrate")]
pub fn use_polling<F>(callback: F, delay: leptos::prelude::Signal<u32>)
where
    F: Fn() + 'static,
{
    use leptos::prelude::*;

    let poller = StoredValue::new_local(Poller::new(BrowserTimer, callback, PollingOptions::new(delay.get_untracked())));
    poller.update_value(Poller::start);

    Effect::new(move || {
        let delay_ms = delay.get();
        let _ = poller.try_update_value(|p| p.set_delay(delay_ms));
    });

    on_cleanup(move || {
        let _ = poller.try_update_value(Poller::stop);
    });
}
