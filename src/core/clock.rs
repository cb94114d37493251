//! Wall-clock sampling for the frame driver.
//!
//! `PlatformTime` reads `Date.now()` in the browser and `Instant` on the host.
//! `SimulationClock` turns samples into per-frame deltas.

/// Source of monotonic-ish milliseconds
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy)]
pub struct PlatformTime {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl PlatformTime {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PlatformTime {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PlatformTime { origin: std::time::Instant::now() }
        }
    }
}

impl Default for PlatformTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for PlatformTime {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Per-frame delta clock.
///
/// The first `tick` reports the time since construction; every later tick
/// reports the time since the previous one. A source that goes backwards
/// yields a zero delta rather than a negative one.
pub struct SimulationClock<T: TimeSource = PlatformTime> {
    source: T,
    last_ms: f64,
}

impl SimulationClock<PlatformTime> {
    pub fn new() -> Self {
        Self::with_source(PlatformTime::new())
    }
}

impl Default for SimulationClock<PlatformTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> SimulationClock<T> {
    pub fn with_source(source: T) -> Self {
        let last_ms = source.now_ms();
        Self { source, last_ms }
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self) -> f32 {
        let now = self.source.now_ms();
        let delta_ms = (now - self.last_ms).max(0.0);
        self.last_ms = now;
        (delta_ms / 1000.0) as f32
    }
}

/// Stopwatch for perf stats
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(test)]
pub(crate) mod manual {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::TimeSource;

    /// Hand-driven time source for tests
    #[derive(Clone, Default)]
    pub(crate) struct ManualTime {
        now: Rc<Cell<f64>>,
    }

    impl ManualTime {
        pub(crate) fn advance_ms(&self, ms: f64) {
            self.now.set(self.now.get() + ms);
        }

        pub(crate) fn set_ms(&self, ms: f64) {
            self.now.set(ms);
        }
    }

    impl TimeSource for ManualTime {
        fn now_ms(&self) -> f64 {
            self.now.get()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualTime;
    use super::*;

    #[test]
    fn first_tick_measures_since_construction() {
        let time = ManualTime::default();
        let mut clock = SimulationClock::with_source(time.clone());
        time.advance_ms(16.0);
        assert!((clock.tick() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn tick_without_elapsed_time_is_zero() {
        let time = ManualTime::default();
        let mut clock = SimulationClock::with_source(time);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn consecutive_ticks_report_gaps() {
        let time = ManualTime::default();
        let mut clock = SimulationClock::with_source(time.clone());
        time.advance_ms(10.0);
        clock.tick();
        time.advance_ms(5_000.0);
        assert!((clock.tick() - 5.0).abs() < 1e-4);
        time.advance_ms(33.0);
        assert!((clock.tick() - 0.033).abs() < 1e-6);
    }

    #[test]
    fn backwards_source_yields_zero() {
        let time = ManualTime::default();
        time.set_ms(1_000.0);
        let mut clock = SimulationClock::with_source(time.clone());
        time.set_ms(500.0);
        assert_eq!(clock.tick(), 0.0);
        time.set_ms(520.0);
        assert!((clock.tick() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn platform_clock_is_non_negative() {
        let mut clock = SimulationClock::new();
        assert!(clock.tick() >= 0.0);
        assert!(PerfTimer::start().elapsed_ms() >= 0.0);
    }
}
