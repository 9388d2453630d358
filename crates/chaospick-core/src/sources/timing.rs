//! Clock-derived signals.
//!
//! Timer readings are mostly predictable in their high bits; the low bits
//! carry scheduling and read-latency jitter. Both signals here move that
//! jitter somewhere more useful before it is XORed in.

use crate::source::{SignalInfo, SignalKind, SignalSource};

use super::helpers::{monotonic_nanos, signed_bits, unix_nanos};

/// Scale applied to the sine of the timer before truncation.
const SINE_SCALE: f64 = 100_000.0;

// ---------------------------------------------------------------------------
// ClockRotatedSignal
// ---------------------------------------------------------------------------

static CLOCK_ROTATED_INFO: SignalInfo = SignalInfo {
    name: "clock_rotated",
    description: "Wall-clock nanoseconds rotated left by one bit",
    kind: SignalKind::Timing,
    optional: false,
};

/// Unix-epoch nanoseconds, rotated so the top bit wraps to the bottom.
pub struct ClockRotatedSignal;

impl SignalSource for ClockRotatedSignal {
    fn info(&self) -> &SignalInfo {
        &CLOCK_ROTATED_INFO
    }

    fn sample(&self) -> u64 {
        unix_nanos().rotate_left(1)
    }
}

// ---------------------------------------------------------------------------
// TimerSineSignal
// ---------------------------------------------------------------------------

static TIMER_SINE_INFO: SignalInfo = SignalInfo {
    name: "timer_sine",
    description: "sin(monotonic seconds) * 100000, truncated toward zero",
    kind: SignalKind::Timing,
    optional: false,
};

/// Nonlinear view of the monotonic timer: phase sensitivity through `sin`.
pub struct TimerSineSignal;

/// `sin(seconds) * 100000` truncated toward zero.
pub fn timer_sine(seconds: f64) -> i64 {
    (seconds.sin() * SINE_SCALE) as i64
}

impl SignalSource for TimerSineSignal {
    fn info(&self) -> &SignalInfo {
        &TIMER_SINE_INFO
    }

    fn sample(&self) -> u64 {
        let seconds = monotonic_nanos() as f64 / 1e9;
        signed_bits(timer_sine(seconds))
    }
}
