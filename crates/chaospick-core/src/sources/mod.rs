//! All collector signal implementations.

pub mod helpers;

pub mod allocation;
pub mod os;
pub mod process;
pub mod timing;

use crate::source::SignalSource;

/// All signal constructors, in mixing order. Each returns a boxed signal.
pub fn all_signals() -> Vec<Box<dyn SignalSource>> {
    vec![
        // OS randomness
        Box::new(os::OsRandomSignal),
        Box::new(os::OsBytesSignal),
        // Timing
        Box::new(timing::ClockRotatedSignal),
        // Allocation
        Box::new(allocation::AllocAddressSignal),
        // Process
        Box::new(process::ProcessSaltSignal),
        Box::new(allocation::AllocPressureSignal),
        Box::new(process::UuidHighSignal),
        Box::new(timing::TimerSineSignal),
        // Crypto, optional
        Box::new(os::SysRngSignal),
    ]
}

/// Discover all signals available on this machine.
pub fn detect_available_signals() -> Vec<Box<dyn SignalSource>> {
    retain_available(all_signals())
}

/// Drop every signal that reports itself unavailable, keeping order.
pub(crate) fn retain_available(
    signals: Vec<Box<dyn SignalSource>>,
) -> Vec<Box<dyn SignalSource>> {
    signals.into_iter().filter(|s| s.is_available()).collect()
}
