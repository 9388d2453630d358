//! Process-wide entropy state, initialised once on first use.

use std::sync::OnceLock;

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::sources::helpers::getrandom;

/// Per-process constants shared by every collector.
#[derive(Debug, Clone, Copy)]
pub struct EntropyState {
    /// Process id shifted into the high bits. Diverges concurrently running
    /// processes; constant within one.
    pub salt: u64,
    /// Whether [`OsRng`] answered a probe draw at initialisation.
    pub has_sys_random: bool,
}

static STATE: OnceLock<EntropyState> = OnceLock::new();

impl EntropyState {
    /// The shared state, initialising it on first call.
    ///
    /// # Panics
    /// Panics if the OS random byte source cannot be read. Nothing in this
    /// crate can run without it.
    pub fn get() -> &'static EntropyState {
        STATE.get_or_init(Self::init)
    }

    fn init() -> Self {
        let mut probe = [0u8; 8];
        getrandom(&mut probe);

        let salt = u64::from(std::process::id()) << 16;
        let has_sys_random = OsRng.try_next_u32().is_ok();
        if !has_sys_random {
            log::debug!("OsRng probe failed; sys_rng signal disabled");
        }
        log::debug!("entropy state initialised: salt={salt:#x} sys_random={has_sys_random}");

        Self {
            salt,
            has_sys_random,
        }
    }
}
