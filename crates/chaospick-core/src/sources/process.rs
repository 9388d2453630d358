//! Per-process and identifier signals.
//!
//! **Process salt:** constant for a run. It only keeps two processes started
//! in the same instant from producing matching draws.
//!
//! **UUID high half:** the top 64 bits of a fresh v4 UUID, which `uuid` fills
//! from its own OS-backed generator.

use uuid::Uuid;

use crate::source::{SignalInfo, SignalKind, SignalSource};
use crate::state::EntropyState;

// ---------------------------------------------------------------------------
// ProcessSaltSignal
// ---------------------------------------------------------------------------

static PROCESS_SALT_INFO: SignalInfo = SignalInfo {
    name: "process_salt",
    description: "Process id shifted into the high bits",
    kind: SignalKind::Process,
    optional: false,
};

pub struct ProcessSaltSignal;

impl SignalSource for ProcessSaltSignal {
    fn info(&self) -> &SignalInfo {
        &PROCESS_SALT_INFO
    }

    fn sample(&self) -> u64 {
        EntropyState::get().salt
    }
}

// ---------------------------------------------------------------------------
// UuidHighSignal
// ---------------------------------------------------------------------------

static UUID_HIGH_INFO: SignalInfo = SignalInfo {
    name: "uuid_high",
    description: "High 64 bits of a random v4 UUID",
    kind: SignalKind::Identifier,
    optional: false,
};

pub struct UuidHighSignal;

impl SignalSource for UuidHighSignal {
    fn info(&self) -> &SignalInfo {
        &UUID_HIGH_INFO
    }

    fn sample(&self) -> u64 {
        (Uuid::new_v4().as_u128() >> 64) as u64
    }
}
