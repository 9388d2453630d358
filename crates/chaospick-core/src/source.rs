//! Abstract entropy signal trait and metadata.
//!
//! Every ambient input to the collector implements the [`SignalSource`] trait,
//! which provides metadata via [`SignalInfo`], availability checking, and a
//! single 64-bit sample.

/// Kind of ambient state a signal reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Operating system random byte source.
    OsRandom,
    /// Wall clock or monotonic timer readings.
    Timing,
    /// Heap layout and allocation activity.
    Allocation,
    /// Per-process constants.
    Process,
    /// Identifier generators.
    Identifier,
    /// Cryptographically-backed generator.
    Crypto,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OsRandom => write!(f, "os_random"),
            Self::Timing => write!(f, "timing"),
            Self::Allocation => write!(f, "allocation"),
            Self::Process => write!(f, "process"),
            Self::Identifier => write!(f, "identifier"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

/// Metadata about a signal.
#[derive(Debug, Clone)]
pub struct SignalInfo {
    /// Unique identifier (e.g. `"clock_rotated"`).
    pub name: &'static str,
    /// One-line human-readable description.
    pub description: &'static str,
    /// What the signal reads.
    pub kind: SignalKind,
    /// Whether the signal may be missing on some platforms.
    ///
    /// Optional signals are dropped from the collector when unavailable;
    /// required ones are expected everywhere.
    pub optional: bool,
}

/// Trait that every collector signal must implement.
pub trait SignalSource: Send + Sync {
    /// Signal metadata.
    fn info(&self) -> &SignalInfo;

    /// Check if this signal can be read on the current machine.
    fn is_available(&self) -> bool {
        true
    }

    /// Read one sample. Implementations never fail; an unreadable optional
    /// signal contributes `0`, the XOR identity.
    fn sample(&self) -> u64;

    /// Convenience: name from info.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

/// Snapshot of signal metadata for external consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalInfoSnapshot {
    /// Signal name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Signal kind.
    pub kind: String,
    /// Whether the signal is optional.
    pub optional: bool,
}

impl From<&SignalInfo> for SignalInfoSnapshot {
    fn from(info: &SignalInfo) -> Self {
        Self {
            name: info.name.to_string(),
            description: info.description.to_string(),
            kind: info.kind.to_string(),
            optional: info.optional,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_INFO: SignalInfo = SignalInfo {
        name: "test_signal",
        description: "constant signal",
        kind: SignalKind::Process,
        optional: false,
    };

    struct ConstSignal;

    impl SignalSource for ConstSignal {
        fn info(&self) -> &SignalInfo {
            &TEST_INFO
        }
        fn sample(&self) -> u64 {
            7
        }
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(SignalKind::OsRandom.to_string(), "os_random");
        assert_eq!(SignalKind::Allocation.to_string(), "allocation");
        assert_eq!(SignalKind::Crypto.to_string(), "crypto");
    }

    #[test]
    fn default_availability_and_name() {
        let s = ConstSignal;
        assert!(s.is_available());
        assert_eq!(s.name(), "test_signal");
        assert_eq!(s.sample(), 7);
    }

    #[test]
    fn snapshot_copies_metadata() {
        let snap = SignalInfoSnapshot::from(ConstSignal.info());
        assert_eq!(snap.name, "test_signal");
        assert_eq!(snap.kind, "process");
        assert!(!snap.optional);
    }
}
