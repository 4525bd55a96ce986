//! Rule configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How capture legality is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapturePolicy {
    /// `GameRules::is_valid_capture` as written: a man's jumped square and a
    /// king's whole path must be empty. No piece is ever removed.
    OpenPath,
    /// Standard checkers jumps: the destination is empty and exactly one
    /// opposing piece is jumped and removed.
    #[default]
    Jump,
}

/// Options consulted by move generation, move application and evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    pub capture_policy: CapturePolicy,
}

impl RulesConfig {
    /// Configuration using standard jump captures.
    #[must_use]
    pub const fn jumps() -> Self {
        RulesConfig {
            capture_policy: CapturePolicy::Jump,
        }
    }

    /// Configuration deciding captures with `GameRules::is_valid_capture`.
    #[must_use]
    pub const fn open_path() -> Self {
        RulesConfig {
            capture_policy: CapturePolicy::OpenPath,
        }
    }
}
