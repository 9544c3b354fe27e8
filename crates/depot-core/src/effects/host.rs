use serde::{Deserialize, Serialize};
use std::fmt;

/// Haptic feedback styles offered by the host shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticKind {
    /// Selection changed (tab taps, navigation)
    Selection,
    /// Light impact
    ImpactLight,
    /// Medium impact
    ImpactMedium,
    /// Heavy impact
    ImpactHeavy,
    /// Operation succeeded
    Success,
    /// Operation produced a warning
    Warning,
    /// Operation failed
    Error,
}

impl fmt::Display for HapticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Selection => "selection",
            Self::ImpactLight => "impact_light",
            Self::ImpactMedium => "impact_medium",
            Self::ImpactHeavy => "impact_heavy",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Signals sent to the hosting chat-platform shell.
///
/// Calls are fire-and-forget: they return immediately, report nothing and
/// carry no ordering guarantee relative to state updates or rendering.
pub trait HostShellEffects: Send + Sync {
    /// Request haptic feedback
    fn haptic_feedback(&self, kind: HapticKind);
}

/// Host shell that ignores every signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHostShell;

impl HostShellEffects for NoopHostShell {
    fn haptic_feedback(&self, _kind: HapticKind) {}
}
