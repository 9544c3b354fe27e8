use depot_core::effects::{HapticKind, HostShellEffects};
use parking_lot::Mutex;

/// Host shell that records haptic requests
#[derive(Default)]
pub struct RecordingHostShell {
    events: Mutex<Vec<HapticKind>>,
}

impl RecordingHostShell {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far, in call order
    pub fn events(&self) -> Vec<HapticKind> {
        self.events.lock().clone()
    }
}

impl HostShellEffects for RecordingHostShell {
    fn haptic_feedback(&self, kind: HapticKind) {
        self.events.lock().push(kind);
    }
}
