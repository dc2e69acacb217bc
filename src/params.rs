//! Constants shared with the plugin host.
//!
//! The host addresses automatable parameters by 32-bit ID and resolves the
//! view factory by class name. Both are opaque tags on this side of the
//! boundary; only their values and distinctness are contractual.

use std::fmt;

/// Strongly-typed host parameter identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterId(u32);

impl ParameterId {
    /// Raw value handed to the host parameter APIs.
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selects the active General MIDI program (0-127).
pub const PROGRAM_PARAMETER_ID: ParameterId = ParameterId(0);

/// Switches how the instrument responds to program selection.
pub const INSTRUMENT_CONTROL_MODE_PARAMETER_ID: ParameterId = ParameterId(1);

/// Class name the host resolves to instantiate the plugin view.
pub const COCOA_VIEW_FACTORY_CLASS_NAME: &str = "GMDLSCocoaViewFactory";
