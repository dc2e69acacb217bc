//! Gmdls - General MIDI / DLS instrument naming utilities
//!
//! This library provides:
//! - The canonical General MIDI program name table (programs 0-127)
//! - Checked display-name and reverse-name lookups, plus the 16 instrument
//!   families
//! - Strongly-typed parameter IDs and the view factory class name shared
//!   with the plugin host
//!
//! # Example
//!
//! ```
//! use gmdls::{program_display_name, program_names, ProgramFamily};
//!
//! assert_eq!(program_display_name(0).unwrap(), "Acoustic Grand Piano");
//! assert_eq!(program_names().len(), 128);
//! assert_eq!(ProgramFamily::of(40).unwrap().name(), "Strings");
//! ```

pub mod error;
pub mod names;
pub mod params;

// Re-export main types for convenience
pub use error::GmDlsError;
pub use names::{
    program_display_name, program_for_name, program_names, ProgramFamily, GM_PROGRAM_NAMES,
};
pub use params::{
    ParameterId, COCOA_VIEW_FACTORY_CLASS_NAME, INSTRUMENT_CONTROL_MODE_PARAMETER_ID,
    PROGRAM_PARAMETER_ID,
};
