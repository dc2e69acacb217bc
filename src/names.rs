//! The General MIDI program name table and lookups over it.
//!
//! Program numbers are the 0-127 values carried by MIDI program change
//! messages. The table holds the canonical Level 1 instrument names in
//! program order, grouped in the standard 16 families of 8 programs.

use crate::error::GmDlsError;

/// `GM_PROGRAM_NAMES[program]` is the canonical instrument name for `program`.
pub const GM_PROGRAM_NAMES: [&str; 128] = [
    // Piano
    "Acoustic Grand Piano",
    "Bright Acoustic Piano",
    "Electric Grand Piano",
    "Honky-tonk Piano",
    "Electric Piano 1",
    "Electric Piano 2",
    "Harpsichord",
    "Clavinet",
    // Chromatic Percussion
    "Celesta",
    "Glockenspiel",
    "Music Box",
    "Vibraphone",
    "Marimba",
    "Xylophone",
    "Tubular Bells",
    "Dulcimer",
    // Organ
    "Drawbar Organ",
    "Percussive Organ",
    "Rock Organ",
    "Church Organ",
    "Reed Organ",
    "Accordion",
    "Harmonica",
    "Tango Accordion",
    // Guitar
    "Acoustic Guitar (nylon)",
    "Acoustic Guitar (steel)",
    "Electric Guitar (jazz)",
    "Electric Guitar (clean)",
    "Electric Guitar (muted)",
    "Overdriven Guitar",
    "Distortion Guitar",
    "Guitar Harmonics",
    // Bass
    "Acoustic Bass",
    "Electric Bass (finger)",
    "Electric Bass (pick)",
    "Fretless Bass",
    "Slap Bass 1",
    "Slap Bass 2",
    "Synth Bass 1",
    "Synth Bass 2",
    // Strings
    "Violin",
    "Viola",
    "Cello",
    "Contrabass",
    "Tremolo Strings",
    "Pizzicato Strings",
    "Orchestral Harp",
    "Timpani",
    // Ensemble
    "String Ensemble 1",
    "String Ensemble 2",
    "Synth Strings 1",
    "Synth Strings 2",
    "Choir Aahs",
    "Voice Oohs",
    "Synth Choir",
    "Orchestra Hit",
    // Brass
    "Trumpet",
    "Trombone",
    "Tuba",
    "Muted Trumpet",
    "French Horn",
    "Brass Section",
    "Synth Brass 1",
    "Synth Brass 2",
    // Reed
    "Soprano Sax",
    "Alto Sax",
    "Tenor Sax",
    "Baritone Sax",
    "Oboe",
    "English Horn",
    "Bassoon",
    "Clarinet",
    // Pipe
    "Piccolo",
    "Flute",
    "Recorder",
    "Pan Flute",
    "Blown Bottle",
    "Shakuhachi",
    "Whistle",
    "Ocarina",
    // Synth Lead
    "Lead 1 (square)",
    "Lead 2 (sawtooth)",
    "Lead 3 (calliope)",
    "Lead 4 (chiff)",
    "Lead 5 (charang)",
    "Lead 6 (voice)",
    "Lead 7 (fifths)",
    "Lead 8 (bass + lead)",
    // Synth Pad
    "Pad 1 (new age)",
    "Pad 2 (warm)",
    "Pad 3 (polysynth)",
    "Pad 4 (choir)",
    "Pad 5 (bowed)",
    "Pad 6 (metallic)",
    "Pad 7 (halo)",
    "Pad 8 (sweep)",
    // Synth Effects
    "FX 1 (rain)",
    "FX 2 (soundtrack)",
    "FX 3 (crystal)",
    "FX 4 (atmosphere)",
    "FX 5 (brightness)",
    "FX 6 (goblins)",
    "FX 7 (echoes)",
    "FX 8 (sci-fi)",
    // Ethnic
    "Sitar",
    "Banjo",
    "Shamisen",
    "Koto",
    "Kalimba",
    "Bagpipe",
    "Fiddle",
    "Shanai",
    // Percussive
    "Tinkle Bell",
    "Agogo",
    "Steel Drums",
    "Woodblock",
    "Taiko Drum",
    "Melodic Tom",
    "Synth Drum",
    "Reverse Cymbal",
    // Sound Effects
    "Guitar Fret Noise",
    "Breath Noise",
    "Seashore",
    "Bird Tweet",
    "Telephone Ring",
    "Helicopter",
    "Applause",
    "Gunshot",
];

/// Returns all 128 program names in program-number order.
///
/// The returned view is immutable and lives for the whole process; the
/// length guarantee is carried by the array type.
pub const fn program_names() -> &'static [&'static str; 128] {
    &GM_PROGRAM_NAMES
}

/// Returns the canonical display name for a program number.
///
/// Programs above 127 fail with [`GmDlsError::ProgramOutOfRange`]; they are
/// never wrapped or clamped onto the table.
pub fn program_display_name(program: u8) -> Result<&'static str, GmDlsError> {
    GM_PROGRAM_NAMES
        .get(usize::from(program))
        .copied()
        .ok_or(GmDlsError::ProgramOutOfRange(program))
}

/// Returns the program number carrying the given canonical name.
///
/// The match is exact but ASCII-case-insensitive.
pub fn program_for_name(name: &str) -> Result<u8, GmDlsError> {
    GM_PROGRAM_NAMES
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(name))
        .map(|index| index as u8)
        .ok_or_else(|| GmDlsError::UnknownProgramName(name.to_string()))
}

/// The 16 standard General MIDI instrument families, 8 programs each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramFamily {
    Piano,
    ChromaticPercussion,
    Organ,
    Guitar,
    Bass,
    Strings,
    Ensemble,
    Brass,
    Reed,
    Pipe,
    SynthLead,
    SynthPad,
    SynthEffects,
    Ethnic,
    Percussive,
    SoundEffects,
}

impl ProgramFamily {
    /// All families in program order.
    pub const ALL: [Self; 16] = [
        Self::Piano,
        Self::ChromaticPercussion,
        Self::Organ,
        Self::Guitar,
        Self::Bass,
        Self::Strings,
        Self::Ensemble,
        Self::Brass,
        Self::Reed,
        Self::Pipe,
        Self::SynthLead,
        Self::SynthPad,
        Self::SynthEffects,
        Self::Ethnic,
        Self::Percussive,
        Self::SoundEffects,
    ];

    /// Returns the family a program number belongs to.
    pub fn of(program: u8) -> Result<Self, GmDlsError> {
        if program > 127 {
            return Err(GmDlsError::ProgramOutOfRange(program));
        }
        Ok(Self::ALL[usize::from(program / 8)])
    }

    /// Family display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Piano => "Piano",
            Self::ChromaticPercussion => "Chromatic Percussion",
            Self::Organ => "Organ",
            Self::Guitar => "Guitar",
            Self::Bass => "Bass",
            Self::Strings => "Strings",
            Self::Ensemble => "Ensemble",
            Self::Brass => "Brass",
            Self::Reed => "Reed",
            Self::Pipe => "Pipe",
            Self::SynthLead => "Synth Lead",
            Self::SynthPad => "Synth Pad",
            Self::SynthEffects => "Synth Effects",
            Self::Ethnic => "Ethnic",
            Self::Percussive => "Percussive",
            Self::SoundEffects => "Sound Effects",
        }
    }

    /// The 8 program numbers in this family.
    pub const fn programs(self) -> std::ops::RangeInclusive<u8> {
        let first = self as u8 * 8;
        first..=first + 7
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn display_name_boundaries() {
        assert_eq!(program_display_name(0).unwrap(), "Acoustic Grand Piano");
        assert_eq!(program_display_name(7).unwrap(), "Clavinet");
        assert_eq!(program_display_name(8).unwrap(), "Celesta");
        assert_eq!(program_display_name(40).unwrap(), "Violin");
        assert_eq!(program_display_name(127).unwrap(), "Gunshot");
    }

    #[test]
    fn display_name_rejects_out_of_range() {
        for program in [128, 129, 200, 255] {
            let err = program_display_name(program).unwrap_err();
            assert!(
                matches!(err, GmDlsError::ProgramOutOfRange(p) if p == program),
                "program {program} should be out of range"
            );
        }
    }

    #[test]
    fn all_names_non_empty_and_distinct() {
        let mut seen = HashSet::new();
        for (program, name) in GM_PROGRAM_NAMES.iter().enumerate() {
            assert!(!name.is_empty(), "program {program} has an empty name");
            assert!(seen.insert(*name), "program {program} repeats {name:?}");
        }
        assert_eq!(seen.len(), 128);
    }

    #[test]
    fn names_view_agrees_with_display_name() {
        let names = program_names();
        for program in 0..=127u8 {
            assert_eq!(
                names[usize::from(program)],
                program_display_name(program).unwrap()
            );
        }
    }

    #[test]
    fn reverse_lookup_finds_every_program() {
        for program in 0..=127u8 {
            let name = program_display_name(program).unwrap();
            assert_eq!(program_for_name(name).unwrap(), program);
        }
    }

    #[test]
    fn reverse_lookup_ignores_ascii_case() {
        assert_eq!(program_for_name("acoustic grand piano").unwrap(), 0);
        assert_eq!(program_for_name("GUNSHOT").unwrap(), 127);
    }

    #[test]
    fn reverse_lookup_rejects_unknown_names() {
        let err = program_for_name("Theremin").unwrap_err();
        assert!(matches!(err, GmDlsError::UnknownProgramName(name) if name == "Theremin"));
    }

    #[test]
    fn family_boundaries() {
        assert_eq!(ProgramFamily::of(0).unwrap(), ProgramFamily::Piano);
        assert_eq!(ProgramFamily::of(7).unwrap(), ProgramFamily::Piano);
        assert_eq!(
            ProgramFamily::of(8).unwrap(),
            ProgramFamily::ChromaticPercussion
        );
        assert_eq!(ProgramFamily::of(120).unwrap(), ProgramFamily::SoundEffects);
        assert_eq!(ProgramFamily::of(127).unwrap(), ProgramFamily::SoundEffects);
        assert!(ProgramFamily::of(128).is_err());
    }

    #[test]
    fn families_partition_the_program_range() {
        let mut next = 0u16;
        for family in ProgramFamily::ALL {
            let programs = family.programs();
            assert_eq!(u16::from(*programs.start()), next, "family {family:?}");
            assert_eq!(programs.clone().count(), 8, "family {family:?}");
            for program in programs {
                assert_eq!(ProgramFamily::of(program).unwrap(), family);
            }
            next += 8;
        }
        assert_eq!(next, 128);
    }
}
