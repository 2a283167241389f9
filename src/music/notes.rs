// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chromatic note table and note spelling.
//!
//! The twelve pitch classes are stored starting at C. Black keys and the
//! E/F and B/C boundaries carry both of their spellings; everything else
//! has a single name. Scales are built by rotating this table to a tonic,
//! splitting it into diatonic tones and chromatic semitones, and finally
//! choosing one spelling for every enharmonic pair.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::TheoryError;

/// Number of pitch classes in an octave
pub const PITCH_CLASSES: usize = 12;

/// Positions of the major-scale degrees within a rotation
pub const TONE_POSITIONS: [usize; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Positions of the chromatic notes between major-scale degrees
pub const SEMITONE_POSITIONS: [usize; 5] = [1, 3, 6, 8, 10];

/// One spelling of a pitch class, e.g. "C#" or "Db".
///
/// Only the spellings present in [`CHROMATIC`] can be constructed, so every
/// `NoteName` knows its pitch class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    name: &'static str,
    pitch_class: u8,
}

impl NoteName {
    /// Parse a spelling such as "C", "F#" or "Bb".
    ///
    /// The match is exact: surrounding whitespace or other case is rejected.
    pub fn parse(s: &str) -> Result<Self, TheoryError> {
        CHROMATIC
            .iter()
            .find_map(|pitch| pitch.spelled_as(s))
            .ok_or_else(|| TheoryError::NoteNotFound(s.to_string()))
    }

    /// Every spelling in the table, in chromatic order (sharp before flat)
    pub fn all() -> impl Iterator<Item = NoteName> {
        CHROMATIC.iter().flat_map(|pitch| match *pitch {
            Pitch::Natural(name) => vec![name],
            Pitch::Enharmonic { sharp, flat } => vec![sharp, flat],
        })
    }

    /// The spelling as text
    pub fn as_str(self) -> &'static str {
        self.name
    }

    /// Letter name without accidental
    pub fn letter(self) -> char {
        self.name.chars().next().unwrap_or_default()
    }

    /// Pitch class (0 = C, 11 = B)
    pub fn pitch_class(self) -> u8 {
        self.pitch_class
    }

    /// True for spellings without an accidental
    pub fn is_natural(self) -> bool {
        self.name.len() == 1
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoteName::parse(s)
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

/// A pitch class as it appears in the chromatic table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    /// Pitch class with a single name
    Natural(NoteName),
    /// Pitch class with a sharp-side and a flat-side spelling
    Enharmonic { sharp: NoteName, flat: NoteName },
}

impl Pitch {
    /// Pitch class (0-11)
    pub fn pitch_class(self) -> u8 {
        match self {
            Pitch::Natural(name) => name.pitch_class(),
            Pitch::Enharmonic { sharp, .. } => sharp.pitch_class(),
        }
    }

    /// Return the spelling equal to `s`, if this pitch has one
    pub fn spelled_as(self, s: &str) -> Option<NoteName> {
        match self {
            Pitch::Natural(name) => (name.as_str() == s).then_some(name),
            Pitch::Enharmonic { sharp, flat } => [sharp, flat]
                .into_iter()
                .find(|name| name.as_str() == s),
        }
    }

    /// The flat/simple spelling: the natural name when one exists, else the flat
    pub fn preferred(self) -> NoteName {
        match self {
            Pitch::Natural(name) => name,
            Pitch::Enharmonic { sharp, .. } if sharp.is_natural() => sharp,
            Pitch::Enharmonic { flat, .. } => flat,
        }
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pitch::Natural(name) => write!(f, "{}", name),
            Pitch::Enharmonic { sharp, flat } => write!(f, "{}/{}", sharp, flat),
        }
    }
}

const fn natural(name: &'static str, pitch_class: u8) -> Pitch {
    Pitch::Natural(NoteName { name, pitch_class })
}

const fn pair(sharp: &'static str, flat: &'static str, pitch_class: u8) -> Pitch {
    Pitch::Enharmonic {
        sharp: NoteName { name: sharp, pitch_class },
        flat: NoteName { name: flat, pitch_class },
    }
}

/// The chromatic scale from C, with the fixed preferred spellings
pub const CHROMATIC: [Pitch; PITCH_CLASSES] = [
    pair("B#", "C", 0),
    pair("C#", "Db", 1),
    natural("D", 2),
    pair("D#", "Eb", 3),
    pair("E", "Fb", 4),
    pair("E#", "F", 5),
    pair("F#", "Gb", 6),
    natural("G", 7),
    pair("G#", "Ab", 8),
    natural("A", 9),
    pair("A#", "Bb", 10),
    pair("B", "Cb", 11),
];

/// Rotate the chromatic table so `tonic` comes first.
///
/// The first entry is the preferred spelling of the tonic's pitch class, so
/// "C#" and "Db" both start at "Db". The rest keep their table form.
pub fn rotation(tonic: NoteName) -> [Pitch; PITCH_CLASSES] {
    let start = tonic.pitch_class() as usize;
    std::array::from_fn(|i| {
        let pitch = CHROMATIC[(start + i) % PITCH_CLASSES];
        if i == 0 {
            Pitch::Natural(pitch.preferred())
        } else {
            pitch
        }
    })
}

/// The seven major-scale degrees of a rotation
pub fn tones(rotation: &[Pitch; PITCH_CLASSES]) -> [Pitch; 7] {
    TONE_POSITIONS.map(|i| rotation[i])
}

/// The five chromatic notes of a rotation that fall between the degrees
pub fn semitones(rotation: &[Pitch; PITCH_CLASSES]) -> [Pitch; 5] {
    SEMITONE_POSITIONS.map(|i| rotation[i])
}

/// Resolve every enharmonic pair to a single spelling.
///
/// A pair takes its flat spelling when the sharp spelling would repeat the
/// letter of the previously resolved note, and its sharp spelling otherwise.
pub fn spell(pitches: &[Pitch]) -> Vec<NoteName> {
    pitches
        .iter()
        .fold(Vec::with_capacity(pitches.len()), |mut spelled, pitch| {
            let name = match *pitch {
                Pitch::Natural(name) => name,
                Pitch::Enharmonic { sharp, flat } => match spelled.last() {
                    Some(prev) if prev.letter() == sharp.letter() => flat,
                    _ => sharp,
                },
            };
            spelled.push(name);
            spelled
        })
}
