// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic chords of a major key.
//!
//! Chord names are built from the spelled major scale and a fixed quality
//! pattern per degree. Modes reuse these chords through their relative
//! major (see [`super::scale::mode_chords`]).

use std::fmt;

use serde::{Serialize, Serializer};

use super::notes::{rotation, spell, tones, NoteName};
use super::TheoryError;

/// Chord quality, identified by the suffix written after the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    MajorSeventh,
    Seventh,
    HalfDiminished,
}

impl ChordQuality {
    /// Suffix appended to the root name
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Diminished => "dim",
            ChordQuality::MajorSeventh => "maj7",
            ChordQuality::Seventh => "7",
            ChordQuality::HalfDiminished => "m7b5",
        }
    }
}

/// Triad qualities on degrees 1-7 of a major key
pub const TRIAD_PATTERN: [ChordQuality; 7] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

/// Seventh-chord qualities on degrees 1-7 of a major key
pub const SEVENTH_PATTERN: [ChordQuality; 7] = [
    ChordQuality::MajorSeventh,
    ChordQuality::Seventh,
    ChordQuality::Seventh,
    ChordQuality::MajorSeventh,
    ChordQuality::Seventh,
    ChordQuality::Seventh,
    ChordQuality::HalfDiminished,
];

/// Which chord set to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordSet {
    Triads,
    Sevenths,
}

impl ChordSet {
    /// Quality pattern for this set
    pub fn pattern(self) -> &'static [ChordQuality; 7] {
        match self {
            ChordSet::Triads => &TRIAD_PATTERN,
            ChordSet::Sevenths => &SEVENTH_PATTERN,
        }
    }
}

/// A chord rooted on a spelled note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: NoteName,
    pub quality: ChordQuality,
}

impl Chord {
    /// Create a chord
    pub fn new(root: NoteName, quality: ChordQuality) -> Self {
        Self { root, quality }
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}

impl Serialize for Chord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The seven diatonic chords of the major key on `tonic`
pub fn major_chords(tonic: NoteName, set: ChordSet) -> Vec<Chord> {
    let roots = spell(&tones(&rotation(tonic)));
    roots
        .into_iter()
        .zip(set.pattern().iter())
        .map(|(root, &quality)| Chord::new(root, quality))
        .collect()
}

/// Same as [`major_chords`], parsing the tonic from text
pub fn chords(tonic: &str, set: ChordSet) -> Result<Vec<Chord>, TheoryError> {
    Ok(major_chords(NoteName::parse(tonic)?, set))
}
