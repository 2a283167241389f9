// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The seven diatonic modes and their degree formulas.
//!
//! A mode is written as seven degrees relative to the major scale
//! (e.g. Dorian = 1 2 b3 4 5 6 b7). Plain degrees come from the tones of
//! a rotation; altered degrees come from its semitones.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::notes::Pitch;
use super::TheoryError;

/// A scale degree as it appears in a mode formula.
///
/// Only the alterations that land on one of the five semitones exist;
/// there is nothing between 3 and 4 or between 7 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Degree {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    FlatTwo,
    FlatThree,
    FlatFive,
    FlatSix,
    FlatSeven,
    SharpOne,
    SharpTwo,
    SharpFour,
    SharpFive,
    SharpSix,
}

/// Where a degree is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegreeSource {
    /// Index into the seven tones
    Tone(usize),
    /// Index into the five semitones
    Semitone(usize),
}

impl Degree {
    /// Tone or semitone slot for this degree
    pub fn source(self) -> DegreeSource {
        use DegreeSource::{Semitone, Tone};
        match self {
            Degree::One => Tone(0),
            Degree::Two => Tone(1),
            Degree::Three => Tone(2),
            Degree::Four => Tone(3),
            Degree::Five => Tone(4),
            Degree::Six => Tone(5),
            Degree::Seven => Tone(6),
            Degree::FlatTwo | Degree::SharpOne => Semitone(0),
            Degree::FlatThree | Degree::SharpTwo => Semitone(1),
            Degree::FlatFive | Degree::SharpFour => Semitone(2),
            Degree::FlatSix | Degree::SharpFive => Semitone(3),
            Degree::FlatSeven | Degree::SharpSix => Semitone(4),
        }
    }

    /// Formula text, e.g. "b3" or "#4"
    pub fn symbol(self) -> &'static str {
        match self {
            Degree::One => "1",
            Degree::Two => "2",
            Degree::Three => "3",
            Degree::Four => "4",
            Degree::Five => "5",
            Degree::Six => "6",
            Degree::Seven => "7",
            Degree::FlatTwo => "b2",
            Degree::FlatThree => "b3",
            Degree::FlatFive => "b5",
            Degree::FlatSix => "b6",
            Degree::FlatSeven => "b7",
            Degree::SharpOne => "#1",
            Degree::SharpTwo => "#2",
            Degree::SharpFour => "#4",
            Degree::SharpFive => "#5",
            Degree::SharpSix => "#6",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The seven modes of the major scale, in their conventional order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl Mode {
    /// All modes in declared order
    pub const ALL: [Mode; 7] = [
        Mode::Ionian,
        Mode::Dorian,
        Mode::Phrygian,
        Mode::Lydian,
        Mode::Mixolydian,
        Mode::Aeolian,
        Mode::Locrian,
    ];

    /// Degree formula relative to the major scale
    pub fn degrees(self) -> [Degree; 7] {
        use Degree::*;
        match self {
            Mode::Ionian => [One, Two, Three, Four, Five, Six, Seven],
            Mode::Dorian => [One, Two, FlatThree, Four, Five, Six, FlatSeven],
            Mode::Phrygian => [One, FlatTwo, FlatThree, Four, Five, FlatSix, FlatSeven],
            Mode::Lydian => [One, Two, Three, SharpFour, Five, Six, Seven],
            Mode::Mixolydian => [One, Two, Three, Four, Five, Six, FlatSeven],
            Mode::Aeolian => [One, Two, FlatThree, Four, Five, FlatSix, FlatSeven],
            Mode::Locrian => [One, FlatTwo, FlatThree, Four, FlatFive, FlatSix, FlatSeven],
        }
    }

    /// Display name; Ionian and Aeolian carry their major/minor labels
    pub fn name(self) -> &'static str {
        match self {
            Mode::Ionian => "Ionian (Major)",
            Mode::Dorian => "Dorian",
            Mode::Phrygian => "Phrygian",
            Mode::Lydian => "Lydian",
            Mode::Mixolydian => "Mixolydian",
            Mode::Aeolian => "Aeolian (Minor)",
            Mode::Locrian => "Locrian",
        }
    }

    /// Zero-based position in [`Mode::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exact lookup by display name
    pub fn from_name(s: &str) -> Result<Self, TheoryError> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name() == s)
            .ok_or_else(|| TheoryError::UnknownMode(s.to_string()))
    }

    /// Lenient lookup for command-line use (e.g. "minor", "ionian", "Mixolydian")
    pub fn from_alias(s: &str) -> Option<Self> {
        let s = s
            .trim()
            .to_lowercase()
            .replace([' ', '-', '_', '(', ')'], "");
        match s.as_str() {
            "ionian" | "major" | "ionianmajor" => Some(Mode::Ionian),
            "dorian" => Some(Mode::Dorian),
            "phrygian" => Some(Mode::Phrygian),
            "lydian" => Some(Mode::Lydian),
            "mixolydian" => Some(Mode::Mixolydian),
            "aeolian" | "minor" | "naturalminor" | "aeolianminor" => Some(Mode::Aeolian),
            "locrian" => Some(Mode::Locrian),
            _ => None,
        }
    }

    /// Formula as text, e.g. "1 2 b3 4 5 6 b7"
    pub fn formula(self) -> String {
        self.degrees()
            .iter()
            .map(|d| d.symbol())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s)
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Pick the mode's seven notes out of a rotation's tones and semitones.
///
/// The result may still contain enharmonic pairs; spell it before use.
pub fn select(mode: Mode, tones: &[Pitch; 7], semitones: &[Pitch; 5]) -> [Pitch; 7] {
    mode.degrees().map(|degree| match degree.source() {
        DegreeSource::Tone(i) => tones[i],
        DegreeSource::Semitone(i) => semitones[i],
    })
}
