// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Modal scales, relative majors and mode chords.
//!
//! Ties the note table, the mode formulas and the chord patterns together
//! into the spelled scale for a tonic and mode, plus the [`ModeInfo`]
//! record that front ends display.

use serde::Serialize;
use tracing::debug;

use super::chord::{major_chords, Chord, ChordSet};
use super::mode::{select, Mode};
use super::notes::{rotation, semitones, spell, tones, NoteName};
use super::TheoryError;

/// Spelled seven-note scale of `mode` on `tonic`
pub fn mode_scale(tonic: NoteName, mode: Mode) -> Vec<NoteName> {
    let rotated = rotation(tonic);
    let picked = select(mode, &tones(&rotated), &semitones(&rotated));
    let scale = spell(&picked);
    debug!(
        tonic = %tonic,
        mode = %mode,
        scale = ?scale.iter().map(|n| n.as_str()).collect::<Vec<_>>(),
        "derived scale"
    );
    scale
}

/// Tonic of the major scale sharing this mode's notes.
///
/// Counts back from the end of the mode scale by the mode's index, so
/// Dorian picks the 7th degree and Locrian the 2nd. Ionian is its own
/// relative major.
pub fn major_tonic(tonic: NoteName, mode: Mode) -> NoteName {
    let scale = mode_scale(tonic, mode);
    scale[(scale.len() - mode.index()) % scale.len()]
}

/// Chords of the relative major, rotated to start on `tonic`
pub fn mode_chords(tonic: NoteName, mode: Mode, set: ChordSet) -> Vec<Chord> {
    let mut chords = major_chords(major_tonic(tonic, mode), set);
    // The relative major always contains the tonic's pitch class
    let start = chords
        .iter()
        .position(|chord| chord.root.pitch_class() == tonic.pitch_class())
        .unwrap_or(0);
    chords.rotate_left(start);
    chords
}

/// A spelled modal scale
#[derive(Debug, Clone, PartialEq)]
pub struct ModalScale {
    tonic: NoteName,
    mode: Mode,
    notes: Vec<NoteName>,
}

impl ModalScale {
    /// Build the scale of `mode` on `tonic`
    pub fn new(tonic: NoteName, mode: Mode) -> Self {
        Self {
            tonic,
            mode,
            notes: mode_scale(tonic, mode),
        }
    }

    /// Sorted pitch classes of the scale
    pub fn pitch_classes(&self) -> Vec<u8> {
        let mut pcs: Vec<u8> = self.notes.iter().map(|n| n.pitch_class()).collect();
        pcs.sort_unstable();
        pcs
    }

    /// Tonic of the relative major
    pub fn relative_major(&self) -> NoteName {
        let len = self.notes.len();
        self.notes[(len - self.mode.index()) % len]
    }

    /// Diatonic chords starting on this scale's tonic
    pub fn chords(&self, set: ChordSet) -> Vec<Chord> {
        mode_chords(self.tonic, self.mode, set)
    }
}

/// Everything shown for one tonic and mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModeInfo {
    /// Tonic exactly as requested
    pub tonic: String,
    pub mode: Mode,
    pub scale: Vec<NoteName>,
    pub chords: Vec<Chord>,
    #[serde(rename = "7th_chords")]
    pub seventh_chords: Vec<Chord>,
    pub major_tonic: NoteName,
}

impl ModeInfo {
    /// Derive the record for an already parsed tonic and mode
    pub fn derive(requested: &str, tonic: NoteName, mode: Mode) -> Self {
        let scale = ModalScale::new(tonic, mode);
        Self {
            tonic: requested.to_string(),
            mode,
            major_tonic: scale.relative_major(),
            chords: scale.chords(ChordSet::Triads),
            seventh_chords: scale.chords(ChordSet::Sevenths),
            scale: scale.notes,
        }
    }
}

/// Derive scale, chords, seventh chords and relative major.
///
/// `mode` must be one of the seven display names exactly.
pub fn mode_info(tonic: &str, mode: &str) -> Result<ModeInfo, TheoryError> {
    let note = NoteName::parse(tonic)?;
    let mode = Mode::from_name(mode)?;
    Ok(ModeInfo::derive(tonic, note, mode))
}
