// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory core.
//!
//! This module derives diatonic mode scales, their chords and seventh
//! chords, and the relative major from a tonic and a mode name. Everything
//! here is pure computation over constant tables.

pub mod chord;
pub mod error;
pub mod mode;
pub mod notes;
pub mod scale;

pub use chord::{chords, major_chords, Chord, ChordQuality, ChordSet};
pub use error::TheoryError;
pub use mode::{Degree, Mode};
pub use notes::{NoteName, Pitch};
pub use scale::{major_tonic, mode_chords, mode_info, mode_scale, ModalScale, ModeInfo};
