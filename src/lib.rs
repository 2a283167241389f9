// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic mode scales and chords.
//!
//! Given a tonic and one of the seven modes, derives the spelled scale,
//! its triads and seventh chords, and the relative major.

pub mod config;
pub mod music;
pub mod ui;
