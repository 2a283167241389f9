// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Integration tests for MODES
//!
//! These tests drive the public API from tonic/mode text through to the
//! rendered report and sheet files.

use std::collections::BTreeSet;
use std::fs;

use modes::config::{validate_sheet, SheetFile};
use modes::music::{
    chords, major_chords, mode_chords, mode_info, mode_scale, ChordSet, ModalScale, Mode,
    NoteName, TheoryError,
};
use modes::ui::{render, ReportStyle};
use tempfile::tempdir;

const TONICS: [&str; 21] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "E#", "Fb", "F", "F#", "Gb", "G", "G#", "Ab", "A",
    "A#", "Bb", "B", "B#", "Cb",
];

fn note(s: &str) -> NoteName {
    NoteName::parse(s).unwrap()
}

fn names(notes: &[NoteName]) -> Vec<&'static str> {
    notes.iter().map(|n| n.as_str()).collect()
}

fn chord_names(chords: &[modes::music::Chord]) -> Vec<String> {
    chords.iter().map(|c| c.to_string()).collect()
}

/// The tonic is always degree 1, in its preferred spelling
#[test]
fn test_tonic_is_first_degree_for_every_mode() {
    for tonic in TONICS {
        for mode in Mode::ALL {
            let scale = mode_scale(note(tonic), mode);
            assert_eq!(scale.len(), 7);
            assert_eq!(
                scale[0].pitch_class(),
                note(tonic).pitch_class(),
                "{} {}",
                tonic,
                mode
            );
        }
    }
}

/// Major scales never repeat a letter
#[test]
fn test_major_scales_use_each_letter_once() {
    for tonic in TONICS {
        let scale = mode_scale(note(tonic), Mode::Ionian);
        for pair in scale.windows(2) {
            assert_ne!(pair[0].letter(), pair[1].letter(), "{} major: {:?}", tonic, names(&scale));
        }
        let letters: BTreeSet<char> = scale.iter().map(|n| n.letter()).collect();
        assert_eq!(letters.len(), 7, "{} major", tonic);
    }
}

/// A mode and its relative major share their pitch classes
#[test]
fn test_relative_major_has_same_notes() {
    for tonic in TONICS {
        for mode in Mode::ALL {
            let scale = ModalScale::new(note(tonic), mode);
            let major = ModalScale::new(scale.relative_major(), Mode::Ionian);
            assert_eq!(scale.pitch_classes(), major.pitch_classes(), "{} {}", tonic, mode);
        }
    }
}

/// Mode chords are a rotation of the relative major's chords
#[test]
fn test_mode_chords_are_rotations() {
    for tonic in TONICS {
        for mode in Mode::ALL {
            for set in [ChordSet::Triads, ChordSet::Sevenths] {
                let rotated = mode_chords(note(tonic), mode, set);
                let major = major_chords(ModalScale::new(note(tonic), mode).relative_major(), set);
                assert_eq!(rotated.len(), 7);

                let offset = major.iter().position(|c| *c == rotated[0]).unwrap();
                let mut expected = major.clone();
                expected.rotate_left(offset);
                assert_eq!(rotated, expected, "{} {}", tonic, mode);
                assert_eq!(rotated[0].root.pitch_class(), note(tonic).pitch_class());
            }
        }
    }
}

#[test]
fn test_enharmonic_tonics_match() {
    for (sharp, flat) in [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")] {
        for mode in Mode::ALL {
            assert_eq!(mode_scale(note(sharp), mode), mode_scale(note(flat), mode));
        }
    }
    assert_eq!(names(&mode_scale(note("C#"), Mode::Ionian))[0], "Db");
}

#[test]
fn test_known_scales() {
    assert_eq!(
        names(&mode_scale(note("C"), Mode::Ionian)),
        vec!["C", "D", "E", "F", "G", "A", "B"]
    );
    assert_eq!(
        names(&mode_scale(note("A"), Mode::Aeolian)),
        vec!["A", "B", "C", "D", "E", "F", "G"]
    );
    assert_eq!(
        names(&mode_scale(note("D"), Mode::Dorian)),
        vec!["D", "E", "F", "G", "A", "B", "C"]
    );
    assert_eq!(
        names(&mode_scale(note("E"), Mode::Phrygian)),
        vec!["E", "F", "G", "A", "B", "C", "D"]
    );
    assert_eq!(
        names(&mode_scale(note("Eb"), Mode::Dorian)),
        vec!["Eb", "F", "Gb", "Ab", "Bb", "C", "Db"]
    );
}

#[test]
fn test_chords_in_c() {
    assert_eq!(
        chord_names(&chords("C", ChordSet::Triads).unwrap()),
        vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]
    );
    assert_eq!(
        chord_names(&chords("C", ChordSet::Sevenths).unwrap()),
        vec!["Cmaj7", "D7", "E7", "Fmaj7", "G7", "A7", "Bm7b5"]
    );
}

#[test]
fn test_mode_info_for_phrygian() {
    let info = mode_info("E", "Phrygian").unwrap();
    assert_eq!(info.major_tonic.as_str(), "C");
    assert_eq!(
        chord_names(&info.chords),
        vec!["Em", "F", "G", "Am", "Bdim", "C", "Dm"]
    );
}

#[test]
fn test_errors_fail_loud() {
    assert_eq!(
        mode_info("K", "Dorian").unwrap_err(),
        TheoryError::NoteNotFound("K".to_string())
    );
    assert_eq!(
        mode_info(" C ", "Dorian").unwrap_err(),
        TheoryError::NoteNotFound(" C ".to_string())
    );
    assert_eq!(
        mode_info("C", "Ionian").unwrap_err(),
        TheoryError::UnknownMode("Ionian".to_string())
    );
    assert_eq!(
        TheoryError::UnknownMode("Ionian".to_string()).to_string(),
        "unknown mode: \"Ionian\""
    );
}

#[test]
fn test_report_for_minor() {
    let info = mode_info("A", "Aeolian (Minor)").unwrap();
    let text = render(&info, &ReportStyle::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Tonic: A",
            "Mode: Aeolian (Minor)",
            "Major Tonic: C",
            "Scale: A - B - C - D - E - F - G",
            "Chords: Am - Bdim - C - Dm - Em - F - G",
            "Dominant Chords: A7 - Bm7b5 - Cmaj7 - D7 - E7 - Fmaj7 - G7",
        ]
    );
}

#[test]
fn test_sheet_file_to_reports() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("practice.yaml");
    fs::write(
        &path,
        r#"
display:
  separator: " "
  sevenths: false
entries:
  - tonic: G
    mode: Mixolydian
  - tonic: Bb
"#,
    )
    .unwrap();

    let sheet = validate_sheet(&path).unwrap();
    let style = sheet.display.report_style();
    let reports: Vec<String> = sheet
        .resolve()
        .unwrap()
        .iter()
        .map(|info| render(info, &style))
        .collect();

    assert_eq!(reports.len(), 2);
    assert!(reports[0].contains("Scale: G A B C D E F\n"));
    assert!(reports[1].contains("Mode: Ionian (Major)\n"));
    assert!(reports[1].contains("Major Tonic: Bb\n"));
    assert!(!reports[1].contains("Dominant"));
}

#[test]
fn test_toml_sheet_uses_display_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sheet.toml");
    fs::write(&path, "[[entries]]\ntonic = \"F\"\nmode = \"Lydian\"\n").unwrap();

    let sheet = SheetFile::load(&path).unwrap();
    let infos = sheet.resolve().unwrap();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].mode, Mode::Lydian);
    assert_eq!(infos[0].major_tonic.as_str(), "C");

    let text = render(&infos[0], &sheet.display.report_style());
    assert!(text.contains("Scale: F - G - A - B - C - D - E\n"));
    assert!(text.contains("Dominant Chords: "));
}
