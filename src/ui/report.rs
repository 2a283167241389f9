// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Plain-text rendering of a [`ModeInfo`].

use std::fmt::Display;

use crate::music::ModeInfo;

/// Guitar chord chart reference shown below the results
pub const GUITAR_CHORDS_URL: &str = "https://www.guitartricks.com/chords";

/// Rendering options for a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStyle {
    /// Text placed between list items
    pub separator: String,
    /// Include the seventh-chord line
    pub sevenths: bool,
    /// Include the mode's degree formula
    pub formula: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            separator: " - ".to_string(),
            sevenths: true,
            formula: false,
        }
    }
}

/// Join displayable items with a separator
pub fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Labelled fields in display order
pub fn fields(info: &ModeInfo, style: &ReportStyle) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("Tonic", info.tonic.clone()),
        ("Mode", info.mode.to_string()),
    ];
    if style.formula {
        fields.push(("Formula", info.mode.formula()));
    }
    fields.push(("Major Tonic", info.major_tonic.to_string()));
    fields.push(("Scale", join(&info.scale, &style.separator)));
    fields.push(("Chords", join(&info.chords, &style.separator)));
    if style.sevenths {
        fields.push(("Dominant Chords", join(&info.seventh_chords, &style.separator)));
    }
    fields
}

/// Render a report, one `Label: value` line per field
pub fn render(info: &ModeInfo, style: &ReportStyle) -> String {
    fields(info, style)
        .into_iter()
        .map(|(label, value)| format!("{}: {}\n", label, value))
        .collect()
}

/// Footer line pointing at the guitar chord charts
pub fn footer() -> String {
    format!("Guitar Chords: {}", GUITAR_CHORDS_URL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::mode_info;

    #[test]
    fn test_render_default() {
        let info = mode_info("D", "Dorian").unwrap();
        let text = render(&info, &ReportStyle::default());
        assert_eq!(
            text,
            "Tonic: D\n\
             Mode: Dorian\n\
             Major Tonic: C\n\
             Scale: D - E - F - G - A - B - C\n\
             Chords: Dm - Em - F - G - Am - Bdim - C\n\
             Dominant Chords: D7 - E7 - Fmaj7 - G7 - A7 - Bm7b5 - Cmaj7\n"
        );
    }

    #[test]
    fn test_render_options() {
        let info = mode_info("C", "Lydian").unwrap();
        let style = ReportStyle {
            separator: ", ".to_string(),
            sevenths: false,
            formula: true,
        };
        let labels: Vec<&str> = fields(&info, &style).iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Tonic", "Mode", "Formula", "Major Tonic", "Scale", "Chords"]
        );

        let text = render(&info, &style);
        assert!(text.contains("Formula: 1 2 3 #4 5 6 7\n"));
        assert!(text.contains("Scale: C, D, E, F#, G, A, B\n"));
        assert!(!text.contains("Dominant"));
    }

    #[test]
    fn test_footer_links_chord_charts() {
        assert_eq!(footer(), "Guitar Chords: https://www.guitartricks.com/chords");
        let info = mode_info("C", "Ionian (Major)").unwrap();
        assert!(!render(&info, &ReportStyle::default()).contains("Guitar Chords"));
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["a", "b", "c"], " - "), "a - b - c");
        assert_eq!(join::<&str>(&[], " - "), "");
    }
}
