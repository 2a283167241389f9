// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale sheet configuration.
//!
//! A scale sheet lists tonic/mode pairs to render together with display
//! settings. Sheets are YAML by default; files ending in `.toml` are read
//! as TOML.

pub mod watcher;

pub use watcher::{validate_sheet, SheetEvent, SheetWatcher};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::music::{mode_info, ModeInfo, TheoryError};
use crate::ui::report::ReportStyle;

/// Root of a scale sheet file
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SheetFile {
    /// How entries are rendered
    #[serde(default)]
    pub display: DisplayConfig,
    /// Scales to render, in order
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

impl SheetFile {
    /// Load a sheet, picking the format from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read sheet file: {:?}", path))?;
        if is_toml(path) {
            Self::from_toml(&contents)
        } else {
            Self::from_yaml(&contents)
        }
    }

    /// Parse a sheet from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML sheet")
    }

    /// Parse a sheet from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML sheet")
    }

    /// Derive every entry, stopping at the first invalid one
    pub fn resolve(&self) -> Result<Vec<ModeInfo>, TheoryError> {
        self.entries.iter().map(EntryConfig::resolve).collect()
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "toml")
}

/// Display settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Text placed between notes and chords
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Show the seventh-chord line
    #[serde(default = "default_sevenths")]
    pub sevenths: bool,
    /// Show the mode's degree formula
    #[serde(default)]
    pub formula: bool,
}

fn default_separator() -> String {
    " - ".to_string()
}
fn default_sevenths() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            sevenths: default_sevenths(),
            formula: false,
        }
    }
}

impl DisplayConfig {
    /// Report style for these settings
    pub fn report_style(&self) -> ReportStyle {
        ReportStyle {
            separator: self.separator.clone(),
            sevenths: self.sevenths,
            formula: self.formula,
        }
    }
}

/// One tonic/mode pair
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntryConfig {
    /// Tonic, e.g. "C", "F#", "Bb"
    pub tonic: String,
    /// Exact mode name, e.g. "Dorian", "Aeolian (Minor)"
    #[serde(default = "default_mode")]
    pub mode: String,
}

fn default_mode() -> String {
    "Ionian (Major)".to_string()
}

impl EntryConfig {
    /// Derive this entry
    pub fn resolve(&self) -> Result<ModeInfo, TheoryError> {
        mode_info(&self.tonic, &self.mode)
    }
}
