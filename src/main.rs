// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use modes::config::{SheetEvent, SheetFile, SheetWatcher};
use modes::music::{Mode, ModeInfo, NoteName};
use modes::ui::{self, App, ReportStyle};
use std::env;
use std::path::Path;
use tracing::{info, warn, Level};

fn print_usage() {
    println!("MODES - Diatonic mode scales and chords");
    println!();
    println!("Usage: modes [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --show <TONIC> <MODE>   Print scale, chords and relative major");
    println!("  --yaml <TONIC> <MODE>   Print the derived record as YAML");
    println!("  --list-modes            List the modes and their formulas");
    println!("  --sheet <FILE>          Render every entry of a YAML/TOML sheet");
    println!("  --watch <FILE>          Render a sheet and re-render on change");
    println!("  --tui                   Open the interactive selector page");
    println!("  -v, --verbose           Log derivation steps to stderr");
    println!("  --help                  Show this help message");
    println!();
    println!("MODE accepts full names (\"Aeolian (Minor)\") or short ones (minor, dorian).");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a mode argument, accepting exact names and short aliases
fn parse_mode(arg: &str) -> Result<Mode> {
    Mode::from_name(arg)
        .ok()
        .or_else(|| Mode::from_alias(arg))
        .ok_or_else(|| anyhow!("Unknown mode: {} (see --list-modes)", arg))
}

/// Derive the record for command-line arguments, ignoring stray whitespace
fn derive(tonic: &str, mode: &str) -> Result<ModeInfo> {
    let tonic = tonic.trim();
    let note = NoteName::parse(tonic)?;
    let mode = parse_mode(mode)?;
    Ok(ModeInfo::derive(tonic, note, mode))
}

fn tonic_and_mode<'a>(args: &'a [String], option: &str) -> Result<(&'a str, &'a str)> {
    match (args.get(2), args.get(3)) {
        (Some(tonic), Some(mode)) => Ok((tonic.as_str(), mode.as_str())),
        _ => Err(anyhow!("{} requires a tonic and a mode", option)),
    }
}

fn show(tonic: &str, mode: &str) -> Result<()> {
    let info = derive(tonic, mode)?;
    print!("{}", ui::render(&info, &ReportStyle::default()));
    println!();
    println!("{}", ui::report::footer());
    Ok(())
}

fn show_yaml(tonic: &str, mode: &str) -> Result<()> {
    let info = derive(tonic, mode)?;
    let yaml = serde_yaml::to_string(&info).context("Failed to serialize record")?;
    print!("{}", yaml);
    Ok(())
}

fn list_modes() {
    for mode in Mode::ALL {
        println!("{:<16} {}", mode.name(), mode.formula());
    }
}

fn render_sheet(sheet: &SheetFile) -> Result<()> {
    let style = sheet.display.report_style();
    let infos = sheet.resolve()?;
    for (i, info) in infos.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", ui::render(info, &style));
    }
    println!();
    println!("{}", ui::report::footer());
    Ok(())
}

fn run_sheet(path: &Path) -> Result<()> {
    let sheet = SheetFile::load(path)?;
    info!(path = ?path, entries = sheet.entries.len(), "rendering sheet");
    render_sheet(&sheet)
}

fn watch_sheet(path: &Path) -> Result<()> {
    run_sheet(path)?;

    let watcher = SheetWatcher::new(path, None)?;
    println!();
    println!("Watching {:?} for changes (press Ctrl+C to stop)...", watcher.watched_path());

    while let Some(event) = watcher.recv() {
        match event {
            SheetEvent::Reloaded(path, sheet) => {
                println!();
                println!("--- {} ---", path.display());
                if let Err(e) = render_sheet(&sheet) {
                    eprintln!("Error: {:#}", e);
                }
            }
            SheetEvent::Error(message) => {
                warn!("{}", message);
                eprintln!("Error: {}", message);
            }
            SheetEvent::FileCreated(path) | SheetEvent::FileDeleted(path) => {
                info!(path = ?path, "sheet directory changed");
            }
        }
    }

    Ok(())
}

fn run_tui() -> Result<()> {
    let mut app = App::with_default_state().context("Failed to start terminal UI")?;
    app.run().context("Terminal UI failed")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    args.retain(|a| a != "-v" && a != "--verbose");
    init_logging(verbose);

    if args.len() < 2 {
        println!("MODES - Diatonic mode scales and chords");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[1].as_str() {
        "--show" => {
            let (tonic, mode) = tonic_and_mode(&args, "--show")?;
            show(tonic, mode)?;
        }
        "--yaml" => {
            let (tonic, mode) = tonic_and_mode(&args, "--yaml")?;
            show_yaml(tonic, mode)?;
        }
        "--list-modes" => {
            list_modes();
        }
        "--sheet" => {
            if args.len() < 3 {
                eprintln!("Error: --sheet requires a file path");
                std::process::exit(1);
            }
            run_sheet(Path::new(&args[2]))?;
        }
        "--watch" => {
            if args.len() < 3 {
                eprintln!("Error: --watch requires a file path");
                std::process::exit(1);
            }
            watch_sheet(Path::new(&args[2]))?;
        }
        "--tui" => {
            run_tui()?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode_accepts_names_and_aliases() {
        assert_eq!(parse_mode("Aeolian (Minor)").unwrap(), Mode::Aeolian);
        assert_eq!(parse_mode("minor").unwrap(), Mode::Aeolian);
        assert_eq!(parse_mode("Dorian").unwrap(), Mode::Dorian);
        assert!(parse_mode("bebop").is_err());
    }

    #[test]
    fn test_derive_with_alias() {
        let info = derive("G", "mixolydian").unwrap();
        assert_eq!(info.mode, Mode::Mixolydian);
        assert_eq!(info.major_tonic.as_str(), "C");
        assert!(derive("X", "major").is_err());

        let padded = derive(" Eb ", "dorian").unwrap();
        assert_eq!(padded.tonic, "Eb");
    }

    #[test]
    fn test_tonic_and_mode_args() {
        let args: Vec<String> = ["modes", "--show", "D", "Dorian"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tonic_and_mode(&args, "--show").unwrap(), ("D", "Dorian"));
        assert!(tonic_and_mode(&args[..3], "--show").is_err());
    }
}
