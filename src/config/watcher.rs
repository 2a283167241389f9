// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for scale sheets.
//!
//! Watches a sheet file (or a directory of sheets) and reloads it after
//! edits settle, so a terminal can keep showing the current sheet while
//! it is being written.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::SheetFile;

/// Events emitted by the sheet watcher
#[derive(Debug, Clone)]
pub enum SheetEvent {
    /// Sheet was modified and successfully reloaded
    Reloaded(PathBuf, Box<SheetFile>),
    /// Sheet was modified but failed to parse
    Error(String),
    /// A new file was created in the watch directory
    FileCreated(PathBuf),
    /// A file was deleted from the watch directory
    FileDeleted(PathBuf),
}

/// Debounced sheet watcher
pub struct SheetWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<SheetEvent>,
    watched_path: PathBuf,
}

impl SheetWatcher {
    /// Create a new watcher for a sheet file or directory
    ///
    /// # Arguments
    /// * `path` - Path to watch (file or directory)
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<SheetEvent>, Receiver<SheetEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };

        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        let sheet_path = watched_path.clone();
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending_paths: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Create(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(SheetEvent::FileCreated(path));
                            }
                        }
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(SheetEvent::FileDeleted(path));
                            }
                        }
                        EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending_paths.contains(&path) {
                                    pending_paths.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let settled = last_event_time
                            .map_or(false, |t| t.elapsed() >= debounce_duration);
                        if settled {
                            for path in pending_paths.drain(..) {
                                if is_sheet(&path) || path == sheet_path {
                                    let _ = event_tx.send(reload(path));
                                }
                            }
                            last_event_time = None;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&self) -> Option<SheetEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending events
    pub fn recv_all(&self) -> Vec<SheetEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next event is received
    pub fn recv(&self) -> Option<SheetEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

fn is_sheet(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml" || ext == "toml")
}

fn reload(path: PathBuf) -> SheetEvent {
    match validate_sheet(&path) {
        Ok(sheet) => {
            debug!(path = ?path, entries = sheet.entries.len(), "sheet reloaded");
            SheetEvent::Reloaded(path, Box::new(sheet))
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "sheet reload failed");
            SheetEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

/// Load a sheet and check that every entry derives
pub fn validate_sheet<P: AsRef<Path>>(path: P) -> Result<SheetFile> {
    let sheet = SheetFile::load(path)?;
    sheet.resolve()?;
    Ok(sheet)
}
