//! Change notifications for an external catalog file.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use super::error::CatalogResult;

/// What happened to the watched catalog file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    Modified,
    Created,
    Deleted,
    /// The watch itself broke; the message carries the cause
    Error(String),
}

/// Watches one catalog file for changes.
///
/// The watcher only signals. Deciding when to reload, and rebuilding the
/// running state against the new catalog, stays with the host that owns
/// that state.
pub struct CatalogWatcher {
    rx: Receiver<CatalogEvent>,
    // Dropping this ends the OS subscription.
    _watcher: RecommendedWatcher,
}

impl CatalogWatcher {
    /// Watch `path` for changes. The parent directory is watched rather
    /// than the file itself, so editors that replace the file by rename
    /// still produce events.
    pub fn new(path: PathBuf) -> CatalogResult<Self> {
        let (tx, rx) = channel();
        let watched = path.clone();

        let mut watcher =
            notify::recommended_watcher(move |outcome: notify::Result<Event>| match outcome {
                Ok(event) => {
                    let ours = event
                        .paths
                        .iter()
                        .any(|changed| changed.file_name() == watched.file_name());
                    if !ours {
                        return;
                    }
                    let mapped = match event.kind {
                        EventKind::Create(_) => Some(CatalogEvent::Created),
                        EventKind::Modify(_) => Some(CatalogEvent::Modified),
                        EventKind::Remove(_) => Some(CatalogEvent::Deleted),
                        _ => None,
                    };
                    if let Some(mapped) = mapped {
                        let _ = tx.send(mapped);
                    }
                }
                Err(error) => {
                    let _ = tx.send(CatalogEvent::Error(error.to_string()));
                }
            })?;

        let watch_root = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| path.clone());
        watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;

        Ok(Self {
            rx,
            _watcher: watcher,
        })
    }

    /// Next pending change, if any. Never blocks; call from the same loop
    /// that pumps the timers.
    pub fn poll(&mut self) -> Option<CatalogEvent> {
        self.rx.try_recv().ok()
    }
}
