//! Unit tests for the catalog file watcher.

use std::fs;

use showboard::catalog::CatalogWatcher;
use tempfile::tempdir;

#[test]
fn watcher_attaches_to_an_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{}").unwrap();

    let watcher = CatalogWatcher::new(path);
    assert!(watcher.is_ok());
}

#[test]
fn polling_a_quiet_watcher_returns_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{}").unwrap();

    let mut watcher = CatalogWatcher::new(path).unwrap();
    assert_eq!(watcher.poll(), None);
}

/// Ignored because file watcher event delivery is timing-dependent and
/// platform-specific; on a loaded CI machine the OS may coalesce or delay
/// events past any reasonable poll loop. Run locally with `--ignored` to
/// verify change detection end to end.
#[test]
#[ignore]
fn watcher_reports_file_modification() {
    use std::time::{Duration, Instant};

    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, "{}").unwrap();

    let mut watcher = CatalogWatcher::new(path.clone()).unwrap();
    fs::write(&path, "{\"members\":[]}").unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut seen = None;
    while Instant::now() < deadline {
        if let Some(event) = watcher.poll() {
            seen = Some(event);
            break;
        }
        std::thread::sleep(Duration::from_millis(50));
    }
    assert!(seen.is_some(), "no event within five seconds");
}
