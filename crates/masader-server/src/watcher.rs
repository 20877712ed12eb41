//! File watching for live reload.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// `site.toml` (or another TOML file) changed
    ConfigModified(PathBuf),

    /// A markdown document changed
    ContentModified(PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Any other modification
    Modified(PathBuf),
}

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Watch `paths`: directories recursively, files through their parent.
    ///
    /// Returns the watcher and a channel to receive events. Events arriving
    /// within 100ms of the previous one are dropped.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        let scope = WatchScope::new(paths);
        for dir in &scope.dirs {
            watcher
                .watch(dir, RecursiveMode::Recursive)
                .map_err(std::io::Error::other)?;
            tracing::debug!("Watching {}", dir.display());
        }
        for parent in scope.file_parents() {
            watcher
                .watch(&parent, RecursiveMode::NonRecursive)
                .map_err(std::io::Error::other)?;
            tracing::debug!("Watching {} for config changes", parent.display());
        }

        std::thread::spawn(move || {
            let debounce = Duration::from_millis(100);
            let mut last_event: Option<Instant> = None;

            while let Ok(event) = sync_rx.recv() {
                let paths: Vec<&PathBuf> =
                    event.paths.iter().filter(|p| scope.contains(p)).collect();
                if paths.is_empty() {
                    continue;
                }

                let now = Instant::now();
                if last_event.is_some_and(|t| now.duration_since(t) < debounce) {
                    continue;
                }
                last_event = Some(now);

                for path in paths {
                    if let Some(e) = classify_event(path, &event.kind) {
                        if async_tx.blocking_send(e).is_err() {
                            return;
                        }
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// What the watcher reports on.
///
/// Single files are watched through their parent directory so editors that
/// save by renaming a new file over the old one keep being seen.
#[derive(Debug, Default)]
struct WatchScope {
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
}

impl WatchScope {
    fn new(paths: &[PathBuf]) -> Self {
        let mut scope = Self::default();

        for path in paths {
            if path.is_dir() {
                scope.dirs.push(absolute(path));
                continue;
            }

            let Some(name) = path.file_name() else {
                tracing::debug!("Not watching {}", path.display());
                continue;
            };
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            if !parent.is_dir() {
                tracing::debug!("Not watching missing path {}", path.display());
                continue;
            }
            scope.files.push(absolute(parent).join(name));
        }

        scope
    }

    /// Parent directories of the watched files, minus those already covered.
    fn file_parents(&self) -> Vec<PathBuf> {
        let mut parents: Vec<PathBuf> = Vec::new();
        for file in &self.files {
            let Some(parent) = file.parent() else { continue };
            let covered = self.dirs.iter().any(|d| parent.starts_with(d));
            if covered || parents.iter().any(|p| p == parent) {
                continue;
            }
            parents.push(parent.to_path_buf());
        }
        parents
    }

    fn contains(&self, path: &Path) -> bool {
        self.dirs.iter().any(|d| path.starts_with(d)) || self.files.iter().any(|f| f == path)
    }
}

fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => Some(match ext {
            "toml" => WatchEvent::ConfigModified(path.to_path_buf()),
            "md" | "markdown" => WatchEvent::ContentModified(path.to_path_buf()),
            _ => WatchEvent::Modified(path.to_path_buf()),
        }),
        _ => None,
    }
}
