//! Icon directory watching
//!
//! Both icon directories are watched non-recursively through the platform
//! notifier. Events are debounced by `notify-debouncer-mini` and handed to a
//! single consumer, which regenerates the theme at most once per batch.

use crate::config::IconPaths;
use crate::error::AppResult;
use crate::theme::{self, ImageFormat};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEvent, Debouncer};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

/// Configuration options for icon watching.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Debounce duration for coalescing rapid changes.
    pub debounce: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
        }
    }
}

/// Watches the file-icons and folder-icons directories
pub struct IconWatcher {
    // Dropping the debouncer stops the subscription
    _debouncer: Debouncer<RecommendedWatcher>,
    rx: Receiver<DebounceEventResult>,
    watched: Vec<PathBuf>,
}

impl IconWatcher {
    pub fn new(paths: &IconPaths, options: WatchOptions) -> AppResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(options.debounce, tx)?;

        let watched = vec![paths.file_icons.clone(), paths.folder_icons.clone()];
        for dir in &watched {
            debouncer.watcher().watch(dir, RecursiveMode::NonRecursive)?;
            tracing::debug!("Watching {}", dir.display());
        }

        Ok(Self {
            _debouncer: debouncer,
            rx,
            watched,
        })
    }

    /// Block until the next batch of events arrives, then drain whatever else
    /// is already queued. Returns `None` once the notifier has shut down.
    pub fn next_batch(&self) -> Option<Vec<DebouncedEvent>> {
        let first = self.rx.recv().ok()?;
        Some(self.drain(first))
    }

    /// Like [`next_batch`](Self::next_batch), but gives up after `timeout`
    pub fn next_batch_timeout(&self, timeout: Duration) -> Option<Vec<DebouncedEvent>> {
        let first = self.rx.recv_timeout(timeout).ok()?;
        Some(self.drain(first))
    }

    fn drain(&self, first: DebounceEventResult) -> Vec<DebouncedEvent> {
        let mut events = Vec::new();
        for result in std::iter::once(first).chain(self.rx.try_iter()) {
            match result {
                Ok(batch) => events.extend(batch),
                Err(e) => tracing::warn!("Watcher error: {}", e),
            }
        }
        events
    }

    /// Whether any event in `events` can change the generated theme
    pub fn has_relevant(&self, events: &[DebouncedEvent]) -> bool {
        events.iter().any(|event| is_relevant(&event.path, &self.watched))
    }

    /// Run until the notifier shuts down or `on_change` breaks, calling
    /// `on_change` once per relevant batch
    pub fn run<F>(self, mut on_change: F)
    where
        F: FnMut() -> ControlFlow<()>,
    {
        while let Some(events) = self.next_batch() {
            if !self.has_relevant(&events) {
                tracing::trace!("Ignoring {} unrelated event(s)", events.len());
                continue;
            }

            tracing::debug!("{} change event(s), regenerating", events.len());
            if on_change().is_break() {
                break;
            }
        }
    }
}

/// An event matters when it names an icon image or one of the watched
/// directories themselves
fn is_relevant(path: &Path, watched: &[PathBuf]) -> bool {
    if watched.iter().any(|dir| dir == path) {
        return true;
    }

    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| ImageFormat::split_file_name(name).is_some())
        .unwrap_or(false)
}

/// Regenerate the theme whenever the icon directories change. Blocks.
///
/// A failed regeneration is logged and the loop keeps going; the next change
/// event retries.
pub fn watch_and_regenerate(paths: &IconPaths, options: WatchOptions) -> AppResult<()> {
    let watcher = IconWatcher::new(paths, options)?;
    tracing::info!(
        "Watching {} and {} for changes",
        paths.file_icons.display(),
        paths.folder_icons.display()
    );

    watcher.run(|| {
        regenerate_logged(paths);
        ControlFlow::Continue(())
    });

    tracing::info!("Icon watcher stopped");
    Ok(())
}

/// Regenerate, logging instead of returning a failure. Returns whether the
/// theme is now current.
fn regenerate_logged(paths: &IconPaths) -> bool {
    match theme::regenerate(paths) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(code = e.code(), "Failed to regenerate icon theme: {}", e);
            false
        }
    }
}
