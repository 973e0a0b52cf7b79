use ferrous_mockdns_application::use_cases::ReloadRecordsUseCase;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

const REARM_ATTEMPTS: usize = 10;
const REARM_PAUSE: Duration = Duration::from_millis(50);

/// Handle to a running record file watcher.
pub struct WatcherHandle {
    task: Option<JoinHandle<()>>,
}

impl WatcherHandle {
    fn inactive() -> Self {
        Self { task: None }
    }

    /// False when the watcher could not be created; the startup snapshot
    /// then stays live until the process exits.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(self) {
        if let Some(task) = self.task {
            task.abort();
        }
    }
}

/// Reloads the record file whenever it changes on disk.
pub struct RecordFileWatcher;

impl RecordFileWatcher {
    /// Start watching `path`. The watch is armed before this returns.
    pub fn spawn(path: impl Into<PathBuf>, reload: Arc<ReloadRecordsUseCase>) -> WatcherHandle {
        let path = path.into();
        let (tx, rx) = mpsc::channel::<Event>(100);

        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_relevant(&event.kind) {
                    let _ = tx.blocking_send(event);
                }
            }
            Err(e) => {
                warn!(error = %e, "Record file watcher error");
            }
        });

        let mut watcher = match watcher {
            Ok(watcher) => watcher,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to create record file watcher");
                return WatcherHandle::inactive();
            }
        };

        if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
            error!(path = %path.display(), error = %e, "Failed to watch record file");
            return WatcherHandle::inactive();
        }

        info!(path = %path.display(), "Watching record file for changes");

        let task = tokio::spawn(run(watcher, rx, path, reload));
        WatcherHandle { task: Some(task) }
    }
}

fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    )
}

async fn run(
    mut watcher: RecommendedWatcher,
    mut events: mpsc::Receiver<Event>,
    path: PathBuf,
    reload: Arc<ReloadRecordsUseCase>,
) {
    while let Some(event) = events.recv().await {
        debug!(path = %path.display(), kind = ?event.kind, "Record file changed");

        if let Err(e) = reload.execute().await {
            warn!(error = %e, "Record reload failed, keeping previous records");
        }

        rearm(&mut watcher, &path).await;
    }

    debug!(path = %path.display(), "Record file watcher stopped");
}

/// Editors that save by rename leave the old watch pointing at a dead inode.
async fn rearm(watcher: &mut RecommendedWatcher, path: &Path) {
    let _ = watcher.unwatch(path);

    for attempt in 1..=REARM_ATTEMPTS {
        match watcher.watch(path, RecursiveMode::NonRecursive) {
            Ok(()) => return,
            Err(e) if attempt == REARM_ATTEMPTS => {
                warn!(path = %path.display(), error = %e, "Failed to re-watch record file");
            }
            Err(_) => tokio::time::sleep(REARM_PAUSE).await,
        }
    }
}
