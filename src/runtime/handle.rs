use std::{path::PathBuf, sync::Arc};

use chrono::Utc;
use thiserror::Error;
use tokio::{
    sync::{Mutex, broadcast, mpsc, oneshot},
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};

use crate::{
    app::{AppError, Logbook},
    engine::builder::{DATE_FORMAT, TIME_FORMAT},
    persist::LogStorage,
    qso::{ContactDraft, ContactPatch, ContactRecord},
    settings::{SettingsUpdate, StationSettings},
    types::RecordIndex,
};

use super::events::LogEvent;

/// Errors returned through a [`LogbookHandle`].
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The command itself failed.
    #[error(transparent)]
    App(#[from] AppError),
    /// The runtime task is gone.
    #[error("logbook runtime has stopped")]
    ChannelClosed,
    /// The blocking worker running a command panicked or was cancelled.
    #[error("logbook worker failed: {0}")]
    Worker(String),
}

/// Runtime tuning.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Clock tick period; `0` disables ticks.
    pub clock_interval_ms: u64,
    /// Pending commands before senders wait.
    pub command_queue_bound: usize,
    /// Broadcast buffer per subscriber.
    pub event_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: 1000,
            command_queue_bound: 256,
            event_capacity: 1024,
        }
    }
}

/// Cloneable front-end handle to a logbook owned by the runtime task.
pub struct LogbookHandle {
    cmd_tx: mpsc::Sender<Command>,
    events_tx: broadcast::Sender<LogEvent>,
}

impl Clone for LogbookHandle {
    fn clone(&self) -> Self {
        Self {
            cmd_tx: self.cmd_tx.clone(),
            events_tx: self.events_tx.clone(),
        }
    }
}

type Reply<T> = oneshot::Sender<Result<T, RuntimeError>>;
type SharedLogbook<S> = Arc<Mutex<Logbook<S>>>;

enum Command {
    Append {
        draft: ContactDraft,
        resp: Reply<RecordIndex>,
    },
    Edit {
        index: RecordIndex,
        patch: ContactPatch,
        resp: Reply<()>,
    },
    Delete {
        index: RecordIndex,
        resp: Reply<ContactRecord>,
    },
    UpdateSettings {
        update: SettingsUpdate,
        resp: Reply<()>,
    },
    ExportAdif {
        destination: Option<PathBuf>,
        resp: Reply<Option<PathBuf>>,
    },
    ExportCsv {
        destination: Option<PathBuf>,
        resp: Reply<Option<PathBuf>>,
    },
    Records {
        resp: oneshot::Sender<Vec<ContactRecord>>,
    },
    Record {
        index: RecordIndex,
        resp: oneshot::Sender<Option<ContactRecord>>,
    },
    Settings {
        resp: oneshot::Sender<StationSettings>,
    },
    Shutdown {
        resp: oneshot::Sender<()>,
    },
}

/// Moves `logbook` onto a task that applies commands one at a time.
///
/// Storage and export I/O runs on tokio's blocking pool, so a slow disk
/// stalls neither the executor nor the clock.
///
/// Must be called inside a tokio runtime.
pub fn spawn_logbook<S>(logbook: Logbook<S>, config: RuntimeConfig) -> LogbookHandle
where
    S: LogStorage + 'static,
{
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<Command>(config.command_queue_bound);
    let (events_tx, _) = broadcast::channel::<LogEvent>(config.event_capacity);
    let events_tx_loop = events_tx.clone();

    tokio::spawn(async move {
        let logbook: SharedLogbook<S> = Arc::new(Mutex::new(logbook));
        let clock = (config.clock_interval_ms > 0)
            .then(|| spawn_clock(Duration::from_millis(config.clock_interval_ms), events_tx_loop.clone()));

        while let Some(cmd) = cmd_rx.recv().await {
            if handle_command(cmd, &logbook, &events_tx_loop).await {
                break;
            }
        }

        if let Some(clock) = clock {
            clock.abort();
        }
        log::debug!("logbook runtime stopped");
    });

    LogbookHandle { cmd_tx, events_tx }
}

fn spawn_clock(period: Duration, events_tx: broadcast::Sender<LogEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut clock = time::interval(period);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            clock.tick().await;
            let now = Utc::now();
            let _ = events_tx.send(LogEvent::ClockTick {
                date: now.format(DATE_FORMAT).to_string(),
                time: now.format(TIME_FORMAT).to_string(),
            });
        }
    })
}

impl LogbookHandle {
    /// Receives every event emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<LogEvent> {
        self.events_tx.subscribe()
    }

    /// See [`Logbook::append_record`].
    pub async fn append(&self, draft: ContactDraft) -> Result<RecordIndex, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Append { draft, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// See [`Logbook::edit_record`].
    pub async fn edit(&self, index: RecordIndex, patch: ContactPatch) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Edit { index, patch, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// See [`Logbook::delete_record`].
    pub async fn delete(&self, index: RecordIndex) -> Result<ContactRecord, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Delete { index, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// See [`Logbook::update_settings`].
    pub async fn update_settings(&self, update: SettingsUpdate) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::UpdateSettings { update, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// See [`Logbook::export_adif`].
    pub async fn export_adif(&self, destination: Option<PathBuf>) -> Result<Option<PathBuf>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ExportAdif { destination, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// See [`Logbook::export_csv`].
    pub async fn export_csv(&self, destination: Option<PathBuf>) -> Result<Option<PathBuf>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::ExportCsv { destination, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)?
    }

    /// Snapshot of all records.
    pub async fn records(&self) -> Result<Vec<ContactRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Records { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Record at `index`, if any.
    pub async fn record(&self, index: RecordIndex) -> Result<Option<ContactRecord>, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Record { index, resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Current settings.
    pub async fn settings(&self) -> Result<StationSettings, RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Settings { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    /// Stops the runtime task after pending commands.
    pub async fn shutdown(&self) -> Result<(), RuntimeError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Shutdown { resp: tx }).await?;
        rx.await.map_err(|_| RuntimeError::ChannelClosed)
    }

    async fn send(&self, cmd: Command) -> Result<(), RuntimeError> {
        self.cmd_tx.send(cmd).await.map_err(|_| RuntimeError::ChannelClosed)
    }
}

/// True for success and for changes that were applied but not saved.
fn applied<T>(res: &Result<T, AppError>) -> bool {
    matches!(res, Ok(_) | Err(AppError::NotPersisted(_)))
}

/// Runs `f` against the logbook on the blocking pool.
///
/// `f` returns the command result and the event to broadcast, if any.
async fn run_blocking<S, T, F>(
    logbook: &SharedLogbook<S>,
    events_tx: &broadcast::Sender<LogEvent>,
    f: F,
) -> Result<T, RuntimeError>
where
    S: LogStorage + 'static,
    T: Send + 'static,
    F: FnOnce(&mut Logbook<S>) -> (Result<T, AppError>, Option<LogEvent>) + Send + 'static,
{
    let logbook_ref = Arc::clone(logbook);
    let (res, event) = tokio::task::spawn_blocking(move || {
        let mut logbook = logbook_ref.blocking_lock();
        f(&mut *logbook)
    })
    .await
    .map_err(|e| RuntimeError::Worker(format!("join error: {e}")))?;

    if let Some(event) = event {
        let _ = events_tx.send(event);
    }
    res.map_err(RuntimeError::from)
}

fn exported(res: &Result<Option<PathBuf>, AppError>) -> Option<LogEvent> {
    match res {
        Ok(Some(path)) => Some(LogEvent::Exported { path: path.clone() }),
        _ => None,
    }
}

async fn handle_command<S: LogStorage + 'static>(
    cmd: Command,
    logbook: &SharedLogbook<S>,
    events_tx: &broadcast::Sender<LogEvent>,
) -> bool {
    match cmd {
        Command::Append { draft, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.append_record(&draft);
                let event = applied(&res).then(|| LogEvent::Appended {
                    index: logbook.store().len().saturating_sub(1),
                });
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::Edit { index, patch, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.edit_record(index, &patch);
                let event = applied(&res).then_some(LogEvent::Edited { index });
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::Delete { index, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.delete_record(index);
                let event = applied(&res).then_some(LogEvent::Deleted { index });
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::UpdateSettings { update, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.update_settings(update);
                let event = applied(&res).then_some(LogEvent::SettingsUpdated);
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::ExportAdif { destination, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.export_adif(destination.as_deref());
                let event = exported(&res);
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::ExportCsv { destination, resp } => {
            let res = run_blocking(logbook, events_tx, move |logbook| {
                let res = logbook.export_csv(destination.as_deref());
                let event = exported(&res);
                (res, event)
            })
            .await;
            let _ = resp.send(res);
        }
        Command::Records { resp } => {
            let _ = resp.send(logbook.lock().await.records().to_vec());
        }
        Command::Record { index, resp } => {
            let _ = resp.send(logbook.lock().await.store().get(index).cloned());
        }
        Command::Settings { resp } => {
            let _ = resp.send(logbook.lock().await.settings().clone());
        }
        Command::Shutdown { resp } => {
            let _ = resp.send(());
            return true;
        }
    }

    false
}
