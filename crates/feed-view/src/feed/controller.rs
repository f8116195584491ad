//! Feed controller - async driver of the feed state machine
//!
//! Runs as one tokio task per mounted feed. The task owns the `FeedState`,
//! listens to the store for filter replacements and to its handle for user
//! commands, and keeps at most one page fetch alive at a time.

use std::sync::Arc;

use feed_common::{AppError, AppResult, DefaultErrorTransformer, ErrorTransformer};
use feed_core::{DomainResult, Page, PostSource};
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::state::{FeedSnapshot, FeedState, PageRequest};
use crate::store::Store;

/// The fetch currently awaited by the controller, tagged with its generation
type InFlight = BoxFuture<'static, (u64, DomainResult<Page>)>;

/// Commands accepted by a running controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    /// The sentinel at the end of the list became visible
    NearEnd,
    /// Reload from the first page with the current filters
    Refetch,
    /// Repeat the failed request
    Retry,
    /// Unmount the feed
    Shutdown,
}

/// Builder for a feed controller task
pub struct FeedController {
    source: Arc<dyn PostSource>,
    store: Store,
    transformer: Arc<dyn ErrorTransformer>,
}

impl FeedController {
    pub fn new(source: Arc<dyn PostSource>, store: Store) -> Self {
        Self {
            source,
            store,
            transformer: Arc::new(DefaultErrorTransformer),
        }
    }

    /// Replace the transformer used to turn fetch failures into messages
    #[must_use]
    pub fn with_error_transformer(mut self, transformer: impl ErrorTransformer + 'static) -> Self {
        self.transformer = Arc::new(transformer);
        self
    }

    /// Start the controller task
    ///
    /// The first page for the store's current filters is requested right away.
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> FeedHandle {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(FeedSnapshot::default());

        let task = tokio::spawn(self.run(command_rx, snapshot_tx));

        FeedHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }

    async fn run(
        self,
        mut commands: mpsc::UnboundedReceiver<FeedCommand>,
        snapshots: watch::Sender<FeedSnapshot>,
    ) {
        let mut app = self.store.subscribe();
        let (filters, mut revision) = {
            let current = app.borrow_and_update();
            (current.filters.clone(), current.filters_revision)
        };

        let mut state = FeedState::new(filters.clone());
        let mut in_flight = Some(self.start(state.restart(filters)));
        publish(&snapshots, &state);

        tracing::info!(revision, "Feed controller started");

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let request = match command {
                        Some(FeedCommand::NearEnd) => state.near_end(),
                        Some(FeedCommand::Refetch) => Some(state.refetch()),
                        Some(FeedCommand::Retry) => Some(state.retry()),
                        Some(FeedCommand::Shutdown) | None => break,
                    };
                    if let Some(request) = request {
                        in_flight = Some(self.start(request));
                    }
                }

                changed = app.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let (filters, next_revision) = {
                        let current = app.borrow_and_update();
                        (current.filters.clone(), current.filters_revision)
                    };
                    if next_revision != revision {
                        revision = next_revision;
                        tracing::debug!(revision, search = %filters.search, sort = %filters.sort, "Filters replaced");
                        // Dropping the previous fetch cancels it
                        in_flight = Some(self.start(state.restart(filters)));
                    }
                }

                (generation, result) = next_result(&mut in_flight) => {
                    in_flight = None;
                    state.apply(generation, result, self.transformer.as_ref());
                }
            }

            publish(&snapshots, &state);
        }

        tracing::info!(
            cancelled_fetch = in_flight.is_some(),
            "Feed controller stopped"
        );
    }

    fn start(&self, request: PageRequest) -> InFlight {
        tracing::debug!(
            generation = request.generation,
            kind = ?request.kind,
            cursor = ?request.cursor,
            "Requesting page"
        );

        let source = Arc::clone(&self.source);
        async move {
            let result = source
                .fetch_page(&request.filters, request.cursor.as_ref())
                .await;
            (request.generation, result)
        }
        .boxed()
    }
}

/// Resolve the in-flight fetch, or never when there is none
async fn next_result(in_flight: &mut Option<InFlight>) -> (u64, DomainResult<Page>) {
    match in_flight {
        Some(fetch) => fetch.await,
        None => std::future::pending().await,
    }
}

fn publish(snapshots: &watch::Sender<FeedSnapshot>, state: &FeedState) {
    snapshots.send_if_modified(|current| {
        let next = state.snapshot();
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

/// Handle to a running feed controller
///
/// Dropping the handle and every `SentinelTrigger` stops the controller.
pub struct FeedHandle {
    commands: mpsc::UnboundedSender<FeedCommand>,
    snapshots: watch::Receiver<FeedSnapshot>,
    task: JoinHandle<()>,
}

impl FeedHandle {
    /// Notify the controller that the end of the list is visible
    pub fn on_sentinel_visible(&self) {
        self.send(FeedCommand::NearEnd);
    }

    /// Reload from the first page
    pub fn refetch(&self) {
        self.send(FeedCommand::Refetch);
    }

    /// Repeat the failed request
    pub fn retry(&self) {
        self.send(FeedCommand::Retry);
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> FeedSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.snapshots.clone()
    }

    /// Callback handed to whatever observes the viewport
    pub fn sentinel(&self) -> SentinelTrigger {
        SentinelTrigger {
            commands: self.commands.clone(),
        }
    }

    /// Wait until a snapshot satisfies `predicate`
    pub async fn wait_for(
        &self,
        mut predicate: impl FnMut(&FeedSnapshot) -> bool,
    ) -> AppResult<FeedSnapshot> {
        let mut rx = self.snapshots.clone();
        let snapshot = rx
            .wait_for(|snapshot| predicate(snapshot))
            .await
            .map_err(|_| AppError::ControllerStopped)?;
        Ok(snapshot.clone())
    }

    /// Unmount the feed and wait for the controller to stop
    ///
    /// A fetch still in flight is cancelled and never applied.
    pub async fn shutdown(self) -> AppResult<()> {
        self.send(FeedCommand::Shutdown);
        self.task.await.map_err(AppError::internal)
    }

    fn send(&self, command: FeedCommand) {
        send_command(&self.commands, command);
    }
}

fn send_command(commands: &mpsc::UnboundedSender<FeedCommand>, command: FeedCommand) {
    if commands.send(command).is_err() {
        tracing::debug!(?command, "Feed controller already stopped");
    }
}

/// Cloneable "end of list is visible" callback
#[derive(Clone)]
pub struct SentinelTrigger {
    commands: mpsc::UnboundedSender<FeedCommand>,
}

impl SentinelTrigger {
    pub fn on_visible(&self) {
        send_command(&self.commands, FeedCommand::NearEnd);
    }
}
