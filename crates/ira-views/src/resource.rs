//! The state cell shared by every hook.
//!
//! A [`Resource`] holds one `{data, loading, error}` triple. Each fetch round
//! takes a [`Round`] ticket from [`Resource::begin`]; only the ticket from the
//! most recent `begin` (or [`Resource::settle_empty`]) may write its outcome
//! back. Earlier rounds that settle late are dropped.

use std::future::Future;

use ira_client::ApiError;
use parking_lot::Mutex;

/// Snapshot of a hook's state, cloned out of the cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<D> {
    pub data: Option<D>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<D> ResourceState<D> {
    /// State of a hook that has been created but has not settled yet.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }

    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.loading
    }
}

/// Ticket for one fetch round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round(u64);

#[derive(Debug)]
struct Cell<D> {
    state: ResourceState<D>,
    generation: u64,
}

#[derive(Debug)]
pub struct Resource<D> {
    fallback: &'static str,
    cell: Mutex<Cell<D>>,
}

impl<D: Clone> Resource<D> {
    /// `fallback` is the message stored when a round fails with anything other
    /// than an [`ApiError`].
    #[must_use]
    pub const fn new(fallback: &'static str) -> Self {
        Self {
            fallback,
            cell: Mutex::new(Cell {
                state: ResourceState::pending(),
                generation: 0,
            }),
        }
    }

    #[must_use]
    pub fn state(&self) -> ResourceState<D> {
        self.cell.lock().state.clone()
    }

    #[must_use]
    pub fn data(&self) -> Option<D> {
        self.cell.lock().state.data.clone()
    }

    /// Start a round: loading on, previous error cleared, older rounds invalidated.
    pub fn begin(&self) -> Round {
        let mut cell = self.cell.lock();
        cell.generation += 1;
        cell.state.loading = true;
        cell.state.error = None;
        Round(cell.generation)
    }

    /// Apply a round's outcome. `Ok(None)` clears the data without an error.
    ///
    /// Returns `false` when a newer round has started since `round` began; the
    /// outcome is then discarded and the state left untouched.
    pub fn settle(&self, round: Round, outcome: anyhow::Result<Option<D>>) -> bool {
        let mut cell = self.cell.lock();
        if cell.generation != round.0 {
            tracing::debug!(
                round = round.0,
                latest = cell.generation,
                "discarding stale round"
            );
            return false;
        }
        match outcome {
            Ok(data) => cell.state.data = data,
            Err(err) => cell.state.error = Some(error_message(&err, self.fallback)),
        }
        cell.state.loading = false;
        true
    }

    pub fn finish(&self, round: Round, outcome: anyhow::Result<D>) -> bool {
        self.settle(round, outcome.map(Some))
    }

    /// End `round` leaving data untouched and recording no error. Returns
    /// `false` for a stale round.
    pub fn abandon(&self, round: Round) -> bool {
        let mut cell = self.cell.lock();
        if cell.generation != round.0 {
            return false;
        }
        cell.state.loading = false;
        true
    }

    /// Settle with no data and no error, without issuing a request. Any round
    /// still in flight is invalidated.
    pub fn settle_empty(&self) {
        let mut cell = self.cell.lock();
        cell.generation += 1;
        cell.state = ResourceState {
            data: None,
            loading: false,
            error: None,
        };
    }

    /// Run `fetch` as one round. Returns whether its outcome was applied.
    pub async fn run<F, E>(&self, fetch: F) -> bool
    where
        F: Future<Output = Result<D, E>>,
        E: Into<anyhow::Error>,
    {
        let round = self.begin();
        let outcome = fetch.await.map_err(Into::into);
        self.finish(round, outcome)
    }
}

/// User-facing text for a failed round: the [`ApiError`] message when there
/// is one, `fallback` otherwise.
#[must_use]
pub fn error_message(err: &anyhow::Error, fallback: &str) -> String {
    err.downcast_ref::<ApiError>()
        .map_or_else(|| fallback.to_string(), |api| api.message().to_string())
}
