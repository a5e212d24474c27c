//! Lazily built, shared database client.
//!
//! A [`ClientHolder`] is created once by the startup routine and hands out clones of
//! a single client. In development mode the client is also published under a
//! well-known name in a process-wide slot table, so a second holder created in the
//! same process (a re-initialised app, an embedded test server) adopts the existing
//! client instead of opening another pool.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tokio::sync::OnceCell;

use crate::config::RunMode;

/// Slot name under which the database client is published.
pub const DB_CLIENT_SLOT: &str = "aimod.db";

type SlotTable = HashMap<&'static str, Arc<dyn Any + Send + Sync>>;

static PROCESS_SLOTS: OnceLock<Mutex<SlotTable>> = OnceLock::new();

fn slots() -> MutexGuard<'static, SlotTable> {
    PROCESS_SLOTS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn load_slot<C: Clone + Send + Sync + 'static>(name: &'static str) -> Option<C> {
    slots()
        .get(name)
        .and_then(|entry| entry.downcast_ref::<C>())
        .cloned()
}

/// Publish `client` under `name` unless a client of the same type is already there,
/// in which case the stored one wins and is returned.
fn store_slot<C: Clone + Send + Sync + 'static>(name: &'static str, client: C) -> C {
    let mut table = slots();
    if let Some(existing) = table.get(name).and_then(|entry| entry.downcast_ref::<C>()) {
        return existing.clone();
    }
    table.insert(name, Arc::new(client.clone()));
    client
}

/// Holds exactly one client for the lifetime of the process.
#[derive(Debug)]
pub struct ClientHolder<C> {
    slot: &'static str,
    mode: RunMode,
    client: OnceCell<C>,
}

impl<C> ClientHolder<C>
where
    C: Clone + Send + Sync + 'static,
{
    pub fn new(slot: &'static str, mode: RunMode) -> Self {
        Self {
            slot,
            mode,
            client: OnceCell::new(),
        }
    }

    pub fn slot(&self) -> &'static str {
        self.slot
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// The client, if one has been built or adopted already.
    pub fn get(&self) -> Option<C> {
        self.client.get().cloned()
    }

    /// Return the held client, building it with `init` on first use.
    ///
    /// Concurrent first calls run `init` at most once. If `init` fails the error is
    /// returned as-is and nothing is stored, so a later call tries again.
    pub async fn get_or_init<F, Fut, E>(&self, init: F) -> Result<C, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<C, E>>,
    {
        let client = self
            .client
            .get_or_try_init(move || async move {
                if !self.mode.is_production() {
                    if let Some(existing) = load_slot::<C>(self.slot) {
                        tracing::debug!(slot = self.slot, "Reusing client from process slot");
                        return Ok(existing);
                    }
                }

                let client = init().await?;
                tracing::info!(slot = self.slot, mode = %self.mode, "Database client created");

                if self.mode.is_production() {
                    Ok::<C, E>(client)
                } else {
                    Ok(store_slot(self.slot, client))
                }
            })
            .await?;

        Ok(client.clone())
    }
}
