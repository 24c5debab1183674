pub mod mock;

use crate::{cancel::CancelToken, entry::Entry};
use anyhow::Result;

/// Produces the list of entries. Called once at startup and again on every
/// refresh, always from a background thread.
///
/// Implementations should check `ctx` between slow steps and return early
/// once it reports cancelled.
pub trait Loader<T>: Send + Sync {
    fn load(&self, ctx: &CancelToken) -> Result<Vec<Entry<T>>>;
}

impl<T, F> Loader<T> for F
where
    F: Fn(&CancelToken) -> Result<Vec<Entry<T>>> + Send + Sync,
{
    fn load(&self, ctx: &CancelToken) -> Result<Vec<Entry<T>>> {
        self(ctx)
    }
}
