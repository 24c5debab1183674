use super::Loader;
use crate::{cancel::CancelToken, entry::Entry};
use anyhow::Result;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Loader that hands out a fixed list, or a queued error, and counts calls.
pub struct StaticLoader<T> {
    pub entries: Vec<Entry<T>>,
    pub next_error: Mutex<Option<String>>,
    pub calls: AtomicUsize,
}

impl<T> StaticLoader<T> {
    pub fn new(entries: Vec<Entry<T>>) -> Self {
        Self {
            entries,
            next_error: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail the next call with `message`
    pub fn fail_next(&self, message: &str) {
        *self.next_error.lock().unwrap() = Some(message.to_string());
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<T: Clone + Send + Sync> Loader<T> for StaticLoader<T> {
    fn load(&self, _ctx: &CancelToken) -> Result<Vec<Entry<T>>> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if let Some(message) = self.next_error.lock().unwrap().take() {
            anyhow::bail!(message);
        }
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_loader_fails_once() {
        let loader = StaticLoader::new(vec![Entry::new("a", 1)]);
        loader.fail_next("offline");
        let ctx = CancelToken::new();

        let err = loader.load(&ctx).unwrap_err();
        assert_eq!(err.to_string(), "offline");
        assert_eq!(loader.load(&ctx).unwrap().len(), 1);
        assert_eq!(loader.call_count(), 2);
    }

    #[test]
    fn test_closure_is_a_loader() {
        let loader = |_ctx: &CancelToken| -> Result<Vec<Entry<&'static str>>> {
            Ok(vec![Entry::new("x", "payload")])
        };
        let entries = loader.load(&CancelToken::new()).unwrap();
        assert_eq!(entries[0].payload, "payload");
    }
}
