use crate::{cancel::CancelToken, entry::Entry, outcome::PanelUpdate};
use std::{fmt, sync::Arc};

/// Operation run in the background when an action is chosen.
/// The token is a child of the session token; no timeout is applied to it.
pub type ActionFn<T, P> = dyn Fn(&Entry<T>, &CancelToken) -> PanelUpdate<P> + Send + Sync;

/// A named operation offered against the highlighted entry.
pub struct MenuAction<T, P> {
    pub label: String,
    operation: Arc<ActionFn<T, P>>,
}

impl<T, P> MenuAction<T, P> {
    pub fn new<F>(label: impl Into<String>, operation: F) -> Self
    where
        F: Fn(&Entry<T>, &CancelToken) -> PanelUpdate<P> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            operation: Arc::new(operation),
        }
    }

    /// Shared handle to the operation, for running it off the event loop
    pub fn operation(&self) -> Arc<ActionFn<T, P>> {
        Arc::clone(&self.operation)
    }

    pub fn run(&self, entry: &Entry<T>, ctx: &CancelToken) -> PanelUpdate<P> {
        (self.operation)(entry, ctx)
    }
}

impl<T, P> Clone for MenuAction<T, P> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            operation: Arc::clone(&self.operation),
        }
    }
}

impl<T, P> fmt::Debug for MenuAction<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_passes_entry_through() {
        let action = MenuAction::new("Echo", |entry: &Entry<u32>, _ctx: &CancelToken| {
            PanelUpdate::ready("Echo", entry.title.clone(), entry.payload * 2)
        });
        let update = action.run(&Entry::new("row", 21), &CancelToken::new());
        assert_eq!(update.content, "row");
        assert_eq!(update.payload, Some(42));
    }

    #[test]
    fn test_clone_shares_operation() {
        let action = MenuAction::new("Noop", |_: &Entry<()>, _: &CancelToken| {
            PanelUpdate::ready("Noop", "", ())
        });
        let cloned = action.clone();
        assert!(Arc::ptr_eq(&action.operation(), &cloned.operation()));
        assert_eq!(format!("{cloned:?}"), "MenuAction { label: \"Noop\", .. }");
    }
}
