use cxmenu_core::{Entry, Loader, MenuAction, MenuEvent};
use std::{
    sync::{
        Arc,
        mpsc::{self, RecvTimeoutError},
    },
    thread,
    time::Duration,
};

use super::EventSender;

/// How often a waiting dispatcher re-checks cancellation and the deadline
const WAIT_SLICE: Duration = Duration::from_millis(50);

/// Run the loader off the event loop and post exactly one `EntriesLoaded`.
///
/// The loader runs on its own thread so the deadline can be enforced even if
/// it ignores its token. When the session is cancelled nothing is posted.
pub(super) fn spawn_load<T, P>(
    loader: &Arc<dyn Loader<T>>,
    sender: &EventSender<T, P>,
    timeout: Duration,
) where
    T: Send + 'static,
    P: Send + 'static,
{
    let loader = Arc::clone(loader);
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.is_cancelled() {
            return;
        }
        let ctx = sender.cancel.child_with_timeout(timeout);
        let worker_ctx = ctx.clone();
        let (result_tx, result_rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = result_tx.send(loader.load(&worker_ctx));
        });

        let result = loop {
            match result_rx.recv_timeout(WAIT_SLICE) {
                Ok(result) => break result.map_err(|e| format!("{e:#}")),
                Err(RecvTimeoutError::Timeout) => {
                    if sender.cancel.is_cancelled() {
                        ctx.cancel();
                        log::debug!("load abandoned, session cancelled");
                        return;
                    }
                    if ctx.is_timed_out() {
                        ctx.cancel();
                        break Err(format!("timed out after {timeout:?}"));
                    }
                }
                Err(RecvTimeoutError::Disconnected) => {
                    break Err("loader stopped without a result".to_string());
                }
            }
        };
        sender.send(MenuEvent::EntriesLoaded(result));
    });
}

/// Run an action against `entry` off the event loop.
///
/// Posts `PanelReady`, then `QuitRequested` when the update asks for it.
/// Nothing is posted if the session was cancelled while the action ran.
/// Both go through the same channel, so the outcome is always recorded
/// before the loop sees the quit.
pub(super) fn spawn_action<T, P>(
    action: &MenuAction<T, P>,
    entry: Entry<T>,
    sender: &EventSender<T, P>,
) where
    T: Send + 'static,
    P: Send + 'static,
{
    let operation = action.operation();
    let label = action.label.clone();
    let sender = sender.clone();
    thread::spawn(move || {
        if sender.cancel.is_cancelled() {
            return;
        }
        let ctx = sender.cancel.child();
        log::debug!("running action '{label}' on '{}'", entry.title);
        let update = operation(&entry, &ctx);
        if sender.cancel.is_cancelled() {
            log::debug!("action '{label}' finished after the session ended, result dropped");
            return;
        }
        let then_quit = update.then_quit;
        sender.send(MenuEvent::PanelReady {
            entry: Some(entry),
            update,
        });
        if then_quit {
            sender.send(MenuEvent::QuitRequested);
        }
    });
}
