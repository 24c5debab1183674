mod spawn;

use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use cxmenu_core::{CancelToken, Command, MenuConfig, MenuEvent, MenuState, Outcome};
use ratatui::DefaultTerminal;
use spawn::{spawn_action, spawn_load};
use std::{sync::mpsc, time::Duration};

const INPUT_POLL: Duration = Duration::from_millis(80);

/// Handle for dispatching background work
pub struct EventSender<T, P> {
    tx: mpsc::Sender<MenuEvent<T, P>>,
    cancel: CancelToken,
}

impl<T, P> EventSender<T, P> {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: MenuEvent<T, P>) {
        let _ = self.tx.send(event);
    }
}

impl<T, P> Clone for EventSender<T, P> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

/// Take over the terminal, run a menu session, and hand back its outcome.
///
/// Loader and action failures never surface here; they end up in the status
/// line. Only terminal failures are returned as errors.
pub fn start<T, P>(config: &MenuConfig<T, P>, theme: &Theme) -> anyhow::Result<Outcome<T, P>>
where
    T: Clone + Send + 'static,
    P: Send + 'static,
{
    let mut state = MenuState::new(config.actions.len(), config.panel_placeholder());
    let mut terminal = ratatui::try_init()?;
    let result = run(&mut terminal, &mut state, config, theme);
    ratatui::restore();
    result?;
    Ok(state.into_outcome())
}

/// Drive the event loop until a quit is requested or the session token is
/// cancelled.
///
/// Each pass applies one queued background event before polling the
/// terminal, so pending background results are handled ahead of buffered key
/// presses rather than in strict arrival order across the two sources.
///
/// Background tasks still running on return are not joined. They see their
/// tokens cancelled and their late events are dropped with the receiver.
pub fn run<T, P>(
    terminal: &mut DefaultTerminal,
    state: &mut MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
) -> anyhow::Result<()>
where
    T: Clone + Send + 'static,
    P: Send + 'static,
{
    let (tx, rx) = mpsc::channel::<MenuEvent<T, P>>();
    let session = config.session.child();
    let sender = EventSender {
        tx,
        cancel: session.clone(),
    };

    let size = terminal.size()?;
    state.update(MenuEvent::Resize {
        height: size.height,
    });
    dispatch(state.init(), config, &sender);

    let result = event_loop(terminal, state, config, theme, &rx, &sender);
    // Signal cancellation to background threads
    session.cancel();
    result
}

fn event_loop<T, P>(
    terminal: &mut DefaultTerminal,
    state: &mut MenuState<T, P>,
    config: &MenuConfig<T, P>,
    theme: &Theme,
    rx: &mpsc::Receiver<MenuEvent<T, P>>,
    sender: &EventSender<T, P>,
) -> anyhow::Result<()>
where
    T: Clone + Send + 'static,
    P: Send + 'static,
{
    loop {
        if sender.cancel.is_cancelled() {
            log::info!("session cancelled, leaving menu");
            return Ok(());
        }

        terminal.draw(|f| components::draw(f, state, config, theme))?;

        // Check background channel (non-blocking)
        if let Ok(menu_event) = rx.try_recv() {
            if process_event(menu_event, state, config, sender) {
                return Ok(());
            }
            continue;
        }

        // Poll terminal events with a timeout so background results are picked up promptly
        if event::poll(INPUT_POLL)? {
            let menu_event = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    keymap::resolve_input(key).map(MenuEvent::Input)
                }
                Event::Resize(_, height) => Some(MenuEvent::Resize { height }),
                _ => None,
            };
            if let Some(menu_event) = menu_event
                && process_event(menu_event, state, config, sender)
            {
                return Ok(());
            }
        }
    }
}

/// Apply one event and dispatch whatever it asks for.
/// Returns true when the session should end.
fn process_event<T, P>(
    menu_event: MenuEvent<T, P>,
    state: &mut MenuState<T, P>,
    config: &MenuConfig<T, P>,
    sender: &EventSender<T, P>,
) -> bool
where
    T: Clone + Send + 'static,
    P: Send + 'static,
{
    state
        .update(menu_event)
        .is_some_and(|command| dispatch(command, config, sender))
}

fn dispatch<T, P>(
    command: Command<T>,
    config: &MenuConfig<T, P>,
    sender: &EventSender<T, P>,
) -> bool
where
    T: Send + 'static,
    P: Send + 'static,
{
    match command {
        Command::LoadEntries => {
            spawn_load(&config.loader, sender, config.effective_load_timeout());
        }
        Command::RunAction { index, entry } => match config.actions.get(index) {
            Some(action) => spawn_action(action, entry, sender),
            None => log::warn!("no action at index {index}"),
        },
        Command::Quit => return true,
    }
    false
}
