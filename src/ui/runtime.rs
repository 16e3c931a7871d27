use crate::api::ApiClient;
use crate::config::ConfigStore;
use crate::ui::app::{App, EntityTab};
use crate::ui::events::ApiOutcome;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker;
use anyhow::Context;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the interactive session until the user quits.
///
/// One task per entity owns the HTTP side; everything else happens on this
/// loop: terminal events, ticks, and settled request outcomes all funnel
/// into [`App`] mutations followed by a redraw. In-flight requests are not
/// cancelled on quit; their outcomes go nowhere once the channel closes.
pub async fn run(config: ConfigStore, initial: EntityTab) -> anyhow::Result<()> {
    let settings = config.get();
    let client = ApiClient::new(&settings.api).context("failed to build HTTP client")?;
    tracing::info!(base_url = client.base_url(), "starting session");

    let (event_tx, mut event_rx) = mpsc::channel::<ApiOutcome>(64);
    let products_commands = worker::spawn(client.clone(), event_tx.clone(), ApiOutcome::Products);
    let users_commands = worker::spawn(client, event_tx, ApiOutcome::Users);

    let mut app = App::new(
        initial,
        products_commands,
        users_commands,
        Duration::from_millis(settings.ui.notification_ttl_ms),
    );

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let mut terminal_events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(settings.ui.tick_rate_ms));

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = terminal_events.next() => match event {
                Some(Ok(Event::Key(key))) => handle_key(&mut app, key),
                Some(Ok(Event::Resize(_, _))) => {}
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal event stream failed");
                    break;
                }
                None => break,
            },
            outcome = event_rx.recv() => {
                if let Some(outcome) = outcome {
                    app.on_api(outcome);
                }
            }
            _ = tick.tick() => app.on_tick(),
        }
    }

    drop(guard);
    Ok(())
}
