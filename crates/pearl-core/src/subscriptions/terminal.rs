use crate::event::TerminalEvent;
use crate::subscription::{forward, Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Marker type identifying the terminal event listener.
///
/// There is only ever one: crossterm reads input through a process-wide
/// reader, and two concurrent `EventStream`s would split events between them.
/// Route events to child components from the model instead of declaring a
/// second listener.
pub struct TerminalEvents;

/// Listen to terminal events, mapping each through `map`.
///
/// Return `Some(msg)` to forward an event to the runtime or `None` to drop it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(_) => event.key_press().map(Msg::Key),
///         TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);

    // The EventStream is created inside the spawned task. Creating it while
    // declaring (every update cycle) would poke crossterm's global reader and
    // disturb the stream that is already running.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        attach: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let handle = tokio::spawn(async move {
                let stream = EventStream::new().filter_map(move |result| {
                    let map = map.clone();
                    async move {
                        match result {
                            Ok(event) => map(TerminalEvent::from(event)),
                            Err(err) => {
                                tracing::warn!(%err, "terminal event read failed");
                                None
                            }
                        }
                    }
                });
                forward(stream.boxed(), tx).await;
            });
            handle.abort_handle()
        }),
    }
}
