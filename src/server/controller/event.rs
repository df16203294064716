use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};

use crate::{
    model::event::{ConfigEventDto, CONFIG_UPDATED_EVENT},
    server::state::AppState,
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Stream configuration change notifications.
///
/// Server-sent events named `config_updated`, one per committed save, carrying the
/// guild id. Subscribers re-read the configuration from storage. Notifications
/// published while nobody listens are dropped.
///
/// # Arguments
/// - `state` - Application state containing the event emitter
///
/// # Returns
/// - `200 OK` - Event stream
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Configuration change stream", content_type = "text/event-stream", body = ConfigEventDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let stream =
        BroadcastStream::new(state.events.subscribe()).filter_map(|message| match message {
            Ok(event) => Some(Event::default().event(CONFIG_UPDATED_EVENT).json_data(event)),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!("Event subscriber lagged; {} notifications dropped", skipped);
                None
            }
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
