use futures::future::{abortable, select, AbortHandle, Either};
use futures::{SinkExt, StreamExt};
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;
use shared::channel::{socket_endpoint, DEFAULT_LIVENESS_MS};
use shared::{Error, ErrorCode, Frame, Packet, ReconnectPolicy, Result, ServerEvent};
use tracing::{debug, error, info, warn};
use yew::Callback;
use crate::{browser, config::config};

pub enum ChannelEvent {
    Connected,
    Disconnected,
    Broadcast(ServerEvent),
}

fn protocol_error(details: impl std::fmt::Debug) -> Error {
    Error::with_details(ErrorCode::Protocol, "realtime connection failed", format!("{:?}", details))
}

pub fn connect(on_event: Callback<ChannelEvent>) -> Option<AbortHandle> {
    let endpoint = match socket_endpoint(&config().socket_url, &browser::origin()) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            error!("realtime channel disabled: {}", e);
            return None;
        }
    };

    let (task, handle) = abortable(run(endpoint, ReconnectPolicy::default(), on_event));
    wasm_bindgen_futures::spawn_local(async move {
        if task.await.is_err() {
            debug!("realtime channel torn down");
        }
    });
    Some(handle)
}

async fn run(endpoint: String, policy: ReconnectPolicy, on_event: Callback<ChannelEvent>) {
    let mut attempt = 0;
    loop {
        let mut connected = false;
        let outcome = session(&endpoint, &on_event, &mut connected).await;

        if connected {
            on_event.emit(ChannelEvent::Disconnected);
            attempt = 0;
        }
        match outcome {
            Ok(()) => info!("realtime channel closed by server"),
            Err(e) => warn!("realtime channel dropped: {}", e),
        }

        attempt += 1;
        match policy.delay_for(attempt) {
            Some(delay) => {
                debug!("reconnect attempt {} in {}ms", attempt, delay);
                TimeoutFuture::new(delay).await;
            }
            None => {
                error!("giving up on realtime channel after {} attempts", policy.max_attempts);
                return;
            }
        }
    }
}

// Runs one connection until it closes or goes silent for longer than the
// liveness window. `connected` is raised once the namespace handshake completes.
async fn session(endpoint: &str, on_event: &Callback<ChannelEvent>, connected: &mut bool) -> Result<()> {
    let socket = WebSocket::open(endpoint).map_err(protocol_error)?;
    let (mut sink, mut stream) = socket.split();
    let mut liveness_ms = DEFAULT_LIVENESS_MS;

    loop {
        let message = match select(stream.next(), Box::pin(TimeoutFuture::new(liveness_ms))).await {
            Either::Left((Some(message), _)) => message,
            Either::Left((None, _)) => return Ok(()),
            Either::Right(_) => {
                return Err(Error::new(
                    ErrorCode::Protocol,
                    format!("no traffic for {}ms", liveness_ms),
                ));
            }
        };
        let text = match message.map_err(protocol_error)? {
            Message::Text(text) => text,
            Message::Bytes(_) => {
                debug!("ignoring binary frame");
                continue;
            }
        };

        let frame = match Frame::decode(&text) {
            Ok(frame) => frame,
            Err(e) => {
                warn!("dropping realtime frame: {}", e);
                continue;
            }
        };

        match frame {
            Frame::Open(handshake) => {
                debug!(sid = %handshake.sid, ping_interval = handshake.ping_interval, "engine open");
                liveness_ms = handshake.liveness_ms();
                sink.send(Message::Text(Frame::Message(Packet::Connect).encode()))
                    .await
                    .map_err(protocol_error)?;
            }
            Frame::Ping => {
                sink.send(Message::Text(Frame::Pong.encode()))
                    .await
                    .map_err(protocol_error)?;
            }
            Frame::Message(Packet::Connect) => {
                info!("realtime channel connected");
                *connected = true;
                on_event.emit(ChannelEvent::Connected);
            }
            Frame::Message(Packet::Event { name, args }) => match ServerEvent::from_event(&name, &args) {
                Ok(Some(event)) => on_event.emit(ChannelEvent::Broadcast(event)),
                Ok(None) => {}
                Err(e) => warn!("ignoring malformed {} broadcast: {}", name, e),
            },
            Frame::Message(Packet::ConnectError(reason)) => {
                return Err(Error::new(
                    ErrorCode::Protocol,
                    format!("server refused connection: {}", reason.unwrap_or_default()),
                ));
            }
            Frame::Message(Packet::Disconnect) | Frame::Close => return Ok(()),
            Frame::Message(Packet::Ack) | Frame::Pong | Frame::Upgrade | Frame::Noop => {}
        }
    }
}
