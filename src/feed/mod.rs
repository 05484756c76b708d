//! The live statistics feed: one push connection per session.
//!
//! The channel decodes each inbound frame as an [`AppStats`] snapshot and
//! forwards the good ones in arrival order. Malformed frames are logged
//! and skipped; they never reach the view model and never end the
//! connection. A closed feed is terminal: a new session constructs a new
//! [`StatsFeed`], there is no reconnect inside it.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_tungstenite::tungstenite::protocol::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, warn};

use crate::api::AppStats;

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Observable lifecycle of one feed instance. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    /// The socket is being established.
    Connecting,
    /// Snapshots may arrive.
    Open,
    /// No further messages will ever be delivered by this instance.
    Closed,
}

/// Failure to establish the feed connection.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to connect stats feed at '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: tokio_tungstenite::tungstenite::Error,
    },

    /// The peer accepted the connection but the handshake never finished.
    #[error("Timed out connecting stats feed at '{url}'")]
    ConnectTimeout { url: String },
}

/// A live connection to the stats feed.
///
/// [`StatsFeed::connect`] resolves only once the socket is established, so
/// holding a `StatsFeed` means holding a connection. Dropping it releases
/// the socket; [`StatsFeed::close`] does the same deterministically and
/// waits for the reader to finish.
pub struct StatsFeed {
    rx: mpsc::Receiver<AppStats>,
    state: watch::Receiver<FeedState>,
    close_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl StatsFeed {
    /// Open the connection and start reading.
    ///
    /// The whole handshake is bounded by `connect_timeout`, matching the
    /// bound the HTTP client puts on its own connects.
    pub async fn connect(url: &str, connect_timeout: Duration) -> Result<Self, FeedError> {
        let (state_tx, state_rx) = watch::channel(FeedState::Connecting);

        let (socket, _response) = match time::timeout(connect_timeout, connect_async(url)).await {
            Ok(Ok(established)) => established,
            Ok(Err(source)) => {
                return Err(FeedError::Connect {
                    url: url.to_string(),
                    source,
                });
            }
            Err(_) => {
                return Err(FeedError::ConnectTimeout {
                    url: url.to_string(),
                });
            }
        };
        debug!(%url, "stats feed connected");
        let _ = state_tx.send(FeedState::Open);

        // Short buffer. Snapshot semantics tolerate backpressure since each
        // message supersedes the previous one anyway.
        let (tx, rx) = mpsc::channel(16);
        let (close_tx, close_rx) = oneshot::channel();

        let task = tokio::spawn(read_loop(socket, tx, close_rx, state_tx));

        Ok(Self {
            rx,
            state: state_rx,
            close_tx: Some(close_tx),
            task: Some(task),
        })
    }

    /// Receive the next valid snapshot; `None` once the feed has ended.
    pub async fn recv(&mut self) -> Option<AppStats> {
        self.rx.recv().await
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FeedState {
        *self.state.borrow()
    }

    /// Close the connection and wait for the reader to finish.
    ///
    /// Consuming `self` makes a second close unrepresentable.
    pub async fn close(mut self) {
        if let Some(close_tx) = self.close_tx.take() {
            let _ = close_tx.send(());
        }
        // A reader parked on a full delivery buffer never reaches the
        // select that watches the close signal; closing the receiver fails
        // that pending send and unparks it.
        self.rx.close();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for StatsFeed {
    fn drop(&mut self) {
        // Covers every exit path that skipped close(): signal the reader,
        // which sends the close frame and lets the socket drop with it.
        if let Some(close_tx) = self.close_tx.take() {
            let _ = close_tx.send(());
        }
    }
}

/// Decode one inbound text frame as a snapshot.
///
/// Strict on shape: missing fields, wrong types, and negative totals are
/// all rejected at this boundary.
fn parse_snapshot(text: &str) -> Result<AppStats, serde_json::Error> {
    serde_json::from_str(text)
}

async fn read_loop(
    socket: Socket,
    tx: mpsc::Sender<AppStats>,
    mut close_rx: oneshot::Receiver<()>,
    state: watch::Sender<FeedState>,
) {
    let (mut sink, mut stream) = socket.split();

    loop {
        tokio::select! {
            inbound = stream.next() => match inbound {
                Some(Ok(Message::Text(text))) => match parse_snapshot(text.as_str()) {
                    Ok(snapshot) => {
                        if tx.send(snapshot).await.is_err() {
                            // Receiver closed or dropped; nobody left to consume.
                            break;
                        }
                    }
                    Err(error) => {
                        warn!(%error, frame = text.as_str(), "discarding malformed stats frame");
                    }
                },
                Some(Ok(Message::Close(_))) | None => {
                    debug!("stats feed closed by server");
                    break;
                }
                Some(Ok(Message::Binary(_))) => {
                    warn!("discarding non-text stats frame");
                }
                Some(Ok(_)) => {} // ping/pong, handled by the protocol layer
                Some(Err(error)) => {
                    warn!(%error, "stats feed transport error");
                    break;
                }
            },
            _ = &mut close_rx => {
                let _ = sink.send(Message::Close(None)).await;
                break;
            }
        }
    }

    // Set before the sender drops so observers see Closed by the time
    // recv() yields None.
    let _ = state.send(FeedState::Closed);
}
