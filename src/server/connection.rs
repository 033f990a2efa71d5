//! Per-connection serving: HTTP/1.1 with header read and keep-alive idle timeouts.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tower::ServiceExt;
use tracing::debug;

use crate::config::ServerTimeouts;

/// Tracks in-flight requests on one connection so idleness can be detected.
#[derive(Debug, Default)]
struct IdleTracker {
    in_flight: AtomicUsize,
    activity: Notify,
}

/// Marks a request as in flight until dropped.
struct InFlight(Arc<IdleTracker>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.0.activity.notify_one();
    }
}

impl IdleTracker {
    fn begin(self: &Arc<Self>) -> InFlight {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.activity.notify_one();
        InFlight(Arc::clone(self))
    }

    /// Resolves once no request has been in flight for `idle`.
    async fn wait_idle(&self, idle: Duration) {
        loop {
            let activity = self.activity.notified();
            if self.in_flight.load(Ordering::SeqCst) > 0 {
                activity.await;
            } else if tokio::time::timeout(idle, activity).await.is_err() {
                return;
            }
        }
    }
}

/// Serve one accepted connection until the peer closes it or a timeout fires.
pub async fn serve_connection(stream: TcpStream, app: Router, timeouts: ServerTimeouts) {
    let tracker = Arc::new(IdleTracker::default());

    let service = {
        let tracker = Arc::clone(&tracker);
        service_fn(move |request: Request<Incoming>| {
            let app = app.clone();
            let in_flight = tracker.begin();
            async move {
                let response = app.oneshot(request).await;
                drop(in_flight);
                response
            }
        })
    };

    let mut builder = http1::Builder::new();
    builder
        .timer(TokioTimer::new())
        .header_read_timeout(timeouts.read)
        .keep_alive(true);

    let conn = builder.serve_connection(TokioIo::new(stream), service);
    tokio::pin!(conn);

    let result = tokio::select! {
        result = conn.as_mut() => result,
        () = tracker.wait_idle(timeouts.idle) => {
            debug!("Closing connection idle for {:?}", timeouts.idle);
            conn.as_mut().graceful_shutdown();
            conn.as_mut().await
        }
    };

    if let Err(e) = result {
        debug!("Connection closed with error: {}", e);
    }
}
