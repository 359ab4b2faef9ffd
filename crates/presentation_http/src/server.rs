//! Server loop with bounded graceful shutdown

use std::{
    future::{Future, IntoFuture},
    io,
    time::Duration,
};

use axum::Router;
use tokio::{net::TcpListener, sync::watch};
use tracing::{info, warn};

/// Serve `app` until `signal` resolves, then drain open connections for at
/// most `drain_timeout` before returning.
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (stopping_tx, mut stopping_rx) = watch::channel(false);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        let _ = stopping_tx.send(true);
    })
    .into_future();

    let deadline = async move {
        if stopping_rx.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
        info!("Waiting up to {:?} for connections to close...", drain_timeout);
        tokio::time::sleep(drain_timeout).await;
    };

    tokio::select! {
        result = server => result,
        () = deadline => {
            warn!("Shutdown timeout elapsed, dropping remaining connections");
            Ok(())
        }
    }
}
