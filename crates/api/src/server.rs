//! Listener binding and shutdown plumbing.

use std::io;
use std::net::{IpAddr, SocketAddr};

use tokio::net::TcpListener;

/// Upper bound on the bind retry loop. Kept finite so a pathological
/// environment cannot spin forever.
pub const MAX_BIND_ATTEMPTS: u32 = 100;

/// Bind a listener, walking up from `start_port` while ports are taken.
///
/// A port already in use is not fatal: the next higher port is tried, up
/// to [`MAX_BIND_ATTEMPTS`]. Any other bind error is returned to the
/// caller, which aborts startup.
pub async fn bind_with_retry(host: &str, start_port: u16) -> io::Result<(TcpListener, SocketAddr)> {
    let ip: IpAddr = host
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid HOST: {e}")))?;

    let mut port = start_port;
    for _ in 0..MAX_BIND_ATTEMPTS {
        let addr = SocketAddr::new(ip, port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                let bound = listener.local_addr()?;
                return Ok((listener, bound));
            }
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => {
                tracing::warn!(%addr, "Port in use, trying the next one");
                port = port.checked_add(1).ok_or_else(|| {
                    io::Error::new(io::ErrorKind::AddrInUse, "Ran out of ports to try")
                })?;
            }
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AddrInUse,
        format!("No free port within {MAX_BIND_ATTEMPTS} attempts of {start_port}"),
    ))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
