//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use legacy_guard::{GuardConfig, GuardServer, Shutdown};

/// Start a guard server on the configured bind address.
///
/// Returns the shutdown handle; tests trigger it when done.
pub async fn start_guard(config: GuardConfig) -> Shutdown {
    let addr: SocketAddr = config.listener.bind_address.parse().unwrap();
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = GuardServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown
}

/// Send a raw HTTP request and return the full response as a string.
///
/// High-level clients refuse to speak HTTP/1.0, so the version-blocking
/// paths can only be exercised over a plain socket. Requests should ask
/// for connection close (implicit for HTTP/1.0) so the read terminates.
pub async fn send_raw(addr: SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}
