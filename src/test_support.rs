//! Loopback HTTP stub for exercising the client without a real API.

use std::net::TcpListener as StdListener;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// Serves one canned response to every connection and records request lines.
pub struct StubServer {
    pub base: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl StubServer {
    /// `status` is the reason-phrase form used on the wire, e.g. `"200 OK"`.
    pub async fn start(status: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let response = Arc::new(format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ));
        let (tx, requests) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let response = Arc::clone(&response);
                let tx = tx.clone();
                tokio::spawn(async move {
                    let _ = respond(stream, &response, &tx).await;
                });
            }
        });

        Self {
            base: format!("http://{addr}"),
            requests,
        }
    }

    /// First line of the next request received, e.g. `GET /path HTTP/1.1`.
    pub async fn next_request(&mut self) -> String {
        self.requests.recv().await.unwrap()
    }
}

async fn respond(
    mut stream: TcpStream,
    response: &str,
    tx: &mpsc::UnboundedSender<String>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    // GET carries no body, so the header terminator ends the request.
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let request = String::from_utf8_lossy(&buf);
    let _ = tx.send(request.lines().next().unwrap_or_default().to_string());

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}

/// Base URL of a loopback port with nothing listening on it.
pub fn refused_base() -> String {
    let listener = StdListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
