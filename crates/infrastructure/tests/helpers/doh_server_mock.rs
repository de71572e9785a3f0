use super::dns_server_mock::{build_response, parse_question, MockZone, SeenQuestion};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

/// How the mock DoH endpoint behaves at the HTTP layer.
#[derive(Debug, Clone)]
pub struct HttpBehavior {
    pub status: u16,
    /// Pause before the status line and headers
    pub header_delay: Duration,
    /// Pause between the headers and the body
    pub body_delay: Duration,
}

impl Default for HttpBehavior {
    fn default() -> Self {
        Self {
            status: 200,
            header_delay: Duration::ZERO,
            body_delay: Duration::ZERO,
        }
    }
}

impl HttpBehavior {
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_delays(mut self, header_delay: Duration, body_delay: Duration) -> Self {
        self.header_delay = header_delay;
        self.body_delay = body_delay;
        self
    }
}

/// Plain-HTTP DNS-over-HTTPS endpoint on 127.0.0.1 (RFC 8484 POST only),
/// answering from a [`MockZone`].
pub struct MockDohServer {
    addr: SocketAddr,
    seen: Arc<Mutex<Vec<SeenQuestion>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDohServer {
    pub async fn start(zone: MockZone, behavior: HttpBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let seen = Arc::new(Mutex::new(Vec::new()));
        let journal = Arc::clone(&seen);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let zone = Arc::new(zone);
        let behavior = Arc::new(behavior);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let journal = Arc::clone(&journal);
                        let zone = Arc::clone(&zone);
                        let behavior = Arc::clone(&behavior);
                        tokio::spawn(async move {
                            let _ = serve(stream, &zone, &behavior, &journal).await;
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            seen,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Endpoint URL; plain HTTP so no certificate is needed.
    pub fn url(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn seen(&self) -> Vec<SeenQuestion> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn serve(
    mut stream: TcpStream,
    zone: &MockZone,
    behavior: &HttpBehavior,
    journal: &Mutex<Vec<SeenQuestion>>,
) -> std::io::Result<()> {
    let body = read_request_body(&mut stream).await?;

    let payload = match parse_question(&body) {
        Some((question, question_end)) => {
            journal.lock().unwrap().push(question.clone());
            build_response(zone, &body[..question_end], &question)
        }
        None => Vec::new(),
    };

    tokio::time::sleep(behavior.header_delay).await;

    let head = format!(
        "HTTP/1.1 {} Mock\r\nContent-Type: application/dns-message\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n",
        behavior.status,
        payload.len()
    );
    stream.write_all(head.as_bytes()).await?;
    stream.flush().await?;

    tokio::time::sleep(behavior.body_delay).await;

    stream.write_all(&payload).await?;
    stream.flush().await?;
    stream.shutdown().await
}

/// Reads headers up to the blank line, then `Content-Length` bytes of body.
async fn read_request_body(stream: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(Vec::new());
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let end = (header_end + content_length).min(buf.len());
    Ok(buf[header_end..end].to_vec())
}
