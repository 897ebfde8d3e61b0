//! Minimal threaded HTTP/1.1 server for integration tests.
//!
//! Every request is answered by a caller-supplied handler that sees the
//! request target (path + query) and the server's own base URL, so fixtures
//! can point `videoUrl` back at the same server. Requests are counted and
//! their heads recorded.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    /// Sleep before answering (simulates a slow backend).
    pub delay: Duration,
}

impl Reply {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay: Duration::ZERO,
        }
    }

    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: "video/mp4",
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: Vec::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// JSON body of a successful `/api/video` response.
pub fn success_body(filename: &str, video_url: &str) -> String {
    format!(
        r#"{{"status":"success","data":{{"filename":"{filename}","width":"640","height":"1136","videoUrl":"{video_url}"}}}}"#
    )
}

pub fn error_body(message: &str) -> String {
    format!(r#"{{"status":"error","message":"{message}"}}"#)
}

pub struct ApiServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    heads: Arc<Mutex<Vec<String>>>,
}

impl ApiServer {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw request heads, in arrival order.
    pub fn heads(&self) -> Vec<String> {
        self.heads.lock().unwrap().clone()
    }

    /// Request targets (path + query), in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.heads()
            .iter()
            .map(|h| request_target(h).to_string())
            .collect()
    }

    /// `base_url` joined with `path` (which starts with `/`).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start<F>(handler: F) -> ApiServer
where
    F: Fn(&str, &str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let base_url = format!("http://127.0.0.1:{}", port);

    let hits = Arc::new(AtomicUsize::new(0));
    let heads = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    {
        let hits = Arc::clone(&hits);
        let heads = Arc::clone(&heads);
        let base_url = base_url.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let hits = Arc::clone(&hits);
                let heads = Arc::clone(&heads);
                let handler = Arc::clone(&handler);
                let base_url = base_url.clone();
                thread::spawn(move || {
                    if let Some(head) = read_head(&stream) {
                        hits.fetch_add(1, Ordering::SeqCst);
                        heads.lock().unwrap().push(head.clone());
                        let reply = (handler.as_ref())(request_target(&head), &base_url);
                        write_reply(stream, reply);
                    }
                });
            }
        });
    }

    ApiServer {
        base_url,
        hits,
        heads,
    }
}

/// A port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn read_head(mut stream: &TcpStream) -> Option<String> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    if buf.is_empty() {
        return None;
    }
    String::from_utf8(buf).ok()
}

fn request_target(head: &str) -> &str {
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}

fn write_reply(mut stream: TcpStream, reply: Reply) {
    if !reply.delay.is_zero() {
        thread::sleep(reply.delay);
    }
    let reason = match reply.status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        reply.status,
        reason,
        reply.content_type,
        reply.body.len()
    );
    let _ = stream.set_write_timeout(Some(Duration::from_secs(5)));
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&reply.body);
    let _ = stream.flush();
}
