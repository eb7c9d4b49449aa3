//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed table of paths, each with a status, body and optional
//! `Location` or artificial delay. Unknown paths get 404. The User-Agent of
//! every request is recorded.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct Route {
    pub status: u16,
    pub body: Vec<u8>,
    /// Sent as `Location` (for 3xx routes).
    pub location: Option<String>,
    /// Sleep before answering (to trigger client timeouts).
    pub delay: Option<Duration>,
}

impl Route {
    pub fn ok(body: &[u8]) -> Self {
        Self {
            status: 200,
            body: body.to_vec(),
            ..Self::default()
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            status: 302,
            location: Some(location.to_string()),
            ..Self::default()
        }
    }

    pub fn slow(body: &[u8], delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::ok(body)
        }
    }
}

pub struct ImageServer {
    /// e.g. "http://127.0.0.1:12345"
    pub base: String,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.user_agents.lock().unwrap().len()
    }
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(p, r)| (p.to_string(), r))
            .collect(),
    );
    let user_agents = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&user_agents);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, &routes, &seen));
        }
    });
    ImageServer {
        base: format!("http://127.0.0.1:{}", port),
        user_agents,
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    routes: &HashMap<String, Route>,
    seen: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    let (path, user_agent) = parse_request(&request);
    seen.lock().unwrap().push(user_agent);

    let missing = Route::status(404);
    let route = routes.get(&path).unwrap_or(&missing);
    if let Some(delay) = route.delay {
        thread::sleep(delay);
    }

    let location = route
        .location
        .as_ref()
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\n{}Connection: close\r\n\r\n",
        route.status,
        reason(route.status),
        route.body.len(),
        location
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(&route.body);
}

/// Returns (path including query, User-Agent header value).
fn parse_request(request: &str) -> (String, String) {
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let user_agent = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("user-agent"))
        .map(|(_, v)| v.trim().to_string())
        .unwrap_or_default();
    (path, user_agent)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
