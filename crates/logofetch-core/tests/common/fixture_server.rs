//! Minimal HTTP/1.1 server serving canned routes for pipeline tests.
//!
//! Each route maps a request path to one response. Per-route and total
//! hit counts are recorded so tests can assert how often the pipeline
//! actually touched the network. A route can be told to answer 503 a
//! number of times before its real response, which exercises retries.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// One canned response.
#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    /// 503 responses served before the real one.
    pub failures_before_success: usize,
    /// Pause before answering.
    pub delay: Duration,
}

impl Route {
    pub fn ok(content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.into(),
            failures_before_success: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
            failures_before_success: 0,
            delay: Duration::ZERO,
        }
    }

    pub fn flaky(content_type: &str, body: impl Into<Vec<u8>>, failures: usize) -> Self {
        let mut route = Self::ok(content_type, body);
        route.failures_before_success = failures;
        route
    }

    pub fn slow(content_type: &str, body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        let mut route = Self::ok(content_type, body);
        route.delay = delay;
        route
    }
}

struct RouteState {
    route: Route,
    hits: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

/// Handle to a running fixture server. The server lives until the
/// process exits; tests just drop the handle.
pub struct FixtureServer {
    base_url: String,
    routes: Arc<HashMap<String, RouteState>>,
    total_hits: Arc<AtomicUsize>,
}

impl FixtureServer {
    /// Starts a server on an ephemeral port serving `routes`.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();

        let routes: Arc<HashMap<String, RouteState>> = Arc::new(
            routes
                .into_iter()
                .map(|(path, route)| {
                    (
                        path.to_string(),
                        RouteState {
                            route,
                            hits: AtomicUsize::new(0),
                            last_query: Mutex::new(None),
                        },
                    )
                })
                .collect(),
        );
        let total_hits = Arc::new(AtomicUsize::new(0));

        {
            let routes = Arc::clone(&routes);
            let total_hits = Arc::clone(&total_hits);
            thread::spawn(move || {
                for stream in listener.incoming().flatten() {
                    let routes = Arc::clone(&routes);
                    let total_hits = Arc::clone(&total_hits);
                    thread::spawn(move || handle(stream, &routes, &total_hits));
                }
            });
        }

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            routes,
            total_hits,
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Requests seen for `path` (query excluded from matching).
    pub fn hits(&self, path: &str) -> usize {
        self.routes
            .get(path)
            .map(|state| state.hits.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Requests seen across all paths, known or not.
    pub fn total_hits(&self) -> usize {
        self.total_hits.load(Ordering::SeqCst)
    }

    /// Raw query string of the most recent request for `path`.
    pub fn last_query(&self, path: &str) -> Option<String> {
        self.routes
            .get(path)
            .and_then(|state| state.last_query.lock().unwrap().clone())
    }
}

fn handle(
    mut stream: TcpStream,
    routes: &HashMap<String, RouteState>,
    total_hits: &AtomicUsize,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let Some((method, target)) = parse_request_line(request) else {
        return;
    };

    total_hits.fetch_add(1, Ordering::SeqCst);
    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    };

    let Some(state) = routes.get(path) else {
        write_response(&mut stream, 404, None, b"", method == "HEAD");
        return;
    };

    let hit = state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query.map(|q| q.to_string());

    if hit < state.route.failures_before_success {
        write_response(&mut stream, 503, None, b"", method == "HEAD");
        return;
    }
    if !state.route.delay.is_zero() {
        thread::sleep(state.route.delay);
    }
    write_response(
        &mut stream,
        state.route.status,
        state.route.content_type.as_deref(),
        &state.route.body,
        method == "HEAD",
    );
}

/// Returns (method, request target) from the request line.
fn parse_request_line(request: &str) -> Option<(&str, &str)> {
    let line = request.lines().next()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?;
    let target = parts.next()?;
    Some((method, target))
}

fn write_response(
    stream: &mut TcpStream,
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
    head_only: bool,
) {
    let content_type_header = match content_type {
        Some(ct) => format!("Content-Type: {}\r\n", ct),
        None => String::new(),
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        reason(status),
        body.len(),
        content_type_header
    );
    let _ = stream.write_all(response.as_bytes());
    if !head_only {
        let _ = stream.write_all(body);
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
