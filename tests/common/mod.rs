use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/*-------------------------------------------------------------------------------------------------
  Test Meta Server
-------------------------------------------------------------------------------------------------*/

/// A local HTTP server answering every request with the same canned response, or never
/// answering at all. Counts the requests it has served and keeps their header lines.
pub struct MetaServer {
    url: String,
    requests: Arc<AtomicUsize>,
    headers: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MetaServer {
    pub fn start(status: u16, body: &'static str) -> Self {
        Self::spawn(Some((status, body)))
    }

    /// Accepts connections and reads requests but never sends a response.
    pub fn unresponsive() -> Self {
        Self::spawn(None)
    }

    fn spawn(response: Option<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/meta", listener.local_addr().unwrap());
        let requests = Arc::new(AtomicUsize::new(0));
        let headers = Arc::new(Mutex::new(Vec::new()));

        let counter = Arc::clone(&requests);
        let header_lines = Arc::clone(&headers);
        thread::spawn(move || {
            // Held open so unanswered clients wait for their timeout
            let mut unanswered = Vec::new();

            for stream in listener.incoming() {
                let Ok(stream) = stream else { break };

                // Consume the request head, keeping the header lines
                let mut reader = BufReader::new(&stream);
                let mut line = String::new();
                while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
                    header_lines
                        .lock()
                        .unwrap()
                        .push(line.trim_end().to_lowercase());
                    line.clear();
                }
                drop(reader);

                counter.fetch_add(1, Ordering::SeqCst);

                let Some((status, body)) = response else {
                    unanswered.push(stream);
                    continue;
                };

                let reply = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason_phrase(status),
                    body.len(),
                    body
                );
                let _ = (&stream).write_all(reply.as_bytes());
            }
        });

        Self {
            url,
            requests,
            headers,
        }
    }

    pub fn ok(body: &'static str) -> Self {
        Self::start(200, body)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Request head lines received so far (request lines and headers), lowercased.
    pub fn headers(&self) -> Vec<String> {
        self.headers.lock().unwrap().clone()
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A URL on a local port with nothing listening.
#[allow(dead_code)]
pub fn refused_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    format!("http://127.0.0.1:{port}/meta")
}

/*-------------------------------------------------------------------------------------------------
  Test Meta Documents
-------------------------------------------------------------------------------------------------*/

/// Every category publishes the same range.
pub const SHARED_RANGE_META: &str = r#"{
  "verifiable_password_authentication": false,
  "hooks": ["192.30.252.0/22"],
  "web": ["192.30.252.0/22"],
  "api": ["192.30.252.0/22"],
  "git": ["192.30.252.0/22"],
  "packages": ["192.30.252.0/22"],
  "pages": ["192.30.252.0/22"],
  "importer": ["192.30.252.0/22"],
  "actions": ["192.30.252.0/22"],
  "dependabot": ["192.30.252.0/22"],
  "actions_ipv4": ["192.30.252.0/22"]
}"#;

/// Only the API and Git categories publish a parsable range.
#[allow(dead_code)]
pub const INVALID_CIDR_META: &str = r#"{
  "hooks": ["invalid-cidr"],
  "web": ["not-a-cidr"],
  "api": ["192.30.252.0/22"],
  "git": ["192.30.252.0/22"]
}"#;

/// Malformed entries ahead of the first parsable range, in Git.
#[allow(dead_code)]
pub const MIXED_CIDR_META: &str = r#"{
  "hooks": ["invalid-cidr", "also-invalid", "2a0a:a440::/29"],
  "web": ["not-a-cidr"],
  "api": ["invalid"],
  "git": ["192.30.252.0/22"]
}"#;
