//! Minimal HTTP/1.1 server answering HEAD for integration tests.
//!
//! Records every request head it receives so tests can check what the probe
//! actually sent on the wire.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
pub struct HeadServerOptions {
    /// `Content-Length` to declare on 200 responses; `None` omits the header.
    pub content_length: Option<u64>,
    /// If true, a HEAD carrying `Range` gets 206; otherwise Range is ignored.
    pub honor_range: bool,
    /// If set, sleep this long before answering (to trip client timeouts).
    pub stall: Option<Duration>,
}

impl Default for HeadServerOptions {
    fn default() -> Self {
        Self {
            content_length: Some(65536),
            honor_range: true,
            stall: None,
        }
    }
}

pub struct HeadServer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl HeadServer {
    /// Raw request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Value of `name` in the most recent request, if it was sent.
    pub fn last_header(&self, name: &str) -> Option<String> {
        let requests = self.requests();
        let last = requests.last()?;
        last.lines().skip(1).find_map(|line| {
            let (n, v) = line.split_once(':')?;
            n.trim()
                .eq_ignore_ascii_case(name)
                .then(|| v.trim().to_string())
        })
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(opts: HeadServerOptions) -> HeadServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let seen = Arc::clone(&seen);
            thread::spawn(move || handle(stream, opts, &seen));
        }
    });
    HeadServer {
        url: format!("http://127.0.0.1:{}/file.bin", port),
        requests,
    }
}

/// A URL on a port nothing listens on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/file.bin", port)
}

fn handle(mut stream: TcpStream, opts: HeadServerOptions, seen: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s.to_string(),
        Err(_) => return,
    };
    seen.lock().unwrap().push(request.clone());

    if let Some(d) = opts.stall {
        thread::sleep(d);
    }

    let method = request.split_whitespace().next().unwrap_or("");
    if !method.eq_ignore_ascii_case("HEAD") {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nConnection: close\r\n\r\n");
        return;
    }

    let has_range = request
        .lines()
        .any(|l| l.to_ascii_lowercase().starts_with("range:"));
    let total = opts.content_length.unwrap_or(0);
    let response = if opts.honor_range && has_range {
        format!(
            "HTTP/1.1 206 Partial Content\r\nContent-Range: bytes 5-10/{}\r\nContent-Length: 6\r\nConnection: close\r\n\r\n",
            total
        )
    } else {
        let length = opts
            .content_length
            .map(|n| format!("Content-Length: {}\r\n", n))
            .unwrap_or_default();
        format!(
            "HTTP/1.1 200 OK\r\n{}ETag: \"v1\"\r\nConnection: close\r\n\r\n",
            length
        )
    };
    let _ = stream.write_all(response.as_bytes());
}
