//! One-shot HTTP responder standing in for the web server that runs the
//! bootstrap script.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

/// What the responder saw when the request arrived
#[derive(Debug)]
pub struct Request {
    /// Request line, e.g. `GET /deploy.php?archive=deploy.tar.gz HTTP/1.1`
    pub request_line: String,
    /// Which of the watched files existed at request time
    pub present: Vec<bool>,
}

pub struct Responder {
    pub url: String,
    handle: JoinHandle<Request>,
}

impl Responder {
    /// Answer one request with `status` and `body`, recording which of
    /// `watch` existed at that moment
    pub fn start(status: &'static str, body: &'static str, watch: Vec<PathBuf>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            while !raw.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            let present = watch.iter().map(|p| p.exists()).collect();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let text = String::from_utf8_lossy(&raw);
            Request {
                request_line: text.lines().next().unwrap_or_default().to_string(),
                present,
            }
        });
        Self {
            url: format!("http://{}", addr),
            handle,
        }
    }

    pub fn finish(self) -> Request {
        self.handle.join().unwrap()
    }
}
