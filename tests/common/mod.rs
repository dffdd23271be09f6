//! Helpers shared by the integration tests:
//! in-memory ZIP archives and a tiny HTTP server.

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds small ZIP archives in memory, entries in the order they're added.
///
/// `ZipWriter` stores names as given,
/// which is exactly what we want for testing extraction.
pub struct ZipBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    corrupt: Vec<Vec<u8>>,
}

impl Default for ZipBuilder {
    fn default() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            corrupt: Vec::new(),
        }
    }
}

fn options(method: CompressionMethod) -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(method)
}

impl ZipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory entry.
    pub fn dir(mut self, name: &str) -> Self {
        self.writer
            .add_directory(name, options(CompressionMethod::Stored))
            .unwrap();
        self
    }

    /// Adds an uncompressed file.
    pub fn stored(self, name: &str, contents: &[u8]) -> Self {
        self.file(name, contents, CompressionMethod::Stored)
    }

    /// Adds a DEFLATEd file.
    pub fn deflated(self, name: &str, contents: &[u8]) -> Self {
        self.file(name, contents, CompressionMethod::Deflated)
    }

    /// Adds a stored file whose payload no longer matches its recorded CRC.
    pub fn corrupted(mut self, name: &str, contents: &[u8]) -> Self {
        assert!(!contents.is_empty());
        self.corrupt.push(contents.to_vec());
        self.stored(name, contents)
    }

    fn file(mut self, name: &str, contents: &[u8], method: CompressionMethod) -> Self {
        self.writer.start_file(name, options(method)).unwrap();
        self.writer.write_all(contents).unwrap();
        self
    }

    pub fn finish(self) -> Vec<u8> {
        let mut out = self.writer.finish().unwrap().into_inner();
        // Stored payloads appear verbatim; flip a bit in each one to be corrupted.
        for payload in &self.corrupt {
            let at = out
                .windows(payload.len())
                .position(|w| w == payload.as_slice())
                .expect("Corrupted payload not found in archive");
            out[at] ^= 0x01;
        }
        out
    }
}

/// Serves `body` with the given status line to every request, forever.
/// Returns the server's base URL (`http://127.0.0.1:<port>/`).
pub fn serve(status: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Couldn't bind test server");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || respond(stream, status, &body));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn respond(mut stream: TcpStream, status: &str, body: &[u8]) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    // Read until the end of the request headers. GETs have no body.
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }
    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

/// A URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Couldn't bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/archive.zip", port)
}
