use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::client::HttpClient;
use crate::error::{FetchError, Result};
use crate::progress::ProgressFn;

/// Bytes read from the response body per write. Every chunk is full except
/// possibly the last one.
pub const CHUNK_SIZE: usize = 1024;

/// Byte counts of a finished download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transferred {
    pub bytes: u64,
    /// Content-length announced by the server, if any.
    pub content_length: Option<u64>,
}

/// Streams a remote file to disk, reporting progress after every chunk.
pub struct Downloader {
    client: Box<dyn HttpClient>,
    /// Optional progress callback.
    pub progress: Option<ProgressFn>,
}

impl Downloader {
    pub fn new(client: Box<dyn HttpClient>, progress: Option<ProgressFn>) -> Self {
        Self { client, progress }
    }

    /// Download `url` into `dest`, creating or truncating the file.
    ///
    /// Nothing is cleaned up on failure, so an error mid-stream leaves a
    /// truncated file behind.
    pub fn download(&self, url: &str, dest: &Path) -> Result<Transferred> {
        let resp = self.client.get(url)?;
        let content_length = resp.content_length;
        let total = content_length.unwrap_or(0);
        let mut body = resp.body;

        let file = File::create(dest).map_err(|e| FetchError::io(dest, e))?;
        let mut out = BufWriter::new(file);

        let mut buf = [0u8; CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let n = read_chunk(&mut body, &mut buf).map_err(|e| FetchError::Transfer {
                url: url.to_owned(),
                source: e,
            })?;
            if n == 0 {
                break;
            }

            out.write_all(&buf[..n]).map_err(|e| FetchError::io(dest, e))?;
            written += n as u64;

            if let Some(progress) = &self.progress {
                progress(url, written, total, false);
            }
        }
        out.flush().map_err(|e| FetchError::io(dest, e))?;

        if let Some(progress) = &self.progress {
            progress(url, written, total, true);
        }

        debug!(url, written, total, "download finished");
        Ok(Transferred {
            bytes: written,
            content_length,
        })
    }
}

/// Fill `buf` from `body`, stopping early only at end of stream.
fn read_chunk(body: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match body.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
