use std::io::Read;
use std::time::Duration;

use tracing::debug;

use crate::error::{FetchError, Result};

/// A response whose body has not been read yet.
pub struct HttpResponse {
    /// Value of the `Content-Length` header, if the server sent one.
    pub content_length: Option<u64>,
    pub body: Box<dyn Read + Send>,
}

impl HttpResponse {
    pub fn new(content_length: Option<u64>, body: impl Read + Send + 'static) -> Self {
        Self {
            content_length,
            body: Box::new(body),
        }
    }
}

/// Issues a streaming GET. Implementations must turn non-success statuses
/// into [`FetchError::Status`].
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse>;
}

/// Blocking reqwest client used by the binary.
pub struct ReqwestClient {
    inner: reqwest::blocking::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self> {
        // The whole-request timeout stays off: the archive is several GiB.
        let inner = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .user_agent(concat!("cubicasa-fetch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        debug!(url, "sending GET");
        let resp = self.inner.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let content_length = resp.content_length();
        debug!(url, status = status.as_u16(), ?content_length, "response headers received");
        Ok(HttpResponse::new(content_length, resp))
    }
}
