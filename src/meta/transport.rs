use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};
use std::io::Write;

use crate::error::Error;

/// HTTP GET access used by [`MetaClient`](crate::MetaClient).
///
/// Every non-success status is reported as [`Error::HttpStatus`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches the whole response body.
    async fn get(&self, url: &str) -> Result<Bytes, Error>;

    /// Streams the response body into `sink`, returning the number of bytes written.
    async fn download(&self, url: &str, sink: &mut (dyn Write + Send)) -> Result<u64, Error>;
}

pub struct ReqwestTransport {
    web_client: Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        Ok(Self {
            web_client: Client::builder().user_agent(user_agent).build()?,
        })
    }

    async fn send(&self, url: &str) -> Result<Response, Error> {
        tracing::debug!("GET {url}");
        let response = self.web_client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<Bytes, Error> {
        Ok(self.send(url).await?.bytes().await?)
    }

    async fn download(&self, url: &str, sink: &mut (dyn Write + Send)) -> Result<u64, Error> {
        let mut response = self.send(url).await?;
        let mut written = 0u64;
        while let Some(chunk) = response.chunk().await? {
            sink.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        Ok(written)
    }
}
