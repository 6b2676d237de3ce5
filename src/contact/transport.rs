//! Delivery of contact submissions to the site backend

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use super::ContactSubmission;
use crate::{Error, Result};

/// Route the form posts to, relative to the site origin
pub const ENDPOINT_PATH: &str = "/api/contact";

/// Sends one submission. Any failure, transport or status, is an `Err`.
pub trait ContactTransport {
    fn send(&self, submission: &ContactSubmission) -> Result<()>;
}

/// `POST /api/contact` with a JSON body over HTTP
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
}

impl HttpTransport {
    /// Transport for the site at `origin`, e.g. `https://qsub.net`
    pub fn new(origin: &str) -> Result<Self> {
        let endpoint = Url::parse(origin)
            .and_then(|base| base.join(ENDPOINT_PATH))
            .map_err(|e| Error::NetworkError(format!("Invalid site origin '{}': {}", origin, e)))?;

        let client = Client::builder()
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactTransport for HttpTransport {
    fn send(&self, submission: &ContactSubmission) -> Result<()> {
        debug!("POST {}", self.endpoint);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::NetworkError(format!(
                "{} responded with {}",
                self.endpoint, status
            )));
        }
        Ok(())
    }
}
