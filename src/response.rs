use color_eyre::{eyre::bail, Result};
use reqwest::{header::CONTENT_TYPE, Response, StatusCode};

/// Adds directory-index checks to `reqwest::Response`.
pub trait ResponseExt {
    /// Returns true if the response has a `Content-Type` header indicating it is HTML.
    fn is_html(&self) -> bool;

    /// Fails unless the server answered with `200 OK`.
    fn verify(&self) -> Result<()>;
}

impl ResponseExt for Response {
    fn is_html(&self) -> bool {
        self.headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .map(|t| t.starts_with("text/html"))
            .unwrap_or(false)
    }

    fn verify(&self) -> Result<()> {
        let status = self.status();
        if status != StatusCode::OK {
            bail!("Responded with status code {status}");
        }
        Ok(())
    }
}
