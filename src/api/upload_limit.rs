use poem::error::SizedLimitError;
use poem::http::header;
use poem::{Body, Endpoint, Middleware, Request, Result};
use tokio::io::AsyncReadExt;

/// Caps request bodies at `max_size` bytes
///
/// A declared `Content-Length` above the cap is rejected with 413 before the
/// body is touched. A body without one is cut off at the cap, so an oversized
/// multipart form fails to parse instead of being buffered whole.
pub struct UploadLimit {
    max_size: u64,
}

impl UploadLimit {
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }
}

impl<E: Endpoint> Middleware<E> for UploadLimit {
    type Output = UploadLimitEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        UploadLimitEndpoint {
            inner: ep,
            max_size: self.max_size,
        }
    }
}

/// Endpoint for the UploadLimit middleware
pub struct UploadLimitEndpoint<E> {
    inner: E,
    max_size: u64,
}

impl<E: Endpoint> Endpoint for UploadLimitEndpoint<E> {
    type Output = E::Output;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let declared = req
            .headers()
            .get(header::CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());

        if let Some(length) = declared.filter(|length| *length > self.max_size) {
            tracing::warn!(length, max_size = self.max_size, "Rejected oversized request body");
            return Err(SizedLimitError::PayloadTooLarge.into());
        }

        let body = req.take_body();
        req.set_body(Body::from_async_read(body.into_async_read().take(self.max_size)));

        self.inner.call(req).await
    }
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{handler, EndpointExt};

    use super::*;

    #[handler]
    async fn body_length(body: Body) -> Result<String> {
        Ok(body.into_vec().await?.len().to_string())
    }

    #[tokio::test]
    async fn test_declared_length_over_limit_is_rejected() {
        let client = TestClient::new(body_length.with(UploadLimit::new(4)));

        let response = client
            .post("/")
            .header("content-length", 9)
            .body("123456789")
            .send()
            .await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_undeclared_body_is_cut_at_limit() {
        let client = TestClient::new(body_length.with(UploadLimit::new(4)));

        let response = client.post("/").body("123456789").send().await;

        response.assert_status_is_ok();
        response.assert_text("4").await;
    }

    #[tokio::test]
    async fn test_body_within_limit_passes_through() {
        let client = TestClient::new(body_length.with(UploadLimit::new(16)));

        let response = client
            .post("/")
            .header("content-length", 9)
            .body("123456789")
            .send()
            .await;

        response.assert_status_is_ok();
        response.assert_text("9").await;
    }
}
