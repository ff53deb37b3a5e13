use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::shared::constants::DEFAULT_ENDPOINT;
use crate::upload::domain::image_submitter::{ImageSubmitter, SubmitError};
use crate::upload::domain::result_image::ResultImage;
use crate::upload::domain::submission_payload::SubmissionPayload;

/// Posts both images as `multipart/form-data` and reads the reply as raw bytes.
///
/// Blocking: run it off the UI thread. No timeout is set, a request waits
/// until the network resolves or errors.
pub struct HttpImageSubmitter {
    client: Client,
    endpoint: String,
}

impl HttpImageSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SubmitError> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| SubmitError::Request {
                url: endpoint.clone(),
                source: Box::new(e),
            })?;
        Ok(Self { client, endpoint })
    }

    /// Submitter for the local matching service.
    pub fn local() -> Result<Self, SubmitError> {
        Self::new(DEFAULT_ENDPOINT)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(&self, payload: &SubmissionPayload) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for (name, file) in payload.parts() {
            let part = match file {
                Some(file) => Part::bytes(file.bytes().to_vec())
                    .file_name(file.name().to_string())
                    .mime_str(file.mime_type())
                    .map_err(|e| SubmitError::Request {
                        url: self.endpoint.clone(),
                        source: Box::new(e),
                    })?,
                None => Part::bytes(Vec::new()),
            };
            form = form.part(name, part);
        }
        Ok(form)
    }
}

impl ImageSubmitter for HttpImageSubmitter {
    fn submit(&self, payload: &SubmissionPayload) -> Result<ResultImage, SubmitError> {
        let form = self.build_form(payload)?;

        log::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| SubmitError::Request {
                url: self.endpoint.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes().map_err(|e| SubmitError::Body {
            url: self.endpoint.clone(),
            source: Box::new(e),
        })?;

        Ok(ResultImage::new(bytes.to_vec(), content_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::domain::selected_file::SelectedFile;
    use wiremock::matchers::{body_string_contains, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

    fn both_files() -> SubmissionPayload {
        SubmissionPayload::new(
            Some(SelectedFile::new("a.jpg", b"face-bytes".to_vec())),
            Some(SelectedFile::new("b.jpg", b"test-bytes".to_vec())),
        )
    }

    /// The blocking client must not run on an async worker thread.
    async fn submit_blocking(
        endpoint: String,
        payload: SubmissionPayload,
    ) -> Result<ResultImage, SubmitError> {
        tokio::task::spawn_blocking(move || HttpImageSubmitter::new(endpoint)?.submit(&payload))
            .await
            .unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_submit_posts_both_parts_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .and(body_string_contains(
                "name=\"faceImg\"; filename=\"a.jpg\"",
            ))
            .and(body_string_contains(
                "name=\"testImg\"; filename=\"b.jpg\"",
            ))
            .and(body_string_contains("face-bytes"))
            .and(body_string_contains("test-bytes"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES.to_vec(), "image/png"))
            .expect(1)
            .mount(&server)
            .await;

        let result = submit_blocking(format!("{}/submit", server.uri()), both_files())
            .await
            .unwrap();

        assert_eq!(result.bytes(), PNG_BYTES);
        assert_eq!(result.content_type(), Some("image/png"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_absent_slot_is_sent_as_empty_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES.to_vec(), "image/png"))
            .mount(&server)
            .await;

        let payload = SubmissionPayload::new(
            None,
            Some(SelectedFile::new("b.jpg", b"test-bytes".to_vec())),
        );
        submit_blocking(format!("{}/submit", server.uri()), payload)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"faceImg\"\r\n\r\n\r\n--"), "body was: {body}");
        assert!(body.contains("name=\"testImg\"; filename=\"b.jpg\""));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_error_status_is_submit_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = submit_blocking(format!("{}/submit", server.uri()), both_files()).await;

        match result {
            Err(SubmitError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_bad_request_is_submit_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;

        let payload = SubmissionPayload::new(
            None,
            Some(SelectedFile::new("b.jpg", b"test-bytes".to_vec())),
        );
        let result = submit_blocking(format!("{}/submit", server.uri()), payload).await;
        assert!(matches!(result, Err(SubmitError::Status { status: 400, .. })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_form_displays_service_reply() {
        use crate::upload::domain::upload_form::{OutputRegion, SubmitOutcome, UploadForm};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/submit"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(PNG_BYTES.to_vec(), "image/png"))
            .mount(&server)
            .await;
        let endpoint = format!("{}/submit", server.uri());

        let form = tokio::task::spawn_blocking(move || {
            let mut form = UploadForm::new();
            form.select_face(Some(SelectedFile::new("a.jpg", b"face".to_vec())));
            form.select_test(Some(SelectedFile::new("b.jpg", b"test".to_vec())));
            let submitter = HttpImageSubmitter::new(endpoint).unwrap();
            assert_eq!(form.submit_with(&submitter), SubmitOutcome::Displayed);
            form
        })
        .await
        .unwrap();

        match form.output() {
            OutputRegion::Image(image) => assert_eq!(image.bytes(), PNG_BYTES),
            OutputRegion::Waiting => panic!("expected the returned image"),
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_form_keeps_placeholder_on_rejection() {
        use crate::upload::domain::upload_form::{SubmitOutcome, UploadForm};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;
        let endpoint = format!("{}/submit", server.uri());

        let form = tokio::task::spawn_blocking(move || {
            let mut form = UploadForm::new();
            form.select_test(Some(SelectedFile::new("b.jpg", b"test".to_vec())));
            let submitter = HttpImageSubmitter::new(endpoint).unwrap();
            assert_eq!(form.submit_with(&submitter), SubmitOutcome::Failed);
            form
        })
        .await
        .unwrap();

        assert_eq!(form.output().placeholder(), Some("Waiting for output..."));
    }

    #[test]
    fn test_unreachable_endpoint_is_request_error() {
        let submitter = HttpImageSubmitter::new("http://127.0.0.1:1/submit").unwrap();
        let result = submitter.submit(&both_files());
        assert!(matches!(result, Err(SubmitError::Request { .. })));
    }

    #[test]
    fn test_local_uses_default_endpoint() {
        let submitter = HttpImageSubmitter::local().unwrap();
        assert_eq!(submitter.endpoint(), "http://localhost:8080/submit");
    }
}
