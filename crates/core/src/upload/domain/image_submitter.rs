use thiserror::Error;

use crate::upload::domain::result_image::ResultImage;
use crate::upload::domain::submission_payload::SubmissionPayload;

/// Any way a submission can fail. Callers treat every variant alike.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Sends both images to the matching service and returns the image it produces.
pub trait ImageSubmitter: Send + Sync {
    fn submit(&self, payload: &SubmissionPayload) -> Result<ResultImage, SubmitError>;
}
