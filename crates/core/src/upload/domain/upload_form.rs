use crate::shared::constants::WAITING_PLACEHOLDER;
use crate::upload::domain::image_submitter::{ImageSubmitter, SubmitError};
use crate::upload::domain::result_image::ResultImage;
use crate::upload::domain::selected_file::SelectedFile;
use crate::upload::domain::submission_payload::SubmissionPayload;

/// Identifies one submission. Later submissions supersede earlier ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

impl SubmissionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submission that has been started but not yet answered.
#[derive(Clone, Debug)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub payload: SubmissionPayload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response replaced the displayed result.
    Displayed,
    /// The request failed; state is unchanged.
    Failed,
    /// A newer submission was started before this one finished; its
    /// response was discarded.
    Stale,
}

/// What the output region should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputRegion<'a> {
    Waiting,
    Image(&'a ResultImage),
}

impl OutputRegion<'_> {
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            OutputRegion::Waiting => Some(WAITING_PLACEHOLDER),
            OutputRegion::Image(_) => None,
        }
    }
}

/// State of the two-image upload form.
///
/// Transitions: no result → (successful submit) → has result → (successful
/// submit) → has result, previous one released. Failures never transition.
#[derive(Debug, Default)]
pub struct UploadForm {
    face: Option<SelectedFile>,
    test: Option<SelectedFile>,
    result: Option<ResultImage>,
    latest: u64,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the face slot. `None` means the picker was cancelled and
    /// leaves the slot as it was.
    pub fn select_face(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = file {
            log::debug!("Face image selected: {} ({} bytes)", file.name(), file.len());
            self.face = Some(file);
        }
    }

    /// Same contract as [`select_face`](Self::select_face), for the test slot.
    pub fn select_test(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = file {
            log::debug!("Test image selected: {} ({} bytes)", file.name(), file.len());
            self.test = Some(file);
        }
    }

    pub fn face(&self) -> Option<&SelectedFile> {
        self.face.as_ref()
    }

    pub fn test(&self) -> Option<&SelectedFile> {
        self.test.as_ref()
    }

    pub fn result(&self) -> Option<&ResultImage> {
        self.result.as_ref()
    }

    pub fn output(&self) -> OutputRegion<'_> {
        match &self.result {
            Some(image) => OutputRegion::Image(image),
            None => OutputRegion::Waiting,
        }
    }

    /// Snapshots both slots for sending. Empty slots are not rejected.
    pub fn begin_submit(&mut self) -> PendingSubmission {
        self.latest += 1;
        let id = SubmissionId(self.latest);
        let payload = SubmissionPayload::new(self.face.clone(), self.test.clone());
        if !payload.is_complete() {
            log::debug!("Submission {id} sent with an empty image slot");
        }
        PendingSubmission { id, payload }
    }

    /// Applies the response of a submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(
        &mut self,
        id: SubmissionId,
        response: Result<ResultImage, SubmitError>,
    ) -> SubmitOutcome {
        if id.0 != self.latest {
            log::debug!("Discarding response of superseded submission {id}");
            return SubmitOutcome::Stale;
        }
        match response {
            Ok(image) => {
                log::info!(
                    "File uploaded successfully, received {} bytes ({})",
                    image.len(),
                    image.content_type().unwrap_or("no content type")
                );
                if let Some(previous) = self.result.replace(image) {
                    log::debug!("Released previous result ({} bytes)", previous.len());
                }
                SubmitOutcome::Displayed
            }
            Err(e) => {
                log::error!("Error uploading file: {e}");
                SubmitOutcome::Failed
            }
        }
    }

    /// Runs a whole submission on the calling thread.
    pub fn submit_with(&mut self, submitter: &dyn ImageSubmitter) -> SubmitOutcome {
        let pending = self.begin_submit();
        let response = submitter.submit(&pending.payload);
        self.finish_submit(pending.id, response)
    }
}
