use std::sync::Arc;
use std::thread;

use crossbeam_channel::Receiver;

use facematch_core::upload::domain::image_submitter::{ImageSubmitter, SubmitError};
use facematch_core::upload::domain::result_image::ResultImage;
use facematch_core::upload::domain::upload_form::{PendingSubmission, SubmissionId};

/// Sent from the worker thread to the UI once the request resolves.
#[derive(Debug)]
pub struct SubmitFinished {
    pub id: SubmissionId,
    pub response: Result<ResultImage, SubmitError>,
}

/// Run one submission on a background thread. The request cannot be aborted;
/// dropping the receiver only discards its response.
pub fn spawn(
    submitter: Arc<dyn ImageSubmitter>,
    pending: PendingSubmission,
) -> Receiver<SubmitFinished> {
    let (tx, rx) = crossbeam_channel::bounded::<SubmitFinished>(1);

    thread::spawn(move || {
        log::debug!("Submitting {}", pending.id);
        let response = submitter.submit(&pending.payload);
        let _ = tx.send(SubmitFinished {
            id: pending.id,
            response,
        });
    });

    rx
}
