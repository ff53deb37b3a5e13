use crate::shared::constants::{FACE_PART_NAME, TEST_PART_NAME};
use crate::upload::domain::selected_file::SelectedFile;

/// Snapshot of both file slots at the moment of submission.
///
/// Always yields exactly two parts; an absent slot becomes an empty part.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub face: Option<SelectedFile>,
    pub test: Option<SelectedFile>,
}

impl SubmissionPayload {
    pub fn new(face: Option<SelectedFile>, test: Option<SelectedFile>) -> Self {
        Self { face, test }
    }

    /// `(part name, file)` pairs in wire order.
    pub fn parts(&self) -> [(&'static str, Option<&SelectedFile>); 2] {
        [
            (FACE_PART_NAME, self.face.as_ref()),
            (TEST_PART_NAME, self.test.as_ref()),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.face.is_some() && self.test.is_some()
    }
}
