/// Endpoint of the face-matching service that receives both images.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/submit";

/// Multipart part names expected by the service.
pub const FACE_PART_NAME: &str = "faceImg";
pub const TEST_PART_NAME: &str = "testImg";

/// Fixed on-screen size of the result image, regardless of its decoded size.
pub const RESULT_DISPLAY_WIDTH: u32 = 500;
pub const RESULT_DISPLAY_HEIGHT: u32 = 500;

pub const WAITING_PLACEHOLDER: &str = "Waiting for output...";
