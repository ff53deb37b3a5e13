use iced::widget::{column, text, Space};
use iced::Element;

use facematch_core::shared::constants::DEFAULT_ENDPOINT;

use crate::app::Message;

pub fn view() -> Element<'static, Message> {
    let version = env!("CARGO_PKG_VERSION");

    column![
        text("FaceMatch").size(22.0),
        Space::new().height(4),
        text(format!("Version {version}")).size(13.0),
        Space::new().height(12),
        text(
            "Pick a photo of a face and a test image, then press Submit. \
             The matching service looks for that face in the test image and \
             sends back the test image with every recognised face boxed."
        )
        .size(13.0),
        Space::new().height(16),
        text(format!("Matching service: {DEFAULT_ENDPOINT}")).size(13.0),
    ]
    .spacing(0)
    .into()
}
