use iced::widget::{container, image, text};
use iced::{Color, ContentFit, Element, Length};

use facematch_core::shared::constants::{
    RESULT_DISPLAY_HEIGHT, RESULT_DISPLAY_WIDTH, WAITING_PLACEHOLDER,
};
use facematch_core::upload::domain::upload_form::OutputRegion;

use crate::app::Message;

/// The output region: the placeholder until a submission succeeds, then the
/// returned image stretched to a fixed 500×500.
pub fn view<'a>(
    output: OutputRegion<'_>,
    handle: Option<&image::Handle>,
    tertiary: Color,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (output, handle) {
        (OutputRegion::Image(_), Some(handle)) => image(handle.clone())
            .width(Length::Fixed(RESULT_DISPLAY_WIDTH as f32))
            .height(Length::Fixed(RESULT_DISPLAY_HEIGHT as f32))
            .content_fit(ContentFit::Fill)
            .into(),
        _ => text(output.placeholder().unwrap_or(WAITING_PLACEHOLDER))
            .size(15.0)
            .color(tertiary)
            .into(),
    };

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([8, 0])
        .into()
}
