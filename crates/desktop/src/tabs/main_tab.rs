use iced::widget::{column, image, text, Space};
use iced::{Color, Element, Length, Theme};

use facematch_core::upload::domain::selected_file::SelectedFile;
use facematch_core::upload::domain::upload_form::UploadForm;

use crate::app::{Hover, Message};
use crate::theme::tertiary_color;
use crate::widgets::file_row::file_row;
use crate::widgets::{primary_button, result_view};

pub fn view<'a>(
    form: &UploadForm,
    result_handle: Option<&image::Handle>,
    hover: Hover,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);

    let submit = primary_button::primary_button(
        move || {
            text("Submit")
                .size(15.0)
                .color(Color::WHITE)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..iced::Font::DEFAULT
                })
                .width(Length::Fill)
                .align_x(iced::Alignment::Center)
                .into()
        },
        Message::Submit,
        hover.submit,
        Message::SubmitHover,
        [12, 24],
        Length::Fill,
    );

    column![
        heading("Upload a face"),
        Space::new().height(8),
        file_row(
            "Face",
            slot(form.face()),
            Message::SelectFace,
            hover.face,
            Message::FaceBrowseHover,
            theme,
        ),
        Space::new().height(20),
        heading("Upload a test image"),
        Space::new().height(8),
        file_row(
            "Test image",
            slot(form.test()),
            Message::SelectTest,
            hover.test,
            Message::TestBrowseHover,
            theme,
        ),
        Space::new().height(20),
        submit,
        Space::new().height(20),
        result_view::view(form.output(), result_handle, tertiary),
    ]
    .spacing(0)
    .into()
}

fn heading<'a>(label: &'static str) -> Element<'a, Message> {
    text(label)
        .size(18.0)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::DEFAULT
        })
        .into()
}

fn slot(file: Option<&SelectedFile>) -> Option<(&str, usize)> {
    file.map(|f| (f.name(), f.len()))
}
