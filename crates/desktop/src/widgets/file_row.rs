use iced::widget::{column, container, row, text, Space};
use iced::{Color, Element, Length, Theme};

use crate::app::Message;
use crate::theme::{surface_color, tertiary_color};
use crate::widgets::secondary_button;

const CORNER_RADIUS: f32 = 12.0;

/// One file slot: label, the chosen file's name (or a hint), and a
/// "Choose…" button that opens the picker.
pub fn file_row<'a>(
    label: &str,
    file: Option<(&str, usize)>,
    on_browse: Message,
    hovered: bool,
    on_hover: impl Fn(bool) -> Message + 'a,
    theme: &Theme,
) -> Element<'a, Message> {
    let tertiary = tertiary_color(theme);
    let surface = surface_color(theme);
    let border = Color {
        a: if hovered { 0.18 } else { 0.10 },
        ..theme.palette().text
    };

    let display: Element<'a, Message> = match file {
        Some((name, len)) => row![
            text(name.to_owned())
                .size(16.0)
                .font(iced::Font {
                    weight: iced::font::Weight::Medium,
                    ..iced::Font::DEFAULT
                }),
            text(format_size(len))
                .size(13.0)
                .color(tertiary),
        ]
        .spacing(8)
        .align_y(iced::Alignment::Center)
        .into(),
        None => text("No file selected")
            .size(16.0)
            .color(tertiary)
            .into(),
    };

    let btn = secondary_button::secondary_button(
        move || text("Choose\u{2026}").size(14.0).into(),
        on_browse,
        hovered,
        on_hover,
        [6, 14],
    );

    let label_text = text(label.to_uppercase())
        .size(12.0)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..iced::Font::DEFAULT
        })
        .color(tertiary);

    let info = column![label_text, Space::new().height(2), display].width(Length::Fill);

    container(row![info, btn].spacing(8).align_y(iced::Alignment::Center))
        .padding([14, 16])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: iced::border::Border {
                color: border,
                width: 1.0,
                radius: CORNER_RADIUS.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// Human-readable byte count for the file rows.
pub fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.0} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}
