use std::time::Duration;

use iced::border::Border;
use iced::widget::{button, mouse_area};
use iced::{Color, Element, Theme};
use iced_anim::transition::Easing;
use iced_anim::AnimationBuilder;

use crate::theme::{surface_color, tertiary_color};

const CORNER_RADIUS: f32 = 8.0;
const ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Outlined button used for the "Choose…" controls of each file row.
pub fn secondary_button<'a, Message: Clone + 'a>(
    content: impl Fn() -> Element<'a, Message> + 'a,
    on_press: Message,
    hovered: bool,
    on_hover: impl Fn(bool) -> Message + 'a,
    padding: [u16; 2],
) -> Element<'a, Message> {
    let target = if hovered { 1.0_f32 } else { 0.0 };

    let animated: Element<'a, Message> = AnimationBuilder::new(target, move |t: f32| {
        let t = t.clamp(0.0, 1.0);
        button(content())
            .on_press(on_press.clone())
            .padding(padding)
            .style(move |theme: &Theme, status: button::Status| {
                let amount = if status == button::Status::Pressed {
                    1.0
                } else {
                    t
                };
                styled(theme, amount)
            })
            .into()
    })
    .animation(Easing::EASE_OUT.with_duration(ANIMATION_DURATION))
    .into();

    mouse_area(animated)
        .on_enter(on_hover(true))
        .on_exit(on_hover(false))
        .into()
}

fn styled(theme: &Theme, hover_amount: f32) -> button::Style {
    let p = theme.palette();
    let surface = surface_color(theme);
    let hover_bg = Color { a: 0.08, ..p.text };
    let border_base = Color { a: 0.15, ..p.text };
    let border_hover = tertiary_color(theme);

    button::Style {
        background: Some(lerp_color(surface, blend(surface, hover_bg), hover_amount).into()),
        text_color: Color { a: 0.7, ..p.text },
        border: Border {
            color: lerp_color(border_base, border_hover, hover_amount),
            width: 1.0,
            radius: CORNER_RADIUS.into(),
        },
        ..button::Style::default()
    }
}

/// Composite `over` onto an opaque `base`.
fn blend(base: Color, over: Color) -> Color {
    Color {
        r: base.r + (over.r - base.r) * over.a,
        g: base.g + (over.g - base.g) * over.a,
        b: base.b + (over.b - base.b) * over.a,
        a: 1.0,
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color {
        r: a.r + (b.r - a.r) * t,
        g: a.g + (b.g - a.g) * t,
        b: a.b + (b.b - a.b) * t,
        a: a.a + (b.a - a.a) * t,
    }
}
