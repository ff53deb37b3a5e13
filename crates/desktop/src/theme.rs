use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

/// Window theme. The form has no preferences of its own; it follows the
/// desktop's light/dark choice.
pub fn app_theme(dark: bool) -> Theme {
    let palette = if dark { night_palette() } else { day_palette() };
    Theme::custom("FaceMatch", palette)
}

/// Secondary text: labels, hints, the output placeholder.
pub fn tertiary_color(theme: &Theme) -> Color {
    let p = theme.palette();
    Color { a: 0.5, ..p.text }
}

/// Card background, slightly offset from the window background.
pub fn surface_color(theme: &Theme) -> Color {
    let p = theme.palette();
    let luma = p.background.r * 0.299 + p.background.g * 0.587 + p.background.b * 0.114;
    let shift = if luma > 0.5 { -0.04 } else { 0.06 };
    Color {
        r: (p.background.r + shift).clamp(0.0, 1.0),
        g: (p.background.g + shift).clamp(0.0, 1.0),
        b: (p.background.b + shift).clamp(0.0, 1.0),
        a: 1.0,
    }
}

fn night_palette() -> Palette {
    Palette {
        background: color!(0x16, 0x1a, 0x1f),
        text: color!(0xe4, 0xe7, 0xeb),
        primary: color!(0x2a, 0xa1, 0x98),
        success: color!(0x4c, 0xc3, 0x8a),
        warning: color!(0xe9, 0xb8, 0x4a),
        danger: color!(0xf0, 0x5d, 0x5e),
    }
}

fn day_palette() -> Palette {
    Palette {
        background: color!(0xfb, 0xfb, 0xfa),
        text: color!(0x21, 0x25, 0x29),
        primary: color!(0x1b, 0x7f, 0x79),
        success: color!(0x2f, 0x9e, 0x44),
        warning: color!(0xc2, 0x7c, 0x0e),
        danger: color!(0xc9, 0x2a, 0x2a),
    }
}

/// Asks the desktop whether it is in dark mode. Unknown means light.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|o| macos_style_is_dark(&String::from_utf8_lossy(&o.stdout)))
            .unwrap_or(false)
    }
    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
            .map(|o| gnome_scheme_is_dark(&String::from_utf8_lossy(&o.stdout)))
            .unwrap_or(false)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        false
    }
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn macos_style_is_dark(output: &str) -> bool {
    output.trim().eq_ignore_ascii_case("dark")
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn gnome_scheme_is_dark(output: &str) -> bool {
    output.trim().trim_matches('\'') == "prefer-dark"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_and_light_differ() {
        let night = app_theme(true).palette();
        let day = app_theme(false).palette();
        assert_ne!(night.background, day.background);
        assert!(day.background.r > night.background.r);
    }

    #[test]
    fn test_surface_stands_out_from_background() {
        for dark in [true, false] {
            let theme = app_theme(dark);
            assert_ne!(surface_color(&theme), theme.palette().background);
        }
    }

    #[test]
    fn test_tertiary_is_translucent_text() {
        let theme = app_theme(false);
        let tertiary = tertiary_color(&theme);
        assert_eq!(tertiary.a, 0.5);
        assert_eq!(tertiary.r, theme.palette().text.r);
    }

    #[test]
    fn test_macos_style_output() {
        assert!(macos_style_is_dark("Dark\n"));
        assert!(!macos_style_is_dark(""));
    }

    #[test]
    fn test_gnome_scheme_output() {
        assert!(gnome_scheme_is_dark("'prefer-dark'\n"));
        assert!(!gnome_scheme_is_dark("'default'\n"));
        assert!(!gnome_scheme_is_dark(""));
    }
}
