use nu_ansi_term::{Color, Style};

/// Named palette: (prompt, output, error) colors.
pub struct Theme {
    pub name: &'static str,
    pub prompt_color: &'static str,
    pub output_color: &'static str,
    pub error_color: &'static str,
}

pub static THEMES: &[Theme] = &[
    Theme {
        name: "default",
        prompt_color: "green",
        output_color: "white",
        error_color: "red",
    },
    Theme {
        name: "dark",
        prompt_color: "cyan",
        output_color: "light_gray",
        error_color: "light_red",
    },
    Theme {
        name: "light",
        prompt_color: "blue",
        output_color: "black",
        error_color: "red",
    },
    Theme {
        name: "solarized",
        prompt_color: "yellow",
        output_color: "cyan",
        error_color: "magenta",
    },
];

pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name == name)
}

/// Map a color name to a terminal color. Case-insensitive, `-` and `_` are
/// interchangeable (`light-red` == `light_red`).
pub fn parse_color(name: &str) -> Option<Color> {
    let name = name.to_ascii_lowercase().replace('-', "_");
    let color = match name.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "purple" => Color::Purple,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "dark_gray" | "dark_grey" => Color::DarkGray,
        "light_gray" | "light_grey" => Color::LightGray,
        "light_red" => Color::LightRed,
        "light_green" => Color::LightGreen,
        "light_yellow" => Color::LightYellow,
        "light_blue" => Color::LightBlue,
        "light_magenta" => Color::LightMagenta,
        "light_purple" => Color::LightPurple,
        "light_cyan" => Color::LightCyan,
        _ => return None,
    };
    Some(color)
}

/// Style for a configured color name; unknown names paint nothing.
pub fn style_for(name: &str) -> Style {
    match parse_color(name) {
        Some(color) => Style::new().fg(color),
        None => {
            log::debug!("unknown color '{name}', rendering unstyled");
            Style::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_uses_known_colors() {
        for theme in THEMES {
            for color in [theme.prompt_color, theme.output_color, theme.error_color] {
                assert!(parse_color(color).is_some(), "{}: {color}", theme.name);
            }
        }
    }

    #[test]
    fn color_names_are_forgiving() {
        assert_eq!(parse_color("Light-Red"), Some(Color::LightRed));
        assert_eq!(parse_color("GREEN"), Some(Color::Green));
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn unknown_color_is_plain() {
        assert_eq!(style_for("chartreuse"), Style::new());
        assert_eq!(style_for("red"), Style::new().fg(Color::Red));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(find_theme("dark").map(|t| t.prompt_color), Some("cyan"));
        assert!(find_theme("neon").is_none());
    }
}
