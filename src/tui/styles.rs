//! Theme and fade styling

use ratatui::style::Color;

use crate::config::{ConfigError, ThemeConfig};

/// Semantic color roles used across the TUI.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub prompt_user: Color,
    pub prompt_path: Color,
    pub text: Color,
    pub cursor: Color,
    pub dimmed: Color,
    pub border: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prompt_user: Color::Green,
            prompt_path: Color::Blue,
            text: Color::White,
            cursor: Color::White,
            dimmed: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            prompt_user: parse_color(&config.prompt_user)?,
            prompt_path: parse_color(&config.prompt_path)?,
            text: parse_color(&config.text)?,
            cursor: parse_color(&config.cursor)?,
            dimmed: parse_color(&config.dimmed)?,
            border: parse_color(&config.border)?,
            accent: parse_color(&config.accent)?,
        })
    }

    /// Map a themed color through the current fade level. `Dim` collapses
    /// every role onto the dimmed color so a fading surface reads as one
    /// receding layer rather than a palette shift.
    pub fn faded(&self, color: Color, fade: FadeLevel) -> Color {
        match fade {
            FadeLevel::Full => color,
            FadeLevel::Dim => self.dimmed,
            FadeLevel::Hidden => Color::Reset,
        }
    }
}

/// Terminal approximation of an opacity ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeLevel {
    Hidden,
    Dim,
    Full,
}

impl FadeLevel {
    /// Quantize a 0.0..=1.0 opacity into the three levels a terminal can show.
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio < 0.15 {
            FadeLevel::Hidden
        } else if ratio < 0.7 {
            FadeLevel::Dim
        } else {
            FadeLevel::Full
        }
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    let trimmed = name.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        if hex.len() == 6 {
            if let Ok(v) = u32::from_str_radix(hex, 16) {
                return Ok(Color::Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8));
            }
        }
        return Err(ConfigError::InvalidColor(name.to_string()));
    }
    match trimmed.to_lowercase().replace([' ', '_', '-'], "").as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" => Ok(Color::DarkGray),
        "lightred" => Ok(Color::LightRed),
        "lightgreen" => Ok(Color::LightGreen),
        "lightyellow" => Ok(Color::LightYellow),
        "lightblue" => Ok(Color::LightBlue),
        "lightmagenta" => Ok(Color::LightMagenta),
        "lightcyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(ConfigError::InvalidColor(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!(parse_color("green").unwrap(), Color::Green);
        assert_eq!(parse_color("Dark Gray").unwrap(), Color::DarkGray);
        assert_eq!(parse_color("#51ffd6").unwrap(), Color::Rgb(81, 255, 214));
        assert!(parse_color("chartreuse").is_err());
        assert!(parse_color("#12345").is_err());
    }

    #[test]
    fn fade_levels_quantize_the_ramp() {
        assert_eq!(FadeLevel::from_ratio(0.0), FadeLevel::Hidden);
        assert_eq!(FadeLevel::from_ratio(0.5), FadeLevel::Dim);
        assert_eq!(FadeLevel::from_ratio(1.0), FadeLevel::Full);
    }
}
