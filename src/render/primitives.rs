use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash pattern applied when stroking guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineStrokeStyle {
    /// On/off segment lengths in pixels for a stroke of `width`.
    #[must_use]
    pub fn dash_pattern(self, width: f64) -> Option<[f64; 2]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some([width * 4.0, width * 4.0]),
            Self::Dotted => Some([width, width * 2.0]),
        }
    }
}

/// Stroke paint for guide figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: LineStrokeStyle,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: LineStrokeStyle::Solid,
        }
    }

    #[must_use]
    pub const fn with_dash(mut self, dash: LineStrokeStyle) -> Self {
        self.dash = dash;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

impl Default for StrokeStyle {
    /// Light-gray hairline used by guides without an explicit style.
    fn default() -> Self {
        Self::new(Color::from_rgb8(0xbf, 0xbf, 0xbf), 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LineStrokeStyle, StrokeStyle};

    #[test]
    fn default_stroke_is_light_gray_hairline() {
        let stroke = StrokeStyle::default();
        assert_eq!(stroke.color, Color::from_rgb8(191, 191, 191));
        assert_eq!(stroke.width, 1.0);
        assert_eq!(stroke.dash, LineStrokeStyle::Solid);
        assert!(stroke.validate().is_ok());
    }

    #[test]
    fn stroke_validation_rejects_bad_width_and_color() {
        let thin = StrokeStyle::new(Color::rgb(0.0, 0.0, 0.0), 0.0);
        assert!(thin.validate().is_err());

        let overflow = StrokeStyle::new(Color::rgb(1.5, 0.0, 0.0), 1.0);
        assert!(overflow.validate().is_err());
    }

    #[test]
    fn dash_patterns_scale_with_width() {
        assert_eq!(LineStrokeStyle::Solid.dash_pattern(2.0), None);
        assert_eq!(LineStrokeStyle::Dashed.dash_pattern(2.0), Some([8.0, 8.0]));
        assert_eq!(LineStrokeStyle::Dotted.dash_pattern(2.0), Some([2.0, 4.0]));
    }
}
