//! Stroke styling descriptors.
//!
//! A [`Pen`] describes how a path should be stroked. The core never
//! renders; the descriptor is handed as-is to an external styling surface.

/// Line drawing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Get all available line styles.
    pub fn all() -> &'static [LineStyle] {
        &[
            LineStyle::Solid,
            LineStyle::Dashed,
            LineStyle::Dotted,
            LineStyle::DashDot,
        ]
    }

    /// Get style name as string.
    pub fn name(&self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DashDot => "dashdot",
        }
    }

    /// Parse style from string.
    pub fn from_name(name: &str) -> Option<LineStyle> {
        match name.to_lowercase().as_str() {
            "solid" => Some(LineStyle::Solid),
            "dashed" | "dash" => Some(LineStyle::Dashed),
            "dotted" | "dot" => Some(LineStyle::Dotted),
            "dashdot" | "dash-dot" => Some(LineStyle::DashDot),
            _ => None,
        }
    }
}

/// Stroke end-cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Round,
    Square,
    Flat,
}

impl CapStyle {
    pub fn name(&self) -> &'static str {
        match self {
            CapStyle::Round => "round cap",
            CapStyle::Square => "square cap",
            CapStyle::Flat => "flat cap",
        }
    }

    pub fn from_name(name: &str) -> Option<CapStyle> {
        match name.to_lowercase().as_str() {
            "round" | "round cap" => Some(CapStyle::Round),
            "square" | "square cap" => Some(CapStyle::Square),
            "flat" | "flat cap" => Some(CapStyle::Flat),
            _ => None,
        }
    }
}

/// Stroke corner-join style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    Round,
    Miter,
    Bevel,
}

impl JoinStyle {
    pub fn name(&self) -> &'static str {
        match self {
            JoinStyle::Round => "round join",
            JoinStyle::Miter => "miter join",
            JoinStyle::Bevel => "bevel join",
        }
    }

    pub fn from_name(name: &str) -> Option<JoinStyle> {
        match name.to_lowercase().as_str() {
            "round" | "round join" => Some(JoinStyle::Round),
            "miter" | "miter join" => Some(JoinStyle::Miter),
            "bevel" | "bevel join" => Some(JoinStyle::Bevel),
            _ => None,
        }
    }
}

/// Stroke descriptor for the styling surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    /// Stroke color as a hex string, e.g. `"#FFFFFF"`.
    pub rgb: String,
    pub line_style: LineStyle,
    /// Stroke width in millimeters.
    pub line_weight: f64,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            rgb: "#FFFFFF".to_string(),
            line_style: LineStyle::Solid,
            line_weight: 0.35,
            cap_style: CapStyle::Round,
            join_style: JoinStyle::Round,
        }
    }
}

impl Pen {
    /// Create a pen with the given color, style and weight; caps and joins
    /// stay at their round defaults.
    pub fn new(rgb: &str, line_style: LineStyle, line_weight: f64) -> Self {
        Self {
            rgb: rgb.to_string(),
            line_style,
            line_weight,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pen_is_white_solid_round() {
        let pen = Pen::default();
        assert_eq!(pen.rgb, "#FFFFFF");
        assert_eq!(pen.line_style, LineStyle::Solid);
        assert_eq!(pen.line_weight, 0.35);
        assert_eq!(pen.cap_style, CapStyle::Round);
        assert_eq!(pen.join_style, JoinStyle::Round);
    }

    #[test]
    fn line_style_names_round_trip() {
        for style in LineStyle::all() {
            assert_eq!(LineStyle::from_name(style.name()), Some(*style));
        }
    }

    #[test]
    fn unknown_style_name_is_none() {
        assert_eq!(LineStyle::from_name("wavy"), None);
        assert_eq!(CapStyle::from_name("pointy"), None);
        assert_eq!(JoinStyle::from_name("zig"), None);
    }

    #[test]
    fn cap_and_join_accept_short_names() {
        assert_eq!(CapStyle::from_name("square"), Some(CapStyle::Square));
        assert_eq!(JoinStyle::from_name("miter"), Some(JoinStyle::Miter));
    }
}
