//! Cell styling types

mod color;
mod pool;

pub use color::Color;
pub use pool::{StyleId, StylePool};

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight
    #[default]
    Normal,
    /// Bold
    Bold,
}

/// Horizontal alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    /// Left aligned
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Justify (stretch to fit width)
    Justify,
}

/// Vertical alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    /// Top aligned
    Top,
    /// Center aligned
    Center,
    /// Bottom aligned
    Bottom,
    /// Justify
    Justify,
}

/// Row-height or column-width request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Sized by the writer from cell content and font size
    Auto,
    /// Fixed size in the writer's native unit (points for heights,
    /// character widths for columns)
    Fixed(f64),
}

impl Eq for Dimension {}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Auto => state.write_u8(0),
            Dimension::Fixed(v) => {
                state.write_u8(1);
                state.write_u64(v.to_bits());
            }
        }
    }
}

/// Cell style
///
/// Every option is independent; unset options fall back to the table
/// default style, and whatever that leaves unset falls back to the
/// writer's own defaults. Options the model does not interpret travel
/// in `extra` and reach the writer untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Font weight
    pub font_weight: Option<FontWeight>,
    /// Font size in points
    pub font_size: Option<f64>,
    /// Horizontal alignment
    pub horizontal_align: Option<HorizontalAlign>,
    /// Vertical alignment
    pub vertical_align: Option<VerticalAlign>,
    /// Background fill color
    pub background_color: Option<Color>,
    /// Column width request
    pub width: Option<Dimension>,
    /// Row height request
    pub height: Option<Dimension>,
    /// Uninterpreted options, passed through to the writer
    pub extra: BTreeMap<String, String>,
}

impl Style {
    /// Create a new style with every option unset
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual starting point for report styling: 12pt text, centered
    /// both ways, auto-sized rows and columns
    pub fn standard() -> Self {
        Style::new()
            .font_size(12.0)
            .horizontal_align(HorizontalAlign::Center)
            .vertical_align(VerticalAlign::Center)
            .width(Dimension::Auto)
            .height(Dimension::Auto)
    }

    /// Set bold font weight
    pub fn bold(mut self) -> Self {
        self.font_weight = Some(FontWeight::Bold);
        self
    }

    /// Set the font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = Some(align);
        self
    }

    /// Set the background fill color
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set the column width request
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the row height request
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = Some(height);
        self
    }

    /// Add an uninterpreted option
    pub fn extra<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fill unset options from `base`
    ///
    /// Set options win over `base`; `extra` keys from both sides are
    /// kept, with this style's values taking precedence.
    pub fn merged_over(&self, base: &Style) -> Style {
        let mut extra = base.extra.clone();
        extra.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));

        Style {
            font_weight: self.font_weight.or(base.font_weight),
            font_size: self.font_size.or(base.font_size),
            horizontal_align: self.horizontal_align.or(base.horizontal_align),
            vertical_align: self.vertical_align.or(base.vertical_align),
            background_color: self.background_color.or(base.background_color),
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            extra,
        }
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font_weight.hash(state);
        self.font_size.map(f64::to_bits).hash(state);
        self.horizontal_align.hash(state);
        self.vertical_align.hash(state);
        self.background_color.hash(state);
        self.width.hash(state);
        self.height.hash(state);
        self.extra.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_defaults() {
        let style = Style::standard();
        assert_eq!(style.font_size, Some(12.0));
        assert_eq!(style.horizontal_align, Some(HorizontalAlign::Center));
        assert_eq!(style.vertical_align, Some(VerticalAlign::Center));
        assert_eq!(style.width, Some(Dimension::Auto));
        assert_eq!(style.height, Some(Dimension::Auto));
        assert_eq!(style.font_weight, None);
    }

    #[test]
    fn test_merged_over() {
        let base = Style::standard().background_color(Color::GRAY);
        let over = Style::new().bold().font_size(15.0);

        let merged = over.merged_over(&base);
        assert_eq!(merged.font_weight, Some(FontWeight::Bold));
        assert_eq!(merged.font_size, Some(15.0));
        assert_eq!(merged.background_color, Some(Color::GRAY));
        assert_eq!(merged.horizontal_align, Some(HorizontalAlign::Center));
    }

    #[test]
    fn test_merged_over_extra_precedence() {
        let base = Style::new().extra("format", "general").extra("locked", "1");
        let over = Style::new().extra("format", "currency");

        let merged = over.merged_over(&base);
        assert_eq!(merged.extra.get("format").map(String::as_str), Some("currency"));
        assert_eq!(merged.extra.get("locked").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_builder_chaining() {
        let style = Style::new()
            .bold()
            .height(Dimension::Fixed(30.0))
            .extra("number_format", "0.00");
        assert_eq!(style.font_weight, Some(FontWeight::Bold));
        assert_eq!(style.height, Some(Dimension::Fixed(30.0)));
        assert_eq!(style.extra.len(), 1);
    }
}
