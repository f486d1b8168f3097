//! XLSX styles (styles.xml) write helpers

use std::collections::HashMap;

use tabreport_core::{FontWeight, HorizontalAlign, Style, StyleId, Table, VerticalAlign};

/// Border color drawn on every styled cell
const CELL_BORDER_COLOR: &str = "FFF0F0F0";

/// Default font size assumed when a style leaves it unset
pub(crate) const DEFAULT_FONT_SIZE: f64 = 11.0;

#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Deduplicated styles. Index corresponds to the cellXfs index;
    /// index 0 is the default (unstyled) xf.
    styles: Vec<Style>,
    /// Mapping from the table's style ids to cellXfs indices
    xf_map: HashMap<StyleId, u32>,
}

impl XlsxStyleTable {
    /// Collect every style actually referenced by a cell
    ///
    /// The table's pool may hold styles no cell references anymore
    /// (restyled cells drop their old reference), so the xf table is
    /// built from the grid, not the pool.
    pub(crate) fn build(table: &Table) -> Self {
        let mut styles = vec![Style::default()];
        let mut xf_map: HashMap<StyleId, u32> = HashMap::new();

        for row in 0..table.height() {
            for col in 0..table.width() {
                let Some(cell) = table.cell(row, col) else {
                    continue;
                };
                let Some(id) = cell.style else {
                    continue;
                };
                if xf_map.contains_key(&id) {
                    continue;
                }
                if let Some(style) = table.style(id) {
                    xf_map.insert(id, styles.len() as u32);
                    styles.push(style.clone());
                }
            }
        }

        Self { styles, xf_map }
    }

    pub(crate) fn xf_id_for(&self, style: Option<StyleId>) -> u32 {
        style
            .and_then(|id| self.xf_map.get(&id).copied())
            .unwrap_or(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.styles.len()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        // Component tables, deduplicated across styles. Font key is
        // (bold, size bits); fill key is the ARGB hex of the background.
        let mut font_ids: HashMap<(bool, u64), u32> = HashMap::new();
        let mut fonts: Vec<(bool, f64)> = vec![(false, DEFAULT_FONT_SIZE)];
        font_ids.insert((false, DEFAULT_FONT_SIZE.to_bits()), 0);

        let mut fill_ids: HashMap<String, u32> = HashMap::new();
        let mut fills: Vec<String> = Vec::new();

        let mut resolved: Vec<(u32, u32)> = Vec::with_capacity(self.styles.len());

        for style in &self.styles {
            let bold = style.font_weight == Some(FontWeight::Bold);
            let size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);
            let font_id = match font_ids.get(&(bold, size.to_bits())) {
                Some(&id) => id,
                None => {
                    let id = fonts.len() as u32;
                    fonts.push((bold, size));
                    font_ids.insert((bold, size.to_bits()), id);
                    id
                }
            };

            // Fill ids 0 (none) and 1 (gray125) are reserved by the format
            let fill_id = match style.background_color {
                None => 0,
                Some(color) => {
                    let argb = color.to_argb_hex();
                    match fill_ids.get(&argb) {
                        Some(&id) => id,
                        None => {
                            let id = fills.len() as u32 + 2;
                            fills.push(argb.clone());
                            fill_ids.insert(argb, id);
                            id
                        }
                    }
                }
            };

            resolved.push((font_id, fill_id));
        }

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        // Fonts
        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for (bold, size) in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(*bold, *size));
        }
        xml.push_str("\n  </fonts>");

        // Fills: the first two entries must be none and gray125
        xml.push_str(&format!("\n  <fills count=\"{}\">", fills.len() + 2));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for argb in &fills {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(argb));
        }
        xml.push_str("\n  </fills>");

        // Borders: default, plus the light outline every styled cell gets
        xml.push_str(
            r#"
  <borders count="2">
    <border><left/><right/><top/><bottom/><diagonal/></border>
    "#,
        );
        xml.push_str(&write_cell_border());
        xml.push_str("\n  </borders>");

        // cellStyleXfs (required)
        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        // cellXfs
        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        xml.push_str("\n    <xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\" xfId=\"0\"/>");
        for (i, style) in self.styles.iter().enumerate().skip(1) {
            let (font_id, fill_id) = resolved[i];
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, font_id, fill_id));
        }
        xml.push_str("\n  </cellXfs>");

        // cellStyles (required)
        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>"#,
        );

        xml.push_str("\n</styleSheet>");
        xml
    }
}

fn write_font(bold: bool, size: f64) -> String {
    let mut s = String::from("<font>");
    if bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", size));
    s.push_str("<name val=\"Calibri\"/>");
    s.push_str("</font>");
    s
}

fn write_fill(argb: &str) -> String {
    format!(
        "<fill><patternFill patternType=\"darkDown\"><fgColor rgb=\"{argb}\"/><bgColor rgb=\"{argb}\"/></patternFill></fill>"
    )
}

fn write_cell_border() -> String {
    let edge = |tag: &str| {
        format!("<{tag} style=\"thin\"><color rgb=\"{CELL_BORDER_COLOR}\"/></{tag}>")
    };
    format!(
        "<border>{}{}{}{}<diagonal/></border>",
        edge("left"),
        edge("right"),
        edge("top"),
        edge("bottom"),
    )
}

fn horiz_to_str(h: HorizontalAlign) -> &'static str {
    match h {
        HorizontalAlign::Left => "left",
        HorizontalAlign::Center => "center",
        HorizontalAlign::Right => "right",
        HorizontalAlign::Justify => "justify",
    }
}

fn vert_to_str(v: VerticalAlign) -> &'static str {
    match v {
        VerticalAlign::Top => "top",
        VerticalAlign::Center => "center",
        VerticalAlign::Bottom => "bottom",
        VerticalAlign::Justify => "justify",
    }
}

fn write_alignment(style: &Style) -> String {
    if style.horizontal_align.is_none() && style.vertical_align.is_none() {
        return String::new();
    }
    let mut s = String::from("<alignment");
    if let Some(h) = style.horizontal_align {
        s.push_str(&format!(" horizontal=\"{}\"", horiz_to_str(h)));
    }
    if let Some(v) = style.vertical_align {
        s.push_str(&format!(" vertical=\"{}\"", vert_to_str(v)));
    }
    s.push_str("/>");
    s
}

fn write_xf(style: &Style, font_id: u32, fill_id: u32) -> String {
    // Styled cells always carry the light outline border (id 1)
    let mut attrs = String::new();
    if font_id != 0 {
        attrs.push_str(" applyFont=\"1\"");
    }
    if fill_id != 0 {
        attrs.push_str(" applyFill=\"1\"");
    }
    attrs.push_str(" applyBorder=\"1\"");
    if style.horizontal_align.is_some() || style.vertical_align.is_some() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"0\" fontId=\"{}\" fillId=\"{}\" borderId=\"1\" xfId=\"0\"{}",
        font_id, fill_id, attrs
    );

    let alignment = write_alignment(style);
    if alignment.is_empty() {
        s.push_str("/>");
        return s;
    }
    s.push('>');
    s.push_str(&alignment);
    s.push_str("</xf>");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabreport_core::{Color, Entry, Table};

    fn styled_table() -> Table {
        let style = Style::standard().bold();
        Table::with_body(
            vec![
                vec![Entry::styled("a", style.clone()), Entry::from(1)],
                vec![Entry::styled("b", style), Entry::from(2)],
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_build_collects_referenced_styles() {
        let table = styled_table();
        let style_table = XlsxStyleTable::build(&table);

        // One shared style plus the default
        assert_eq!(style_table.len(), 2);
        let styled = table.cell(0, 0).unwrap().style;
        let unstyled = table.cell(0, 1).unwrap().style;
        assert_eq!(style_table.xf_id_for(styled), 1);
        assert_eq!(style_table.xf_id_for(unstyled), 0);
        assert_eq!(style_table.xf_id_for(None), 0);
    }

    #[test]
    fn test_styles_xml_contents() {
        let style = Style::standard()
            .bold()
            .background_color(Color::rgb(0xDD, 0xDD, 0xDD));
        let table = Table::with_body(
            vec![vec![Entry::styled("x", style)]],
            None,
        )
        .unwrap();

        let xml = XlsxStyleTable::build(&table).to_styles_xml();
        assert!(xml.contains("<b/><sz val=\"12\"/>"));
        assert!(xml.contains("patternType=\"darkDown\""));
        assert!(xml.contains("fgColor rgb=\"FFDDDDDD\""));
        assert!(xml.contains("borderId=\"1\""));
        assert!(xml.contains("horizontal=\"center\" vertical=\"center\""));
        assert!(xml.contains(&format!("color rgb=\"{CELL_BORDER_COLOR}\"")));
    }

    #[test]
    fn test_unstyled_table_has_only_default_xf() {
        let table = Table::with_body(vec![vec![Entry::from(1)]], None).unwrap();
        let style_table = XlsxStyleTable::build(&table);
        assert_eq!(style_table.len(), 1);
        let xml = style_table.to_styles_xml();
        assert!(xml.contains("<cellXfs count=\"1\">"));
    }
}
