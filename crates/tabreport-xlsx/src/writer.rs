//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;

use crate::error::XlsxResult;
use crate::styles::{XlsxStyleTable, DEFAULT_FONT_SIZE};
use tabreport_core::{CellValue, Dimension, Table};

/// XLSX file writer
///
/// Writes one finished table as a single-sheet workbook. `position` is
/// the zero-based (row, column) of the sheet slot the table's top-left
/// cell lands in, so several calls with different offsets can be
/// combined by writing to the same sheet model upstream.
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a table to a file path
    pub fn write_file<P: AsRef<Path>>(
        table: &Table,
        path: P,
        position: (usize, usize),
    ) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(table, file, position)
    }

    /// Write a table to a writer
    pub fn write<W: Write + Seek>(
        table: &Table,
        writer: W,
        position: (usize, usize),
    ) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        let style_table = XlsxStyleTable::build(table);
        debug!(
            "writing {}x{} table at {:?} with {} styles",
            table.height(),
            table.width(),
            position,
            style_table.len()
        );

        Self::write_content_types(&mut zip)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip)?;
        Self::write_workbook_rels(&mut zip)?;
        Self::write_styles_xml(&mut zip, &style_table)?;
        Self::write_worksheet(&mut zip, table, position, &style_table)?;

        zip.finish()?;
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="Report" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        let xml = style_table.to_styles_xml();
        zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        table: &Table,
        position: (usize, usize),
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/worksheets/sheet1.xml", options)?;

        let (row_off, col_off) = position;

        // First pass: merge refs and auto-sized dimensions. Width
        // requests only count for unmerged cells; a span's text may
        // legitimately exceed any single column. Height requests count
        // for every anchor. The largest request per row/column wins.
        let mut merges: Vec<String> = Vec::new();
        let mut row_heights: Vec<Option<f64>> = vec![None; table.height()];
        let mut col_widths: Vec<Option<f64>> = vec![None; table.width()];

        for row in 0..table.height() {
            for col in 0..table.width() {
                let Some(cell) = table.cell(row, col) else {
                    continue;
                };

                if cell.is_merged() {
                    merges.push(format!(
                        "{}:{}",
                        cell_ref(row_off + row, col_off + col),
                        cell_ref(
                            row_off + row + cell.height - 1,
                            col_off + col + cell.width - 1,
                        ),
                    ));
                }

                let Some(style) = cell.style.and_then(|id| table.style(id)) else {
                    continue;
                };
                let font_size = style.font_size.unwrap_or(DEFAULT_FONT_SIZE);

                if let Some(height) = style.height {
                    let points = match height {
                        Dimension::Fixed(points) => points,
                        Dimension::Auto => (font_size * 1.5).ceil(),
                    };
                    let slot = &mut row_heights[row];
                    *slot = Some(slot.map_or(points, |h| h.max(points)));
                }

                if !cell.is_merged() {
                    if let Some(width) = style.width {
                        let chars = match width {
                            Dimension::Fixed(chars) => chars,
                            Dimension::Auto => {
                                auto_column_width(&cell.value.to_string(), font_size)
                            }
                        };
                        let slot = &mut col_widths[col];
                        *slot = Some(slot.map_or(chars, |w| w.max(chars)));
                    }
                }
            }
        }

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if col_widths.iter().any(Option::is_some) {
            content.push_str("\n    <cols>");
            for (col, width) in col_widths.iter().enumerate() {
                if let Some(width) = width {
                    let index = col_off + col + 1;
                    content.push_str(&format!(
                        "\n        <col min=\"{index}\" max=\"{index}\" width=\"{width}\" customWidth=\"1\"/>"
                    ));
                }
            }
            content.push_str("\n    </cols>");
        }

        content.push_str("\n    <sheetData>");

        for row in 0..table.height() {
            let has_cells = (0..table.width()).any(|col| table.cell(row, col).is_some());
            if !has_cells && row_heights[row].is_none() {
                continue;
            }

            let height_attr = row_heights[row]
                .map_or(String::new(), |h| format!(" ht=\"{h}\" customHeight=\"1\""));
            content.push_str(&format!(
                "\n        <row r=\"{}\"{}>",
                row_off + row + 1,
                height_attr
            ));

            for col in 0..table.width() {
                let Some(cell) = table.cell(row, col) else {
                    continue;
                };
                let cell_ref = cell_ref(row_off + row, col_off + col);
                let xf_id = style_table.xf_id_for(cell.style);
                let style_attr = if xf_id != 0 {
                    format!(" s=\"{}\"", xf_id)
                } else {
                    String::new()
                };

                match &cell.value {
                    CellValue::Number(n) => {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\"{}><v>{}</v></c>",
                            cell_ref, style_attr, n
                        ));
                    }
                    CellValue::Text(s) => {
                        content.push_str(&format!(
                            "\n            <c r=\"{}\"{} t=\"inlineStr\"><is><t>{}</t></is></c>",
                            cell_ref,
                            style_attr,
                            Self::escape_xml(s)
                        ));
                    }
                }
            }

            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>");

        if !merges.is_empty() {
            content.push_str(&format!("\n    <mergeCells count=\"{}\">", merges.len()));
            for merge in &merges {
                content.push_str(&format!("\n        <mergeCell ref=\"{}\"/>", merge));
            }
            content.push_str("\n    </mergeCells>");
        }

        content.push_str("\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}

/// Column width in characters that fits `text` at `font_size`
///
/// Averaging byte length and character count widens the estimate for
/// multi-byte scripts, whose glyphs render wider than Latin ones.
fn auto_column_width(text: &str, font_size: f64) -> f64 {
    let weight = (text.len() + text.chars().count()) as f64 / 2.0;
    weight * (font_size / DEFAULT_FONT_SIZE).ceil()
}

/// A1-style column letters for a zero-based column index
fn column_letter(mut col: usize) -> String {
    let mut letters = String::new();
    loop {
        letters.insert(0, (b'A' + (col % 26) as u8) as char);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters
}

/// A1-style reference for zero-based (row, col)
fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(8, 2), "C9");
    }

    #[test]
    fn test_auto_column_width_ascii() {
        // 5 bytes, 5 chars at the default size
        assert_eq!(auto_column_width("total", 11.0), 5.0);
        // A larger font scales the estimate up
        assert_eq!(auto_column_width("total", 12.0), 10.0);
    }

    #[test]
    fn test_auto_column_width_multibyte() {
        // 6 bytes, 2 chars: wider than pure char count
        assert_eq!(auto_column_width("合计", 11.0), 4.0);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(XlsxWriter::escape_xml("a&b<c>d"), "a&amp;b&lt;c&gt;d");
    }
}
