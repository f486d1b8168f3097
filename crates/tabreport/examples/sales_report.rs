//! Build a small grouped sales report and write it to sales_report.xlsx

use tabreport::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let heading = Style::standard()
        .bold()
        .background_color(Color::rgb(0xD9, 0xE1, 0xF2));

    let mut table = Table::new(
        vec![vec![
            Entry::styled("product", heading.clone()),
            Entry::styled("branch", heading.clone()),
            Entry::styled("sales", heading),
        ]],
        vec![
            vec!["widget".into(), "east".into(), 120.into()],
            vec!["widget".into(), "west".into(), 80.into()],
            vec!["widget".into(), "north".into(), 64.into()],
            vec!["gadget".into(), "east".into(), 45.into()],
            vec!["gadget".into(), "west".into(), 71.into()],
        ],
        Some(Style::standard()),
    )?;

    // Merge each product's run and close it with a subtotal
    let groups = table.select(&ColumnSelector::column(1).grouped())?;
    groups.merge(&mut table, None)?;
    groups.add_summary(
        &mut table,
        &Summary::new(1, "total", SummaryLocation::Left).label_style(Style::standard().bold()),
    )?;

    table.add_body_summary(
        &Summary::new(2, "all products", SummaryLocation::Bottom)
            .label_style(Style::standard().bold()),
    )?;

    write_to_xlsx(&table, "sales_report.xlsx", (0, 0))?;
    println!("wrote sales_report.xlsx ({} rows)", table.height());
    Ok(())
}
