use std::fmt::Write as _;

use fiscalview_core::{FetchStatus, FinancialRecord, PageView, SortField, SortSpec};

type Cell = fn(&FinancialRecord) -> String;

const FIXED_COLUMNS: [(&str, Cell); 3] = [
    ("Gross Profit", gross_profit),
    ("EPS", eps),
    ("Operating Income", operating_income),
];

fn gross_profit(record: &FinancialRecord) -> String {
    amount(record.gross_profit)
}

fn eps(record: &FinancialRecord) -> String {
    amount(record.eps)
}

fn operating_income(record: &FinancialRecord) -> String {
    amount(record.operating_income)
}

/// Renders a page as an ASCII table followed by the pager line.
///
/// Pager buttons print as `[Previous]`/`[Next]` when usable and as
/// `(Previous)`/`(Next)` when disabled.
pub fn render_table(view: &PageView<'_>) -> String {
    let mut out = String::new();

    match view.status {
        FetchStatus::Loading => out.push_str("Loading data...\n"),
        FetchStatus::Failed { message, .. } => {
            let _ = writeln!(out, "{message}");
        }
        FetchStatus::Ready { skipped } if *skipped > 0 => {
            let _ = writeln!(out, "{skipped} malformed rows skipped");
        }
        _ => {}
    }

    let mut headers: Vec<String> = SortField::ALL
        .into_iter()
        .map(|field| header(field, view.sort))
        .collect();
    headers.extend(FIXED_COLUMNS.iter().map(|(name, _)| (*name).to_owned()));

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|record| {
            let mut cells = vec![
                record.date.to_string(),
                amount(record.revenue),
                amount(record.net_income),
            ];
            cells.extend(FIXED_COLUMNS.iter().map(|(_, cell)| cell(record)));
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, title)| {
            rows.iter()
                .map(|cells| width(&cells[column]))
                .chain(std::iter::once(width(title)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }

    let previous = if view.has_previous { "[Previous]" } else { "(Previous)" };
    let next = if view.has_next { "[Next]" } else { "(Next)" };
    let _ = writeln!(out, "{previous}  {}  {next}", view.indicator());
    out
}

fn header(field: SortField, sort: SortSpec) -> String {
    if sort.field == field {
        format!("{} {}", field.label(), sort.direction.arrow())
    } else {
        field.label().to_owned()
    }
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell}{}", " ".repeat(w.saturating_sub(width(cell)))))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}
