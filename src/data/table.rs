//! HTML table lookup.

use scraper::{ElementRef, Html, Selector};

use crate::data::source::SourceError;
use crate::debug::{DiagEvent, Diagnostics};
use crate::domain::RawRow;

/// Class signature of the rate table on the published page.
const RATE_TABLE: &str = "table.table.table-striped.table-bordered.table-condensed.table-hover";

/// Return the data rows (header row excluded) of the rate table in `html`.
///
/// Prefers the styled rate table and falls back to the first table on the
/// page. Each row is the trimmed text of its `td` cells.
pub fn parse_rate_table(html: &str, diag: &dyn Diagnostics) -> Result<Vec<RawRow>, SourceError> {
    let styled = selector(RATE_TABLE)?;
    let any_table = selector("table")?;
    let tr = selector("tr")?;
    let td = selector("td")?;

    let document = Html::parse_document(html);
    let table = match document.select(&styled).next() {
        Some(table) => table,
        None => {
            let table = document.select(&any_table).next().ok_or(SourceError::TableNotFound)?;
            diag.record(DiagEvent::TableFallback);
            table
        }
    };

    let rows: Vec<RawRow> = table
        .select(&tr)
        .skip(1)
        .map(|row| row.select(&td).map(cell_text).collect())
        .collect();

    diag.record(DiagEvent::RowsFound { count: rows.len() });
    Ok(rows)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn selector(css: &str) -> Result<Selector, SourceError> {
    Selector::parse(css).map_err(|_| SourceError::TableNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::{NoDiagnostics, RecordingDiagnostics};

    const STYLED: &str = r#"
        <html><body>
        <table class="other"><tr><td>ignore</td></tr></table>
        <table class="table table-striped table-bordered table-condensed table-hover">
          <thead><tr><th>掛牌日期</th><th>幣別</th><th>即期買入</th></tr></thead>
          <tbody>
            <tr><td><a href="/xrt/history">2024/01/02</a></td><td>人民幣 (CNY)</td><td> 4.352 </td></tr>
            <tr><td>2024/01/03</td><td>人民幣 (CNY)</td><td>4.36</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    #[test]
    fn styled_table_rows_without_header() {
        let diag = RecordingDiagnostics::new();
        let rows = parse_rate_table(STYLED, &diag).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["2024/01/02", "人民幣 (CNY)", "4.352"]);
        assert!(!diag.events().contains(&DiagEvent::TableFallback));
        assert!(diag.events().contains(&DiagEvent::RowsFound { count: 2 }));
    }

    #[test]
    fn falls_back_to_first_table() {
        let html = "<table><tr><th>h</th></tr><tr><td>2024/01/02</td><td>x</td><td>4.1</td></tr></table>";
        let diag = RecordingDiagnostics::new();
        let rows = parse_rate_table(html, &diag).unwrap();
        assert_eq!(rows, vec![vec!["2024/01/02", "x", "4.1"]]);
        assert_eq!(diag.events()[0], DiagEvent::TableFallback);
    }

    #[test]
    fn no_table_is_distinct_from_empty_table() {
        let err = parse_rate_table("<html><body><p>maintenance</p></body></html>", &NoDiagnostics).unwrap_err();
        assert_eq!(err, SourceError::TableNotFound);

        let rows = parse_rate_table("<table><tr><th>only header</th></tr></table>", &NoDiagnostics).unwrap();
        assert!(rows.is_empty());
    }
}
