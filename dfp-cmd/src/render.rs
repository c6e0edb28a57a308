//! Text renderings of a result list for the terminal.

use dfp_core::card::amount_label;
use dfp_core::model::{LabelId, PriceRecord};

/// Width of one card column, including its border.
const CARD_WIDTH: usize = 16;

/// Lay the records out as a grid of two-line cards, `columns` per row.
///
/// ```text
/// +--------------+--------------+
/// |   2023-12-19 |   2023-12-20 |
/// |     $ 12,345 |            - |
/// +--------------+--------------+
/// ```
pub fn render_cards(records: &[PriceRecord], columns: usize) -> String {
    if records.is_empty() {
        return "No prices returned.".to_string();
    }

    let columns = columns.max(1);
    let inner = CARD_WIDTH - 2;
    let mut out = String::new();

    for row in records.chunks(columns) {
        let border = format!("+{}+", vec!["-".repeat(inner); row.len()].join("+"));
        let dates: Vec<String> = row
            .iter()
            .map(|r| format!("{:>w$} ", r.date, w = inner - 1))
            .collect();
        let amounts: Vec<String> = row
            .iter()
            .map(|r| format!("{:>w$} ", amount_label(r), w = inner - 1))
            .collect();

        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!("|{}|\n", dates.join("|")));
        out.push_str(&format!("|{}|\n", amounts.join("|")));
        out.push_str(&border);
        out.push('\n');
    }

    out.trim_end().to_string()
}

fn label_text(id: &LabelId) -> String {
    match id {
        LabelId::Text(s) => s.clone(),
        LabelId::Number(n) => n.to_string(),
        LabelId::Other(v) => v.to_string(),
    }
}

/// CSV with a header row. Fare label ids are joined with `;`.
pub fn render_csv(records: &[PriceRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "origin",
        "destination",
        "date",
        "currency",
        "amount",
        "fare_labels",
    ])?;
    for r in records {
        let labels = r
            .fare_labels
            .iter()
            .map(|l| label_text(&l.id))
            .collect::<Vec<_>>()
            .join(";");
        let amount = r.amount.to_string();
        wtr.write_record([
            r.origin.as_str(),
            r.destination.as_str(),
            r.date.as_str(),
            r.currency.as_str(),
            amount.as_str(),
            labels.as_str(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}
