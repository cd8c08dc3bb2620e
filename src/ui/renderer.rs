// Renderer module - formatting utilities
// Layout code lives in layout.rs; these helpers turn engine values into
// display strings for the metric cards and the stream table.

use crate::{
    engine::SortConfig,
    store::{RecordField, StreamRecord},
};

/// Format a count with thousands separators (1234567 -> "1,234,567")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format revenue in millions ("$1.00M")
pub fn format_revenue(value: u64) -> String {
    format!("${:.2}M", value as f64 / 1_000_000.0)
}

pub fn format_top_artist(artist: Option<&str>) -> String {
    artist.unwrap_or("N/A").to_string()
}

/// Column header label, with an arrow on the active sort column
pub fn header_label(field: RecordField, sort: &SortConfig) -> String {
    if sort.key == field {
        format!("{} {}", field.label(), sort.direction.arrow())
    } else {
        field.label().to_string()
    }
}

/// Cell text of `record` for a table column
pub fn format_cell(record: &StreamRecord, field: RecordField) -> String {
    match field {
        RecordField::Id => record.id.to_string(),
        RecordField::SongName => record.song_name.clone(),
        RecordField::Artist => record.artist.clone(),
        RecordField::DateStreamed => record.date_streamed.format("%Y-%m-%d").to_string(),
        RecordField::StreamCount => format_count(record.stream_count),
        RecordField::UserId => record.user_id.clone(),
    }
}
