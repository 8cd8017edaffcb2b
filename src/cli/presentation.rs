//! CLI presentation: render frame collections as tables or JSON.

use crate::error::ApiError;
use crate::frame::{Frame, Grouping};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::collections::BTreeSet;

fn join_ids(ids: &BTreeSet<u64>) -> String {
    const SHOWN: usize = 5;
    let mut parts: Vec<String> = ids.iter().take(SHOWN).map(|id| id.to_string()).collect();
    if ids.len() > SHOWN {
        parts.push(format!("(+{})", ids.len() - SHOWN));
    }
    parts.join(",")
}

/// Render frames as a table. The identity column depends on the grouping.
pub fn format_frames_text(frames: &[Frame], grouping: Grouping) -> String {
    if frames.is_empty() {
        return "No frames.".to_string();
    }

    let stat_names: BTreeSet<&str> = frames
        .iter()
        .flat_map(|f| f.stats.keys().map(String::as_str))
        .collect();

    let mut header = match grouping {
        Grouping::BySample => vec!["Sample", "Junctions", "Location"],
        Grouping::ByJunction => vec!["Junction", "Samples", "Location"],
    };
    header.extend(["Annotated", "Coverage"]);
    header.extend(stat_names.iter().copied());

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);

    for frame in frames {
        let (id, members) = match grouping {
            Grouping::BySample => (frame.sample_id, &frame.junction_ids),
            Grouping::ByJunction => (frame.junction_id, &frame.sample_ids),
        };
        let mut row = vec![
            id.to_string(),
            join_ids(members),
            frame.location.to_string(),
            if frame.annotated { "yes" } else { "no" }.to_string(),
            frame.coverage.to_string(),
        ];
        for name in &stat_names {
            row.push(
                frame
                    .stat(name)
                    .map(|v| format!("{:.2}", v))
                    .unwrap_or_else(|| "-".to_string()),
            );
        }
        table.add_row(row);
    }

    format!("{}\n{} frame(s)", table, frames.len())
}

pub fn format_frames_json(frames: &[Frame]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(frames)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize frames: {}", e)))
}
