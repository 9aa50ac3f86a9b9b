//! Box-drawing table rendering of estimation reports.

use cryptoforge_core::Report;
use std::collections::BTreeMap;

fn format_parameters(parameters: &BTreeMap<String, i64>) -> String {
    let inner: Vec<String> = parameters
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    format!("{{{}}}", inner.join(", "))
}

/// Renders the report as an aligned box table; the column set follows the
/// report's rendering flags.
pub fn render_table(report: &Report) -> String {
    let mut header = vec!["algorithm".to_string(), "time".to_string(), "memory".to_string()];
    if report.show_all_parameters {
        header.push("parameters".to_string());
    }
    let has_tilde = report.entries.iter().any(|e| e.tilde_o_estimate.is_some());
    if has_tilde {
        header.push("tilde_o time".to_string());
        header.push("tilde_o memory".to_string());
    }
    let has_quantum = report.entries.iter().any(|e| e.quantum_estimate.is_some());
    if has_quantum {
        header.push("quantum time".to_string());
    }

    let mut rows = Vec::with_capacity(report.entries.len());
    for entry in &report.entries {
        let mut row = vec![
            entry.algorithm.clone(),
            report.format_value(entry.estimate.time),
            report.format_value(entry.estimate.memory),
        ];
        if report.show_all_parameters {
            row.push(format_parameters(&entry.estimate.parameters));
        }
        if has_tilde {
            match &entry.tilde_o_estimate {
                Some(block) => {
                    row.push(report.format_value(block.time));
                    row.push(report.format_value(block.memory));
                }
                None => {
                    row.push("--".to_string());
                    row.push("--".to_string());
                }
            }
        }
        if has_quantum {
            row.push(match entry.quantum_estimate {
                Some(t) => report.format_value(t),
                None => "--".to_string(),
            });
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let separator = {
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", dashes.join("+"))
    };
    let render_row = |cells: &[String], left_align_first: bool| {
        let rendered: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i == 0 && left_align_first {
                    format!(" {cell:<width$} ", width = widths[i])
                } else {
                    format!(" {cell:>width$} ", width = widths[i])
                }
            })
            .collect();
        format!("|{}|", rendered.join("|"))
    };

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&render_row(&header, true));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &rows {
        out.push_str(&render_row(row, true));
        out.push('\n');
    }
    out.push_str(&separator);
    out
}
