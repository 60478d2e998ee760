//! Plain aligned tables for `--format table`.

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Shrink the widest columns until the table fits.
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Render `rows` under `headers`. Missing cells print as `-`; numbers are
/// right-aligned; cells wider than their column end in `…`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            rows.iter()
                .filter_map(|row| row.get(column))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, headers, max_width);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(GAP);
    lines.push(header_line.trim_end().to_string());
    lines.push("-".repeat(widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1)));

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(column, width)| {
                let cell = clip(row.get(column).map_or("-", String::as_str), *width);
                let padded = pad(&cell, *width, is_numeric(&cell));
                if options.color {
                    paint(&padded, &cell)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn shrink_to(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let total = |widths: &[usize]| widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    while total(widths) > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(column, width)| **width > headers[*column].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(column, _)| column);
        match widest {
            Some(column) => widths[column] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut clipped: String = value.chars().take(width.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    let value = value.trim().trim_end_matches('%');
    !value.is_empty() && value.parse::<f64>().is_ok()
}

fn paint(padded: &str, cell: &str) -> String {
    let code = match cell.to_ascii_lowercase().as_str() {
        "true" | "active" | "runtime" => "32",
        "revoked" | "dev" | "development" => "33",
        "false" | "inactive" => "31",
        _ => return padded.to_string(),
    };
    padded.replacen(cell, &format!("\u{1b}[{code}m{cell}\u{1b}[0m"), 1)
}
