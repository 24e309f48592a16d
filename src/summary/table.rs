// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::render::text::{align_right, canvas_to_string_trimmed, text_len};
use crate::render::{Canvas, CanvasError};

use super::{FactorySummary, SummaryRow};

/// Renders the industry and container tables as unicode text.
///
/// Rows follow summary order. An empty summary renders both tables with headers only.
pub fn render_summary_unicode(summary: &FactorySummary) -> Result<String, CanvasError> {
    let industries = render_table(
        "Factory Industries:",
        ("Industry Type", "Count"),
        &summary.industry_rows(),
    )?;
    let containers = render_table(
        "Factory Containers:",
        ("Container Type", "Count"),
        &summary.container_rows(),
    )?;
    Ok(format!("{industries}\n\n{containers}"))
}

fn render_table(
    title: &str,
    header: (&str, &str),
    rows: &[SummaryRow],
) -> Result<String, CanvasError> {
    let mut itoa_buf = itoa::Buffer::new();
    let counts = rows
        .iter()
        .map(|row| itoa_buf.format(row.count).to_owned())
        .collect::<Vec<_>>();

    let label_width = rows
        .iter()
        .map(|row| text_len(row.label()))
        .fold(text_len(header.0), usize::max);
    let count_width = counts
        .iter()
        .map(|count| text_len(count))
        .fold(text_len(header.1), usize::max);

    // │ label │ count │
    let sep_x = label_width + 3;
    let right_x = sep_x + count_width + 3;
    let top_y = 1;
    let bottom_y = top_y + 3 + rows.len();

    let width = (right_x + 1).max(text_len(title));
    let mut canvas = Canvas::new(width, bottom_y + 1)?;

    canvas.write_str(0, 0, title)?;
    canvas.draw_box(0, top_y, right_x, bottom_y)?;
    canvas.draw_hline(0, right_x, top_y + 2)?;
    canvas.draw_vline(sep_x, top_y, bottom_y)?;

    canvas.write_str(2, top_y + 1, header.0)?;
    canvas.write_str(sep_x + 2, top_y + 1, &align_right(header.1, count_width))?;
    for (idx, (row, count)) in rows.iter().zip(&counts).enumerate() {
        let y = top_y + 3 + idx;
        canvas.write_str(2, y, row.label())?;
        canvas.write_str(sep_x + 2, y, &align_right(count, count_width))?;
    }

    Ok(canvas_to_string_trimmed(&canvas))
}
