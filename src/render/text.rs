// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text_len(text) <= max_len {
        return text.to_owned();
    }
    if max_len == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

/// Pads `text` on the left to `width` cells.
pub(crate) fn align_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_len(text));
    let mut out = " ".repeat(pad);
    out.push_str(text);
    out
}

/// Canvas text with trailing blanks and trailing empty lines removed.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let rendered = canvas.to_string();
    let mut lines = rendered.split('\n').map(|line| line.trim_end_matches(' ')).collect::<Vec<_>>();
    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{align_right, canvas_to_string_trimmed, text_len, truncate_with_ellipsis};
    use crate::render::Canvas;

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
        assert_eq!(truncate_with_ellipsis("", 0), "");
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
        assert_eq!(align_right("α", 3), "  α");
    }

    #[test]
    fn trimmed_output_drops_trailing_blanks() {
        let mut canvas = Canvas::new(3, 3).expect("canvas");
        canvas.set(0, 0, 'A').expect("set");
        assert_eq!(canvas_to_string_trimmed(&canvas), "A");
    }
}
