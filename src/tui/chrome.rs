// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::prelude::*;

use crate::view::ViewMode;

use super::{App, FOCUS_COLOR, FOOTER_KEY_COLOR, FOOTER_LABEL_COLOR};

/// Mode tabs; the active one is highlighted.
pub(super) fn tab_line(active: ViewMode) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, mode) in ViewMode::ALL.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        }
        let style = if mode == active {
            Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(FOOTER_LABEL_COLOR)
        };
        spans.push(Span::styled(mode.title().to_owned(), style));
    }
    Line::from(spans)
}

/// Key hints for the current mode, followed by the toast if one is pending.
///
/// Step controls only appear when they can move.
pub(super) fn footer_line(app: &App) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let mode = app.view.mode();

    if mode != ViewMode::Summary {
        push_footer_entry(&mut spans, "Summary", "s");
    }
    if mode != ViewMode::Instructions {
        push_footer_entry(&mut spans, "Instructions", "i");
    }
    if mode != ViewMode::Map {
        push_footer_entry(&mut spans, "Map", "m");
    }
    if mode == ViewMode::Instructions {
        if let Some(pager) = app.view.pager() {
            if pager.has_previous() {
                push_footer_entry(&mut spans, "Previous", "←");
            }
            if pager.has_next() {
                push_footer_entry(&mut spans, "Next", "→");
            }
        }
    }
    push_footer_entry(&mut spans, "Back", "b");
    push_footer_entry(&mut spans, "Download", "d");
    push_footer_entry(&mut spans, "Copy", "y");
    push_footer_entry(&mut spans, "Quit", "q");

    if let Some(toast) = app.toast.as_deref() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
        spans.push(Span::raw(toast.to_owned()));
    }

    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(format!("{label} "), Style::default().fg(FOOTER_LABEL_COLOR)));
    spans.push(Span::styled(
        key.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}
