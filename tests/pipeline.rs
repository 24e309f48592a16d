// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fabrik::instructions::{InstructionSource, SequentialInstructions};
use fabrik::layout::LayoutConfig;
use fabrik::model::{fixtures, GraphError};
use fabrik::render::{render_step_svg, render_step_unicode};
use fabrik::store::{GraphSerializer, JsonSerializer, StoreError};
use fabrik::summary::summarize;
use fabrik::view::{FactoryView, ViewEvent, ViewMode};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[test]
fn json_snapshot_flows_through_summary_steps_and_svg() {
    let graph = JsonSerializer::new()
        .parse(&read_fixture("assembly_pair.json"))
        .unwrap_or_else(|err| panic!("expected fixture to parse, got error: {err}"));

    let summary = summarize(Some(&graph));
    let industries = summary
        .industry_rows()
        .into_iter()
        .map(|row| (row.label(), row.count))
        .collect::<Vec<_>>();
    assert_eq!(industries, vec![("Assembly Line S", 2), ("Transfer Unit", 3)]);

    let steps = SequentialInstructions::default()
        .instructions(&graph)
        .unwrap_or_else(|err| panic!("expected instructions, got error: {err}"));
    assert_eq!(steps.len(), 2);

    for step in steps.iter() {
        let svg = render_step_svg(step.as_ref());
        assert!(svg.starts_with("<svg"), "expected an svg root for {}", step.title());
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Assembly Line S"));

        let text = render_step_unicode(step.as_ref())
            .unwrap_or_else(|err| panic!("expected {} to render, got error: {err}", step.title()));
        assert!(!text.trim().is_empty());
    }
}

#[test]
fn parsed_fixture_matches_builtin_graph() {
    let parsed = JsonSerializer::new().parse(&read_fixture("assembly_pair.json")).expect("parse");
    let builtin = fixtures::assembly_pair().expect("fixture");
    assert_eq!(
        JsonSerializer::new().serialize(&parsed).expect("serialize parsed"),
        JsonSerializer::new().serialize(&builtin).expect("serialize builtin"),
    );
}

#[test]
fn view_download_reloads_to_the_same_summary() {
    let graph = Arc::new(fixtures::ore_to_parts().expect("fixture"));
    let mut view = FactoryView::new(
        Some(Arc::clone(&graph)),
        Box::new(SequentialInstructions::default()),
    )
    .expect("view");

    view.dispatch(ViewEvent::ShowInstructions);
    while view.next_step() {}
    assert_eq!(view.mode(), ViewMode::Instructions);

    let download = view.download(&JsonSerializer::new()).expect("download");
    let reloaded = JsonSerializer::new().parse(download.body()).expect("reload");
    assert_eq!(summarize(Some(&reloaded)), summarize(Some(&graph)));
}

#[test]
fn tight_link_capacity_rejects_the_snapshot() {
    let config = LayoutConfig { max_container_links: 1, ..LayoutConfig::default() };
    let raw = read_fixture("assembly_pair.json");
    let result = JsonSerializer::with_limits(config.graph_limits()).parse(&raw);
    assert!(
        matches!(result, Err(StoreError::Graph(GraphError::CapacityExceeded { capacity: 1, .. }))),
        "unexpected result: {result:?}"
    );
}
