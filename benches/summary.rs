// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fabrik::catalog::{CONTAINER_M, CONTAINER_S, REFINER_M, SMELTER_M};
use fabrik::instructions::{InstructionSource, SequentialInstructions};
use fabrik::model::{fixtures, ContainerId, FactoryGraph, IndustryId, TransferUnitId};
use fabrik::render::render_step_svg;
use fabrik::store::{GraphSerializer, JsonSerializer};
use fabrik::summary::summarize;

/// A production chain of `stages` industries, each reading the previous storage and writing the
/// next one, with a spare transfer unit every fourth stage.
fn chain(stages: usize) -> FactoryGraph {
    let mut graph = FactoryGraph::new();
    let mut input = graph
        .add_container(ContainerId::new("c-0").expect("id"), [&CONTAINER_M])
        .expect("add_container");

    for stage in 1..=stages {
        let variant = if stage % 2 == 0 { &SMELTER_M } else { &REFINER_M };
        let industry = graph
            .add_industry(IndustryId::new(format!("i-{stage}")).expect("id"), variant)
            .expect("add_industry");
        let output = graph
            .add_container(ContainerId::new(format!("c-{stage}")).expect("id"), [&CONTAINER_S])
            .expect("add_container");
        graph.connect(input, industry.clone()).expect("connect input");
        graph.connect(industry, output.clone()).expect("connect output");
        if stage % 4 == 0 {
            graph
                .add_transfer_unit(TransferUnitId::new(format!("tu-{stage}")).expect("id"))
                .expect("add_transfer_unit");
        }
        input = output;
    }

    graph
}

// Benchmark identity (keep stable):
// - Groups: `summary.summarize`, `instructions.sequential`, `render.step_svg`, `store.json`.
// - Case IDs after the `/` stay stable so results remain comparable across refactors.
fn benches_summary(c: &mut Criterion) {
    let ore_to_parts = fixtures::ore_to_parts().expect("ore_to_parts");
    let chain_small = chain(16);
    let chain_large = chain(256);

    let mut group = c.benchmark_group("summary.summarize");
    group.bench_function("ore_to_parts", |b| {
        b.iter(|| black_box(summarize(Some(black_box(&ore_to_parts)))))
    });
    group.bench_function("chain_small", |b| {
        b.iter(|| black_box(summarize(Some(black_box(&chain_small)))))
    });
    group.bench_function("chain_large", |b| {
        b.iter(|| black_box(summarize(Some(black_box(&chain_large)))))
    });
    group.finish();

    let source = SequentialInstructions::default();
    let mut group = c.benchmark_group("instructions.sequential");
    group.bench_function("ore_to_parts", |b| {
        b.iter(|| black_box(source.instructions(black_box(&ore_to_parts)).expect("instructions")))
    });
    group.bench_function("chain_large", |b| {
        b.iter(|| black_box(source.instructions(black_box(&chain_large)).expect("instructions")))
    });
    group.finish();

    let steps = source.instructions(&chain_small).expect("instructions");
    let mut group = c.benchmark_group("render.step_svg");
    group.bench_function("chain_small", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for step in steps.iter() {
                acc = acc.wrapping_add(render_step_svg(black_box(step.as_ref())).len());
            }
            black_box(acc)
        })
    });
    group.finish();

    let serializer = JsonSerializer::new();
    let raw = serializer.serialize(&chain_large).expect("serialize");
    let mut group = c.benchmark_group("store.json");
    group.bench_function("serialize_chain_large", |b| {
        b.iter(|| black_box(serializer.serialize(black_box(&chain_large)).expect("serialize")))
    });
    group.bench_function("parse_chain_large", |b| {
        b.iter(|| black_box(serializer.parse(black_box(&raw)).expect("parse")))
    });
    group.finish();
}

criterion_group!(benches, benches_summary);
criterion_main!(benches);
