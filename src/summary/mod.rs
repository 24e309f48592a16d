// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Equipment summary of a factory graph.
//!
//! A single pass over the graph counts industries per variant and hosted containers per variant.
//! The counts are keyed by catalog variants in ordered maps, so iterating a summary already
//! yields rows in presentation order.

use std::collections::BTreeMap;

use crate::catalog::{EquipmentVariant, TRANSFER_UNIT};
use crate::model::{FactoryGraph, HostsContainers};

mod table;

pub use table::render_summary_unicode;

pub type EquipmentCounts = BTreeMap<&'static EquipmentVariant, usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorySummary {
    industries: EquipmentCounts,
    containers: EquipmentCounts,
}

/// One row of a summary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryRow {
    pub variant: &'static EquipmentVariant,
    pub count: usize,
}

impl SummaryRow {
    pub fn label(&self) -> &'static str {
        self.variant.display_name()
    }
}

impl FactorySummary {
    /// Industry variant counts, plus the transfer-unit total under [`TRANSFER_UNIT`].
    pub fn industries(&self) -> &EquipmentCounts {
        &self.industries
    }

    /// Hosted container variant counts across container and transfer-container nodes.
    pub fn containers(&self) -> &EquipmentCounts {
        &self.containers
    }

    pub fn industry_rows(&self) -> Vec<SummaryRow> {
        rows(&self.industries)
    }

    pub fn container_rows(&self) -> Vec<SummaryRow> {
        rows(&self.containers)
    }

    pub fn industry_total(&self) -> usize {
        self.industries.values().sum()
    }

    pub fn container_total(&self) -> usize {
        self.containers.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty() && self.containers.is_empty()
    }
}

/// Counts the equipment of `graph`. No graph means an empty summary.
///
/// Transfer units are one fungible bucket: their total is assigned to the [`TRANSFER_UNIT`]
/// key rather than accumulated per node.
pub fn summarize(graph: Option<&FactoryGraph>) -> FactorySummary {
    let Some(graph) = graph else {
        return FactorySummary::default();
    };

    let mut industries =
        graph.industries().values().fold(EquipmentCounts::new(), |mut counts, node| {
            *counts.entry(node.industry()).or_default() += 1;
            counts
        });
    industries.insert(&TRANSFER_UNIT, graph.transfer_units().len());

    let containers = count_hosted(graph.containers().values(), EquipmentCounts::new());
    let containers = count_hosted(graph.transfer_containers().values(), containers);

    let summary = FactorySummary { industries, containers };
    tracing::debug!(
        industries = summary.industry_total(),
        containers = summary.container_total(),
        "summarized factory"
    );
    summary
}

fn count_hosted<'a, N>(
    nodes: impl Iterator<Item = &'a N>,
    counts: EquipmentCounts,
) -> EquipmentCounts
where
    N: HostsContainers + 'a,
{
    nodes.fold(counts, |mut counts, node| {
        for &variant in node.containers() {
            *counts.entry(variant).or_default() += 1;
        }
        counts
    })
}

fn rows(counts: &EquipmentCounts) -> Vec<SummaryRow> {
    counts.iter().map(|(&variant, &count)| SummaryRow { variant, count }).collect()
}
