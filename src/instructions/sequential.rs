// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::catalog::FONT_SIZE;
use crate::layout::{LayoutConfig, LinkLayoutError};
use crate::model::{FactoryGraph, GraphError, Link, LinkSlot, NodeRef};
use crate::render::{DiagramSink, Point, Rect};

use super::{BuildStep, InstructionSequence};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InstructionError {
    #[error(transparent)]
    Layout(#[from] LinkLayoutError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("step for {node} does not fit a diagram: {width}x{height} px")]
    StepTooLarge { node: NodeRef, width: f64, height: f64 },
}

/// Produces the build instructions for a graph.
pub trait InstructionSource {
    fn instructions(&self, graph: &FactoryGraph) -> Result<InstructionSequence, InstructionError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepNode {
    pub rect: Rect,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLink {
    pub from: Point,
    pub to: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepText {
    pub at: Point,
    pub text: String,
}

/// A precomputed diagram: free text, labelled node boxes and arrowed links.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStep {
    title: String,
    width: u32,
    height: u32,
    font_size: f64,
    texts: Vec<StepText>,
    nodes: Vec<StepNode>,
    links: Vec<StepLink>,
}

impl DiagramStep {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            font_size: FONT_SIZE,
            texts: Vec::new(),
            nodes: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn push_text(&mut self, at: Point, text: impl Into<String>) {
        self.texts.push(StepText { at, text: text.into() });
    }

    pub fn push_node(&mut self, rect: Rect, label: impl Into<String>) {
        self.nodes.push(StepNode { rect, label: label.into() });
    }

    pub fn push_link(&mut self, from: Point, to: Point) {
        self.links.push(StepLink { from, to });
    }

    pub fn nodes(&self) -> &[StepNode] {
        &self.nodes
    }

    pub fn links(&self) -> &[StepLink] {
        &self.links
    }
}

impl BuildStep for DiagramStep {
    fn title(&self) -> &str {
        &self.title
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn font_size(&self) -> f64 {
        self.font_size
    }

    fn render(&self, sink: &mut dyn DiagramSink) {
        for text in &self.texts {
            sink.text(text.at, &text.text);
        }
        for node in &self.nodes {
            sink.rect(node.rect, Some(&node.label));
        }
        for link in &self.links {
            sink.line(link.from, link.to, true);
        }
    }
}

/// One step per machine: every industry in presentation order (variant, then id), then every
/// linked transfer unit by id.
///
/// A step puts the machine in the middle column, the storages it reads from on the left and the
/// storages it fills on the right. Links fan out on the storage side by slot offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SequentialInstructions {
    config: LayoutConfig,
}

impl SequentialInstructions {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn machine_step(
        &self,
        graph: &FactoryGraph,
        machine: &NodeRef,
        title: String,
    ) -> Result<DiagramStep, InstructionError> {
        let size = self.config.node_size;
        let margin = size / 2.0;
        let gap = size / 10.0;
        let title_band = 2.0 * self.config.font_size;
        let pitch = 2.0 * size + margin;
        let top = title_band + margin;

        let slots = graph.links_of(machine);
        let (outputs, inputs): (Vec<&LinkSlot<'_>>, Vec<&LinkSlot<'_>>) =
            slots.iter().partition(|slot| slot.outgoing);
        let rows = inputs.len().max(outputs.len()).max(1) as f64;

        let width = 2.0 * margin + 9.0 * size;
        let height = top + rows * pitch;
        let machine_top = top + (rows * pitch - margin - size) / 2.0;
        let machine_rect = Rect::new(margin + 4.0 * size, machine_top, size, size);
        let machine_mid = machine_rect.center();

        let (Some(width_px), Some(height_px)) = (px(width), px(height)) else {
            return Err(InstructionError::StepTooLarge { node: machine.clone(), width, height });
        };
        let mut step = DiagramStep::new(title.clone(), width_px, height_px)
            .with_font_size(self.config.font_size);
        step.push_text(Point::new(margin, 0.75 * title_band), title);
        step.push_node(machine_rect, label(graph, machine)?);

        for (row, slot) in inputs.into_iter().enumerate() {
            let storage = slot.link.from_node();
            let rect = Rect::new(margin, top + row as f64 * pitch, size, 2.0 * size);
            let offset = self.storage_offset(graph, storage, slot.link)?;
            step.push_node(rect, label(graph, storage)?);
            step.push_link(
                Point::new(rect.x + rect.width, rect.center().y + offset),
                Point::new(machine_rect.x - gap, machine_mid.y),
            );
        }

        for (row, slot) in outputs.into_iter().enumerate() {
            let storage = slot.link.to_node();
            let rect = Rect::new(margin + 8.0 * size, top + row as f64 * pitch, size, 2.0 * size);
            let offset = self.storage_offset(graph, storage, slot.link)?;
            step.push_node(rect, label(graph, storage)?);
            step.push_link(
                Point::new(machine_rect.x + machine_rect.width, machine_mid.y),
                Point::new(rect.x - gap, rect.center().y + offset),
            );
        }

        Ok(step)
    }

    fn storage_offset(
        &self,
        graph: &FactoryGraph,
        storage: &NodeRef,
        link: &Link,
    ) -> Result<f64, InstructionError> {
        let slot = graph
            .link_slot(storage, link)
            .ok_or_else(|| GraphError::MissingNode { node: storage.clone() })?;
        Ok(self.config.link_offset(storage, graph.link_count(storage), slot)?)
    }
}

impl InstructionSource for SequentialInstructions {
    fn instructions(&self, graph: &FactoryGraph) -> Result<InstructionSequence, InstructionError> {
        let mut industries = graph.industries().iter().collect::<Vec<_>>();
        industries.sort_by(|(a_id, a), (b_id, b)| {
            a.industry().cmp(b.industry()).then_with(|| a_id.cmp(b_id))
        });

        let mut steps = Vec::<Arc<dyn BuildStep>>::with_capacity(industries.len());
        for (id, node) in industries {
            let title = format!("{} ({id})", node.industry().display_name());
            let step = self.machine_step(graph, &NodeRef::Industry(id.clone()), title)?;
            steps.push(Arc::new(step));
        }

        for id in graph.transfer_units().keys() {
            let machine = NodeRef::TransferUnit(id.clone());
            if graph.link_count(&machine) == 0 {
                continue;
            }
            let title = format!("Transfer Unit ({id})");
            steps.push(Arc::new(self.machine_step(graph, &machine, title)?));
        }

        tracing::debug!(steps = steps.len(), "built instructions");
        Ok(InstructionSequence::new(steps))
    }
}

fn label(graph: &FactoryGraph, node: &NodeRef) -> Result<String, GraphError> {
    graph.label_of(node).ok_or_else(|| GraphError::MissingNode { node: node.clone() })
}

/// Whole pixels, or `None` when the size does not fit a `u32`.
fn px(value: f64) -> Option<u32> {
    let value = value.ceil();
    (value.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&value)).then_some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::{px, DiagramStep, InstructionError, InstructionSource, SequentialInstructions};
    use crate::instructions::BuildStep;
    use crate::layout::{LayoutConfig, LinkLayoutError};
    use crate::model::fixtures::{assembly_pair, ore_to_parts};
    use crate::model::{FactoryGraph, IndustryId, NodeRef};
    use crate::render::{render_step_svg, Point};

    #[test]
    fn one_step_per_industry_then_linked_transfer_units() {
        let graph = ore_to_parts().expect("fixture");
        let steps = SequentialInstructions::default().instructions(&graph).expect("steps");
        let titles = steps.iter().map(|step| step.title().to_owned()).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Assembly Line M (assembly)",
                "Metalwork Industry M (metalwork)",
                "Refiner M (refiner-1)",
                "Refiner M (refiner-2)",
                "Smelter M (smelter)",
                "Transfer Unit (tu-parts)",
            ]
        );
    }

    #[test]
    fn unlinked_transfer_units_get_no_step() {
        let graph = assembly_pair().expect("fixture");
        let steps = SequentialInstructions::default().instructions(&graph).expect("steps");
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn empty_graph_has_no_steps() {
        let steps =
            SequentialInstructions::default().instructions(&FactoryGraph::new()).expect("steps");
        assert!(steps.is_empty());
    }

    #[test]
    fn step_places_inputs_left_and_outputs_right() {
        let graph = assembly_pair().expect("fixture");
        let source = SequentialInstructions::default();
        let al1 = NodeRef::Industry(IndustryId::new("al-1").unwrap());
        let step: DiagramStep =
            source.machine_step(&graph, &al1, "al-1".to_owned()).expect("step");

        assert_eq!((step.width(), step.height()), (500, 170));
        let labels = step.nodes().iter().map(|n| n.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["S", "M", "S"]);

        // c-in carries two links; al-1 holds its first slot.
        assert_eq!(step.links()[0].from, Point::new(75.0, 90.0));
        assert_eq!(step.links()[0].to, Point::new(220.0, 95.0));
        assert_eq!(step.links()[1].from, Point::new(275.0, 95.0));
        assert_eq!(step.links()[1].to, Point::new(420.0, 90.0));

        let al2 = NodeRef::Industry(IndustryId::new("al-2").unwrap());
        let step = source.machine_step(&graph, &al2, "al-2".to_owned()).expect("step");
        assert_eq!(step.links()[0].from, Point::new(75.0, 100.0));
        assert_eq!(step.links()[1].to, Point::new(420.0, 100.0));
    }

    #[test]
    fn steps_render_identically_every_pass() {
        let graph = ore_to_parts().expect("fixture");
        let source = SequentialInstructions::default();
        let first = source.instructions(&graph).expect("steps");
        let second = source.instructions(&graph).expect("steps");
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(render_step_svg(a.as_ref()), render_step_svg(b.as_ref()));
        }
    }

    #[test]
    fn capacity_violation_surfaces_as_layout_error() {
        let graph = assembly_pair().expect("fixture");
        let config = LayoutConfig { max_container_links: 1, ..LayoutConfig::default() };
        let err = SequentialInstructions::new(config).instructions(&graph).unwrap_err();
        assert!(matches!(
            err,
            InstructionError::Layout(LinkLayoutError::CapacityExceeded {
                links: 2,
                capacity: 1,
                ..
            })
        ));
    }

    #[test]
    fn px_rejects_sizes_past_u32() {
        assert_eq!(px(169.2), Some(170));
        assert_eq!(px(f64::from(u32::MAX)), Some(u32::MAX));
        assert_eq!(px(1e12), None);
        assert_eq!(px(f64::INFINITY), None);
        assert_eq!(px(-1.0), None);
    }

    #[test]
    fn oversized_geometry_is_an_error_not_a_clipped_step() {
        let graph = assembly_pair().expect("fixture");
        let config = LayoutConfig { node_size: 1e9, ..LayoutConfig::default() };
        let err = SequentialInstructions::new(config).instructions(&graph).unwrap_err();
        assert!(matches!(err, InstructionError::StepTooLarge { .. }), "unexpected error: {err}");
    }

    #[test]
    fn steps_carry_configured_font_size() {
        let graph = assembly_pair().expect("fixture");
        let config = LayoutConfig { font_size: 20.0, ..LayoutConfig::default() };
        let steps = SequentialInstructions::new(config).instructions(&graph).expect("steps");
        let first = steps.get(0).expect("first step");
        assert_eq!(first.font_size(), 20.0);

        let svg = render_step_svg(first.as_ref());
        let title = r#"<text x="25" y="30" font-size="20">Assembly Line S (al-1)</text>"#;
        assert!(svg.contains(title), "missing title text in {svg}");
        assert!(!svg.contains(r#"font-size="10""#));
    }
}
