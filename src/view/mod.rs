// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Visualization state: which face of the factory is shown, and the data behind it.
//!
//! The view never mutates a graph. It holds shared snapshots, and swapping the current one is a
//! pointer replacement between passes.

use std::fmt;
use std::sync::Arc;

use crate::instructions::{InstructionError, InstructionPager, InstructionSource, PagerError};
use crate::model::FactoryGraph;
use crate::store::{Download, GraphSerializer, StoreError};
use crate::summary::{summarize, FactorySummary};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Summary,
    Instructions,
    Map,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::Summary, Self::Instructions, Self::Map];

    /// Every mode is reachable from every other mode.
    pub fn transition(self, event: ViewEvent) -> ViewMode {
        match event {
            ViewEvent::ShowSummary => Self::Summary,
            ViewEvent::ShowInstructions => Self::Instructions,
            ViewEvent::ShowMap => Self::Map,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Summary => "Factory Summary",
            Self::Instructions => "Building Instructions",
            Self::Map => "Factory Map",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    ShowSummary,
    ShowInstructions,
    ShowMap,
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("no factory loaded")]
    NoGraph,
    #[error(transparent)]
    Instructions(#[from] InstructionError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The visualization of one factory.
///
/// The summary is recomputed every time Summary mode is entered. Entering Instructions starts at
/// the first step.
pub struct FactoryView {
    graph: Option<Arc<FactoryGraph>>,
    starting: Option<Arc<FactoryGraph>>,
    source: Box<dyn InstructionSource>,
    pager: Option<InstructionPager>,
    mode: ViewMode,
    summary: FactorySummary,
}

impl FactoryView {
    pub fn new(
        graph: Option<Arc<FactoryGraph>>,
        source: Box<dyn InstructionSource>,
    ) -> Result<Self, ViewError> {
        let pager = build_pager(source.as_ref(), graph.as_deref())?;
        let summary = summarize(graph.as_deref());
        Ok(Self {
            starting: graph.clone(),
            graph,
            source,
            pager,
            mode: ViewMode::Summary,
            summary,
        })
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn graph(&self) -> Option<&Arc<FactoryGraph>> {
        self.graph.as_ref()
    }

    pub fn starting_graph(&self) -> Option<&Arc<FactoryGraph>> {
        self.starting.as_ref()
    }

    pub fn summary(&self) -> &FactorySummary {
        &self.summary
    }

    /// `None` when the factory has nothing to build.
    pub fn pager(&self) -> Option<&InstructionPager> {
        self.pager.as_ref()
    }

    pub fn dispatch(&mut self, event: ViewEvent) -> ViewMode {
        let next = self.mode.transition(event);
        match next {
            ViewMode::Summary => self.summary = summarize(self.graph.as_deref()),
            ViewMode::Instructions if self.mode != ViewMode::Instructions => self.rewind(),
            ViewMode::Instructions | ViewMode::Map => {}
        }
        tracing::debug!(from = %self.mode, to = %next, "view transition");
        self.mode = next;
        next
    }

    pub fn next_step(&mut self) -> bool {
        self.pager.as_mut().is_some_and(InstructionPager::advance)
    }

    pub fn previous_step(&mut self) -> bool {
        self.pager.as_mut().is_some_and(InstructionPager::retreat)
    }

    /// Swaps in another snapshot. The starting graph is kept for [`FactoryView::back`].
    pub fn replace_graph(&mut self, graph: Option<Arc<FactoryGraph>>) -> Result<(), ViewError> {
        self.pager = build_pager(self.source.as_ref(), graph.as_deref())?;
        self.graph = graph;
        if self.mode == ViewMode::Summary {
            self.summary = summarize(self.graph.as_deref());
        }
        Ok(())
    }

    /// Restores the starting graph and returns to the summary.
    pub fn back(&mut self) -> Result<(), ViewError> {
        self.replace_graph(self.starting.clone())?;
        self.dispatch(ViewEvent::ShowSummary);
        Ok(())
    }

    pub fn download(&self, serializer: &dyn GraphSerializer) -> Result<Download, ViewError> {
        let graph = self.graph.as_deref().ok_or(ViewError::NoGraph)?;
        Ok(Download::new(serializer.serialize(graph)?))
    }

    fn rewind(&mut self) {
        if let Some(pager) = self.pager.as_mut() {
            while pager.retreat() {}
        }
    }
}

fn build_pager(
    source: &dyn InstructionSource,
    graph: Option<&FactoryGraph>,
) -> Result<Option<InstructionPager>, InstructionError> {
    let Some(graph) = graph else {
        return Ok(None);
    };
    match InstructionPager::new(source.instructions(graph)?) {
        Ok(pager) => Ok(Some(pager)),
        Err(PagerError::Empty) => Ok(None),
    }
}
