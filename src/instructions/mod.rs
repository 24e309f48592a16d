// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Build instructions: an ordered, immutable list of diagram steps plus a cursor over it.
//!
//! A step only knows its size and how to draw itself through a [`DiagramSink`]; where the steps
//! come from is behind [`InstructionSource`].

use std::fmt;
use std::sync::Arc;

use crate::catalog::FONT_SIZE;
use crate::render::DiagramSink;

mod pager;
mod sequential;

pub use pager::{InstructionPager, PagerError};
pub use sequential::{DiagramStep, InstructionError, InstructionSource, SequentialInstructions};

/// One page of the build instructions.
pub trait BuildStep: Send + Sync {
    fn title(&self) -> &str;

    /// Diagram width in pixels.
    fn width(&self) -> u32;

    /// Diagram height in pixels.
    fn height(&self) -> u32;

    /// Label font size (pt) the step was laid out for.
    fn font_size(&self) -> f64 {
        FONT_SIZE
    }

    /// Draws the step. Must not depend on anything but the step itself.
    fn render(&self, sink: &mut dyn DiagramSink);
}

/// Shared, immutable step list.
#[derive(Clone)]
pub struct InstructionSequence {
    steps: Arc<[Arc<dyn BuildStep>]>,
}

impl InstructionSequence {
    pub fn new(steps: Vec<Arc<dyn BuildStep>>) -> Self {
        Self { steps: steps.into() }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<dyn BuildStep>> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn BuildStep>> {
        self.steps.iter()
    }
}

impl FromIterator<Arc<dyn BuildStep>> for InstructionSequence {
    fn from_iter<I: IntoIterator<Item = Arc<dyn BuildStep>>>(iter: I) -> Self {
        Self { steps: iter.into_iter().collect() }
    }
}

impl fmt::Debug for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.steps.iter().map(|step| step.title())).finish()
    }
}
