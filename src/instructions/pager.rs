// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{BuildStep, InstructionSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PagerError {
    #[error("instruction sequence has no steps")]
    Empty,
}

/// Cursor over a non-empty [`InstructionSequence`].
///
/// The index always stays in `0..len`; moving past either end is a no-op.
#[derive(Debug, Clone)]
pub struct InstructionPager {
    steps: InstructionSequence,
    current: usize,
}

impl InstructionPager {
    pub fn new(steps: InstructionSequence) -> Result<Self, PagerError> {
        if steps.is_empty() {
            return Err(PagerError::Empty);
        }
        Ok(Self { steps, current: 0 })
    }

    pub fn steps(&self) -> &InstructionSequence {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> &dyn BuildStep {
        &*self.steps.steps[self.current]
    }

    /// Moves to the next step. Returns `false` when already on the last one.
    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Moves to the previous step. Returns `false` when already on the first one.
    pub fn retreat(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }
}
