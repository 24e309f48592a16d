// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Link layout for build-step diagrams.
//!
//! Links leaving a node are fanned across its edge in fixed slots. A slot offset depends only on
//! the slot index and the configured spacing, so every pass draws the same picture.

mod config;
mod links;

pub use config::{ConfigError, LayoutConfig, MAX_FONT_SIZE, MAX_NODE_SIZE};
pub use links::{node_link_offsets, LinkLayoutError};
