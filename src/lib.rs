// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fabrik: industry network planner (summaries, build instructions, snapshots).
//!
//! A [`model::FactoryGraph`] holds industries, storage and transfer units. [`summary`] counts the
//! equipment, [`instructions`] turns the graph into ordered build steps laid out by [`layout`],
//! [`render`] draws those steps as SVG or text, and [`view`] ties it together for the [`tui`].

pub mod catalog;
pub mod instructions;
pub mod layout;
pub mod model;
pub mod render;
pub mod store;
pub mod summary;
pub mod tui;
pub mod view;
