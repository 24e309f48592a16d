// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{FactoryGraph, LinkSlot, NodeRef};

use super::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkLayoutError {
    #[error("node {node} has {links} links but only {capacity} fit")]
    CapacityExceeded { node: NodeRef, links: usize, capacity: usize },
    #[error("node {node} has no link slot {slot} (links: {links})")]
    SlotOutOfRange { node: NodeRef, slot: usize, links: usize },
}

impl LayoutConfig {
    /// Offset of link slot `slot` among `links` links on `node`, centred on the node edge.
    ///
    /// The offset depends on the slot index alone, so it is stable across passes and distinct per
    /// slot. Its magnitude stays below `node_size`.
    pub fn link_offset(
        &self,
        node: &NodeRef,
        links: usize,
        slot: usize,
    ) -> Result<f64, LinkLayoutError> {
        self.check_capacity(node, links)?;
        if slot >= links {
            return Err(LinkLayoutError::SlotOutOfRange { node: node.clone(), slot, links });
        }
        Ok(self.unchecked_offset(links, slot))
    }

    /// Offsets for every slot of a node carrying `links` links, in slot order.
    pub fn link_offsets(&self, node: &NodeRef, links: usize) -> Result<Vec<f64>, LinkLayoutError> {
        self.check_capacity(node, links)?;
        Ok((0..links).map(|slot| self.unchecked_offset(links, slot)).collect())
    }

    fn check_capacity(&self, node: &NodeRef, links: usize) -> Result<(), LinkLayoutError> {
        let capacity = self.max_container_links;
        if links > capacity {
            tracing::error!(node = %node, links, capacity, "link capacity exceeded");
            return Err(LinkLayoutError::CapacityExceeded { node: node.clone(), links, capacity });
        }
        Ok(())
    }

    fn unchecked_offset(&self, links: usize, slot: usize) -> f64 {
        let centre = (links as f64 - 1.0) / 2.0;
        (slot as f64 - centre) * self.link_spacing()
    }
}

/// Every link touching `node`, paired with its offset on the node edge.
pub fn node_link_offsets<'a>(
    config: &LayoutConfig,
    graph: &'a FactoryGraph,
    node: &NodeRef,
) -> Result<Vec<(LinkSlot<'a>, f64)>, LinkLayoutError> {
    let slots = graph.links_of(node);
    let offsets = config.link_offsets(node, slots.len())?;
    Ok(slots.into_iter().zip(offsets).collect())
}
