// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use smallvec::SmallVec;

use crate::catalog::{Category, EquipmentVariant, TRANSFER_UNIT};

use super::ids::{ContainerId, IdError, IndustryId, TransferContainerId, TransferUnitId};
use super::nodes::{
    ContainerNode, HostsContainers, IndustryNode, NodeRef, TransferContainerNode, TransferUnitNode,
};

/// Default number of links a storage node can carry.
pub const MAX_CONTAINER_LINKS: usize = 10;

/// Structural limits enforced while the graph is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphLimits {
    pub max_container_links: usize,
}

impl Default for GraphLimits {
    fn default() -> Self {
        Self { max_container_links: MAX_CONTAINER_LINKS }
    }
}

/// A directed connection between a storage node and a machine (industry or transfer unit).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    from: NodeRef,
    to: NodeRef,
}

impl Link {
    pub fn new(from: NodeRef, to: NodeRef) -> Self {
        Self { from, to }
    }

    pub fn from_node(&self) -> &NodeRef {
        &self.from
    }

    pub fn to_node(&self) -> &NodeRef {
        &self.to
    }

    pub fn touches(&self, node: &NodeRef) -> bool {
        &self.from == node || &self.to == node
    }

    /// The endpoint opposite `node`, if `node` is one of the endpoints.
    pub fn other_end(&self, node: &NodeRef) -> Option<&NodeRef> {
        if &self.from == node {
            Some(&self.to)
        } else if &self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkEndpoint {
    From,
    To,
}

impl fmt::Display for LinkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::From => "from",
            Self::To => "to",
        })
    }
}

/// A link as seen from one of its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSlot<'a> {
    /// Position among the node's links, in insertion order.
    pub slot: usize,
    pub link: &'a Link,
    /// `true` when the link leaves the node.
    pub outgoing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node {node} already exists")]
    DuplicateNode { node: NodeRef },
    #[error("node {node} does not exist")]
    MissingNode { node: NodeRef },
    #[error("link references unknown {endpoint} node {node}")]
    DanglingLink { endpoint: LinkEndpoint, node: NodeRef },
    #[error("link {from} -> {to} must connect a storage node with an industry or transfer unit")]
    InvalidLink { from: NodeRef, to: NodeRef },
    #[error("link {from} -> {to} already exists")]
    DuplicateLink { from: NodeRef, to: NodeRef },
    #[error("node {node} would carry {links} links but only {capacity} fit")]
    CapacityExceeded { node: NodeRef, links: usize, capacity: usize },
    #[error("node {node} cannot use {variant}: expected {expected}")]
    WrongEquipment { node: NodeRef, variant: &'static str, expected: &'static str },
    #[error("storage node {node} must host at least one container variant")]
    NoContainers { node: NodeRef },
    #[error(transparent)]
    InvalidId(#[from] IdError),
}

/// The factory network: four disjoint node collections plus the links between them.
///
/// Collections are ordered maps so that iteration (and therefore serialization) is stable.
/// Every mutation keeps the invariants: links only reference existing nodes, and no storage node
/// exceeds [`GraphLimits::max_container_links`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FactoryGraph {
    limits: GraphLimits,
    industries: BTreeMap<IndustryId, IndustryNode>,
    containers: BTreeMap<ContainerId, ContainerNode>,
    transfer_units: BTreeMap<TransferUnitId, TransferUnitNode>,
    transfer_containers: BTreeMap<TransferContainerId, TransferContainerNode>,
    links: Vec<Link>,
}

impl FactoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: GraphLimits) -> Self {
        Self { limits, ..Self::default() }
    }

    pub fn limits(&self) -> GraphLimits {
        self.limits
    }

    pub fn industries(&self) -> &BTreeMap<IndustryId, IndustryNode> {
        &self.industries
    }

    pub fn containers(&self) -> &BTreeMap<ContainerId, ContainerNode> {
        &self.containers
    }

    pub fn transfer_units(&self) -> &BTreeMap<TransferUnitId, TransferUnitNode> {
        &self.transfer_units
    }

    pub fn transfer_containers(&self) -> &BTreeMap<TransferContainerId, TransferContainerNode> {
        &self.transfer_containers
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.industries.len()
            + self.containers.len()
            + self.transfer_units.len()
            + self.transfer_containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn contains(&self, node: &NodeRef) -> bool {
        match node {
            NodeRef::Industry(id) => self.industries.contains_key(id),
            NodeRef::Container(id) => self.containers.contains_key(id),
            NodeRef::TransferUnit(id) => self.transfer_units.contains_key(id),
            NodeRef::TransferContainer(id) => self.transfer_containers.contains_key(id),
        }
    }

    pub fn add_industry(
        &mut self,
        id: IndustryId,
        industry: &'static EquipmentVariant,
    ) -> Result<NodeRef, GraphError> {
        let node = NodeRef::Industry(id.clone());
        if industry.category() != Category::Industry || industry == &TRANSFER_UNIT {
            return Err(GraphError::WrongEquipment {
                node,
                variant: industry.name(),
                expected: "an industry",
            });
        }
        if self.industries.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node });
        }
        self.industries.insert(id, IndustryNode::new(industry));
        Ok(node)
    }

    pub fn add_container(
        &mut self,
        id: ContainerId,
        containers: impl IntoIterator<Item = &'static EquipmentVariant>,
    ) -> Result<NodeRef, GraphError> {
        let node = NodeRef::Container(id.clone());
        if self.containers.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node });
        }
        let containers = checked_container_set(&node, containers)?;
        self.containers.insert(id, ContainerNode::new(containers));
        Ok(node)
    }

    pub fn add_transfer_unit(&mut self, id: TransferUnitId) -> Result<NodeRef, GraphError> {
        let node = NodeRef::TransferUnit(id.clone());
        if self.transfer_units.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node });
        }
        self.transfer_units.insert(id, TransferUnitNode);
        Ok(node)
    }

    pub fn add_transfer_container(
        &mut self,
        id: TransferContainerId,
        containers: impl IntoIterator<Item = &'static EquipmentVariant>,
    ) -> Result<NodeRef, GraphError> {
        let node = NodeRef::TransferContainer(id.clone());
        if self.transfer_containers.contains_key(&id) {
            return Err(GraphError::DuplicateNode { node });
        }
        let containers = checked_container_set(&node, containers)?;
        self.transfer_containers.insert(id, TransferContainerNode::new(containers));
        Ok(node)
    }

    /// Adds a directed link, rejecting anything that would break a graph invariant.
    pub fn connect(&mut self, from: NodeRef, to: NodeRef) -> Result<(), GraphError> {
        let link = Link::new(from, to);
        self.check_link(&link, &self.links)?;

        for endpoint in [link.from_node(), link.to_node()] {
            if !endpoint.is_storage() {
                continue;
            }
            let links = self.link_count(endpoint) + 1;
            let capacity = self.limits.max_container_links;
            if links > capacity {
                return Err(GraphError::CapacityExceeded {
                    node: endpoint.clone(),
                    links,
                    capacity,
                });
            }
        }

        tracing::trace!(link = %link, "connect");
        self.links.push(link);
        Ok(())
    }

    /// Removes a node together with every link touching it.
    pub fn remove_node(&mut self, node: &NodeRef) -> Result<(), GraphError> {
        let removed = match node {
            NodeRef::Industry(id) => self.industries.remove(id).is_some(),
            NodeRef::Container(id) => self.containers.remove(id).is_some(),
            NodeRef::TransferUnit(id) => self.transfer_units.remove(id).is_some(),
            NodeRef::TransferContainer(id) => self.transfer_containers.remove(id).is_some(),
        };
        if !removed {
            return Err(GraphError::MissingNode { node: node.clone() });
        }
        self.links.retain(|link| !link.touches(node));
        Ok(())
    }

    /// Links touching `node`, with their slot index at that node.
    pub fn links_of<'a>(&'a self, node: &NodeRef) -> SmallVec<[LinkSlot<'a>; MAX_CONTAINER_LINKS]> {
        self.links
            .iter()
            .filter(|link| link.touches(node))
            .enumerate()
            .map(|(slot, link)| LinkSlot { slot, link, outgoing: link.from_node() == node })
            .collect()
    }

    pub fn link_count(&self, node: &NodeRef) -> usize {
        self.links.iter().filter(|link| link.touches(node)).count()
    }

    /// Slot index of `link` at `node`, if the link touches the node.
    pub fn link_slot(&self, node: &NodeRef, link: &Link) -> Option<usize> {
        self.links.iter().filter(|l| l.touches(node)).position(|l| l == link)
    }

    /// Diagram label for a node: the industry's short label, the hosted container labels, or
    /// `"TU"` for transfer units.
    pub fn label_of(&self, node: &NodeRef) -> Option<String> {
        match node {
            NodeRef::Industry(id) => {
                self.industries.get(id).map(|n| n.industry().short_label().to_owned())
            }
            NodeRef::Container(id) => self.containers.get(id).map(|n| n.container_label()),
            NodeRef::TransferUnit(id) => self.transfer_units.get(id).map(|_| "TU".to_owned()),
            NodeRef::TransferContainer(id) => {
                self.transfer_containers.get(id).map(|n| n.container_label())
            }
        }
    }

    /// Re-checks every invariant, e.g. after loading a snapshot.
    ///
    /// Reports the first violation found; links are checked in insertion order.
    pub fn validate(&self) -> Result<(), GraphError> {
        for (idx, link) in self.links.iter().enumerate() {
            self.check_link(link, &self.links[..idx])?;
        }

        let mut storage = BTreeSet::<NodeRef>::new();
        for link in &self.links {
            for endpoint in [link.from_node(), link.to_node()] {
                if endpoint.is_storage() {
                    storage.insert(endpoint.clone());
                }
            }
        }
        for node in storage {
            let links = self.link_count(&node);
            let capacity = self.limits.max_container_links;
            if links > capacity {
                return Err(GraphError::CapacityExceeded { node, links, capacity });
            }
        }

        Ok(())
    }

    /// Inserts an already-built link, bypassing checks. Callers must `validate` afterwards.
    pub(crate) fn push_link_unchecked(&mut self, link: Link) {
        self.links.push(link);
    }

    fn check_link(&self, link: &Link, existing: &[Link]) -> Result<(), GraphError> {
        let (from, to) = (link.from_node(), link.to_node());
        if !self.contains(from) {
            return Err(GraphError::DanglingLink {
                endpoint: LinkEndpoint::From,
                node: from.clone(),
            });
        }
        if !self.contains(to) {
            return Err(GraphError::DanglingLink { endpoint: LinkEndpoint::To, node: to.clone() });
        }
        if from.is_storage() == to.is_storage() {
            return Err(GraphError::InvalidLink { from: from.clone(), to: to.clone() });
        }
        if existing.contains(link) {
            return Err(GraphError::DuplicateLink { from: from.clone(), to: to.clone() });
        }
        Ok(())
    }
}

fn checked_container_set(
    node: &NodeRef,
    containers: impl IntoIterator<Item = &'static EquipmentVariant>,
) -> Result<BTreeSet<&'static EquipmentVariant>, GraphError> {
    let mut set = BTreeSet::new();
    for variant in containers {
        if !matches!(variant.category(), Category::ItemContainers | Category::FuelTanks) {
            return Err(GraphError::WrongEquipment {
                node: node.clone(),
                variant: variant.name(),
                expected: "a container",
            });
        }
        set.insert(variant);
    }
    if set.is_empty() {
        return Err(GraphError::NoContainers { node: node.clone() });
    }
    Ok(set)
}
