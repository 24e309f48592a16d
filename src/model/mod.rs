// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Factory graph model.
//!
//! A factory is four typed node collections (industries, containers, transfer units, transfer
//! containers) plus directed, capacity-limited links between storage nodes and machines.

pub mod fixtures;
pub mod graph;
pub mod ids;
pub mod nodes;

pub use graph::{
    FactoryGraph, GraphError, GraphLimits, Link, LinkEndpoint, LinkSlot, MAX_CONTAINER_LINKS,
};
pub use ids::{ContainerId, Id, IdError, IndustryId, TransferContainerId, TransferUnitId};
pub use nodes::{
    ContainerNode, HostsContainers, IndustryNode, NodeKind, NodeRef, ParseNodeRefError,
    TransferContainerNode, TransferUnitNode,
};
