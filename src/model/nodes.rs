// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::catalog::EquipmentVariant;

use super::ids::{ContainerId, IdError, IndustryId, TransferContainerId, TransferUnitId};

/// Which of the four node collections a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    Industry,
    Container,
    TransferUnit,
    TransferContainer,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Container => "container",
            Self::TransferUnit => "transfer-unit",
            Self::TransferContainer => "transfer-container",
        }
    }

    /// Storage nodes carry the link capacity limit.
    pub fn is_storage(self) -> bool {
        matches!(self, Self::Container | Self::TransferContainer)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed reference to a node in one of the graph's collections.
///
/// Prints (and parses) as `<collection>/<id>`, e.g. `container/c1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRef {
    Industry(IndustryId),
    Container(ContainerId),
    TransferUnit(TransferUnitId),
    TransferContainer(TransferContainerId),
}

impl NodeRef {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Industry(_) => NodeKind::Industry,
            Self::Container(_) => NodeKind::Container,
            Self::TransferUnit(_) => NodeKind::TransferUnit,
            Self::TransferContainer(_) => NodeKind::TransferContainer,
        }
    }

    pub fn id_str(&self) -> &str {
        match self {
            Self::Industry(id) => id.as_str(),
            Self::Container(id) => id.as_str(),
            Self::TransferUnit(id) => id.as_str(),
            Self::TransferContainer(id) => id.as_str(),
        }
    }

    pub fn is_storage(&self) -> bool {
        self.kind().is_storage()
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind(), self.id_str())
    }
}

impl From<IndustryId> for NodeRef {
    fn from(value: IndustryId) -> Self {
        Self::Industry(value)
    }
}

impl From<ContainerId> for NodeRef {
    fn from(value: ContainerId) -> Self {
        Self::Container(value)
    }
}

impl From<TransferUnitId> for NodeRef {
    fn from(value: TransferUnitId) -> Self {
        Self::TransferUnit(value)
    }
}

impl From<TransferContainerId> for NodeRef {
    fn from(value: TransferContainerId) -> Self {
        Self::TransferContainer(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNodeRefError {
    #[error("node reference {value:?} is missing the '<collection>/' prefix")]
    MissingCollection { value: String },
    #[error("unknown node collection {collection:?}")]
    UnknownCollection { collection: String },
    #[error("invalid node id in {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: IdError,
    },
}

impl FromStr for NodeRef {
    type Err = ParseNodeRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((collection, id)) = s.split_once('/') else {
            return Err(ParseNodeRefError::MissingCollection { value: s.to_owned() });
        };
        let invalid = |source| ParseNodeRefError::InvalidId { value: s.to_owned(), source };

        match collection {
            "industry" => Ok(Self::Industry(id.parse().map_err(invalid)?)),
            "container" => Ok(Self::Container(id.parse().map_err(invalid)?)),
            "transfer-unit" => Ok(Self::TransferUnit(id.parse().map_err(invalid)?)),
            "transfer-container" => Ok(Self::TransferContainer(id.parse().map_err(invalid)?)),
            other => Err(ParseNodeRefError::UnknownCollection { collection: other.to_owned() }),
        }
    }
}

/// One production facility. Always exactly one industry variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndustryNode {
    industry: &'static EquipmentVariant,
}

impl IndustryNode {
    pub(crate) fn new(industry: &'static EquipmentVariant) -> Self {
        Self { industry }
    }

    pub fn industry(&self) -> &'static EquipmentVariant {
        self.industry
    }
}

/// Storage nodes may host several container variants at one placement.
pub trait HostsContainers {
    fn containers(&self) -> &BTreeSet<&'static EquipmentVariant>;

    /// Diagram label, e.g. `"M+S"` for a node hosting a medium and a small container.
    fn container_label(&self) -> String {
        self.containers().iter().map(|v| v.short_label()).collect::<Vec<_>>().join("+")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerNode {
    containers: BTreeSet<&'static EquipmentVariant>,
}

impl ContainerNode {
    pub(crate) fn new(containers: BTreeSet<&'static EquipmentVariant>) -> Self {
        Self { containers }
    }
}

impl HostsContainers for ContainerNode {
    fn containers(&self) -> &BTreeSet<&'static EquipmentVariant> {
        &self.containers
    }
}

/// Storage attached to transfer units. Same shape as [`ContainerNode`], separate collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferContainerNode {
    containers: BTreeSet<&'static EquipmentVariant>,
}

impl TransferContainerNode {
    pub(crate) fn new(containers: BTreeSet<&'static EquipmentVariant>) -> Self {
        Self { containers }
    }
}

impl HostsContainers for TransferContainerNode {
    fn containers(&self) -> &BTreeSet<&'static EquipmentVariant> {
        &self.containers
    }
}

/// A fungible transfer unit. Counted only in aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferUnitNode;
