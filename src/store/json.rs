// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::catalog::{self, EquipmentVariant};
use crate::model::{FactoryGraph, GraphLimits, HostsContainers, Id, Link, NodeRef};

use super::{GraphSerializer, StoreError};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FactoryJson {
    #[serde(default)]
    industries: Vec<IndustryJson>,
    #[serde(default)]
    containers: Vec<StorageJson>,
    #[serde(default)]
    transfer_units: Vec<TransferUnitJson>,
    #[serde(default)]
    transfer_containers: Vec<StorageJson>,
    #[serde(default)]
    links: Vec<LinkJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndustryJson {
    id: String,
    industry: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageJson {
    id: String,
    containers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransferUnitJson {
    id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinkJson {
    from: String,
    to: String,
}

/// Pretty-printed JSON snapshots.
///
/// Parsing rebuilds the graph under `limits` and re-validates every link before returning it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSerializer {
    limits: GraphLimits,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: GraphLimits) -> Self {
        Self { limits }
    }

    pub fn parse(&self, raw: &str) -> Result<FactoryGraph, StoreError> {
        let factory_json: FactoryJson = serde_json::from_str(raw)?;
        let graph = graph_from_json(factory_json, self.limits)?;
        tracing::debug!(nodes = graph.node_count(), links = graph.links().len(), "parsed factory");
        Ok(graph)
    }
}

impl GraphSerializer for JsonSerializer {
    fn serialize(&self, graph: &FactoryGraph) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&graph_to_json(graph))?)
    }
}

fn graph_to_json(graph: &FactoryGraph) -> FactoryJson {
    FactoryJson {
        industries: graph
            .industries()
            .iter()
            .map(|(id, node)| IndustryJson {
                id: id.to_string(),
                industry: node.industry().name().to_owned(),
            })
            .collect(),
        containers: graph
            .containers()
            .iter()
            .map(|(id, node)| storage_json(id.as_str(), node))
            .collect(),
        transfer_units: graph
            .transfer_units()
            .keys()
            .map(|id| TransferUnitJson { id: id.to_string() })
            .collect(),
        transfer_containers: graph
            .transfer_containers()
            .iter()
            .map(|(id, node)| storage_json(id.as_str(), node))
            .collect(),
        links: graph
            .links()
            .iter()
            .map(|link| LinkJson {
                from: link.from_node().to_string(),
                to: link.to_node().to_string(),
            })
            .collect(),
    }
}

fn storage_json(id: &str, node: &impl HostsContainers) -> StorageJson {
    StorageJson {
        id: id.to_owned(),
        containers: node.containers().iter().map(|variant| variant.name().to_owned()).collect(),
    }
}

fn graph_from_json(
    factory_json: FactoryJson,
    limits: GraphLimits,
) -> Result<FactoryGraph, StoreError> {
    let mut graph = FactoryGraph::with_limits(limits);

    for node in factory_json.industries {
        let id = parse_id("industry id", &node.id)?;
        let industry = lookup_variant(&node.id, &node.industry)?;
        graph.add_industry(id, industry)?;
    }
    for node in factory_json.containers {
        let id = parse_id("container id", &node.id)?;
        let containers = lookup_variants(&node)?;
        graph.add_container(id, containers)?;
    }
    for node in factory_json.transfer_units {
        graph.add_transfer_unit(parse_id("transfer unit id", &node.id)?)?;
    }
    for node in factory_json.transfer_containers {
        let id = parse_id("transfer container id", &node.id)?;
        let containers = lookup_variants(&node)?;
        graph.add_transfer_container(id, containers)?;
    }

    for link in factory_json.links {
        let from = parse_node_ref(&link.from)?;
        let to = parse_node_ref(&link.to)?;
        graph.push_link_unchecked(Link::new(from, to));
    }
    graph.validate()?;

    Ok(graph)
}

fn parse_id<T>(field: &'static str, value: &str) -> Result<Id<T>, StoreError> {
    Id::new(value).map_err(|source| StoreError::InvalidId {
        field,
        value: value.to_owned(),
        source,
    })
}

fn parse_node_ref(value: &str) -> Result<NodeRef, StoreError> {
    value
        .parse()
        .map_err(|source| StoreError::InvalidNodeRef { value: value.to_owned(), source })
}

fn lookup_variant(node: &str, name: &str) -> Result<&'static EquipmentVariant, StoreError> {
    catalog::lookup(name).ok_or_else(|| StoreError::UnknownEquipment {
        node: node.to_owned(),
        name: name.to_owned(),
    })
}

fn lookup_variants(node: &StorageJson) -> Result<Vec<&'static EquipmentVariant>, StoreError> {
    node.containers.iter().map(|name| lookup_variant(&node.id, name)).collect()
}

#[cfg(test)]
mod tests {
    use super::JsonSerializer;
    use crate::model::fixtures::{assembly_pair, ore_to_parts};
    use crate::model::{GraphError, GraphLimits};
    use crate::store::{GraphSerializer, StoreError};

    #[test]
    fn snapshot_restores_the_same_graph() {
        let graph = ore_to_parts().expect("fixture");
        let serializer = JsonSerializer::new();
        let raw = serializer.serialize(&graph).expect("serialize");
        assert_eq!(serializer.parse(&raw).expect("parse"), graph);
    }

    #[test]
    fn snapshot_names_variants_and_node_refs() {
        let graph = assembly_pair().expect("fixture");
        let raw = JsonSerializer::new().serialize(&graph).expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(value["industries"][0]["industry"], "Assembly Line S");
        assert_eq!(value["containers"][0]["containers"][0], "Container M");
        assert_eq!(value["transfer_units"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["links"][0]["from"], "container/c-in");
        assert_eq!(value["links"][0]["to"], "industry/al-1");
    }

    #[test]
    fn unknown_equipment_is_rejected() {
        let raw = r#"{ "industries": [ { "id": "x", "industry": "Warp Drive L" } ] }"#;
        match JsonSerializer::new().parse(raw) {
            Err(StoreError::UnknownEquipment { node, name }) => {
                assert_eq!(node, "x");
                assert_eq!(name, "Warp Drive L");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn bad_node_refs_and_ids_are_rejected() {
        let raw = r#"{ "links": [ { "from": "pipe/a", "to": "industry/b" } ] }"#;
        assert!(matches!(
            JsonSerializer::new().parse(raw),
            Err(StoreError::InvalidNodeRef { .. })
        ));

        let raw = r#"{ "transfer_units": [ { "id": "" } ] }"#;
        assert!(matches!(
            JsonSerializer::new().parse(raw),
            Err(StoreError::InvalidId { field: "transfer unit id", .. })
        ));
    }

    #[test]
    fn loaded_links_are_validated() {
        let raw = r#"{
            "industries": [ { "id": "a", "industry": "Smelter M" } ],
            "links": [ { "from": "container/missing", "to": "industry/a" } ]
        }"#;
        assert!(matches!(
            JsonSerializer::new().parse(raw),
            Err(StoreError::Graph(GraphError::DanglingLink { .. }))
        ));
    }

    #[test]
    fn parse_applies_configured_capacity() {
        let graph = assembly_pair().expect("fixture");
        let raw = JsonSerializer::new().serialize(&graph).expect("serialize");
        let strict = JsonSerializer::with_limits(GraphLimits { max_container_links: 1 });
        assert!(matches!(
            strict.parse(&raw),
            Err(StoreError::Graph(GraphError::CapacityExceeded { capacity: 1, .. }))
        ));
    }
}
