// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Small ready-made factories used by the demo mode, tests and benchmarks.

use crate::catalog::{
    ASSEMBLY_LINE_M, ASSEMBLY_LINE_S, CONTAINER_L, CONTAINER_M, CONTAINER_S, CONTAINER_XS,
    METALWORK_INDUSTRY_M, REFINER_M, SMELTER_M,
};

use super::graph::{FactoryGraph, GraphError};
use super::ids::{ContainerId, IndustryId, TransferContainerId, TransferUnitId};

/// Two small assembly lines, a medium and a small container, three transfer units.
pub fn assembly_pair() -> Result<FactoryGraph, GraphError> {
    let mut graph = FactoryGraph::new();

    let al1 = graph.add_industry(IndustryId::new("al-1")?, &ASSEMBLY_LINE_S)?;
    let al2 = graph.add_industry(IndustryId::new("al-2")?, &ASSEMBLY_LINE_S)?;
    let c_in = graph.add_container(ContainerId::new("c-in")?, [&CONTAINER_M])?;
    let c_out = graph.add_container(ContainerId::new("c-out")?, [&CONTAINER_S])?;
    for idx in 1..=3 {
        graph.add_transfer_unit(TransferUnitId::new(format!("tu-{idx}"))?)?;
    }

    graph.connect(c_in.clone(), al1.clone())?;
    graph.connect(c_in, al2.clone())?;
    graph.connect(al1, c_out.clone())?;
    graph.connect(al2, c_out)?;

    Ok(graph)
}

/// A smelting/refining chain feeding a metalwork line, with a transfer loop between storages.
pub fn ore_to_parts() -> Result<FactoryGraph, GraphError> {
    let mut graph = FactoryGraph::new();

    let ore = graph.add_container(ContainerId::new("ore")?, [&CONTAINER_L, &CONTAINER_M])?;
    let pure = graph.add_container(ContainerId::new("pure")?, [&CONTAINER_M])?;
    let product = graph.add_container(ContainerId::new("product")?, [&CONTAINER_S])?;
    let parts = graph.add_container(ContainerId::new("parts")?, [&CONTAINER_XS])?;

    let refiner_1 = graph.add_industry(IndustryId::new("refiner-1")?, &REFINER_M)?;
    let refiner_2 = graph.add_industry(IndustryId::new("refiner-2")?, &REFINER_M)?;
    let smelter = graph.add_industry(IndustryId::new("smelter")?, &SMELTER_M)?;
    let metalwork = graph.add_industry(IndustryId::new("metalwork")?, &METALWORK_INDUSTRY_M)?;
    let assembly = graph.add_industry(IndustryId::new("assembly")?, &ASSEMBLY_LINE_M)?;

    graph.connect(ore.clone(), refiner_1.clone())?;
    graph.connect(ore.clone(), refiner_2.clone())?;
    graph.connect(refiner_1, pure.clone())?;
    graph.connect(refiner_2, pure.clone())?;
    graph.connect(pure, smelter.clone())?;
    graph.connect(smelter, product.clone())?;
    graph.connect(product, metalwork.clone())?;
    graph.connect(metalwork, parts.clone())?;
    graph.connect(parts.clone(), assembly.clone())?;

    let buffer = graph.add_transfer_container(TransferContainerId::new("buffer")?, [&CONTAINER_S])?;
    let tu = graph.add_transfer_unit(TransferUnitId::new("tu-parts")?)?;
    graph.connect(parts, tu.clone())?;
    graph.connect(tu, buffer.clone())?;
    graph.connect(buffer, assembly)?;

    Ok(graph)
}
