// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Category, EquipmentVariant, Tier};

pub static ASSEMBLY_LINE_XS: EquipmentVariant =
    EquipmentVariant::new("Assembly Line XS", Category::Industry, Tier::Basic, Some("XS"));
pub static ASSEMBLY_LINE_S: EquipmentVariant =
    EquipmentVariant::new("Assembly Line S", Category::Industry, Tier::Basic, Some("S"));
pub static ASSEMBLY_LINE_M: EquipmentVariant =
    EquipmentVariant::new("Assembly Line M", Category::Industry, Tier::Basic, Some("M"));
pub static ASSEMBLY_LINE_L: EquipmentVariant =
    EquipmentVariant::new("Assembly Line L", Category::Industry, Tier::Basic, Some("L"));
pub static ASSEMBLY_LINE_XL: EquipmentVariant =
    EquipmentVariant::new("Assembly Line XL", Category::Industry, Tier::Basic, Some("XL"));
pub static PRINTER_3D_M: EquipmentVariant =
    EquipmentVariant::new("3D Printer M", Category::Industry, Tier::Basic, Some("3D"));
pub static CHEMICAL_INDUSTRY_M: EquipmentVariant =
    EquipmentVariant::new("Chemical Industry M", Category::Industry, Tier::Basic, Some("Chem"));
pub static ELECTRONICS_INDUSTRY_M: EquipmentVariant =
    EquipmentVariant::new("Electronics Industry M", Category::Industry, Tier::Basic, Some("Elec"));
pub static GLASS_FURNACE_M: EquipmentVariant =
    EquipmentVariant::new("Glass Furnace M", Category::Industry, Tier::Basic, Some("Glass"));
pub static METALWORK_INDUSTRY_M: EquipmentVariant =
    EquipmentVariant::new("Metalwork Industry M", Category::Industry, Tier::Basic, Some("Metal"));
pub static REFINER_M: EquipmentVariant =
    EquipmentVariant::new("Refiner M", Category::Industry, Tier::Basic, Some("Refine"));
pub static SMELTER_M: EquipmentVariant =
    EquipmentVariant::new("Smelter M", Category::Industry, Tier::Basic, Some("Smelt"));
pub static TRANSFER_UNIT: EquipmentVariant =
    EquipmentVariant::new("Transfer Unit", Category::Industry, Tier::Basic, None);

static UNCOMMON_REFINER_M: EquipmentVariant =
    EquipmentVariant::new("Uncommon Refiner M", Category::Industry, Tier::Uncommon, Some("Refine"));
static UNCOMMON_SMELTER_M: EquipmentVariant =
    EquipmentVariant::new("Uncommon Smelter M", Category::Industry, Tier::Uncommon, Some("Smelt"));

pub static CONTAINER_XS: EquipmentVariant =
    EquipmentVariant::new("Container XS", Category::ItemContainers, Tier::Basic, Some("XS"));
pub static CONTAINER_S: EquipmentVariant =
    EquipmentVariant::new("Container S", Category::ItemContainers, Tier::Basic, Some("S"));
pub static CONTAINER_M: EquipmentVariant =
    EquipmentVariant::new("Container M", Category::ItemContainers, Tier::Basic, Some("M"));
pub static CONTAINER_L: EquipmentVariant =
    EquipmentVariant::new("Container L", Category::ItemContainers, Tier::Basic, Some("L"));

static HEMATITE: EquipmentVariant =
    EquipmentVariant::new("Hematite", Category::Ore, Tier::Basic, None);
static BAUXITE: EquipmentVariant =
    EquipmentVariant::new("Bauxite", Category::Ore, Tier::Basic, None);
static IRON_PURE: EquipmentVariant =
    EquipmentVariant::new("Pure Iron", Category::Pure, Tier::Basic, None);
static STEEL_PRODUCT: EquipmentVariant =
    EquipmentVariant::new("Steel Product", Category::Product, Tier::Uncommon, None);

static ALL: [&EquipmentVariant; 23] = [
    &HEMATITE,
    &BAUXITE,
    &IRON_PURE,
    &STEEL_PRODUCT,
    &CONTAINER_XS,
    &CONTAINER_S,
    &CONTAINER_M,
    &CONTAINER_L,
    &ASSEMBLY_LINE_XS,
    &ASSEMBLY_LINE_S,
    &ASSEMBLY_LINE_M,
    &ASSEMBLY_LINE_L,
    &ASSEMBLY_LINE_XL,
    &PRINTER_3D_M,
    &CHEMICAL_INDUSTRY_M,
    &ELECTRONICS_INDUSTRY_M,
    &GLASS_FURNACE_M,
    &METALWORK_INDUSTRY_M,
    &REFINER_M,
    &SMELTER_M,
    &TRANSFER_UNIT,
    &UNCOMMON_REFINER_M,
    &UNCOMMON_SMELTER_M,
];

/// Every catalog entry, in declaration order.
pub fn all() -> &'static [&'static EquipmentVariant] {
    &ALL
}

/// Resolves a catalog entry by its name.
pub fn lookup(name: &str) -> Option<&'static EquipmentVariant> {
    ALL.iter().copied().find(|variant| variant.name() == name)
}
