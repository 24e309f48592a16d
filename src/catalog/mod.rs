// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fabrik-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fabrik and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Equipment catalog.
//!
//! A static, read-only registry of the placeable equipment the planner knows about. Variants are
//! compared by presentation order (category, then tier, then name), which is what every summary
//! table and step sequence iterates in.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

mod items;

pub use items::{
    all, lookup, ASSEMBLY_LINE_L, ASSEMBLY_LINE_M, ASSEMBLY_LINE_S, ASSEMBLY_LINE_XL,
    ASSEMBLY_LINE_XS, CHEMICAL_INDUSTRY_M, CONTAINER_L, CONTAINER_M, CONTAINER_S, CONTAINER_XS,
    ELECTRONICS_INDUSTRY_M, GLASS_FURNACE_M, METALWORK_INDUSTRY_M, PRINTER_3D_M, REFINER_M,
    SMELTER_M, TRANSFER_UNIT,
};

/// Node footprint (pixels) used by step diagrams.
pub const NODE_SIZE: f64 = 50.0;

/// Label font size (pt) used by step diagrams.
pub const FONT_SIZE: f64 = 10.0;

/// Equipment categories in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Ore,
    Pure,
    Product,
    Catalyst,
    StructuralParts,
    IntermediaryParts,
    ComplexParts,
    ExceptionalParts,
    FunctionalParts,
    Ammo,
    Fuel,
    AntiGravity,
    ItemContainers,
    FuelTanks,
    Control,
    Decorative,
    FlightControl,
    Airfoil,
    Engines,
    Industry,
    Instruments,
    Interactive,
    Light,
    Logic,
    Projector,
    Repair,
    Resurrection,
    Seat,
    Sensor,
    Surrogate,
    Warp,
    Weapon,
    CoreUnit,
    TerritoryUnit,
}

impl Category {
    pub const ORDER: [Category; 34] = [
        Self::Ore,
        Self::Pure,
        Self::Product,
        Self::Catalyst,
        Self::StructuralParts,
        Self::IntermediaryParts,
        Self::ComplexParts,
        Self::ExceptionalParts,
        Self::FunctionalParts,
        Self::Ammo,
        Self::Fuel,
        Self::AntiGravity,
        Self::ItemContainers,
        Self::FuelTanks,
        Self::Control,
        Self::Decorative,
        Self::FlightControl,
        Self::Airfoil,
        Self::Engines,
        Self::Industry,
        Self::Instruments,
        Self::Interactive,
        Self::Light,
        Self::Logic,
        Self::Projector,
        Self::Repair,
        Self::Resurrection,
        Self::Seat,
        Self::Sensor,
        Self::Surrogate,
        Self::Warp,
        Self::Weapon,
        Self::CoreUnit,
        Self::TerritoryUnit,
    ];

    /// Position in [`Category::ORDER`].
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ore => "Ore",
            Self::Pure => "Pure",
            Self::Product => "Product",
            Self::Catalyst => "Catalyst",
            Self::StructuralParts => "Structural Parts",
            Self::IntermediaryParts => "Intermediary Parts",
            Self::ComplexParts => "Complex Parts",
            Self::ExceptionalParts => "Exceptional Parts",
            Self::FunctionalParts => "Functional Parts",
            Self::Ammo => "Ammo",
            Self::Fuel => "Fuel",
            Self::AntiGravity => "Anti-Gravity",
            Self::ItemContainers => "Item Containers",
            Self::FuelTanks => "Fuel Tanks",
            Self::Control => "Control",
            Self::Decorative => "Decorative",
            Self::FlightControl => "Flight Control",
            Self::Airfoil => "Airfoil",
            Self::Engines => "Engines",
            Self::Industry => "Industry",
            Self::Instruments => "Instruments",
            Self::Interactive => "Interactive",
            Self::Light => "Light",
            Self::Logic => "Logic",
            Self::Projector => "Projector",
            Self::Repair => "Repair",
            Self::Resurrection => "Resurrection",
            Self::Seat => "Seat",
            Self::Sensor => "Sensor",
            Self::Surrogate => "Surrogate",
            Self::Warp => "Warp",
            Self::Weapon => "Weapon",
            Self::CoreUnit => "Core Unit",
            Self::TerritoryUnit => "Territory Unit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equipment tiers in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Basic,
    Uncommon,
    Advanced,
    Rare,
    Exotic,
    Element,
}

impl Tier {
    pub const ORDER: [Tier; 6] = [
        Self::Basic,
        Self::Uncommon,
        Self::Advanced,
        Self::Rare,
        Self::Exotic,
        Self::Element,
    ];

    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Uncommon => "Uncommon",
            Self::Advanced => "Advanced",
            Self::Rare => "Rare",
            Self::Exotic => "Exotic",
            Self::Element => "Element",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry identifying one kind of placeable equipment.
///
/// Identity is the name: two variants are equal iff their names are equal. Ordering is the
/// presentation order (category, tier, name). Catalog names are unique, so the two agree.
#[derive(Debug)]
pub struct EquipmentVariant {
    name: &'static str,
    category: Category,
    tier: Tier,
    short_label: Option<&'static str>,
}

impl EquipmentVariant {
    pub(crate) const fn new(
        name: &'static str,
        category: Category,
        tier: Tier,
        short_label: Option<&'static str>,
    ) -> Self {
        Self { name, category, tier, short_label }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Compact label drawn inside diagram nodes (`"XS"`, `"Chem"`, ...).
    ///
    /// Falls back to the display name for equipment without a dedicated label.
    pub fn short_label(&self) -> &'static str {
        self.short_label.unwrap_or(self.name)
    }
}

impl PartialEq for EquipmentVariant {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for EquipmentVariant {}

impl Hash for EquipmentVariant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for EquipmentVariant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EquipmentVariant {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_presentation(self, other)
    }
}

impl fmt::Display for EquipmentVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Total presentation order: category, then tier, then display name, then name.
pub fn compare_presentation(a: &EquipmentVariant, b: &EquipmentVariant) -> Ordering {
    a.category
        .priority()
        .cmp(&b.category.priority())
        .then_with(|| a.tier.priority().cmp(&b.tier.priority()))
        .then_with(|| a.display_name().cmp(b.display_name()))
        .then_with(|| a.name.cmp(b.name))
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{
        all, compare_presentation, lookup, Category, Tier, ASSEMBLY_LINE_S, CONTAINER_M,
        CONTAINER_XS, TRANSFER_UNIT,
    };

    #[test]
    fn category_order_matches_declaration() {
        for (idx, category) in Category::ORDER.iter().enumerate() {
            assert_eq!(category.priority(), idx);
        }
        for (idx, tier) in Tier::ORDER.iter().enumerate() {
            assert_eq!(tier.priority(), idx);
        }
    }

    #[test]
    fn catalog_names_are_unique_and_resolvable() {
        let mut names = all().iter().map(|v| v.name()).collect::<Vec<_>>();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before, "duplicate catalog names");

        for variant in all() {
            let found = lookup(variant.name()).expect("lookup by name");
            assert!(std::ptr::eq(found, *variant));
        }
        assert!(lookup("Container XXL").is_none());
    }

    #[test]
    fn containers_sort_before_industries() {
        assert_eq!(compare_presentation(&CONTAINER_M, &ASSEMBLY_LINE_S), Ordering::Less);
        assert_eq!(CONTAINER_XS.category(), Category::ItemContainers);
        assert_eq!(TRANSFER_UNIT.category(), Category::Industry);
    }

    #[test]
    fn presentation_order_is_total() {
        let variants = all();
        for a in variants {
            for b in variants {
                let ord = a.cmp(b);
                assert_eq!(ord == Ordering::Equal, a.name() == b.name());
                assert_eq!(ord.reverse(), b.cmp(a));
            }
        }
    }

    #[test]
    fn short_labels_fall_back_to_name() {
        assert_eq!(ASSEMBLY_LINE_S.short_label(), "S");
        assert_eq!(TRANSFER_UNIT.short_label(), "Transfer Unit");
    }
}
