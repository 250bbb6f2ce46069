//! Default exam blueprint: ten weighted categories and their NEC 2020 references.
//!
//! Seeding writes through [`BlueprintServiceTrait`], so the defaults pass the
//! same validation as any other write and can be replayed on every start.
//! Categories are upserted by code and references are skipped when the same
//! article, section and edition already exist.

use log::info;
use rust_decimal::Decimal;

use blueprint_core::blueprint::{BlueprintServiceTrait, NewBlueprintCategory, NewNecRef};
use blueprint_core::errors::Result;

const NEC_EDITION: &str = "2020";

const DEFAULT_CATEGORIES: [(&str, &str, &str, i64); 10] = [
    (
        "BC01",
        "Wiring Methods & Materials",
        "Wiring methods, materials, and installations including raceways, cables, and boxes",
        15,
    ),
    (
        "BC02",
        "Wiring & Protection",
        "Branch circuits, feeders, services, grounding, and overcurrent protection",
        12,
    ),
    (
        "BC03",
        "General Electrical Theory",
        "Definitions, calculations, and fundamental electrical theory",
        10,
    ),
    (
        "BC04",
        "Equipment for General Use",
        "Appliances, motors, air conditioning, refrigeration, and general use equipment",
        10,
    ),
    (
        "BC05",
        "Plan Reading",
        "Blueprint reading, electrical symbols, and construction documents",
        8,
    ),
    (
        "BC06",
        "Communication Systems",
        "Communication circuits, data systems, and low-voltage installations",
        5,
    ),
    (
        "BC07",
        "Motors & Controls",
        "Motor circuits, controllers, and control devices",
        15,
    ),
    (
        "BC08",
        "Special Conditions",
        "Emergency systems, standby power, fire alarms, and special conditions",
        8,
    ),
    (
        "BC09",
        "Special Equipment",
        "Electric signs, cranes, elevators, welders, and special equipment",
        10,
    ),
    (
        "BC10",
        "Special Occupancies",
        "Hazardous locations, commercial garages, and special occupancies",
        7,
    ),
];

const DEFAULT_NEC_REFS: [(&str, &str, &str); 10] = [
    ("300", "5", "Underground Installations"),
    ("210", "19", "Branch Circuits - Dwelling Unit Receptacle Outlets"),
    ("100", "", "Definitions"),
    ("430", "22", "Motor Circuit - Single Motor"),
    ("220", "12", "General Lighting Load"),
    ("800", "2", "Communication Circuits - Definitions"),
    ("430", "32", "Motor Overload Protection"),
    ("700", "12", "Emergency Systems - General Requirements"),
    ("600", "6", "Electric Signs and Outline Lighting - Disconnects"),
    ("511", "3", "Commercial Garages - Classification of Locations"),
];

/// Row counts written by [`seed_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories_upserted: usize,
    pub nec_refs_inserted: usize,
}

pub fn default_categories() -> Vec<NewBlueprintCategory> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(code, name, description, weight)| NewBlueprintCategory {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            weight: Some(Decimal::from(*weight)),
            is_active: true,
        })
        .collect()
}

pub fn default_nec_refs() -> Vec<NewNecRef> {
    DEFAULT_NEC_REFS
        .iter()
        .map(|(article, section, title)| NewNecRef {
            article: article.to_string(),
            section: section.to_string(),
            title: title.to_string(),
            edition: NEC_EDITION.to_string(),
        })
        .collect()
}

pub async fn seed_defaults(service: &dyn BlueprintServiceTrait) -> Result<SeedSummary> {
    info!("Seeding default exam blueprint");

    let categories_upserted = service.save_categories(default_categories()).await?;
    info!("Seeded {} blueprint categories", categories_upserted);

    let nec_refs_inserted = service.save_nec_refs(default_nec_refs()).await?;
    info!("Seeded {} NEC references", nec_refs_inserted);

    Ok(SeedSummary {
        categories_upserted,
        nec_refs_inserted,
    })
}
