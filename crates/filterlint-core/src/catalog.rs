//! Known item class and base type names.
//!
//! `Class` and `BaseType` values are accepted when they appear as a
//! case-insensitive substring of at least one catalog entry, so `"Flask"`
//! matches `"Life Flasks"`. Each set is the union of the known names and a
//! user whitelist.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::keyword::CatalogSet;

/// Item classes shipped with the linter.
const BUILTIN_CLASSES: &[&str] = &[
    "Active Skill Gems",
    "Amulets",
    "Belts",
    "Body Armours",
    "Boots",
    "Bows",
    "Claws",
    "Currency",
    "Daggers",
    "Divination Card",
    "Fishing Rods",
    "Gloves",
    "Helmets",
    "Hybrid Flasks",
    "Jewel",
    "Labyrinth Item",
    "Labyrinth Map Item",
    "Labyrinth Trinket",
    "Life Flasks",
    "Mana Flasks",
    "Map Fragments",
    "Maps",
    "One Hand Axes",
    "One Hand Maces",
    "One Hand Swords",
    "Quest Items",
    "Quivers",
    "Rings",
    "Sceptres",
    "Shields",
    "Stackable Currency",
    "Staves",
    "Support Skill Gems",
    "Thrusting One Hand Swords",
    "Two Hand Axes",
    "Two Hand Maces",
    "Two Hand Swords",
    "Utility Flasks",
    "Wands",
];

/// A selection of base types shipped with the linter.
const BUILTIN_BASES: &[&str] = &[
    "Albino Rhoa Feather",
    "Amber Amulet",
    "Armourer's Scrap",
    "Blacksmith's Whetstone",
    "Blessed Orb",
    "Cartographer's Chisel",
    "Chaos Orb",
    "Chromatic Orb",
    "Coral Ring",
    "Diamond Ring",
    "Divine Life Flask",
    "Divine Mana Flask",
    "Divine Orb",
    "Eternal Life Flask",
    "Eternal Mana Flask",
    "Eternal Orb",
    "Exalted Orb",
    "Gemcutter's Prism",
    "Glassblower's Bauble",
    "Gold Amulet",
    "Gold Ring",
    "Heavy Belt",
    "Jeweller's Orb",
    "Leather Belt",
    "Mirror of Kalandra",
    "Onyx Amulet",
    "Orb of Alchemy",
    "Orb of Alteration",
    "Orb of Augmentation",
    "Orb of Chance",
    "Orb of Fusing",
    "Orb of Regret",
    "Orb of Scouring",
    "Orb of Transmutation",
    "Portal Scroll",
    "Quicksilver Flask",
    "Regal Orb",
    "Rustic Sash",
    "Sapphire Ring",
    "Scroll of Wisdom",
    "Two-Stone Ring",
    "Unset Ring",
    "Vaal Orb",
];

/// Catalog data as stored on disk.
///
/// ```json
/// { "classes": [], "bases": [], "whitelistClasses": [], "whitelistBases": [] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    /// Known item classes.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Known base types.
    #[serde(default)]
    pub bases: Vec<String>,
    /// User-whitelisted item classes.
    #[serde(default)]
    pub whitelist_classes: Vec<String>,
    /// User-whitelisted base types.
    #[serde(default)]
    pub whitelist_bases: Vec<String>,
}

/// A set of names with case-folded copies for matching.
#[derive(Debug, Clone, Default)]
pub struct NameSet {
    names: Vec<String>,
    folded: Vec<String>,
}

impl NameSet {
    /// Creates a set from names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.extend(names);
        set
    }

    /// Adds names to the set, skipping duplicates.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            let folded = name.to_lowercase();
            if !self.folded.contains(&folded) {
                self.names.push(name);
                self.folded.push(folded);
            }
        }
    }

    /// Returns true if `value` is a case-insensitive substring of any name.
    pub fn matches(&self, value: &str) -> bool {
        let needle = value.to_lowercase();
        self.folded.iter().any(|name| name.contains(&needle))
    }

    /// Returns the names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the set has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Item classes and base types used to validate `Class` and `BaseType`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: NameSet,
    bases: NameSet,
}

impl Catalog {
    /// Creates a catalog from class and base names.
    pub fn new<C, B>(classes: C, bases: B) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            classes: NameSet::new(classes),
            bases: NameSet::new(bases),
        }
    }

    /// Returns the catalog shipped with the linter.
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CLASSES.iter().copied(),
            BUILTIN_BASES.iter().copied(),
        )
    }

    /// Builds a catalog from on-disk data, merging known and whitelisted names.
    pub fn from_data(data: CatalogData) -> Self {
        let mut catalog = Self::new(data.classes, data.bases);
        catalog.whitelist(data.whitelist_classes, data.whitelist_bases);
        catalog
    }

    /// Parses catalog JSON.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::from_data(data))
    }

    /// Reads a catalog JSON file.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Adds whitelisted classes and bases.
    pub fn whitelist<C, B>(&mut self, classes: C, bases: B)
    where
        C: IntoIterator,
        C::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        self.classes.extend(classes);
        self.bases.extend(bases);
    }

    /// Returns the item classes.
    pub fn classes(&self) -> &NameSet {
        &self.classes
    }

    /// Returns the base types.
    pub fn bases(&self) -> &NameSet {
        &self.bases
    }

    /// Returns the requested set.
    pub fn set(&self, set: CatalogSet) -> &NameSet {
        match set {
            CatalogSet::Classes => &self.classes,
            CatalogSet::Bases => &self.bases,
        }
    }
}
