//! Item sets selectable via the ring, and the manifest they are loaded from.

use crate::config::EngineConfig;
use crate::error::CatalogError;
use fnv::FnvHashMap;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemSet {
    pub name: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    item_sets: Vec<ItemSet>,
    #[serde(default)]
    config: EngineConfig,
}

/// Ordered item sets; position in the list is the ring index.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    sets: Vec<ItemSet>,
    by_name: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn new(sets: Vec<ItemSet>) -> Result<Self, CatalogError> {
        let mut by_name = FnvHashMap::default();
        for (i, set) in sets.iter().enumerate() {
            if set.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(i));
            }
            if by_name.insert(set.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateName(set.name.clone()));
            }
        }
        Ok(Self { sets, by_name })
    }

    /// Parse a manifest and return the catalog along with its validated config.
    pub fn from_json(json: &str) -> Result<(Self, EngineConfig), CatalogError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.config.validate()?;
        let catalog = Self::new(manifest.item_sets)?;
        Ok((catalog, manifest.config))
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemSet> {
        self.sets.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSet> {
        self.sets.iter()
    }
}
