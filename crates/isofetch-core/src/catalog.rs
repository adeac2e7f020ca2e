//! Category catalog: which sprite names to probe and where they are stored.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Decides which remote base URLs a category is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    /// Furniture base, then the furniture-kit fallback.
    #[default]
    Furniture,
    Vegetation,
    /// Floor base; item names also get a `floor_` prefixed candidate.
    Floor,
}

/// A named group of item names sharing a target directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Directory name under the asset root.
    pub name: String,
    #[serde(default)]
    pub kind: CategoryKind,
    pub items: Vec<String>,
}

impl Category {
    pub fn new(name: &str, kind: CategoryKind, items: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind,
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Rejects a name or item that is empty or would escape the category directory.
    pub fn validate(&self) -> Result<()> {
        check_component("category", &self.name)?;
        for item in &self.items {
            check_component("item", item)?;
        }
        Ok(())
    }
}

/// Ordered list of categories; fetch order is list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Kenney isometric sprite names grouped by room.
    pub fn builtin() -> Self {
        use CategoryKind::*;
        Self::new(vec![
            Category::new(
                "cocina",
                Furniture,
                &[
                    "fridge",
                    "cooker",
                    "cabinet",
                    "sink",
                    "counter",
                    "kitchen_cabinet",
                    "kitchen_sink",
                    "refrigerator",
                    "oven",
                    "microwave",
                ],
            ),
            Category::new(
                "living",
                Furniture,
                &[
                    "sofa",
                    "chair",
                    "television",
                    "table",
                    "bookcase",
                    "lamp",
                    "rug",
                    "painting",
                    "table_small",
                    "table_long",
                    "armchair",
                    "couch",
                    "tv",
                ],
            ),
            Category::new(
                "dormitorio",
                Furniture,
                &[
                    "bed",
                    "wardrobe",
                    "desk",
                    "computer",
                    "pillow",
                    "bed_double",
                    "bed_single",
                    "nightstand",
                    "dresser",
                ],
            ),
            Category::new(
                "bano",
                Furniture,
                &["toilet", "shower", "bathtub", "sink_bathroom", "mirror", "towel_rack"],
            ),
            Category::new(
                "patio",
                Vegetation,
                &[
                    "tree",
                    "bush",
                    "grass",
                    "fence",
                    "bench",
                    "flower",
                    "tree_small",
                    "tree_large",
                    "fountain",
                    "pool",
                ],
            ),
            Category::new(
                "pisos",
                Floor,
                &[
                    "tile",
                    "wood",
                    "carpet",
                    "grass_floor",
                    "floor_wood",
                    "floor_tile",
                    "floor_carpet",
                    "parquet",
                    "ceramic",
                ],
            ),
        ])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Keeps only the named categories, preserving catalog order.
    /// Fails if a requested name is not in the catalog.
    pub fn restrict_to(&self, names: &[String]) -> Result<Catalog> {
        for name in names {
            if self.get(name).is_none() {
                bail!("unknown category: {}", name);
            }
        }
        Ok(Catalog::new(
            self.categories
                .iter()
                .filter(|c| names.iter().any(|n| n == &c.name))
                .cloned()
                .collect(),
        ))
    }

    /// Rejects names that are empty or would escape their directory once joined.
    pub fn validate(&self) -> Result<()> {
        self.categories.iter().try_for_each(Category::validate)
    }
}

fn check_component(what: &str, name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." {
        bail!("invalid {} name: {:?}", what, name);
    }
    if name
        .chars()
        .any(|c| c == '/' || c == '\\' || c == '\0' || c.is_control())
    {
        bail!("invalid {} name: {:?}", what, name);
    }
    Ok(())
}
