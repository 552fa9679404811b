//! Catalog data model.
//!
//! A [`Catalog`] is the immutable universe of choices for one optimization
//! run: an ordered list of [`CatalogItem`]s. The order is significant:
//! chromosome genes are positional, index-aligned with the catalog, not
//! keyed by item id.

use serde::{Deserialize, Serialize};

/// Rollup bucket for items that carry no explicit category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// One item that can be placed on the floor.
///
/// Items are read-only for the duration of a run. `area` is the footprint
/// of a single unit; `stock` caps how many units a chromosome may
/// allocate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Floor area occupied by one unit, in square meters.
    pub area: f64,
    /// Profit contributed by one unit.
    pub profit: f64,
    /// Maximum number of units available.
    pub stock: u32,
    /// Optional grouping label; items without one roll up under
    /// [`UNCATEGORIZED`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogItem {
    /// Returns the category label, falling back to [`UNCATEGORIZED`].
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Ordered, immutable collection of catalog items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wraps an explicit item list, preserving its order.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items (and therefore genes per chromosome).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The default appliance catalog, served verbatim by `GET /catalog`
    /// and used for run requests that omit their own catalog.
    pub fn builtin() -> Self {
        Self::new(vec![
            item(1, "Mini fridge", 0.25, 40.0, 20, "refrigeration"),
            item(2, "32\" TV", 0.1125, 60.0, 6, "entertainment"),
            item(3, "Washing machine", 0.36, 90.0, 3, "laundry"),
            item(4, "Microwave", 0.20, 25.0, 8, "kitchen"),
            item(5, "Air conditioner", 0.27, 110.0, 2, "climate"),
            item(6, "Blender", 0.04, 8.0, 10, "kitchen"),
            item(7, "Large fridge", 0.6, 220.0, 2, "refrigeration"),
            item(8, "Electric oven", 0.36, 65.0, 3, "kitchen"),
            item(9, "Vacuum cleaner", 0.0875, 28.0, 6, "cleaning"),
            item(10, "Iron", 0.06, 10.0, 12, "laundry"),
            item(11, "Gas stove", 0.48, 130.0, 2, "kitchen"),
            item(12, "Kitchen extractor", 0.18, 45.0, 4, "kitchen"),
        ])
    }
}

fn item(id: u32, name: &str, area: f64, profit: f64, stock: u32, category: &str) -> CatalogItem {
    CatalogItem {
        id,
        name: name.to_string(),
        area,
        profit,
        stock,
        category: Some(category.to_string()),
    }
}
