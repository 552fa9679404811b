//! Post-run analytics over the winning allocation.
//!
//! [`AllocationReport`] turns a best chromosome into the multi-view
//! structure the serving layer returns: a per-item breakdown, category
//! rollups, headline summary metrics, and top-5 rankings. Everything here
//! is pure post-processing; the report never re-runs any search.

use crate::catalog::Catalog;
use crate::ga::Chromosome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of entries in each top-N view.
const TOP_N: usize = 5;

/// One selected item's contribution to the winning allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBreakdown {
    pub id: u32,
    pub name: String,
    /// Units placed.
    pub quantity: u32,
    /// Area of a single unit.
    pub unit_area: f64,
    /// Profit of a single unit.
    pub unit_profit: f64,
    /// Area contributed by all placed units.
    pub total_area: f64,
    /// Profit contributed by all placed units.
    pub total_profit: f64,
    /// Profit per unit of area; 0 when the item occupies no area.
    pub efficiency: f64,
    /// Share of the allocation's total profit, in percent.
    pub profit_share_pct: f64,
    /// Share of the allocation's total area, in percent.
    pub area_share_pct: f64,
    /// 1-based position in the profit-descending ordering.
    pub rank: usize,
}

/// Aggregated view of one category bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRollup {
    pub category: String,
    /// Distinct selected items in this category.
    pub item_count: usize,
    /// Units placed across those items.
    pub unit_count: u64,
    pub total_profit: f64,
    pub total_area: f64,
    /// Arithmetic mean of the member items' efficiencies, not the ratio
    /// of the category totals. The two differ whenever item areas differ.
    pub mean_efficiency: f64,
}

/// Headline numbers for the whole allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Distinct items with nonzero quantity.
    pub distinct_items: usize,
    /// Units placed across all items.
    pub total_units: u64,
    pub total_profit: f64,
    pub total_area: f64,
    /// Profit per unit of area over the whole allocation.
    pub global_efficiency: f64,
    /// Occupied share of the area budget, in percent.
    pub area_utilization_pct: f64,
    pub avg_profit_per_item: f64,
    pub avg_area_per_item: f64,
}

/// Multi-view report over the best chromosome of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    /// Selected items, profit-descending, ranked 1..N.
    pub items: Vec<ItemBreakdown>,
    /// Category rollups, profit-descending.
    pub categories: Vec<CategoryRollup>,
    pub summary: Summary,
    /// The five most area-efficient selected items.
    pub top_by_efficiency: Vec<ItemBreakdown>,
    /// The five largest profit contributors.
    pub top_by_profit: Vec<ItemBreakdown>,
}

/// Running totals for one category, filled in a single accumulation pass.
#[derive(Default)]
struct CategoryAccumulator {
    item_count: usize,
    unit_count: u64,
    total_profit: f64,
    total_area: f64,
    efficiency_sum: f64,
}

impl AllocationReport {
    /// Builds the report for a winning chromosome.
    ///
    /// `total_area` and `total_profit` are the run's own totals for the
    /// chromosome; `area_budget` feeds the utilization percentage. Every
    /// ratio in the report substitutes 0 on a zero denominator instead of
    /// failing.
    pub fn build(
        chromosome: &Chromosome,
        catalog: &Catalog,
        total_area: f64,
        total_profit: f64,
        area_budget: f64,
    ) -> Self {
        let mut items: Vec<ItemBreakdown> = chromosome
            .genes()
            .iter()
            .zip(catalog.items())
            .filter(|(&quantity, _)| quantity > 0)
            .map(|(&quantity, item)| {
                let item_area = f64::from(quantity) * item.area;
                let item_profit = f64::from(quantity) * item.profit;
                ItemBreakdown {
                    id: item.id,
                    name: item.name.clone(),
                    quantity,
                    unit_area: item.area,
                    unit_profit: item.profit,
                    total_area: item_area,
                    total_profit: item_profit,
                    efficiency: ratio(item_profit, item_area),
                    profit_share_pct: percentage(item_profit, total_profit),
                    area_share_pct: percentage(item_area, total_area),
                    rank: 0,
                }
            })
            .collect();

        // Stable sort: equal contributors keep catalog order.
        items.sort_by(|a, b| {
            b.total_profit
                .partial_cmp(&a.total_profit)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (i, entry) in items.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        let categories = rollup_categories(chromosome, catalog);

        let distinct_items = items.len();
        let total_units: u64 = items.iter().map(|e| u64::from(e.quantity)).sum();
        let summary = Summary {
            distinct_items,
            total_units,
            total_profit,
            total_area,
            global_efficiency: ratio(total_profit, total_area),
            area_utilization_pct: percentage(total_area, area_budget),
            avg_profit_per_item: ratio(total_profit, distinct_items as f64),
            avg_area_per_item: ratio(total_area, distinct_items as f64),
        };

        let mut top_by_efficiency = items.clone();
        top_by_efficiency.sort_by(|a, b| {
            b.efficiency
                .partial_cmp(&a.efficiency)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top_by_efficiency.truncate(TOP_N);

        let top_by_profit = items.iter().take(TOP_N).cloned().collect();

        Self {
            items,
            categories,
            summary,
            top_by_efficiency,
            top_by_profit,
        }
    }
}

/// Groups selected items by category in one pass over the chromosome.
fn rollup_categories(chromosome: &Chromosome, catalog: &Catalog) -> Vec<CategoryRollup> {
    let mut groups: BTreeMap<&str, CategoryAccumulator> = BTreeMap::new();

    for (&quantity, item) in chromosome.genes().iter().zip(catalog.items()) {
        if quantity == 0 {
            continue;
        }
        let area = f64::from(quantity) * item.area;
        let profit = f64::from(quantity) * item.profit;

        let group = groups.entry(item.category_label()).or_default();
        group.item_count += 1;
        group.unit_count += u64::from(quantity);
        group.total_profit += profit;
        group.total_area += area;
        group.efficiency_sum += ratio(profit, area);
    }

    let mut rollups: Vec<CategoryRollup> = groups
        .into_iter()
        .map(|(category, acc)| CategoryRollup {
            category: category.to_string(),
            item_count: acc.item_count,
            unit_count: acc.unit_count,
            total_profit: acc.total_profit,
            total_area: acc.total_area,
            mean_efficiency: ratio(acc.efficiency_sum, acc.item_count as f64),
        })
        .collect();

    rollups.sort_by(|a, b| {
        b.total_profit
            .partial_cmp(&a.total_profit)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rollups
}

/// Ratio with the zero-denominator guard applied throughout the report.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

fn percentage(part: f64, whole: f64) -> f64 {
    ratio(part, whole) * 100.0
}
