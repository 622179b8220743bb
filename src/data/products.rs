//! Bilateral trade product catalog
//!
//! Which product groups actually move between each ordered country pair.
//! Consumed only by the detailed spillover analysis.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    /// (importer, exporter) -> products bought
    imports: BTreeMap<(String, String), Vec<String>>,
    /// (exporter, importer) -> products sold
    exports: BTreeMap<(String, String), Vec<String>>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a flow: `exporter` ships `products` to `importer`. Both
    /// ledgers are kept in sync.
    pub fn add_flow(&mut self, exporter: &str, importer: &str, products: &[&str]) {
        let listed: Vec<String> = products.iter().map(|p| p.to_string()).collect();
        self.exports
            .insert((exporter.to_string(), importer.to_string()), listed.clone());
        self.imports
            .insert((importer.to_string(), exporter.to_string()), listed);
    }

    pub fn export_products(&self, exporter: &str, importer: &str) -> &[String] {
        self.exports
            .get(&(exporter.to_string(), importer.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn import_products(&self, importer: &str, exporter: &str) -> &[String] {
        self.imports
            .get(&(importer.to_string(), exporter.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Everything moving between the pair from `country`'s ledger, either
    /// direction, deduplicated
    pub fn main_products(&self, country: &str, partner: &str) -> Vec<String> {
        let mut set = BTreeSet::new();
        set.extend(self.export_products(country, partner).iter().cloned());
        set.extend(self.import_products(country, partner).iter().cloned());
        set.into_iter().collect()
    }

    pub fn trading_partners(&self, country: &str) -> Vec<String> {
        let mut partners = BTreeSet::new();
        for (exporter, importer) in self.exports.keys() {
            if exporter == country {
                partners.insert(importer.clone());
            }
        }
        for (importer, exporter) in self.imports.keys() {
            if importer == country {
                partners.insert(exporter.clone());
            }
        }
        partners.into_iter().collect()
    }

    /// Crude 0-100 intensity from the breadth of traded products
    pub fn trade_intensity(&self, country: &str, partner: &str) -> f64 {
        let total = self.export_products(country, partner).len()
            + self.import_products(country, partner).len();
        (total as f64 * 5.0).min(100.0)
    }

    /// Built-in catalog of the region's well-known flows
    pub fn south_asia() -> Self {
        let mut catalog = Self::new();
        catalog.add_flow("India", "Bangladesh", &["textiles", "machinery", "petroleum", "food"]);
        catalog.add_flow("Bangladesh", "India", &["textiles", "food"]);
        catalog.add_flow("India", "Nepal", &["petroleum", "machinery", "food"]);
        catalog.add_flow("Nepal", "India", &["food", "electricity"]);
        catalog.add_flow("India", "Bhutan", &["food", "machinery", "petroleum"]);
        catalog.add_flow("Bhutan", "India", &["electricity", "food"]);
        catalog.add_flow("India", "Sri Lanka", &["pharmaceuticals", "machinery", "textiles"]);
        catalog.add_flow("Sri Lanka", "India", &["textiles", "food"]);
        catalog.add_flow("India", "Pakistan", &["pharmaceuticals", "food"]);
        catalog.add_flow("Pakistan", "India", &["textiles", "food"]);
        catalog.add_flow("India", "Maldives", &["food", "machinery", "pharmaceuticals"]);
        catalog.add_flow("Maldives", "India", &["food"]);
        catalog.add_flow("India", "Afghanistan", &["pharmaceuticals", "food", "textiles"]);
        catalog.add_flow("Afghanistan", "India", &["food"]);
        catalog.add_flow("Pakistan", "Afghanistan", &["food", "textiles", "machinery"]);
        catalog.add_flow("Afghanistan", "Pakistan", &["food"]);
        catalog.add_flow("Pakistan", "Sri Lanka", &["textiles", "food"]);
        catalog.add_flow("Bangladesh", "Nepal", &["textiles"]);
        catalog
    }
}
