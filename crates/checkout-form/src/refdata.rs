//! Reference Data
//!
//! Read-only lookup tables supplied alongside the form: which territories
//! require a tax ID (and with what prefix), and the precomputed price
//! display strings per territory. The tables are serde types so a page can
//! ship them as JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Plan tiers, in display order.
pub const TIERS: [&str; 5] = ["donor", "bronze", "silver", "gold", "platinum"];

/// Territory and pricing lookup tables.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Territory code → tax-ID prefix. Absence means no tax field.
    #[serde(default)]
    tax_prefixes: HashMap<String, String>,

    /// Territory code → price table key (territories share tables).
    #[serde(default)]
    price_keys: HashMap<String, String>,

    /// Price table key → precomputed display strings.
    #[serde(default)]
    price_index: HashMap<String, Vec<String>>,

    /// Row key (`{tier}-detailed` / `{tier}-updater`) → position within a
    /// price table entry.
    #[serde(default)]
    price_positions: HashMap<String, usize>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse tables shipped as JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Tables with the EU VAT prefixes baked in and no pricing.
    pub fn builtin() -> Self {
        let mut data = Self::default();
        for code in [
            "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "HU", "IE", "IT",
            "LV", "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "GB",
        ] {
            data.tax_prefixes.insert(code.to_string(), code.to_string());
        }
        // Greek VAT IDs carry the legacy "EL" prefix.
        data.tax_prefixes.insert("GR".to_string(), "EL".to_string());
        data
    }

    pub fn with_tax_prefix(mut self, territory: &str, prefix: &str) -> Self {
        self.tax_prefixes.insert(territory.to_string(), prefix.to_string());
        self
    }

    /// Tax-ID prefix for a territory, if it requires one.
    pub fn tax_prefix(&self, territory: &str) -> Option<&str> {
        self.tax_prefixes.get(territory).map(String::as_str)
    }

    /// Display string for one price row in a territory's table.
    pub fn price_row(&self, territory: &str, row_key: &str) -> Option<&str> {
        let key = self.price_keys.get(territory)?;
        let table = self.price_index.get(key)?;
        let pos = *self.price_positions.get(row_key)?;
        table.get(pos).map(String::as_str)
    }

    /// All row keys a price table entry is indexed by.
    pub fn row_keys() -> Vec<String> {
        TIERS
            .iter()
            .flat_map(|tier| {
                ["detailed", "updater"]
                    .iter()
                    .map(move |kind| format!("{tier}-{kind}"))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tax_prefixes() {
        let data = ReferenceData::builtin();
        assert_eq!(data.tax_prefix("DE"), Some("DE"));
        assert_eq!(data.tax_prefix("GR"), Some("EL"));
        assert_eq!(data.tax_prefix("US"), None);
        assert_eq!(data.tax_prefix(""), None);
    }

    #[test]
    fn test_row_keys_cover_all_tiers() {
        let keys = ReferenceData::row_keys();
        assert_eq!(keys.len(), 10);
        assert!(keys.contains(&"donor-detailed".to_string()));
        assert!(keys.contains(&"platinum-updater".to_string()));
    }

    #[test]
    fn test_price_lookup_from_json() {
        let data = ReferenceData::from_json(
            r#"{
                "tax_prefixes": {"DE": "DE"},
                "price_keys": {"DE": "eur", "AT": "eur"},
                "price_index": {"eur": ["€5/month", "€120/month"]},
                "price_positions": {"donor-detailed": 0, "bronze-detailed": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(data.price_row("DE", "donor-detailed"), Some("€5/month"));
        assert_eq!(data.price_row("AT", "bronze-detailed"), Some("€120/month"));
        assert_eq!(data.price_row("DE", "gold-detailed"), None);
        assert_eq!(data.price_row("US", "donor-detailed"), None);
    }
}
