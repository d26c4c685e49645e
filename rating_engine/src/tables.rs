//! Immutable rate lookup tables used by the premium computation.
//!
//! A `RateTable` maps a category key (town name, body-type name, or model
//! name) to a multiplicative factor applied to the premium. Lookup on a key
//! that is not listed yields the neutral factor `1.00` — an unknown category
//! simply leaves the premium unchanged, it is never an error.
//!
//! Tables are constructed once at startup and never mutated afterwards; the
//! engine only reads them.

use std::collections::HashMap;

/// Multiplier applied when a lookup key is absent from a table.
pub const NEUTRAL_FACTOR: f64 = 1.0;

/// Immutable mapping from a category key to a premium multiplier.
#[derive(Debug, Clone)]
pub struct RateTable {
    factors: HashMap<String, f64>,
}

impl RateTable {
    /// Builds a table from `(key, factor)` pairs.
    pub fn new<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        RateTable {
            factors: entries.into_iter().map(|(k, f)| (k.into(), f)).collect(),
        }
    }

    /// Returns the factor for `key`, or [`NEUTRAL_FACTOR`] if the key is not listed.
    pub fn factor(&self, key: &str) -> f64 {
        self.factors.get(key).copied().unwrap_or(NEUTRAL_FACTOR)
    }

    /// Returns `true` if `key` has an explicit factor in this table.
    pub fn contains(&self, key: &str) -> bool {
        self.factors.contains_key(key)
    }
}

/// The three lookup tables consulted while rating a request.
#[derive(Debug, Clone)]
pub struct RateTables {
    /// Town-based premium adjustments.
    pub town: RateTable,
    /// Body-type risk adjustments.
    pub body_type: RateTable,
    /// Vehicle-model risk adjustments.
    pub model: RateTable,
}

impl RateTables {
    /// The compiled-in tables the product ships with.
    pub fn builtin() -> Self {
        RateTables {
            town: RateTable::new([
                ("Lusaka", 1.20),
                ("Kitwe", 1.15),
                ("Ndola", 1.10),
                ("Livingstone", 1.07),
                ("Solwezi", 1.05),
                ("Kabwe", 1.03),
            ]),
            body_type: RateTable::new([
                ("Sedan", 1.00),
                ("Hatchback", 1.00),
                ("Wagon", 1.05),
                ("SUV", 1.10),
                ("TRU (Truck)", 1.15),
                ("Trailer", 1.20),
                ("Tanker", 1.25),
                ("Minibus", 1.15),
                ("Van", 1.10),
                ("Pick Up", 1.10),
                ("Double Cab", 1.12),
                ("Convertible", 1.20),
                ("Primemover", 1.25),
                ("Motorcycle", 1.20),
                ("Tricycle", 1.05),
                ("Coupe", 1.07),
            ]),
            model: RateTable::new([
                ("Toyota Corolla", 1.00),
                ("Honda Civic", 1.00),
                ("Ford Ranger", 1.10),
                ("Toyota Hilux", 1.12),
                ("Nissan Navara", 1.12),
                ("Mercedes-Benz C-Class", 1.15),
                ("BMW 3 Series", 1.15),
                ("Toyota Land Cruiser", 1.20),
                ("Jeep Wrangler", 1.20),
                ("Volkswagen Golf", 1.07),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_neutral() {
        let tables = RateTables::builtin();
        assert_eq!(tables.town.factor("Atlantis"), NEUTRAL_FACTOR);
        assert_eq!(tables.body_type.factor("Hovercraft"), NEUTRAL_FACTOR);
        assert_eq!(tables.model.factor("Reliant Robin"), NEUTRAL_FACTOR);
    }

    #[test]
    fn builtin_factors_are_listed() {
        let tables = RateTables::builtin();
        assert_eq!(tables.town.factor("Lusaka"), 1.20);
        assert_eq!(tables.body_type.factor("Tanker"), 1.25);
        assert_eq!(tables.model.factor("Toyota Hilux"), 1.12);
        assert!(tables.body_type.contains("Motorcycle"));
    }
}
