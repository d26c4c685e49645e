//! Premium computation.
//!
//! The `RatingEngine` owns the three rate tables and a mileage banding policy,
//! both fixed at construction time, and exposes a single pure operation:
//! [`RatingEngine::price`]. Pricing composes an additive rate (base rate plus
//! use, age and mileage surcharges) with a chain of multiplicative adjustments
//! (town, body type, model, tax), then applies the long-term discount and the
//! vehicle quantity.
//!
//! Arithmetic is carried in full `f64` precision throughout; rounding to two
//! fraction digits happens only when the resulting [`PremiumQuote`] is
//! formatted. The computation has no side effects and no hidden state, so
//! identical requests always produce identical quotes.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::RatingError;
use crate::request::{QuoteRequest, VehicleUse};
use crate::result::Result;
use crate::tables::RateTables;

/// Base rate charged on every vehicle, as a fraction of its value.
pub const BASE_RATE: f64 = 0.04;
/// Extra rate for commercially used vehicles.
pub const COMMERCIAL_SURCHARGE: f64 = 0.03;
/// Extra rate for drivers younger than [`YOUNG_DRIVER_AGE`] or older than
/// [`SENIOR_DRIVER_AGE`].
pub const AGE_SURCHARGE: f64 = 0.02;
/// Drivers below this age pay the age surcharge.
pub const YOUNG_DRIVER_AGE: u32 = 25;
/// Drivers above this age pay the age surcharge.
pub const SENIOR_DRIVER_AGE: u32 = 60;
/// Premium income tax multiplier, applied unconditionally.
pub const TAX_FACTOR: f64 = 1.05;
/// Largest long-term discount the engine ever applies, in percent.
pub const MAX_DISCOUNT_PERCENT: u8 = 30;
/// Minimum acceptable vehicle value for most body types, in ZMW.
pub const MIN_VALUE_DEFAULT: f64 = 35_000.0;
/// Minimum acceptable vehicle value for motorcycles, in ZMW.
pub const MIN_VALUE_MOTORCYCLE: f64 = 15_000.0;
/// Body type name that triggers the lower minimum-value threshold.
pub const MOTORCYCLE: &str = "Motorcycle";
/// Currency marker used when displaying amounts.
pub const CURRENCY: &str = "ZMW";

/// Minimum acceptable vehicle value for the given body type.
pub fn minimum_value(body_type: &str) -> f64 {
    if body_type == MOTORCYCLE {
        MIN_VALUE_MOTORCYCLE
    } else {
        MIN_VALUE_DEFAULT
    }
}

/// Mileage surcharge policy.
///
/// Two banding variants exist across deployments; `Graduated` is the canonical
/// one and the default. The variant is chosen when the engine is constructed.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum MileageBanding {
    /// Four bands above 50,000: +0.20%, +0.25%, +0.29% and +0.50%.
    #[default]
    Graduated,
    /// Single coarse band: any mileage above 50,000 adds a flat +1%.
    Flat,
}

impl MileageBanding {
    /// Rate surcharge for the given mileage under this banding policy.
    ///
    /// Bands are lower-bound-exclusive and upper-bound-inclusive, so a mileage
    /// of exactly 50,000 carries no surcharge under either policy.
    pub fn surcharge(self, mileage: u32) -> f64 {
        match self {
            MileageBanding::Graduated => match mileage {
                0..=50_000 => 0.0,
                50_001..=100_000 => 0.0020,
                100_001..=150_000 => 0.0025,
                150_001..=200_000 => 0.0029,
                _ => 0.0050,
            },
            MileageBanding::Flat => {
                if mileage > 50_000 {
                    0.01
                } else {
                    0.0
                }
            }
        }
    }
}

/// Priced quote for one request.
///
/// The amount is kept in full precision; [`PremiumQuote::formatted`] and the
/// `Display` impl round to exactly two fraction digits for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    /// Final premium in ZMW, before display rounding.
    pub amount: f64,
}

impl PremiumQuote {
    /// The quoted amount with exactly two fraction digits, e.g. `1764.00`.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.amount)
    }

    /// The formatted amount prefixed with the currency marker, e.g. `ZMW 1764.00`.
    pub fn with_currency(&self) -> String {
        format!("{} {}", CURRENCY, self.formatted())
    }
}

impl fmt::Display for PremiumQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.amount)
    }
}

/// Stateless premium rating engine.
///
/// Holds the rate tables and the mileage banding policy, both read-only after
/// construction, so concurrent pricing calls need no locking.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    tables: RateTables,
    mileage_banding: MileageBanding,
}

impl RatingEngine {
    /// Creates an engine from explicit tables and a banding policy.
    pub fn new(tables: RateTables, mileage_banding: MileageBanding) -> Self {
        RatingEngine {
            tables,
            mileage_banding,
        }
    }

    /// Creates an engine with the compiled-in tables.
    pub fn with_builtin_tables(mileage_banding: MileageBanding) -> Self {
        Self::new(RateTables::builtin(), mileage_banding)
    }

    /// Computes the premium for `request`.
    ///
    /// The only failure is [`RatingError::BelowMinimumValue`], raised when the
    /// vehicle value is under the minimum for its body type (15,000 ZMW for
    /// motorcycles, 35,000 ZMW otherwise). Unknown town, body-type or model
    /// strings contribute a neutral factor, and a discount above 30% is
    /// clamped to 30%, so no other input combination fails.
    pub fn price(&self, request: &QuoteRequest) -> Result<PremiumQuote> {
        let minimum = minimum_value(&request.body_type);
        if request.vehicle_value < minimum {
            return Err(RatingError::BelowMinimumValue { minimum });
        }

        let mut rate = BASE_RATE;
        if request.vehicle_use == VehicleUse::Commercial {
            rate += COMMERCIAL_SURCHARGE;
        }
        // The two age bands never overlap; ages 25-60 inclusive pay no surcharge.
        if request.age < YOUNG_DRIVER_AGE || request.age > SENIOR_DRIVER_AGE {
            rate += AGE_SURCHARGE;
        }
        rate += self.mileage_banding.surcharge(request.mileage);

        let mut premium = request.vehicle_value * rate;
        premium *= self.tables.town.factor(&request.town);
        premium *= self.tables.body_type.factor(&request.body_type);
        if let Some(model) = &request.vehicle_model {
            premium *= self.tables.model.factor(model);
        }
        premium *= TAX_FACTOR;

        let discount = request.long_term_discount.min(MAX_DISCOUNT_PERCENT);
        premium -= premium * f64::from(discount) / 100.0;
        premium *= f64::from(request.vehicle_quantity);

        Ok(PremiumQuote { amount: premium })
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::with_builtin_tables(MileageBanding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RatingEngine {
        RatingEngine::default()
    }

    fn base_request() -> QuoteRequest {
        QuoteRequest::new(30, VehicleUse::Private, "Lusaka", 35_000.0, "Sedan", 50_000)
    }

    #[test]
    fn boundary_scenario_prices_to_1764() {
        // rate 0.04, premium 1400, town x1.20 = 1680, tax x1.05 = 1764.00
        let quote = engine().price(&base_request()).unwrap();
        assert_eq!(quote.formatted(), "1764.00");
        assert_eq!(quote.to_string(), "1764.00");
        assert_eq!(quote.with_currency(), "ZMW 1764.00");
    }

    #[test]
    fn every_band_scenario_prices_to_19230_75() {
        // rate 0.04 + 0.03 + 0.02 + 0.0025 = 0.0925, premium 9250,
        // SUV x1.10 = 10175, tax x1.05 = 10683.75, -10% = 9615.375, x2 = 19230.75
        let request = QuoteRequest::new(
            70,
            VehicleUse::Commercial,
            "Chipata",
            100_000.0,
            "SUV",
            120_000,
        )
        .with_long_term_discount(10)
        .with_vehicle_quantity(2);
        let quote = engine().price(&request).unwrap();
        assert_eq!(quote.formatted(), "19230.75");
    }

    #[test]
    fn identical_requests_yield_identical_quotes() {
        let request = base_request()
            .with_model("Toyota Hilux")
            .with_long_term_discount(15)
            .with_vehicle_quantity(3);
        let first = engine().price(&request).unwrap();
        let second = engine().price(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn value_below_default_minimum_is_rejected() {
        let mut request = base_request();
        request.vehicle_value = 34_999.99;
        let err = engine().price(&request).unwrap_err();
        assert_eq!(
            err,
            RatingError::BelowMinimumValue {
                minimum: MIN_VALUE_DEFAULT
            }
        );
        assert_eq!(
            err.to_string(),
            "Vehicle value cannot be less than 35000.00 ZMW"
        );
    }

    #[test]
    fn motorcycle_has_the_lower_minimum() {
        let mut request = base_request();
        request.body_type = String::from(MOTORCYCLE);
        request.vehicle_value = 10_000.0;
        let err = engine().price(&request).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Vehicle value cannot be less than 15000.00 ZMW"
        );

        // At exactly the motorcycle minimum the quote goes through.
        request.vehicle_value = 15_000.0;
        assert!(engine().price(&request).is_ok());
    }

    #[test]
    fn discount_above_30_is_clamped() {
        let capped = base_request().with_long_term_discount(30);
        let oversized = base_request().with_long_term_discount(200);
        assert_eq!(
            engine().price(&capped).unwrap(),
            engine().price(&oversized).unwrap()
        );
    }

    #[test]
    fn unknown_keys_contribute_a_neutral_factor() {
        // An unlisted town prices exactly like one rated against empty tables.
        let mut unknown_town = base_request();
        unknown_town.town = String::from("Mongu");
        let empty_towns = RatingEngine::new(
            RateTables {
                town: crate::tables::RateTable::new::<&str, _>([]),
                ..RateTables::builtin()
            },
            MileageBanding::Graduated,
        );
        assert_eq!(
            engine().price(&unknown_town).unwrap(),
            empty_towns.price(&unknown_town).unwrap()
        );

        // An unlisted body type is neutral too.
        let mut unknown_body = base_request();
        unknown_body.body_type = String::from("Hovercraft");
        assert_eq!(engine().price(&unknown_body).unwrap().formatted(), "1764.00");

        // An unlisted model prices exactly like a request with no model at all.
        let known = base_request();
        let no_model = engine().price(&known).unwrap();
        let odd_model = engine().price(&known.with_model("Reliant Robin")).unwrap();
        assert_eq!(no_model, odd_model);
    }

    #[test]
    fn quantity_scales_linearly() {
        let single = engine().price(&base_request()).unwrap();
        let triple = engine()
            .price(&base_request().with_vehicle_quantity(3))
            .unwrap();
        assert_eq!(triple.amount, single.amount * 3.0);
    }

    #[test]
    fn age_surcharge_applies_outside_25_to_60() {
        let at = |age: u32| {
            let mut request = base_request();
            request.age = age;
            engine().price(&request).unwrap().amount
        };
        assert!(at(24) > at(25));
        assert_eq!(at(25), at(60));
        assert!(at(61) > at(60));
        assert_eq!(at(24), at(61));
    }

    #[test]
    fn graduated_band_edges() {
        let banding = MileageBanding::Graduated;
        assert_eq!(banding.surcharge(0), 0.0);
        assert_eq!(banding.surcharge(50_000), 0.0);
        assert_eq!(banding.surcharge(50_001), 0.0020);
        assert_eq!(banding.surcharge(100_000), 0.0020);
        assert_eq!(banding.surcharge(100_001), 0.0025);
        assert_eq!(banding.surcharge(150_000), 0.0025);
        assert_eq!(banding.surcharge(150_001), 0.0029);
        assert_eq!(banding.surcharge(200_000), 0.0029);
        assert_eq!(banding.surcharge(200_001), 0.0050);
    }

    #[test]
    fn flat_banding_collapses_to_one_percent() {
        let banding = MileageBanding::Flat;
        assert_eq!(banding.surcharge(50_000), 0.0);
        assert_eq!(banding.surcharge(50_001), 0.01);
        assert_eq!(banding.surcharge(500_000), 0.01);

        // The flat engine rates 120k mileage like the graduated engine rates
        // a request whose surcharge happens to be 1%.
        let flat = RatingEngine::with_builtin_tables(MileageBanding::Flat);
        let mut request = base_request();
        request.mileage = 120_000;
        let quote = flat.price(&request).unwrap();
        // rate 0.04 + 0.01 = 0.05, premium 1750, x1.20 = 2100, x1.05 = 2205.00
        assert_eq!(quote.formatted(), "2205.00");
    }

    #[test]
    fn minimum_value_guard_short_circuits() {
        // Even a heavily adjusted request fails fast on the value check.
        let request = QuoteRequest::new(
            19,
            VehicleUse::Commercial,
            "Lusaka",
            100.0,
            "Tanker",
            300_000,
        )
        .with_model("Jeep Wrangler")
        .with_vehicle_quantity(50);
        assert!(matches!(
            engine().price(&request),
            Err(RatingError::BelowMinimumValue { .. })
        ));
    }
}
