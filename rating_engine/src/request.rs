//! Quote request model.
//!
//! A `QuoteRequest` carries the full set of rated attributes for one pricing
//! call. Basic range validation (age within [18, 100], discount within
//! [0, 30], and so on) is the caller's job — an input widget or CLI parser —
//! so the engine only enforces the minimum-vehicle-value rule itself.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How the vehicle is used. Commercial use carries a rate surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum VehicleUse {
    /// Personal, non-commercial use.
    Private,
    /// Commercial use (taxi, delivery, haulage, ...).
    Commercial,
}

/// Full set of rating inputs for a single quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Driver age in years; expected to be pre-validated to [18, 100].
    pub age: u32,
    /// Private or commercial use.
    pub vehicle_use: VehicleUse,
    /// Town name; any string is accepted, only listed towns adjust the premium.
    pub town: String,
    /// Vehicle value in ZMW.
    pub vehicle_value: f64,
    /// Body type name; keys both the risk table and the minimum-value rule.
    pub body_type: String,
    /// Vehicle mileage (distance units), zero or more.
    pub mileage: u32,
    /// Vehicle model name; `None` means the caller does not rate by model.
    #[serde(default)]
    pub vehicle_model: Option<String>,
    /// Long-term discount in percent; the engine caps it at 30.
    #[serde(default)]
    pub long_term_discount: u8,
    /// Number of vehicles quoted; at least 1.
    #[serde(default = "default_quantity")]
    pub vehicle_quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl QuoteRequest {
    /// Creates a request with the six mandatory attributes.
    ///
    /// Model is unset, discount is 0 and quantity is 1; use the `with_*`
    /// builders for the optional inputs.
    pub fn new(
        age: u32,
        vehicle_use: VehicleUse,
        town: &str,
        vehicle_value: f64,
        body_type: &str,
        mileage: u32,
    ) -> Self {
        QuoteRequest {
            age,
            vehicle_use,
            town: String::from(town),
            vehicle_value,
            body_type: String::from(body_type),
            mileage,
            vehicle_model: None,
            long_term_discount: 0,
            vehicle_quantity: default_quantity(),
        }
    }

    /// Sets the vehicle model used for the model risk adjustment.
    pub fn with_model(mut self, model: &str) -> Self {
        self.vehicle_model = Some(String::from(model));
        self
    }

    /// Sets the long-term discount percentage.
    pub fn with_long_term_discount(mut self, percent: u8) -> Self {
        self.long_term_discount = percent;
        self
    }

    /// Sets the number of vehicles quoted.
    pub fn with_vehicle_quantity(mut self, quantity: u32) -> Self {
        self.vehicle_quantity = quantity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn defaults_cover_the_optional_inputs() {
        let request = QuoteRequest::new(30, VehicleUse::Private, "Lusaka", 35000.0, "Sedan", 50000);
        assert_eq!(request.vehicle_model, None);
        assert_eq!(request.long_term_discount, 0);
        assert_eq!(request.vehicle_quantity, 1);
    }

    #[test]
    fn vehicle_use_parses_case_insensitively() {
        assert_eq!(<VehicleUse as FromStr>::from_str("commercial").unwrap(), VehicleUse::Commercial);
        assert_eq!(<VehicleUse as FromStr>::from_str("Private").unwrap(), VehicleUse::Private);
    }
}
