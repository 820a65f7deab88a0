//! Unit conversion
//!
//! A `from → to → fn` table covering temperature, length and weight.
//! Only listed pairs convert; same-unit and cross-category requests are
//! rejected.

use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

/// Conversion error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Cannot convert from {from} to {to}")]
    Unsupported { from: String, to: String },
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

type Converter = fn(f64) -> f64;
type Table = HashMap<&'static str, HashMap<&'static str, Converter>>;

/// Conversion table, keyed by source unit then target unit
pub static CONVERSIONS: Lazy<Table> = Lazy::new(|| {
    let mut table = Table::new();
    let mut register = |from: &'static str, to: &'static str, f: Converter| {
        table.entry(from).or_default().insert(to, f);
    };

    // Temperature
    register("c", "f", |x| x * 9.0 / 5.0 + 32.0);
    register("c", "k", |x| x + 273.15);
    register("f", "c", |x| (x - 32.0) * 5.0 / 9.0);
    register("f", "k", |x| (x - 32.0) * 5.0 / 9.0 + 273.15);
    register("k", "c", |x| x - 273.15);
    register("k", "f", |x| (x - 273.15) * 9.0 / 5.0 + 32.0);

    // Length
    register("m", "cm", |x| x * 100.0);
    register("m", "km", |x| x / 1000.0);
    register("m", "in", |x| x * 39.3701);
    register("m", "ft", |x| x * 3.28084);
    register("m", "mi", |x| x / 1609.344);
    register("cm", "m", |x| x / 100.0);
    register("cm", "km", |x| x / 100000.0);
    register("cm", "in", |x| x / 2.54);
    register("cm", "ft", |x| x / 30.48);
    register("cm", "mi", |x| x / 160934.4);
    register("km", "m", |x| x * 1000.0);
    register("km", "cm", |x| x * 100000.0);
    register("km", "in", |x| x * 39370.1);
    register("km", "ft", |x| x * 3280.84);
    register("km", "mi", |x| x / 1.60934);
    register("in", "m", |x| x / 39.3701);
    register("in", "cm", |x| x * 2.54);
    register("in", "km", |x| x / 39370.1);
    register("in", "ft", |x| x / 12.0);
    register("in", "mi", |x| x / 63360.0);
    register("ft", "m", |x| x / 3.28084);
    register("ft", "cm", |x| x * 30.48);
    register("ft", "km", |x| x / 3280.84);
    register("ft", "in", |x| x * 12.0);
    register("ft", "mi", |x| x / 5280.0);
    register("mi", "m", |x| x * 1609.344);
    register("mi", "cm", |x| x * 160934.4);
    register("mi", "km", |x| x * 1.60934);
    register("mi", "in", |x| x * 63360.0);
    register("mi", "ft", |x| x * 5280.0);

    // Weight
    register("kg", "g", |x| x * 1000.0);
    register("kg", "lb", |x| x * 2.20462);
    register("kg", "oz", |x| x * 35.274);
    register("g", "kg", |x| x / 1000.0);
    register("g", "lb", |x| x / 453.592);
    register("g", "oz", |x| x / 28.3495);
    register("lb", "kg", |x| x / 2.20462);
    register("lb", "g", |x| x * 453.592);
    register("lb", "oz", |x| x * 16.0);
    register("oz", "kg", |x| x / 35.274);
    register("oz", "g", |x| x * 28.3495);
    register("oz", "lb", |x| x / 16.0);

    table
});

/// Convert `value` between two units
pub fn convert(
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let from = from_unit.to_lowercase();
    let to = to_unit.to_lowercase();
    match CONVERSIONS
        .get(from.as_str())
        .and_then(|targets| targets.get(to.as_str()))
    {
        Some(f) => Ok(f(value)),
        None => Err(ConversionError::Unsupported { from, to }),
    }
}

/// All known unit names, sorted
pub fn units() -> Vec<&'static str> {
    let names: BTreeSet<&'static str> = CONVERSIONS
        .iter()
        .flat_map(|(from, targets)| std::iter::once(*from).chain(targets.keys().copied()))
        .collect();
    names.into_iter().collect()
}
