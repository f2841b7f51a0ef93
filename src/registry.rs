//! The unit registry: resolves unit names into typed units and re-expresses
//! quantities from one unit into another.
//!
//! Units come in two kinds. [`LinearUnit`]s are plain multiples of the base
//! unit of their dimension (meter, kilogram, liter), so converting between two
//! of them is a single ratio. [`TemperatureUnit`]s have different zero points
//! and need an affine (scale and offset) map, which goes through kelvin.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ConversionError;

/// The physical quantity a unit measures.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Dimension {
    Length,
    Mass,
    Volume,
    Temperature,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Volume => "volume",
            Dimension::Temperature => "temperature",
        };
        write!(f, "{}", name)
    }
}

/// Declares [`LinearUnit`] from a table of
/// `Variant: Dimension, "canonical name" | "alias"... ; "symbol" | ... => factor to base`.
///
/// Names and aliases are matched against the lowercased input. Symbols are
/// matched exactly, since their case carries the prefix (`mL` is not `ML`).
macro_rules! linear_units {
    (
        $(
            $variant:ident: $dimension:ident, $name:literal $(| $alias:literal)*
                ; $($symbol:literal)|+ => $factor:expr
        ),*
        $(,)?
    ) => {
        /// A unit that is an exact multiple of the base unit of its dimension.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum LinearUnit {
            $($variant,)*
        }

        impl LinearUnit {
            pub const ALL: &'static [LinearUnit] = &[$(LinearUnit::$variant,)*];

            /// The name this unit is displayed with.
            pub fn name(self) -> &'static str {
                match self {
                    $(LinearUnit::$variant => $name,)*
                }
            }

            pub fn dimension(self) -> Dimension {
                match self {
                    $(LinearUnit::$variant => Dimension::$dimension,)*
                }
            }

            /// The value to multiply a quantity in this unit by to get the same
            /// quantity in the base unit of its dimension.
            pub fn factor(self) -> f64 {
                match self {
                    $(LinearUnit::$variant => $factor,)*
                }
            }

            fn lookup_name(name: &str) -> Option<Self> {
                match name {
                    $($name $(| $alias)* => Some(LinearUnit::$variant),)*
                    _ => None,
                }
            }

            fn lookup_symbol(symbol: &str) -> Option<Self> {
                match symbol {
                    $($($symbol)|+ => Some(LinearUnit::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

linear_units! {
    // length, base meter
    Meter: Length, "meters" | "meter" | "metres" | "metre"; "m" => 1.0,
    Foot: Length, "feet" | "foot"; "ft" => 0.3048,
    Kilometer: Length, "kilometers" | "kilometer" | "kilometres" | "kilometre"; "km" => 1000.0,
    Mile: Length, "miles" | "mile"; "mi" => 1609.344,
    Centimeter: Length, "centimeters" | "centimeter" | "centimetres" | "centimetre"; "cm" => 0.01,
    Inch: Length, "inches" | "inch"; "in" => 0.0254,

    // mass, base kilogram
    Kilogram: Mass, "kilograms" | "kilogram"; "kg" => 1.0,
    Pound: Mass, "pounds" | "pound"; "lb" | "lbs" => 0.45359237,
    Gram: Mass, "grams" | "gram"; "g" => 0.001,
    Ounce: Mass, "ounces" | "ounce"; "oz" => 0.45359237 / 16.0,

    // volume, base liter
    Liter: Volume, "liters" | "liter" | "litres" | "litre"; "L" | "l" => 1.0,
    Gallon: Volume, "gallons" | "gallon"; "gal" => 3.785411784,
    Milliliter: Volume, "milliliters" | "milliliter" | "millilitres" | "millilitre"; "mL" | "ml" => 0.001,
    // US cup, a sixteenth of a US gallon
    Cup: Volume, "cups" | "cup"; "cup" => 3.785411784 / 16.0,
}

const KELVIN_OFFSET: f64 = 273.15;

/// A temperature scale.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: &'static [TemperatureUnit] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Kelvin => "kelvin",
        }
    }

    fn lookup_name(name: &str) -> Option<Self> {
        match name {
            "celsius" => Some(TemperatureUnit::Celsius),
            "fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    fn lookup_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "degC" | "°C" => Some(TemperatureUnit::Celsius),
            "degF" | "°F" => Some(TemperatureUnit::Fahrenheit),
            "K" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }

    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            TemperatureUnit::Kelvin => value,
        }
    }

    fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => kelvin,
        }
    }
}

/// Any unit the registry knows about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnitKind {
    Temperature(TemperatureUnit),
    Linear(LinearUnit),
}

impl UnitKind {
    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Temperature(unit) => unit.name(),
            UnitKind::Linear(unit) => unit.name(),
        }
    }

    pub fn dimension(self) -> Dimension {
        match self {
            UnitKind::Temperature(_) => Dimension::Temperature,
            UnitKind::Linear(unit) => unit.dimension(),
        }
    }
}

impl FromStr for UnitKind {
    type Err = ConversionError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let symbol = value.trim();
        let name = symbol.to_lowercase();
        TemperatureUnit::lookup_symbol(symbol)
            .map(UnitKind::Temperature)
            .or_else(|| LinearUnit::lookup_symbol(symbol).map(UnitKind::Linear))
            .or_else(|| TemperatureUnit::lookup_name(&name).map(UnitKind::Temperature))
            .or_else(|| LinearUnit::lookup_name(&name).map(UnitKind::Linear))
            .ok_or_else(|| ConversionError::UnknownUnit(value.to_string()))
    }
}

impl Display for UnitKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value and the unit it is expressed in.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: UnitKind,
}

impl Quantity {
    pub fn new(value: f64, unit: UnitKind) -> Self {
        Self { value, unit }
    }

    /// Re-express this quantity in `target`. Fails when the two units do not
    /// measure the same dimension.
    pub fn to(&self, target: UnitKind) -> Result<Quantity, ConversionError> {
        if self.unit == target {
            return Ok(*self);
        }

        let value = match (self.unit, target) {
            (UnitKind::Temperature(from), UnitKind::Temperature(to)) => {
                to.from_kelvin(from.to_kelvin(self.value))
            }
            (UnitKind::Linear(from), UnitKind::Linear(to))
                if from.dimension() == to.dimension() =>
            {
                self.value * from.factor() / to.factor()
            }
            (from, to) => {
                return Err(ConversionError::IncompatibleDimensions {
                    from: from.name().to_string(),
                    from_dimension: from.dimension(),
                    to: to.name().to_string(),
                    to_dimension: to.dimension(),
                })
            }
        };

        if !value.is_finite() {
            return Err(ConversionError::OutOfRange {
                value: format!("{:e}", self.value),
                from: self.unit.name().to_string(),
                to: target.name().to_string(),
            });
        }

        Ok(Quantity::new(value, target))
    }
}
