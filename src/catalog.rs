use once_cell::sync::Lazy;
use rocket::serde::{Deserialize, Serialize};
use rocket::FromFormField;

/// The groups of units offered together in the form.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, FromFormField,
)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[field(value = "length")]
    Length,
    #[field(value = "weight")]
    Weight,
    #[field(value = "temperature")]
    Temperature,
    #[field(value = "volume")]
    Volume,
}

const UNIT_TABLE: [(Category, &[&str]); 4] = [
    (
        Category::Length,
        &["meters", "feet", "kilometers", "miles", "centimeters", "inches"],
    ),
    (Category::Weight, &["kilograms", "pounds", "grams", "ounces"]),
    (Category::Temperature, &["celsius", "fahrenheit", "kelvin"]),
    (Category::Volume, &["liters", "gallons", "milliliters", "cups"]),
];

const REFERENCE_TABLE: [(Category, &[&str]); 4] = [
    (
        Category::Length,
        &["1 meter = 3.281 feet", "1 kilometer = 0.621 miles"],
    ),
    (
        Category::Weight,
        &["1 kilogram = 2.205 pounds", "1 gram = 0.035 ounces"],
    ),
    (Category::Temperature, &["0°C = 32°F", "100°C = 212°F"]),
    (
        Category::Volume,
        &["1 liter = 4.227 cups", "1 gallon = 3.785 liters"],
    ),
];

/// A category and the units it offers, in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CatalogEntry {
    pub category: Category,
    pub label: &'static str,
    pub units: Vec<&'static str>,
}

pub static UNIT_CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    UNIT_TABLE
        .iter()
        .map(|(category, units)| CatalogEntry {
            category: *category,
            label: category.label(),
            units: units.to_vec(),
        })
        .collect()
});

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Length => "📏 Length",
            Category::Weight => "⚖️ Weight",
            Category::Temperature => "🌡️ Temperature",
            Category::Volume => "🧪 Volume",
        }
    }

    /// The value submitted by the category selector.
    pub fn form_value(self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
        }
    }

    pub fn units(self) -> &'static [&'static str] {
        UNIT_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, units)| *units)
            .unwrap_or_default()
    }

    /// Common conversions shown in the reference table.
    pub fn reference(self) -> &'static [&'static str] {
        REFERENCE_TABLE
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, rows)| *rows)
            .unwrap_or_default()
    }

    /// The category offering `unit`, if any.
    pub fn of_unit(unit: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|category| category.units().contains(&unit))
    }
}
