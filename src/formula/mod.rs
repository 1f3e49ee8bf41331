//! Chemical formulas as ordered element and group components.
//!
//! A [`Formula`] keeps the components in the order they were written:
//! `Ca(OH)2` is a calcium component followed by an `(OH)` group with a
//! count of two. Equality follows that order, so `OH` and `HO` differ.
//!
//! Formulas are built with [`parse_formula`], rendered with
//! [`Formula::display`], and converted to and from the plain
//! [`FormulaData`] shape used for persistence.

pub mod error;
mod parser;
mod tokenizer;
mod writer;

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::equation::{Product, Reactant, StateMarker};

pub use error::{DataError, ErrorKind, FormulaError};
pub use parser::parse_formula;
pub use writer::{to_formula_string, to_pretty_string};

/// One element inside a parenthesized group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupMember {
    pub element: Element,
    pub quantity: NonZeroU32,
}

/// What a component counts: a single element or a parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Unit {
    Element(Element),
    Group(Vec<GroupMember>),
}

/// A unit together with how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component {
    pub unit: Unit,
    pub quantity: NonZeroU32,
}

impl Component {
    pub fn element(element: Element, quantity: NonZeroU32) -> Self {
        Self {
            unit: Unit::Element(element),
            quantity,
        }
    }

    pub fn group(members: Vec<GroupMember>, quantity: NonZeroU32) -> Self {
        Self {
            unit: Unit::Group(members),
            quantity,
        }
    }

    /// Each element with its count multiplied out through the group count.
    pub fn atoms(&self) -> Vec<(Element, u64)> {
        let outer = u64::from(self.quantity.get());
        match &self.unit {
            Unit::Element(e) => vec![(*e, outer)],
            Unit::Group(members) => members
                .iter()
                .map(|m| (m.element, u64::from(m.quantity.get()) * outer))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(into = "FormulaData", try_from = "FormulaData")]
pub struct Formula {
    components: Vec<Component>,
    description: String,
}

impl Formula {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            description: String::new(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, FormulaError> {
        parse_formula(s)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total number of atoms, counting group members once per group repeat.
    pub fn element_count(&self) -> u64 {
        self.components
            .iter()
            .flat_map(Component::atoms)
            .map(|(_, n)| n)
            .sum()
    }

    /// Molar mass in g/mol from standard atomic weights.
    pub fn weight(&self) -> f64 {
        self.components
            .iter()
            .flat_map(Component::atoms)
            .fold(0.0, |acc, (e, n)| acc + e.atomic_weight() * n as f64)
    }

    /// Render the formula; `pretty` switches digits to subscripts.
    pub fn display(&self, pretty: bool) -> String {
        if pretty {
            to_pretty_string(self)
        } else {
            to_formula_string(self)
        }
    }

    pub fn reactant(self, coefficient: NonZeroU32) -> Reactant {
        Reactant::new(self, coefficient)
    }

    pub fn product(self, coefficient: NonZeroU32, marker: StateMarker) -> Product {
        Product::new(self, coefficient, marker)
    }

    pub fn to_data(&self) -> FormulaData {
        FormulaData {
            value: self
                .components
                .iter()
                .map(|c| ComponentData {
                    el: match &c.unit {
                        Unit::Element(e) => UnitData::Element(e.symbol().to_string()),
                        Unit::Group(members) => UnitData::Group(
                            members
                                .iter()
                                .map(|m| MemberData {
                                    el: m.element.symbol().to_string(),
                                    quantity: m.quantity.get(),
                                })
                                .collect(),
                        ),
                    },
                    quantity: c.quantity.get(),
                })
                .collect(),
            description: self.description.clone(),
        }
    }

    pub fn from_data(data: &FormulaData) -> Result<Self, DataError> {
        let components = data
            .value
            .iter()
            .map(|c| {
                let unit = match &c.el {
                    UnitData::Element(symbol) => Unit::Element(lookup(symbol)?),
                    UnitData::Group(members) => {
                        if members.is_empty() {
                            return Err(DataError::EmptyGroup);
                        }
                        Unit::Group(
                            members
                                .iter()
                                .map(|m| {
                                    Ok(GroupMember {
                                        element: lookup(&m.el)?,
                                        quantity: positive(m.quantity, "group member quantity")?,
                                    })
                                })
                                .collect::<Result<_, DataError>>()?,
                        )
                    }
                };
                Ok(Component {
                    unit,
                    quantity: positive(c.quantity, "component quantity")?,
                })
            })
            .collect::<Result<_, DataError>>()?;

        Ok(Self {
            components,
            description: data.description.clone(),
        })
    }
}

/// Structural equality over the ordered components. The description is
/// ignored.
impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for Formula {}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_formula_string(self))
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

impl From<Formula> for FormulaData {
    fn from(formula: Formula) -> Self {
        formula.to_data()
    }
}

impl TryFrom<FormulaData> for Formula {
    type Error = DataError;

    fn try_from(data: FormulaData) -> Result<Self, Self::Error> {
        Formula::from_data(&data)
    }
}

fn lookup(symbol: &str) -> Result<Element, DataError> {
    Element::from_symbol(symbol).ok_or_else(|| DataError::UnknownElement(symbol.to_string()))
}

pub(crate) fn positive(n: u32, what: &'static str) -> Result<NonZeroU32, DataError> {
    NonZeroU32::new(n).ok_or(DataError::ZeroQuantity(what))
}

// ---------------------------------------------------------------------------
// Plain data form
// ---------------------------------------------------------------------------

/// Serializable shape of a [`Formula`]: strings and numbers only.
///
/// ```json
/// { "value": [ { "el": "Ca", "quantity": 1 },
///              { "el": [ { "el": "O", "quantity": 1 },
///                        { "el": "H", "quantity": 1 } ], "quantity": 2 } ],
///   "description": "" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaData {
    pub value: Vec<ComponentData>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentData {
    pub el: UnitData,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitData {
    Element(String),
    Group(Vec<MemberData>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberData {
    pub el: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> Formula {
        parse_formula(s).unwrap_or_else(|e| panic!("bad formula {s:?}: {e}"))
    }

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    #[test]
    fn water_weight() {
        assert_approx(f("H2O").weight(), 18.015, 1e-9);
    }

    #[test]
    fn calcium_hydroxide_weight() {
        assert_approx(f("Ca(OH)2").weight(), 40.078 + 2.0 * (15.999 + 1.008), 1e-9);
    }

    #[test]
    fn element_counts() {
        assert_eq!(f("Ca(OH)2").element_count(), 5);
        assert_eq!(f("H2O").element_count(), 3);
        assert_eq!(f("Al2(SO4)3").element_count(), 17);
        assert_eq!(f("(N2H3)2").element_count(), 10);
    }

    #[test]
    fn empty_formula_counts() {
        let empty = Formula::default();
        assert!(empty.is_empty());
        assert_eq!(empty.element_count(), 0);
        assert_eq!(empty.weight(), 0.0);
        assert_eq!(empty.display(false), "");
    }

    #[test]
    fn display_plain_and_pretty() {
        let caoh2 = f("Ca(OH)2");
        assert_eq!(caoh2.display(false), "Ca(OH)2");
        assert_eq!(caoh2.display(true), "Ca(OH)₂");
        assert_eq!(caoh2.to_string(), "Ca(OH)2");
    }

    #[test]
    fn display_omits_explicit_ones() {
        assert_eq!(f("H2O1").display(false), "H2O");
        assert_eq!(f("(OH)1Na").display(false), "(OH)Na");
        assert_eq!(f("H2O1"), f("H2O"));
    }

    #[test]
    fn equality_is_order_sensitive() {
        assert_ne!(f("OH"), f("HO"));
        assert_ne!(f("NaCl"), f("ClNa"));
        assert_eq!(f("NaCl"), f("NaCl"));
    }

    #[test]
    fn equality_distinguishes_nesting() {
        assert_ne!(f("(OH)2"), f("O2H2"));
        assert_ne!(f("(OH)"), f("OH"));
    }

    #[test]
    fn equality_ignores_description() {
        assert_eq!(f("CO2").with_description("dry ice"), f("CO2"));
    }

    #[test]
    fn data_round_trip() {
        for s in ["H2O", "Ca(OH)2", "Al2(SO4)3", "(NH4)2SO4", "Fe"] {
            let formula = f(s).with_description("note");
            let back = Formula::from_data(&formula.to_data()).unwrap();
            assert_eq!(back, formula);
            assert_eq!(back.description(), "note");
        }
    }

    #[test]
    fn data_shape() {
        let json = serde_json::to_value(f("Ca(OH)2")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "value": [
                    { "el": "Ca", "quantity": 1 },
                    { "el": [ { "el": "O", "quantity": 1 }, { "el": "H", "quantity": 1 } ],
                      "quantity": 2 }
                ],
                "description": ""
            })
        );
    }

    #[test]
    fn deserialize_resolves_symbols() {
        let formula: Formula = serde_json::from_str(
            r#"{ "value": [ { "el": "Na", "quantity": 1 }, { "el": "Cl", "quantity": 1 } ] }"#,
        )
        .unwrap();
        assert_eq!(formula, f("NaCl"));
    }

    #[test]
    fn deserialize_unknown_symbol_fails() {
        let data = FormulaData {
            value: vec![ComponentData {
                el: UnitData::Element("Xx".to_string()),
                quantity: 1,
            }],
            description: String::new(),
        };
        assert_eq!(
            Formula::from_data(&data),
            Err(DataError::UnknownElement("Xx".to_string()))
        );
        let json = serde_json::to_string(&data).unwrap();
        assert!(serde_json::from_str::<Formula>(&json).is_err());
    }

    #[test]
    fn deserialize_zero_quantity_fails() {
        let data = FormulaData {
            value: vec![ComponentData {
                el: UnitData::Element("H".to_string()),
                quantity: 0,
            }],
            description: String::new(),
        };
        assert!(matches!(
            Formula::from_data(&data),
            Err(DataError::ZeroQuantity(_))
        ));
    }

    #[test]
    fn deserialize_empty_group_fails() {
        let data = FormulaData {
            value: vec![ComponentData {
                el: UnitData::Group(Vec::new()),
                quantity: 2,
            }],
            description: String::new(),
        };
        assert_eq!(Formula::from_data(&data), Err(DataError::EmptyGroup));
    }

    #[test]
    fn from_str_matches_parse() {
        let a: Formula = "H2SO4".parse().unwrap();
        assert_eq!(a, f("H2SO4"));
    }
}
