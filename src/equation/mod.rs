//! Reaction equations: reactants, products, and an optional condition.

pub mod error;
mod parser;
mod writer;

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::formula::{positive, DataError, Formula, FormulaData};

pub use error::{EquationError, Side};
pub use parser::parse_equation;
pub use writer::{to_equation_string, to_product_string, to_reactant_string};

/// Physical-state notation written after a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StateMarker {
    #[default]
    None,
    /// Gas evolved, `↑`.
    Gas,
    /// Precipitate formed, `↓`.
    Precipitate,
}

impl StateMarker {
    /// Markers that appear as a suffix in equation text.
    pub const SUFFIXED: [StateMarker; 2] = [StateMarker::Gas, StateMarker::Precipitate];

    pub fn symbol(self) -> &'static str {
        match self {
            StateMarker::None => "",
            StateMarker::Gas => "↑",
            StateMarker::Precipitate => "↓",
        }
    }

    pub fn from_symbol(s: &str) -> Option<StateMarker> {
        match s {
            "" => Some(StateMarker::None),
            "↑" => Some(StateMarker::Gas),
            "↓" => Some(StateMarker::Precipitate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reactant {
    pub formula: Formula,
    pub coefficient: NonZeroU32,
}

impl Reactant {
    pub fn new(formula: Formula, coefficient: NonZeroU32) -> Self {
        Self {
            formula,
            coefficient,
        }
    }

    pub fn display(&self, pretty: bool) -> String {
        to_reactant_string(self, pretty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub formula: Formula,
    pub coefficient: NonZeroU32,
    pub marker: StateMarker,
}

impl Product {
    pub fn new(formula: Formula, coefficient: NonZeroU32, marker: StateMarker) -> Self {
        Self {
            formula,
            coefficient,
            marker,
        }
    }

    pub fn display(&self, pretty: bool) -> String {
        to_product_string(self, pretty)
    }
}

/// A reaction statement. Nothing checks that it balances.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "EquationData", try_from = "EquationData")]
pub struct Equation {
    pub(crate) reactants: Vec<Reactant>,
    pub(crate) products: Vec<Product>,
    pub(crate) condition: String,
    pub(crate) description: String,
}

impl Equation {
    pub fn new(reactants: Vec<Reactant>, products: Vec<Product>) -> Self {
        Self {
            reactants,
            products,
            condition: String::new(),
            description: String::new(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, EquationError> {
        parse_equation(s)
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn reactants(&self) -> &[Reactant] {
        &self.reactants
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn display(&self, pretty: bool) -> String {
        to_equation_string(self, pretty)
    }

    pub fn to_data(&self) -> EquationData {
        EquationData {
            reactant: self
                .reactants
                .iter()
                .map(|r| ReactantData {
                    coef: r.coefficient.get(),
                    formula: r.formula.to_data(),
                })
                .collect(),
            product: self
                .products
                .iter()
                .map(|p| ProductData {
                    coef: p.coefficient.get(),
                    formula: p.formula.to_data(),
                    style: p.marker.symbol().to_string(),
                })
                .collect(),
            condition: self.condition.clone(),
            description: self.description.clone(),
        }
    }

    pub fn from_data(data: &EquationData) -> Result<Self, DataError> {
        let reactants = data
            .reactant
            .iter()
            .map(|r| {
                Ok(Reactant::new(
                    Formula::from_data(&r.formula)?,
                    positive(r.coef, "coefficient")?,
                ))
            })
            .collect::<Result<_, DataError>>()?;
        let products = data
            .product
            .iter()
            .map(|p| {
                let marker = StateMarker::from_symbol(&p.style)
                    .ok_or_else(|| DataError::UnknownStateMarker(p.style.clone()))?;
                Ok(Product::new(
                    Formula::from_data(&p.formula)?,
                    positive(p.coef, "coefficient")?,
                    marker,
                ))
            })
            .collect::<Result<_, DataError>>()?;

        Ok(Self {
            reactants,
            products,
            condition: data.condition.clone(),
            description: data.description.clone(),
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_equation_string(self, false))
    }
}

impl FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_equation(s)
    }
}

impl From<Equation> for EquationData {
    fn from(equation: Equation) -> Self {
        equation.to_data()
    }
}

impl TryFrom<EquationData> for Equation {
    type Error = DataError;

    fn try_from(data: EquationData) -> Result<Self, Self::Error> {
        Equation::from_data(&data)
    }
}

/// Serializable shape of an [`Equation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationData {
    pub reactant: Vec<ReactantData>,
    pub product: Vec<ProductData>,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactantData {
    pub coef: u32,
    pub formula: FormulaData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductData {
    pub coef: u32,
    pub formula: FormulaData,
    #[serde(default)]
    pub style: String,
}
