use serde::{Deserialize, Serialize};

use crate::equation::EquationData;
use crate::formula::FormulaData;

use super::view::{Point, View};

/// The whole store in plain, serializable form.
///
/// Only shape is checked when a document is deserialized; element symbols
/// and quantities are validated when the store restores from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub equations: Vec<EquationData>,
    pub substances: Vec<SubstanceData>,
    #[serde(default)]
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceData {
    pub formula: FormulaData,
    #[serde(default)]
    pub pos: Point,
}
