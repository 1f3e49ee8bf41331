//! The authoritative collections and the operations that change them.
//!
//! A [`Store`] owns the equation list, the substance list, and the canvas
//! view. Every mutation rebuilds the [`ReactionGraph`] before it returns,
//! so the graph always matches the current equations and substances.
//! Mutations take `&mut self`; sharing a store between threads is the
//! caller's business.

pub mod config;
mod document;
pub mod error;
mod storage;
mod view;

use log::{debug, warn};

use crate::equation::Equation;
use crate::formula::{DataError, Formula};
use crate::graph::{find_substance, ReactionGraph, SubstanceId};

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use document::{Document, SubstanceData};
pub use error::{RestoreError, StoreError};
pub use storage::{KeyValueStore, MemoryStorage};
pub use view::{Point, View};

const SAMPLE_EQUATIONS: [&str; 4] = [
    "CO2+H2O=H2CO3",
    "H2CO3=CO2+H2O",
    "CO2+Ca(OH)2=CaCO3+H2O",
    "CaO+H2O=Ca(OH)2",
];

const SAMPLE_SUBSTANCES: [&str; 6] = ["CO2", "CaO", "Ca(OH)2", "CaCO3", "H2O", "H2CO3"];

/// A tracked formula placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Substance {
    pub formula: Formula,
    pub position: Point,
}

impl Substance {
    pub fn new(formula: Formula) -> Self {
        Self::at(formula, Point::ORIGIN)
    }

    pub fn at(formula: Formula, position: Point) -> Self {
        Self { formula, position }
    }

    pub fn to_data(&self) -> SubstanceData {
        SubstanceData {
            formula: self.formula.to_data(),
            pos: self.position,
        }
    }

    pub fn from_data(data: &SubstanceData) -> Result<Self, DataError> {
        Ok(Self::at(Formula::from_data(&data.formula)?, data.pos))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    config: StoreConfig,
    equations: Vec<Equation>,
    substances: Vec<Substance>,
    view: View,
    graph: ReactionGraph,
    snapshot: Option<Document>,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        let mut store = Self {
            config,
            ..Self::default()
        };
        if store.config.seed_sample_data {
            store.equations = SAMPLE_EQUATIONS
                .iter()
                .filter_map(|s| Equation::parse(s).ok())
                .collect();
            store.substances = SAMPLE_SUBSTANCES
                .iter()
                .filter_map(|s| Formula::parse(s).ok())
                .map(Substance::new)
                .collect();
            store.rebuild();
        }
        store
    }

    /// A store seeded with the carbon dioxide / calcium example network.
    pub fn with_sample_data() -> Self {
        Self::new(StoreConfig::default().with_sample_data(true))
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    pub fn substances(&self) -> &[Substance] {
        &self.substances
    }

    pub fn substance(&self, id: SubstanceId) -> Option<&Substance> {
        self.substances.get(id.index())
    }

    pub fn graph(&self) -> &ReactionGraph {
        &self.graph
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn find_substance(&self, formula: &Formula) -> Option<SubstanceId> {
        find_substance(&self.substances, formula)
    }

    pub fn add_substance(&mut self, substance: Substance) -> Result<SubstanceId, StoreError> {
        if self.find_substance(&substance.formula).is_some() {
            return Err(StoreError::DuplicateSubstance {
                formula: substance.formula.to_string(),
            });
        }
        debug!("adding substance {}", substance.formula);
        self.substances.push(substance);
        self.rebuild();
        Ok(SubstanceId::new(self.substances.len() - 1))
    }

    /// Remove a substance. Ids of the substances after it shift down by one.
    pub fn remove_substance(&mut self, id: SubstanceId) -> Option<Substance> {
        if id.index() >= self.substances.len() {
            return None;
        }
        let removed = self.substances.remove(id.index());
        debug!("removed substance {}", removed.formula);
        self.rebuild();
        Some(removed)
    }

    /// Move a substance on the canvas. Adjacency does not depend on position,
    /// so the graph is left as is.
    pub fn move_substance(&mut self, id: SubstanceId, position: Point) -> bool {
        match self.substances.get_mut(id.index()) {
            Some(s) => {
                s.position = position;
                true
            }
            None => false,
        }
    }

    pub fn add_equation(&mut self, equation: Equation) -> Result<(), StoreError> {
        if self.equations.contains(&equation) {
            return Err(StoreError::DuplicateEquation {
                equation: equation.to_string(),
            });
        }
        debug!("adding equation {equation}");
        self.equations.push(equation);
        self.rebuild();
        Ok(())
    }

    /// Remove every equation equal to `equation` and return how many went.
    pub fn remove_equation(&mut self, equation: &Equation) -> usize {
        let before = self.equations.len();
        self.equations.retain(|e| e != equation);
        let removed = before - self.equations.len();
        debug!("removed {removed} equation(s) matching {equation}");
        self.rebuild();
        removed
    }

    pub fn to_document(&self) -> Document {
        Document {
            equations: self.equations.iter().map(Equation::to_data).collect(),
            substances: self.substances.iter().map(Substance::to_data).collect(),
            view: self.view,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.to_document()).map_err(StoreError::Serialize)
    }

    /// Replace all collections and the view with the contents of `document`.
    ///
    /// Either everything is replaced or, on error, nothing is.
    pub fn restore(&mut self, document: Document) -> Result<(), StoreError> {
        let equations = document
            .equations
            .iter()
            .map(Equation::from_data)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RestoreError::from)?;
        let substances = document
            .substances
            .iter()
            .map(Substance::from_data)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RestoreError::from)?;

        debug!(
            "restoring {} equations and {} substances",
            equations.len(),
            substances.len()
        );
        self.equations = equations;
        self.substances = substances;
        self.view = document.view;
        self.rebuild();
        Ok(())
    }

    pub fn restore_json(&mut self, json: &str) -> Result<(), StoreError> {
        let document: Document = serde_json::from_str(json).map_err(RestoreError::from)?;
        self.restore(document)
    }

    /// Remember the current state for a later [`restore_snapshot`](Self::restore_snapshot).
    pub fn save_snapshot(&mut self) {
        self.snapshot = Some(self.to_document());
    }

    pub fn restore_snapshot(&mut self) -> Result<(), StoreError> {
        let document = self.snapshot.clone().ok_or(StoreError::NoSnapshot)?;
        self.restore(document)
    }

    /// Write the store as JSON under the configured storage key.
    pub fn save<S: KeyValueStore + ?Sized>(&self, storage: &mut S) -> Result<(), StoreError> {
        let json = self.to_json()?;
        storage.set(&self.config.storage_key, json);
        Ok(())
    }

    /// Restore from the configured storage key. Returns `Ok(false)` if the
    /// key holds nothing.
    pub fn load<S: KeyValueStore + ?Sized>(&mut self, storage: &S) -> Result<bool, StoreError> {
        let Some(json) = storage.get(&self.config.storage_key) else {
            return Ok(false);
        };
        if let Err(e) = self.restore_json(&json) {
            warn!("ignoring stored document under {:?}: {e}", self.config.storage_key);
            return Err(e);
        }
        Ok(true)
    }

    fn rebuild(&mut self) {
        self.graph = ReactionGraph::build(&self.substances, &self.equations);
    }
}
