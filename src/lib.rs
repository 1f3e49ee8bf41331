//! Parse chemical formulas and equations written as text, and derive the
//! reaction graph between a set of tracked substances.
//!
//! ```
//! use reactgraph::{Equation, Formula, Store, Substance};
//!
//! let mut store = Store::default();
//! store.add_equation(Equation::parse("CaO+H2O=Ca(OH)2")?)?;
//! let cao = store.add_substance(Substance::new(Formula::parse("CaO")?))?;
//! let slaked = store.add_substance(Substance::new(Formula::parse("Ca(OH)2")?))?;
//!
//! assert_eq!(store.graph().products(cao), vec![slaked]);
//! assert_eq!(store.substances()[slaked.index()].formula.display(true), "Ca(OH)₂");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digits;
pub mod element;
pub mod equation;
pub mod formula;
pub mod graph;
pub mod store;

pub use digits::{to_display, to_plain};
pub use element::Element;
pub use equation::{parse_equation, Equation, EquationError, Product, Reactant, StateMarker};
pub use formula::{parse_formula, Component, Formula, FormulaError, GroupMember, Unit};
pub use graph::{ReactionGraph, Relation, SubstanceId};
pub use store::{
    Document, KeyValueStore, MemoryStorage, Point, Store, StoreConfig, StoreError, Substance, View,
};
