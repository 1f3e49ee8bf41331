use std::num::NonZeroU32;

use crate::digits::to_display;

use super::{Formula, Unit};

/// Render a formula in its plain-digit form, omitting counts of 1.
pub fn to_formula_string(formula: &Formula) -> String {
    let mut buf = String::new();
    for component in formula.components() {
        match &component.unit {
            Unit::Element(e) => buf.push_str(e.symbol()),
            Unit::Group(members) => {
                buf.push('(');
                for m in members {
                    buf.push_str(m.element.symbol());
                    append_count(&mut buf, m.quantity);
                }
                buf.push(')');
            }
        }
        append_count(&mut buf, component.quantity);
    }
    buf
}

/// Render a formula with subscript digits, e.g. `Ca(OH)₂`.
pub fn to_pretty_string(formula: &Formula) -> String {
    to_display(&to_formula_string(formula))
}

fn append_count(buf: &mut String, count: NonZeroU32) {
    if count.get() > 1 {
        buf.push_str(&count.to_string());
    }
}
