use std::num::NonZeroU32;

use crate::formula::parse_formula;

use super::error::{EquationError, Side};
use super::{Equation, Product, Reactant, StateMarker};

/// Parse an equation of the form `reactants=products` or
/// `reactants=condition=products`.
///
/// Whitespace is dropped first. The reactant side ends at the first `=`
/// and the product side starts after the last one; whatever lies between
/// them is the condition. Each side is a `+`-separated list of formulas,
/// each with an optional leading coefficient; products may end in a
/// state marker (`↑` or `↓`).
pub fn parse_equation(s: &str) -> Result<Equation, EquationError> {
    let text: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    let first = text.find('=').ok_or(EquationError::MissingSeparator)?;
    let last = text.rfind('=').unwrap_or(first);

    let condition = if first < last {
        &text[first + 1..last]
    } else {
        ""
    };

    let reactants = text[..first]
        .split('+')
        .enumerate()
        .map(|(i, seg)| parse_reactant(seg, i))
        .collect::<Result<Vec<_>, _>>()?;

    let products = text[last + 1..]
        .split('+')
        .enumerate()
        .map(|(i, seg)| parse_product(seg, i))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Equation::new(reactants, products).with_condition(condition))
}

fn parse_reactant(segment: &str, index: usize) -> Result<Reactant, EquationError> {
    let (coefficient, rest) = split_coefficient(segment, Side::Reactants, index)?;
    let formula = parse_formula(rest).map_err(|source| EquationError::Formula {
        side: Side::Reactants,
        index,
        source,
    })?;
    Ok(Reactant::new(formula, coefficient))
}

fn parse_product(segment: &str, index: usize) -> Result<Product, EquationError> {
    let (marker, body) = split_marker(segment);
    let (coefficient, rest) = split_coefficient(body, Side::Products, index)?;
    let formula = parse_formula(rest).map_err(|source| EquationError::Formula {
        side: Side::Products,
        index,
        source,
    })?;
    Ok(Product::new(formula, coefficient, marker))
}

/// Split a leading run of ASCII digits off `segment`. No digits means 1.
fn split_coefficient(
    segment: &str,
    side: Side,
    index: usize,
) -> Result<(NonZeroU32, &str), EquationError> {
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    if end == 0 {
        return Ok((NonZeroU32::MIN, segment));
    }

    let digits = &segment[..end];
    let invalid = || EquationError::InvalidCoefficient {
        side,
        index,
        text: digits.to_string(),
    };
    if digits.starts_with('0') {
        return Err(invalid());
    }
    let value = digits
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(invalid)?;
    Ok((value, &segment[end..]))
}

/// Strip the longest recognized state marker from the end of `segment`.
fn split_marker(segment: &str) -> (StateMarker, &str) {
    let mut markers = StateMarker::SUFFIXED;
    markers.sort_by_key(|m| std::cmp::Reverse(m.symbol().len()));
    for marker in markers {
        if let Some(body) = segment.strip_suffix(marker.symbol()) {
            return (marker, body);
        }
    }
    (StateMarker::None, segment)
}
