use super::{Equation, Product, Reactant};

pub fn to_reactant_string(reactant: &Reactant, pretty: bool) -> String {
    with_coefficient(reactant.coefficient.get(), reactant.formula.display(pretty))
}

pub fn to_product_string(product: &Product, pretty: bool) -> String {
    let mut s = with_coefficient(product.coefficient.get(), product.formula.display(pretty));
    s.push_str(product.marker.symbol());
    s
}

/// Render `r1+r2=p1+p2`, or `r1+r2=condition=p1+p2` when a condition is set.
pub fn to_equation_string(equation: &Equation, pretty: bool) -> String {
    let reactants: Vec<String> = equation
        .reactants
        .iter()
        .map(|r| to_reactant_string(r, pretty))
        .collect();
    let products: Vec<String> = equation
        .products
        .iter()
        .map(|p| to_product_string(p, pretty))
        .collect();

    if equation.condition.is_empty() {
        format!("{}={}", reactants.join("+"), products.join("+"))
    } else {
        format!(
            "{}={}={}",
            reactants.join("+"),
            equation.condition,
            products.join("+")
        )
    }
}

fn with_coefficient(coefficient: u32, formula: String) -> String {
    if coefficient == 1 {
        formula
    } else {
        format!("{coefficient}{formula}")
    }
}
