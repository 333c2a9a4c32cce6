use crate::extraction::patterns::SALARY;
use crate::models::record::{Currency, DesiredSalary};

/// First `<symbol><amount>` statement in the text. The pay-period keyword is consumed but
/// not interpreted. An amount too large for `f64` yields `None`.
pub fn extract_salary(text: &str) -> Option<DesiredSalary> {
    let caps = SALARY.captures(text)?;

    let amount = caps
        .name("amount")?
        .as_str()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())?;

    let symbol = caps
        .name("symbol")
        .or_else(|| caps.name("trailing_symbol"))
        .map_or("$", |m| m.as_str());

    Some(DesiredSalary {
        amount,
        currency: Currency::from_symbol(symbol),
    })
}
