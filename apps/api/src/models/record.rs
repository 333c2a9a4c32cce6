use serde::Serialize;

/// Currencies recognised in a desired-salary statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "GBP")]
    Gbp,
}

impl Currency {
    /// Maps a currency symbol to its ISO code. Unknown symbols fall back to USD.
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "€" => Currency::Eur,
            "£" => Currency::Gbp,
            _ => Currency::Usd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesiredSalary {
    pub amount: f64,
    pub currency: Currency,
}

/// First/last name pair recovered from the person entities of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// Normalized candidate record. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Present only when both first and last name are.
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    #[serde(rename = "linkedIn")]
    pub linkedin: Option<String>,
    pub country: Option<String>,
    pub languages: Option<Vec<String>>,
    #[serde(rename = "whatsApp")]
    pub whatsapp: Option<String>,
    pub telegram: Option<String>,
    pub desired_salary: Option<DesiredSalary>,
}

/// `"first last"` when both halves are known.
pub fn full_name(name: &PersonName) -> Option<String> {
    match (&name.first, &name.last) {
        (Some(first), Some(last)) => Some(format!("{first} {last}")),
        _ => None,
    }
}
