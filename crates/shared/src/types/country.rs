//! Country to currency lookup.
//!
//! A unit's display currency is derived from its country. Unknown or missing
//! countries fall back to SGD.

use super::money::Currency;

/// A selectable country and the currency used for units located there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (`EU` stands for the Eurozone).
    pub code: &'static str,
    /// English display name.
    pub name: &'static str,
    /// Currency used for amounts in this country.
    pub currency: Currency,
}

const fn country(code: &'static str, name: &'static str, currency: Currency) -> Country {
    Country {
        code,
        name,
        currency,
    }
}

/// Static country table, in display order.
pub const COUNTRIES: &[Country] = &[
    country("SG", "Singapore", Currency::Sgd),
    country("MY", "Malaysia", Currency::Myr),
    country("ID", "Indonesia", Currency::Idr),
    country("TH", "Thailand", Currency::Thb),
    country("VN", "Vietnam", Currency::Vnd),
    country("PH", "Philippines", Currency::Php),
    country("IN", "India", Currency::Inr),
    country("CN", "China", Currency::Cny),
    country("HK", "Hong Kong", Currency::Hkd),
    country("JP", "Japan", Currency::Jpy),
    country("KR", "South Korea", Currency::Krw),
    country("AU", "Australia", Currency::Aud),
    country("NZ", "New Zealand", Currency::Nzd),
    country("US", "United States", Currency::Usd),
    country("GB", "United Kingdom", Currency::Gbp),
    country("EU", "Eurozone", Currency::Eur),
    country("CH", "Switzerland", Currency::Chf),
    country("AE", "United Arab Emirates", Currency::Aed),
    country("SA", "Saudi Arabia", Currency::Sar),
    country("CA", "Canada", Currency::Cad),
    country("DE", "Germany", Currency::Eur),
    country("FR", "France", Currency::Eur),
    country("NL", "Netherlands", Currency::Eur),
    country("ES", "Spain", Currency::Eur),
    country("IT", "Italy", Currency::Eur),
    country("PT", "Portugal", Currency::Eur),
    country("IE", "Ireland", Currency::Eur),
    country("BE", "Belgium", Currency::Eur),
    country("AT", "Austria", Currency::Eur),
    country("PL", "Poland", Currency::Pln),
    country("SE", "Sweden", Currency::Sek),
    country("NO", "Norway", Currency::Nok),
    country("DK", "Denmark", Currency::Dkk),
    country("FI", "Finland", Currency::Eur),
    country("BR", "Brazil", Currency::Brl),
    country("MX", "Mexico", Currency::Mxn),
    country("AR", "Argentina", Currency::Ars),
    country("ZA", "South Africa", Currency::Zar),
    country("EG", "Egypt", Currency::Egp),
    country("NG", "Nigeria", Currency::Ngn),
    country("KE", "Kenya", Currency::Kes),
    country("PK", "Pakistan", Currency::Pkr),
    country("BD", "Bangladesh", Currency::Bdt),
    country("LK", "Sri Lanka", Currency::Lkr),
    country("NP", "Nepal", Currency::Npr),
    country("MM", "Myanmar", Currency::Mmk),
    country("KH", "Cambodia", Currency::Khr),
    country("LA", "Laos", Currency::Lak),
];

/// Finds a country by exact code or case-insensitive name.
#[must_use]
pub fn country_by_code(code: Option<&str>) -> Option<&'static Country> {
    let code = code.filter(|c| !c.is_empty())?;
    COUNTRIES
        .iter()
        .find(|c| c.code == code || c.name.eq_ignore_ascii_case(code))
}

/// Returns the display currency for a unit's country, SGD when unknown.
#[must_use]
pub fn currency_for_country(code: Option<&str>) -> Currency {
    country_by_code(code).map_or(Currency::Sgd, |c| c.currency)
}
