//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! Currencies are used for display only. Nothing in the system converts
//! between currencies.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "SGD", "IDR").
    pub currency: Currency,
}

/// Generates the `Currency` enum together with its code and symbol tables.
macro_rules! currencies {
    ($( $variant:ident => $code:literal, $symbol:literal, $name:literal; )+) => {
        /// ISO 4217 currency codes reachable from the country table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum Currency {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl Currency {
            /// Every supported currency, in declaration order.
            pub const ALL: &'static [Currency] = &[$(Currency::$variant),+];

            /// Returns the ISO 4217 code.
            #[must_use]
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Returns the display symbol, falling back to the code when the
            /// currency has no distinctive symbol in English locales.
            #[must_use]
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol,)+
                }
            }
        }

        impl std::str::FromStr for Currency {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(Self::$variant),)+
                    _ => Err(format!("Unknown currency: {s}")),
                }
            }
        }
    };
}

currencies! {
    Sgd => "SGD", "SGD", "Singapore Dollar";
    Myr => "MYR", "MYR", "Malaysian Ringgit";
    Idr => "IDR", "IDR", "Indonesian Rupiah";
    Thb => "THB", "THB", "Thai Baht";
    Vnd => "VND", "₫", "Vietnamese Dong";
    Php => "PHP", "₱", "Philippine Peso";
    Inr => "INR", "₹", "Indian Rupee";
    Cny => "CNY", "CN¥", "Chinese Yuan";
    Hkd => "HKD", "HK$", "Hong Kong Dollar";
    Jpy => "JPY", "¥", "Japanese Yen";
    Krw => "KRW", "₩", "South Korean Won";
    Aud => "AUD", "A$", "Australian Dollar";
    Nzd => "NZD", "NZ$", "New Zealand Dollar";
    Usd => "USD", "$", "US Dollar";
    Gbp => "GBP", "£", "British Pound";
    Eur => "EUR", "€", "Euro";
    Chf => "CHF", "CHF", "Swiss Franc";
    Aed => "AED", "AED", "UAE Dirham";
    Sar => "SAR", "SAR", "Saudi Riyal";
    Cad => "CAD", "CA$", "Canadian Dollar";
    Pln => "PLN", "PLN", "Polish Zloty";
    Sek => "SEK", "SEK", "Swedish Krona";
    Nok => "NOK", "NOK", "Norwegian Krone";
    Dkk => "DKK", "DKK", "Danish Krone";
    Brl => "BRL", "R$", "Brazilian Real";
    Mxn => "MXN", "MX$", "Mexican Peso";
    Ars => "ARS", "ARS", "Argentine Peso";
    Zar => "ZAR", "ZAR", "South African Rand";
    Egp => "EGP", "EGP", "Egyptian Pound";
    Ngn => "NGN", "NGN", "Nigerian Naira";
    Kes => "KES", "KES", "Kenyan Shilling";
    Pkr => "PKR", "PKR", "Pakistani Rupee";
    Bdt => "BDT", "BDT", "Bangladeshi Taka";
    Lkr => "LKR", "LKR", "Sri Lankan Rupee";
    Npr => "NPR", "NPR", "Nepalese Rupee";
    Mmk => "MMK", "MMK", "Myanmar Kyat";
    Khr => "KHR", "KHR", "Cambodian Riel";
    Lak => "LAK", "LAK", "Lao Kip";
}

impl Default for Currency {
    fn default() -> Self {
        Self::Sgd
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_money(self.amount, self.currency))
    }
}

/// Formats an amount for display, e.g. `$1,234.50`, `-€12.00` or `SGD 980.00`.
///
/// Always two fraction digits, midpoints rounded away from zero.
#[must_use]
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let symbol = currency.symbol();
    let separator = if symbol == currency.code() { " " } else { "" };
    format!("{sign}{symbol}{separator}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
