//! Display formatting for minor-unit amounts.

/// Currency code shown when none is configured.
pub const DEFAULT_CURRENCY: &str = "UAH";

/// Formats minor-unit amounts as en-US currency strings.
///
/// Every amount is shown in one display currency regardless of the
/// account it came from.
///
/// # Examples
///
/// ```
/// use monodash::money::MoneyFormatter;
///
/// let money = MoneyFormatter::new("UAH");
/// assert_eq!(money.format(150_050), "UAH\u{a0}1,500.50");
/// assert_eq!(money.format(-1_000), "-UAH\u{a0}10.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyFormatter {
    /// ISO 4217 alphabetic code used as the prefix.
    currency: String,
}

impl Default for MoneyFormatter {
    #[inline]
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl MoneyFormatter {
    /// Creates a formatter for the given currency code.
    #[inline]
    #[must_use]
    pub fn new<T: Into<String>>(currency: T) -> Self {
        Self {
            currency: currency.into(),
        }
    }

    /// Returns the display currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Formats `minor` units as `[-]CODE 1,234.56`, separated by a
    /// non-breaking space.
    #[inline]
    #[must_use]
    pub fn format(&self, minor: i64) -> String {
        let sign = if minor < 0 { "-" } else { "" };
        let abs = minor.unsigned_abs();
        let major = abs.div_euclid(100);
        let cents = abs.rem_euclid(100);
        format!(
            "{sign}{}\u{a0}{}.{cents:02}",
            self.currency,
            group_thousands(major)
        )
    }
}

/// Inserts `,` between groups of three digits.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len.div_euclid(3));
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx).rem_euclid(3) == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
