use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Separator and symbol preferences for a display locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleFormat {
    pub currency_code: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            currency_code: "USD".into(),
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl LocaleFormat {
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into().to_uppercase(),
            ..Self::default()
        }
    }
}

impl CurrencyFormatter for LocaleFormat {
    /// Whole amounts render without decimals (`$9,300`), others with two.
    fn format_amount(&self, amount: f64) -> String {
        let precision = if amount.fract() == 0.0 { 0 } else { 2 };
        let body = format_number(self, amount.abs(), precision);
        let symbol = symbol_for(&self.currency_code);
        if amount < 0.0 {
            format!("-{symbol}{body}")
        } else {
            format!("{symbol}{body}")
        }
    }
}

impl DateFormatter for LocaleFormat {
    fn format_date(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", month_label(date.month()), date.day(), date.year())
    }
}

/// `$`-prefixed amount in the default locale.
pub fn format_amount(amount: f64) -> String {
    LocaleFormat::default().format_amount(amount)
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => format!("{code} "),
    }
}

pub fn format_number(locale: &LocaleFormat, value: f64, precision: usize) -> String {
    let body = format!("{value:.precision$}");
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = group_digits(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{grouped}{}{frac}", locale.decimal_separator),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_are_grouped_without_decimals() {
        assert_eq!(format_amount(9300.0), "$9,300");
        assert_eq!(format_amount(24320.0), "$24,320");
        assert_eq!(format_amount(800.0), "$800");
    }

    #[test]
    fn fractional_amounts_keep_cents() {
        assert_eq!(format_amount(1234.5), "$1,234.50");
        assert_eq!(format_amount(-45.25), "-$45.25");
    }

    #[test]
    fn locale_separators_are_respected() {
        let locale = LocaleFormat {
            currency_code: "EUR".into(),
            decimal_separator: ',',
            grouping_separator: '.',
        };
        assert_eq!(locale.format_amount(1234567.5), "€1.234.567,50");
    }

    #[test]
    fn dates_use_long_month_names() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
        assert_eq!(LocaleFormat::default().format_date(date), "November 15, 2023");
    }
}
