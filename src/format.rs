//! Display formatting for currency amounts and dates.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, macros::format_description};

/// Formats an amount as Brazilian currency, e.g. `R$1,234.50`.
pub fn currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("R$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-R$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "R$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Formats a date as the `dd/MM` label used on chart axes, e.g. `05/11`.
pub fn day_month_label(date: Date) -> String {
    let format = format_description!("[day]/[month]");

    // The format description is static and only contains infallible
    // components, so formatting cannot fail.
    date.format(&format).unwrap_or_default()
}

/// Formats a date in the Brazilian `dd/MM/yyyy` style, e.g. `05/11/2024`.
pub fn date_br(date: Date) -> String {
    let format = format_description!("[day]/[month]/[year]");

    date.format(&format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{currency, date_br, day_month_label};

    #[test]
    fn currency_formats_positive_amounts() {
        assert_eq!(currency(1234.5), "R$1,234.50");
    }

    #[test]
    fn currency_formats_negative_amounts() {
        assert_eq!(currency(-45.0), "-R$45.00");
    }

    #[test]
    fn currency_formats_zero() {
        assert_eq!(currency(0.0), "R$0.00");
    }

    #[test]
    fn currency_keeps_trailing_zero() {
        assert_eq!(currency(12.3), "R$12.30");
    }

    #[test]
    fn day_month_label_pads_with_zeroes() {
        assert_eq!(day_month_label(date!(2024 - 11 - 05)), "05/11");
    }

    #[test]
    fn date_br_includes_year() {
        assert_eq!(date_br(date!(2024 - 11 - 05)), "05/11/2024");
    }
}
