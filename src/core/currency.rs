use rust_decimal::Decimal;

/// Monetary values are always displayed with two decimal places (centavos).
pub const BRL_SCALE: u32 = 2;

/// Rounds a monetary amount to centavos (banker's rounding, as `round_dp`).
pub fn round_brl(amount: Decimal) -> Decimal {
    amount.round_dp(BRL_SCALE)
}

/// Formats an amount using Brazilian locale conventions: `R$ 1.234,56`.
///
/// Thousands are separated with `.` and decimals with `,`. This formatting is
/// domain-visible (notifications and reports quote values in this shape), so
/// it must not follow the system locale.
pub fn format_brl(amount: Decimal) -> String {
    let (sign, int_part, frac_part) = split_two_places(amount);
    format!("{}R$ {},{}", sign, group_thousands(&int_part), frac_part)
}

/// Formats a percentage with two decimal places and a comma separator: `6,00%`.
pub fn format_percent_br(value: Decimal) -> String {
    let (sign, int_part, frac_part) = split_two_places(value);
    format!("{}{},{}%", sign, int_part, frac_part)
}

fn split_two_places(value: Decimal) -> (&'static str, String, String) {
    let rounded = value.round_dp(BRL_SCALE);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    match text.split_once('.') {
        Some((int_part, frac)) => (sign, int_part.to_string(), format!("{:0<2}", frac)),
        None => (sign, text, "00".to_string()),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
