use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Whole US dollars with thousands separators, e.g. `$98,300` or `-$1,250`.
pub fn format_currency(amount: Decimal) -> String {
  let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
  let digits = rounded.abs().trunc().to_string();
  let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
  format!("{}${}", sign, group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (idx, ch) in digits.chars().enumerate() {
    if idx > 0 && (digits.len() - idx) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

pub fn format_percent(rate: Decimal) -> String {
  format!("{}%", rate.round_dp(1).normalize())
}

/// `July 15, 2025`
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
  match date {
    Some(d) => d.format("%B %-d, %Y").to_string(),
    None => "N/A".to_string(),
  }
}

pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
  match ts {
    Some(t) => t.format("%b %-d, %Y, %-I:%M %p UTC").to_string(),
    None => "Never".to_string(),
  }
}

/// Medals for the podium, the plain number otherwise.
pub fn rank_glyph(rank: u32) -> String {
  match rank {
    1 => "🥇".to_string(),
    2 => "🥈".to_string(),
    3 => "🥉".to_string(),
    n => n.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rust_decimal_macros::dec;

  #[test]
  fn currency_rounds_and_groups() {
    assert_eq!(format_currency(dec!(98300)), "$98,300");
    assert_eq!(format_currency(dec!(1234567.5)), "$1,234,568");
    assert_eq!(format_currency(dec!(999.49)), "$999");
    assert_eq!(format_currency(dec!(-1250)), "-$1,250");
    assert_eq!(format_currency(dec!(-0.2)), "$0");
    assert_eq!(format_currency(Decimal::ZERO), "$0");
  }

  #[test]
  fn percent_keeps_one_decimal() {
    assert_eq!(format_percent(dec!(71.25)), "71.2%");
    assert_eq!(format_percent(dec!(70.0)), "70%");
  }

  #[test]
  fn dates_and_missing_values() {
    let ts = Utc.with_ymd_and_hms(2025, 7, 5, 14, 3, 0).unwrap();
    assert_eq!(format_date(Some(ts)), "July 5, 2025");
    assert_eq!(format_date(None), "N/A");
    assert_eq!(format_timestamp(Some(ts)), "Jul 5, 2025, 2:03 PM UTC");
    assert_eq!(format_timestamp(None), "Never");
  }

  #[test]
  fn podium_ranks_get_medals() {
    assert_eq!(rank_glyph(1), "🥇");
    assert_eq!(rank_glyph(3), "🥉");
    assert_eq!(rank_glyph(4), "4");
  }
}
