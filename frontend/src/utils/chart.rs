use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use super::traders::TraderRecord;

pub const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
  pub month: &'static str,
  pub profit: Option<Decimal>,
}

/// Whole 30-day windows since account creation, rounded up, within 1..=12.
pub fn months_active(created: Option<DateTime<Utc>>, now: DateTime<Utc>) -> usize {
  let age = created.map(|c| now.signed_duration_since(c)).unwrap_or_else(Duration::zero);
  let window = Duration::days(30).num_milliseconds();
  let age_ms = age.num_milliseconds().max(0);
  let months = (age_ms + window - 1) / window;
  months.clamp(1, 12) as usize
}

/*
Synthetic cumulative-profit curve for the calendar year of `now`.
Months before the first active month and after the current month are `None`.
Active months follow `total * progress^0.7`, scaled by a jitter that grows as
the win rate drops; the current month is pinned to the exact total.
*/
pub fn realistic_series(trader: &TraderRecord, now: DateTime<Utc>) -> Vec<ChartPoint> {
  let current = now.month0() as usize;
  let active = months_active(trader.account_created_at, now);
  let start = (current + 1).saturating_sub(active);
  let span = (current - start).max(1) as f64;

  let total = trader.total_profit.to_f64().unwrap_or(0.0);
  let win_rate = if trader.win_rate.is_zero() { 0.5 } else { trader.win_rate.to_f64().unwrap_or(50.0) / 100.0 };
  let variance = (1.0 - win_rate) * 0.3;

  MONTHS.iter().enumerate().map(|(idx, month)| {
    let profit = if idx < start || idx > current {
      None
    } else if idx == current {
      Some(trader.total_profit)
    } else {
      let progress = (idx - start) as f64 / span;
      let jitter = 1.0 + (unit_noise(&trader.twitter_handle, idx) - 0.5) * variance;
      let value = (total * progress.powf(0.7) * jitter).max(0.0).floor();
      Some(Decimal::from_f64(value).unwrap_or_default())
    };
    ChartPoint { month, profit }
  }).collect()
}

pub fn plotted_points(series: &[ChartPoint]) -> (Vec<&'static str>, Vec<f64>) {
  series.iter()
    .filter_map(|p| p.profit.map(|v| (p.month, v.to_f64().unwrap_or(0.0))))
    .unzip()
}

// stable per handle and month, so re-renders draw the same curve
fn unit_noise(seed: &str, month: usize) -> f64 {
  let mut hasher = DefaultHasher::new();
  seed.hash(&mut hasher);
  month.hash(&mut hasher);
  (hasher.finish() % 10_000) as f64 / 10_000.0
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rust_decimal_macros::dec;
  use crate::utils::traders::tests::trader;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
  }

  fn non_null(series: &[ChartPoint]) -> Vec<&ChartPoint> {
    series.iter().filter(|p| p.profit.is_some()).collect()
  }

  #[test]
  fn two_month_old_account_has_two_points_ending_at_total() {
    let mut t = trader("fresh", dec!(12345.67));
    t.win_rate = dec!(60);
    t.account_created_at = Some(now() - Duration::days(60));

    let series = realistic_series(&t, now());
    assert_eq!(series.len(), 12);
    let points = non_null(&series);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].month, "Jun");
    assert_eq!(points[1].month, "Jul");
    assert_eq!(points[1].profit, Some(dec!(12345.67)));
  }

  #[test]
  fn missing_creation_date_counts_as_one_month() {
    let t = trader("unlinked", dec!(0));
    let series = realistic_series(&t, now());
    let points = non_null(&series);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].profit, Some(Decimal::ZERO));
  }

  #[test]
  fn old_accounts_fill_the_year_up_to_now() {
    let mut t = trader("veteran", dec!(98300));
    t.account_created_at = Some(now() - Duration::days(800));
    let series = realistic_series(&t, now());
    assert_eq!(non_null(&series).len(), 7);
    assert!(series[7..].iter().all(|p| p.profit.is_none()));
    assert_eq!(series[0].profit, Some(Decimal::ZERO));
  }

  #[test]
  fn series_is_stable_across_calls() {
    let mut t = trader("stable", dec!(50000));
    t.win_rate = dec!(40);
    t.account_created_at = Some(now() - Duration::days(200));
    assert_eq!(realistic_series(&t, now()), realistic_series(&t, now()));
  }

  #[test]
  fn months_active_rounds_up_and_clamps() {
    assert_eq!(months_active(None, now()), 1);
    assert_eq!(months_active(Some(now() - Duration::days(31)), now()), 2);
    assert_eq!(months_active(Some(now() + Duration::days(10)), now()), 1);
    assert_eq!(months_active(Some(now() - Duration::days(3650)), now()), 12);
  }

  #[test]
  fn plotted_points_skip_empty_months() {
    let mut t = trader("fresh", dec!(900));
    t.account_created_at = Some(now() - Duration::days(60));
    let (labels, values) = plotted_points(&realistic_series(&t, now()));
    assert_eq!(labels, vec!["Jun", "Jul"]);
    assert_eq!(values.last().copied(), Some(900.0));
  }
}
