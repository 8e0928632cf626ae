use chrono::{DateTime, Utc};
use csv::{Terminator, WriterBuilder};

use super::server::AppError;
use super::traders::TraderRecord;

pub const CSV_HEADER: [&str; 6] = ["Rank", "Twitter", "Total Profit", "Win Rate", "Monthly Profit", "Prop Firm"];

/// One header line plus one line per row of the displayed view, in view order.
pub fn leaderboard_csv(view: &[TraderRecord]) -> Result<String, AppError> {
  let mut writer = WriterBuilder::new()
    .terminator(Terminator::Any(b'\n'))
    .from_writer(Vec::new());

  writer.write_record(CSV_HEADER).map_err(csv_error)?;
  for trader in view {
    writer.write_record([
      trader.rank.to_string(),
      format!("@{}", trader.twitter_handle),
      trader.total_profit.normalize().to_string(),
      format!("{}%", trader.win_rate.normalize()),
      trader.monthly_profit.normalize().to_string(),
      trader.firm_display(),
    ]).map_err(csv_error)?;
  }

  let bytes = writer.into_inner().map_err(|e| AppError::SerializeError(e.to_string()))?;
  String::from_utf8(bytes).map_err(|e| AppError::SerializeError(e.to_string()))
}

fn csv_error(e: csv::Error) -> AppError {
  AppError::SerializeError(format!("csv export failed: {}", e))
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
  format!("proof-of-pips-leaderboard-{}.csv", now.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rust_decimal_macros::dec;
  use crate::utils::leaderboard::LeaderboardQuery;
  use crate::utils::traders::tests::trader;

  #[test]
  fn one_line_per_row_led_by_displayed_rank() {
    let mut a = trader("alpha", dec!(5000));
    a.prop_firm = "apex".to_string();
    a.win_rate = dec!(64.80);
    let b = trader("bravo", dec!(9000));
    let c = trader("charlie", dec!(100));

    let mut query = LeaderboardQuery::new(25);
    query.search = "a".to_string();
    let view = query.apply(&[a, b, c]);
    let csv = leaderboard_csv(&view).unwrap();
    let lines = csv.lines().collect::<Vec<_>>();

    assert_eq!(lines.len(), view.len() + 1);
    assert_eq!(lines[0], CSV_HEADER.join(","));
    for (idx, line) in lines[1..].iter().enumerate() {
      assert_eq!(line.split(',').next(), Some((idx + 1).to_string().as_str()));
    }
    assert_eq!(lines[2], "2,@alpha,5000,64.8%,0,Apex Trader Funding");
  }

  #[test]
  fn empty_view_is_just_the_header() {
    assert_eq!(leaderboard_csv(&[]).unwrap(), format!("{}\n", CSV_HEADER.join(",")));
  }

  #[test]
  fn firm_names_with_commas_are_quoted() {
    let mut t = trader("quoted", dec!(1));
    t.rank = 1;
    t.prop_firm_display = Some("Funded, \"Elite\"".to_string());
    let csv = leaderboard_csv(&[t]).unwrap();
    assert!(csv.ends_with(",\"Funded, \"\"Elite\"\"\"\n"));
  }

  #[test]
  fn file_name_carries_the_utc_date() {
    let now = Utc.with_ymd_and_hms(2025, 3, 9, 23, 59, 0).unwrap();
    assert_eq!(export_file_name(now), "proof-of-pips-leaderboard-2025-03-09.csv");
  }
}
