use std::collections::BTreeMap;
use std::fmt;
use chrono::{DateTime, NaiveDate, Utc};
use dioxus::logger::tracing::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use super::chart::{realistic_series, ChartPoint};

/// (value, label) pairs the backend accepts for `propFirm`.
pub const PROP_FIRMS: &[(&str, &str)] = &[
  ("topstep", "Topstep"),
  ("apex", "Apex Trader Funding"),
  ("tradeday", "TradeDay"),
  ("take-profit-trader", "Take Profit Trader"),
  ("my-funded-futures", "My Funded Futures"),
  ("elite-trader-funding", "Elite Trader Funding"),
  ("bulenox", "Bulenox"),
  ("tradeify", "Tradeify"),
  ("fundednext-futures", "FundedNext Futures"),
  ("oneup-trader", "OneUp Trader"),
  ("blusky-trading", "BluSky Trading"),
  ("fxify-futures", "FXIFY Futures"),
  ("the-trading-pit", "The Trading Pit"),
  ("leeloo-trading", "Leeloo Trading"),
  ("other", "Other"),
];

pub fn firm_label(value: &str) -> Option<&'static str> {
  PROP_FIRMS.iter().find(|(v, _)| *v == value).map(|(_, label)| *label)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
  Tradovate,
  TradeSyncer,
  #[default]
  #[serde(other)]
  None,
}

impl fmt::Display for ConnectionType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Tradovate => write!(f, "Tradovate"),
      Self::TradeSyncer => write!(f, "TradeSyncer"),
      Self::None => write!(f, "Not linked"),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
  Expired,
  Unlinked,
  #[default]
  #[serde(other)]
  Active,
}

/// Admin-assigned badge; either spelled out or pointing at a preset key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomBadgeGrant {
  pub preset: Option<String>,
  pub name: Option<String>,
  #[serde(alias = "emoji")]
  pub glyph: Option<String>,
  pub description: Option<String>,
  #[serde(alias = "color")]
  pub color_class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraderRecord {
  #[serde(default, deserialize_with = "string_or_number")]
  pub id: String,
  #[serde(rename = "twitter", alias = "twitterHandle", alias = "twitter_username", alias = "twitterUsername")]
  pub twitter_handle: String,
  #[serde(rename = "avatar", alias = "avatarGlyph", default)]
  pub avatar_glyph: String,
  #[serde(alias = "total_profit", default, deserialize_with = "default_on_null")]
  pub total_profit: Decimal,
  #[serde(alias = "monthly_profit", default, deserialize_with = "default_on_null")]
  pub monthly_profit: Decimal,
  #[serde(alias = "win_rate", default, deserialize_with = "default_on_null")]
  pub win_rate: Decimal,
  #[serde(rename = "accountCreated", alias = "account_created", alias = "accountCreatedAt", default, deserialize_with = "lenient_datetime")]
  pub account_created_at: Option<DateTime<Utc>>,
  #[serde(alias = "prop_firm", default, deserialize_with = "default_on_null")]
  pub prop_firm: String,
  #[serde(default)]
  pub prop_firm_display: Option<String>,
  #[serde(alias = "connection_type", default, deserialize_with = "default_on_null")]
  pub connection_type: ConnectionType,
  #[serde(alias = "auth_status", default, deserialize_with = "default_on_null")]
  pub auth_status: AuthStatus,
  #[serde(default)]
  pub verified_payouts: Option<u32>,
  #[serde(default)]
  pub total_accounts_linked: Option<u32>,
  #[serde(alias = "last_sync", default, deserialize_with = "lenient_datetime")]
  pub last_sync: Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "default_on_null")]
  pub monthly_rankings: BTreeMap<String, u32>,
  #[serde(default)]
  pub profitable_month_streak: Option<u32>,
  #[serde(default, deserialize_with = "default_on_null")]
  pub custom_badges: Vec<CustomBadgeGrant>,
  #[serde(default)]
  pub rank: u32,
  #[serde(skip)]
  pub chart: Vec<ChartPoint>,
}

impl TraderRecord {
  /// Single source of truth for "has no working data source".
  pub fn is_unlinked(&self) -> bool {
    self.connection_type == ConnectionType::None || self.auth_status == AuthStatus::Unlinked
  }

  /// The backend keeps the link state in two fields; true when they disagree.
  pub fn link_fields_disagree(&self) -> bool {
    (self.connection_type == ConnectionType::None) != (self.auth_status == AuthStatus::Unlinked)
  }

  pub fn needs_reauth(&self) -> bool {
    !self.is_unlinked() && self.auth_status == AuthStatus::Expired
  }

  pub fn firm_display(&self) -> String {
    if let Some(display) = self.prop_firm_display.as_ref().filter(|d| !d.is_empty()) {
      return display.clone();
    }
    firm_label(&self.prop_firm).map(str::to_string).unwrap_or_else(|| "Prop Trader".to_string())
  }

  pub fn matches_handle(&self, handle: &str) -> bool {
    self.twitter_handle.eq_ignore_ascii_case(handle.trim_start_matches('@'))
  }
}

/// Source of demo rows mixed into the leaderboard; kept apart from ranking.
pub trait PlaceholderSupply {
  fn placeholders(&self, now: DateTime<Utc>) -> Vec<TraderRecord>;
}

pub struct NoPlaceholders;

impl PlaceholderSupply for NoPlaceholders {
  fn placeholders(&self, _now: DateTime<Utc>) -> Vec<TraderRecord> {
    vec![]
  }
}

/// Stable sort by total profit (descending) and dense 1-based ranks.
pub fn rank_by_profit(mut traders: Vec<TraderRecord>) -> Vec<TraderRecord> {
  traders.sort_by(|a, b| b.total_profit.cmp(&a.total_profit));
  for (idx, trader) in traders.iter_mut().enumerate() {
    trader.rank = idx as u32 + 1;
  }
  traders
}

pub fn merge_and_rank(real: Vec<TraderRecord>, supply: &dyn PlaceholderSupply, now: DateTime<Utc>) -> Vec<TraderRecord> {
  let mut all = real.into_iter().map(|mut trader| {
    if trader.id.is_empty() {
      trader.id = trader.twitter_handle.clone();
    }
    trader
  }).collect::<Vec<_>>();
  all.extend(supply.placeholders(now));

  for trader in all.iter_mut() {
    if trader.link_fields_disagree() {
      warn!("trader @{} has connectionType={:?} but authStatus={:?}", trader.twitter_handle, trader.connection_type, trader.auth_status);
    }
    trader.chart = realistic_series(trader, now);
  }
  rank_by_profit(all)
}

pub fn find_by_handle<'a>(traders: &'a [TraderRecord], handle: &str) -> Option<&'a TraderRecord> {
  traders.iter().find(|t| t.matches_handle(handle))
}

/* serde helpers */
fn default_on_null<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de> + Default,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(opt_string_or_number(deserializer)?.unwrap_or_default())
}

pub(crate) fn opt_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
  let value = Option::<serde_json::Value>::deserialize(deserializer)?;
  Ok(match value {
    Some(serde_json::Value::String(s)) => Some(s),
    Some(serde_json::Value::Number(n)) => Some(n.to_string()),
    _ => None,
  })
}

fn lenient_datetime<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
  let raw = Option::<String>::deserialize(deserializer)?;
  Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
  let raw = raw.trim();
  if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
    return Some(ts.with_timezone(&Utc));
  }
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}
