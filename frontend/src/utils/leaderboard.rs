use std::fmt;
use std::str::FromStr;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::traders::TraderRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitBracket {
  All,
  Over10k,
  Over50k,
  Over100k,
}

impl ProfitBracket {
  pub const ALL: [ProfitBracket; 4] = [Self::All, Self::Over10k, Self::Over50k, Self::Over100k];

  pub fn floor(&self) -> Option<Decimal> {
    match self {
      Self::All => None,
      Self::Over10k => Some(dec!(10000)),
      Self::Over50k => Some(dec!(50000)),
      Self::Over100k => Some(dec!(100000)),
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::All => "All profits",
      Self::Over10k => "$10K+",
      Self::Over50k => "$50K+",
      Self::Over100k => "$100K+",
    }
  }
}

impl fmt::Display for ProfitBracket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::All => write!(f, "all"),
      Self::Over10k => write!(f, "10k"),
      Self::Over50k => write!(f, "50k"),
      Self::Over100k => write!(f, "100k"),
    }
  }
}

impl FromStr for ProfitBracket {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "all" => Ok(Self::All),
      "10k" => Ok(Self::Over10k),
      "50k" => Ok(Self::Over50k),
      "100k" => Ok(Self::Over100k),
      _ => Err(format!("unknown profit bracket: {}", s)),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  TotalProfit,
  MonthlyProfit,
  WinRate,
}

impl SortKey {
  fn value(&self, trader: &TraderRecord) -> Decimal {
    match self {
      Self::TotalProfit => trader.total_profit,
      Self::MonthlyProfit => trader.monthly_profit,
      Self::WinRate => trader.win_rate,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Asc,
  Desc,
}

impl SortDirection {
  pub fn flipped(self) -> Self {
    match self {
      Self::Asc => Self::Desc,
      Self::Desc => Self::Asc,
    }
  }

  pub fn arrow(&self) -> &'static str {
    match self {
      Self::Asc => "▲",
      Self::Desc => "▼",
    }
  }
}

/// Everything the leaderboard table is filtered, sorted and windowed by.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardQuery {
  pub search: String,
  /// `None` matches every firm.
  pub firm: Option<String>,
  pub bracket: ProfitBracket,
  pub sort_key: SortKey,
  pub direction: SortDirection,
  pub display_count: usize,
  pub page_size: usize,
}

impl LeaderboardQuery {
  pub fn new(page_size: usize) -> Self {
    Self {
      search: String::new(),
      firm: None,
      bracket: ProfitBracket::All,
      sort_key: SortKey::TotalProfit,
      direction: SortDirection::Desc,
      display_count: page_size,
      page_size,
    }
  }

  /// Same key flips the direction; a new key starts descending.
  pub fn toggle_sort(&mut self, key: SortKey) {
    if self.sort_key == key {
      self.direction = self.direction.flipped();
    } else {
      self.sort_key = key;
      self.direction = SortDirection::Desc;
    }
  }

  pub fn load_more(&mut self, total: usize) {
    self.display_count = (self.display_count + self.page_size).min(total.max(self.page_size));
  }

  pub fn matches(&self, trader: &TraderRecord) -> bool {
    let needle = self.search.trim().to_lowercase();
    let matches_search = needle.is_empty() || trader.twitter_handle.to_lowercase().contains(&needle);
    let matches_firm = self.firm.as_ref().map_or(true, |firm| trader.prop_firm == *firm);
    let matches_profit = self.bracket.floor().map_or(true, |floor| trader.total_profit >= floor);
    matches_search && matches_firm && matches_profit
  }

  pub fn matching_count(&self, traders: &[TraderRecord]) -> usize {
    traders.iter().filter(|t| self.matches(t)).count()
  }

  /// Filtered, sorted, windowed rows with ranks reassigned over the result.
  pub fn apply(&self, traders: &[TraderRecord]) -> Vec<TraderRecord> {
    let mut view = traders.iter().filter(|t| self.matches(t)).cloned().collect::<Vec<_>>();
    let key = self.sort_key;
    match self.direction {
      SortDirection::Desc => view.sort_by(|a, b| key.value(b).cmp(&key.value(a))),
      SortDirection::Asc => view.sort_by(|a, b| key.value(a).cmp(&key.value(b))),
    }
    view.truncate(self.display_count);
    for (idx, trader) in view.iter_mut().enumerate() {
      trader.rank = idx as u32 + 1;
    }
    view
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::utils::traders::tests::trader;

  fn roster() -> Vec<TraderRecord> {
    let rows = [
      ("ScalpKing", "apex", dec!(120000), dec!(9000), dec!(71.5)),
      ("scalp_queen", "topstep", dec!(55000), dec!(12000), dec!(64.0)),
      ("momentum_beast", "apex", dec!(48700), dec!(8400), dec!(62.9)),
      ("range_master", "tradeday", dec!(9000), dec!(6500), dec!(80.0)),
      ("gap_trader", "apex", dec!(19900), dec!(4000), dec!(64.7)),
    ];
    rows.iter().map(|(handle, firm, total, monthly, win)| {
      let mut t = trader(handle, *total);
      t.prop_firm = firm.to_string();
      t.monthly_profit = *monthly;
      t.win_rate = *win;
      t
    }).collect()
  }

  fn handles(view: &[TraderRecord]) -> Vec<String> {
    view.iter().map(|t| t.twitter_handle.clone()).collect()
  }

  #[test]
  fn default_view_ranks_by_total_profit() {
    let view = LeaderboardQuery::new(25).apply(&roster());
    assert_eq!(handles(&view), vec!["ScalpKing", "scalp_queen", "momentum_beast", "gap_trader", "range_master"]);
    assert_eq!(view.iter().map(|t| t.rank).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn search_is_case_insensitive() {
    let mut upper = LeaderboardQuery::new(25);
    upper.search = "SCALP".to_string();
    let mut lower = LeaderboardQuery::new(25);
    lower.search = "scalp".to_string();

    let a = upper.apply(&roster());
    assert_eq!(a, lower.apply(&roster()));
    assert_eq!(handles(&a), vec!["ScalpKing", "scalp_queen"]);
  }

  #[test]
  fn profit_brackets_nest() {
    let traders = roster();
    let sets = ProfitBracket::ALL.iter().map(|bracket| {
      let mut q = LeaderboardQuery::new(25);
      q.bracket = *bracket;
      handles(&q.apply(&traders))
    }).collect::<Vec<_>>();

    for pair in sets.windows(2) {
      assert!(pair[1].iter().all(|h| pair[0].contains(h)));
    }
    assert_eq!(sets[0].len(), 5);
    assert_eq!(sets[1].len(), 4);
    assert_eq!(sets[3], vec!["ScalpKing"]);
  }

  #[test]
  fn firm_filter_reranks_the_subset() {
    let mut q = LeaderboardQuery::new(25);
    q.firm = Some("apex".to_string());
    let view = q.apply(&roster());
    assert_eq!(handles(&view), vec!["ScalpKing", "momentum_beast", "gap_trader"]);
    assert_eq!(view.iter().map(|t| t.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
  }

  #[test]
  fn sort_toggle_rules() {
    let mut q = LeaderboardQuery::new(25);
    q.toggle_sort(SortKey::TotalProfit);
    assert_eq!(q.direction, SortDirection::Asc);
    q.toggle_sort(SortKey::WinRate);
    assert_eq!((q.sort_key, q.direction), (SortKey::WinRate, SortDirection::Desc));

    let view = q.apply(&roster());
    assert_eq!(view[0].twitter_handle, "range_master");
    assert_eq!(view[0].rank, 1);

    q.toggle_sort(SortKey::WinRate);
    assert_eq!(q.apply(&roster())[0].twitter_handle, "momentum_beast");
  }

  #[test]
  fn window_truncates_then_ranks_and_grows_by_page() {
    let mut q = LeaderboardQuery::new(2);
    let view = q.apply(&roster());
    assert_eq!(view.len(), 2);
    assert_eq!(view.last().map(|t| t.rank), Some(2));
    assert_eq!(q.matching_count(&roster()), 5);

    q.load_more(5);
    assert_eq!(q.display_count, 4);
    q.load_more(5);
    assert_eq!(q.display_count, 5);
    q.load_more(5);
    assert_eq!(q.display_count, 5);
  }

  #[test]
  fn bracket_select_values_parse() {
    assert_eq!("100K".parse::<ProfitBracket>(), Ok(ProfitBracket::Over100k));
    assert!("1m".parse::<ProfitBracket>().is_err());
  }
}
