use std::cmp::Reverse;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;

use super::traders::{CustomBadgeGrant, TraderRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
  Custom,
  Monthly,
  Achievement,
  Streak,
}

impl BadgeKind {
  /// Lower sorts first.
  pub fn priority(&self) -> u8 {
    match self {
      Self::Custom => 1,
      Self::Monthly => 2,
      Self::Achievement => 3,
      Self::Streak => 4,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
  pub key: String,
  pub name: String,
  pub glyph: String,
  pub description: String,
  pub color_class: String,
  pub kind: BadgeKind,
  pub priority: u8,
}

struct Descriptor {
  key: &'static str,
  name: &'static str,
  glyph: &'static str,
  description: &'static str,
  color_class: &'static str,
}

impl Descriptor {
  fn badge(&self, kind: BadgeKind) -> Badge {
    Badge {
      key: self.key.to_string(),
      name: self.name.to_string(),
      glyph: self.glyph.to_string(),
      description: self.description.to_string(),
      color_class: self.color_class.to_string(),
      kind,
      priority: kind.priority(),
    }
  }
}

struct AchievementRule {
  descriptor: Descriptor,
  holds: fn(&TraderRecord, DateTime<Utc>) -> bool,
}

struct StreakRule {
  descriptor: Descriptor,
  min_months: u32,
}

fn account_age(trader: &TraderRecord, now: DateTime<Utc>) -> Option<Duration> {
  trader.account_created_at.map(|created| now.signed_duration_since(created))
}

const GOAT: &str = "goat";

static ACHIEVEMENTS: [AchievementRule; 8] = [
  AchievementRule {
    descriptor: Descriptor { key: GOAT, name: "The GOAT", glyph: "👑", description: "Rank #1 trader", color_class: "badge-gold" },
    holds: |t, _| t.rank == 1,
  },
  AchievementRule {
    descriptor: Descriptor { key: "top_tier", name: "Top Tier", glyph: "🏆", description: "Top 10 ranked", color_class: "badge-purple" },
    holds: |t, _| (2..=10).contains(&t.rank),
  },
  AchievementRule {
    descriptor: Descriptor { key: "six_figure_club", name: "Six Figure Club", glyph: "💎", description: "$100K+ total profit", color_class: "badge-cyan" },
    holds: |t, _| t.total_profit >= dec!(100000),
  },
  AchievementRule {
    descriptor: Descriptor { key: "hot_streak", name: "Hot Streak", glyph: "🔥", description: "70%+ win rate", color_class: "badge-orange" },
    holds: |t, _| t.win_rate >= dec!(70),
  },
  AchievementRule {
    descriptor: Descriptor { key: "consistent", name: "Consistent", glyph: "📈", description: "$10K+ monthly", color_class: "badge-emerald" },
    holds: |t, _| t.monthly_profit >= dec!(10000),
  },
  AchievementRule {
    descriptor: Descriptor { key: "speed_demon", name: "Speed Demon", glyph: "⚡", description: "Under 3 months old", color_class: "badge-amber" },
    holds: |t, now| account_age(t, now).is_some_and(|age| age < Duration::days(90)),
  },
  AchievementRule {
    descriptor: Descriptor { key: "veteran", name: "Veteran", glyph: "🎖️", description: "Trading for 1+ year", color_class: "badge-slate" },
    holds: |t, now| account_age(t, now).is_some_and(|age| age >= Duration::days(365)),
  },
  AchievementRule {
    descriptor: Descriptor { key: "profit_machine", name: "Profit Machine", glyph: "🤖", description: "$50K+ total profit", color_class: "badge-indigo" },
    holds: |t, _| t.total_profit >= dec!(50000) && t.total_profit < dec!(100000),
  },
];

static STREAKS: [StreakRule; 3] = [
  StreakRule {
    descriptor: Descriptor { key: "hot_month", name: "Hot Month", glyph: "🌟", description: "3 profitable months", color_class: "badge-pink" },
    min_months: 3,
  },
  StreakRule {
    descriptor: Descriptor { key: "on_fire", name: "On Fire", glyph: "🔥🔥", description: "6 profitable months", color_class: "badge-orange" },
    min_months: 6,
  },
  StreakRule {
    descriptor: Descriptor { key: "unstoppable", name: "Unstoppable", glyph: "💪", description: "12+ profitable months", color_class: "badge-red" },
    min_months: 12,
  },
];

static CUSTOM_PRESETS: [Descriptor; 5] = [
  Descriptor { key: "founder", name: "Founder", glyph: "🌟", description: "Original member", color_class: "badge-gold" },
  Descriptor { key: "verified", name: "Verified Pro", glyph: "✅", description: "Verified professional trader", color_class: "badge-blue" },
  Descriptor { key: "moderator", name: "Moderator", glyph: "🛡️", description: "Community moderator", color_class: "badge-green" },
  Descriptor { key: "partner", name: "Partner", glyph: "🤝", description: "Official partner", color_class: "badge-purple" },
  Descriptor { key: "legend", name: "Legend", glyph: "⭐", description: "Legendary status", color_class: "badge-amber" },
];

fn custom_badge(grant: &CustomBadgeGrant) -> Option<Badge> {
  let preset = grant.preset.as_deref().and_then(|key| CUSTOM_PRESETS.iter().find(|p| p.key == key));
  let mut badge = match preset {
    Some(descriptor) => descriptor.badge(BadgeKind::Custom),
    None => {
      let name = grant.name.clone().filter(|n| !n.trim().is_empty())?;
      Badge {
        key: format!("custom-{}", name.to_lowercase().replace(' ', "-")),
        name,
        glyph: "🏷️".to_string(),
        description: String::new(),
        color_class: "badge-neutral".to_string(),
        kind: BadgeKind::Custom,
        priority: BadgeKind::Custom.priority(),
      }
    }
  };
  // explicit fields override the preset
  if let Some(name) = grant.name.clone().filter(|n| !n.trim().is_empty()) { badge.name = name; }
  if let Some(glyph) = grant.glyph.clone() { badge.glyph = glyph; }
  if let Some(description) = grant.description.clone() { badge.description = description; }
  if let Some(color) = grant.color_class.clone() { badge.color_class = color; }
  Some(badge)
}

/// "Oct 2025" or "October 2025" as the first day of that month.
fn month_start(month_year: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(&format!("01 {}", month_year.trim()), "%d %b %Y").ok()
}

fn monthly_badge(month_year: &str, rank: u32) -> Badge {
  Badge {
    key: format!("monthly-{}", month_year),
    name: format!("{} Top 5", month_year),
    glyph: "🏅".to_string(),
    description: format!("Ranked #{} in {}", rank, month_year),
    color_class: "badge-amber".to_string(),
    kind: BadgeKind::Monthly,
    priority: BadgeKind::Monthly.priority(),
  }
}

/// Every badge the trader currently holds, in display order.
pub fn evaluate(trader: &TraderRecord, now: DateTime<Utc>) -> Vec<Badge> {
  let mut badges = trader.custom_badges.iter().filter_map(custom_badge).collect::<Vec<_>>();

  let mut top_months = trader.monthly_rankings.iter()
    .filter(|(_, rank)| **rank >= 1 && **rank <= 5)
    .collect::<Vec<_>>();
  // newest first; labels that do not parse go last
  top_months.sort_by_key(|(month_year, _)| Reverse(month_start(month_year)));
  badges.extend(top_months.into_iter().map(|(month_year, rank)| monthly_badge(month_year, *rank)));

  badges.extend(
    ACHIEVEMENTS.iter()
      .filter(|rule| (rule.holds)(trader, now))
      .map(|rule| rule.descriptor.badge(BadgeKind::Achievement))
  );

  if let Some(streak) = trader.profitable_month_streak {
    badges.extend(
      STREAKS.iter()
        .filter(|rule| streak >= rule.min_months)
        .map(|rule| rule.descriptor.badge(BadgeKind::Streak))
    );
  }

  sort_by_priority(&mut badges);
  badges
}

/// Custom, monthly, achievement, streak; the GOAT leads its group.
pub fn sort_by_priority(badges: &mut [Badge]) {
  badges.sort_by_key(|b| (b.priority, !(b.kind == BadgeKind::Achievement && b.key == GOAT)));
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rust_decimal::Decimal;
  use crate::utils::traders::tests::trader;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap()
  }

  fn keys(badges: &[Badge]) -> Vec<&str> {
    badges.iter().map(|b| b.key.as_str()).collect()
  }

  fn champion() -> TraderRecord {
    let mut t = trader("thetradingchamp", dec!(125000));
    t.rank = 1;
    t.win_rate = dec!(71.2);
    t.monthly_profit = dec!(15100);
    t.account_created_at = Some(now() - Duration::days(500));
    t
  }

  #[test]
  fn champion_collects_expected_achievements() {
    let badges = evaluate(&champion(), now());
    assert_eq!(keys(&badges), vec!["goat", "six_figure_club", "hot_streak", "consistent", "veteran"]);
    assert!(badges.iter().all(|b| b.kind == BadgeKind::Achievement && b.priority == 3));
  }

  #[test]
  fn boundaries_follow_the_rule_table() {
    let mut t = trader("edge", dec!(100000));
    t.rank = 10;
    t.win_rate = dec!(70);
    t.monthly_profit = dec!(9999.99);
    t.account_created_at = Some(now() - Duration::days(89));
    assert_eq!(keys(&evaluate(&t, now())), vec!["top_tier", "six_figure_club", "hot_streak", "speed_demon"]);

    t.rank = 11;
    t.total_profit = dec!(99999.99);
    t.account_created_at = None;
    assert_eq!(keys(&evaluate(&t, now())), vec!["hot_streak", "profit_machine"]);
  }

  #[test]
  fn display_order_is_custom_monthly_achievement_streak() {
    let mut t = champion();
    t.profitable_month_streak = Some(6);
    t.monthly_rankings.insert("Jun 2025".to_string(), 2);
    t.monthly_rankings.insert("May 2025".to_string(), 9);
    t.custom_badges.push(CustomBadgeGrant { preset: Some("founder".to_string()), ..Default::default() });

    let badges = evaluate(&t, now());
    let kinds = badges.iter().map(|b| b.kind).collect::<Vec<_>>();
    assert_eq!(kinds.first(), Some(&BadgeKind::Custom));
    assert_eq!(badges[1].name, "Jun 2025 Top 5");
    assert_eq!(badges[1].description, "Ranked #2 in Jun 2025");
    assert_eq!(badges[2].key, "goat");
    assert_eq!(keys(&badges[badges.len() - 2..]), vec!["hot_month", "on_fire"]);
    assert!(!keys(&badges).contains(&"monthly-May 2025"));
  }

  #[test]
  fn monthly_finishes_list_newest_first() {
    let mut t = trader("steady", dec!(20000));
    t.rank = 30;
    t.monthly_rankings.insert("Jun 2025".to_string(), 4);
    t.monthly_rankings.insert("May 2025".to_string(), 1);
    t.monthly_rankings.insert("Dec 2024".to_string(), 3);
    t.monthly_rankings.insert("Aug 2025".to_string(), 2);

    let monthly = evaluate(&t, now()).into_iter()
      .filter(|b| b.kind == BadgeKind::Monthly)
      .map(|b| b.key)
      .collect::<Vec<_>>();
    assert_eq!(monthly, vec!["monthly-Aug 2025", "monthly-Jun 2025", "monthly-May 2025", "monthly-Dec 2024"]);
    assert_eq!(month_start("October 2025"), NaiveDate::from_ymd_opt(2025, 10, 1));
  }

  #[test]
  fn goat_leads_achievements_even_out_of_order() {
    let mut badges = vec![
      ACHIEVEMENTS[3].descriptor.badge(BadgeKind::Achievement),
      ACHIEVEMENTS[0].descriptor.badge(BadgeKind::Achievement),
      STREAKS[0].descriptor.badge(BadgeKind::Streak),
      monthly_badge("Jan 2025", 1),
    ];
    sort_by_priority(&mut badges);
    assert_eq!(keys(&badges), vec!["monthly-Jan 2025", "goat", "hot_streak", "hot_month"]);
  }

  #[test]
  fn evaluation_is_idempotent_for_a_fixed_clock() {
    let mut t = champion();
    t.profitable_month_streak = Some(12);
    assert_eq!(evaluate(&t, now()), evaluate(&t, now()));
  }

  #[test]
  fn custom_grants_use_presets_or_explicit_fields() {
    let mut t = trader("mod", Decimal::ZERO);
    t.rank = 40;
    t.custom_badges = vec![
      CustomBadgeGrant { preset: Some("moderator".to_string()), glyph: Some("🧹".to_string()), ..Default::default() },
      CustomBadgeGrant { name: Some("Beta Tester".to_string()), description: Some("Joined the beta".to_string()), ..Default::default() },
      CustomBadgeGrant::default(),
    ];
    let badges = evaluate(&t, now());
    assert_eq!(badges.len(), 2);
    assert_eq!((badges[0].name.as_str(), badges[0].glyph.as_str()), ("Moderator", "🧹"));
    assert_eq!(badges[1].key, "custom-beta-tester");
    assert_eq!(badges[1].description, "Joined the beta");
  }
}
