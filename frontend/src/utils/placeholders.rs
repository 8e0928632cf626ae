use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::traders::{AuthStatus, ConnectionType, PlaceholderSupply, TraderRecord, PROP_FIRMS};

struct DemoRow {
  handle: &'static str,
  avatar: &'static str,
  total: i64,
  payouts: u32,
  monthly: i64,
  win_tenths: i64,
  joined: &'static str,
}

const DEMO_ROWS: [DemoRow; 30] = [
  DemoRow { handle: "thetradingchamp", avatar: "🎯", total: 98300, payouts: 12, monthly: 15100, win_tenths: 712, joined: "January 2023" },
  DemoRow { handle: "bullishbritt", avatar: "👑", total: 84750, payouts: 6, monthly: 14100, win_tenths: 685, joined: "March 2023" },
  DemoRow { handle: "daytrader_jen", avatar: "💎", total: 76200, payouts: 9, monthly: 12800, win_tenths: 648, joined: "June 2023" },
  DemoRow { handle: "prop_master", avatar: "⚡", total: 69400, payouts: 7, monthly: 11500, win_tenths: 693, joined: "February 2023" },
  DemoRow { handle: "_TJRTrades", avatar: "🥷", total: 61800, payouts: 5, monthly: 10300, win_tenths: 637, joined: "May 2023" },
  DemoRow { handle: "Jadecap_", avatar: "🧙", total: 58900, payouts: 8, monthly: 9800, win_tenths: 674, joined: "July 2023" },
  DemoRow { handle: "scalp_king", avatar: "👨‍💼", total: 54300, payouts: 10, monthly: 9100, win_tenths: 702, joined: "August 2023" },
  DemoRow { handle: "momentum_beast", avatar: "🦁", total: 48700, payouts: 4, monthly: 8400, win_tenths: 629, joined: "September 2023" },
  DemoRow { handle: "swing_goddess", avatar: "🎨", total: 45200, payouts: 11, monthly: 7900, win_tenths: 657, joined: "October 2023" },
  DemoRow { handle: "breakout_trader", avatar: "🚀", total: 42100, payouts: 6, monthly: 7200, win_tenths: 668, joined: "November 2023" },
  DemoRow { handle: "options_wizard", avatar: "🔮", total: 39800, payouts: 9, monthly: 6900, win_tenths: 681, joined: "December 2023" },
  DemoRow { handle: "range_master", avatar: "📊", total: 37500, payouts: 5, monthly: 6500, win_tenths: 643, joined: "January 2024" },
  DemoRow { handle: "trend_follower", avatar: "📈", total: 35200, payouts: 8, monthly: 6200, win_tenths: 697, joined: "February 2024" },
  DemoRow { handle: "reversal_pro", avatar: "🔄", total: 33100, payouts: 7, monthly: 5900, win_tenths: 635, joined: "March 2024" },
  DemoRow { handle: "volume_king", avatar: "📢", total: 31000, payouts: 10, monthly: 5600, win_tenths: 679, joined: "April 2024" },
  DemoRow { handle: "pattern_hunter", avatar: "🎯", total: 29200, payouts: 4, monthly: 5300, win_tenths: 621, joined: "May 2024" },
  DemoRow { handle: "algo_trader", avatar: "🤖", total: 27500, payouts: 12, monthly: 5100, win_tenths: 714, joined: "June 2024" },
  DemoRow { handle: "support_resist", avatar: "⚖️", total: 25800, payouts: 6, monthly: 4800, win_tenths: 656, joined: "July 2024" },
  DemoRow { handle: "fibonacci_master", avatar: "🌀", total: 24100, payouts: 9, monthly: 4600, win_tenths: 683, joined: "August 2024" },
  DemoRow { handle: "candlestick_pro", avatar: "🕯️", total: 22600, payouts: 5, monthly: 4400, win_tenths: 639, joined: "September 2024" },
  DemoRow { handle: "market_maker", avatar: "💰", total: 21200, payouts: 8, monthly: 4200, win_tenths: 672, joined: "October 2024" },
  DemoRow { handle: "gap_trader", avatar: "📉", total: 19900, payouts: 7, monthly: 4000, win_tenths: 647, joined: "November 2024" },
  DemoRow { handle: "moving_avg_ninja", avatar: "📏", total: 18700, payouts: 10, monthly: 3800, win_tenths: 691, joined: "December 2024" },
  DemoRow { handle: "volatility_hunter", avatar: "🐍", total: 17500, payouts: 4, monthly: 3600, win_tenths: 624, joined: "January 2025" },
  DemoRow { handle: "orderflow_expert", avatar: "🌊", total: 16400, payouts: 11, monthly: 3400, win_tenths: 708, joined: "February 2025" },
  DemoRow { handle: "rsi_divergence", avatar: "📐", total: 15300, payouts: 6, monthly: 3200, win_tenths: 665, joined: "March 2025" },
  DemoRow { handle: "macd_master", avatar: "⚡", total: 14200, payouts: 9, monthly: 3000, win_tenths: 689, joined: "April 2025" },
  DemoRow { handle: "bollinger_bands", avatar: "🎸", total: 13100, payouts: 5, monthly: 2800, win_tenths: 632, joined: "May 2025" },
  DemoRow { handle: "elliott_wave", avatar: "🌊", total: 12100, payouts: 8, monthly: 2600, win_tenths: 676, joined: "June 2025" },
  DemoRow { handle: "ichimoku_cloud", avatar: "☁️", total: 11200, payouts: 7, monthly: 2400, win_tenths: 651, joined: "July 2025" },
];

/// Fixed roster of sample traders shown when `PIPS_DEMO_TRADERS` is on.
pub struct DemoRoster;

impl PlaceholderSupply for DemoRoster {
  fn placeholders(&self, _now: DateTime<Utc>) -> Vec<TraderRecord> {
    DEMO_ROWS.iter().enumerate().map(|(idx, row)| {
      let (firm, _) = PROP_FIRMS[idx % PROP_FIRMS.len()];
      TraderRecord {
        id: format!("demo-{}", idx + 1),
        twitter_handle: row.handle.to_string(),
        avatar_glyph: row.avatar.to_string(),
        total_profit: Decimal::from(row.total),
        monthly_profit: Decimal::from(row.monthly),
        win_rate: Decimal::new(row.win_tenths, 1),
        account_created_at: joined_at(row.joined),
        prop_firm: firm.to_string(),
        connection_type: ConnectionType::Tradovate,
        auth_status: AuthStatus::Active,
        verified_payouts: Some(row.payouts),
        ..Default::default()
      }
    }).collect()
  }
}

// "March 2023" -> 2023-03-01T00:00:00Z
fn joined_at(month_year: &str) -> Option<DateTime<Utc>> {
  NaiveDate::parse_from_str(&format!("01 {}", month_year), "%d %B %Y")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|naive| naive.and_utc())
}
