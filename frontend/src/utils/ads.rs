pub struct SponsorAd {
  pub name: &'static str,
  pub logo: &'static str,
  pub description: &'static str,
  pub url: &'static str,
  pub color_class: &'static str,
}

pub const ROTATION_SECS: u64 = 8;
pub const SLOTS_PER_SIDE: usize = 5;

pub const SPONSOR_ADS: [SponsorAd; 16] = [
  SponsorAd { name: "Topstep", logo: "🏔️", description: "Trade futures with firm capital. Keep up to 90% of profits.", url: "https://www.topstep.com", color_class: "ad-amber" },
  SponsorAd { name: "Apex Trader Funding", logo: "🦅", description: "One-step evaluations on futures accounts up to $300K.", url: "https://apextraderfunding.com", color_class: "ad-slate" },
  SponsorAd { name: "Tradovate", logo: "📊", description: "Commission-free futures platform on web, desktop and mobile.", url: "https://www.tradovate.com", color_class: "ad-blue" },
  SponsorAd { name: "TradeSyncer", logo: "🔗", description: "Copy trades across prop accounts in real time.", url: "https://tradesyncer.com", color_class: "ad-emerald" },
  SponsorAd { name: "TradeDay", logo: "☀️", description: "Straightforward rules and same-day payouts.", url: "https://www.tradeday.com", color_class: "ad-orange" },
  SponsorAd { name: "Take Profit Trader", logo: "💵", description: "Daily payouts from day one of your PRO account.", url: "https://takeprofittrader.com", color_class: "ad-green" },
  SponsorAd { name: "My Funded Futures", logo: "🚀", description: "Fast evaluations with no activation fees.", url: "https://myfundedfutures.com", color_class: "ad-indigo" },
  SponsorAd { name: "Bulenox", logo: "🐂", description: "No daily drawdown options on every plan.", url: "https://bulenox.com", color_class: "ad-red" },
  SponsorAd { name: "Tradeify", logo: "⚙️", description: "Instant funding paths for experienced traders.", url: "https://tradeify.co", color_class: "ad-cyan" },
  SponsorAd { name: "Elite Trader Funding", logo: "🏅", description: "Evaluations built for consistent scalpers.", url: "https://elitetraderfunding.com", color_class: "ad-purple" },
  SponsorAd { name: "OneUp Trader", logo: "☝️", description: "Single-step evaluations with clear targets.", url: "https://oneuptrader.com", color_class: "ad-pink" },
  SponsorAd { name: "FundedNext", logo: "⏭️", description: "Futures challenges with profit share from the start.", url: "https://fundednext.com", color_class: "ad-teal" },
  SponsorAd { name: "The Trading Pit", logo: "🕳️", description: "Multi-asset prop trading with scaling plans.", url: "https://www.thetradingpit.com", color_class: "ad-stone" },
  SponsorAd { name: "Leeloo Trading", logo: "🎯", description: "Performance accounts with low monthly fees.", url: "https://leelootrading.com", color_class: "ad-rose" },
  SponsorAd { name: "BluSky Trading", logo: "🌤️", description: "Evaluations with flexible trading hours.", url: "https://blusky.pro", color_class: "ad-sky" },
  SponsorAd { name: "Advertise Here", logo: "📣", description: "Reach thousands of verified prop traders every month.", url: "mailto:ads@proofofpips.com", color_class: "ad-neutral" },
];

/// Offset after one rotation tick.
pub fn next_offset(offset: usize) -> usize {
  (offset + SLOTS_PER_SIDE) % SPONSOR_ADS.len()
}

/// Ad shown in `slot` (0-based across both columns) at the given rotation offset.
pub fn ad_for_slot(slot: usize, offset: usize) -> &'static SponsorAd {
  &SPONSOR_ADS[(offset + slot) % SPONSOR_ADS.len()]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rotation_advances_by_a_column_and_wraps() {
    assert_eq!(next_offset(0), 5);
    assert_eq!(next_offset(15), 4);
    let mut offset = 0;
    for _ in 0..16 {
      offset = next_offset(offset);
    }
    assert_eq!(offset, 0);
  }

  #[test]
  fn slots_wrap_around_the_pool() {
    assert_eq!(ad_for_slot(0, 0).name, "Topstep");
    assert_eq!(ad_for_slot(3, 14).name, ad_for_slot(1, 0).name);
  }
}
