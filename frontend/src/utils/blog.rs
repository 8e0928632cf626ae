use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlogPost {
  pub slug: &'static str,
  pub title: &'static str,
  pub excerpt: &'static str,
  pub thumbnail: &'static str,
  /// ISO date, `YYYY-MM-DD`.
  pub date: &'static str,
  pub read_time: &'static str,
  pub category: &'static str,
  pub content: &'static str,
}

impl BlogPost {
  pub fn published(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
  }

  pub fn display_date(&self) -> String {
    self.published().map(|d| d.format("%B %-d, %Y").to_string()).unwrap_or_else(|| self.date.to_string())
  }
}

pub const CATEGORIES: [&str; 3] = ["Beginner", "Strategy", "Education"];

pub static POSTS: [BlogPost; 5] = [
  BlogPost {
    slug: "getting-started-prop-trading",
    title: "Getting Started with Prop Trading",
    excerpt: "Everything you need to know about starting your prop trading journey.",
    thumbnail: "📚",
    date: "2024-11-24",
    read_time: "5 min read",
    category: "Beginner",
    content: r#"
# Getting Started with Prop Trading

Prop trading has exploded in popularity over the past few years. Here is what you need to know before buying your first evaluation.

## What is Prop Trading?

Proprietary trading means trading a firm's capital instead of your own. You pass an evaluation, get funded and split the profits with the firm.

## Key Benefits

- **Limited Risk**: you only risk the evaluation fee, not a whole account
- **Large Capital**: trade $50K, $100K or even $200K accounts
- **Keep Profits**: most firms pay out 70-90% of what you make
- **No PDT Rule**: trade as often as your plan calls for

## How to Get Started

1. Pick a reputable prop firm (the verified leaderboard shows where real traders get paid)
2. Purchase an evaluation account
3. Pass the evaluation by hitting the profit target inside the drawdown rules
4. Get funded and trade the firm's capital
5. Request your payouts

Want to see who is actually getting paid? Check the leaderboard.
"#,
  },
  BlogPost {
    slug: "risk-management-essentials",
    title: "Risk Management Essentials",
    excerpt: "The #1 skill that separates profitable traders from everyone else.",
    thumbnail: "⚠️",
    date: "2024-11-20",
    read_time: "4 min read",
    category: "Strategy",
    content: r#"
# Risk Management Essentials

Risk management is the most important skill in trading. Everything else comes second.

## The 1% Rule

Never risk more than 1-2% of the account on a single trade. This is not negotiable.

## Position Sizing

Size every position from three inputs:

- Account size
- Stop loss distance
- Risk percentage

**Formula**: Position Size = (Account Size × Risk %) / Stop Loss Distance

## Stop Losses

Always use a stop loss. No exceptions.

## Win Rate vs Risk:Reward

You don't need a 90% win rate. A 40% win rate with 2:1 risk:reward is profitable:

- 10 trades at 40% = 4 wins and 6 losses
- Wins: 4 × $200 = $800
- Losses: 6 × $100 = -$600
- Net: +$200

Protect your capital and the profits will follow.
"#,
  },
  BlogPost {
    slug: "auction-market-theory",
    title: "Auction Market Theory: A Complete Guide",
    excerpt: "Master the framework that reveals how markets truly work through supply and demand auctions.",
    thumbnail: "📊",
    date: "2024-11-30",
    read_time: "15 min read",
    category: "Strategy",
    content: r#"
# Auction Market Theory: A Complete Guide

Markets are continuous two-sided auctions. Price moves to find the level where the most business gets done, then moves again when that value stops attracting trade.

## Balance and Imbalance

- **Balance**: price rotates inside a range where buyers and sellers agree on value
- **Imbalance**: one side takes control and price travels quickly to find new value

## Value Area

The value area is the range where roughly 70% of the session's volume traded. The point of control is the single price with the most volume.

## Putting It to Work

1. Mark the prior session's value area high, low and point of control
2. Watch whether the open is inside or outside of value
3. Fade moves back into balance, follow acceptance outside of it

---

Ready to put it into practice? The leaderboard shows who is applying these ideas with verified results.
"#,
  },
  BlogPost {
    slug: "chart-patterns-complete-guide",
    title: "The Complete Chart Patterns Guide",
    excerpt: "Master every essential chart pattern with trading plans for each setup.",
    thumbnail: "📈",
    date: "2024-11-30",
    read_time: "25 min read",
    category: "Education",
    content: r#"
# The Complete Chart Patterns Guide

Chart patterns are the language of price action. They show the psychology of market participants and give high-probability setups when traded with a plan.

---

## Trend Continuation Patterns

### Ascending Triangle

**What It Tells You**: buyers step in at higher lows while sellers defend a flat resistance.

- Entry: breakout above resistance on volume
- Stop Loss: below the last higher low
- Target: triangle height projected from the breakout

### Descending Triangle

**What It Tells You**: sellers make lower highs against a flat support that eventually gives way.

- Entry: break below support on volume
- Stop Loss: above the last lower high
- Target: triangle height projected downward

### Bull Flag

**What It Tells You**: after a strong rally, price drifts lower in a tight channel before the next leg.

- Entry: break above flag resistance
- Stop Loss: below flag support
- Target: flagpole length projected from the breakout

---

## Reversal Patterns

### Head and Shoulders

**What It Tells You**: the final push higher fails and buyers run out of conviction.

- Entry: close below the neckline
- Stop Loss: above the right shoulder
- Target: head-to-neckline distance projected down

### Double Bottom

**What It Tells You**: sellers fail twice at the same level and buyers take over.

- Entry: break above the middle peak
- Stop Loss: below the lows
- Target: pattern height projected upward

Patterns are probabilities, not promises. Size every trade as if it will fail.
"#,
  },
  BlogPost {
    slug: "choosing-the-right-prop-firm",
    title: "Choosing the Right Prop Firm",
    excerpt: "Not all prop firms are created equal. Here's how to choose wisely.",
    thumbnail: "🎯",
    date: "2024-11-15",
    read_time: "6 min read",
    category: "Education",
    content: r#"
# Choosing the Right Prop Firm

With 100+ prop firms out there, how do you choose? Start with this framework.

## Red Flags to Avoid

- Firms with no verified payouts
- Unrealistic profit targets
- Hidden fees and rules
- Slow or missing support

## What to Look For

- **Verified Payouts**: check the leaderboard for real trader earnings
- **Reasonable Rules**: sane drawdown limits, targets and minimum days
- **Platform Choice**: the platforms you already trade on
- **Good Support**: fast responses and an active community

## Platform Matters

- **Futures**: Topstep, Apex, TradeDay
- **Forex**: FTMO, The5ers

Do your research, start small and scale once you are consistently profitable.
"#,
  },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
  POSTS.iter().find(|p| p.slug == slug)
}

/// Newest first; `None` keeps every category.
pub fn posts_in(category: Option<&str>) -> Vec<&'static BlogPost> {
  let mut posts = POSTS.iter().filter(|p| category.map_or(true, |c| p.category == c)).collect::<Vec<_>>();
  posts.sort_by(|a, b| b.date.cmp(a.date));
  posts
}
