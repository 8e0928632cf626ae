pub mod ads;
pub mod api;
pub mod badges;
pub mod blog;
pub mod chart;
pub mod compare;
pub mod export;
pub mod formatters;
pub mod leaderboard;
pub mod markdown;
pub mod placeholders;
pub mod server;
pub mod session;
pub mod traders;
