//! Salary Lookup CLI
//!
//! 給与一覧の取得・検索・詳細表示・AI解析を端末から行う。

pub mod cli;
pub mod config;
pub mod error;
pub mod client;
pub mod display;
pub mod workflow;
pub mod browse;
