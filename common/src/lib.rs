//! Salary Lookup Common Library
//!
//! CLIとWeb(WASM)で共有される型と画面ロジック

pub mod types;
pub mod abbreviation;
pub mod format;
pub mod filter;
pub mod render;
pub mod error;
pub mod endpoints;
pub mod load;
pub mod analysis;
pub mod session;

pub use types::{SalaryRecord, SalaryRow, DetailView};
pub use abbreviation::resolve;
pub use format::CurrencyFormat;
pub use filter::filter_records;
pub use render::{render_records, ListMessage, ListView};
pub use error::{Error, Result};
pub use endpoints::Endpoints;
pub use load::LoadError;
pub use analysis::{
    AnalysisError, AnalysisReport, AnalyzeRequest, MarkdownRenderer, PlainTextRenderer,
};
pub use session::{AnalysisPanel, AnalysisTicket, Applied, LoadTicket, SessionState};
