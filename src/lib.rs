//! case-archive-rust
//!
//! 鉴定案件文件NAS归档工具：按文件名中的年份、案件类型关键字和案号
//! 分类归档到共享目录的目录树中。

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod preflight;
pub mod resolver;
pub mod transfer;

pub use classifier::{CaseId, Classifier};
pub use config::Config;
pub use error::{ArchiveError, Result};
pub use pipeline::ArchiveStats;
pub use resolver::Category;
pub use transfer::TransferOutcome;
