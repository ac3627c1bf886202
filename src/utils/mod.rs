//! ユーティリティモジュール

pub mod dates;
pub mod log_trace;
pub mod metrics;
pub mod money;
pub mod settings;
