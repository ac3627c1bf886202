//! 集計モジュール
//!
//! 金額合計・収支・残り日数など、表示データから導出する値を計算する。

use chrono::NaiveDate;

use crate::models::{FinanceEntry, FinanceKind, Measurement, WorkHourEntry};
use crate::utils::money::Amount;

/// 締切が近いとみなす既定の日数
pub const DEFAULT_URGENT_THRESHOLD_DAYS: i64 = 30;

/// 測定明細の合計金額
pub fn measurement_total(measurements: &[Measurement]) -> Amount {
    measurements.iter().map(|m| m.total_price).sum()
}

/// 作業時間の合計
pub fn total_hours(entries: &[WorkHourEntry]) -> u64 {
    entries.iter().map(|e| u64::from(e.hours)).sum()
}

/// 収支サマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinanceSummary {
    pub income: Amount,
    pub expenses: Amount,
    pub balance: Amount,
}

impl FinanceSummary {
    pub fn from_entries(entries: &[FinanceEntry]) -> Self {
        let sum_of = |kind: FinanceKind| -> Amount {
            entries.iter().filter(|e| e.kind == kind).map(|e| e.amount).sum()
        };
        let income = sum_of(FinanceKind::Income);
        let expenses = sum_of(FinanceKind::Expense);
        FinanceSummary {
            income,
            expenses,
            balance: income - expenses,
        }
    }
}

/// 締切までの残り日数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days_remaining: i64,
    pub urgent: bool,
}

impl Countdown {
    /// 暦日の差で計算する（締切を過ぎていれば負）
    pub fn new(end_date: NaiveDate, today: NaiveDate, urgent_threshold_days: i64) -> Self {
        let days_remaining = end_date.signed_duration_since(today).num_days();
        Countdown {
            days_remaining,
            urgent: days_remaining < urgent_threshold_days,
        }
    }
}
