//! 金額モジュール
//!
//! 金額は `Decimal` の固定小数点で保持し、表示用文字列との変換はここに集約する。
//! 桁区切りと小数点の解釈はロケール設定で切り替える。

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::utils::log_trace::log_warn_with_data;

const CURRENCY_SUFFIX: &str = " €";

// ============================================
// 金額型
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl Add for Amount {
    type Output = Amount;

    /// 桁あふれは `Decimal::MAX`/`MIN` で飽和させ、警告ログを残す
    fn add(self, rhs: Amount) -> Amount {
        match self.0.checked_add(rhs.0) {
            Some(value) => Amount(value),
            None => saturated("addition", self, rhs, self.0.saturating_add(rhs.0)),
        }
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        match self.0.checked_sub(rhs.0) {
            Some(value) => Amount(value),
            None => saturated("soustraction", self, rhs, self.0.saturating_sub(rhs.0)),
        }
    }
}

fn saturated(operation: &str, lhs: Amount, rhs: Amount, value: Decimal) -> Amount {
    log_warn_with_data(
        "money",
        &format!("dépassement de capacité ({}), montant plafonné", operation),
        serde_json::json!({ "lhs": lhs.0.to_string(), "rhs": rhs.0.to_string() }),
    );
    Amount(value)
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

// ============================================
// ロケール
// ============================================

/// 金額文字列のロケール
///
/// - `CommaGrouping`: "85,000 €" = 85000（`,` は桁区切り、`.` は小数点）
/// - `CommaDecimal`: "85,000 €" = 85.000（`,` は小数点、`.` は桁区切り）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmountLocale {
    #[default]
    CommaGrouping,
    CommaDecimal,
}

impl AmountLocale {
    pub fn grouping_separator(self) -> char {
        match self {
            AmountLocale::CommaGrouping => ',',
            AmountLocale::CommaDecimal => '.',
        }
    }

    pub fn decimal_separator(self) -> char {
        match self {
            AmountLocale::CommaGrouping => '.',
            AmountLocale::CommaDecimal => ',',
        }
    }

    /// URLパラメータ値から変換
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "comma-grouping" | "en" => Some(AmountLocale::CommaGrouping),
            "comma-decimal" | "fr-decimal" => Some(AmountLocale::CommaDecimal),
            _ => None,
        }
    }
}

impl fmt::Display for AmountLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountLocale::CommaGrouping => f.write_str("comma-grouping"),
            AmountLocale::CommaDecimal => f.write_str("comma-decimal"),
        }
    }
}

/// 解析失敗時の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParsePolicy {
    /// 警告ログを残して 0 として扱う
    #[default]
    SkipAndWarn,
    /// エラーを返す
    FailFast,
}

impl ParsePolicy {
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "skip-and-warn" | "skip" => Some(ParsePolicy::SkipAndWarn),
            "fail-fast" | "fail" => Some(ParsePolicy::FailFast),
            _ => None,
        }
    }
}

// ============================================
// 解析・表示
// ============================================

/// 表示用金額文字列を解析
///
/// 数字・小数点・マイナス記号以外の文字はすべて捨てる。
/// 小数点とみなす文字はロケールで決まる。
pub fn parse_amount(input: &str, locale: AmountLocale) -> Result<Amount, ParseError> {
    let decimal_separator = locale.decimal_separator();
    let cleaned: String = input
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() || c == '-' {
                Some(c)
            } else if c == decimal_separator {
                Some('.')
            } else {
                None
            }
        })
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return Err(ParseError::Empty { input: input.to_string() });
    }

    Decimal::from_str(&cleaned)
        .map(Amount)
        .map_err(|_| ParseError::Malformed { input: input.to_string() })
}

/// ポリシーに従って解析（SkipAndWarn なら失敗は 0 になる）
pub fn parse_amount_with_policy(
    input: &str,
    locale: AmountLocale,
    policy: ParsePolicy,
) -> Result<Amount, ParseError> {
    match parse_amount(input, locale) {
        Ok(amount) => Ok(amount),
        Err(e) => match policy {
            ParsePolicy::FailFast => Err(e),
            ParsePolicy::SkipAndWarn => {
                log_warn_with_data(
                    "money",
                    &format!("montant ignoré: {}", e),
                    serde_json::json!({ "input": input, "locale": locale.to_string() }),
                );
                Ok(Amount::ZERO)
            }
        },
    }
}

/// 金額を表示用文字列に整形（例: "92,375 €"）
pub fn format_amount(amount: Amount, locale: AmountLocale) -> String {
    let normalized = amount.value().normalize();
    let digits = normalized.abs().to_string();
    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::new();
    if amount.is_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(integer_part, locale.grouping_separator()));
    if let Some(fraction) = fraction_part {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }
    out.push_str(CURRENCY_SUFFIX);
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(v: i64) -> Amount {
        Amount::from(Decimal::from(v))
    }

    #[test]
    fn test_parse_comma_grouping() {
        let amount = parse_amount("85,000 €", AmountLocale::CommaGrouping).unwrap();
        assert_eq!(amount, whole(85_000));
        let amount = parse_amount("1,250,000 €", AmountLocale::CommaGrouping).unwrap();
        assert_eq!(amount, whole(1_250_000));
    }

    #[test]
    fn test_parse_comma_decimal() {
        let amount = parse_amount("85,000 €", AmountLocale::CommaDecimal).unwrap();
        assert_eq!(amount.value(), Decimal::new(85_000, 3));
        let amount = parse_amount("1.250.000,50 €", AmountLocale::CommaDecimal).unwrap();
        assert_eq!(amount.value(), Decimal::new(125_000_050, 2));
    }

    #[test]
    fn test_parse_negative_and_fraction() {
        let amount = parse_amount("-1,500.25 €", AmountLocale::CommaGrouping).unwrap();
        assert_eq!(amount.value(), Decimal::new(-150_025, 2));
        assert!(amount.is_negative());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_amount("€", AmountLocale::CommaGrouping),
            Err(ParseError::Empty { .. })
        ));
        assert!(matches!(
            parse_amount("—", AmountLocale::CommaGrouping),
            Err(ParseError::Empty { .. })
        ));
        assert!(matches!(
            parse_amount("12-34 €", AmountLocale::CommaGrouping),
            Err(ParseError::Malformed { .. })
        ));
        assert!(matches!(
            parse_amount("1.2.3 €", AmountLocale::CommaGrouping),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn test_policy() {
        let skipped =
            parse_amount_with_policy("n/a", AmountLocale::CommaGrouping, ParsePolicy::SkipAndWarn);
        assert_eq!(skipped, Ok(Amount::ZERO));

        let failed =
            parse_amount_with_policy("n/a", AmountLocale::CommaGrouping, ParsePolicy::FailFast);
        assert!(failed.is_err());

        let ok = parse_amount_with_policy("120 €", AmountLocale::CommaGrouping, ParsePolicy::FailFast);
        assert_eq!(ok, Ok(whole(120)));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(whole(92_375), AmountLocale::CommaGrouping), "92,375 €");
        assert_eq!(format_amount(whole(1_250_000), AmountLocale::CommaGrouping), "1,250,000 €");
        assert_eq!(format_amount(whole(120), AmountLocale::CommaGrouping), "120 €");
        assert_eq!(format_amount(Amount::ZERO, AmountLocale::CommaGrouping), "0 €");
        assert_eq!(format_amount(whole(-57_500), AmountLocale::CommaGrouping), "-57,500 €");
        assert_eq!(format_amount(whole(1_250_000), AmountLocale::CommaDecimal), "1.250.000 €");

        let fractional = Amount::from(Decimal::new(92_375, 3));
        assert_eq!(format_amount(fractional, AmountLocale::CommaDecimal), "92,375 €");
        assert_eq!(format_amount(fractional, AmountLocale::CommaGrouping), "92.375 €");
    }

    #[test]
    fn test_sum() {
        let total: Amount = [whole(1), whole(2), whole(3)].iter().sum();
        assert_eq!(total, whole(6));
        assert_eq!(whole(10) - whole(25), whole(-15));
    }

    #[test]
    fn test_overflow_saturates() {
        let near_max =
            parse_amount("70,000,000,000,000,000,000,000,000,000 €", AmountLocale::CommaGrouping).unwrap();
        let total: Amount = [near_max, near_max].iter().sum();
        assert_eq!(total.value(), Decimal::MAX);

        let floor = Amount::from(Decimal::MIN) - near_max;
        assert_eq!(floor.value(), Decimal::MIN);
        assert!(floor.is_negative());
    }

    #[test]
    fn test_params() {
        assert_eq!(AmountLocale::from_param("fr-decimal"), Some(AmountLocale::CommaDecimal));
        assert_eq!(AmountLocale::from_param("comma-grouping"), Some(AmountLocale::CommaGrouping));
        assert_eq!(AmountLocale::from_param("xx"), None);
        assert_eq!(ParsePolicy::from_param("fail-fast"), Some(ParsePolicy::FailFast));
        assert_eq!(ParsePolicy::from_param(""), None);
    }
}
