//! 表示設定（LocalStorage + URLパラメータ）
//!
//! 業務データは保存しない。金額ロケール・解析ポリシー・締切警告日数のみを扱う。

use serde::Deserialize;

use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::metrics::DEFAULT_URGENT_THRESHOLD_DAYS;
use crate::utils::money::{AmountLocale, ParsePolicy};

const SETTINGS_KEY: &str = "gestion_projets_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub locale: AmountLocale,
    #[serde(default)]
    pub parse_policy: ParsePolicy,
    #[serde(default = "default_urgent_threshold")]
    pub urgent_threshold_days: i64,
}

fn default_urgent_threshold() -> i64 {
    DEFAULT_URGENT_THRESHOLD_DAYS
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            locale: AmountLocale::default(),
            parse_policy: ParsePolicy::default(),
            urgent_threshold_days: DEFAULT_URGENT_THRESHOLD_DAYS,
        }
    }
}

impl Settings {
    /// クエリパラメータで上書きする。上書きがあれば true
    ///
    /// 対応キー: `locale`, `policy`, `urgent`。不正な値は警告ログのみ。
    pub fn apply_overrides(&mut self, pairs: &[(String, String)]) -> bool {
        let mut changed = false;
        for (key, value) in pairs {
            let applied = match key.as_str() {
                "locale" => AmountLocale::from_param(value).map(|l| self.locale = l),
                "policy" => ParsePolicy::from_param(value).map(|p| self.parse_policy = p),
                "urgent" => value
                    .parse::<i64>()
                    .ok()
                    .filter(|d| *d >= 0)
                    .map(|d| self.urgent_threshold_days = d),
                _ => continue,
            };
            match applied {
                Some(()) => changed = true,
                None => log_warn("settings", &format!("valeur ignorée: {}={}", key, value)),
            }
        }
        changed
    }
}

/// クエリ文字列を (キー, 値) に分解
pub fn split_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// 設定を読み込む（既定値 → LocalStorage → URLパラメータ）
///
/// URLパラメータはこのセッションだけに効き、LocalStorage には書き戻さない。
pub fn load_settings() -> Settings {
    let settings = resolve_settings(load_from_storage(), &url_query_pairs());
    log_info("settings", &format!("paramètres actifs: {:?}", settings));
    settings
}

/// 保存済み設定にクエリの上書きを重ねる
pub fn resolve_settings(stored: Option<Settings>, pairs: &[(String, String)]) -> Settings {
    let mut settings = stored.unwrap_or_default();
    settings.apply_overrides(pairs);
    settings
}

fn load_from_storage() -> Option<Settings> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(SETTINGS_KEY).ok()??;
    serde_json::from_str(&json).ok()
}

fn url_query_pairs() -> Vec<(String, String)> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    split_query(&search)
        .into_iter()
        .map(|(k, v)| {
            let decoded = js_sys::decode_uri_component(&v)
                .ok()
                .and_then(|s| s.as_string())
                .unwrap_or(v);
            (k, decoded)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.locale, AmountLocale::CommaGrouping);
        assert_eq!(settings.parse_policy, ParsePolicy::SkipAndWarn);
        assert_eq!(settings.urgent_threshold_days, 30);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale":"comma-decimal"}"#).unwrap();
        assert_eq!(settings.locale, AmountLocale::CommaDecimal);
        assert_eq!(settings.parse_policy, ParsePolicy::SkipAndWarn);
        assert_eq!(settings.urgent_threshold_days, 30);
    }

    #[test]
    fn test_apply_overrides() {
        let mut settings = Settings::default();
        let pairs = split_query("?locale=fr-decimal&policy=fail-fast&urgent=45&other=1");
        assert!(settings.apply_overrides(&pairs));
        assert_eq!(settings.locale, AmountLocale::CommaDecimal);
        assert_eq!(settings.parse_policy, ParsePolicy::FailFast);
        assert_eq!(settings.urgent_threshold_days, 45);
    }

    #[test]
    fn test_resolve_layers_query_over_stored() {
        let stored = Settings {
            locale: AmountLocale::CommaDecimal,
            urgent_threshold_days: 10,
            ..Settings::default()
        };
        let pairs = split_query("?policy=fail-fast");
        let resolved = resolve_settings(Some(stored), &pairs);
        assert_eq!(resolved.locale, AmountLocale::CommaDecimal);
        assert_eq!(resolved.urgent_threshold_days, 10);
        assert_eq!(resolved.parse_policy, ParsePolicy::FailFast);
        assert_eq!(stored.parse_policy, ParsePolicy::SkipAndWarn);

        // 次の訪問（パラメータなし）では保存済みの値に戻る
        assert_eq!(resolve_settings(Some(stored), &[]), stored);
        assert_eq!(resolve_settings(None, &[]), Settings::default());
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut settings = Settings::default();
        let pairs = split_query("?locale=klingon&urgent=-3&policy");
        assert!(!settings.apply_overrides(&pairs));
        assert_eq!(settings, Settings::default());
        assert!(!settings.apply_overrides(&split_query("")));
    }
}
