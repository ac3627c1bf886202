//! エラー型モジュール

/// 金額文字列の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// 数字が一つも含まれていない（"€", "à définir" など）
    #[error("aucun chiffre dans le montant {input:?}")]
    Empty { input: String },

    /// 数字以外を除いた残りが10進数として読めない
    #[error("montant illisible {input:?}")]
    Malformed { input: String },
}

/// シードデータ読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// JSON として読めない、または必須フィールドが欠けている
    #[error("données initiales illisibles: {0}")]
    Seed(#[from] serde_json::Error),

    /// FailFast ポリシー下での金額解析失敗
    #[error("{record}: champ {field} invalide")]
    Amount {
        record: String,
        field: &'static str,
        #[source]
        source: ParseError,
    },

    /// "YYYY-MM-DD" 以外の日付
    #[error("{record}: date {value:?} invalide")]
    Date {
        record: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
