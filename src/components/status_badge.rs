//! ステータスバッジコンポーネント

use leptos::*;
use crate::models::StatusLabel;

/// ステータス列挙値をラベル付きバッジで表示
#[component]
pub fn StatusBadge<S>(status: S) -> impl IntoView
where
    S: StatusLabel + 'static,
{
    view! {
        <span class=format!("badge {}", status.badge().css_class())>
            {status.label()}
        </span>
    }
}
