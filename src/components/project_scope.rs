//! 選択中プロジェクトの表示

use leptos::*;
use crate::AppContext;

/// 選択中のプロジェクト名（未選択なら全プロジェクト）
#[component]
pub fn ProjectScope() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let scope = move || {
        ctx.navigation
            .with(|n| n.selected_project().cloned())
            .and_then(|id| ctx.catalog.with_value(|c| c.project(&id).map(|p| p.name.clone())))
    };

    view! {
        <p class="project-scope">
            {move || match scope() {
                Some(name) => format!("Projet : {}", name),
                None => "Tous les projets".to_string(),
            }}
        </p>
    }
}
