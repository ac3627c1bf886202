//! 404ページ

use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page non trouvée"</h1>
            <p class="not-found-text">
                "La page que vous recherchez n'existe pas ou a été déplacée."
            </p>
            <a class="primary-btn" href="/">"Retour à l'accueil"</a>
        </div>
    }
}
