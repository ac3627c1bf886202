//! トップページ（タブ切り替え）

use leptos::*;
use crate::components::ToastContext;
use crate::models::{DetailsView, Phase, ProjectId};
use crate::utils::log_trace::log_info;
use crate::AppContext;
use super::{InvoiceManagement, ProjectDetails, ProjectList, RequestManagement, TechnicalFinance};

#[component]
pub fn IndexPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let toasts = use_context::<ToastContext>().expect("ToastContext not found");
    let navigation = ctx.navigation;

    let on_select = Callback::new(move |id: ProjectId| {
        log_info("navigation", &format!("projet sélectionné: {}", id));
        navigation.update(|n| n.select_project(id));
        toasts.success("Projet sélectionné");
    });

    let on_back = Callback::new(move |_: ()| {
        log_info("navigation", "retour à la liste des projets");
        navigation.update(|n| n.back_to_projects());
    });

    let show_phase = move |phase: Phase| navigation.update(|n| n.show_phase(phase));

    view! {
        <div class="index-page">
            <h1>"Gestion de Projets"</h1>

            <nav class="tabs">
                {Phase::ALL.into_iter().map(|phase| view! {
                    <button
                        class=move || if navigation.with(|n| n.active_phase() == phase) { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| show_phase(phase)
                    >
                        {phase.label()}
                    </button>
                }).collect_view()}
            </nav>

            <section class="tab-content">
                {move || match navigation.with(|n| n.active_phase()) {
                    Phase::Projects => view! { <ProjectList on_select=on_select /> }.into_view(),
                    Phase::Details => match navigation.with(|n| n.details()) {
                        DetailsView::Project(id) => view! {
                            <ProjectDetails project_id=id on_back=on_back />
                        }.into_view(),
                        DetailsView::Placeholder => view! {
                            <div class="card placeholder">
                                <p class="placeholder-text">"Veuillez sélectionner un projet"</p>
                                <button class="primary-btn" on:click=move |_| show_phase(Phase::Projects)>
                                    "Retourner aux projets"
                                </button>
                            </div>
                        }.into_view(),
                    },
                    Phase::Invoicing => view! { <InvoiceManagement /> }.into_view(),
                    Phase::Requests => view! { <RequestManagement /> }.into_view(),
                    Phase::Technical => view! { <TechnicalFinance /> }.into_view(),
                }}
            </section>
        </div>
    }
}
