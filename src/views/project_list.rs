//! プロジェクト一覧ビュー

use leptos::*;
use crate::components::{CreateDialog, StatusBadge, ToastContext};
use crate::models::ProjectId;
use crate::utils::dates::format_date;
use crate::utils::money::format_amount;
use crate::AppContext;

/// プロジェクト一覧（「Détails」で `on_select` を発火）
#[component]
pub fn ProjectList(on_select: Callback<ProjectId>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let toasts = use_context::<ToastContext>().expect("ToastContext not found");
    let locale = ctx.settings.locale;
    let projects = ctx.catalog.with_value(|c| c.projects.clone());
    let dialog_open = create_rw_signal(false);

    view! {
        <div class="card project-list">
            <div class="card-header">
                <h3>"Liste des Projets"</h3>
                <button class="primary-btn" on:click=move |_| dialog_open.set(true)>
                    "Nouveau Projet"
                </button>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Nom du Projet"</th>
                        <th>"Maître d'Ouvrage"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                        <th>"Date de fin"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {projects.into_iter().map(|p| {
                        let id = p.id.clone();
                        view! {
                            <tr>
                                <td>{p.name}</td>
                                <td>{p.client}</td>
                                <td>{format_amount(p.amount, locale)}</td>
                                <td><StatusBadge status=p.status /></td>
                                <td>{format_date(p.end_date)}</td>
                                <td>
                                    <button class="outline-btn" on:click=move |_| on_select.call(id.clone())>
                                        "Détails"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            <CreateDialog
                open=dialog_open
                title="Créer un nouveau projet"
                body="Formulaire pour créer un projet"
                submit_label="Créer le projet"
                on_submit=Callback::new(move |_: ()| toasts.success("Projet créé avec succès"))
            />
        </div>
    }
}
