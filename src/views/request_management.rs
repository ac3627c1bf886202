//! 社員申請・資材申請ビュー

use leptos::*;
use crate::components::{CreateDialog, ProjectScope, StatusBadge, ToastContext};
use crate::utils::dates::format_date;
use crate::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum RequestKind {
    Employee,
    Material,
}

impl RequestKind {
    fn tab_label(self) -> &'static str {
        match self {
            RequestKind::Employee => "Demandes d'Employé",
            RequestKind::Material => "Demandes de Matériels",
        }
    }

    fn create_button(self) -> &'static str {
        match self {
            RequestKind::Employee => "Nouvelle Demande d'Employé",
            RequestKind::Material => "Nouvelle Demande de Matériel",
        }
    }

    fn dialog_title(self) -> &'static str {
        match self {
            RequestKind::Employee => "Soumettre une demande d'employé",
            RequestKind::Material => "Demander du matériel",
        }
    }

    fn dialog_body(self) -> &'static str {
        match self {
            RequestKind::Employee => "Formulaire pour créer une demande d'employé",
            RequestKind::Material => "Formulaire pour créer une demande de matériel",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            RequestKind::Employee => "Demande d'employé créée avec succès",
            RequestKind::Material => "Demande de matériel soumise avec succès",
        }
    }
}

#[component]
pub fn RequestManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let toasts = use_context::<ToastContext>().expect("ToastContext not found");

    let (request_kind, set_request_kind) = create_signal(RequestKind::Employee);
    let dialog_open = create_rw_signal(false);

    let employee_requests = ctx.catalog.with_value(|c| c.employee_requests.clone());
    let material_requests = ctx.catalog.with_value(|c| c.material_requests.clone());

    view! {
        <div class="request-management">
            <ProjectScope />

            <div class="toolbar">
                <div class="sub-tabs">
                    {[RequestKind::Employee, RequestKind::Material].into_iter().map(|kind| view! {
                        <button
                            class=move || if request_kind.get() == kind { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| set_request_kind.set(kind)
                        >
                            {kind.tab_label()}
                        </button>
                    }).collect_view()}
                </div>
                <button class="primary-btn" on:click=move |_| dialog_open.set(true)>
                    {move || request_kind.get().create_button()}
                </button>
            </div>

            {move || match request_kind.get() {
                RequestKind::Employee => view! {
                    <div class="card">
                        <h3>"Demandes d'Employé"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Employé"</th>
                                    <th>"Type"</th>
                                    <th>"Date"</th>
                                    <th>"Détails"</th>
                                    <th>"Statut"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {employee_requests.iter().map(|request| view! {
                                    <tr>
                                        <td>{request.employee.clone()}</td>
                                        <td>{request.request_type.clone()}</td>
                                        <td>{format_date(request.date)}</td>
                                        <td>{request.details.clone()}</td>
                                        <td><StatusBadge status=request.status /></td>
                                        <td><button class="outline-btn">"Détails"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view(),
                RequestKind::Material => view! {
                    <div class="card">
                        <h3>"Demandes de Matériels"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Matériel"</th>
                                    <th>"Quantité"</th>
                                    <th>"Date de demande"</th>
                                    <th>"Date requise"</th>
                                    <th>"Statut"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {material_requests.iter().map(|request| view! {
                                    <tr>
                                        <td>{request.name.clone()}</td>
                                        <td>{request.quantity.clone()}</td>
                                        <td>{format_date(request.request_date)}</td>
                                        <td>{format_date(request.required_date)}</td>
                                        <td><StatusBadge status=request.status /></td>
                                        <td><button class="outline-btn">"Détails"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view(),
            }}

            <CreateDialog
                open=dialog_open
                title=Signal::derive(move || request_kind.get().dialog_title())
                body=Signal::derive(move || request_kind.get().dialog_body())
                submit_label="Soumettre la demande"
                on_submit=Callback::new(move |_: ()| toasts.success(request_kind.get_untracked().success_message()))
            />
        </div>
    }
}
