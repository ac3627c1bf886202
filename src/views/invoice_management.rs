//! 請求書・作業時間ビュー

use leptos::*;
use crate::components::{CreateDialog, ProjectScope, StatusBadge, ToastContext};
use crate::utils::dates::format_date;
use crate::utils::metrics::total_hours;
use crate::utils::money::format_amount;
use crate::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum InvoiceTab {
    Invoices,
    Hours,
}

impl InvoiceTab {
    fn create_button(self) -> &'static str {
        match self {
            InvoiceTab::Invoices => "Nouvelle Facture",
            InvoiceTab::Hours => "Ajouter des Heures",
        }
    }

    fn dialog_title(self) -> &'static str {
        match self {
            InvoiceTab::Invoices => "Créer une nouvelle facture",
            InvoiceTab::Hours => "Enregistrer des heures de travail",
        }
    }

    fn dialog_body(self) -> &'static str {
        match self {
            InvoiceTab::Invoices => "Formulaire pour créer une facture",
            InvoiceTab::Hours => "Formulaire pour ajouter des heures de travail",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            InvoiceTab::Invoices => "Créer la facture",
            InvoiceTab::Hours => "Enregistrer les heures",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            InvoiceTab::Invoices => "Facture créée avec succès",
            InvoiceTab::Hours => "Heures de travail ajoutées",
        }
    }
}

#[component]
pub fn InvoiceManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let toasts = use_context::<ToastContext>().expect("ToastContext not found");
    let locale = ctx.settings.locale;

    let (active_tab, set_active_tab) = create_signal(InvoiceTab::Invoices);
    let (show_delay_warning, set_show_delay_warning) = create_signal(true);
    let dialog_open = create_rw_signal(false);

    let invoices = ctx.catalog.with_value(|c| c.invoices.clone());
    let work_hours = ctx.catalog.with_value(|c| c.work_hours.clone());
    let hours_total = total_hours(&work_hours);

    let tab_class = move |tab: InvoiceTab| if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" };

    view! {
        <div class="invoice-management">
            <ProjectScope />

            <div class="toolbar">
                <div class="sub-tabs">
                    <button class=move || tab_class(InvoiceTab::Invoices)
                        on:click=move |_| set_active_tab.set(InvoiceTab::Invoices)>
                        "Factures"
                    </button>
                    <button class=move || tab_class(InvoiceTab::Hours)
                        on:click=move |_| set_active_tab.set(InvoiceTab::Hours)>
                        "Durée de Travail"
                    </button>
                </div>
                <button class="primary-btn" on:click=move |_| dialog_open.set(true)>
                    {move || active_tab.get().create_button()}
                </button>
            </div>

            {move || show_delay_warning.get().then(|| view! {
                <div class="card alert-card">
                    <p class="alert-text">
                        "ATTENTION: Retard de livraison détecté sur ce projet! "
                        "Veuillez ajuster la planification ou contacter le client."
                    </p>
                    <button class="outline-btn" on:click=move |_| set_show_delay_warning.set(false)>
                        "Fermer"
                    </button>
                </div>
            })}

            {move || match active_tab.get() {
                InvoiceTab::Invoices => view! {
                    <div class="card">
                        <h3>"Factures"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"N° Facture"</th>
                                    <th>"Projet"</th>
                                    <th>"Date"</th>
                                    <th>"Montant"</th>
                                    <th>"Statut"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {invoices.iter().map(|invoice| view! {
                                    <tr>
                                        <td>{invoice.number()}</td>
                                        <td>{invoice.project.clone()}</td>
                                        <td>{format_date(invoice.date)}</td>
                                        <td>{format_amount(invoice.amount, locale)}</td>
                                        <td><StatusBadge status=invoice.status /></td>
                                        <td><button class="outline-btn">"Détails"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view(),
                InvoiceTab::Hours => view! {
                    <div class="card">
                        <h3>"Heures de Travail"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Employé/Équipe"</th>
                                    <th>"Tâche"</th>
                                    <th>"Heures"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {work_hours.iter().map(|entry| view! {
                                    <tr>
                                        <td>{format_date(entry.date)}</td>
                                        <td>{entry.employee.clone()}</td>
                                        <td>{entry.task.clone()}</td>
                                        <td>{entry.hours}"h"</td>
                                        <td><button class="outline-btn">"Modifier"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                            <tfoot>
                                <tr>
                                    <td colspan="3">"Total"</td>
                                    <td>{hours_total}"h"</td>
                                    <td></td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                }.into_view(),
            }}

            <CreateDialog
                open=dialog_open
                title=Signal::derive(move || active_tab.get().dialog_title())
                body=Signal::derive(move || active_tab.get().dialog_body())
                submit_label=Signal::derive(move || active_tab.get().submit_label())
                on_submit=Callback::new(move |_: ()| toasts.success(active_tab.get_untracked().success_message()))
            />
        </div>
    }
}
