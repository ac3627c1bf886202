//! 技術明細（Métreur）・財務ビュー

use leptos::*;
use crate::components::{CreateDialog, ProjectScope, StatusBadge, ToastContext};
use crate::utils::dates::format_date;
use crate::utils::metrics::{measurement_total, FinanceSummary};
use crate::utils::money::format_amount;
use crate::AppContext;

#[derive(Clone, Copy, PartialEq)]
enum BulletinTab {
    Technical,
    Finance,
}

impl BulletinTab {
    fn tab_label(self) -> &'static str {
        match self {
            BulletinTab::Technical => "Métreur (Bulletin Technique)",
            BulletinTab::Finance => "Finance",
        }
    }

    fn create_button(self) -> &'static str {
        match self {
            BulletinTab::Technical => "Ajouter une mesure",
            BulletinTab::Finance => "Ajouter une transaction",
        }
    }

    fn dialog_title(self) -> &'static str {
        match self {
            BulletinTab::Technical => "Ajouter une nouvelle mesure",
            BulletinTab::Finance => "Enregistrer une transaction financière",
        }
    }

    fn dialog_body(self) -> &'static str {
        match self {
            BulletinTab::Technical => "Formulaire pour ajouter une mesure technique",
            BulletinTab::Finance => "Formulaire pour enregistrer une transaction",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            BulletinTab::Technical => "Mesure technique ajoutée",
            BulletinTab::Finance => "Transaction financière enregistrée",
        }
    }
}

#[component]
pub fn TechnicalFinance() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let toasts = use_context::<ToastContext>().expect("ToastContext not found");
    let locale = ctx.settings.locale;

    let (active_tab, set_active_tab) = create_signal(BulletinTab::Technical);
    let dialog_open = create_rw_signal(false);

    let measurements = ctx.catalog.with_value(|c| c.measurements.clone());
    let finance_entries = ctx.catalog.with_value(|c| c.finance_entries.clone());

    // 集計はデータ読み込み時に一度だけ
    let measurement_sum = measurement_total(&measurements);
    let summary = FinanceSummary::from_entries(&finance_entries);
    let balance_class = if summary.balance.is_negative() { "negative" } else { "positive" };

    view! {
        <div class="technical-finance">
            <ProjectScope />

            <div class="toolbar">
                <div class="sub-tabs">
                    {[BulletinTab::Technical, BulletinTab::Finance].into_iter().map(|tab| view! {
                        <button
                            class=move || if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| set_active_tab.set(tab)
                        >
                            {tab.tab_label()}
                        </button>
                    }).collect_view()}
                </div>
                <button class="primary-btn" on:click=move |_| dialog_open.set(true)>
                    {move || active_tab.get().create_button()}
                </button>
            </div>

            {move || match active_tab.get() {
                BulletinTab::Technical => view! {
                    <div class="card">
                        <h3>"Mesures Techniques"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Catégorie"</th>
                                    <th>"Quantité"</th>
                                    <th>"Unité"</th>
                                    <th>"Prix unitaire"</th>
                                    <th>"Prix total"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {measurements.iter().map(|item| view! {
                                    <tr>
                                        <td>{item.category.clone()}</td>
                                        <td>{item.quantity.clone()}</td>
                                        <td>{item.unit.clone()}</td>
                                        <td>{format_amount(item.unit_price, locale)}</td>
                                        <td>{format_amount(item.total_price, locale)}</td>
                                        <td><button class="outline-btn">"Modifier"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <div class="card total-card">
                        <p class="total-label">"Montant Total des Mesures"</p>
                        <p class="total-value">{format_amount(measurement_sum, locale)}</p>
                    </div>
                }.into_view(),
                BulletinTab::Finance => view! {
                    <div class="card">
                        <h3>"Transactions Financières"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Catégorie"</th>
                                    <th>"Montant"</th>
                                    <th>"Type"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {finance_entries.iter().map(|entry| view! {
                                    <tr>
                                        <td>{format_date(entry.date)}</td>
                                        <td>{entry.category.clone()}</td>
                                        <td>{format_amount(entry.amount, locale)}</td>
                                        <td><StatusBadge status=entry.kind /></td>
                                        <td><button class="outline-btn">"Détails"</button></td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>

                    <div class="summary-grid">
                        <div class="card summary-card income">
                            <p class="summary-label">"Revenus Totaux"</p>
                            <p class="summary-value">{format_amount(summary.income, locale)}</p>
                        </div>
                        <div class="card summary-card expenses">
                            <p class="summary-label">"Dépenses Totales"</p>
                            <p class="summary-value">{format_amount(summary.expenses, locale)}</p>
                        </div>
                        <div class=format!("card summary-card balance {}", balance_class)>
                            <p class="summary-label">"Balance"</p>
                            <p class="summary-value">{format_amount(summary.balance, locale)}</p>
                        </div>
                    </div>
                }.into_view(),
            }}

            <CreateDialog
                open=dialog_open
                title=Signal::derive(move || active_tab.get().dialog_title())
                body=Signal::derive(move || active_tab.get().dialog_body())
                submit_label="Enregistrer"
                on_submit=Callback::new(move |_: ()| toasts.success(active_tab.get_untracked().success_message()))
            />
        </div>
    }
}
