//! プロジェクト詳細ビュー

use leptos::*;
use crate::components::StatusBadge;
use crate::models::ProjectId;
use crate::utils::dates::format_date;
use crate::utils::metrics::Countdown;
use crate::utils::money::format_amount;
use crate::AppContext;

#[component]
pub fn ProjectDetails(project_id: ProjectId, on_back: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let locale = ctx.settings.locale;

    let Some(project) = ctx.catalog.with_value(|c| c.project(&project_id).cloned()) else {
        return view! {
            <div class="card placeholder">
                <p class="placeholder-text">"Projet introuvable"</p>
                <button class="primary-btn" on:click=move |_| on_back.call(())>
                    "Retourner aux projets"
                </button>
            </div>
        }
        .into_view();
    };

    let countdown = Countdown::new(project.end_date, ctx.today, ctx.settings.urgent_threshold_days);

    view! {
        <div class="project-details">
            <div class="details-header">
                <button class="back-btn" on:click=move |_| on_back.call(())>"←"</button>
                <h2>{project.name.clone()}</h2>
                <StatusBadge status=project.status />
            </div>

            <div class="details-grid">
                // 基本情報
                <div class="card">
                    <h3>"Informations Générales"</h3>
                    <div class="field-grid">
                        <div class="field">
                            <p class="field-label">"Maître d'Ouvrage"</p>
                            <p class="field-value">{project.client.clone()}</p>
                        </div>
                        <div class="field">
                            <p class="field-label">"Chef de Projet"</p>
                            <p class="field-value">{project.manager.clone()}</p>
                        </div>
                        <div class="field">
                            <p class="field-label">"Montant Total"</p>
                            <p class="field-value">{format_amount(project.amount, locale)}</p>
                        </div>
                        <div class="field">
                            <p class="field-label">"Facturation Mensuelle"</p>
                            <p class="field-value">{format_amount(project.monthly_billing, locale)}</p>
                        </div>
                    </div>
                    <div class="field">
                        <p class="field-label">"Localisation"</p>
                        <p class="field-value">{project.location.clone()}</p>
                    </div>
                    <div class="field">
                        <p class="field-label">"Description"</p>
                        <p class="field-text">{project.description.clone()}</p>
                    </div>
                </div>

                // 進捗と期限
                <div class="card">
                    <h3>"Avancement & Délais"</h3>
                    <div class="progress-section">
                        <div class="progress-header">
                            <span>"Avancement du projet"</span>
                            <span>{project.advancement}"%"</span>
                        </div>
                        <div class="progress-bar">
                            <div class="progress-fill" style=format!("width: {}%", project.advancement)></div>
                        </div>
                    </div>

                    <div class="field-grid">
                        <div class="field">
                            <p class="field-label">"Date de début"</p>
                            <p class="field-value">{format_date(project.start_date)}</p>
                        </div>
                        <div class="field">
                            <p class="field-label">"Date de fin prévue"</p>
                            <p class="field-value">{format_date(project.end_date)}</p>
                        </div>
                    </div>

                    <div class=format!("countdown-card {}", if countdown.urgent { "urgent" } else { "" })>
                        <p class="countdown-label">"Jours restants avant la date limite"</p>
                        <p class="countdown-value">{countdown.days_remaining}</p>
                        {countdown.urgent.then(|| view! {
                            <p class="countdown-warning">"Attention: Date limite approchant!"</p>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
    .into_view()
}
