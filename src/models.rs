//! データ構造体モジュール

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::money::Amount;

// ============================================
// ステータス表示
// ============================================

/// バッジの見た目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

impl BadgeVariant {
    pub fn css_class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Secondary => "badge-secondary",
            BadgeVariant::Destructive => "badge-destructive",
            BadgeVariant::Outline => "badge-outline",
            BadgeVariant::Success => "badge-success",
            BadgeVariant::Warning => "badge-warning",
        }
    }
}

/// ステータス列挙型 → ラベル/バッジの対応
pub trait StatusLabel: Copy {
    fn label(self) -> &'static str;
    fn badge(self) -> BadgeVariant;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    InProgress,
    Completed,
    Delayed,
}

impl StatusLabel for ProjectStatus {
    fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "En cours",
            ProjectStatus::Completed => "Terminé",
            ProjectStatus::Delayed => "En retard",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            ProjectStatus::InProgress => BadgeVariant::Default,
            ProjectStatus::Completed => BadgeVariant::Secondary,
            ProjectStatus::Delayed => BadgeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvoiceStatus {
    Paid,
    Pending,
}

impl StatusLabel for InvoiceStatus {
    fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Payée",
            InvoiceStatus::Pending => "En attente",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            InvoiceStatus::Paid => BadgeVariant::Success,
            InvoiceStatus::Pending => BadgeVariant::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmployeeRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl StatusLabel for EmployeeRequestStatus {
    fn label(self) -> &'static str {
        match self {
            EmployeeRequestStatus::Pending => "En attente",
            EmployeeRequestStatus::Approved => "Approuvée",
            EmployeeRequestStatus::Rejected => "Refusée",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            EmployeeRequestStatus::Pending => BadgeVariant::Outline,
            EmployeeRequestStatus::Approved => BadgeVariant::Secondary,
            EmployeeRequestStatus::Rejected => BadgeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialRequestStatus {
    Pending,
    Approved,
    Delivered,
}

impl StatusLabel for MaterialRequestStatus {
    fn label(self) -> &'static str {
        match self {
            MaterialRequestStatus::Pending => "En attente",
            MaterialRequestStatus::Approved => "Approuvée",
            MaterialRequestStatus::Delivered => "Livrée",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            MaterialRequestStatus::Pending => BadgeVariant::Outline,
            MaterialRequestStatus::Approved => BadgeVariant::Secondary,
            MaterialRequestStatus::Delivered => BadgeVariant::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinanceKind {
    Income,
    Expense,
}

impl StatusLabel for FinanceKind {
    fn label(self) -> &'static str {
        match self {
            FinanceKind::Income => "Revenu",
            FinanceKind::Expense => "Dépense",
        }
    }

    fn badge(self) -> BadgeVariant {
        match self {
            FinanceKind::Income => BadgeVariant::Success,
            FinanceKind::Expense => BadgeVariant::Destructive,
        }
    }
}

// ============================================
// 表示レコード
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub client: String,
    pub amount: Amount,
    pub status: ProjectStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// 進捗率（0〜100）
    pub advancement: u8,
    pub monthly_billing: Amount,
    pub description: String,
    pub location: String,
    pub manager: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: String,
    pub project: String,
    pub date: NaiveDate,
    pub amount: Amount,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// 請求書番号（FACT-0001）
    pub fn number(&self) -> String {
        format!("FACT-{:0>4}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkHourEntry {
    pub id: String,
    pub date: NaiveDate,
    pub hours: u32,
    pub employee: String,
    pub task: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRequest {
    pub id: String,
    pub request_type: String,
    pub employee: String,
    pub status: EmployeeRequestStatus,
    pub date: NaiveDate,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRequest {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub status: MaterialRequestStatus,
    pub request_date: NaiveDate,
    pub required_date: NaiveDate,
}

/// 技術明細（Bulletin technique）の1行
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub id: String,
    pub category: String,
    pub quantity: String,
    pub unit: String,
    pub unit_price: Amount,
    pub total_price: Amount,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceEntry {
    pub id: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Amount,
    pub kind: FinanceKind,
}

// ============================================
// UI状態
// ============================================

/// トップレベルのタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Projects,
    Details,
    Invoicing,
    Requests,
    Technical,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Projects,
        Phase::Details,
        Phase::Invoicing,
        Phase::Requests,
        Phase::Technical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Projects => "Clôtures de Projets",
            Phase::Details => "Fiche de Projet",
            Phase::Invoicing => "Facture et Durée",
            Phase::Requests => "Demandes",
            Phase::Technical => "Métreur et Finance",
        }
    }
}

/// 詳細タブに表示する内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailsView {
    Placeholder,
    Project(ProjectId),
}

/// 画面遷移状態（アクティブなタブと選択中のプロジェクト）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    active_phase: Phase,
    selected_project: Option<ProjectId>,
}

impl Navigation {
    pub fn active_phase(&self) -> Phase {
        self.active_phase
    }

    pub fn selected_project(&self) -> Option<&ProjectId> {
        self.selected_project.as_ref()
    }

    /// プロジェクト選択 → 詳細タブへ
    pub fn select_project(&mut self, id: ProjectId) {
        self.selected_project = Some(id);
        self.active_phase = Phase::Details;
    }

    /// 選択解除 → 一覧タブへ
    pub fn back_to_projects(&mut self) {
        self.selected_project = None;
        self.active_phase = Phase::Projects;
    }

    /// タブ切り替え（選択は保持）
    pub fn show_phase(&mut self, phase: Phase) {
        self.active_phase = phase;
    }

    pub fn details(&self) -> DetailsView {
        match &self.selected_project {
            Some(id) => DetailsView::Project(id.clone()),
            None => DetailsView::Placeholder,
        }
    }
}

// ============================================
// ルーティング
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" | "/index.html" => Route::Index,
            _ => Route::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_labels<S: StatusLabel>(all: &[S]) {
        for status in all {
            assert!(!status.label().trim().is_empty());
            assert!(!status.badge().css_class().is_empty());
        }
    }

    #[test]
    fn test_status_labels_are_total() {
        assert_labels(&[ProjectStatus::InProgress, ProjectStatus::Completed, ProjectStatus::Delayed]);
        assert_labels(&[InvoiceStatus::Paid, InvoiceStatus::Pending]);
        assert_labels(&[
            EmployeeRequestStatus::Pending,
            EmployeeRequestStatus::Approved,
            EmployeeRequestStatus::Rejected,
        ]);
        assert_labels(&[
            MaterialRequestStatus::Pending,
            MaterialRequestStatus::Approved,
            MaterialRequestStatus::Delivered,
        ]);
        assert_labels(&[FinanceKind::Income, FinanceKind::Expense]);
        for phase in Phase::ALL {
            assert!(!phase.label().is_empty());
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Delayed.label(), "En retard");
        assert_eq!(ProjectStatus::Delayed.badge(), BadgeVariant::Destructive);
        assert_eq!(MaterialRequestStatus::Delivered.label(), "Livrée");
        assert_eq!(EmployeeRequestStatus::Rejected.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_status_serde_names() {
        let status: ProjectStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        let kind: FinanceKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(kind, FinanceKind::Expense);
        assert!(serde_json::from_str::<InvoiceStatus>("\"cancelled\"").is_err());
    }

    #[test]
    fn test_select_project() {
        let mut nav = Navigation::default();
        assert_eq!(nav.active_phase(), Phase::Projects);
        assert_eq!(nav.details(), DetailsView::Placeholder);

        nav.select_project(ProjectId("2".to_string()));
        assert_eq!(nav.active_phase(), Phase::Details);
        assert_eq!(nav.selected_project(), Some(&ProjectId("2".to_string())));
        assert_eq!(nav.details(), DetailsView::Project(ProjectId("2".to_string())));
    }

    #[test]
    fn test_back_to_projects() {
        let mut nav = Navigation::default();
        nav.select_project(ProjectId("1".to_string()));
        nav.back_to_projects();
        assert_eq!(nav.active_phase(), Phase::Projects);
        assert_eq!(nav.selected_project(), None);

        nav.show_phase(Phase::Details);
        assert_eq!(nav.details(), DetailsView::Placeholder);
    }

    #[test]
    fn test_show_phase_keeps_selection() {
        let mut nav = Navigation::default();
        nav.select_project(ProjectId("3".to_string()));
        nav.show_phase(Phase::Invoicing);
        assert_eq!(nav.active_phase(), Phase::Invoicing);
        assert!(nav.selected_project().is_some());
    }

    #[test]
    fn test_route() {
        assert_eq!(Route::from_path("/"), Route::Index);
        assert_eq!(Route::from_path(""), Route::Index);
        assert_eq!(Route::from_path("/index.html"), Route::Index);
        assert_eq!(Route::from_path("/factures"), Route::NotFound);
        assert_eq!(Route::from_path("/index.html/x"), Route::NotFound);
    }

    #[test]
    fn test_invoice_number() {
        let invoice = Invoice {
            id: "7".to_string(),
            project: "P".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            amount: Amount::ZERO,
            status: InvoiceStatus::Pending,
        };
        assert_eq!(invoice.number(), "FACT-0007");
    }
}
