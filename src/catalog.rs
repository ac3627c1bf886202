//! 静的データカタログ
//!
//! `data/seed.json` を起動時に一度だけ読み込み、金額・日付を型付きの値に変換する。
//! 以降は読み取り専用。

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::*;
use crate::utils::dates::parse_date;
use crate::utils::money::{parse_amount_with_policy, Amount, AmountLocale, ParsePolicy};
use crate::utils::settings::Settings;

const SEED_JSON: &str = include_str!("../data/seed.json");

// ============================================
// シードデータ（表示用文字列のまま）
// ============================================

#[derive(Deserialize)]
struct SeedData {
    #[serde(default)]
    projects: Vec<RawProject>,
    #[serde(default)]
    invoices: Vec<RawInvoice>,
    #[serde(default)]
    work_hours: Vec<RawWorkHour>,
    #[serde(default)]
    employee_requests: Vec<RawEmployeeRequest>,
    #[serde(default)]
    material_requests: Vec<RawMaterialRequest>,
    #[serde(default)]
    measurements: Vec<RawMeasurement>,
    #[serde(default)]
    finance_entries: Vec<RawFinanceEntry>,
}

#[derive(Deserialize)]
struct RawProject {
    id: String,
    name: String,
    client: String,
    amount: String,
    status: ProjectStatus,
    start_date: String,
    end_date: String,
    advancement: u8,
    monthly_billing: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    manager: String,
}

#[derive(Deserialize)]
struct RawInvoice {
    id: String,
    project: String,
    date: String,
    amount: String,
    status: InvoiceStatus,
}

#[derive(Deserialize)]
struct RawWorkHour {
    id: String,
    date: String,
    hours: u32,
    employee: String,
    task: String,
}

#[derive(Deserialize)]
struct RawEmployeeRequest {
    id: String,
    #[serde(rename = "type")]
    request_type: String,
    employee: String,
    status: EmployeeRequestStatus,
    date: String,
    #[serde(default)]
    details: String,
}

#[derive(Deserialize)]
struct RawMaterialRequest {
    id: String,
    name: String,
    quantity: String,
    status: MaterialRequestStatus,
    request_date: String,
    required_date: String,
}

#[derive(Deserialize)]
struct RawMeasurement {
    id: String,
    category: String,
    quantity: String,
    unit: String,
    unit_price: String,
    total_price: String,
}

#[derive(Deserialize)]
struct RawFinanceEntry {
    id: String,
    date: String,
    category: String,
    amount: String,
    #[serde(rename = "type")]
    kind: FinanceKind,
}

// ============================================
// 変換
// ============================================

struct Converter {
    locale: AmountLocale,
    policy: ParsePolicy,
}

impl Converter {
    fn amount(&self, record: &str, field: &'static str, raw: &str) -> Result<Amount, CatalogError> {
        parse_amount_with_policy(raw, self.locale, self.policy).map_err(|source| CatalogError::Amount {
            record: record.to_string(),
            field,
            source,
        })
    }

    fn date(&self, record: &str, raw: &str) -> Result<NaiveDate, CatalogError> {
        parse_date(raw).map_err(|source| CatalogError::Date {
            record: record.to_string(),
            value: raw.to_string(),
            source,
        })
    }
}

/// 読み込み済みの全データ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub invoices: Vec<Invoice>,
    pub work_hours: Vec<WorkHourEntry>,
    pub employee_requests: Vec<EmployeeRequest>,
    pub material_requests: Vec<MaterialRequest>,
    pub measurements: Vec<Measurement>,
    pub finance_entries: Vec<FinanceEntry>,
}

impl Catalog {
    /// 組み込みのシードデータを読み込む
    pub fn load(settings: &Settings) -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON, settings)
    }

    pub fn from_json(json: &str, settings: &Settings) -> Result<Self, CatalogError> {
        let seed: SeedData = serde_json::from_str(json)?;
        let conv = Converter {
            locale: settings.locale,
            policy: settings.parse_policy,
        };

        let projects = seed
            .projects
            .into_iter()
            .map(|p| {
                let record = format!("projet {}", p.id);
                Ok(Project {
                    amount: conv.amount(&record, "amount", &p.amount)?,
                    monthly_billing: conv.amount(&record, "monthly_billing", &p.monthly_billing)?,
                    start_date: conv.date(&record, &p.start_date)?,
                    end_date: conv.date(&record, &p.end_date)?,
                    advancement: p.advancement.min(100),
                    id: ProjectId(p.id),
                    name: p.name,
                    client: p.client,
                    status: p.status,
                    description: p.description,
                    location: p.location,
                    manager: p.manager,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let invoices = seed
            .invoices
            .into_iter()
            .map(|i| {
                let record = format!("facture {}", i.id);
                Ok(Invoice {
                    date: conv.date(&record, &i.date)?,
                    amount: conv.amount(&record, "amount", &i.amount)?,
                    id: i.id,
                    project: i.project,
                    status: i.status,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let work_hours = seed
            .work_hours
            .into_iter()
            .map(|w| {
                let record = format!("heures {}", w.id);
                Ok(WorkHourEntry {
                    date: conv.date(&record, &w.date)?,
                    id: w.id,
                    hours: w.hours,
                    employee: w.employee,
                    task: w.task,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let employee_requests = seed
            .employee_requests
            .into_iter()
            .map(|r| {
                let record = format!("demande d'employé {}", r.id);
                Ok(EmployeeRequest {
                    date: conv.date(&record, &r.date)?,
                    id: r.id,
                    request_type: r.request_type,
                    employee: r.employee,
                    status: r.status,
                    details: r.details,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let material_requests = seed
            .material_requests
            .into_iter()
            .map(|r| {
                let record = format!("demande de matériel {}", r.id);
                Ok(MaterialRequest {
                    request_date: conv.date(&record, &r.request_date)?,
                    required_date: conv.date(&record, &r.required_date)?,
                    id: r.id,
                    name: r.name,
                    quantity: r.quantity,
                    status: r.status,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let measurements = seed
            .measurements
            .into_iter()
            .map(|m| {
                let record = format!("mesure {}", m.id);
                Ok(Measurement {
                    unit_price: conv.amount(&record, "unit_price", &m.unit_price)?,
                    total_price: conv.amount(&record, "total_price", &m.total_price)?,
                    id: m.id,
                    category: m.category,
                    quantity: m.quantity,
                    unit: m.unit,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        let finance_entries = seed
            .finance_entries
            .into_iter()
            .map(|f| {
                let record = format!("transaction {}", f.id);
                Ok(FinanceEntry {
                    date: conv.date(&record, &f.date)?,
                    amount: conv.amount(&record, "amount", &f.amount)?,
                    id: f.id,
                    category: f.category,
                    kind: f.kind,
                })
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Catalog {
            projects,
            invoices,
            work_hours,
            employee_requests,
            material_requests,
            measurements,
            finance_entries,
        })
    }

    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::utils::metrics::{measurement_total, total_hours, FinanceSummary};
    use rust_decimal::Decimal;

    fn whole(v: i64) -> Amount {
        Amount::from(Decimal::from(v))
    }

    #[test]
    fn test_seed_loads() {
        let catalog = Catalog::load(&Settings::default()).unwrap();
        assert_eq!(catalog.projects.len(), 3);
        assert_eq!(catalog.invoices.len(), 4);
        assert_eq!(catalog.work_hours.len(), 4);
        assert_eq!(catalog.employee_requests.len(), 3);
        assert_eq!(catalog.material_requests.len(), 3);
        assert_eq!(catalog.measurements.len(), 4);
        assert_eq!(catalog.finance_entries.len(), 4);

        let project = catalog.project(&ProjectId("1".to_string())).unwrap();
        assert_eq!(project.amount, whole(1_250_000));
        assert_eq!(project.monthly_billing, whole(85_000));
        assert_eq!(project.status, ProjectStatus::InProgress);
        assert_eq!(project.end_date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert!(catalog.project(&ProjectId("99".to_string())).is_none());
    }

    #[test]
    fn test_seed_metrics() {
        let catalog = Catalog::load(&Settings::default()).unwrap();
        assert_eq!(measurement_total(&catalog.measurements), whole(92_375));
        assert_eq!(total_hours(&catalog.work_hours), 165);

        let summary = FinanceSummary::from_entries(&catalog.finance_entries);
        assert_eq!(summary.income, whole(170_000));
        assert_eq!(summary.expenses, whole(57_500));
        assert_eq!(summary.balance, whole(112_500));
    }

    #[test]
    fn test_seed_comma_decimal_locale() {
        let settings = Settings {
            locale: AmountLocale::CommaDecimal,
            ..Settings::default()
        };
        let catalog = Catalog::load(&settings).unwrap();
        assert_eq!(measurement_total(&catalog.measurements).value(), Decimal::new(92_375, 3));

        let summary = FinanceSummary::from_entries(&catalog.finance_entries);
        assert_eq!(summary.income.value(), Decimal::new(170_000, 3));
        assert_eq!(summary.balance.value(), Decimal::new(112_500, 3));
    }

    #[test]
    fn test_comma_decimal_rejects_multi_group_amounts() {
        // "1,250,000 €" は小数点が2つになり解析できない
        let settings = Settings {
            locale: AmountLocale::CommaDecimal,
            ..Settings::default()
        };
        let catalog = Catalog::load(&settings).unwrap();
        let project = catalog.project(&ProjectId("1".to_string())).unwrap();
        assert_eq!(project.amount, Amount::ZERO);
        assert_eq!(project.monthly_billing.value(), Decimal::new(85_000, 3));

        let strict = Settings {
            parse_policy: ParsePolicy::FailFast,
            ..settings
        };
        match Catalog::load(&strict) {
            Err(CatalogError::Amount { record, field, source }) => {
                assert_eq!(record, "projet 1");
                assert_eq!(field, "amount");
                assert!(matches!(source, ParseError::Malformed { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_near_max_measurements_do_not_panic() {
        let json = r#"{
            "measurements": [
                { "id": "1", "category": "A", "quantity": "1", "unit": "u", "unit_price": "1 €", "total_price": "70,000,000,000,000,000,000,000,000,000 €" },
                { "id": "2", "category": "B", "quantity": "1", "unit": "u", "unit_price": "1 €", "total_price": "70,000,000,000,000,000,000,000,000,000 €" }
            ]
        }"#;
        let catalog = Catalog::from_json(json, &Settings::default()).unwrap();
        assert_eq!(measurement_total(&catalog.measurements).value(), Decimal::MAX);
    }

    const BROKEN_MEASUREMENT: &str = r#"{
        "measurements": [
            { "id": "1", "category": "Murs", "quantity": "500 m²", "unit": "m²", "unit_price": "85 €", "total_price": "42,500 €" },
            { "id": "2", "category": "Toiture", "quantity": "300 m²", "unit": "m²", "unit_price": "95 €", "total_price": "à définir" }
        ]
    }"#;

    #[test]
    fn test_skip_and_warn_contributes_zero() {
        let catalog = Catalog::from_json(BROKEN_MEASUREMENT, &Settings::default()).unwrap();
        assert_eq!(catalog.measurements.len(), 2);
        assert_eq!(catalog.measurements[1].total_price, Amount::ZERO);
        assert_eq!(measurement_total(&catalog.measurements), whole(42_500));
    }

    #[test]
    fn test_fail_fast_reports_record() {
        let settings = Settings {
            parse_policy: ParsePolicy::FailFast,
            ..Settings::default()
        };
        match Catalog::from_json(BROKEN_MEASUREMENT, &settings) {
            Err(CatalogError::Amount { record, field, source }) => {
                assert_eq!(record, "mesure 2");
                assert_eq!(field, "total_price");
                assert!(matches!(source, ParseError::Empty { .. }));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_date() {
        let json = r#"{
            "work_hours": [
                { "id": "1", "date": "10/04/2025", "hours": 45, "employee": "Équipe A", "task": "Fondations" }
            ]
        }"#;
        let err = Catalog::from_json(json, &Settings::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Date { .. }));
        assert!(err.to_string().contains("heures 1"));
    }

    #[test]
    fn test_invalid_json() {
        let err = Catalog::from_json("{ not json", &Settings::default()).unwrap_err();
        assert!(matches!(err, CatalogError::Seed(_)));
    }
}
