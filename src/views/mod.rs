//! ビューモジュール

pub mod index;
pub mod invoice_management;
pub mod not_found;
pub mod project_details;
pub mod project_list;
pub mod request_management;
pub mod technical_finance;

pub use index::IndexPage;
pub use invoice_management::InvoiceManagement;
pub use not_found::NotFound;
pub use project_details::ProjectDetails;
pub use project_list::ProjectList;
pub use request_management::RequestManagement;
pub use technical_finance::TechnicalFinance;
