//! UIコンポーネントモジュール

pub mod create_dialog;
pub mod project_scope;
pub mod status_badge;
pub mod toast;

pub use create_dialog::CreateDialog;
pub use project_scope::ProjectScope;
pub use status_badge::StatusBadge;
pub use toast::{ToastContext, Toaster};
