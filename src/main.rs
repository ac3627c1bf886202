mod catalog;
mod components;
mod error;
mod models;
mod utils;
mod views;

use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use catalog::Catalog;
use components::{ToastContext, Toaster};
use models::{Navigation, Route};
use utils::dates::{format_seed_modified_time, today};
use utils::log_trace::{copy_logs_to_clipboard_async, log_error, log_info};
use utils::settings::{load_settings, Settings};
use views::{IndexPage, NotFound};

// ============================================
// アプリ全体で共有する状態
// ============================================

/// ルートで一度だけ生成し、コンテキストで配下に渡す
#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: StoredValue<Catalog>,
    pub settings: Settings,
    pub navigation: RwSignal<Navigation>,
    pub today: NaiveDate,
}

/// 現在のパスからルートを判定
fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Index)
}

// ============================================
// メインアプリ
// ============================================

#[component]
fn App() -> impl IntoView {
    let settings = load_settings();
    provide_context(ToastContext::new());

    let (log_copied, set_log_copied) = create_signal(false);

    let content = match current_route() {
        Route::NotFound => view! { <NotFound /> }.into_view(),
        Route::Index => match Catalog::load(&settings) {
            Ok(catalog) => {
                log_info(
                    "catalog",
                    &format!("{} projets chargés ({})", catalog.projects.len(), settings.locale),
                );
                provide_context(AppContext {
                    catalog: store_value(catalog),
                    settings,
                    navigation: create_rw_signal(Navigation::default()),
                    today: today(),
                });
                view! { <IndexPage /> }.into_view()
            }
            Err(e) => {
                log_error("catalog", &e.to_string());
                view! {
                    <p class="status error">"Erreur de chargement des données: " {e.to_string()}</p>
                }
                .into_view()
            }
        },
    };

    // ログをクリップボードへ
    let copy_logs = move |_| {
        spawn_local(async move {
            if copy_logs_to_clipboard_async().await.is_ok() {
                set_log_copied.set(true);
                // 2秒後にリセット
                gloo::timers::future::TimeoutFuture::new(2000).await;
                set_log_copied.set(false);
            }
        });
    };

    view! {
        <div class="app">
            <main class="container">{content}</main>
            <Toaster />
            <footer class="app-footer">
                <span class="data-version">{format_seed_modified_time()}</span>
                <button class="log-btn" on:click=copy_logs>
                    {move || if log_copied.get() { "Journal copié!" } else { "Copier le journal" }}
                </button>
            </footer>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
