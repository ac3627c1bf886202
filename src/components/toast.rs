//! トースト通知コンポーネント

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::utils::log_trace::log_info;

/// 自動で消えるまでの時間
const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// トースト一覧（コンテキストで共有）
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        ToastContext {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    /// 成功通知を表示
    pub fn success(&self, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log_info("toast", message);
        self.toasts.update(|ts| {
            ts.push(Toast {
                id,
                message: message.to_string(),
            })
        });

        let this = *self;
        spawn_local(async move {
            gloo::timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            this.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|ts| ts.retain(|t| t.id != id));
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_context::<ToastContext>().expect("ToastContext not found");

    view! {
        <div class="toaster">
            <For
                each=move || ctx.toasts.get()
                key=|t| t.id
                children=move |t: Toast| {
                    let id = t.id;
                    view! {
                        <div class="toast toast-success">
                            <span class="toast-icon">"✓"</span>
                            <span class="toast-message">{t.message}</span>
                            <button class="toast-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
