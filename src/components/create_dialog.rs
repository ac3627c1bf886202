//! 作成ダイアログコンポーネント
//!
//! 入力フォームは持たない。送信すると `on_submit` を呼んで閉じる。

use leptos::*;

#[component]
pub fn CreateDialog(
    open: RwSignal<bool>,
    #[prop(into)] title: MaybeSignal<&'static str>,
    #[prop(into)] body: MaybeSignal<&'static str>,
    #[prop(into)] submit_label: MaybeSignal<&'static str>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let close = move |_| open.set(false);
    let submit = move |_| {
        on_submit.call(());
        open.set(false);
    };

    view! {
        {move || open.get().then(|| view! {
            // オーバーレイ（外側クリックで閉じる）
            <div class="dialog-overlay" on:click=close></div>

            <div class="dialog" role="dialog">
                <div class="dialog-header">
                    <h3>{move || title.get()}</h3>
                    <button class="close-btn" on:click=close>"×"</button>
                </div>
                <div class="dialog-body">
                    <p class="dialog-text">{move || body.get()}</p>
                    <button class="submit-btn" on:click=submit>
                        {move || submit_label.get()}
                    </button>
                </div>
            </div>
        })}
    }
}
