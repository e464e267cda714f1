//! Brand header with the theme toggle

use leptos::*;
use vbc_core::Theme;

use crate::style;

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let toggle_class = move || {
        let colors = if theme.get().is_dark() {
            "border-slate-600 bg-slate-900/80 hover:bg-slate-800 text-slate-100"
        } else {
            "border-slate-300 bg-white hover:bg-slate-100 text-slate-800"
        };
        format!(
            "flex items-center gap-2 text-xs px-3 py-1.5 rounded-full border transition-colors {}",
            colors
        )
    };

    view! {
        <div class="flex items-center justify-between gap-4 mb-6">
            <div class="flex items-center gap-3">
                <div class="w-11 h-11 rounded-2xl bg-gradient-to-br from-red-500 via-red-600 to-red-700 flex items-center justify-center text-white font-bold text-2xl shadow-lg">
                    "B"
                </div>
                <div>
                    <p class=move || format!("text-sm font-semibold tracking-tight {}", style::strong_text(theme.get()))>
                        "VerificaBC"
                    </p>
                    <p class=move || format!("text-[11px] {}", style::muted_text(theme.get()))>
                        "Módulo antifraude · Golpe \"valores a receber\""
                    </p>
                </div>
            </div>

            <button
                type="button"
                class=toggle_class
                on:click=move |_| theme.update(|t| *t = t.toggle())
            >
                <span class="text-[11px]">
                    "Tema: " <strong>{move || theme.get().label()}</strong>
                </span>
                <span>{move || if theme.get().is_dark() { "🌙" } else { "☀️" }}</span>
            </button>
        </div>
    }
}
