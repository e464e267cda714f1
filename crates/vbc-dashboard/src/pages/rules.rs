//! Description of the antifraud rules applied by the backend

use leptos::*;
use vbc_core::content::{RULES_FOOTNOTE, RULES_TITLE, RULE_CARDS};
use vbc_core::Theme;

use crate::style;

#[component]
pub fn RulesPanel() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>{RULES_TITLE}</h2>

            <div class="grid md:grid-cols-2 gap-4 text-[11px]">
                {RULE_CARDS.into_iter().map(|rule| view! {
                    <div class="rounded-xl bg-slate-950/60 border border-slate-700 p-3">
                        <p class="text-[11px] font-semibold text-slate-100 mb-1">{rule.title}</p>
                        <p class="text-slate-300">{rule.description}</p>
                    </div>
                }).collect_view()}
            </div>

            <p class=move || format!("text-[10px] mt-4 {}", style::muted_text(theme.get()))>
                {RULES_FOOTNOTE}
            </p>
        </div>
    }
}
