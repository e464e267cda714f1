//! Architecture overview and decision flow

use leptos::*;
use vbc_core::content::{
    ARCHITECTURE_FLOW, ARCHITECTURE_INTRO, ARCHITECTURE_ITEMS, ARCHITECTURE_OUTRO,
    ARCHITECTURE_TITLE,
};
use vbc_core::Theme;

use crate::style;

#[component]
pub fn ArchitecturePanel() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let flow_box = move || {
        if theme.get().is_dark() {
            "rounded-xl border border-slate-700 bg-slate-950/60 px-3 py-2 text-center"
        } else {
            "rounded-xl border border-slate-200 bg-white px-3 py-2 text-center"
        }
    };

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>{ARCHITECTURE_TITLE}</h2>

            <div class="grid md:grid-cols-[1.2fr,1fr] gap-5 text-[11px]">
                <div class="space-y-3">
                    <p class=move || style::strong_text(theme.get())>{ARCHITECTURE_INTRO}</p>
                    <ul class=move || format!("list-disc list-inside space-y-1 {}", style::body_text(theme.get()))>
                        {ARCHITECTURE_ITEMS.into_iter().map(|item| view! {
                            <li>
                                <span class="font-semibold">{item.layer}</span>
                                " "
                                {item.role}
                            </li>
                        }).collect_view()}
                    </ul>
                    <p class=move || style::muted_text(theme.get())>{ARCHITECTURE_OUTRO}</p>
                </div>

                <div class="space-y-2">
                    <div class=move || format!("text-[11px] font-semibold {}", style::body_text(theme.get()))>
                        "Fluxo resumido"
                    </div>
                    {ARCHITECTURE_FLOW.into_iter().enumerate().map(|(i, step)| view! {
                        {(i > 0).then(|| view! {
                            <div class="text-center text-slate-500">"↓"</div>
                        })}
                        <div class="flex gap-2 justify-center">
                            {step.iter().map(|(name, detail)| view! {
                                <div class=flow_box>
                                    <p class="font-semibold">{*name}</p>
                                    <p class="text-[10px] text-slate-400">{*detail}</p>
                                </div>
                            }).collect_view()}
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
