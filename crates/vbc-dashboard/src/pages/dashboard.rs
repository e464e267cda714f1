//! Risk overview of the current session

use leptos::*;
use vbc_core::content::DASHBOARD_FOOTNOTE;
use vbc_core::{RiskStats, Session, Theme};

use crate::style;

#[component]
pub fn RiskDashboard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let stats = create_memo(move |_| session.with(|s| RiskStats::from_results(s.history())));

    let total_card_class = move || {
        if theme.get().is_dark() {
            "rounded-xl p-3 bg-slate-950/50 border border-slate-700"
        } else {
            "rounded-xl p-3 bg-white border border-slate-200"
        }
    };

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>"Visão geral do risco"</h2>

            <div class="grid gap-3 md:grid-cols-3 mb-6 text-xs">
                <div class=total_card_class>
                    <p class="text-[11px] text-slate-500">"Total de URLs"</p>
                    <p class=move || format!("text-xl font-semibold mt-1 {}", style::strong_text(theme.get()))>
                        {move || stats.get().total}
                    </p>
                    <p class="text-[11px] mt-1 text-slate-500">"Links analisados nesta sessão"</p>
                </div>
                <div class="rounded-xl bg-emerald-950/40 border border-emerald-600/70 p-3">
                    <p class="text-[11px] text-emerald-200">"Seguras"</p>
                    <p class="text-xl font-semibold mt-1 text-emerald-100">
                        {move || stats.get().safe} " "
                        <span class="text-[11px] font-normal">
                            {move || format!("({}%)", stats.get().safe_pct())}
                        </span>
                    </p>
                </div>
                <div class="rounded-xl bg-red-950/40 border border-red-600/70 p-3">
                    <p class="text-[11px] text-red-200">"Suspeitas / Golpes"</p>
                    <p class="text-xl font-semibold mt-1 text-red-100">
                        {move || stats.get().risky()} " "
                        <span class="text-[11px] font-normal">
                            {move || format!("({}%)", stats.get().risky_pct())}
                        </span>
                    </p>
                </div>
            </div>

            <div class=move || format!("text-[11px] mb-2 {}", style::body_text(theme.get()))>
                "Distribuição por classificação"
            </div>
            <div class="flex items-end gap-4 h-40 text-[11px]">
                <DistributionBar label="Seguro" color="bg-emerald-500/80" pct=Signal::derive(move || stats.get().safe_pct())/>
                <DistributionBar label="Suspeito" color="bg-amber-400/80" pct=Signal::derive(move || stats.get().suspect_pct())/>
                <DistributionBar label="Golpe" color="bg-red-500/80" pct=Signal::derive(move || stats.get().fraud_pct())/>
            </div>

            <p class=move || format!("text-[10px] mt-4 {}", style::muted_text(theme.get()))>
                {DASHBOARD_FOOTNOTE}
            </p>
        </div>
    }
}

#[component]
fn DistributionBar(label: &'static str, color: &'static str, pct: Signal<u32>) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="flex-1 flex flex-col items-center justify-end h-full">
            <div
                class=format!("w-8 rounded-t-md {}", color)
                style=move || format!("height: {}%", RiskStats::bar_height(pct.get()))
                title=move || format!("{}%", pct.get())
            ></div>
            <span class=move || format!("mt-2 {}", style::body_text(theme.get()))>{label}</span>
        </div>
    }
}
