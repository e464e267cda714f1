//! Page frame: background, header, intro, tabs and footer

use chrono::Datelike;
use leptos::*;
use vbc_core::{Tab, Theme};

use super::{Header, Tabs};
use crate::style;

const CHIPS: [&str; 3] = [
    "IA treinada no contexto de golpes bancários",
    "Motor de regras simula time de risco",
    "Persistência de histórico de URLs",
];

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let is_dark = move || theme.get().is_dark();

    let highlight = move || {
        if is_dark() {
            "font-medium text-slate-200"
        } else {
            "font-medium text-slate-900"
        }
    };

    let chip_class = move || {
        let colors = if is_dark() {
            "border-slate-600 text-slate-300 bg-slate-900/60"
        } else {
            "border-slate-300 text-slate-700 bg-slate-100"
        };
        format!("px-2.5 py-1 rounded-full text-[11px] border {}", colors)
    };

    let learn_more_class = move || {
        let colors = if is_dark() {
            "border-red-500/80 text-red-200 bg-red-600/10 hover:bg-red-600 hover:text-white"
        } else {
            "border-red-500/80 text-red-600 bg-white hover:bg-red-100 hover:text-red-700"
        };
        format!(
            "mt-1 inline-flex items-center gap-1 rounded-full border text-[11px] font-medium px-3 py-1 transition-colors shadow-sm {}",
            colors
        )
    };

    let year = chrono::Local::now().year();

    view! {
        <div class=move || format!(
            "min-h-screen flex items-center justify-center relative overflow-hidden px-4 py-8 transition-colors {}",
            style::page(theme.get())
        )>
            <div class="relative w-full max-w-6xl">
                <div class=move || format!(
                    "rounded-3xl border shadow-[0_26px_90px_rgba(0,0,0,0.55)] px-6 py-6 md:px-10 md:py-8 {}",
                    style::card(theme.get())
                )>
                    <Header/>

                    <div class="text-center mb-6 space-y-2">
                        <h1 class=move || format!(
                            "text-2xl md:text-3xl font-semibold tracking-tight {}",
                            style::strong_text(theme.get())
                        )>
                            "Verificação inteligente de links de \"valores a receber\""
                        </h1>
                        <p class=move || format!(
                            "text-[12px] md:text-[13px] max-w-2xl mx-auto {}",
                            style::muted_text(theme.get())
                        )>
                            "Antes de o usuário clicar, o módulo valida a URL combinando "
                            <span class=highlight>"IA generativa"</span>
                            ", "
                            <span class=highlight>"motor de regras antifraude"</span>
                            " e "
                            <span class=highlight>"base de whitelist/blacklist"</span>
                            " focada no golpe de \"valores a receber\"."
                        </p>

                        <div class="flex flex-wrap justify-center gap-2 mt-2">
                            {CHIPS.into_iter().map(|chip| view! {
                                <span class=chip_class>{chip}</span>
                            }).collect_view()}
                            <a href=Tab::Arquitetura.path() class=learn_more_class>
                                "Saiba mais sobre o projeto"
                            </a>
                        </div>
                    </div>

                    <Tabs/>

                    {children()}

                    <div class="mt-6 flex flex-wrap items-center justify-between gap-2 text-[10px]">
                        <span class=move || style::muted_text(theme.get())>
                            "Projeto acadêmico – Módulo antifraude focado no golpe de \"valores a receber\"."
                        </span>
                        <span class=move || style::muted_text(theme.get())>
                            "VerificaBC · " {year}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
