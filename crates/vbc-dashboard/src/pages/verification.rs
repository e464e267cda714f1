//! Real-time verification tab: URL form and result card

use chrono::Utc;
use leptos::*;
use vbc_client::{CheckClient, ClientError};
use vbc_core::content::FORM_HINT;
use vbc_core::datetime::format_date;
use vbc_core::score::score_label;
use vbc_core::{CheckResult, Session, SubmitError, Theme};

use crate::style;

#[component]
pub fn VerificationPage() -> impl IntoView {
    view! {
        <div class="grid gap-6 md:grid-cols-2 items-start">
            <VerificationForm/>
            <VerificationResult/>
        </div>
    }
}

#[component]
fn VerificationForm() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let client = expect_context::<StoredValue<Option<CheckClient>>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let submitting = move || session.with(Session::is_submitting);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        // Validation errors are recorded on the session itself
        let Some(Ok(request)) = session.try_update(|s| s.begin_submit()) else {
            return;
        };

        let client = client.get_value();
        spawn_local(async move {
            let outcome = match client {
                Some(client) => client.check(&request).await,
                None => Err(ClientError::InvalidBaseUrl(
                    "no usable API address configured".to_string(),
                )),
            };
            session.update(|s| match s.complete(outcome, Utc::now()) {
                Ok(()) | Err(SubmitError::Request) => {}
                Err(e) => tracing::debug!("Unexpected completion outcome: {}", e),
            });
        });
    };

    let input_class = move || {
        let colors = if theme.get().is_dark() {
            "bg-slate-950/60 border-slate-600 text-slate-50 placeholder:text-slate-500"
        } else {
            "bg-white border-slate-300 text-slate-900 placeholder:text-slate-500"
        };
        format!(
            "w-full rounded-xl pl-8 pr-3 py-2.5 text-xs md:text-sm focus:outline-none focus:ring-2 focus:ring-red-500 focus:border-red-500 border {}",
            colors
        )
    };

    let error_box = move || {
        session.with(|s| s.error().map(str::to_string)).map(|message| {
            let colors = if theme.get().is_dark() {
                "border-red-700 bg-red-950/60 text-red-100"
            } else {
                "border-red-300 bg-red-50 text-red-700"
            };
            view! {
                <div class=format!("rounded-lg px-3 py-2 text-[11px] border {}", colors)>
                    {message}
                </div>
            }
        })
    };

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>"Analisar URL"</h2>

            <form on:submit=on_submit class="space-y-3">
                <div class="space-y-1.5">
                    <label
                        for="url"
                        class=move || format!("text-[11px] font-medium {}", style::body_text(theme.get()))
                    >
                        "URL recebida"
                    </label>
                    <div class="relative">
                        <span class="absolute left-3 top-1/2 -translate-y-1/2 text-xs text-slate-500">"🔗"</span>
                        <input
                            id="url"
                            type="text"
                            autocomplete="off"
                            placeholder="https://exemplo.com.br/valores-a-receber"
                            class=input_class
                            prop:value=move || session.with(|s| s.input().to_string())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                session.update(|s| s.set_input(value));
                            }
                        />
                    </div>
                </div>

                {error_box}

                <button
                    type="submit"
                    disabled=submitting
                    class="inline-flex w-full items-center justify-center gap-2 rounded-xl bg-red-600 hover:bg-red-700 disabled:bg-slate-500 text-xs md:text-sm font-medium text-white py-2.5 transition-colors shadow-md"
                >
                    {move || submitting().then(|| view! {
                        <span class="w-4 h-4 border-2 border-white/60 border-t-transparent rounded-full animate-spin"></span>
                    })}
                    {move || if submitting() { "Analisando URL..." } else { "Analisar URL" }}
                </button>

                <p class=move || format!("text-[10px] leading-snug {}", style::muted_text(theme.get()))>
                    {FORM_HINT}
                </p>
            </form>
        </div>
    }
}

#[component]
fn VerificationResult() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let body = move || {
        let (submitting, result) = session.with(|s| (s.is_submitting(), s.result().cloned()));

        if submitting {
            return view! {
                <div class=format!(
                    "h-full flex flex-col items-center justify-center text-center gap-2 text-[11px] {}",
                    style::body_text(theme.get())
                )>
                    <div class="w-8 h-8 border-2 border-slate-500 border-t-red-500 rounded-full animate-spin"></div>
                    <p>"Rodando motor de regras e IA..."</p>
                </div>
            }
            .into_view();
        }

        match result {
            Some(result) => view! { <ResultDetails result=result/> }.into_view(),
            None => view! {
                <div class=format!(
                    "h-full flex items-center justify-center text-center text-[11px] px-3 {}",
                    style::muted_text(theme.get())
                )>
                    <p>
                        "Nenhuma URL analisada ainda. Cole um link ao lado e clique em "
                        <span class="font-semibold">"“Analisar URL”"</span>
                        " para ver aqui a classificação de risco."
                    </p>
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>"Resultado da análise"</h2>
            {body}
        </div>
    }
}

#[component]
fn ResultDetails(result: CheckResult) -> impl IntoView {
    let presentation = result.verdict_class().presentation();
    let score = score_label(result.score);
    let reasons = result.reasons();

    let fields: Vec<(&'static str, String, bool)> = [
        ("URL original: ", result.raw_input.clone(), true),
        ("URL normalizada: ", result.normalized_url.clone(), true),
        ("Domínio base: ", result.domain.clone(), false),
        (
            "Data/hora da análise: ",
            result.submitted_at.as_deref().map(|ts| format_date(Some(ts))),
            false,
        ),
        ("Origem da análise: ", result.source.clone(), false),
    ]
    .into_iter()
    .filter_map(|(name, value, wrap)| value.filter(|v| !v.is_empty()).map(|v| (name, v, wrap)))
    .collect();

    view! {
        <div class=format!("rounded-xl border px-4 py-3 text-xs mt-1 {}", style::tone_frame(presentation.tone))>
            <div class="flex flex-wrap items-center justify-between gap-2 mb-2">
                <div class="flex items-center gap-2">
                    <span class=format!(
                        "inline-flex items-center rounded-full px-2.5 py-0.5 text-[10px] font-semibold {}",
                        style::tone_pill(presentation.tone)
                    )>
                        {presentation.badge}
                    </span>
                    <span class="font-semibold text-[12px]">{presentation.label}</span>
                </div>

                {score.map(|score| view! {
                    <span class="text-[10px] font-medium">
                        "Score de risco: " <span class="font-semibold">{score}</span>
                    </span>
                })}
            </div>

            <p class="text-[11px]">{presentation.description}</p>

            <div class="mt-3 space-y-1 text-[11px]">
                {fields.into_iter().map(|(name, value, wrap)| view! {
                    <p>
                        <span class="font-medium">{name}</span>
                        <span class=if wrap { "break-all" } else { "" }>{value}</span>
                    </p>
                }).collect_view()}
            </div>

            {(!reasons.is_empty()).then(|| view! {
                <div class="mt-3">
                    <p class="text-[11px] font-semibold mb-1">"Motivos identificados:"</p>
                    <ul class="list-disc list-inside space-y-0.5 text-[11px]">
                        {reasons.into_iter().map(|reason| view! { <li>{reason}</li> }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
