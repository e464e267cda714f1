//! Session history table

use leptos::*;
use vbc_core::content::HISTORY_FOOTNOTE;
use vbc_core::datetime::format_date;
use vbc_core::score::score_cell;
use vbc_core::{Session, Theme};

use crate::components::VerdictBadge;
use crate::style;

#[component]
pub fn HistoryTable() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let theme = expect_context::<RwSignal<Theme>>();

    let cell = move || format!("py-1 px-2 {}", style::body_text(theme.get()));

    // Rows carry no stable id, so the whole table re-renders on change
    let content = move || {
        let history: Vec<_> = session.with(|s| s.history().iter().cloned().collect());

        if history.is_empty() {
            return view! {
                <p class=format!("text-[11px] {}", style::muted_text(theme.get()))>
                    "Ainda não há verificações nesta sessão. Use a aba de "
                    <span class="font-semibold">"Verificação em tempo real"</span>
                    " para iniciar."
                </p>
            }
            .into_view();
        }

        view! {
            <div class="overflow-x-auto text-[11px]">
                <table class="min-w-full border-separate border-spacing-y-1">
                    <thead class=style::muted_text(theme.get())>
                        <tr>
                            <th class="text-left py-1 px-2">"Data/Hora"</th>
                            <th class="text-left py-1 px-2">"URL"</th>
                            <th class="text-left py-1 px-2">"Domínio"</th>
                            <th class="text-left py-1 px-2">"Veredito"</th>
                            <th class="text-left py-1 px-2">"Score"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {history.into_iter().map(|item| {
                            let submitted = format_date(item.submitted_at.as_deref());
                            let url = item.raw_input.clone().unwrap_or_default();
                            let domain = item
                                .domain
                                .clone()
                                .filter(|d| !d.is_empty())
                                .unwrap_or_else(|| "-".to_string());
                            let score = score_cell(item.score);
                            view! {
                                <tr>
                                    <td class=cell>{submitted}</td>
                                    <td class=move || format!("{} max-w-[200px] truncate", cell()) title=url.clone()>{url.clone()}</td>
                                    <td class=cell>{domain}</td>
                                    <td class="py-1 px-2"><VerdictBadge result=item/></td>
                                    <td class=cell>{score}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        }
        .into_view()
    };

    view! {
        <div class=move || style::sub_card(theme.get())>
            <h2 class=move || style::panel_title(theme.get())>"Histórico de verificações (sessão atual)"</h2>
            {content}
            <p class=move || format!("text-[10px] mt-3 {}", style::muted_text(theme.get()))>
                {HISTORY_FOOTNOTE}
            </p>
        </div>
    }
}
