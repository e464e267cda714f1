//! Verdict pill used in the history table

use leptos::*;
use vbc_core::CheckResult;

use crate::style;

#[component]
pub fn VerdictBadge(result: CheckResult) -> impl IntoView {
    let tone = result.verdict_class().presentation().tone;

    view! {
        <span class=format!(
            "inline-flex items-center px-2 py-0.5 rounded-full border text-[10px] {}",
            style::tone_badge(tone)
        )>
            {result.verdict_token()}
        </span>
    }
}
