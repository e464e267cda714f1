//! Tailwind class sets shared by the views

use vbc_core::{Theme, Tone};

pub fn page(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 text-slate-100"
    } else {
        "bg-slate-100 text-slate-900"
    }
}

pub fn card(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "bg-slate-900/90 border-slate-700"
    } else {
        "bg-white border-slate-200"
    }
}

/// Panel inside the main card
pub fn sub_card(theme: Theme) -> String {
    let colors = if theme.is_dark() {
        "bg-slate-900/80 border-slate-700"
    } else {
        "bg-slate-50 border-slate-200"
    };
    format!("rounded-2xl border p-4 md:p-5 {}", colors)
}

pub fn panel_title(theme: Theme) -> String {
    let color = if theme.is_dark() { "text-slate-300" } else { "text-slate-700" };
    format!("text-xs font-semibold tracking-[0.14em] uppercase mb-4 {}", color)
}

pub fn strong_text(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "text-slate-50"
    } else {
        "text-slate-900"
    }
}

pub fn body_text(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "text-slate-300"
    } else {
        "text-slate-700"
    }
}

pub fn muted_text(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "text-slate-400"
    } else {
        "text-slate-600"
    }
}

/// Result card frame for a verdict tone
pub fn tone_frame(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "border-emerald-400 bg-emerald-950/40 text-emerald-100",
        Tone::Warning => "border-amber-400 bg-amber-950/40 text-amber-100",
        Tone::Danger => "border-red-500 bg-red-950/40 text-red-100",
        Tone::Neutral => "border-slate-500 bg-slate-900/40 text-slate-100",
    }
}

pub fn tone_pill(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-emerald-700 text-emerald-100",
        Tone::Warning => "bg-amber-700 text-amber-100",
        Tone::Danger => "bg-red-700 text-red-100",
        Tone::Neutral => "bg-slate-700 text-slate-100",
    }
}

/// History table verdict badge
pub fn tone_badge(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "bg-emerald-700 text-emerald-100 border-emerald-500",
        Tone::Warning => "bg-amber-700 text-amber-100 border-amber-500",
        Tone::Danger => "bg-red-700 text-red-100 border-red-500",
        Tone::Neutral => "bg-slate-700 text-slate-100 border-slate-500",
    }
}
