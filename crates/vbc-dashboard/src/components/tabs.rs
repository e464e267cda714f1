//! Tab bar; each tab is a client-side route

use leptos::*;
use leptos_router::*;
use vbc_core::{Tab, Theme};

#[component]
pub fn Tabs() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let location = use_location();
    let active = create_memo(move |_| Tab::from_path(&location.pathname.get()));

    view! {
        <div class="flex flex-wrap gap-2 mb-6 text-[11px] md:text-xs">
            {Tab::ALL.into_iter().map(|tab| {
                let class = move || {
                    let colors = if active.get() == tab {
                        "bg-red-600 text-white border-red-500 shadow-md"
                    } else if theme.get().is_dark() {
                        "bg-slate-900/60 border-slate-700 text-slate-300 hover:bg-slate-800"
                    } else {
                        "bg-white border-slate-300 text-slate-700 hover:bg-slate-100"
                    };
                    format!("px-3 py-1.5 rounded-full border transition-all {}", colors)
                };
                view! {
                    <a href=tab.path() class=class>{tab.label()}</a>
                }
            }).collect_view()}
        </div>
    }
}
