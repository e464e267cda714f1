//! Main application component

use leptos::*;
use leptos_router::*;
use vbc_core::{Session, Theme};

use crate::components::*;
use crate::config;
use crate::pages::*;

/// Root component.
///
/// Session, theme and API client are provided as context so every tab sees
/// the same state; nothing survives a page reload.
#[component]
pub fn App() -> impl IntoView {
    provide_context(create_rw_signal(Session::new()));
    provide_context(create_rw_signal(Theme::default()));
    provide_context(store_value(config::build_client()));

    view! {
        <Router>
            <Shell>
                <Routes>
                    <Route path="/" view=VerificationPage/>
                    <Route path="/dashboard" view=RiskDashboard/>
                    <Route path="/historico" view=HistoryTable/>
                    <Route path="/regras" view=RulesPanel/>
                    <Route path="/arquitetura" view=ArchitecturePanel/>
                    <Route path="/*any" view=VerificationPage/>
                </Routes>
            </Shell>
        </Router>
    }
}
