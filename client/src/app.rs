use leptos::prelude::*;
use leptos_meta::{Style, provide_meta_context};
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::{BattleDetailPage, BattleSearchPage};
use crate::store::BattleStoreHandle;

/// Root application component. Owns the battle store and the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(BattleStoreHandle::new());

    view! {
        <Style>"@keyframes spin { to { transform: rotate(360deg); } }"</Style>
        <Router>
            <main style="min-height: 100vh; background: #080a0f; color: #e2e0d8; font-family: 'Inter', system-ui, sans-serif; padding: 0 12px;">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=BattleSearchPage />
                    <Route path=path!("/battles") view=BattleSearchPage />
                    <Route path=path!("/battles/:id") view=BattleDetailPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div style="max-width: 450px; margin: 10vh auto 0; padding: 4rem; background: #0f131a; text-align: center; border-radius: 6px;">
            <p style="margin-bottom: 2rem;">"Page not found"</p>
            <A href="/battles">
                <span style="color: #34c3ff; text-decoration: none;">"Return to Battle Index"</span>
            </A>
        </div>
    }
}
