use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_meta::Title;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use battlelog_shared::schedule::Debouncer;
use battlelog_shared::{FetchRequest, SearchState};

use crate::components::{BattleList, BattleListHeader, LoaderPanel};
use crate::config::{POLL_INTERVAL_MS, SEARCH_PAGE_TITLE, SEARCH_QUIET_MS};
use crate::{analytics, api, settings};

fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Send a list request. Failures keep the rows already on screen.
fn run_fetch(state: RwSignal<SearchState>, request: FetchRequest) {
    if request.trigger.scrolls_to_top() {
        scroll_to_top();
    }

    spawn_local(async move {
        let result = api::fetch_battles(&request.filters).await;
        if let Err(e) = &result {
            web_sys::console::warn_1(&format!("battle list fetch failed: {e}").into());
        }
        let applied = state
            .try_update(|s| s.resolve(request.generation, result))
            .unwrap_or(false);
        if !applied {
            web_sys::console::info_1(
                &format!("dropped stale battle list response #{}", request.generation).into(),
            );
        }
    });
}

/// Wait out the quiet period, then commit whatever text settled.
/// Superseded waits find nothing to commit and return.
async fn commit_when_quiet(debouncer: StoredValue<Debouncer<String>>, state: RwSignal<SearchState>) {
    TimeoutFuture::new(SEARCH_QUIET_MS).await;
    loop {
        let now = js_sys::Date::now();
        let Some((settled, remaining)) =
            debouncer.try_update_value(|d| (d.poll(now), d.remaining_ms(now)))
        else {
            return;
        };
        if let Some(text) = settled {
            if let Some(request) = state.try_update(|s| s.commit_search(text)).flatten() {
                run_fetch(state, request);
            }
            return;
        }
        let Some(wait_ms) = remaining else {
            return;
        };
        TimeoutFuture::new(wait_ms.ceil().max(1.0) as u32).await;
    }
}

/// Searchable, paginated battle index with periodic refresh.
#[component]
pub fn BattleSearchPage() -> impl IntoView {
    let state = RwSignal::new(SearchState::new(settings::load_large_only()));
    let input_text = RwSignal::new(String::new());
    let debouncer = StoredValue::new(Debouncer::<String>::new(SEARCH_QUIET_MS));
    let poll_timer = StoredValue::new_local(None::<Interval>);

    // Initial load, then refresh on a fixed interval with whatever filters are current.
    Effect::new(move || {
        analytics::page_view("/battles");
        if let Some(request) = state.try_update(|s| s.mount()) {
            run_fetch(state, request);
        }
        let interval = Interval::new(POLL_INTERVAL_MS, move || {
            if let Some(request) = state.try_update(|s| s.poll()) {
                run_fetch(state, request);
            }
        });
        poll_timer.set_value(Some(interval));
    });

    on_cleanup(move || {
        // Dropping the interval clears it.
        poll_timer.try_update_value(|slot| slot.take());
        debouncer.try_update_value(|d| d.cancel());
    });

    let on_input = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let value = input.value();
        input_text.set(value.clone());
        let now = js_sys::Date::now();
        debouncer.update_value(|d| {
            d.input(value, now);
        });
        spawn_local(commit_when_quiet(debouncer, state));
    };

    let submit = move || {
        let pending = debouncer.try_update_value(|d| d.flush()).flatten();
        if let Some(request) = state.try_update(|s| s.submit(pending)) {
            run_fetch(state, request);
        }
    };

    let on_keydown = move |e: leptos::ev::KeyboardEvent| {
        if e.key() == "Enter" {
            submit();
        }
    };

    let on_large_only = move |e: leptos::ev::Event| {
        let Some(target) = e.target() else {
            return;
        };
        let Ok(input) = target.dyn_into::<web_sys::HtmlInputElement>() else {
            return;
        };
        let checked = input.checked();
        settings::save_large_only(checked);
        if let Some(request) = state.try_update(|s| s.set_large_only(checked)).flatten() {
            run_fetch(state, request);
        }
    };

    let on_page = Callback::new(move |page: u32| {
        if let Some(request) = state.try_update(|s| s.set_page(page)).flatten() {
            run_fetch(state, request);
        }
    });

    let body = move || {
        if state.with(|s| s.is_loading()) {
            return view! { <LoaderPanel /> }.into_any();
        }
        let (battles, active_page, has_next) = state.with(|s| {
            (s.battles().to_vec(), s.active_page(), s.has_next_page())
        });
        view! {
            <BattleList battles=battles active_page=active_page has_next=has_next on_page=on_page />
        }
        .into_any()
    };

    view! {
        <Title text=SEARCH_PAGE_TITLE />
        <div style="width: 100%; max-width: 900px; margin: auto; margin-bottom: 5vh;">
            <div style="height: 5vh;" />
            <p style="text-align: center; margin-bottom: 1rem; font-size: 1.3rem; font-weight: bold;">
                "SEARCH BATTLES"
            </p>
            <div style="position: relative; margin-bottom: 2rem;">
                <input
                    type="text"
                    style="width: 100%; box-sizing: border-box; padding: 12px 44px 12px 14px; background: #1a1d2a; border: 1px solid #282c3e; border-radius: 6px; color: #e2e0d8; font-size: 1rem; outline: none;"
                    placeholder="Search alliance, guild, or player..."
                    prop:value=move || input_text.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <button
                    aria-label="Search"
                    style="position: absolute; right: 6px; top: 50%; transform: translateY(-50%); background: none; border: none; color: #8a8f9c; cursor: pointer; width: 32px; height: 32px;"
                    on:click=move |_| submit()
                >
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" width="16" height="16">
                        <path fill-rule="evenodd" d="M9 3.5a5.5 5.5 0 100 11 5.5 5.5 0 000-11zM2 9a7 7 0 1112.452 4.391l3.328 3.329a.75.75 0 11-1.06 1.06l-3.329-3.328A7 7 0 012 9z" clip-rule="evenodd" />
                    </svg>
                </button>
            </div>
            <div style="display: flex; justify-content: flex-end; align-items: center; margin-bottom: 0.75rem;">
                <label style="display: flex; align-items: center; gap: 0.5rem; cursor: pointer;">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.filters().large_only)
                        on:change=on_large_only
                    />
                    "Exclude small battles"
                </label>
            </div>
            <BattleListHeader />
            {body}
        </div>
    }
}
