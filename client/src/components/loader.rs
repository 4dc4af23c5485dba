use leptos::prelude::*;

/// Spinning ring used wherever data is in flight.
#[component]
pub fn Loader(#[prop(default = 28)] size: u32) -> impl IntoView {
    let style = format!(
        "display: inline-block; width: {size}px; height: {size}px; border: 3px solid #282c3e; border-top-color: #34c3ff; border-radius: 50%; animation: spin 0.8s linear infinite;"
    );
    view! { <div role="status" aria-label="Loading" style=style /> }
}

/// Fixed-size panel around a loader so rows do not jump in when data lands.
#[component]
pub fn LoaderPanel(#[prop(default = "4rem")] padding: &'static str) -> impl IntoView {
    let style = format!(
        "padding: {padding}; text-align: center; background: #0f131a; border-radius: 6px;"
    );
    view! {
        <div style=style>
            <Loader />
        </div>
    }
}
