use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone. On compact viewports it floats over the content with a
/// backdrop that closes it.
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let overlay = move || ctx.viewport.get().is_compact();
    let open = move || ctx.left_open.get();

    view! {
        <Show when=move || overlay() && open()>
            <div class="left__backdrop" on:click=move |_| ctx.left_open.set(false)></div>
        </Show>
        <div
            data-zone="left"
            class="left"
            class:left--overlay=overlay
            class:hidden=move || !open()
        >
            {children()}
        </div>
    }
}
