use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::registry::render_page_content;
use crate::layout::Shell;
use leptos::prelude::*;

/// Main layout: sidebar plus the page selected in the global context.
///
/// Router integration mirrors the active page into `?active=...`.
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    ctx.init_router_integration();
    ctx.init_viewport_tracking();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    {move || {
                        let key = ctx.active.get();
                        leptos::logging::log!("rendering page '{}'", key);
                        render_page_content(&key)
                    }}
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <MainLayout />
    }
}
