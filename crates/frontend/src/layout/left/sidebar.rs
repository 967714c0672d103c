//! Sidebar with the console's top-level pages

use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::page_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    [
        ("d400_overview", "dashboard"),
        ("a001_order", "orders"),
        ("a002_payment_request", "payments"),
        ("sys_settings", "settings"),
    ]
    .into_iter()
    .map(|(id, icon)| MenuItem {
        id,
        label: page_label_for_key(id),
        icon,
    })
    .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {get_menu_items()
                .into_iter()
                .map(|item| {
                    let id = item.id;
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.with(|a| a == id)
                            style:padding-left="12px"
                            on:click=move |_| ctx.open_page(id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
