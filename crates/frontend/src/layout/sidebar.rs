//! Sidebar component with CRM section navigation

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Пункты меню: (ключ страницы, подпись, иконка)
fn menu_items() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("customers", "Клиенты", "customers"),
        ("leads", "Лиды", "leads"),
        ("deals", "Сделки", "deals"),
        ("tasks", "Задачи", "tasks"),
        ("contacts", "Контакты", "contacts"),
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-sidebar__content">
            {menu_items().into_iter().map(|(id, label, icon_name)| {
                let item_id = StoredValue::new(id.to_string());
                view! {
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || {
                            let iid = item_id.get_value();
                            ctx.active.get().as_ref().map(|a| a == &iid).unwrap_or(false)
                        }
                        style:padding-left="12px"
                        on:click=move |_| ctx.open_page(id)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(icon_name)}
                            <span>{label}</span>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
