use crate::domain::contacts::ui::ContactsListPage;
use crate::domain::customers::ui::CustomersListPage;
use crate::domain::deals::ui::DealsListPage;
use crate::domain::leads::ui::LeadsListPage;
use crate::domain::tasks::ui::TasksListPage;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Активная страница по ключу из глобального контекста.
/// Неизвестный ключ открывает список клиентов.
#[component]
fn ActivePage() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    move || {
        let key = ctx.active.get().unwrap_or_else(|| "customers".to_string());
        match key.as_str() {
            "leads" => view! { <LeadsListPage /> }.into_any(),
            "deals" => view! { <DealsListPage /> }.into_any(),
            "tasks" => view! { <TasksListPage /> }.into_any(),
            "contacts" => view! { <ContactsListPage /> }.into_any(),
            _ => view! { <CustomersListPage /> }.into_any(),
        }
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActivePage /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
