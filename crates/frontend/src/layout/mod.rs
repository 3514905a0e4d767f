pub mod global_context;
pub mod sidebar;
pub mod top_bar;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_bar::TopBar;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |                 TopBar                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <div class="app-layout">
            <TopBar />

            <div class="app-body">
                <div data-zone="left" class="left" class:hidden=move || !is_open()>
                    {left()}
                </div>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
