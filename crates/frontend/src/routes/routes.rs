use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::right::panel::RightPanel;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
            right=|| view! { <RightPanel /> }.into_any()
        />
    }
}

/// Единственный маршрут приложения: рабочая область с вкладками.
/// Активная вкладка хранится в `?active=`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
