//! Root application component with routing and context providers.
//!
//! The `leptos_router` tree mirrors [`RouteTable::canonical`]; the
//! [`NavigationGate`] decides whether a location may render at all. Each
//! route renders a [`Screen`] mount point that the page bundle fills in.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::config::NavConfig;
use crate::nav::NavigationPipeline;
use crate::routing::RouteTable;
use crate::util::gate::NavigationGate;
use crate::util::storage::PersistedCredentialStore;

#[cfg(feature = "csr")]
pub type AppStorage = crate::util::storage::BrowserStorage;
#[cfg(not(feature = "csr"))]
pub type AppStorage = crate::util::storage::MemoryStorage;

pub type AppStore = PersistedCredentialStore<AppStorage>;
pub type AppPipeline = NavigationPipeline<AppStore>;

/// Build the pipeline over the platform's credential storage.
///
/// # Errors
///
/// Returns [`crate::routing::RouteTableError`] if the canonical table fails
/// validation against `config`.
pub fn build_pipeline(config: NavConfig) -> Result<AppPipeline, crate::routing::RouteTableError> {
    let store = PersistedCredentialStore::with_prefix(AppStorage::default(), &config.storage_prefix);
    NavigationPipeline::new(RouteTable::canonical(), store, config)
}

/// Root application component.
///
/// Provides the pipeline and credential store as context (the login page
/// writes through the store) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let pipeline = match build_pipeline(NavConfig::default()) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            log::error!("route table rejected: {e}");
            return view! { <p class="boot-error">"Navigation is misconfigured."</p> }.into_any();
        }
    };
    provide_context(pipeline.store().clone());
    provide_context(pipeline);

    view! {
        <Title text="Arena"/>

        <Router>
            <NavigationGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/auth") view=|| view! { <Screen name="auth"/> }/>
                    <Route path=path!("/") view=|| view! { <Screen name="dashboard"/> }/>
                    <Route path=path!("/team") view=|| view! { <Screen name="team"/> }/>
                    <Route path=path!("/submit/:task_id") view=|| view! { <Screen name="submit"/> }/>
                    <ParentRoute path=path!("/admin") view=|| view! { <Screen name="admin"><Outlet/></Screen> }>
                        <Route path=path!("") view=|| ()/>
                        <Route path=path!("tasks") view=|| view! { <Screen name="admin-tasks"/> }/>
                        <Route path=path!("tasks/new") view=|| view! { <Screen name="admin-task-new"/> }/>
                        <Route path=path!("solutions") view=|| view! { <Screen name="admin-solutions"/> }/>
                    </ParentRoute>
                </Routes>
            </NavigationGate>
        </Router>
    }
    .into_any()
}

/// Mount point for one route's page component.
#[component]
pub fn Screen(name: &'static str, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <section class="screen" data-screen=name>
            {children.map(|c| c())}
        </section>
    }
}
