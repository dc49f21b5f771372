//! Router glue applying navigation decisions to `leptos_router`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` owns history and matching for rendering; this gate sits
//! inside `<Router>` and runs the decision pipeline on every location change.
//! A redirect replaces the current history entry, so Back never lands on a
//! page the user was bounced from.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppPipeline;
use crate::nav::Decision;
use crate::routing::Location;
use crate::routing::location::parse_query;

/// Build a [`Location`] from the router's `pathname` and `search` parts.
pub fn location_from_parts(pathname: &str, search: &str) -> Location {
    let mut location = Location::new(pathname);
    location.query = parse_query(search);
    location
}

/// Render `children` only once the current location has been allowed.
#[component]
pub fn NavigationGate(children: ChildrenFn) -> impl IntoView {
    let pipeline = expect_context::<AppPipeline>();
    let location = use_location();
    let navigate = use_navigate();
    let allowed = RwSignal::new(false);
    let committed = StoredValue::new(None::<Location>);

    Effect::new(move || {
        let target = location_from_parts(&location.pathname.get(), &location.search.get());
        let source = committed.get_value();
        match pipeline.decide(&target, source.as_ref()) {
            Decision::Proceed => {
                committed.set_value(Some(target));
                allowed.set(true);
            }
            Decision::RedirectTo(next) => {
                allowed.set(false);
                navigate(&next.full_path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}
