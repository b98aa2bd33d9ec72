//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{diagnosis::DiagnosisPage, doctors::DoctorsPage, home::HomePage, navigation::NavigationPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Widgets keep their own state, so the root only sets up metadata, the
/// navigation bar, and client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/telemed.css"/>
        <Title text="Medi-Help"/>

        <Router>
            <nav class="site-nav">
                <A href="/">"Home"</A>
                <A href="/diagnosis">"Diagnosis"</A>
                <A href="/doctors">"Doctors"</A>
                <A href="/navigation">"Centres"</A>
            </nav>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("diagnosis") view=DiagnosisPage/>
                    <Route path=StaticSegment("doctors") view=DoctorsPage/>
                    <Route path=StaticSegment("navigation") view=NavigationPage/>
                </Routes>
            </main>
        </Router>
    }
}
