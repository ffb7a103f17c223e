use desktop_runtime::{
    parse_launch_options_from_query, DesktopProvider, DesktopShell, LaunchOptions,
};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::landing::LandingPage;

const SITE_TITLE: &str = "Bullish Cafe - Coming Soon";
const SITE_DESCRIPTION: &str = "The future of crypto-coffee is brewing. Experience the new Bullish Cafe with XRP Ledger integration.";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en" class="dark" />
        <Title text=SITE_TITLE />
        <Meta name="description" content=SITE_DESCRIPTION />
        <Meta name="keywords" content="coffee, crypto, XRP, blockchain, cafe, bullish" />
        <Meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no" />
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=SITE_TITLE />
        <Meta property="og:description" content=SITE_DESCRIPTION />
        <Meta property="og:site_name" content="Bullish Cafe" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/landing" view=LandingPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Returns the launch options requested by the current URL's query string.
fn current_launch_options() -> LaunchOptions {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window().and_then(|window| window.location().search().ok());
        search
            .map(|query| parse_launch_options_from_query(&query))
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        parse_launch_options_from_query("")
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let options = current_launch_options();

    view! {
        <DesktopProvider options=options>
            <DesktopShell />
        </DesktopProvider>
    }
}
