use leptos::*;
use leptos_router::A;

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "\u{1F331}",
        "Sustainable",
        "100% organic, fair-trade coffee sourced directly from farmers",
    ),
    (
        "\u{1F48E}",
        "Blockchain Verified",
        "Every bean tracked on XRP Ledger for complete transparency",
    ),
    (
        "\u{26A1}",
        "Lightning Fast",
        "Instant XRP payments for seamless transactions",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class="landing-page">
            <A href="/" class="landing-back">"\u{2190} Back to Terminal"</A>
            <div class="landing-card">
                <div class="landing-emoji">"\u{2615}"</div>
                <h1>"Welcome to Bullish Cafe"</h1>
                <p class="landing-lede">
                    "The future of crypto-coffee is here. Experience premium coffee with XRP Ledger integration."
                </p>
                <div class="landing-highlights">
                    {HIGHLIGHTS
                        .into_iter()
                        .map(|(icon, title, body)| {
                            view! {
                                <div class="landing-highlight">
                                    <div class="landing-highlight-icon">{icon}</div>
                                    <h3>{title}</h3>
                                    <p>{body}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button type="button" class="landing-order">"Order Your Coffee"</button>
                <p class="landing-note">"Coming Soon \u{2022} Follow us for updates"</p>
            </div>
            <footer class="landing-footer">
                "\u{A9} 2024 Bullish Cafe. Powered by XRP Ledger Technology."
            </footer>
        </section>
    }
}
