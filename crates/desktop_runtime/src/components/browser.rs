use super::*;
use crate::model::OverlayStage;

const BROWSER_ADDRESS: &str = "https://bullish.cafe";

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static HERO_FEATURES: [Feature; 3] = [
    Feature {
        icon: "\u{26A1}",
        title: "Lightning-Fast XRP Integration",
        body: "Next-generation payment processing with instant settlements and zero-fee transactions on the XRP Ledger",
    },
    Feature {
        icon: "\u{1F30D}",
        title: "Global Coffee Ecosystem",
        body: "Connecting coffee lovers worldwide through blockchain-verified sourcing and transparent supply chains",
    },
    Feature {
        icon: "\u{1F48E}",
        title: "Exclusive NFT Rewards",
        body: "Earn unique digital collectibles, unlock premium experiences, and access exclusive coffee drops",
    },
];

static TIMELINE: [Feature; 4] = [
    Feature {
        icon: "\u{1F52C}",
        title: "Research & Development",
        body: "Advanced blockchain integration",
    },
    Feature {
        icon: "\u{1F3A8}",
        title: "Brand Evolution",
        body: "Revolutionary visual identity",
    },
    Feature {
        icon: "\u{1F680}",
        title: "Platform Launch",
        body: "Next-gen coffee experience",
    },
    Feature {
        icon: "\u{1F31F}",
        title: "Community Rewards",
        body: "Exclusive early access benefits",
    },
];

static FOUNDER_BENEFITS: [Feature; 4] = [
    Feature {
        icon: "\u{1F451}",
        title: "Lifetime Founder Status",
        body: "Permanent recognition as a founding member",
    },
    Feature {
        icon: "\u{2615}",
        title: "Early Access to Roasts",
        body: "First access to all new coffee releases",
    },
    Feature {
        icon: "\u{1F381}",
        title: "Exclusive Merchandise",
        body: "Limited edition Bullish Beans merchandise",
    },
    Feature {
        icon: "\u{23F0}",
        title: "Limited Availability",
        body: "Only 55 founding memberships available",
    },
];

static COFFEE_BENEFITS: [Feature; 3] = [
    Feature {
        icon: "\u{2615}",
        title: "24 Bags of Coffee",
        body: "Annual allocation of premium coffee",
    },
    Feature {
        icon: "\u{1F4B0}",
        title: "Revenue Share",
        body: "5% of monthly revenue shared among Founders",
    },
    Feature {
        icon: "\u{1F3AF}",
        title: "VIP Affiliate Status",
        body: "Earn 10% commission on referrals with exclusive tracking dashboard",
    },
];

static GOVERNANCE: [Feature; 3] = [
    Feature {
        icon: "\u{1F4AC}",
        title: "Discord Channel and Role",
        body: "Exclusive access to Founders community",
    },
    Feature {
        icon: "\u{1F5F3}\u{FE0F}",
        title: "Governance Rights",
        body: "Vote on new blends and company decisions",
    },
    Feature {
        icon: "\u{1FA99}",
        title: "10,000 BREW Tokens",
        body: "Governance and utility token allocation",
    },
];

fn feature_cards(features: &'static [Feature]) -> View {
    features
        .iter()
        .map(|feature| {
            view! {
                <article data-ui-slot="feature-card">
                    <div data-ui-slot="feature-icon">{feature.icon}</div>
                    <h4>{feature.title}</h4>
                    <p>{feature.body}</p>
                </article>
            }
        })
        .collect_view()
}

#[component]
fn FeatureSection(
    title: &'static str,
    subtitle: &'static str,
    features: &'static [Feature],
) -> impl IntoView {
    view! {
        <section data-ui-slot="feature-section">
            <h3>{title}</h3>
            <p data-ui-slot="section-subtitle">{subtitle}</p>
            <div data-ui-slot="feature-grid">{feature_cards(features)}</div>
        </section>
    }
}

#[component]
fn RelaunchPage(on_close: Callback<()>) -> impl IntoView {
    view! {
        <div data-ui-slot="relaunch-page">
            <button
                type="button"
                data-ui-slot="mobile-close"
                aria-label="Close browser"
                on:click=move |_| on_close.call(())
            >
                "\u{2715}"
            </button>
            <nav data-ui-slot="relaunch-nav">
                <div data-ui-slot="relaunch-brand">
                    <span aria-hidden="true">"\u{1F402}"</span>
                    <span>"Bullish Cafe"</span>
                </div>
                <div data-ui-slot="relaunch-status">"Strategic Relaunch in Progress"</div>
            </nav>

            <section data-ui-slot="relaunch-hero">
                <div data-ui-slot="relaunch-badge">"Something Revolutionary is Brewing"</div>
                <h1>
                    <span>"WE'RE"</span>
                    <span data-ui-slot="relaunch-accent">"EVOLVING"</span>
                </h1>
                <p>
                    "Bullish Cafe is undergoing a "
                    <strong>"strategic transformation"</strong>
                    " that will redefine how coffee meets cryptocurrency"
                </p>
                <div data-ui-slot="feature-grid">{feature_cards(&HERO_FEATURES)}</div>
            </section>

            <section data-ui-slot="launch-timeline">
                <h2>"Launch Timeline"</h2>
                <div data-ui-slot="launch-date">"JULY 2025"</div>
                <p>
                    "We're not just reopening, we're launching the most advanced crypto-coffee platform ever created. "
                    "Every detail is being perfected to deliver an experience that's never been seen before."
                </p>
                <div data-ui-slot="feature-grid">{feature_cards(&TIMELINE)}</div>
            </section>

            <section data-ui-slot="founders-club">
                <h2>"Bullish Cafe Founders Club"</h2>
                <p>
                    "Join an exclusive community of "
                    <strong>"55 founding members"</strong>
                    " who shape the future of premium coffee experiences"
                </p>
                <div data-ui-slot="cta-row">
                    <button type="button" data-ui-kind="primary">"Connect Wallet"</button>
                    <button type="button" data-ui-kind="secondary">"Learn More"</button>
                </div>
                <div data-ui-slot="legal-note">
                    <h3>"Revenue Share Legal Information"</h3>
                    <p>
                        "The 5% revenue share is distributed quarterly among Founder NFT holders in BREW tokens or XRP. "
                        "This is not an investment contract and does not represent ownership in Bullish Cafe."
                    </p>
                    <button type="button" data-ui-kind="link">"View Full Disclaimer"</button>
                </div>
            </section>

            <FeatureSection
                title="Core Founder Benefits"
                subtitle="Exclusive perks and privileges for our founding members"
                features={&FOUNDER_BENEFITS}
            />
            <FeatureSection
                title="Premium Coffee Benefits"
                subtitle="Exceptional coffee experiences reserved for founders"
                features={&COFFEE_BENEFITS}
            />
            <FeatureSection
                title="Community & Governance"
                subtitle="Shape the future of Bullish Beans"
                features={&GOVERNANCE}
            />

            <section data-ui-slot="relaunch-cta">
                <h2>"Don't Miss the Revolution"</h2>
                <p>
                    "This isn't just a relaunch, it's the birth of an entirely new industry. "
                    "Be among the first to experience the future of coffee."
                </p>
                <div data-ui-slot="cta-row">
                    <button type="button" data-ui-kind="primary">"Get VIP Early Access"</button>
                    <button type="button" data-ui-kind="secondary">"Join the Community"</button>
                </div>
                <p data-ui-slot="relaunch-footer">
                    "\u{A9} 2024 Bullish Cafe \u{2022} Revolutionizing Coffee Through Blockchain Technology"
                </p>
            </section>
        </div>
    }
}

#[component]
pub(super) fn BrowserOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let stage = create_memo(move |_| state.get().browser.stage);
    let progress = create_memo(move |_| state.get().browser.loading_progress);
    let close = close_app_callback(AppId::Browser);

    view! {
        <Show when=move || stage.get() != OverlayStage::Closed fallback=|| ()>
            <div data-ui-slot="browser-overlay">
                <div
                    data-ui-slot="browser-backdrop"
                    on:click=move |_| close.call(())
                ></div>
                <div
                    role="dialog"
                    aria-label="Browser"
                    data-ui-slot="browser-window"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div data-ui-slot="browser-toolbar">
                        <TitleBar title="Bullish Cafe" on_close=close />
                        <div data-ui-slot="browser-nav" aria-hidden="true">
                            <span data-ui-kind="back"></span>
                            <span data-ui-kind="forward"></span>
                            <span data-ui-kind="reload"></span>
                        </div>
                        <div data-ui-slot="address-bar">
                            <span data-ui-kind="secure" aria-hidden="true"></span>
                            <span>{BROWSER_ADDRESS}</span>
                        </div>
                    </div>
                    <Show when=move || stage.get() == OverlayStage::Loading fallback=|| ()>
                        <div data-ui-slot="browser-progress">
                            <div
                                data-ui-slot="browser-progress-fill"
                                style=move || format!("width:{}%;", progress.get())
                            ></div>
                        </div>
                    </Show>
                    <div data-ui-slot="browser-content">
                        <Show
                            when=move || stage.get() == OverlayStage::Ready
                            fallback=|| view! {
                                <div data-ui-slot="browser-spinner">
                                    <div data-ui-kind="spinner" aria-hidden="true"></div>
                                    <p>"Loading Bullish Cafe..."</p>
                                </div>
                            }
                        >
                            <RelaunchPage on_close=close />
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
