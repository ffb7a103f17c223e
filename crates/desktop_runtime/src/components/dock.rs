use super::*;

/// Dock order, left to right.
const DOCK_APPS: [(AppId, &str); 10] = [
    (AppId::Spotlight, "search"),
    (AppId::Terminal, "terminal"),
    (AppId::Coffee, "coffee"),
    (AppId::Mail, "mail"),
    (AppId::Calendar, "calendar"),
    (AppId::Camera, "camera"),
    (AppId::Music, "music"),
    (AppId::Calculator, "calculator"),
    (AppId::Browser, "globe"),
    (AppId::Preferences, "settings"),
];

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let active_app = create_memo(move |_| state.get().active_app);

    view! {
        <nav data-ui-slot="dock" aria-label="Dock">
            {DOCK_APPS
                .into_iter()
                .map(|(app, icon)| {
                    view! {
                        <button
                            type="button"
                            data-ui-slot="dock-icon"
                            data-ui-kind=icon
                            title=app.title()
                            aria-label=app.title()
                            data-active=move || (active_app.get() == app).to_string()
                            on:click=move |_| runtime.dispatch_action(DesktopAction::OpenApp(app))
                        >
                            <span data-ui-slot="dock-icon-image" aria-hidden="true"></span>
                            <span data-ui-slot="dock-indicator" aria-hidden="true"></span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
