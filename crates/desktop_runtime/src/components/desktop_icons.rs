use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DesktopIcon {
    app: AppId,
    label: &'static str,
    kind: &'static str,
}

const DESKTOP_ICONS: [DesktopIcon; 3] = [
    DesktopIcon {
        app: AppId::Finder,
        label: "Documents",
        kind: "folder",
    },
    DesktopIcon {
        app: AppId::Coffee,
        label: "Bullish Cafe",
        kind: "coffee",
    },
    DesktopIcon {
        app: AppId::Network,
        label: "XRP Network",
        kind: "globe",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Notification {
    name: &'static str,
    description: &'static str,
    time: &'static str,
    icon: &'static str,
    color: &'static str,
}

const NOTIFICATIONS: [Notification; 4] = [
    Notification {
        name: "System Update",
        description: "macOS Sonoma 14.2.1",
        time: "2m ago",
        icon: "\u{2699}\u{FE0F}",
        color: "#007AFF",
    },
    Notification {
        name: "Bullish Cafe",
        description: "New menu items available",
        time: "5m ago",
        icon: "\u{2615}",
        color: "#FF9500",
    },
    Notification {
        name: "XRP Ledger",
        description: "Transaction confirmed",
        time: "8m ago",
        icon: "\u{1F48E}",
        color: "#00D4AA",
    },
    Notification {
        name: "Calendar",
        description: "Coffee tasting at 3 PM",
        time: "15m ago",
        icon: "\u{1F4C5}",
        color: "#FF3B30",
    },
];

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div data-ui-slot="desktop-icons">
            {DESKTOP_ICONS
                .into_iter()
                .map(|icon| {
                    let open = move |_: web_sys::MouseEvent| {
                        runtime.dispatch_action(DesktopAction::OpenApp(icon.app))
                    };
                    view! {
                        <button
                            type="button"
                            data-ui-slot="desktop-icon"
                            data-ui-kind=icon.kind
                            on:click=open
                            on:dblclick=open
                        >
                            <span data-ui-slot="desktop-icon-image" aria-hidden="true"></span>
                            <span data-ui-slot="desktop-icon-label">{icon.label}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub(super) fn NotificationCenter() -> impl IntoView {
    view! {
        <aside data-ui-slot="notification-center" aria-label="Notifications">
            <h3>"Notifications"</h3>
            <ul data-ui-slot="notification-list">
                {NOTIFICATIONS
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li data-ui-slot="notification">
                                <span
                                    data-ui-slot="notification-icon"
                                    style=format!("background-color:{};", item.color)
                                >
                                    {item.icon}
                                </span>
                                <div data-ui-slot="notification-body">
                                    <div data-ui-slot="notification-name">{item.name}</div>
                                    <div data-ui-slot="notification-description">{item.description}</div>
                                </div>
                                <time data-ui-slot="notification-time">{item.time}</time>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </aside>
    }
}
