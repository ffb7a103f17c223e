use super::*;
use crate::model::DialogId;

const PREFERENCE_PANES: [(&str, &str); 8] = [
    ("General", "\u{2699}\u{FE0F}"),
    ("Desktop & Screen Saver", "\u{1F5BC}\u{FE0F}"),
    ("Dock & Menu Bar", "\u{1F4F1}"),
    ("Mission Control", "\u{1F680}"),
    ("Siri", "\u{1F3A4}"),
    ("Spotlight", "\u{1F50D}"),
    ("Language & Region", "\u{1F30D}"),
    ("Notifications", "\u{1F514}"),
];

/// Keypad rows; an empty label is a spacer.
const CALCULATOR_KEYS: [&str; 20] = [
    "C", "\u{B1}", "%", "\u{F7}", "7", "8", "9", "\u{D7}", "4", "5", "6", "\u{2212}", "1", "2",
    "3", "+", "0", "", ".", "=",
];

fn calculator_key_kind(label: &str) -> &'static str {
    match label {
        "C" | "\u{B1}" | "%" => "function",
        "\u{F7}" | "\u{D7}" | "\u{2212}" | "+" | "=" => "operator",
        "0" => "wide",
        "" => "spacer",
        _ => "digit",
    }
}

const MAILBOXES: [&str; 4] = [
    "\u{1F4E5} Inbox (3)",
    "\u{1F4E4} Sent",
    "\u{1F4CB} Drafts",
    "\u{1F5D1}\u{FE0F} Trash",
];

#[component]
fn DialogFrame(dialog: DialogId, children: Children) -> impl IntoView {
    let app = dialog.app();
    view! {
        <div data-ui-slot="dialog-backdrop">
            <div
                role="dialog"
                aria-label=app.title()
                data-ui-slot="dialog-window"
                data-ui-kind=format!("{dialog:?}").to_lowercase()
            >
                <TitleBar title=app.title() on_close=close_app_callback(app) />
                <div data-ui-slot="dialog-body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
fn AboutDialog() -> impl IntoView {
    view! {
        <DialogFrame dialog=DialogId::About>
            <div data-ui-slot="about-logo">"\u{1F34E}"</div>
            <h2>"macOS Sonoma"</h2>
            <p>"Version 14.2.1 (23C71)"</p>
            <ul data-ui-slot="about-specs">
                <li>"MacBook Pro (16-inch, 2023)"</li>
                <li>"Apple M3 Max"</li>
                <li>"36 GB Memory"</li>
                <li>"Startup Disk: Macintosh HD"</li>
            </ul>
        </DialogFrame>
    }
}

#[component]
fn PreferencesDialog() -> impl IntoView {
    view! {
        <DialogFrame dialog=DialogId::Preferences>
            <div data-ui-slot="preference-grid">
                {PREFERENCE_PANES
                    .into_iter()
                    .map(|(name, icon)| {
                        view! {
                            <button type="button" data-ui-slot="preference-pane">
                                <span data-ui-slot="preference-icon">{icon}</span>
                                <span data-ui-slot="preference-name">{name}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </DialogFrame>
    }
}

#[component]
fn CalculatorDialog() -> impl IntoView {
    view! {
        <DialogFrame dialog=DialogId::Calculator>
            <div data-ui-slot="calculator-display">"0"</div>
            <div data-ui-slot="calculator-keypad">
                {CALCULATOR_KEYS
                    .into_iter()
                    .map(|label| {
                        view! {
                            <button
                                type="button"
                                data-ui-slot="calculator-key"
                                data-ui-kind=calculator_key_kind(label)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </DialogFrame>
    }
}

#[component]
fn MailDialog() -> impl IntoView {
    view! {
        <DialogFrame dialog=DialogId::Mail>
            <div data-ui-slot="mail-layout">
                <aside data-ui-slot="mailboxes">
                    <h3>"Mailboxes"</h3>
                    {MAILBOXES
                        .into_iter()
                        .map(|mailbox| view! { <div data-ui-slot="mailbox">{mailbox}</div> })
                        .collect_view()}
                </aside>
                <div data-ui-slot="mail-preview">
                    <p>"No messages selected"</p>
                </div>
            </div>
        </DialogFrame>
    }
}

#[component]
fn GenericAppDialog(dialog: DialogId) -> impl IntoView {
    view! {
        <DialogFrame dialog=dialog>
            <p data-ui-slot="generic-app-body">{format!("{} is brewing...", dialog.app().title())}</p>
        </DialogFrame>
    }
}

fn dialog_view(dialog: DialogId) -> View {
    match dialog {
        DialogId::About => view! { <AboutDialog /> }.into_view(),
        DialogId::Preferences => view! { <PreferencesDialog /> }.into_view(),
        DialogId::Calculator => view! { <CalculatorDialog /> }.into_view(),
        DialogId::Mail => view! { <MailDialog /> }.into_view(),
        DialogId::Calendar | DialogId::Camera | DialogId::Music | DialogId::Finder => {
            view! { <GenericAppDialog dialog=dialog /> }.into_view()
        }
    }
}

#[component]
pub(super) fn SystemDialogs() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div data-ui-slot="dialog-layer">
            {DialogId::ALL
                .into_iter()
                .map(|dialog| {
                    let visible = create_memo(move |_| state.get().dialogs.is_visible(dialog));
                    view! {
                        <Show when=move || visible.get() fallback=|| ()>
                            {dialog_view(dialog)}
                        </Show>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keypad_has_one_spacer_and_five_operators() {
        let kinds: Vec<&str> = CALCULATOR_KEYS
            .iter()
            .map(|label| calculator_key_kind(label))
            .collect();
        assert_eq!(kinds.iter().filter(|kind| **kind == "spacer").count(), 1);
        assert_eq!(kinds.iter().filter(|kind| **kind == "operator").count(), 5);
        assert_eq!(calculator_key_kind("0"), "wide");
    }
}
