use super::*;
use crate::model::AppMenu;

fn menu_items(menu: AppMenu) -> &'static [&'static str] {
    match menu {
        AppMenu::File => &["New Window", "New Tab", "-", "Open...", "Save", "-", "Close Window"],
        AppMenu::Edit => &["Undo", "Redo", "-", "Cut", "Copy", "Paste"],
        AppMenu::View => &["Show Toolbar", "Customize Toolbar...", "-", "Enter Full Screen"],
        AppMenu::Window | AppMenu::Help => &[],
    }
}

/// Dispatched after any item is chosen, whether or not it has its own handler.
const MENU_ITEM_CHOSEN: DesktopAction = DesktopAction::DismissMenus;

#[component]
fn MenuItem(
    label: String,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <button
            type="button"
            role="menuitem"
            data-ui-slot="menu-item"
            on:click=move |ev| {
                ev.stop_propagation();
                if let Some(on_select) = on_select {
                    on_select.call(());
                }
                runtime.dispatch_action(MENU_ITEM_CHOSEN);
            }
        >
            {label}
        </button>
    }
}

#[component]
fn AppleMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let force_quit_label = move || format!("Force Quit {}...", state.get().active_app.title());

    view! {
        <div
            id="desktop-apple-menu"
            role="menu"
            data-ui-slot="menu-dropdown"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <MenuItem label="About This Mac".to_string() on_select=open_app_callback(AppId::About) />
            <hr data-ui-slot="menu-separator" />
            <MenuItem
                label="System Preferences...".to_string()
                on_select=open_app_callback(AppId::Preferences)
            />
            <MenuItem label="App Store...".to_string() />
            <hr data-ui-slot="menu-separator" />
            <MenuItem label="Recent Items".to_string() />
            <hr data-ui-slot="menu-separator" />
            {move || view! { <MenuItem label=force_quit_label() /> }}
            <hr data-ui-slot="menu-separator" />
            <MenuItem label="Sleep".to_string() />
            <MenuItem label="Restart...".to_string() />
            <MenuItem label="Shut Down...".to_string() />
        </div>
    }
}

#[component]
fn AppMenuEntry(menu: AppMenu) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let items = menu_items(menu);
    let is_open = move || state.get().menus.active_app_menu == Some(menu);
    let has_popup = if items.is_empty() { "false" } else { "menu" };

    view! {
        <div data-ui-slot="app-menu">
            <button
                type="button"
                data-ui-slot="app-menu-label"
                aria-haspopup=has_popup
                aria-expanded=move || is_open().to_string()
                on:mousedown=move |ev| ev.stop_propagation()
                on:click=move |ev| {
                    ev.stop_propagation();
                    if !items.is_empty() {
                        runtime.dispatch_action(DesktopAction::ToggleAppMenu(menu));
                    }
                }
            >
                {menu.label()}
            </button>
            <Show when=is_open fallback=|| ()>
                <div role="menu" data-ui-slot="menu-dropdown" on:mousedown=move |ev| ev.stop_propagation()>
                    {items
                        .iter()
                        .map(|item| {
                            if *item == "-" {
                                view! { <hr data-ui-slot="menu-separator" /> }.into_view()
                            } else {
                                view! { <MenuItem label=item.to_string() /> }.into_view()
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn MenuBarClock() -> impl IntoView {
    let clock_now = create_rw_signal(MenuClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(MenuClockSnapshot::now()),
        CLOCK_REFRESH,
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <div data-ui-slot="menu-clock">
            <span data-ui-slot="menu-clock-compact">{move || clock_now.get().time_label()}</span>
            <span data-ui-slot="menu-clock-full">{move || clock_now.get().date_time_label()}</span>
        </div>
    }
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let apple_menu_open = move || state.get().menus.apple_menu_open;

    view! {
        <header data-ui-slot="menu-bar" role="menubar">
            <div data-ui-slot="menu-bar-left">
                <div data-ui-slot="apple-menu">
                    <button
                        type="button"
                        data-ui-slot="apple-menu-button"
                        aria-label="Apple menu"
                        aria-haspopup="menu"
                        aria-controls="desktop-apple-menu"
                        aria-expanded=move || apple_menu_open().to_string()
                        on:mousedown=move |ev| ev.stop_propagation()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            runtime.dispatch_action(DesktopAction::ToggleAppleMenu);
                        }
                    >
                        "\u{1F34E}"
                    </button>
                    <Show when=apple_menu_open fallback=|| ()>
                        <AppleMenu />
                    </Show>
                </div>
                <div data-ui-slot="active-app-name">{move || state.get().active_app.title()}</div>
                <nav data-ui-slot="app-menus">
                    {AppMenu::ALL
                        .into_iter()
                        .map(|menu| view! { <AppMenuEntry menu=menu /> })
                        .collect_view()}
                </nav>
            </div>
            <div data-ui-slot="menu-bar-right">
                <span data-ui-slot="status-icon" data-ui-kind="wifi" aria-label="Wi-Fi"></span>
                <span data-ui-slot="status-icon" data-ui-kind="battery" aria-label="Battery"></span>
                <MenuBarClock />
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_and_help_have_no_dropdown() {
        assert!(menu_items(AppMenu::Window).is_empty());
        assert!(menu_items(AppMenu::Help).is_empty());
        assert_eq!(menu_items(AppMenu::Edit).len(), 6);
        assert_eq!(menu_items(AppMenu::File).first(), Some(&"New Window"));
    }

    #[test]
    fn choosing_an_item_closes_the_open_dropdown() {
        let mut state = crate::model::DesktopState::default();
        crate::reducer::reduce_desktop(&mut state, DesktopAction::ToggleAppMenu(AppMenu::File));
        assert!(state.menus.any_open());

        crate::reducer::reduce_desktop(&mut state, MENU_ITEM_CHOSEN);
        assert!(!state.menus.any_open());
        assert_eq!(state.menus.active_app_menu, None);
    }
}
