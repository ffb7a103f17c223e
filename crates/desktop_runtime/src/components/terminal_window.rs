use super::*;
use crate::model::SequencePhase;

#[component]
fn BootTranscript() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div data-ui-slot="boot-transcript">
            {move || {
                let desktop = state.get();
                let current = desktop.cursor.index;
                let fade_delay_ms = desktop.timing.output_fade_delay_ms;
                desktop
                    .visible_commands()
                    .into_iter()
                    .map(|command| {
                        let delay_ms = if command.index == current { fade_delay_ms } else { 0 };
                        let typing = command.typing;
                        let output = command.output.map(|lines| {
                            let lines = lines
                                .iter()
                                .map(|line| view! { <div data-ui-slot="command-output-line">{line.clone()}</div> })
                                .collect_view();
                            view! {
                                <div
                                    data-ui-slot="command-output"
                                    style=format!("animation-delay:{delay_ms}ms;")
                                >
                                    {lines}
                                </div>
                            }
                        });
                        view! {
                            <div data-ui-slot="boot-command" class=command.severity.css_class()>
                                <div data-ui-slot="command-line">
                                    <span data-ui-slot="prompt">"$"</span>
                                    <span data-ui-slot="command-text">{command.text}</span>
                                    <Show when=move || typing fallback=|| ()>
                                        <span data-ui-slot="cursor" aria-hidden="true">"\u{258B}"</span>
                                    </Show>
                                </div>
                                {output}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn LoadingPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let progress = create_memo(move |_| state.get().loading_progress);

    view! {
        <div data-ui-slot="loading-panel">
            <h2>"\u{1F680} Bullish Cafe Transformation Complete!"</h2>
            <div
                data-ui-slot="progress-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=move || progress.get().to_string()
            >
                <div data-ui-slot="progress-fill" style=move || format!("width:{}%;", progress.get())></div>
            </div>
            <p>{move || loading_label(progress.get())}</p>
        </div>
    }
}

#[component]
fn CompletionBanner() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <div data-ui-slot="completion-banner">
            <div data-ui-slot="completion-emoji">"\u{1F389}"</div>
            <h2>"Welcome to the New Bullish Cafe!"</h2>
            <p>"Your crypto-coffee experience is ready to brew..."</p>
            <div data-ui-slot="redirect-countdown">{move || countdown_label(&state.get())}</div>
        </div>
    }
}

#[component]
pub(super) fn TerminalWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let phase = create_memo(move |_| state.get().phase);

    view! {
        <section data-ui-slot="terminal-window" aria-label="Terminal">
            <TitleBar title="Terminal \u{2014} zsh \u{2014} 120\u{D7}40" />
            <div data-ui-slot="terminal-content" data-phase=move || phase.get().label()>
                {move || match phase.get() {
                    SequencePhase::Boot => view! { <BootTranscript /> }.into_view(),
                    SequencePhase::Loading => view! { <LoadingPanel /> }.into_view(),
                    SequencePhase::Complete => view! { <CompletionBanner /> }.into_view(),
                }}
            </div>
        </section>
    }
}
