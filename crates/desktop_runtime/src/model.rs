use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timers::TimerTable;
use crate::timing::SequencerTiming;

/// Percentage value used by both progress bars.
pub const PROGRESS_COMPLETE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AppId {
    Finder,
    Terminal,
    Spotlight,
    Coffee,
    Network,
    Mail,
    Calendar,
    Camera,
    Music,
    Calculator,
    Browser,
    Preferences,
    About,
}

/// App focused when nothing else is open.
pub const DEFAULT_APP: AppId = AppId::Finder;
/// App focused when the page loads.
pub const INITIAL_APP: AppId = AppId::Terminal;
/// App opened by the launcher shortcut.
pub const LAUNCHER_APP: AppId = AppId::Spotlight;

impl AppId {
    pub const ALL: [AppId; 13] = [
        Self::Finder,
        Self::Terminal,
        Self::Spotlight,
        Self::Coffee,
        Self::Network,
        Self::Mail,
        Self::Calendar,
        Self::Camera,
        Self::Music,
        Self::Calculator,
        Self::Browser,
        Self::Preferences,
        Self::About,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Finder => "Finder",
            Self::Terminal => "Terminal",
            Self::Spotlight => "Spotlight",
            Self::Coffee => "Coffee",
            Self::Network => "Network",
            Self::Mail => "Mail",
            Self::Calendar => "Calendar",
            Self::Camera => "Camera",
            Self::Music => "Music",
            Self::Calculator => "Calculator",
            Self::Browser => "Browser",
            Self::Preferences => "Preferences",
            Self::About => "About",
        }
    }

    pub fn is_browser(self) -> bool {
        matches!(self, Self::Browser)
    }

    /// Dialog overlay shown while this app is open, if it has one.
    pub fn dialog(self) -> Option<DialogId> {
        match self {
            Self::About => Some(DialogId::About),
            Self::Preferences => Some(DialogId::Preferences),
            Self::Calculator => Some(DialogId::Calculator),
            Self::Mail => Some(DialogId::Mail),
            Self::Calendar => Some(DialogId::Calendar),
            Self::Camera => Some(DialogId::Camera),
            Self::Music => Some(DialogId::Music),
            Self::Finder => Some(DialogId::Finder),
            Self::Terminal | Self::Spotlight | Self::Coffee | Self::Network | Self::Browser => {
                None
            }
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown application `{0}`")]
pub struct UnknownAppError(pub String);

impl FromStr for AppId {
    type Err = UnknownAppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        if needle == "safari" {
            return Ok(Self::Browser);
        }
        Self::ALL
            .into_iter()
            .find(|app| app.title().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| UnknownAppError(raw.trim().to_string()))
    }
}

/// Modal-style overlays. Declaration order is the order `Escape` scans them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DialogId {
    About,
    Preferences,
    Calculator,
    Mail,
    Calendar,
    Camera,
    Music,
    Finder,
}

impl DialogId {
    pub const ALL: [DialogId; 8] = [
        Self::About,
        Self::Preferences,
        Self::Calculator,
        Self::Mail,
        Self::Calendar,
        Self::Camera,
        Self::Music,
        Self::Finder,
    ];

    pub fn app(self) -> AppId {
        match self {
            Self::About => AppId::About,
            Self::Preferences => AppId::Preferences,
            Self::Calculator => AppId::Calculator,
            Self::Mail => AppId::Mail,
            Self::Calendar => AppId::Calendar,
            Self::Camera => AppId::Camera,
            Self::Music => AppId::Music,
            Self::Finder => AppId::Finder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogVisibility(BTreeMap<DialogId, bool>);

impl Default for DialogVisibility {
    fn default() -> Self {
        Self(DialogId::ALL.into_iter().map(|id| (id, false)).collect())
    }
}

impl DialogVisibility {
    pub fn is_visible(&self, dialog: DialogId) -> bool {
        self.0.get(&dialog).copied().unwrap_or(false)
    }

    pub fn set(&mut self, dialog: DialogId, visible: bool) {
        self.0.insert(dialog, visible);
    }

    /// First visible dialog in declaration order.
    pub fn first_visible(&self) -> Option<DialogId> {
        self.0
            .iter()
            .find_map(|(dialog, visible)| visible.then_some(*dialog))
    }

    pub fn visible(&self) -> impl Iterator<Item = DialogId> + '_ {
        self.0
            .iter()
            .filter_map(|(dialog, visible)| visible.then_some(*dialog))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppMenu {
    File,
    Edit,
    View,
    Window,
    Help,
}

impl AppMenu {
    pub const ALL: [AppMenu; 5] = [Self::File, Self::Edit, Self::View, Self::Window, Self::Help];

    pub fn label(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Edit => "Edit",
            Self::View => "View",
            Self::Window => "Window",
            Self::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuState {
    pub apple_menu_open: bool,
    pub active_app_menu: Option<AppMenu>,
}

impl MenuState {
    pub fn any_open(&self) -> bool {
        self.apple_menu_open || self.active_app_menu.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandSeverity {
    System,
    Success,
    Warning,
    Error,
    Info,
}

impl CommandSeverity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::System => "severity-system",
            Self::Success => "severity-success",
            Self::Warning => "severity-warning",
            Self::Error => "severity-error",
            Self::Info => "severity-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootCommand {
    pub command: String,
    #[serde(default)]
    pub output: Vec<String>,
    pub delay_ms: u64,
    pub severity: CommandSeverity,
}

impl BootCommand {
    pub fn new(command: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            command: command.into(),
            output: Vec::new(),
            delay_ms,
            severity: CommandSeverity::System,
        }
    }

    pub fn with_output<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.output = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn char_len(&self) -> usize {
        self.command.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencePhase {
    Boot,
    Loading,
    Complete,
}

impl SequencePhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Loading => "loading",
            Self::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommandCursor {
    pub index: usize,
    pub command_revealed: bool,
    pub output_revealed: bool,
    pub typed_chars: usize,
    pub completion_signaled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayStage {
    Closed,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserOverlayState {
    pub stage: OverlayStage,
    pub manually_closed: bool,
    pub loading_progress: u8,
}

impl Default for BrowserOverlayState {
    fn default() -> Self {
        Self {
            stage: OverlayStage::Closed,
            manually_closed: false,
            loading_progress: 0,
        }
    }
}

impl BrowserOverlayState {
    pub fn is_open(&self) -> bool {
        self.stage != OverlayStage::Closed
    }

    pub fn content_ready(&self) -> bool {
        self.stage == OverlayStage::Ready
    }
}

/// Adds `step` to a percentage, never passing 100.
pub fn advance_percent(current: u8, step: u8) -> u8 {
    current.saturating_add(step).min(PROGRESS_COMPLETE)
}

/// One command as the terminal window should draw it right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleCommand<'a> {
    pub index: usize,
    pub text: String,
    pub typing: bool,
    pub output: Option<&'a [String]>,
    pub severity: CommandSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub script: Vec<BootCommand>,
    pub timing: SequencerTiming,
    pub started: bool,
    pub torn_down: bool,
    pub phase: SequencePhase,
    pub cursor: CommandCursor,
    pub loading_progress: u8,
    pub redirect_countdown: u8,
    pub open_windows: Vec<AppId>,
    pub active_app: AppId,
    pub dialogs: DialogVisibility,
    pub browser: BrowserOverlayState,
    pub menus: MenuState,
    pub timers: TimerTable,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(Vec::new(), SequencerTiming::default())
    }
}

impl DesktopState {
    pub fn new(script: Vec<BootCommand>, timing: SequencerTiming) -> Self {
        Self {
            redirect_countdown: timing.redirect_countdown,
            script,
            timing,
            started: false,
            torn_down: false,
            phase: SequencePhase::Boot,
            cursor: CommandCursor::default(),
            loading_progress: 0,
            open_windows: Vec::new(),
            active_app: INITIAL_APP,
            dialogs: DialogVisibility::default(),
            browser: BrowserOverlayState::default(),
            menus: MenuState::default(),
            timers: TimerTable::default(),
        }
    }

    pub fn current_command(&self) -> Option<&BootCommand> {
        self.script.get(self.cursor.index)
    }

    pub fn is_app_open(&self, app: AppId) -> bool {
        self.open_windows.contains(&app)
    }

    /// Commands revealed so far, earlier ones in full and the current one as typed.
    pub fn visible_commands(&self) -> Vec<VisibleCommand<'_>> {
        if self.phase != SequencePhase::Boot {
            return Vec::new();
        }
        let current = self.cursor.index;
        self.script
            .iter()
            .enumerate()
            .take(current.saturating_add(1))
            .filter(|(index, _)| *index < current || self.cursor.command_revealed)
            .map(|(index, cmd)| {
                if index < current {
                    VisibleCommand {
                        index,
                        text: cmd.command.clone(),
                        typing: false,
                        output: Some(cmd.output.as_slice()),
                        severity: cmd.severity,
                    }
                } else {
                    VisibleCommand {
                        index,
                        text: cmd.command.chars().take(self.cursor.typed_chars).collect(),
                        typing: !self.cursor.completion_signaled,
                        output: self
                            .cursor
                            .output_revealed
                            .then_some(cmd.output.as_slice()),
                        severity: cmd.severity,
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_names_parse_case_insensitively_with_safari_alias() {
        assert_eq!("terminal".parse::<AppId>(), Ok(AppId::Terminal));
        assert_eq!(" MAIL ".parse::<AppId>(), Ok(AppId::Mail));
        assert_eq!("Safari".parse::<AppId>(), Ok(AppId::Browser));
        assert_eq!(
            "Photoshop".parse::<AppId>(),
            Err(UnknownAppError("Photoshop".to_string()))
        );
    }

    #[test]
    fn every_dialog_maps_back_to_its_app() {
        for dialog in DialogId::ALL {
            assert_eq!(dialog.app().dialog(), Some(dialog));
        }
        assert_eq!(AppId::Terminal.dialog(), None);
        assert_eq!(AppId::Browser.dialog(), None);
    }

    #[test]
    fn first_visible_dialog_follows_declaration_order() {
        let mut dialogs = DialogVisibility::default();
        assert_eq!(dialogs.first_visible(), None);

        dialogs.set(DialogId::Finder, true);
        dialogs.set(DialogId::Mail, true);
        assert_eq!(dialogs.first_visible(), Some(DialogId::Mail));
        assert_eq!(
            dialogs.visible().collect::<Vec<_>>(),
            vec![DialogId::Mail, DialogId::Finder]
        );
    }

    #[test]
    fn advance_percent_clamps_at_complete() {
        assert_eq!(advance_percent(0, 2), 2);
        assert_eq!(advance_percent(99, 8), 100);
        assert_eq!(advance_percent(96, 8), 100);
        assert_eq!(advance_percent(100, 8), 100);
        assert_eq!(advance_percent(250, 8), 100);
    }

    #[test]
    fn visible_commands_show_typed_prefix_for_current_command() {
        let mut state = DesktopState::new(
            vec![
                BootCommand::new("ls", 0).with_output(["a.txt"]),
                BootCommand::new("brew ☕", 0).with_output(["ok"]),
            ],
            SequencerTiming::default(),
        );
        assert!(state.visible_commands().is_empty());

        state.cursor = CommandCursor {
            index: 1,
            command_revealed: true,
            output_revealed: false,
            typed_chars: 6,
            completion_signaled: false,
        };
        let visible = state.visible_commands();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].text, "ls");
        assert_eq!(visible[0].output, Some(&["a.txt".to_string()][..]));
        assert_eq!(visible[1].text, "brew ☕");
        assert!(visible[1].typing);
        assert_eq!(visible[1].output, None);
    }
}
