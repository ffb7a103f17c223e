//! Sequencer timing constants and the desktop route's launch options.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{AppId, UnknownAppError};

/// Delay and step configuration for every timer the sequencer arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerTiming {
    pub typing_interval_ms: u64,
    /// Fade-in delay applied by the terminal view once output is revealed.
    pub output_fade_delay_ms: u64,
    pub command_settle_ms: u64,
    pub boot_settle_ms: u64,
    pub loading_tick_ms: u64,
    pub loading_step: u8,
    pub loading_settle_ms: u64,
    pub redirect_countdown: u8,
    pub countdown_tick_ms: u64,
    pub browser_tick_ms: u64,
    pub browser_step: u8,
    pub browser_content_delay_ms: u64,
}

impl Default for SequencerTiming {
    fn default() -> Self {
        Self {
            typing_interval_ms: 30,
            output_fade_delay_ms: 1000,
            command_settle_ms: 1500,
            boot_settle_ms: 2000,
            loading_tick_ms: 100,
            loading_step: 2,
            loading_settle_ms: 1000,
            redirect_countdown: 3,
            countdown_tick_ms: 1000,
            browser_tick_ms: 50,
            browser_step: 8,
            browser_content_delay_ms: 500,
        }
    }
}

impl SequencerTiming {
    /// Divides every delay by `factor`. Steps and the countdown start are unchanged.
    pub fn accelerated(self, factor: u64) -> Self {
        let factor = factor.max(1);
        Self {
            typing_interval_ms: self.typing_interval_ms / factor,
            output_fade_delay_ms: self.output_fade_delay_ms / factor,
            command_settle_ms: self.command_settle_ms / factor,
            boot_settle_ms: self.boot_settle_ms / factor,
            loading_tick_ms: self.loading_tick_ms / factor,
            loading_settle_ms: self.loading_settle_ms / factor,
            countdown_tick_ms: self.countdown_tick_ms / factor,
            browser_tick_ms: self.browser_tick_ms / factor,
            browser_content_delay_ms: self.browser_content_delay_ms / factor,
            ..self
        }
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn command_settle(&self) -> Duration {
        Duration::from_millis(self.command_settle_ms)
    }

    pub fn boot_settle(&self) -> Duration {
        Duration::from_millis(self.boot_settle_ms)
    }

    pub fn loading_tick(&self) -> Duration {
        Duration::from_millis(self.loading_tick_ms)
    }

    pub fn loading_settle(&self) -> Duration {
        Duration::from_millis(self.loading_settle_ms)
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn browser_tick(&self) -> Duration {
        Duration::from_millis(self.browser_tick_ms)
    }

    pub fn browser_content_delay(&self) -> Duration {
        Duration::from_millis(self.browser_content_delay_ms)
    }
}

/// Delay divisor used by `boot=skip`.
pub const SKIP_BOOT_ACCELERATION: u64 = 10;

/// Options read from the desktop route's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    pub timing: SequencerTiming,
    /// Divisor applied to the boot script's reveal delays.
    pub acceleration: u64,
    /// Start the boot sequence as soon as the shell mounts.
    pub autostart: bool,
    /// Apps opened right after mount, in order.
    pub open: Vec<AppId>,
    /// Names from `open=` that did not parse.
    pub rejected: Vec<UnknownAppError>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            timing: SequencerTiming::default(),
            acceleration: 1,
            autostart: true,
            open: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Parses launch options from a query string such as `?open=mail,finder&boot=skip`.
pub fn parse_launch_options_from_query(query: &str) -> LaunchOptions {
    let mut options = LaunchOptions::default();

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "open" => {
                for name in value.split(',').filter(|name| !name.trim().is_empty()) {
                    match name.parse::<AppId>() {
                        Ok(app) if !options.open.contains(&app) => options.open.push(app),
                        Ok(_) => {}
                        Err(err) => options.rejected.push(err),
                    }
                }
            }
            "boot" => match value.trim() {
                "skip" => {
                    options.timing = SequencerTiming::default().accelerated(SKIP_BOOT_ACCELERATION);
                    options.acceleration = SKIP_BOOT_ACCELERATION;
                }
                "manual" => options.autostart = false,
                _ => {}
            },
            _ => {}
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_query_uses_default_timing_and_autostarts() {
        assert_eq!(parse_launch_options_from_query(""), LaunchOptions::default());
        assert_eq!(parse_launch_options_from_query("?"), LaunchOptions::default());
    }

    #[test]
    fn open_list_deduplicates_and_collects_unknown_names() {
        let options = parse_launch_options_from_query("?open=Mail,finder,mail,warp&x=1");
        assert_eq!(options.open, vec![AppId::Mail, AppId::Finder]);
        assert_eq!(options.rejected, vec![UnknownAppError("warp".to_string())]);
        assert!(options.autostart);
    }

    #[test]
    fn boot_skip_accelerates_delays_but_keeps_steps() {
        let options = parse_launch_options_from_query("boot=skip");
        assert_eq!(options.timing.typing_interval_ms, 3);
        assert_eq!(options.timing.boot_settle_ms, 200);
        assert_eq!(options.timing.loading_step, 2);
        assert_eq!(options.timing.redirect_countdown, 3);
        assert_eq!(options.acceleration, SKIP_BOOT_ACCELERATION);
    }

    #[test]
    fn boot_manual_disables_autostart() {
        let options = parse_launch_options_from_query("?boot=manual&open=browser");
        assert!(!options.autostart);
        assert_eq!(options.open, vec![AppId::Browser]);
    }

    #[test]
    fn timing_deserializes_partial_overrides() {
        let timing: SequencerTiming =
            serde_json::from_str(r#"{ "loading_step": 5 }"#).expect("timing json");
        assert_eq!(timing.loading_step, 5);
        assert_eq!(timing.loading_tick_ms, 100);
    }
}
