//! Boot script embedded from `boot_sequence.toml` at build time.

use thiserror::Error;

use crate::model::BootCommand;

include!(concat!(env!("OUT_DIR"), "/boot_script_generated.rs"));

#[derive(Debug, Error)]
pub enum BootScriptError {
    #[error("boot script is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("boot script command #{index} has empty text")]
    EmptyCommand { index: usize },
}

/// Parses a JSON array of [`BootCommand`] values.
///
/// # Errors
///
/// Returns [`BootScriptError`] when the payload does not decode or a command is blank.
pub fn parse_boot_script(raw: &str) -> Result<Vec<BootCommand>, BootScriptError> {
    let script: Vec<BootCommand> = serde_json::from_str(raw)?;
    if let Some(index) = script
        .iter()
        .position(|command| command.command.trim().is_empty())
    {
        return Err(BootScriptError::EmptyCommand { index });
    }
    Ok(script)
}

/// Returns the script shipped with the site.
///
/// # Errors
///
/// See [`parse_boot_script`].
pub fn builtin_boot_script() -> Result<Vec<BootCommand>, BootScriptError> {
    parse_boot_script(BOOT_SCRIPT_JSON)
}

/// Divides every reveal delay in `script` by `factor`.
pub fn accelerate_script(mut script: Vec<BootCommand>, factor: u64) -> Vec<BootCommand> {
    let factor = factor.max(1);
    for command in &mut script {
        command.delay_ms /= factor;
    }
    script
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::CommandSeverity;

    #[test]
    fn builtin_script_starts_with_rebrand_service() {
        let script = builtin_boot_script().expect("builtin script");
        assert_eq!(script.len(), 4);
        assert_eq!(
            script[0].command,
            "sudo systemctl start bullish-cafe-rebrand.service"
        );
        assert_eq!(script[0].delay_ms, 500);
        assert_eq!(script[1].severity, CommandSeverity::Info);
        assert_eq!(script[3].output.len(), 9);
    }

    #[test]
    fn blank_command_is_rejected() {
        let err = parse_boot_script(r#"[{"command":"  ","delay_ms":0,"severity":"info"}]"#)
            .expect_err("blank command");
        assert!(matches!(err, BootScriptError::EmptyCommand { index: 0 }));
    }

    #[test]
    fn unknown_severity_is_a_parse_error() {
        let err = parse_boot_script(r#"[{"command":"ls","delay_ms":0,"severity":"fatal"}]"#)
            .expect_err("bad severity");
        assert!(matches!(err, BootScriptError::Parse(_)));
    }

    #[test]
    fn acceleration_divides_reveal_delays_only() {
        let script = accelerate_script(builtin_boot_script().expect("builtin script"), 10);
        let delays: Vec<u64> = script.iter().map(|command| command.delay_ms).collect();
        assert_eq!(delays, vec![50, 150, 250, 400]);
        assert_eq!(script[2].output.len(), 6);
        assert_eq!(accelerate_script(script.clone(), 0), script);
    }
}
