use std::process::Stdio;

use tokio::process::Command;

/// Speak `text` through the system speech synthesizer and return once the
/// utterance has finished playing.
/// Uses `say` on macOS, `spd-say --wait` (speech-dispatcher) on Linux.
pub async fn speak(text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    #[cfg(target_os = "macos")]
    let (cmd, args): (&str, Vec<&str>) = ("say", vec![]);

    #[cfg(target_os = "linux")]
    let (cmd, args): (&str, Vec<&str>) = ("spd-say", vec!["--wait"]);

    let status = Command::new(cmd)
        .args(&args)
        .arg(text)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        // Aborting the speech task (feed stopped) must silence the child.
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|e| format!("Failed to spawn {cmd}: {e}"))?;

    if !status.success() {
        return Err(format!("{cmd} exited with status {status}").into());
    }

    Ok(())
}
