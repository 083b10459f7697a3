use serde::Deserialize;
use std::path::Path;

/// Executable name of the interactive IDE host when nothing else is configured.
pub const DEFAULT_INTERACTIVE_EXECUTABLE: &str = "devenv";

/// All configurable settings with their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeSettings {
    pub interactive_executable: String,
    /// Extra frame prefixes hidden from reported stack traces.
    pub hidden_frames: Vec<String>,
}

impl Default for BridgeSettings {
    fn default() -> Self {
        Self {
            interactive_executable: DEFAULT_INTERACTIVE_EXECUTABLE.to_string(),
            hidden_frames: Vec::new(),
        }
    }
}

/// Raw JSON representation; every field is optional so files can override partially.
#[derive(Debug, Deserialize, Default)]
struct SettingsFile {
    #[serde(rename = "host.interactiveExecutable")]
    interactive_executable: Option<String>,
    #[serde(rename = "stackTrace.hiddenFrames")]
    hidden_frames: Option<Vec<String>>,
}

/// Resolve settings: defaults → user global → project-local.
pub fn resolve(project_root: Option<&Path>) -> BridgeSettings {
    let global_path = dirs::home_dir()
        .map(|h| h.join(".testbridge/settings.json"));
    let project_path = project_root
        .map(|r| r.join(".testbridge/settings.json"));
    resolve_with_paths(
        global_path.as_deref(),
        project_path.as_deref(),
    )
}

/// Testable resolver that accepts explicit file paths (no home dir dependency).
fn resolve_with_paths(
    global_path: Option<&Path>,
    project_path: Option<&Path>,
) -> BridgeSettings {
    let mut settings = BridgeSettings::default();

    if let Some(path) = global_path {
        apply_file(&mut settings, path);
    }
    if let Some(path) = project_path {
        apply_file(&mut settings, path);
    }

    settings
}

fn apply_file(settings: &mut BridgeSettings, path: &Path) {
    let Ok(content) = std::fs::read_to_string(path) else { return };
    let Ok(file) = serde_json::from_str::<SettingsFile>(&content) else {
        tracing::warn!("Invalid settings file, ignoring: {}", path.display());
        return;
    };
    if let Some(name) = file.interactive_executable {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!("host.interactiveExecutable is empty, using previous value");
        } else {
            settings.interactive_executable = name.to_string();
        }
    }
    if let Some(frames) = file.hidden_frames {
        // Layers accumulate; blank prefixes would hide every frame.
        settings.hidden_frames.extend(
            frames.into_iter()
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        );
    }
}
