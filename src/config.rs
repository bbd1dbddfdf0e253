use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::stepper::{StepDescriptor, StepIconStyleOverrides, StepperOptions};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub stepper: StepperConfig,
    /// Style overrides applied to every step icon
    #[serde(default)]
    pub style: StepIconStyleOverrides,
    pub ui: UiConfig,
    pub paths: PathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepperConfig {
    /// Step count; defaults to the number of configured steps
    #[serde(default)]
    pub number_of_steps: Option<usize>,
    #[serde(default)]
    pub active_step: i64,
    #[serde(default = "default_true")]
    pub show_buttons: bool,
    #[serde(default)]
    pub all_completed: bool,
    #[serde(default)]
    pub prev_button_disabled: bool,
    #[serde(default)]
    pub next_button_disabled: bool,
    #[serde(default)]
    pub submit_button_disabled: bool,
    /// Step descriptors; the built-in demo sequence is used when empty
    #[serde(default)]
    pub steps: Vec<StepDescriptor>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the shortcut footer under the button row
    #[serde(default = "default_true")]
    pub show_help: bool,
}

fn default_tick_rate() -> u64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub state: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_true")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
        }
    }
}

impl Config {
    /// Project-local config file
    pub fn local_config_path() -> PathBuf {
        PathBuf::from("stepview.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Embedded defaults so the demo runs without any config file
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        // User config in ~/.config/stepview/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("stepview").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        let local_config = Self::local_config_path();
        if local_config.exists() {
            builder = builder.add_source(config::File::from(local_config));
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables with STEPVIEW_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("STEPVIEW")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Save config as TOML
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Configured steps, or the demo sequence when none are configured
    pub fn effective_steps(&self) -> Vec<StepDescriptor> {
        if self.stepper.steps.is_empty() {
            demo_steps()
        } else {
            self.stepper.steps.clone()
        }
    }

    /// Declarative options for the stepper. Not validated here.
    pub fn stepper_options(&self) -> StepperOptions {
        let s = &self.stepper;
        StepperOptions {
            number_of_steps: s
                .number_of_steps
                .unwrap_or_else(|| self.effective_steps().len()),
            active_step: s.active_step,
            show_buttons: s.show_buttons,
            all_completed: s.all_completed,
            prev_button_disabled: s.prev_button_disabled,
            next_button_disabled: s.next_button_disabled,
            submit_button_disabled: s.submit_button_disabled,
            step_props: self.style.clone(),
        }
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.paths.state);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stepper: StepperConfig {
                number_of_steps: None,
                active_step: 0,
                show_buttons: true,
                all_completed: false,
                prev_button_disabled: false,
                next_button_disabled: false,
                submit_button_disabled: false,
                steps: Vec::new(), // Demo steps applied in effective_steps()
            },
            style: StepIconStyleOverrides::default(),
            ui: UiConfig {
                tick_rate_ms: default_tick_rate(),
                show_help: true,
            },
            paths: PathsConfig {
                state: ".stepview".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Three-step sequence shown when no steps are configured
pub fn demo_steps() -> Vec<StepDescriptor> {
    vec![
        StepDescriptor::new("Account")
            .with_body([
                "Pick a display name for your account.",
                "Press Tab to type, Esc when you are done.",
            ])
            .with_input(),
        StepDescriptor::new("Details")
            .with_body([
                "Add a short note about yourself.",
                "The buttons step aside while the input has focus.",
            ])
            .with_input(),
        StepDescriptor::new("Review").with_body([
            "Everything is in place.",
            "Press Enter on Submit to finish.",
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_builds_valid_stepper() {
        let config = Config::default();
        let options = config.stepper_options();
        assert_eq!(options.number_of_steps, 3);
        assert_eq!(options.validate(), Ok(0));
        assert!(options.show_buttons);
    }

    #[test]
    fn test_explicit_step_count_wins() {
        let mut config = Config::default();
        config.stepper.number_of_steps = Some(5);
        assert_eq!(config.stepper_options().number_of_steps, 5);
    }

    #[test]
    fn test_logs_path_under_state() {
        let mut config = Config::default();
        config.paths.state = "/tmp/stepview-state".to_string();
        assert_eq!(config.logs_path(), PathBuf::from("/tmp/stepview-state/logs"));
    }

    #[test]
    fn test_load_with_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wizard.toml");
        std::fs::write(
            &path,
            r##"
[stepper]
active_step = 1
all_completed = true

[[stepper.steps]]
label = "One"

[[stepper.steps]]
label = "Two"
body = ["second page"]

[style]
progress_bar_size = 3
label_color = "#112233"

[ui]
tick_rate_ms = 50
"##,
        )
        .unwrap();

        let config = Config::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.stepper.steps.len(), 2);
        assert_eq!(config.stepper.steps[1].body, vec!["second page".to_string()]);

        let options = config.stepper_options();
        assert_eq!(options.number_of_steps, 2);
        assert_eq!(options.active_step, 1);
        assert!(options.all_completed);
        assert_eq!(options.step_props.progress_bar_size, Some(3));
        assert_eq!(options.step_props.label_color, Some(Color::Rgb(0x11, 0x22, 0x33)));
    }

    #[test]
    fn test_save_round_trips_through_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.stepper.active_step = 2;
        config.stepper.steps = demo_steps();
        config.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.stepper.active_step, 2);
        assert_eq!(parsed.stepper.steps, demo_steps());
    }

    #[test]
    fn test_demo_steps_have_inputs_on_first_two_pages() {
        let steps = demo_steps();
        assert_eq!(steps.len(), 3);
        assert!(steps[0].input);
        assert!(steps[1].input);
        assert!(!steps[2].input);
    }
}
