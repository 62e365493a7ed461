//! =============================================================================
//! Configuration And Settings
//! =============================================================================
//!
//! The codec itself has no knobs; these settings shape how the command-line
//! tool prints what it decoded. They can come from a JSON settings object or
//! from the environment.

use anyhow::anyhow;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Compact,
    Pretty,
}

impl OutputStyle {
    /// Unknown values fall back to compact output.
    pub fn from_str(value: &str) -> Self {
        match value {
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }

    pub fn render(self, value: &Value) -> serde_json::Result<String> {
        match self {
            Self::Compact => serde_json::to_string(value),
            Self::Pretty => serde_json::to_string_pretty(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolSettings {
    pub output: OutputStyle,
    /// Print the name of the decoded variant on stderr.
    pub report_variant: bool,
}

#[derive(Debug, Default)]
pub struct Config {
    tool: ToolSettings,
}

impl Config {
    pub fn new(tool: ToolSettings) -> Self {
        Self { tool }
    }

    pub fn tool(&self) -> &ToolSettings {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut ToolSettings {
        &mut self.tool
    }

    /// Applies a settings object. Returns `true` when any recognized option
    /// changed.
    pub fn apply_settings(&mut self, settings: &Value) -> bool {
        apply_settings_tree(settings, &mut self.tool)
    }

    /// Reads `LSP_WIRE_PRETTY` and `LSP_WIRE_REPORT_VARIANT`.
    pub fn apply_env(&mut self) -> anyhow::Result<()> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    fn apply_env_with<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PRETTY) {
            self.tool.output = if parse_env_bool(ENV_PRETTY, &value)? {
                OutputStyle::Pretty
            } else {
                OutputStyle::Compact
            };
        }
        if let Some(value) = lookup(ENV_REPORT_VARIANT) {
            self.tool.report_variant = parse_env_bool(ENV_REPORT_VARIANT, &value)?;
        }
        Ok(())
    }
}

const ENV_PRETTY: &str = "LSP_WIRE_PRETTY";
const ENV_REPORT_VARIANT: &str = "LSP_WIRE_REPORT_VARIANT";

pub fn parse_env_bool(name: &str, value: &str) -> anyhow::Result<bool> {
    let lowered = value.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow!(
            "{name} must be one of 1,true,yes,on,0,false,no,off"
        )),
    }
}

fn apply_settings_tree(value: &Value, tool: &mut ToolSettings) -> bool {
    let mut changed = false;
    if let Some(map) = value.as_object() {
        changed |= tool.update_from_map(map);

        for key in POSSIBLE_SETTING_ROOTS {
            if let Some(candidate) = map.get(*key) {
                changed |= apply_settings_tree(candidate, tool);
            }
        }
    }
    changed
}

const POSSIBLE_SETTING_ROOTS: &[&str] = &["lsp-wire", "lspWire", "lsp_wire"];

impl ToolSettings {
    fn update_from_map(&mut self, map: &Map<String, Value>) -> bool {
        let mut changed = false;

        if let Some(value) = map.get("output").and_then(|v| v.as_str()) {
            let style = OutputStyle::from_str(value);
            if self.output != style {
                self.output = style;
                changed = true;
            }
        }

        if let Some(value) = map
            .get("report_variant")
            .or_else(|| map.get("reportVariant"))
            .and_then(|v| v.as_bool())
        {
            if self.report_variant != value {
                self.report_variant = value;
                changed = true;
            }
        }

        changed
    }
}
