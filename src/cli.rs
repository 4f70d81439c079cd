//! Command-line argument parsing for the replay binary
//!
//! Supports:
//! - Replaying a YAML input script against the panel engine
//! - Overriding the docking edge, viewport, and motion preference
//! - Text or JSON output
//! - Writing the resulting layout back to the config file

use clap::Parser;
use std::path::PathBuf;

use crate::animator::MotionPreference;
use crate::config::DockConfig;
use crate::panel::{Edge, Viewport};

/// Replay recorded input against the dockable panel engine
#[derive(Parser, Debug)]
#[command(name = "dockside", version, about = "Replay panel resize input headlessly")]
pub struct CliArgs {
    /// YAML script of pointer, click, and window events
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Dock the panel at this edge before replaying (bottom, left, right)
    #[arg(long, value_name = "EDGE", value_parser = parse_edge)]
    pub edge: Option<Edge>,

    /// Viewport size as WIDTHxHEIGHT (overrides the script)
    #[arg(long, value_name = "WxH", value_parser = parse_viewport)]
    pub viewport: Option<Viewport>,

    /// Apply every size change instantly
    #[arg(long)]
    pub reduced_motion: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file to read and write instead of the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Save the resulting layout to the config file
    #[arg(long)]
    pub persist: bool,
}

impl CliArgs {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, config: &mut DockConfig) {
        if let Some(edge) = self.edge {
            config.position = edge;
        }
        if self.reduced_motion {
            config.motion = MotionPreference::Reduced;
        }
    }
}

fn parse_edge(value: &str) -> Result<Edge, String> {
    match value.to_ascii_lowercase().as_str() {
        "bottom" => Ok(Edge::Bottom),
        "left" => Ok(Edge::Left),
        "right" => Ok(Edge::Right),
        other => Err(format!("unknown edge '{}' (expected bottom, left, or right)", other)),
    }
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;
    let width: f32 = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid width '{}': {}", width, e))?;
    let height: f32 = height
        .trim()
        .parse()
        .map_err(|e| format!("invalid height '{}': {}", height, e))?;
    Ok(Viewport::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edge() {
        assert_eq!(parse_edge("Left"), Ok(Edge::Left));
        assert!(parse_edge("top").is_err());
    }

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("1280x800"), Ok(Viewport::new(1280.0, 800.0)));
        assert_eq!(parse_viewport("640X480"), Ok(Viewport::new(640.0, 480.0)));
        assert!(parse_viewport("1280").is_err());
        assert!(parse_viewport("wide x tall").is_err());
    }

    #[test]
    fn test_overrides() {
        let args = CliArgs::parse_from([
            "dockside",
            "script.yaml",
            "--edge",
            "right",
            "--reduced-motion",
        ]);
        let mut config = DockConfig::default();
        args.apply_overrides(&mut config);
        assert_eq!(config.position, Edge::Right);
        assert_eq!(config.motion, MotionPreference::Reduced);
        assert!(!args.json);
    }
}
