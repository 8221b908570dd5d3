// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "viewport-camera")]
#[command(about = "First-person 3D viewport camera", long_about = None)]
pub struct Cli {
    /// JSON config file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the window title
    #[arg(long)]
    pub title: Option<String>,

    /// Start in orthographic projection
    #[arg(long, default_value = "false")]
    pub orthographic: bool,

    /// Print the effective config as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply(&self, config: &mut crate::config::ViewConfig) {
        if let Some(title) = &self.title {
            config.window.title = title.clone();
        }
        if self.orthographic {
            config.initial_projection = crate::projection::ProjectionMode::Orthographic;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewConfig;
    use crate::projection::ProjectionMode;

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "viewport-camera",
            "--config",
            "scene.json",
            "--title",
            "Scene",
            "--orthographic",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("scene.json")));
        assert!(cli.orthographic);
        assert!(!cli.print_config);
    }

    #[test]
    fn overrides_apply_to_config() {
        let cli = Cli::parse_from(["viewport-camera", "--title", "Scene", "--orthographic"]);
        let mut config = ViewConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.window.title, "Scene");
        assert_eq!(config.initial_projection, ProjectionMode::Orthographic);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["viewport-camera"]);
        let mut config = ViewConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, ViewConfig::default());
    }
}
