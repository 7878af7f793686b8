// crates/cli/src/config.rs
use crate::args::Args;
use crate::style::Palette;
pub use line_tally_engine::config::Config;
use line_tally_engine::options::Extension;
use std::path::PathBuf;

/// Everything one invocation needs once the root and extension are known.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub engine: Config,
    pub palette: Palette,
}

impl RunConfig {
    #[must_use]
    pub fn new(root: PathBuf, extension: Extension, palette: Palette) -> Self {
        Self {
            engine: Config::new(root, extension),
            palette,
        }
    }
}

impl From<&Args> for Palette {
    fn from(args: &Args) -> Self {
        Self::new(!args.no_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_builds_from_args() {
        let args = Args::try_parse_from(["line_tally", "proj", "--no-color"]).unwrap();
        let config = RunConfig::new(
            PathBuf::from("proj"),
            Extension::normalize("py"),
            Palette::from(&args),
        );

        assert_eq!(config.engine.root, PathBuf::from("proj"));
        assert_eq!(config.engine.extension.as_str(), ".py");
        assert!(!config.palette.is_enabled());
    }

    #[test]
    fn test_color_is_on_by_default() {
        let args = Args::try_parse_from(["line_tally", "proj"]).unwrap();
        assert!(Palette::from(&args).is_enabled());
    }
}
