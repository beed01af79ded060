/// Wirecube Terminal Demo - Rotating Wireframe Cube
///
/// Spins a wireframe cube about a random axis, picking a new axis every
/// few radians. Press Q or ESC to quit.

use clap::Parser;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use wirecube_core::animation::{DEFAULT_ANGULAR_VELOCITY, DEFAULT_RESET_THRESHOLD};
use wirecube_core::AnimationConfig;
use wirecube_terminal::{AppConfig, TerminalApp};

#[derive(Parser, Debug)]
#[command(name = "wirecube", version, about = "Rotating wireframe cube in the terminal")]
struct Cli {
    /// Target frames per second
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Angular velocity in radians per second
    #[arg(long, default_value_t = DEFAULT_ANGULAR_VELOCITY)]
    speed: f64,

    /// Angle in radians after which a new rotation axis is chosen
    #[arg(long, default_value_t = DEFAULT_RESET_THRESHOLD)]
    threshold: f64,

    /// Seed for the axis generator, for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        AppConfig {
            fps: self.fps,
            animation: AnimationConfig {
                angular_velocity: self.speed,
                reset_threshold: self.threshold,
            },
            seed: self.seed,
        }
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut app = TerminalApp::new(cli.app_config())?;
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_core() {
        let cli = Cli::try_parse_from(["wirecube"]).unwrap();
        assert_eq!(cli.app_config(), AppConfig::default());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_flags_populate_config() {
        let cli = Cli::try_parse_from([
            "wirecube",
            "--fps",
            "60",
            "--speed",
            "0.5",
            "--threshold",
            "6.2",
            "--seed",
            "17",
        ])
        .unwrap();
        let config = cli.app_config();
        assert_eq!(config.fps, 60);
        assert_eq!(config.animation.angular_velocity, 0.5);
        assert_eq!(config.animation.reset_threshold, 6.2);
        assert_eq!(config.seed, Some(17));
    }

    #[test]
    fn test_zero_fps_rejected() {
        assert!(Cli::try_parse_from(["wirecube", "--fps", "0"]).is_err());
    }
}
