use std::path::PathBuf;

use clap::Parser;

/// Extracurricular activities of the Mergington High School.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Configuration file (default: mergington.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_args() {
        let args = Args::parse_from(["mergington", "-c", "school.toml", "--enable-cors"]);
        assert_eq!(args.config, Some(PathBuf::from("school.toml")));
        assert!(args.enable_cors);
        let args = Args::parse_from(["mergington"]);
        assert!(args.config.is_none());
        assert!(!args.enable_cors);
    }
}
