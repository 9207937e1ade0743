use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `pinhook` binary.
#[derive(Debug, Parser)]
#[command(
    name = "pinhook",
    version,
    about = "Pinhook - pre-commit hook registry validator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the hook registry descriptor
    #[arg(
        short,
        long,
        global = true,
        default_value = ".pre-commit-config.yaml"
    )]
    pub config: String,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// `quiet` and `verbose` are not carried: `init_tracing` consumes them
    /// before dispatch and no handler reads them.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            format: self.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "pinhook",
            "--config",
            "ci/.pre-commit-config.yaml",
            "--format",
            "json",
            "--verbose",
            "validate",
        ])
        .expect("cli should parse");

        assert_eq!(cli.config, "ci/.pre-commit-config.yaml");
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["pinhook", "lint", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Lint));
    }

    #[test]
    fn config_path_defaults_to_conventional_name() {
        let cli = Cli::try_parse_from(["pinhook", "validate"]).expect("cli should parse");
        assert_eq!(cli.config, ".pre-commit-config.yaml");
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["pinhook", "--format", "yaml", "validate"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "text", "raw"] {
            let cli = Cli::try_parse_from(["pinhook", "--format", value, "list"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::List));
        }
    }

    #[test]
    fn sample_config_uses_kebab_case_name() {
        let cli = Cli::try_parse_from(["pinhook", "sample-config"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::SampleConfig));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["pinhook", "--config", "/tmp/hooks.yaml", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config, "/tmp/hooks.yaml");
        assert_eq!(flags.format, OutputFormat::Text);
    }
}
