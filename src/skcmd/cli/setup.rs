use clap::{Args, Parser, Subcommand};
use skcmd::model::{ArgumentSpec, ExecutableBy};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "skcmd", bin_name = "skcmd", version = get_version())]
#[command(about = "Generate Skript command headers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show informational messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Never style output, even on a color terminal
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the generated command block
    #[command(alias = "preview", display_order = 1)]
    Render {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Copy the generated command block to the clipboard
    #[command(alias = "cp", display_order = 2)]
    Copy {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Save the generated command block as <name>.sk
    #[command(alias = "save", display_order = 3)]
    Download {
        #[command(flatten)]
        spec: SpecArgs,

        /// Directory to write into (defaults to the current directory)
        #[arg(short = 'o', long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print an example command
    #[command(display_order = 10)]
    Demo {
        /// Print the example as a JSON spec file instead
        #[arg(long)]
        json: bool,
    },

    /// List argument types
    #[command(display_order = 11)]
    Types,

    /// Get or set configuration
    #[command(display_order = 12)]
    Config {
        /// Configuration key (indent, optional-usage, trigger-marker, file-ext, clipboard-newline)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Command fields shared by render, copy and download.
#[derive(Args, Debug, Default, Clone)]
pub struct SpecArgs {
    /// Command name (a leading "/" is ignored)
    pub name: Option<String>,

    /// Read a JSON command spec ("-" for stdin); flags override its fields
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Comma-separated aliases
    #[arg(short, long)]
    pub aliases: Option<String>,

    /// Command description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Permission node required to run the command
    #[arg(short, long)]
    pub permission: Option<String>,

    /// Message shown when the permission is missing
    #[arg(long, value_name = "MESSAGE")]
    pub permission_message: Option<String>,

    /// Who may run the command: both, players or console
    #[arg(short, long, value_name = "WHO")]
    pub executable_by: Option<ExecutableBy>,

    /// Cooldown duration, e.g. "5 seconds" (enables the cooldown)
    #[arg(long, value_name = "DURATION")]
    pub cooldown: Option<String>,

    /// Message shown while the cooldown is active
    #[arg(long, value_name = "MESSAGE")]
    pub cooldown_message: Option<String>,

    /// Permission that skips the cooldown
    #[arg(long, value_name = "PERMISSION")]
    pub cooldown_bypass: Option<String>,

    /// Turn the cooldown off (its values are kept)
    #[arg(long, conflicts_with = "cooldown")]
    pub no_cooldown: bool,

    /// Use this usage line instead of generating one
    #[arg(short, long, conflicts_with = "auto_usage")]
    pub usage: Option<String>,

    /// Generate the usage line from the arguments
    #[arg(long)]
    pub auto_usage: bool,

    /// Argument as NAME[:TYPE[:optional,greedy]]; repeat in order
    #[arg(long = "arg", value_name = "ARG")]
    pub args: Vec<ArgumentSpec>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skcmd::model::ArgType;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("skcmd").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_render_with_fields() {
        let cli = parse(&[
            "render",
            "/heal",
            "-a",
            "h, restore",
            "--arg",
            "target:player:optional",
            "--arg",
            "amount:number",
            "-e",
            "players",
        ]);
        match cli.command {
            Some(Commands::Render { spec }) => {
                assert_eq!(spec.name.as_deref(), Some("/heal"));
                assert_eq!(spec.aliases.as_deref(), Some("h, restore"));
                assert_eq!(spec.executable_by, Some(ExecutableBy::Players));
                assert_eq!(spec.args.len(), 2);
                assert_eq!(spec.args[0].arg_type, ArgType::Player);
                assert!(spec.args[0].optional);
                assert_eq!(spec.args[1].name, "amount");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_preview_alias() {
        let cli = parse(&["preview", "x"]);
        assert!(matches!(cli.command, Some(Commands::Render { .. })));
    }

    #[test]
    fn test_download_options() {
        let cli = parse(&["download", "heal", "-o", "out", "--force"]);
        match cli.command {
            Some(Commands::Download { spec, dir, force }) => {
                assert_eq!(spec.name.as_deref(), Some("heal"));
                assert_eq!(dir, Some(PathBuf::from("out")));
                assert!(force);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_argument_type_is_rejected() {
        let res = Cli::try_parse_from(["skcmd", "render", "x", "--arg", "a:vector"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_usage_conflicts_with_auto_usage() {
        let res = Cli::try_parse_from(["skcmd", "render", "x", "-u", "/x", "--auto-usage"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cooldown_conflicts_with_no_cooldown() {
        let res = Cli::try_parse_from([
            "skcmd",
            "render",
            "x",
            "--cooldown",
            "5 seconds",
            "--no-cooldown",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["types", "--plain", "-v"]);
        assert!(cli.plain);
        assert!(cli.verbose);
    }
}
