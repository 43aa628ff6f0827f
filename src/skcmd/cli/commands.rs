//! # CLI Layer
//!
//! Dispatch for the `skcmd` binary:
//!
//! - `run()`: parse, build context, dispatch (called by `main.rs`)
//! - `init_context()`: locate the config dir and build the API
//! - `build_spec()`: turn `SpecArgs` into a `CommandSpec`
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Handlers print; they never decide *what* the block looks like. That is
//! the library's job.

use super::render::{print_messages, render_config, render_preview, render_types, use_color};
use super::setup::{Cli, Commands, SpecArgs};
use clap::{CommandFactory, Parser};
use directories::ProjectDirs;
use skcmd::api::{ConfigAction, MessageLevel, SkcmdApi, SkcmdPaths};
use skcmd::clipboard::SystemClipboard;
use skcmd::error::{Result, SkcmdError};
use skcmd::model::CommandSpec;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Overrides the config directory (used by tests and portable installs).
const HOME_ENV: &str = "SKCMD_HOME";

struct AppContext {
    api: SkcmdApi<SystemClipboard>,
    verbose: bool,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut ctx = init_context(cli.verbose, cli.plain)?;

    match command {
        Commands::Render { spec } => handle_render(&ctx, spec),
        Commands::Copy { spec } => handle_copy(&mut ctx, spec),
        Commands::Download { spec, dir, force } => handle_download(&ctx, spec, dir, force),
        Commands::Demo { json } => handle_demo(&ctx, json),
        Commands::Types => handle_types(&ctx),
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_context(verbose: bool, plain: bool) -> Result<AppContext> {
    let paths = SkcmdPaths {
        config_dir: config_dir()?,
    };
    let api = SkcmdApi::load(SystemClipboard, paths)?;

    Ok(AppContext {
        api,
        verbose,
        use_color: use_color(plain),
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("org", "skcmd", "skcmd")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SkcmdError::Config("Could not determine config dir".to_string()))
}

/// Layers flags over the (optional) spec file.
fn build_spec(args: SpecArgs) -> Result<CommandSpec> {
    let mut spec = match &args.spec {
        Some(path) => read_spec(path)?,
        None => CommandSpec::default(),
    };

    if let Some(name) = args.name {
        spec.name = name;
    }
    if let Some(aliases) = args.aliases {
        spec.aliases = aliases;
    }
    if let Some(description) = args.description {
        spec.description = description;
    }
    if let Some(permission) = args.permission {
        spec.permission = permission;
    }
    if let Some(message) = args.permission_message {
        spec.permission_message = message;
    }
    if let Some(who) = args.executable_by {
        spec.executable_by = who;
    }

    if let Some(value) = args.cooldown {
        spec.cooldown.value = value;
        spec.set_cooldown_enabled(true);
    }
    if let Some(message) = args.cooldown_message {
        spec.cooldown.message = message;
    }
    if let Some(bypass) = args.cooldown_bypass {
        spec.cooldown.bypass = bypass;
    }
    if args.no_cooldown {
        spec.set_cooldown_enabled(false);
    }

    if let Some(usage) = args.usage {
        spec.set_manual_usage(usage);
    }
    if args.auto_usage {
        spec.use_auto_usage();
    }

    if !args.args.is_empty() {
        spec.arguments = args.args;
    }

    Ok(spec)
}

fn read_spec(path: &Path) -> Result<CommandSpec> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|e| {
            SkcmdError::InvalidArgument(format!("Cannot read {}: {}", path.display(), e))
        })?
    };
    Ok(serde_json::from_str(&content)?)
}

fn handle_render(ctx: &AppContext, args: SpecArgs) -> Result<()> {
    let spec = build_spec(args)?;
    let result = ctx.api.render(&spec);
    print!("{}", render_preview(&result.lines, ctx.use_color));
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, args: SpecArgs) -> Result<()> {
    let spec = build_spec(args)?;
    let result = ctx.api.copy(&spec)?;
    print_messages(&result.messages, ctx.verbose);
    if !result.exported {
        return Err(SkcmdError::Export("nothing was copied".to_string()));
    }
    Ok(())
}

fn handle_download(
    ctx: &AppContext,
    args: SpecArgs,
    dir: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let spec = build_spec(args)?;
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.download(&spec, &dir, force)?;
    print_messages(&result.messages, ctx.verbose);
    if !result.exported {
        return Err(SkcmdError::Export("nothing was saved".to_string()));
    }
    Ok(())
}

fn handle_demo(ctx: &AppContext, json: bool) -> Result<()> {
    let result = ctx.api.demo();
    if json {
        let spec = result.spec.unwrap_or_else(CommandSpec::demo);
        println!("{}", serde_json::to_string_pretty(&spec)?);
    } else {
        print!("{}", render_preview(&result.lines, ctx.use_color));
    }
    Ok(())
}

fn handle_types(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.arg_types();
    print!("{}", render_types(&result.arg_types, ctx.use_color));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    // Config values come back as info messages, so always show them here.
    print_messages(&result.messages, true);
    if result.has_level(MessageLevel::Error) {
        return Err(SkcmdError::Config("config unchanged".to_string()));
    }
    Ok(())
}
