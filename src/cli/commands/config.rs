//! groupbal config - Show the effective configuration

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{self, HumanLayout};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::{GbError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// List the files that are consulted instead of their merged result
    #[arg(long)]
    pub paths: bool,
}

#[derive(Serialize)]
struct ConfigSources {
    explicit: Option<String>,
    global: Option<String>,
    project: String,
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if args.paths {
        return emit_paths(ctx);
    }
    emit_config(ctx, &ctx.config)
}

fn emit_config(ctx: &AppContext, config: &Config) -> Result<()> {
    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(config));
    }

    let rendered = toml::to_string_pretty(config)
        .map_err(|err| GbError::Config(format!("render config: {err}")))?;
    println!("{rendered}");
    Ok(())
}

fn emit_paths(ctx: &AppContext) -> Result<()> {
    let project = std::env::current_dir()?.join(PROJECT_CONFIG_FILE);
    let sources = ConfigSources {
        explicit: ctx
            .config_path
            .as_ref()
            .map(|path| path.display().to_string()),
        global: Config::global_path().map(|path| path.display().to_string()),
        project: project.display().to_string(),
    };

    if ctx.robot_mode {
        return output::emit_json(&output::robot_ok(sources));
    }

    let mut layout = HumanLayout::new();
    layout.section("Config files");
    if let Some(explicit) = &sources.explicit {
        layout.kv("Explicit", explicit);
    } else {
        layout.kv("Global", sources.global.as_deref().unwrap_or("(none)"));
        layout.kv("Project", &sources.project);
    }
    output::emit_human(layout);
    Ok(())
}
