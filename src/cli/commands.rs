//! Command dispatch

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::IoResultExt;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{LayoutPlan, Viewport};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;

/// Version control revision, injected at compile time.
pub const COMMIT: &str = match option_env!("FEEDPAGE_COMMIT") {
    Some(c) => c,
    None => "undefined",
};

/// Build timestamp, injected at compile time.
pub const BUILD_AT: &str = match option_env!("FEEDPAGE_BUILD_AT") {
    Some(t) => t,
    None => "undefined",
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Render { out, stdout }) => {
            _render(cli.config.as_deref(), out.as_deref(), *stdout)
        }
        Some(Commands::Tree) => _tree(cli.config.as_deref()),
        Some(Commands::Layout { width }) => _layout(cli.config.as_deref(), *width),
        Some(Commands::Build) => {
            output::info(&build_info());
            Ok(())
        }
        Some(Commands::Envs) => _envs(),
        Some(Commands::Config { command }) => _config(cli.config.as_deref(), command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| InfraError::terminal("print help", e))?;
            Ok(())
        }
    }
}

/// Version, commit and build date, one per line.
pub fn build_info() -> String {
    format!(
        "ver:\t{}\ncommit:\t{}\ndt:\t{}",
        env!("CARGO_PKG_VERSION"),
        COMMIT,
        BUILD_AT
    )
}

fn container(config: Option<&Path>) -> CliResult<ServiceContainer> {
    let settings = Settings::load(config)?;
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings)?)
}

#[instrument]
fn _render(config: Option<&Path>, out: Option<&Path>, stdout: bool) -> CliResult<()> {
    let container = container(config)?;
    let service = container.page_service()?;

    if stdout {
        io::stdout()
            .write_all(service.render_page().as_bytes())
            .map_err(|e| InfraError::terminal("write page to stdout", e))?;
        return Ok(());
    }

    let output_dir = container.settings.render_dir(out);
    let report = service.export(&output_dir)?;
    output::action("Rendered", &report.output_dir.display());
    for file in &report.files {
        output::success_detail(&file.display());
    }
    Ok(())
}

#[instrument]
fn _tree(config: Option<&Path>) -> CliResult<()> {
    let service = container(config)?.page_service()?;
    output::info(&output::outline(&service.tree()));
    Ok(())
}

#[instrument]
fn _layout(config: Option<&Path>, width: u32) -> CliResult<()> {
    if width == 0 {
        return Err(CliError::InvalidArgs("viewport width must be positive".into()));
    }
    let service = container(config)?.page_service()?;
    let plan = service.layout(Viewport::new(width));
    print_plan(&plan, service.page().breakpoint().px());
    Ok(())
}

fn print_plan(plan: &LayoutPlan, breakpoint: u32) {
    output::header(&format!(
        "{}px (breakpoint {}px): {}",
        plan.viewport.width, breakpoint, plan.arrangement
    ));
    for (i, line) in plan.lines.iter().enumerate() {
        let names: Vec<&str> = line.iter().map(|k| k.name()).collect();
        output::detail(&format!("line {}: {}", i + 1, names.join(" | ")));
    }
    for accessory in &plan.accessories {
        output::detail(&format!("accessory: {}", accessory.name()));
    }
}

fn _envs() -> CliResult<()> {
    output::header("Environment variables:");
    for var in Settings::env_vars() {
        output::detail(&format!(
            "{:<36} default: {:<24} {}",
            var.name, var.default, var.description
        ));
    }
    Ok(())
}

#[instrument]
fn _config(config: Option<&Path>, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(config)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::action("global", &format!("{}{}", path.display(), state));
                }
                None => output::warning("no config directory for this platform"),
            }
            if let Some(path) = config {
                output::action("explicit", &path.display());
            }
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory for this platform".into())
            })?;
            write_template(&RealFileSystem, &path, *force)?;
            output::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}

/// Write the config template to `path`, refusing to overwrite unless forced.
pub fn write_template(fs: &dyn FileSystem, path: &Path, force: bool) -> CliResult<()> {
    if fs.exists(path) && !force {
        return Err(CliError::Usage(format!(
            "config already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    fs.ensure_parent(path)
        .with_path_context("create config directory for", path)?;
    fs.write(path, &Settings::template())
        .with_path_context("write config", path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_build_info_then_lists_version_commit_and_date() {
        let info = build_info();
        let keys: Vec<&str> = info
            .lines()
            .filter_map(|l| l.split('\t').next())
            .collect();
        assert_eq!(keys, vec!["ver:", "commit:", "dt:"]);
        assert!(info.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn given_zero_width_when_resolving_layout_then_rejects_before_loading_config() {
        let err = _layout(Some(Path::new("/nonexistent/feedpage.toml")), 0).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgs(_)));
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_missing_file_when_writing_template_then_creates_parents() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/feedpage.toml");

        write_template(&RealFileSystem, &path, false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# feedpage configuration"));
    }

    #[test]
    fn given_existing_file_when_writing_template_without_force_then_refuses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("feedpage.toml");
        std::fs::write(&path, "title = \"mine\"\n").unwrap();

        let err = write_template(&RealFileSystem, &path, false).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "title = \"mine\"\n");

        write_template(&RealFileSystem, &path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("# feedpage configuration"));
    }
}
