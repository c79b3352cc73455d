//! Command handlers. Each returns the process exit code.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{AnalyzeArgs, ConfigArgs, EdgeArgs, InstallArgs, ListArgs, StackArgs};
use super::output::OutputFormatter;
use crate::builder::{plan, render_all, CompatibilityAnalyzer, StackSelection};
use crate::config::StackBuilderConfig;
use crate::stack::{CompatibilityCatalog, Technology, Zone};

/// Environment configuration with the `--catalog` flag applied on top
fn effective_config(catalog: Option<&Path>) -> Result<StackBuilderConfig> {
    let mut config = StackBuilderConfig::from_env()?;
    if let Some(path) = catalog {
        config.catalog_path = Some(path.to_path_buf());
    }
    config.validate()?;
    Ok(config)
}

fn load_catalog(config: &StackBuilderConfig) -> Result<CompatibilityCatalog> {
    let catalog = config.load_catalog().context("Failed to load catalog")?;
    let source = config
        .catalog_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(technologies = catalog.len(), source = %source, "Catalog ready");
    Ok(catalog)
}

fn resolve<'a>(catalog: &'a CompatibilityCatalog, name: &str) -> Result<&'a Arc<Technology>> {
    catalog.find(name).ok_or_else(|| {
        let suggestions = catalog.suggest(name);
        if suggestions.is_empty() {
            anyhow!("Unknown technology: {}", name)
        } else {
            anyhow!(
                "Unknown technology: {}. Did you mean: {}?",
                name,
                suggestions.join(", ")
            )
        }
    })
}

fn build_selection(catalog: &CompatibilityCatalog, args: &StackArgs) -> Result<StackSelection> {
    let mut selection = StackSelection::new();
    for (zone, names) in [(Zone::Frontend, &args.frontend), (Zone::Backend, &args.backend)] {
        for name in names.iter().filter(|n| !n.trim().is_empty()) {
            let technology = resolve(catalog, name)?;
            selection.add(zone, Arc::clone(technology))?;
        }
    }
    debug!(selected = selection.len(), "Selection built");
    Ok(selection)
}

fn finish(result: Result<String>) -> i32 {
    match result {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            0
        }
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

pub fn handle_list(args: &ListArgs, catalog: Option<&Path>) -> i32 {
    finish(run_list(args, catalog))
}

fn run_list(args: &ListArgs, catalog: Option<&Path>) -> Result<String> {
    let config = effective_config(catalog)?;
    let catalog = load_catalog(&config)?;

    let technologies: Vec<&Technology> = match args.zone {
        Some(zone) => catalog
            .list_by_category(zone.into())
            .into_iter()
            .map(|t| t.as_ref())
            .collect(),
        None => catalog.technologies().iter().map(|t| t.as_ref()).collect(),
    };

    OutputFormatter::new(args.format.into()).format_catalog(&technologies)
}

pub fn handle_edge(args: &EdgeArgs, catalog: Option<&Path>) -> i32 {
    finish(run_edge(args, catalog))
}

fn run_edge(args: &EdgeArgs, catalog: Option<&Path>) -> Result<String> {
    let config = effective_config(catalog)?;
    let catalog = load_catalog(&config)?;

    let from = &resolve(&catalog, &args.from)?.id;
    let to = &resolve(&catalog, &args.to)?.id;
    let edge = catalog.get_edge(from, to);

    OutputFormatter::new(args.format.into()).format_edge(from, to, edge)
}

pub fn handle_analyze(args: &AnalyzeArgs, catalog: Option<&Path>) -> i32 {
    finish(run_analyze(args, catalog))
}

fn run_analyze(args: &AnalyzeArgs, catalog: Option<&Path>) -> Result<String> {
    let config = effective_config(catalog)?;
    let catalog = load_catalog(&config)?;
    let selection = build_selection(&catalog, &args.stack)?;

    let report = CompatibilityAnalyzer::new(&catalog).report(&selection);
    info!(
        pairs = report.pairs.len(),
        average = ?report.average_score,
        "Analysis complete"
    );

    OutputFormatter::new(args.format.into()).format_report(&report)
}

pub fn handle_install(args: &InstallArgs, catalog: Option<&Path>) -> i32 {
    finish(run_install(args, catalog))
}

fn run_install(args: &InstallArgs, catalog: Option<&Path>) -> Result<String> {
    let config = effective_config(catalog)?;
    let catalog = load_catalog(&config)?;
    let selection = build_selection(&catalog, &args.stack)?;

    let package_managers = match args.package_manager {
        Some(pm) => vec![pm.into()],
        None => config.package_managers(),
    };

    let plan = plan(&selection);
    let commands = render_all(&plan, &package_managers);

    OutputFormatter::new(args.format.into()).format_install(&plan, &commands)
}

pub fn handle_config(args: &ConfigArgs, catalog: Option<&Path>) -> i32 {
    finish(run_config(args, catalog))
}

fn run_config(args: &ConfigArgs, catalog: Option<&Path>) -> Result<String> {
    let config = effective_config(catalog)?;
    OutputFormatter::new(args.format.into()).format_config(&config)
}
