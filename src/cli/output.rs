//! Output formatting for multiple formats
//!
//! Every command result can be rendered as JSON, YAML or human-readable text.
//!
//! # Example
//!
//! ```
//! use stackbuilder::cli::output::{OutputFormat, OutputFormatter};
//! use stackbuilder::stack::{CompatibilityCatalog, TechnologyId};
//!
//! let catalog = CompatibilityCatalog::with_defaults();
//! let edge = catalog.get_edge(&TechnologyId::React18, &TechnologyId::TypeScript);
//!
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! let output = formatter
//!     .format_edge(&TechnologyId::React18, &TechnologyId::TypeScript, edge)
//!     .unwrap();
//! assert!(output.contains("\"score\": 95"));
//! ```

use anyhow::{Context, Result};
use serde::Serialize;

use crate::builder::{InstallPlan, StackReport, ZoneCommand};
use crate::config::StackBuilderConfig;
use crate::stack::{CompatibilityEdge, Technology, TechnologyId, Zone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

#[derive(Serialize)]
struct EdgeLookup<'a> {
    from: &'a TechnologyId,
    to: &'a TechnologyId,
    edge: Option<&'a CompatibilityEdge>,
}

#[derive(Serialize)]
struct InstallOutput<'a> {
    plan: &'a InstallPlan,
    commands: &'a [ZoneCommand],
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn render<T: Serialize + ?Sized>(
        &self,
        value: &T,
        what: &str,
        human: impl FnOnce() -> String,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)
                .with_context(|| format!("Failed to serialize {} to JSON", what)),
            OutputFormat::Yaml => serde_yaml::to_string(value)
                .with_context(|| format!("Failed to serialize {} to YAML", what)),
            OutputFormat::Human => Ok(human()),
        }
    }

    pub fn format_catalog(&self, technologies: &[&Technology]) -> Result<String> {
        self.render(technologies, "catalog", || {
            self.format_catalog_human(technologies)
        })
    }

    pub fn format_edge(
        &self,
        from: &TechnologyId,
        to: &TechnologyId,
        edge: Option<&CompatibilityEdge>,
    ) -> Result<String> {
        self.render(&EdgeLookup { from, to, edge }, "compatibility entry", || {
            self.format_edge_human(from, to, edge)
        })
    }

    pub fn format_report(&self, report: &StackReport) -> Result<String> {
        self.render(report, "stack report", || self.format_report_human(report))
    }

    pub fn format_install(&self, plan: &InstallPlan, commands: &[ZoneCommand]) -> Result<String> {
        self.render(&InstallOutput { plan, commands }, "install commands", || {
            self.format_install_human(commands)
        })
    }

    pub fn format_config(&self, config: &StackBuilderConfig) -> Result<String> {
        self.render(&config.to_display_map(), "config", || config.to_string())
    }

    // Human-readable formatting methods

    fn format_catalog_human(&self, technologies: &[&Technology]) -> String {
        let mut output = String::new();

        for zone in Zone::ALL {
            let in_zone: Vec<&&Technology> =
                technologies.iter().filter(|t| t.category == zone).collect();
            if in_zone.is_empty() {
                continue;
            }
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", title(zone)));

            for technology in in_zone {
                let package = match (&technology.package, technology.dev_dependency) {
                    (Some(p), true) => format!("{} (dev)", p),
                    (Some(p), false) => p.clone(),
                    (None, _) => "-".to_string(),
                };
                let mut flags = Vec::new();
                if technology.fullstack {
                    flags.push("fullstack");
                }
                if technology.both {
                    flags.push("any zone");
                }
                let flags = if flags.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", flags.join(", "))
                };
                output.push_str(&format!(
                    "  {:<16} {:<24} {} compatibility entries{}\n",
                    technology.name(),
                    package,
                    technology.edge_count(),
                    flags
                ));
            }
        }

        if output.is_empty() {
            output.push_str("Catalog is empty\n");
        }
        output
    }

    fn format_edge_human(
        &self,
        from: &TechnologyId,
        to: &TechnologyId,
        edge: Option<&CompatibilityEdge>,
    ) -> String {
        let mut output = String::new();
        match edge {
            Some(edge) => {
                output.push_str(&format!("{} -> {}: {}/100\n", from, to, edge.score));
                if !edge.note.is_empty() {
                    output.push_str(&format!("  {}\n", edge.note));
                }
                write_tags(&mut output, edge.benefits.iter(), edge.conflicts.iter());
            }
            None => {
                output.push_str(&format!("{} -> {}: no known relationship\n", from, to));
            }
        }
        output
    }

    fn format_report_human(&self, report: &StackReport) -> String {
        let mut output = String::new();

        output.push_str("Stack\n");
        output.push_str(&format!("  Frontend: {}\n", join_names(&report.frontend)));
        output.push_str(&format!("  Backend:  {}\n", join_names(&report.backend)));
        output.push('\n');

        output.push_str("Compatibility\n");
        if report.pairs.is_empty() {
            output.push_str("  No known compatibility entries between the selected technologies\n");
        }
        for pair in &report.pairs {
            output.push_str(&format!(
                "  {} -> {}: {}  {}\n",
                pair.tech_a, pair.tech_b, pair.score, pair.note
            ));
            write_tags(
                &mut output,
                pair.benefits.iter().flatten(),
                pair.conflicts.iter().flatten(),
            );
        }
        output.push('\n');

        match (report.average_score, report.rating) {
            (Some(average), Some(rating)) => {
                output.push_str(&format!("Average score: {} ({})\n", average, rating));
            }
            _ => {
                output.push_str("Average score: n/a\n");
            }
        }

        output
    }

    fn format_install_human(&self, commands: &[ZoneCommand]) -> String {
        let mut output = String::new();

        for zone in Zone::ALL {
            let in_zone: Vec<&ZoneCommand> = commands.iter().filter(|c| c.zone == zone).collect();
            if in_zone.is_empty() {
                continue;
            }
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&format!("{}\n", title(zone)));
            for command in in_zone {
                output.push_str(&format!("  {}:\n", command.package_manager));
                for line in command.command.lines() {
                    output.push_str(&format!("    {}\n", line));
                }
            }
        }

        output
    }
}

fn title(zone: Zone) -> &'static str {
    match zone {
        Zone::Frontend => "Frontend",
        Zone::Backend => "Backend",
    }
}

fn join_names(ids: &[TechnologyId]) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    ids.iter().map(|id| id.name()).collect::<Vec<_>>().join(", ")
}

fn write_tags<'a>(
    output: &mut String,
    benefits: impl Iterator<Item = &'a String>,
    conflicts: impl Iterator<Item = &'a String>,
) {
    for benefit in benefits {
        output.push_str(&format!("      + {}\n", benefit));
    }
    for conflict in conflicts {
        output.push_str(&format!("      - {}\n", conflict));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{plan, render_all, CompatibilityAnalyzer, PackageManager, StackSelection};
    use crate::stack::CompatibilityCatalog;

    fn react_typescript(catalog: &CompatibilityCatalog) -> StackSelection {
        let mut selection = StackSelection::new();
        for id in [TechnologyId::React18, TechnologyId::TypeScript] {
            selection
                .add(Zone::Frontend, catalog.get(&id).unwrap().clone())
                .unwrap();
        }
        selection
    }

    #[test]
    fn test_format_report_human() {
        let catalog = CompatibilityCatalog::with_defaults();
        let report = CompatibilityAnalyzer::new(&catalog).report(&react_typescript(&catalog));

        let output = OutputFormatter::new(OutputFormat::Human)
            .format_report(&report)
            .unwrap();
        assert!(output.contains("Frontend: React 18, TypeScript"));
        assert!(output.contains("Backend:  (none)"));
        assert!(output.contains("React 18 -> TypeScript: 95"));
        assert!(output.contains("+ Typed props"));
        assert!(output.contains("Average score: 94 (Excellent)"));
    }

    #[test]
    fn test_format_report_human_empty() {
        let catalog = CompatibilityCatalog::with_defaults();
        let report = CompatibilityAnalyzer::new(&catalog).report(&StackSelection::new());

        let output = OutputFormatter::new(OutputFormat::Human)
            .format_report(&report)
            .unwrap();
        assert!(output.contains("No known compatibility entries"));
        assert!(output.contains("Average score: n/a"));
    }

    #[test]
    fn test_format_report_json() {
        let catalog = CompatibilityCatalog::with_defaults();
        let report = CompatibilityAnalyzer::new(&catalog).report(&react_typescript(&catalog));

        let output = OutputFormatter::new(OutputFormat::Json)
            .format_report(&report)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["average_score"], 94);
        assert_eq!(value["rating"], "excellent");
        assert_eq!(value["pairs"][0]["tech_a"], "react-18");
        assert_eq!(value["frontend"][1], "typescript");
    }

    #[test]
    fn test_format_install_human() {
        let catalog = CompatibilityCatalog::with_defaults();
        let plan = plan(&react_typescript(&catalog));
        let commands = render_all(&plan, &[PackageManager::Npm]);

        let output = OutputFormatter::new(OutputFormat::Human)
            .format_install(&plan, &commands)
            .unwrap();
        assert!(output.contains(
            "Frontend\n  npm:\n    npm install react\n    npm install -D typescript"
        ));
        assert!(output.contains("Backend\n  npm:\n    # No packages to install"));
    }

    #[test]
    fn test_format_install_yaml() {
        let catalog = CompatibilityCatalog::with_defaults();
        let plan = plan(&react_typescript(&catalog));
        let commands = render_all(&plan, &[PackageManager::Yarn]);

        let output = OutputFormatter::new(OutputFormat::Yaml)
            .format_install(&plan, &commands)
            .unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["plan"]["frontend"]["dev"][0].as_str(), Some("typescript"));
        assert_eq!(value["commands"][0]["package_manager"].as_str(), Some("yarn"));
    }

    #[test]
    fn test_format_edge_absent() {
        let output = OutputFormatter::new(OutputFormat::Human)
            .format_edge(&TechnologyId::Redis, &TechnologyId::Express, None)
            .unwrap();
        assert_eq!(output, "Redis -> Express: no known relationship\n");

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_edge(&TechnologyId::Redis, &TechnologyId::Express, None)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["edge"].is_null());
    }

    #[test]
    fn test_format_catalog_human() {
        let catalog = CompatibilityCatalog::with_defaults();
        let technologies: Vec<&Technology> =
            catalog.technologies().iter().map(|t| t.as_ref()).collect();

        let output = OutputFormatter::new(OutputFormat::Human)
            .format_catalog(&technologies)
            .unwrap();
        assert!(output.starts_with("Frontend\n"));
        assert!(output.contains("\nBackend\n"));
        assert!(output.contains("typescript (dev)"));
        assert!(output.contains("[fullstack]"));
    }

    #[test]
    fn test_format_catalog_json_includes_edges() {
        let catalog = CompatibilityCatalog::with_defaults();
        let react = catalog.get(&TechnologyId::React18).unwrap();

        let output = OutputFormatter::new(OutputFormat::Json)
            .format_catalog(&[react.as_ref()])
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], "react-18");
        assert_eq!(value[0]["category"], "frontend");
        assert!(value[0]["compatibility"].as_array().unwrap().len() > 1);
    }
}
