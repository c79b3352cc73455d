use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::builder::PackageManager;
use crate::stack::Zone;

/// Technology stack builder with compatibility scoring and install commands
#[derive(Parser, Debug)]
#[command(
    name = "stackbuilder",
    about = "Technology stack builder with compatibility scoring and install commands",
    version,
    author,
    long_about = "stackbuilder places technologies into frontend and backend zones, scores \
                  every selected pair against a static compatibility catalog, and prints \
                  npm, yarn and pnpm install commands for the result. Commands are printed, \
                  never executed."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Catalog file (.toml or .json) to use instead of the built-in catalog"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "List cataloged technologies",
        long_about = "Lists the technologies in the catalog, optionally restricted to one zone.\n\n\
                      Examples:\n  \
                      stackbuilder list\n  \
                      stackbuilder list --zone backend --format json"
    )]
    List(ListArgs),

    #[command(
        about = "Look up the compatibility entry from one technology to another",
        long_about = "Prints the directed compatibility entry FROM -> TO. Entries are not \
                      symmetric; swap the arguments to see the reverse direction.\n\n\
                      Examples:\n  \
                      stackbuilder edge \"React 18\" TypeScript\n  \
                      stackbuilder edge express nodejs"
    )]
    Edge(EdgeArgs),

    #[command(
        about = "Score every pair in a stack",
        long_about = "Places the given technologies into their zones and reports every \
                      known compatibility entry between them with the average score.\n\n\
                      Examples:\n  \
                      stackbuilder analyze --frontend react,typescript --backend express\n  \
                      stackbuilder analyze --frontend nextjs --backend nextjs,prisma,postgres"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Print install commands for a stack",
        long_about = "Prints per-zone install commands, split into runtime and dev \
                      dependencies.\n\n\
                      Examples:\n  \
                      stackbuilder install --frontend react,typescript --backend express\n  \
                      stackbuilder install --backend express,prisma --package-manager pnpm"
    )]
    Install(InstallArgs),

    #[command(about = "Show the effective configuration")]
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct StackArgs {
    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "Technologies for the frontend zone (repeatable or comma-separated)"
    )]
    pub frontend: Vec<String>,

    #[arg(
        long,
        value_name = "NAME",
        value_delimiter = ',',
        help = "Technologies for the backend zone (repeatable or comma-separated)"
    )]
    pub backend: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    #[arg(short = 'z', long, value_enum, help = "Only list technologies of this zone")]
    pub zone: Option<ZoneArg>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct EdgeArgs {
    #[arg(value_name = "FROM", help = "Technology the entry belongs to")]
    pub from: String,

    #[arg(value_name = "TO", help = "Technology the entry points at")]
    pub to: String,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub stack: StackArgs,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct InstallArgs {
    #[command(flatten)]
    pub stack: StackArgs,

    #[arg(
        short = 'p',
        long,
        value_enum,
        help = "Only print commands for this package manager (default: all)"
    )]
    pub package_manager: Option<PackageManagerArg>,

    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[arg(short = 'f', long, value_enum, default_value = "human", help = "Output format")]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneArg {
    Frontend,
    Backend,
}

impl From<ZoneArg> for Zone {
    fn from(arg: ZoneArg) -> Self {
        match arg {
            ZoneArg::Frontend => Zone::Frontend,
            ZoneArg::Backend => Zone::Backend,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManagerArg {
    Npm,
    Yarn,
    Pnpm,
}

impl From<PackageManagerArg> for PackageManager {
    fn from(arg: PackageManagerArg) -> Self {
        match arg {
            PackageManagerArg::Npm => PackageManager::Npm,
            PackageManagerArg::Yarn => PackageManager::Yarn,
            PackageManagerArg::Pnpm => PackageManager::Pnpm,
        }
    }
}
