use stackbuilder::cli::commands::{CliArgs, Commands};
use stackbuilder::cli::handlers::{
    handle_analyze, handle_config, handle_edge, handle_install, handle_list,
};
use stackbuilder::util::logging::parse_level;
use stackbuilder::util::{init_logging, LoggingConfig};
use stackbuilder::VERSION;

use clap::Parser;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("stackbuilder v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let catalog = args.catalog.as_deref();
    let exit_code = match &args.command {
        Commands::List(list_args) => handle_list(list_args, catalog),
        Commands::Edge(edge_args) => handle_edge(edge_args, catalog),
        Commands::Analyze(analyze_args) => handle_analyze(analyze_args, catalog),
        Commands::Install(install_args) => handle_install(install_args, catalog),
        Commands::Config(config_args) => handle_config(config_args, catalog),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let mut config = LoggingConfig::from_env();

    if let Some(level_str) = &args.log_level {
        config.level = parse_level(level_str);
    } else if args.verbose {
        config.level = Level::DEBUG;
    } else if args.quiet {
        config.level = Level::ERROR;
    }

    init_logging(config);
}
