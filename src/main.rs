use clap::Parser;

use dotplot::cli::{Cli, Commands};
use dotplot::commands::{run_config, run_coords, run_init, run_render, run_themes};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Coords(args) => run_coords(args, &cli),
        Commands::Render(args) => run_render(args, &cli),
        Commands::Themes => run_themes(),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
