use clap::Parser;
use repertoire_metiers::cli::Cli;
use repertoire_metiers::pipeline::{self, RunOptions};
use repertoire_metiers::progress::ConsoleProgress;

fn main() {
    let cli = Cli::parse();

    let options = RunOptions {
        sst_path: cli.sst,
        stage_path: cli.stage,
        output_path: cli.output,
        base_url: cli.base_url,
    };
    let mut progress = ConsoleProgress {
        verbose: cli.verbose,
    };

    // Le message d'échec est déjà passé par le puits d'état.
    if pipeline::run(&options, &mut progress).is_err() {
        std::process::exit(1);
    }
}
