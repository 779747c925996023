mod cli;
mod errors;
mod scan;
mod walk;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = scan::run(&cli.path, &cli.ext, &cli.output, &cli.exclude, cli.json) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
