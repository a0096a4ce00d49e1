use clap::Parser;
use hamiltonian_check::app::{run_app, Cli};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
