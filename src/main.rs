use clap::Parser;

use interprete::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    match cli::run(cli) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("interprete: {error}");
            std::process::exit(1);
        }
    }
}
