use clap::Parser;

use fb2png::cli::Args;

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = fb2png::snapshot::rgba(&args.device, &args.png) {
        eprintln!("fb2png-rgba: {}", err);
        std::process::exit(1);
    }
}
