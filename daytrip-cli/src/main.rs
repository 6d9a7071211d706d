//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = daytrip_cli::run() {
        eprintln!("daytrip: {err}");
        std::process::exit(1);
    }
}
