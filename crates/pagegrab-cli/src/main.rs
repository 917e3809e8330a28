use pagegrab_core::logging;

mod cli;

fn main() {
    let cli = cli::parse_args();

    // Log file under the XDG state dir; stderr if that is not writable.
    logging::init();

    if let Err(err) = cli.run() {
        tracing::info!(error = %err, "run failed");
        eprintln!("pagegrab error: {:#}", err);
        std::process::exit(err.exit_code());
    }
}
