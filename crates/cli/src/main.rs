#![warn(clippy::pedantic)]

use anyhow::Result;

use fitstat_domain::read_package;

fn main() -> Result<()> {
    init_logging();

    let packages = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15_000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, data) in packages {
        tracing::debug!("processing package {code} with {} fields", data.len());
        let workout = read_package(code, &data)?;
        println!("{}", workout.summary());
    }

    Ok(())
}

fn init_logging() {
    // Report lines go to stdout, diagnostics to stderr.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}
