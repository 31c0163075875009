use anyhow::Result;
use clap::Parser;
use fxconv::ConversionRequest;
use fxconv::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Amount to convert
    #[arg(default_value_t = 100.0)]
    amount: f64,

    /// Source currency code
    #[arg(default_value = "USD")]
    source: String,

    /// Target currency code
    #[arg(default_value = "INR")]
    target: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let request = ConversionRequest::new(cli.amount, &cli.source, &cli.target);
    let result = fxconv::run(&request);

    if let Err(e) = &result {
        tracing::error!(error = %e, "Conversion failed");
    }
    result.map_err(Into::into)
}
