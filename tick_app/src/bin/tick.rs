use std::io;
use std::process::ExitCode;

use clap::Parser;
use tick_app::Driver;
use tick_app::Mode;
use tick_app::Pipeline;
use tick_app::Result;
use tick_app::TickError;
use tick_app::WorkingSet;
use tick_app::cli::Cli;
use tick_app::config_loader;
use tick_app::config_loader::TickConfig;
use tick_app::tracing_setup;
use tick_http::CoinMarketCapClient;
use tracing::info;

async fn run(cli: Cli, config: TickConfig) -> Result<()> {
    let api_url = cli.api_url.as_deref().unwrap_or(&config.api_url);
    let client = CoinMarketCapClient::builder().base_url(api_url).http_config(config.http_config()).build()?;

    let working_set = WorkingSet::or_default(&cli.tickers, config.default_symbols.as_slice());
    let mode = Mode::from_interval(cli.watch);
    info!("Tracking {:?} via {} ({:?})", working_set.symbols(), client.base_url(), mode);

    let pipeline = Pipeline::bootstrap(client, working_set, config.pipeline_settings()).await?;
    let mut driver = Driver::new(pipeline, io::stdout().lock());
    driver.run(mode).await
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = config_loader::load_config(&cli.config);
    let (level, log_dir) = match &config {
        Ok(config) => (config.level(), config.log_dir.clone()),
        Err(_) => (tracing::Level::WARN, None),
    };
    // Keep guard alive for entire application lifetime
    let _guard = tracing_setup::init("tick", log_dir.as_deref(), level);

    let result = config.map_err(TickError::from).and_then(|config| {
        tokio::runtime::Builder::new_current_thread().enable_all().build()?.block_on(run(cli, config))
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report(&mut io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
