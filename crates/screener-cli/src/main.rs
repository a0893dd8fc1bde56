use clap::Parser;
use eyre::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, reload};

use screener_cli::cli::{self, Cli};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (log_handle, filter_from_env) = init_logging(cli.json_logs);

    let output = cli::run(cli, |config| {
        // RUST_LOG wins over the configured filter.
        if let Some(directives) = config.log_filter.as_deref()
            && !filter_from_env
        {
            log_handle.reload(EnvFilter::try_new(directives)?)?;
        }
        Ok(())
    })?;
    println!("{output}");

    Ok(())
}

/// Install the subscriber before any config is read so config loading is
/// logged. The filter starts from `RUST_LOG` (or "info") and can be swapped
/// for the configured one once the config is loaded.
fn init_logging(json: bool) -> (reload::Handle<EnvFilter, Registry>, bool) {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let filter_from_env = env_filter.is_some();
    let (filter, handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|| EnvFilter::new("info")));

    // Logs go to stderr so stdout stays machine readable.
    let fmt_layer = fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if json {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
    (handle, filter_from_env)
}
