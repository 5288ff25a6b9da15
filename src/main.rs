use log::info;

use rowcast::config::RowcastConfig;
use rowcast::http::server;
use rowcast::RowcastError;

#[tokio::main]
async fn main() -> Result<(), RowcastError> {
    init_logging();

    let config = RowcastConfig::from_env()?;
    info!("rowcast v{} starting", rowcast::VERSION);

    server::serve(config).await
}

/// Compact `[LEVEL] message` log format; `RUST_LOG` overrides the default
/// `info` filter.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });

    let _ = builder.try_init();
}
