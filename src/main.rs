use muistutin::startup;
use tracing::{error, info};

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting muistutin");

    // A missing webhook URL is logged by load_config; the process still
    // exits normally, success and failure only differ in the log
    let Ok(config) = startup::load_config() else {
        return Ok(());
    };

    if let Err(e) = startup::run(&config).await {
        error!("Run aborted: {:?}", e);
    }

    Ok(())
}
