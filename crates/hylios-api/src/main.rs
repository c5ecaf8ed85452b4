#[tokio::main]
async fn main() {
    if let Err(err) = hylios_api::run().await {
        tracing::error!(error = %err, "hylios-api failed");
        std::process::exit(1);
    }
}
