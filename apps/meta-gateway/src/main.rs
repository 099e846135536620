//! Meta Gateway - Entry Point
//!
//! Key-addressed vector gateway in front of a vector backend and a metadata store.

use core_config::tracing::install_color_eyre;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    meta_gateway::run().await
}
