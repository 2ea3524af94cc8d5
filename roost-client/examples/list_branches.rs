//! Smoke demo: list branches from a running backend
//!
//! ```sh
//! ROOST_BACKEND_URL=http://localhost:3000 cargo run --example list_branches
//! ```

use roost_client::{BranchService, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Connecting");

    let service = BranchService::new(config.build()?);
    let branches = service.list().await?;

    if branches.is_empty() {
        println!("No branches yet.");
        return Ok(());
    }
    for branch in &branches {
        println!(
            "#{:<4} {:<24} {} room type(s), reg fee {}",
            branch.id,
            branch.name,
            branch.room_rate.len(),
            branch.reg_fee
        );
    }
    Ok(())
}
