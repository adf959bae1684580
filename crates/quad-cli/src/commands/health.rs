//! `quad health` — probe the backend's `/healthz` endpoint.

use anyhow::Context;

use quad_client::SearchClient;

pub async fn handle(client: &SearchClient) -> anyhow::Result<()> {
    client
        .health()
        .await
        .with_context(|| format!("backend at {} is unhealthy", client.base_url()))?;
    println!("ok: {}", client.base_url());
    Ok(())
}
