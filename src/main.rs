//! One-shot submit tool.
//!
//! Reads an address record as JSON on stdin and submits it through the
//! form: create when the record has no id, update otherwise. Wires the
//! same collaborators the embedding application would, so it doubles as
//! a smoke test against a real store.

use address_form::client::{AsyncStoreClient, AsyncStoreClientImpl};
use address_form::repositories::RestAddressRepository;
use address_form::{
    AddressForm, AddressRecord, Config, StoreAuthProvider, StoreClient, TracingNotifier,
};
use anyhow::{Context, Result};
use std::io::Read;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!("Submitting against store at {}", config.store_api_url);

    let sync_client = StoreClient::new(&config);
    let client = Arc::new(AsyncStoreClientImpl::new(sync_client)) as Arc<dyn AsyncStoreClient>;

    let repo = RestAddressRepository::new(client.clone());
    let auth = StoreAuthProvider::new(client);
    let notifier = TracingNotifier;

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let record: AddressRecord =
        serde_json::from_str(&input).context("stdin is not a valid address record")?;

    let mut form = AddressForm::edit(record);
    let outcome = form.submit(&auth, &repo, &notifier).await?;

    println!("{}", serde_json::to_string_pretty(outcome.record())?);
    Ok(())
}
