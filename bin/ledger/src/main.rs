use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    moneta_ledger::run().await
}
