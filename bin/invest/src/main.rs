use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    moneta_invest::run().await
}
