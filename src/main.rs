#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    community_backend::run().await;
}
