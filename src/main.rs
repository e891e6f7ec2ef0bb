#[tokio::main]
async fn main() {
    if let Err(e) = gesturedock_lib::run().await {
        eprintln!("gesturedock: {e}");
        std::process::exit(1);
    }
}
