#[tokio::main]
async fn main() {
    if let Err(e) = billed_lib::run().await {
        eprintln!("アプリケーションの実行に失敗しました: {e}");
        std::process::exit(1);
    }
}
