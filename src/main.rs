//! Kivo main entrypoint.

use kivo::run;
use kivo::ui::messages::error;

#[tokio::main]
async fn main() {
    println!();
    if let Err(e) = run().await {
        error(e);
        std::process::exit(1);
    }
}
