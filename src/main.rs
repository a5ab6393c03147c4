mod audio;
mod config;
mod covers;
mod display;
mod error;
mod library;
mod playback;
mod runtime;
mod visualizer;
mod web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run().await
}
