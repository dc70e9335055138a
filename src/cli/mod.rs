// CLI module for prompt2image

use clap::Parser;

/// prompt2image - Gemini-backed prompt to image generation service
#[derive(Parser, Debug)]
#[command(name = "prompt2image", version, about, long_about = None)]
pub struct Args {
    /// Override the configured listen port
    #[arg(long)]
    pub port: Option<u16>,
}
