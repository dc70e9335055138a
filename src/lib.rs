// prompt2image - Gemini-backed prompt to image generation service

pub mod cli;
pub mod config;
pub mod error;
pub mod gemini;
pub mod server;
pub mod translation;
pub mod utils;
