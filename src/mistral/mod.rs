mod client;

pub use client::{ChatCompletion, CompletionClient, CompletionError};
