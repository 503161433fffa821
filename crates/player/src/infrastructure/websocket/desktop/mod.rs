//! Desktop feed client (tokio-tungstenite)

mod client;

pub use client::FeedClient;
