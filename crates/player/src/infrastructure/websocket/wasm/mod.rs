//! Browser feed client (gloo-net)

mod client;

pub use client::FeedClient;
