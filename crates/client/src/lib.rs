//! reqwest-backed gateway to the Zendesk Help Center API.

mod client;
#[cfg(test)]
mod client_tests;

pub use client::HelpCenterClient;
