//! Tavola client library
//!
//! A client for the Tavola restaurant-review API. The centerpiece is the
//! [`feed::FeedController`], an incremental, rating-filtered restaurant feed
//! driven by scroll and filter events. Around it: domain entities and port
//! traits (hexagonal style), reqwest adapters for the REST API, and an
//! injectable session store.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;
pub mod session;

#[cfg(test)]
pub(crate) mod test_utils;
