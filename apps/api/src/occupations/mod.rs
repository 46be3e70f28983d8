// Occupation search and detail reports over O*NET Web Services.
// All remote calls go through onet_client; nothing here builds HTTP requests.

pub mod handlers;
pub mod models;
pub mod normalize;
pub mod payloads;
pub mod report;
pub mod search;

#[cfg(test)]
pub mod testing;
