mod client;
mod errors;
mod types;

pub use client::{RajaOngkirClient, RemoteClient};
pub use errors::UpstreamError;
pub use types::{ShippingCostQuery, UpstreamQuery};
