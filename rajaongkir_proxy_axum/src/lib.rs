mod error;
mod router;
mod shipping;

pub use error::{ErrorDetail, IntoResponseError};
pub use router::{proxy_router, proxy_router_no_trace};

// Re-export the service and its initialization function from rajaongkir_proxy crate
pub use rajaongkir_proxy::{ConfigError, ProxyConfig, ShippingService, init};
