mod service;

pub use service::ShippingService;
