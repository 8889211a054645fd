mod calls;
pub mod client;
pub mod endpoints;
pub mod transport;

pub use client::{ApiClient, extract_detail};
pub use endpoints::{Auth, Endpoint};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
