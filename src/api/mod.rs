pub mod client;
pub mod filter;
pub mod managers;
pub mod models;
pub mod order;
pub mod request;

pub use client::SoftLayerClient;
pub use filter::{Filter, ObjectFilter, SortDirection};
pub use managers::Managers;
pub use request::ApiRequest;
