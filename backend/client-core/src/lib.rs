pub mod error;
pub mod gpu;
pub mod hello;

mod imagegen_client;
pub use imagegen_client::ImagegenClient;

pub const API_SERVER_HOSTNAME: &str = "0.0.0.0";
pub const API_SERVER_PORT: u16 = 8000;
pub const API_SERVER_BASE_URL: &str =
    const_format::concatcp!("http://", API_SERVER_HOSTNAME, ":", API_SERVER_PORT);
