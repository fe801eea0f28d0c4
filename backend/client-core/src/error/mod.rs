pub mod gpu;
pub mod hello;
pub mod imagegen_client;
