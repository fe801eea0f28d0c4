mod gpu;
mod hello;
mod imagegen_client;
