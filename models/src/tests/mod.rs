mod generate;
mod hello;
