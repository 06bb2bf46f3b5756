mod config;
mod system;
mod utils;
