pub mod demo;
pub mod error;
pub mod queue;
pub mod ticket;

use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    demo::run();
}
