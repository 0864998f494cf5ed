pub mod checker_client;

pub use checker_client::CheckerClient;
