mod build_client;
mod models;
mod utils;

pub use build_client::BuildClient;
pub use build_client::BuildClientError;
pub use models::*;
pub use utils::Organization;
