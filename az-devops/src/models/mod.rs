mod artifact;
mod build;
mod project;

use serde::{de::DeserializeOwned, Serialize};

pub use artifact::*;
pub use build::*;
pub use project::Project;

/// Re-shapes a generated API model into one of ours through its JSON form.
///
/// Both sides use the REST payload field names.
fn from_api_model<T, U>(model: &T) -> Result<U, serde_json::Error>
where
    T: Serialize,
    U: DeserializeOwned,
{
    serde_json::to_value(model).and_then(serde_json::from_value)
}
