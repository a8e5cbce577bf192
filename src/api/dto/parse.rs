//! DTOs for the name normalization endpoint.

use serde::{Deserialize, Serialize};

/// Free-form recipe name to normalize. A missing `input` is treated as empty.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}
