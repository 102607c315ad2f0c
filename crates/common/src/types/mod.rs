use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body of the root liveness endpoint.
#[derive(Serialize, Deserialize, Debug)]
pub struct Liveness {
    pub message: String,
}
