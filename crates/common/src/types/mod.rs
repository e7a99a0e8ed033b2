use serde::{Deserialize, Serialize};

/// Body of `GET /api/ping`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pong {
    pub ok: bool,
    pub msg: String,
}

impl Default for Pong {
    fn default() -> Self {
        Self { ok: true, msg: "pong".into() }
    }
}

/// Body of `GET /api/visitas`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitTotal {
    pub total_visitas: u64,
}
