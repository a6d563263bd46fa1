use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    pub number: u64,
    pub is_prime: bool,
}

impl CheckResponse {
    pub fn new(number: u64, is_prime: bool) -> Self {
        Self { number, is_prime }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}
