//! The raw response pair handed to the contract engine.

use restcheck_core::{ResponseContract, ValidationReport};

/// Status and raw body of one API response.
///
/// The body stays a string until validation: the engine owns JSON parsing
/// so that an unparseable body surfaces as a `MalformedBody` violation
/// rather than a client error.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// Validate this response against a contract.
    pub fn validate_against(&self, contract: &ResponseContract) -> ValidationReport {
        contract.validate_text(self.status, &self.body)
    }
}
