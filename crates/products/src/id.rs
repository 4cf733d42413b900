//! Backend-assigned product identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a product record.
///
/// Assigned by the backend and treated as opaque: the client never inspects
/// or normalizes it, it only echoes it back in request paths. Parsing keeps
/// the text exactly as given, so a parsed id equals the decoded one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("product id cannot be empty")]
    Empty,
}

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}
