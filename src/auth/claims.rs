//! Claims carried by verified tokens, inserted into request extensions
//! by the authentication middleware.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Identifier of the authenticated user. Any JSON value, but required —
    /// a token without it fails verification.
    pub user_id: Value,
    /// Company the user acts for, if any.
    #[serde(default)]
    pub company_id: Option<Value>,
}
