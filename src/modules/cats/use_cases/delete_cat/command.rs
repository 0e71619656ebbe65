use serde::Deserialize;

/// Returned by every delete, whether or not a cat matched.
pub const DELETE_CONFIRMATION: &str = "success";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeleteCat {
    pub id: i64,
}
