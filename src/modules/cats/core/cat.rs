use serde::{Deserialize, Serialize};

pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cat {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("name must contain at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Checks a cat name against the entity schema. Only the upper bound is
/// enforced; an empty name is accepted. Length is measured in UTF-16 code
/// units, so a character outside the BMP counts twice.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let actual = name.encode_utf16().count();
    if actual > NAME_MAX_LEN {
        return Err(NameError::TooLong {
            max: NAME_MAX_LEN,
            actual,
        });
    }
    Ok(())
}

impl Cat {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), NameError> {
        validate_name(&self.name)
    }
}
