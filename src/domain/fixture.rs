use zeroize::Zeroize;

use crate::error::{AppError, ErrPath};

/// File name of an artifact produced out-of-band, resolved against a base
/// directory before reading. Never an absolute or multi-component path.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct FixturePath {
    pub name: String,
}

impl FixturePath {
    pub fn new(name: String) -> Result<Self, AppError> {
        const FORBIDDEN: &[char] = &[
            '\0', '|', ';', '>', '<', '/', '\\', ':', '*', '?', '"', '\'',
        ];
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Path(ErrPath::EmptyFilename));
        }
        if name.chars().any(|c| c.is_whitespace()) || name.chars().any(|c| FORBIDDEN.contains(&c)) {
            return Err(AppError::Path(ErrPath::ForbiddenCharacters));
        }

        Ok(FixturePath { name })
    }
}

/// Expected artifact bytes, fixed at authoring time. Holds secret material,
/// wiped on drop.
pub struct ExpectedContent {
    bytes: Vec<u8>,
}

impl ExpectedContent {
    pub fn from_literal(literal: &str) -> Self {
        Self {
            bytes: literal.as_bytes().to_vec(),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Drop for ExpectedContent {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
