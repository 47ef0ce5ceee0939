//! Opaque token generation.

use uuid::Uuid;

use droplink_domain::traits::StringGenerator;

/// [`StringGenerator`] producing random UUID-v4 tokens.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Creates a new generator instance.
    pub fn new() -> Self {
        Self
    }
}

impl StringGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}
