// src/infrastructure/util.rs
use crate::application::ports::util::TokenGenerator;
use uuid::Uuid;

const TOKEN_LEN: usize = 8;

#[derive(Default, Clone)]
pub struct UuidTokenGenerator;

impl TokenGenerator for UuidTokenGenerator {
    fn random_token(&self) -> String {
        Uuid::new_v4().simple().to_string()[..TOKEN_LEN].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_short_lowercase_hex() {
        let token = UuidTokenGenerator.random_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
