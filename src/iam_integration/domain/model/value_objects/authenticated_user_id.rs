/// Subject identifier taken from a verified token. Kept verbatim: no trimming, no case folding.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AuthenticatedUserId(String);

impl AuthenticatedUserId {
    pub fn new(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            return Err("subject_id must not be empty".to_string());
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthenticatedUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
