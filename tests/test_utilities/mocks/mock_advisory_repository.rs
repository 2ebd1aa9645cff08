use gosum_osv::prelude::*;

/// Mock AdvisoryRepository for testing that serves a fixed corpus
#[derive(Default)]
pub struct MockAdvisoryRepository {
    advisories: Vec<Advisory>,
    fail_with: Option<String>,
}

impl MockAdvisoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advisory_json(mut self, json: &str) -> Self {
        let advisory: Advisory = serde_json::from_str(json).expect("invalid advisory JSON");
        self.advisories.push(advisory);
        self
    }

    pub fn failing(message: &str) -> Self {
        Self {
            advisories: vec![],
            fail_with: Some(message.to_string()),
        }
    }
}

impl AdvisoryRepository for MockAdvisoryRepository {
    fn fetch_advisories(&self, _modules: &[String]) -> Result<Vec<Advisory>> {
        if let Some(message) = &self.fail_with {
            anyhow::bail!("{}", message);
        }
        Ok(self.advisories.clone())
    }
}
