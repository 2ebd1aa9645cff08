use crate::ports::outbound::AdvisoryRepository;
use crate::shared::Result;
use crate::vuln_matching::domain::{
    Advisory, AdvisoryPackage, AdvisoryRange, AdvisoryReference, DatabaseSpecific, RangeEvent,
};
use dashmap::DashMap;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OSV API client acquiring the advisory corpus for a set of Go modules.
///
/// Uses the OSV.dev Batch Query API with package-only queries (one per
/// module, so the full set of advisories per package comes back), then
/// fetches each advisory's detail record for ranges and metadata.
///
/// # Security
/// - Implements rate limiting (10 req/sec)
/// - Implements timeout (30 seconds)
/// - Does not retry failed batch requests (fail fast)
pub struct OsvFeedClient {
    client: Client,
    api_url: String,
    detail_cache: DashMap<String, OsvVulnerability>,
}

impl OsvFeedClient {
    const API_ENDPOINT: &'static str = "https://api.osv.dev/v1/querybatch";
    const DETAIL_ENDPOINT: &'static str = "https://api.osv.dev/v1/vulns";
    const ECOSYSTEM: &'static str = "Go";
    const TIMEOUT_SECONDS: u64 = 30;
    const RATE_LIMIT_MS: u64 = 100; // 10 req/sec
    const MAX_BATCH_SIZE: usize = 100; // OSV API limit

    /// Creates a new OSV API client with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gosum-osv/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: Self::API_ENDPOINT.to_string(),
            detail_cache: DashMap::new(),
        })
    }

    /// Sends one batch of package-only queries and returns, per module,
    /// the ids of every advisory affecting that package.
    fn query_batch(&self, modules: &[String]) -> Result<Vec<OsvResult>> {
        let queries: Vec<OsvQuery> = modules
            .iter()
            .map(|module| OsvQuery {
                package: OsvPackage {
                    name: module.clone(),
                    ecosystem: Self::ECOSYSTEM.to_string(),
                },
            })
            .collect();

        let response = self
            .client
            .post(&self.api_url)
            .json(&OsvBatchQuery { queries })
            .send()?;

        if !response.status().is_success() {
            anyhow::bail!("OSV API returned status code {}", response.status());
        }

        let batch_response: OsvBatchResponse = response.json()?;
        Ok(batch_response.results)
    }

    /// Fetches one advisory's detail record and converts it to the
    /// corpus shape for the given module. Raw detail records are
    /// cached; the same vulnerability often affects several modules in
    /// one scan.
    fn fetch_advisory(&self, vuln_id: &str, module: &str) -> Result<Option<Advisory>> {
        if let Some(cached) = self.detail_cache.get(vuln_id) {
            return Ok(convert_to_advisory(&cached, module));
        }

        let url = format!("{}/{}", Self::DETAIL_ENDPOINT, vuln_id);
        let response = self.client.get(&url).send()?;

        if !response.status().is_success() {
            anyhow::bail!(
                "OSV API returned status code {} for vulnerability {}",
                response.status(),
                vuln_id
            );
        }

        let detail: OsvVulnerability = response.json()?;
        let advisory = convert_to_advisory(&detail, module);
        self.detail_cache.insert(vuln_id.to_string(), detail);
        Ok(advisory)
    }
}

impl AdvisoryRepository for OsvFeedClient {
    fn fetch_advisories(&self, modules: &[String]) -> Result<Vec<Advisory>> {
        // Step 1: Batch queries resolving module -> advisory ids
        let mut module_vulns: Vec<(String, Vec<String>)> = Vec::new();

        for chunk in modules.chunks(Self::MAX_BATCH_SIZE) {
            if !module_vulns.is_empty() {
                std::thread::sleep(Duration::from_millis(Self::RATE_LIMIT_MS));
            }

            let results = self.query_batch(chunk)?;
            for (module, result) in chunk.iter().zip(results.into_iter()) {
                let ids = result.vulns.into_iter().map(|v| v.id).collect();
                module_vulns.push((module.clone(), ids));
            }
        }

        // Step 2: Detail fetch per advisory id
        let mut advisories = Vec::new();
        for (module, ids) in module_vulns {
            for vuln_id in ids {
                match self.fetch_advisory(&vuln_id, &module) {
                    Ok(Some(advisory)) => advisories.push(advisory),
                    Ok(None) => {}
                    Err(e) => {
                        // One unreachable detail record should not kill
                        // the whole corpus fetch
                        eprintln!("Warning: Failed to fetch details for {}: {}", vuln_id, e);
                    }
                }

                std::thread::sleep(Duration::from_millis(Self::RATE_LIMIT_MS));
            }
        }

        Ok(advisories)
    }
}

/// Maps an advisory id prefix to its publishing database label.
/// The corpus records carry no explicit database field; the id scheme
/// identifies the source.
fn database_label(vuln_id: &str) -> String {
    if vuln_id.starts_with("GHSA-") {
        "Github Advisory Database".to_string()
    } else if vuln_id.starts_with("GO-") {
        "Go Vulnerability Database".to_string()
    } else if vuln_id.starts_with("CVE-") {
        "CVE Database".to_string()
    } else {
        "Unknown Database".to_string()
    }
}

/// Converts an OSV detail record into the corpus advisory shape for one
/// module, keeping only the ranges of the affected entry matching that
/// module's package name.
fn convert_to_advisory(detail: &OsvVulnerability, module: &str) -> Option<Advisory> {
    let affected = detail
        .affected
        .iter()
        .find(|entry| entry.package.as_ref().is_some_and(|p| p.name == module))?;

    let ranges = affected
        .ranges
        .iter()
        .map(|range| AdvisoryRange {
            events: range
                .events
                .iter()
                .map(|event| RangeEvent {
                    introduced: event.introduced.clone(),
                    fixed: event.fixed.clone(),
                })
                .collect(),
        })
        .collect();

    let database_specific = detail
        .database_specific
        .as_ref()
        .map(|db| DatabaseSpecific {
            url: db.url.clone(),
            severity: db.severity.clone(),
        });

    Some(Advisory {
        id: detail.id.clone(),
        aliases: detail.aliases.clone(),
        package: AdvisoryPackage {
            name: module.to_string(),
            ecosystem: Some(OsvFeedClient::ECOSYSTEM.to_string()),
        },
        ranges,
        database: database_label(&detail.id),
        summary: detail.summary.clone(),
        details: detail.details.clone(),
        references: detail
            .references
            .iter()
            .map(|reference| AdvisoryReference {
                url: reference.url.clone(),
            })
            .collect(),
        database_specific,
    })
}

// OSV API request/response structures

#[derive(Debug, Serialize)]
struct OsvBatchQuery {
    queries: Vec<OsvQuery>,
}

#[derive(Debug, Serialize)]
struct OsvQuery {
    package: OsvPackage,
}

#[derive(Debug, Serialize)]
struct OsvPackage {
    name: String,
    ecosystem: String, // "Go"
}

#[derive(Debug, Deserialize)]
struct OsvBatchResponse {
    results: Vec<OsvResult>,
}

#[derive(Debug, Default, Deserialize)]
struct OsvResult {
    #[serde(default)]
    vulns: Vec<OsvVulnRef>,
}

#[derive(Debug, Deserialize)]
struct OsvVulnRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct OsvVulnerability {
    id: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    references: Vec<OsvReference>,
    #[serde(default)]
    affected: Vec<OsvAffected>,
    #[serde(default)]
    database_specific: Option<OsvDatabaseSpecific>,
}

#[derive(Debug, Deserialize)]
struct OsvReference {
    url: String,
}

#[derive(Debug, Deserialize)]
struct OsvAffected {
    #[serde(default)]
    package: Option<OsvAffectedPackage>,
    #[serde(default)]
    ranges: Vec<OsvRange>,
}

#[derive(Debug, Deserialize)]
struct OsvAffectedPackage {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OsvRange {
    #[serde(default)]
    events: Vec<OsvEvent>,
}

#[derive(Debug, Deserialize)]
struct OsvEvent {
    #[serde(default)]
    introduced: Option<String>,
    #[serde(default)]
    fixed: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OsvDatabaseSpecific {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    severity: Option<String>,
}
