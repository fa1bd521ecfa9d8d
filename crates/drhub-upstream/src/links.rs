//! README link extraction and sequential health checks.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;

use crate::error::LinkError;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Markdown links `[title](target)` or bare `http(s)://` URLs.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)|(https?://[^\s)]+)").expect("valid regex")
});

/// A link found in a document. Bare URLs have an empty title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    pub title: String,
    pub url: String,
}

/// Extracts Markdown links whose target starts with `http` and bare URLs not
/// directly preceded by `(` or `[`. Duplicates by URL are dropped, first wins.
#[must_use]
pub fn extract_links(content: &str) -> Vec<ExtractedLink> {
    let mut links = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(content, pos) {
        let Some(whole) = caps.get(0) else { break };

        if let (Some(title), Some(target)) = (caps.get(1), caps.get(2)) {
            if target.as_str().starts_with("http") {
                links.push(ExtractedLink {
                    title: title.as_str().to_owned(),
                    url: target.as_str().to_owned(),
                });
            }
            pos = whole.end();
            continue;
        }

        let start = whole.start();
        let preceded_by_bracket = content[..start].ends_with(['(', '[']);
        if preceded_by_bracket {
            // Retry one character further on, the way a lookbehind would.
            pos = start + 1;
            continue;
        }

        links.push(ExtractedLink {
            title: String::new(),
            url: whole.as_str().to_owned(),
        });
        pos = whole.end();
    }

    let mut seen = HashSet::new();
    links.retain(|link| seen.insert(link.url.clone()));
    links
}

/// Reads the first readable file among `candidates`.
///
/// # Errors
///
/// Returns [`LinkError::ReadmeNotFound`] carrying the last I/O error when no
/// candidate can be read.
pub async fn read_first_readable(candidates: &[PathBuf]) -> Result<String, LinkError> {
    let mut last_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no candidates");
    for path in candidates {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "reading links from README");
                return Ok(content);
            }
            Err(e) => last_err = e,
        }
    }

    Err(LinkError::ReadmeNotFound {
        tried: candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
        source: last_err,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkResult {
    pub title: String,
    pub url: String,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub total_links: usize,
    pub broken_links: usize,
    pub results: Vec<LinkResult>,
}

impl LinkReport {
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Link verification completed. Found {} broken links out of {} total links.",
            self.broken_links, self.total_links
        )
    }
}

/// Checks links one at a time with a fixed pause between requests.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
    delay: Duration,
}

impl LinkChecker {
    /// # Errors
    ///
    /// Returns [`LinkError::Client`] if the `reqwest::Client` cannot be built.
    pub fn new(timeout: Duration, delay: Duration) -> Result<Self, LinkError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(BROWSER_USER_AGENT)
            .build()?;
        Ok(Self { client, delay })
    }

    /// `HEAD` the URL, following redirects; a 405 is retried as `GET`.
    /// Healthy means a final status below 400. Any request failure, timeout
    /// included, counts as broken.
    pub async fn check(&self, url: &str) -> bool {
        match self.status_of(Method::HEAD, url).await {
            Some(StatusCode::METHOD_NOT_ALLOWED) => self
                .status_of(Method::GET, url)
                .await
                .is_some_and(|status| status.as_u16() < 400),
            Some(status) => status.as_u16() < 400,
            None => false,
        }
    }

    async fn status_of(&self, method: Method, url: &str) -> Option<StatusCode> {
        match self.client.request(method.clone(), url).send().await {
            Ok(response) => Some(response.status()),
            Err(e) => {
                tracing::debug!(%method, url, error = %e, "link check failed");
                None
            }
        }
    }

    /// Checks every link in order and builds the report.
    pub async fn verify(&self, links: Vec<ExtractedLink>) -> LinkReport {
        let total_links = links.len();
        let mut results = Vec::with_capacity(total_links);

        for (index, link) in links.into_iter().enumerate() {
            if index > 0 && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            let status = self.check(&link.url).await;
            if !status {
                tracing::info!(url = %link.url, "broken link");
            }
            results.push(LinkResult {
                title: link.title,
                url: link.url,
                status,
            });
        }

        let broken_links = results.iter().filter(|r| !r.status).count();
        LinkReport {
            total_links,
            broken_links,
            results,
        }
    }

    /// Reads the first available README and verifies every link in it.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::ReadmeNotFound`] when no candidate can be read.
    pub async fn verify_readme(&self, candidates: &[PathBuf]) -> Result<LinkReport, LinkError> {
        let content = read_first_readable(candidates).await?;
        let report = self.verify(extract_links(&content)).await;
        tracing::info!(
            total = report.total_links,
            broken = report.broken_links,
            "link verification complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(links: &[ExtractedLink]) -> Vec<&str> {
        links.iter().map(|l| l.url.as_str()).collect()
    }

    #[test]
    fn extracts_markdown_and_bare_links() {
        let links = extract_links(
            "See [Docs](https://docs.dev/start) and https://blog.dev/post for more.",
        );
        assert_eq!(
            links,
            vec![
                ExtractedLink {
                    title: "Docs".to_owned(),
                    url: "https://docs.dev/start".to_owned()
                },
                ExtractedLink {
                    title: String::new(),
                    url: "https://blog.dev/post".to_owned()
                },
            ]
        );
    }

    #[test]
    fn skips_relative_markdown_targets() {
        let links = extract_links("[Local](./CONTRIBUTING.md) [Remote](http://x.dev)");
        assert_eq!(urls(&links), vec!["http://x.dev"]);
    }

    #[test]
    fn skips_bare_urls_directly_after_brackets() {
        let links = extract_links("(https://a.dev) [https://b.dev] https://c.dev");
        assert_eq!(urls(&links), vec!["https://c.dev"]);
    }

    #[test]
    fn finds_later_url_inside_bracketed_one() {
        let links = extract_links("(https://a.dev/?next=https://b.dev)");
        assert_eq!(urls(&links), vec!["https://b.dev"]);
    }

    #[test]
    fn drops_duplicate_urls_keeping_first_title() {
        let links = extract_links("[One](https://a.dev) https://a.dev [Two](https://a.dev)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].title, "One");
    }

    #[test]
    fn report_summary_counts() {
        let report = LinkReport {
            total_links: 3,
            broken_links: 1,
            results: Vec::new(),
        };
        assert_eq!(
            report.summary(),
            "Link verification completed. Found 1 broken links out of 3 total links."
        );
    }
}
