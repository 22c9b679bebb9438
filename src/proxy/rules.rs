use crate::client::config::build_url_with_base;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

pub const DEFAULT_PROXY_RULE: &str = "/api/user=http://localhost:8001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("proxy rule must look like <prefix>=<origin>, got: {0}")]
    Format(String),
    #[error("proxy prefix must start with '/': {0}")]
    Prefix(String),
    #[error("invalid proxy target {target}: {reason}")]
    Target { target: String, reason: String },
}

/// Forward requests whose path starts with `prefix` to `target`, path unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: Url,
}

impl ProxyRule {
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.prefix)
    }

    /// Upstream URL for an incoming `path?query`.
    #[must_use]
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        build_url_with_base(self.target.as_str(), path_and_query)
    }
}

impl FromStr for ProxyRule {
    type Err = RuleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (prefix, target) = value
            .split_once('=')
            .ok_or_else(|| RuleError::Format(value.to_string()))?;
        let prefix = prefix.trim();
        let target = target.trim();

        if !prefix.starts_with('/') {
            return Err(RuleError::Prefix(prefix.to_string()));
        }

        let url = Url::parse(target).map_err(|err| RuleError::Target {
            target: target.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RuleError::Target {
                target: target.to_string(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(Self {
            prefix: prefix.to_string(),
            target: url,
        })
    }
}

/// Picks the longest matching prefix.
#[must_use]
pub fn select<'a>(rules: &'a [ProxyRule], path: &str) -> Option<&'a ProxyRule> {
    rules
        .iter()
        .filter(|rule| rule.matches(path))
        .max_by_key(|rule| rule.prefix.len())
}

#[cfg(test)]
mod tests {
    use super::{select, ProxyRule, RuleError, DEFAULT_PROXY_RULE};

    #[test]
    fn parses_default_rule() {
        let rule: ProxyRule = DEFAULT_PROXY_RULE.parse().unwrap();
        assert_eq!(rule.prefix, "/api/user");
        assert_eq!(rule.target.as_str(), "http://localhost:8001/");
        assert_eq!(
            rule.upstream_url("/api/user/profile?x=1"),
            "http://localhost:8001/api/user/profile?x=1"
        );
    }

    #[test]
    fn rejects_malformed_rules() {
        assert!(matches!("/api".parse::<ProxyRule>(), Err(RuleError::Format(_))));
        assert!(matches!(
            "api=http://localhost:8000".parse::<ProxyRule>(),
            Err(RuleError::Prefix(_))
        ));
        assert!(matches!(
            "/api=localhost".parse::<ProxyRule>(),
            Err(RuleError::Target { .. })
        ));
        assert!(matches!(
            "/api=ftp://localhost".parse::<ProxyRule>(),
            Err(RuleError::Target { .. })
        ));
    }

    #[test]
    fn longest_prefix_wins() {
        let rules: Vec<ProxyRule> = ["/api=http://localhost:8000", "/api/user=http://localhost:8001"]
            .iter()
            .map(|raw| raw.parse().unwrap())
            .collect();

        assert_eq!(
            select(&rules, "/api/user/quota").map(|r| r.target.port()),
            Some(Some(8001))
        );
        assert_eq!(
            select(&rules, "/api/v1/scan/ip").map(|r| r.target.port()),
            Some(Some(8000))
        );
        assert!(select(&rules, "/app/dashboard").is_none());
    }
}
