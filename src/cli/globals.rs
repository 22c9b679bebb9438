use crate::client::ClientConfig;
use std::path::PathBuf;

/// Settings shared by every subcommand that talks to the API.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub client: ClientConfig,
    /// JSON file holding the session flag and the saved cookie header.
    pub session_file: PathBuf,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(client: ClientConfig, session_file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            session_file: session_file.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(ClientConfig::default(), "/tmp/pandora/session.json");
        assert_eq!(args.client.api_url, "http://localhost:8000");
        assert_eq!(args.session_file, PathBuf::from("/tmp/pandora/session.json"));
    }
}
