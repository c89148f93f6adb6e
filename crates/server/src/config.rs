use thiserror::Error;
use youbike::feed;

pub const DEFAULT_PORT: u16 = 10000;

#[derive(Error, Debug)]
pub enum Error {
    #[error("PORT should be a port number, got {0:?}")]
    InvalidPort(String),
}

/// Process settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub feed_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            feed_url: feed::DEFAULT_URL.into(),
        }
    }
}

impl Config {
    /// Reads `PORT` and `YOUBIKE_FEED_URL`.
    pub fn from_env() -> Result<Self, self::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| self::Error::InvalidPort(port))?;
        }
        if let Some(feed_url) = lookup("YOUBIKE_FEED_URL").filter(|url| !url.trim().is_empty()) {
            config.feed_url = feed_url;
        }
        Ok(config)
    }
}

#[test]
fn defaults_without_env() {
    let config = Config::from_lookup(|_| None).unwrap();
    assert_eq!(config.port, 10000);
    assert_eq!(config.feed_url, feed::DEFAULT_URL);
}

#[test]
fn reads_port_and_feed() {
    let config = Config::from_lookup(|key| match key {
        "PORT" => Some("8080".into()),
        "YOUBIKE_FEED_URL" => Some("http://127.0.0.1:9000/feed.json".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.feed_url, "http://127.0.0.1:9000/feed.json");
}

#[test]
fn rejects_bad_port() {
    let err = Config::from_lookup(|key| (key == "PORT").then(|| "http".into())).unwrap_err();
    assert!(matches!(err, Error::InvalidPort(port) if port == "http"));
}
