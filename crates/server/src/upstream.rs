use reqwest::StatusCode;
use thiserror::Error;
use tracing::warn;
use youbike::{feed, station::Station};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Response is not success: {0}")]
    Status(StatusCode),
    #[error("Malformed feed: {0}")]
    Feed(#[from] feed::Error),
}

/// Downloads the station feed, any failure yields an empty list.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Vec<Station> {
    match try_fetch(client, url).await {
        Ok(stations) => stations,
        Err(err) => {
            warn!("Station feed unavailable, showing no stations: {err}");
            Vec::new()
        }
    }
}

pub async fn try_fetch(client: &reqwest::Client, url: &str) -> Result<Vec<Station>, self::Error> {
    let response = client.get(url).send().await?;

    if response.status() != StatusCode::OK {
        return Err(self::Error::Status(response.status()));
    }

    let body = response.bytes().await?;
    Ok(feed::parse(&body)?)
}
