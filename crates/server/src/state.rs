use handlebars::Handlebars;

use crate::{config::Config, error::Error, tmpl};

const USER_AGENT: &str = concat!("youbike-server/", env!("CARGO_PKG_VERSION"));

pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
    pub hbs: Handlebars<'static>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let hbs = tmpl::handlebars_init()?;
        Ok(Self {
            config,
            client,
            hbs,
        })
    }
}
