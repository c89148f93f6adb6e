use std::io;
use thiserror::Error;

use crate::config;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] config::Error),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Http client error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),
}
