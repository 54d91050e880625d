use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::{self, ConfigError};
use crate::contract::{CoreRequest, SearchRequest};
use crate::logging;
use crate::service::{SearchService, ServiceError};
use crate::transport;

#[derive(Debug)]
pub enum RuntimeError {
    Config(ConfigError),
    Service(ServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "config error: {error}"),
            Self::Service(error) => write!(f, "service error: {error}"),
            Self::Io(error) => write!(f, "io error: {error}"),
        }
    }
}

impl std::error::Error for RuntimeError {}

impl From<ConfigError> for RuntimeError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<ServiceError> for RuntimeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub one_shot_query: Option<String>,
}

pub fn parse_cli_args(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let value = iter.next().ok_or("--config requires a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            "--query" => {
                let value = iter.next().ok_or("--query requires a value")?;
                options.one_shot_query = Some(value.clone());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

pub fn run_with_options(options: RunOptions) -> Result<(), RuntimeError> {
    if let Err(error) = logging::init() {
        eprintln!("[sensei-core] logging unavailable: {error}");
    }

    let config = config::load(options.config_path)?;
    if !config.config_path.exists() {
        config::save(&config)?;
        logging::info(&format!(
            "wrote default config to {}",
            config.config_path.display()
        ));
    }

    let service = SearchService::new(config)?;
    logging::info(&format!(
        "startup indexed_entries={} max_results={}",
        service.indexed_entries(),
        service.config().max_results
    ));

    if let Some(query) = options.one_shot_query {
        let request = serde_json::to_string(&CoreRequest::Search(SearchRequest { query }))
            .expect("search request should serialize");
        println!("{}", transport::handle_json(&service, &request));
        return Ok(());
    }

    serve_stdio(&service)
}

// One JSON request per line in, one JSON response per line out. The UI
// shell owns debouncing; every line is answered synchronously.
fn serve_stdio(service: &SearchService) -> Result<(), RuntimeError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let response = transport::handle_json(service, trimmed);
        writeln!(out, "{response}")?;
        out.flush()?;
    }

    Ok(())
}
