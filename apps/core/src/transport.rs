use serde::{Deserialize, Serialize};

use crate::contract::{self, ClearHistoryResponse, CoreRequest, CoreResponse};
use crate::history;
use crate::logging;
use crate::service::{SearchOutcome, SearchService};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidJson,
    History,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransportResponse {
    Ok { response: CoreResponse },
    Err { error: ErrorResponse },
}

// History is recorded here, not in the service: the core search stays
// side-effect-free and only submissions that produced results are kept.
pub fn handle_request(service: &SearchService, request: CoreRequest) -> TransportResponse {
    match request {
        CoreRequest::Search(search_request) => {
            let query = search_request.query.trim();
            let view = match service.search(query) {
                SearchOutcome::Suggestions => {
                    contract::suggestions_view(history::load_recent(service.config()))
                }
                SearchOutcome::Ranked(grouped) => {
                    if grouped.total > 0 {
                        if let Err(error) = history::record_query(service.config(), query) {
                            logging::warn(&format!("search history not recorded: {error}"));
                        }
                    }
                    contract::results_view(query, grouped)
                }
            };
            TransportResponse::Ok {
                response: CoreResponse::Search(view),
            }
        }
        CoreRequest::ClearHistory => match history::clear(service.config()) {
            Ok(()) => TransportResponse::Ok {
                response: CoreResponse::ClearHistory(ClearHistoryResponse { cleared: true }),
            },
            Err(message) => TransportResponse::Err {
                error: ErrorResponse {
                    code: ErrorCode::History,
                    message,
                },
            },
        },
    }
}

pub fn handle_json(service: &SearchService, payload: &str) -> String {
    let response = match serde_json::from_str::<CoreRequest>(payload) {
        Ok(request) => handle_request(service, request),
        Err(error) => TransportResponse::Err {
            error: ErrorResponse {
                code: ErrorCode::InvalidJson,
                message: error.to_string(),
            },
        },
    };

    serde_json::to_string(&response).expect("transport response should serialize")
}
