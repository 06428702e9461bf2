//! Background RPC worker
//!
//! Executes daemon requests off the UI loop and sends typed responses back
//! over an unbounded channel. The UI loop drains the channel without
//! blocking, once per frame.
//!
//! Listing requests carry the sequence number the caller stamped them with;
//! the stamp travels through to the response untouched, so the response
//! handler can tell a current completion from a stale one. Requests are not
//! cancelled; superseded completions are simply discarded on arrival.

use std::collections::BTreeMap;
use tokio::sync::mpsc;

use crate::api::{Card, FolderEntry, JukeboxClient};
use crate::logic::path::decode;

#[derive(Debug, Clone)]
pub enum ApiRequest {
    /// List folder contents; `seq` ties the completion to this request
    ListFiles { path: String, seq: u64 },

    /// Fetch the full cards mapping
    ListCards,

    /// Bind music to an existing card
    RegisterMusic { card_id: String, uri: String },
}

#[derive(Debug)]
pub enum ApiResponse {
    FilesResult {
        path: String,
        seq: u64,
        entries: Result<Vec<FolderEntry>, String>,
    },

    CardsResult {
        cards: Result<BTreeMap<String, Card>, String>,
    },

    RegisterResult {
        card_id: String,
        result: Result<(), String>,
    },
}

/// Spawn the worker task; returns the request/response channel ends
pub fn spawn_api_service(
    client: JukeboxClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            // Each request runs in its own task so a slow listing cannot
            // hold up a registration behind it
            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}

async fn execute_request(client: &JukeboxClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::ListFiles { path, seq } => {
            let decoded = decode(&path);
            let entries = client
                .get_files(&decoded)
                .await
                .map_err(|e| e.to_string());

            ApiResponse::FilesResult { path, seq, entries }
        }

        ApiRequest::ListCards => {
            let cards = client.list_cards().await.map_err(|e| e.to_string());

            ApiResponse::CardsResult { cards }
        }

        ApiRequest::RegisterMusic { card_id, uri } => {
            let result = client
                .register_music(&card_id, &uri)
                .await
                .map_err(|e| e.to_string());

            ApiResponse::RegisterResult { card_id, result }
        }
    }
}
