use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A registered shortcut card.
///
/// Cards created through quick select carry `from_quick_select` plus the
/// action arguments; cards bound directly to a function carry `func`. A
/// record with neither renders with a blank description rather than failing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub from_quick_select: Option<String>,
    #[serde(default)]
    pub action: Option<CardAction>,
    #[serde(default)]
    pub func: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardAction {
    #[serde(default)]
    pub args: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    #[default]
    File,
    Playlist,
}

/// One entry of a folder listing, as returned by `mpd.get_files`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub uri: Option<String>,
}

impl FolderEntry {
    /// Address used when registering the entry to a card
    pub fn register_uri(&self) -> &str {
        self.uri.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Serialize)]
struct RpcEnvelope<'a, P: Serialize> {
    id: u64,
    op: &'a str,
    params: P,
}

/// Raw wire reply. The daemon is supposed to set exactly one of `result`
/// and `error`; `into_result` is the only way out of this struct, so the
/// other combinations cannot leak past the decode boundary.
#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl RawReply {
    fn into_result(self) -> Result<Value> {
        match (self.result, self.error) {
            (Some(result), None) => Ok(result),
            (None, Some(error)) => Err(anyhow::anyhow!("RPC error: {}", error)),
            (Some(_), Some(error)) => Err(anyhow::anyhow!(
                "Malformed RPC reply: result and error both present (error: {})",
                error
            )),
            (None, None) => Err(anyhow::anyhow!(
                "Malformed RPC reply: neither result nor error present"
            )),
        }
    }
}

#[derive(Clone)]
pub struct JukeboxClient {
    base_url: String,
    client: Client,
    next_id: Arc<AtomicU64>,
}

impl JukeboxClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: Client::new(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Issue one RPC call and decode the tagged reply
    async fn request<P: Serialize>(&self, op: &str, params: P) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let url = format!("{}/api/v1/rpc", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&RpcEnvelope { id, op, params })
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", op))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("RPC HTTP error {}: {}", status, text);
        }

        let reply: RawReply = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} reply", op))?;

        reply.into_result()
    }

    /// List the contents of a library folder. `path` is the decoded path,
    /// `./` for the library root.
    pub async fn get_files(&self, path: &str) -> Result<Vec<FolderEntry>> {
        #[derive(Serialize)]
        struct Params<'a> {
            path: &'a str,
        }

        let result = self.request("mpd.get_files", Params { path }).await?;
        serde_json::from_value(result).context("Failed to parse folder listing")
    }

    /// Fetch all registered cards, keyed by card id
    pub async fn list_cards(&self) -> Result<BTreeMap<String, Card>> {
        let result = self.request("cards.list", serde_json::json!({})).await?;
        serde_json::from_value(result).context("Failed to parse cards list")
    }

    /// Bind a piece of music to an existing card
    pub async fn register_music(&self, card_id: &str, uri: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Params<'a> {
            card_id: &'a str,
            uri: &'a str,
        }

        self.request("cards.register_music", Params { card_id, uri })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> RawReply {
        serde_json::from_str(json).expect("reply should deserialize")
    }

    #[test]
    fn test_reply_with_result_succeeds() {
        let value = reply(r#"{"result": [1, 2]}"#).into_result().unwrap();
        assert_eq!(value, serde_json::json!([1, 2]));
    }

    #[test]
    fn test_reply_with_error_fails() {
        let err = reply(r#"{"error": "boom"}"#).into_result().unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_reply_with_both_fields_is_malformed() {
        let err = reply(r#"{"result": 1, "error": "boom"}"#)
            .into_result()
            .unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_reply_with_neither_field_is_malformed() {
        let err = reply(r#"{}"#).into_result().unwrap_err();
        assert!(err.to_string().contains("Malformed"));
    }

    #[test]
    fn test_folder_entry_defaults() {
        let entry: FolderEntry = serde_json::from_str(r#"{"name": "song.mp3"}"#).unwrap();
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.register_uri(), "song.mp3");

        let entry: FolderEntry =
            serde_json::from_str(r#"{"name": "Movies", "type": "directory", "uri": "m/Movies"}"#)
                .unwrap();
        assert_eq!(entry.kind, EntryKind::Directory);
        assert_eq!(entry.register_uri(), "m/Movies");
    }

    #[test]
    fn test_card_with_missing_fields_deserializes() {
        let card: Card = serde_json::from_str(r#"{}"#).unwrap();
        assert!(card.from_quick_select.is_none());
        assert!(card.action.is_none());
        assert!(card.func.is_none());
    }
}
