use crate::analysis::champions::ChampionDirectory;
use crate::error::AppError;
use crate::riot_id::RiotId;
use ureq::Agent;

use super::endpoints;
use super::models::*;
use super::request::{self, decode_json, RequestError};

const LOOKUP_FAILED: &str = "Failed to fetch summoner data";
const LOOKUP_NETWORK_ERROR: &str = "Network error. Please try again.";

pub struct LookupClient {
    agent: Agent,
    url: String,
}

impl LookupClient {
    pub fn new(agent: Agent, url: impl Into<String>) -> Self {
        LookupClient {
            agent,
            url: url.into(),
        }
    }

    pub fn lookup(&self, riot_id: &RiotId, region: &str) -> Result<LookupResponse, AppError> {
        let payload = LookupRequest {
            summoner_name: riot_id.to_string(),
            region,
        };

        match request::post_json(&self.agent, &self.url, &payload) {
            Ok(reply) => Ok(decode_json(&reply)?),
            Err(RequestError::Status { body, .. }) => Err(AppError::Lookup(failure_detail(&body))),
            Err(RequestError::Network(_) | RequestError::Timeout) => {
                Err(AppError::Network(LOOKUP_NETWORK_ERROR.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Pulls the `error` message out of a failed lookup body, if there is one.
fn failure_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| LOOKUP_FAILED.to_string())
}

pub struct DataDragonClient {
    agent: Agent,
    locale: String,
}

impl DataDragonClient {
    pub fn new(agent: Agent, locale: impl Into<String>) -> Self {
        DataDragonClient {
            agent,
            locale: locale.into(),
        }
    }

    pub fn latest_version(&self) -> Result<String, AppError> {
        let reply = request::get(&self.agent, &endpoints::data_dragon_versions())?;
        let versions: Vec<String> = decode_json(&reply)?;
        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::JsonError("Data Dragon returned no versions".to_string()))
    }

    pub fn champion_directory(&self, version: &str) -> Result<ChampionDirectory, AppError> {
        let url = endpoints::data_dragon_champions(version, &self.locale);
        let reply = request::get(&self.agent, &url)?;
        let champions: DataDragonChampions = decode_json(&reply)?;
        Ok(ChampionDirectory::from_data_dragon(&champions))
    }
}
