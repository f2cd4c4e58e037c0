use serde::{Deserialize, Serialize};

// Lookup function request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest<'a> {
    pub summoner_name: String,
    pub region: &'a str,
}

// Lookup function response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupResponse {
    pub summoner: SummonerProfile,
    pub top_champions: Vec<ChampionMastery>,
    pub ranked_solo: Option<RankedEntry>,
    pub recent_matches: Vec<MatchSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerProfile {
    pub name: Option<String>,
    pub level: Option<i64>,
    pub profile_icon_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionMastery {
    pub champion_id: i64,
    pub champion_level: i64,
    pub champion_points: u64,
    pub champion_points_since_last_level: Option<f64>,
    pub champion_points_until_next_level: Option<f64>,
}

impl ChampionMastery {
    /// Missing counters become NaN so progress falls back to its empty value.
    pub fn progress_inputs(&self) -> (f64, f64) {
        (
            self.champion_points_since_last_level.unwrap_or(f64::NAN),
            self.champion_points_until_next_level.unwrap_or(f64::NAN),
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedEntry {
    pub tier: String,
    pub rank: String,
    pub league_points: i64,
    pub wins: u32,
    pub losses: u32,
}

impl RankedEntry {
    pub fn win_rate_percent(&self) -> Option<u32> {
        let games = self.wins as u64 + self.losses as u64;
        if games == 0 {
            None
        } else {
            Some((100.0 * self.wins as f64 / games as f64).round() as u32)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchSummary {
    pub champion_id: i64,
    #[serde(rename = "k")]
    pub kills: u32,
    #[serde(rename = "d")]
    pub deaths: u32,
    #[serde(rename = "a")]
    pub assists: u32,
    pub win: bool,
    /// Game length in seconds.
    pub duration: u64,
    /// Epoch milliseconds.
    pub ts: i64,
}

// Error body returned by the lookup function on failure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

// Contact form request body
#[derive(Debug, Serialize)]
pub struct ContactRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

// Data Dragon champion.json
#[derive(Debug, Deserialize)]
pub struct DataDragonChampions {
    pub data: std::collections::HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionInfo {
    pub name: String,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_lookup_payload() {
        let body = r#"{
            "summoner": {"name": "Faker", "level": 712, "profileIconId": 6},
            "topChampions": [
                {"championId": 7, "championLevel": 7, "championPoints": 512000,
                 "championPointsSinceLastLevel": 490400, "championPointsUntilNextLevel": -1}
            ],
            "rankedSolo": {"tier": "CHALLENGER", "rank": "I", "leaguePoints": 1400, "wins": 120, "losses": 80},
            "recentMatches": [
                {"championId": 7, "k": 10, "d": 0, "a": 5, "win": true, "duration": 1800, "ts": 1700000000000}
            ]
        }"#;

        let response: LookupResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.summoner.name.as_deref(), Some("Faker"));
        assert_eq!(response.summoner.level, Some(712));
        assert_eq!(response.top_champions[0].progress_inputs(), (490400.0, -1.0));

        let ranked = response.ranked_solo.unwrap();
        assert_eq!(ranked.tier, "CHALLENGER");
        assert_eq!(ranked.win_rate_percent(), Some(60));

        let game = &response.recent_matches[0];
        assert_eq!((game.kills, game.deaths, game.assists), (10, 0, 5));
        assert!(game.win);
        assert_eq!(game.duration, 1800);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let response: LookupResponse = serde_json::from_str("{}").unwrap();
        assert!(response.summoner.name.is_none());
        assert!(response.top_champions.is_empty());
        assert!(response.ranked_solo.is_none());
        assert!(response.recent_matches.is_empty());
    }

    #[test]
    fn missing_mastery_counters_become_nan() {
        let mastery: ChampionMastery =
            serde_json::from_str(r#"{"championId": 1, "championPoints": 10}"#).unwrap();
        let (since, until) = mastery.progress_inputs();
        assert!(since.is_nan());
        assert!(until.is_nan());
    }

    #[test]
    fn null_ranked_entry_is_unranked() {
        let response: LookupResponse = serde_json::from_str(r#"{"rankedSolo": null}"#).unwrap();
        assert!(response.ranked_solo.is_none());
        assert_eq!(RankedEntry::default().win_rate_percent(), None);
    }

    #[test]
    fn win_rate_survives_huge_records() {
        let entry = RankedEntry {
            wins: u32::MAX,
            losses: 1,
            ..RankedEntry::default()
        };
        assert_eq!(entry.win_rate_percent(), Some(100));
    }

    #[test]
    fn serializes_lookup_request_in_camel_case() {
        let request = LookupRequest {
            summoner_name: "Faker#KR1".to_string(),
            region: "kr",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"summonerName": "Faker#KR1", "region": "kr"}));
    }
}
