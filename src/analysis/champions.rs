use crate::api::models::DataDragonChampions;
use std::collections::HashMap;

/// Champion id -> display name, built once from Data Dragon.
#[derive(Debug, Clone, Default)]
pub struct ChampionDirectory {
    names: HashMap<i64, String>,
}

impl ChampionDirectory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_data_dragon(champions: &DataDragonChampions) -> Self {
        // Data Dragon keys the numeric id as a string in `key`
        let names = champions
            .data
            .values()
            .filter_map(|info| info.key.parse::<i64>().ok().map(|id| (id, info.name.clone())))
            .collect();

        ChampionDirectory { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name_for(&self, champion_id: i64) -> String {
        self.names
            .get(&champion_id)
            .cloned()
            .unwrap_or_else(|| format!("Champion #{}", champion_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ChampionDirectory {
        let body = r#"{
            "type": "champion",
            "version": "14.25.1",
            "data": {
                "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri"},
                "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong"},
                "Broken": {"id": "Broken", "key": "n/a", "name": "Broken"}
            }
        }"#;
        let champions: DataDragonChampions = serde_json::from_str(body).unwrap();
        ChampionDirectory::from_data_dragon(&champions)
    }

    #[test]
    fn resolves_names_by_numeric_key() {
        let directory = directory();
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.name_for(103), "Ahri");
        assert_eq!(directory.name_for(62), "Wukong");
    }

    #[test]
    fn unknown_ids_get_a_placeholder() {
        assert_eq!(directory().name_for(9999), "Champion #9999");
        assert!(ChampionDirectory::empty().is_empty());
        assert_eq!(ChampionDirectory::empty().name_for(7), "Champion #7");
    }
}
