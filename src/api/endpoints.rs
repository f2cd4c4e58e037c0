use crate::riot_id::RiotId;
use url::Url;

pub const DATA_DRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";
pub const PROFILE_SITE_BASE: &str = "https://www.op.gg";

pub fn data_dragon_versions() -> String {
    format!("{}/api/versions.json", DATA_DRAGON_BASE)
}

pub fn data_dragon_champions(version: &str, locale: &str) -> String {
    format!("{}/cdn/{}/data/{}/champion.json", DATA_DRAGON_BASE, version, locale)
}

pub fn profile_icon(version: &str, icon_id: i64) -> String {
    format!("{}/cdn/{}/img/profileicon/{}.png", DATA_DRAGON_BASE, version, icon_id)
}

/// Deep link to the player's page on the third-party stats site.
pub fn profile_link(display_slug: &str, riot_id: &RiotId) -> Option<String> {
    let mut url = Url::parse(PROFILE_SITE_BASE).ok()?;
    url.path_segments_mut()
        .ok()?
        .pop_if_empty()
        .push("summoners")
        .push(display_slug)
        .push(&format!("{}-{}", riot_id.game_name, riot_id.tag_line));
    Some(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_data_dragon_urls() {
        assert_eq!(
            data_dragon_champions("14.25.1", "en_US"),
            "https://ddragon.leagueoflegends.com/cdn/14.25.1/data/en_US/champion.json"
        );
        assert_eq!(
            profile_icon("14.25.1", 6),
            "https://ddragon.leagueoflegends.com/cdn/14.25.1/img/profileicon/6.png"
        );
    }

    #[test]
    fn profile_link_escapes_the_name() {
        let id: RiotId = "Hide on bush#KR1".parse().unwrap();
        assert_eq!(
            profile_link("kr", &id).unwrap(),
            "https://www.op.gg/summoners/kr/Hide%20on%20bush-KR1"
        );
    }
}
