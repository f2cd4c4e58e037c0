use crate::api::models::MatchSummary;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    pub games: usize,
    pub wins: usize,
    pub win_rate_percent: u32,
    pub avg_kills: f64,
    pub avg_deaths: f64,
    pub avg_assists: f64,
    /// `(kills + assists) / deaths` to two decimals.
    pub kda_ratio: String,
    pub avg_duration_minutes: u64,
}

/// Reduces the given matches into headline KPIs, in whatever order they come.
/// Returns `None` when there is nothing to aggregate.
pub fn aggregate_kpis(matches: &[MatchSummary]) -> Option<KpiSummary> {
    if matches.is_empty() {
        return None;
    }

    let games = matches.len();
    let wins = matches.iter().filter(|m| m.win).count();

    // Integer sums keep the reduction exact and order-independent
    let kills: u64 = matches.iter().map(|m| m.kills as u64).sum();
    let deaths: u64 = matches.iter().map(|m| m.deaths as u64).sum();
    let assists: u64 = matches.iter().map(|m| m.assists as u64).sum();
    let duration: u128 = matches.iter().map(|m| m.duration as u128).sum();

    let n = games as f64;
    let avg_kills = kills as f64 / n;
    let avg_deaths = deaths as f64 / n;
    let avg_assists = assists as f64 / n;

    // Deathless stretches show the raw kill + assist average
    let ratio = if avg_deaths == 0.0 {
        avg_kills + avg_assists
    } else {
        (avg_kills + avg_assists) / avg_deaths
    };

    Some(KpiSummary {
        games,
        wins,
        win_rate_percent: (100.0 * wins as f64 / n).round() as u32,
        avg_kills,
        avg_deaths,
        avg_assists,
        kda_ratio: format!("{:.2}", ratio),
        avg_duration_minutes: (duration as f64 / n / 60.0).round() as u64,
    })
}
