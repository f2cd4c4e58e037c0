use crate::analysis::champions::ChampionDirectory;
use crate::analysis::kpi::KpiSummary;
use crate::analysis::mastery::{group_thousands, mastery_progress};
use crate::analysis::region::{NormalizedRegion, RegionTables};
use crate::api::models::{ChampionMastery, MatchSummary, RankedEntry, SummonerProfile};
use chrono::{DateTime, TimeZone, Utc};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const PLACEHOLDER: &str = "—";
const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    number: String,
    champion: String,
    result: String,
    kda: String,
    duration: String,
    played: String,
}

#[derive(Tabled)]
struct RegionRow {
    region: String,
    routing: String,
    slug: String,
}

pub struct ProfileHeader<'a> {
    pub riot_id: String,
    pub region_code: &'a str,
    pub region: &'a NormalizedRegion,
    pub icon_url: Option<String>,
    pub profile_link: Option<String>,
}

pub fn display_profile(profile: &SummonerProfile, header: &ProfileHeader<'_>) {
    let name = profile.name.as_deref().unwrap_or(PLACEHOLDER);
    let level = profile
        .level
        .map(|l| l.to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    println!("\n{}", format!("🎮 {} ", name).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());
    println!("{} {}", "Riot ID:".bold(), header.riot_id);
    println!("{} {}", "Level:".bold(), level);
    println!(
        "{} {} (routing: {})",
        "Region:".bold(),
        header.region_code,
        header.region.routing
    );
    if let Some(icon) = &header.icon_url {
        println!("{} {}", "Icon:".bold(), icon);
    }
    if let Some(link) = &header.profile_link {
        println!("{} {}", "Profile:".bold(), link.underline());
    }
}

pub fn display_top_champions(champions: &[ChampionMastery], directory: &ChampionDirectory) {
    println!("\n{}", "🏆 TOP CHAMPIONS".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    if champions.is_empty() {
        println!("{}", "No champion mastery data found.".yellow());
        return;
    }

    for mastery in champions {
        let (since, until) = mastery.progress_inputs();
        let progress = mastery_progress(since, until);
        let label = if progress.label.is_empty() {
            "points to next level unknown".to_string()
        } else {
            progress.label
        };

        println!(
            "{}  Mastery {}  {} pts",
            directory.name_for(mastery.champion_id).bold(),
            mastery.champion_level,
            group_thousands(mastery.champion_points as i64)
        );
        println!(
            "  {} {:>3}%  {}",
            progress_bar(progress.percent, BAR_WIDTH).green(),
            progress.percent,
            label.dimmed()
        );
    }
}

pub fn display_ranked(entry: Option<&RankedEntry>) {
    println!("\n{}", "📈 RANKED SOLO/DUO".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    match entry {
        Some(entry) if !entry.tier.is_empty() => {
            let win_rate = entry
                .win_rate_percent()
                .map(|wr| format!("{}% WR", wr))
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            println!(
                "{} {} {} LP  {} W / {} L ({})",
                entry.tier.bold(),
                entry.rank,
                entry.league_points,
                entry.wins.to_string().green(),
                entry.losses.to_string().red(),
                win_rate
            );
        }
        _ => println!("{}", "Unranked".yellow()),
    }
}

pub fn display_match_history(matches: &[MatchSummary], directory: &ChampionDirectory, now: DateTime<Utc>) {
    println!(
        "\n{}",
        format!("📊 RECENT MATCHES (Last {} Games)", matches.len()).bold().cyan()
    );
    println!("{}\n", "=".repeat(80).cyan());

    if matches.is_empty() {
        println!("{}", "No recent matches found.".yellow());
        return;
    }

    let rows: Vec<MatchRow> = matches
        .iter()
        .enumerate()
        .map(|(idx, game)| MatchRow {
            number: format!("{}", idx + 1),
            champion: directory.name_for(game.champion_id),
            result: if game.win {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            kda: format!("{}/{}/{}", game.kills, game.deaths, game.assists),
            duration: format_duration(game.duration),
            played: format_played_at(game.ts, now),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_kpis(kpis: Option<&KpiSummary>) {
    println!("\n{}", "Performance".bold().yellow());

    let Some(kpis) = kpis else {
        println!("• Win rate: {}", PLACEHOLDER);
        println!("• KDA: {}", PLACEHOLDER);
        println!("• Avg game: {}\n", PLACEHOLDER);
        return;
    };

    println!(
        "• Win rate: {}% ({}/{} games)",
        kpis.win_rate_percent, kpis.wins, kpis.games
    );
    println!(
        "• KDA: {} ({:.1} / {:.1} / {:.1})",
        kpis.kda_ratio.bold(),
        kpis.avg_kills,
        kpis.avg_deaths,
        kpis.avg_assists
    );
    println!("• Avg game: {} min\n", kpis.avg_duration_minutes);
}

pub fn display_regions(tables: &RegionTables) {
    let rows: Vec<RegionRow> = tables
        .known_regions()
        .into_iter()
        .map(|code| {
            let normalized = tables.normalize(code);
            RegionRow {
                region: code.to_string(),
                routing: normalized.routing.to_string(),
                slug: normalized.display_slug,
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn format_played_at(ts_millis: i64, now: DateTime<Utc>) -> String {
    let Some(played) = Utc.timestamp_millis_opt(ts_millis).single() else {
        return PLACEHOLDER.to_string();
    };

    let age = now.signed_duration_since(played);
    if age.num_minutes() < 1 {
        "just now".to_string()
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else if age.num_days() < 7 {
        format!("{}d ago", age.num_days())
    } else {
        played.format("%Y-%m-%d").to_string()
    }
}
