mod analysis;
mod api;
mod config;
mod contact;
mod display;
mod error;
mod riot_id;

use analysis::champions::ChampionDirectory;
use analysis::kpi::aggregate_kpis;
use analysis::region::{normalize_region, STANDARD_REGIONS};
use anyhow::Context;
use api::client::{DataDragonClient, LookupClient};
use api::endpoints;
use api::request::build_agent;
use clap::{Parser, Subcommand};
use config::Config;
use contact::{ContactClient, ContactForm, Delivery};
use display::output::{
    display_error, display_info, display_kpis, display_match_history, display_profile, display_ranked,
    display_regions, display_success, display_top_champions, display_warning, ProfileHeader,
};
use indicatif::ProgressBar;
use riot_id::RiotId;
use std::time::Duration;
use ureq::Agent;

#[derive(Parser, Debug)]
#[command(name = "Summoner Lookup")]
#[command(about = "Look up League of Legends players and reach the site owner", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show profile, top champions, ranked standing and recent matches
    Lookup {
        /// Riot ID in GameName#TAG form
        riot_id: String,

        /// Region (default: SUMMONER_REGION or na1)
        #[arg(short, long)]
        region: Option<String>,

        /// Number of recent matches to show and aggregate
        #[arg(short, long, default_value = "10")]
        matches: usize,

        /// Number of top champions to show
        #[arg(short, long, default_value = "3")]
        champions: usize,

        /// Show champion ids instead of fetching names from Data Dragon
        #[arg(long)]
        skip_champion_names: bool,
    },

    /// Send a message through the contact form endpoint
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// List known regions with their routing cluster and profile slug
    Regions,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Lookup {
            riot_id,
            region,
            matches,
            champions,
            skip_champion_names,
        } => {
            let mut config = Config::from_env()?;
            if let Some(region) = region {
                config.region = region;
            }
            let riot_id: RiotId = riot_id.parse()?;
            lookup(&config, &riot_id, matches, champions, skip_champion_names)
        }
        Command::Contact { name, email, message } => {
            let config = Config::from_env()?;
            let form = ContactForm { name, email, message }.validate()?;
            contact(&config, &form)
        }
        Command::Regions => {
            display_regions(&STANDARD_REGIONS);
            Ok(())
        }
    }
}

fn lookup(
    config: &Config,
    riot_id: &RiotId,
    match_count: usize,
    champion_count: usize,
    skip_champion_names: bool,
) -> anyhow::Result<()> {
    let agent = build_agent(config.timeout);
    let client = LookupClient::new(agent.clone(), config.require_lookup_url()?);

    display_info(&format!("Looking up {} in region {}", riot_id, config.region));

    let pb = spinner("Looking up...");
    let result = client.lookup(riot_id, &config.region);
    pb.finish_and_clear();
    let data = result.context("Summoner lookup failed")?;
    display_success("Summoner found!");

    let (version, directory) = if skip_champion_names {
        (None, ChampionDirectory::empty())
    } else {
        load_champion_directory(agent, &config.locale)
    };

    let region = normalize_region(&config.region);
    let header = ProfileHeader {
        riot_id: riot_id.to_string(),
        region_code: &config.region,
        region: &region,
        icon_url: version
            .as_deref()
            .zip(data.summoner.profile_icon_id)
            .map(|(v, icon)| endpoints::profile_icon(v, icon)),
        profile_link: endpoints::profile_link(&region.display_slug, riot_id),
    };
    display_profile(&data.summoner, &header);

    let top: Vec<_> = data.top_champions.iter().take(champion_count).cloned().collect();
    display_top_champions(&top, &directory);
    display_ranked(data.ranked_solo.as_ref());

    // Most recent first, as delivered
    let recent = &data.recent_matches[..match_count.min(data.recent_matches.len())];
    display_match_history(recent, &directory, chrono::Utc::now());
    display_kpis(aggregate_kpis(recent).as_ref());

    Ok(())
}

/// Champion names are cosmetic; any failure here degrades to bare ids.
fn load_champion_directory(agent: Agent, locale: &str) -> (Option<String>, ChampionDirectory) {
    let client = DataDragonClient::new(agent, locale);
    let pb = spinner("Loading champion names...");

    let loaded = client
        .latest_version()
        .and_then(|version| client.champion_directory(&version).map(|dir| (version, dir)));
    pb.finish_and_clear();

    match loaded {
        Ok((version, directory)) => {
            display_info(&format!("Loaded {} champion names (patch {})", directory.len(), version));
            (Some(version), directory)
        }
        Err(e) => {
            display_warning(&format!("Could not load champion names from Data Dragon: {}", e));
            (None, ChampionDirectory::empty())
        }
    }
}

fn contact(config: &Config, form: &ContactForm) -> anyhow::Result<()> {
    let client = ContactClient::new(build_agent(config.timeout), config.contact_url.clone());

    let pb = spinner("Sending...");
    let result = client.submit(form);
    pb.finish_and_clear();

    match result.context("Contact form submission failed")? {
        Delivery::Sent => display_success("Message sent successfully! Thank you for reaching out."),
        Delivery::LocalDemo => {
            display_success("Thanks! (Local demo) Your message was captured on the client.")
        }
    }
    Ok(())
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
