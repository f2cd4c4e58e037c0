use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Continental grouping the game API routes match and account requests through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutingCluster {
    Americas,
    Europe,
    Asia,
    Sea,
}

impl RoutingCluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingCluster::Americas => "americas",
            RoutingCluster::Europe => "europe",
            RoutingCluster::Asia => "asia",
            RoutingCluster::Sea => "sea",
        }
    }
}

impl fmt::Display for RoutingCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
    Cluster(RoutingCluster),
    /// Region code with no known cluster, passed through untouched.
    Passthrough(String),
}

impl Routing {
    pub fn as_str(&self) -> &str {
        match self {
            Routing::Cluster(cluster) => cluster.as_str(),
            Routing::Passthrough(region) => region,
        }
    }
}

impl fmt::Display for Routing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRegion {
    pub routing: Routing,
    pub display_slug: String,
}

const ROUTING_TABLE: &[(&str, RoutingCluster)] = &[
    ("na1", RoutingCluster::Americas),
    ("br1", RoutingCluster::Americas),
    ("la1", RoutingCluster::Americas),
    ("la2", RoutingCluster::Americas),
    ("euw1", RoutingCluster::Europe),
    ("eun1", RoutingCluster::Europe),
    ("tr1", RoutingCluster::Europe),
    ("ru", RoutingCluster::Europe),
    ("me1", RoutingCluster::Europe),
    ("kr", RoutingCluster::Asia),
    ("jp1", RoutingCluster::Asia),
    ("oc1", RoutingCluster::Sea),
    ("ph2", RoutingCluster::Sea),
    ("sg2", RoutingCluster::Sea),
    ("th2", RoutingCluster::Sea),
    ("tw2", RoutingCluster::Sea),
    ("vn2", RoutingCluster::Sea),
];

// Slugs used by the third-party stats site in profile URLs
const SLUG_TABLE: &[(&str, &str)] = &[
    ("na1", "na"),
    ("br1", "br"),
    ("la1", "lan"),
    ("la2", "las"),
    ("euw1", "euw"),
    ("eun1", "eune"),
    ("tr1", "tr"),
    ("ru", "ru"),
    ("me1", "me"),
    ("kr", "kr"),
    ("jp1", "jp"),
    ("oc1", "oce"),
    ("ph2", "ph"),
    ("sg2", "sg"),
    ("th2", "th"),
    ("tw2", "tw"),
    ("vn2", "vn"),
];

pub static STANDARD_REGIONS: Lazy<RegionTables> = Lazy::new(RegionTables::standard);

/// Immutable region lookup tables. Build once and hand out by reference.
#[derive(Debug, Clone)]
pub struct RegionTables {
    routing: HashMap<String, RoutingCluster>,
    slugs: HashMap<String, String>,
}

impl RegionTables {
    pub fn new<R, S>(routing: R, slugs: S) -> Self
    where
        R: IntoIterator<Item = (String, RoutingCluster)>,
        S: IntoIterator<Item = (String, String)>,
    {
        RegionTables {
            routing: routing.into_iter().collect(),
            slugs: slugs.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            ROUTING_TABLE.iter().map(|(code, cluster)| (code.to_string(), *cluster)),
            SLUG_TABLE.iter().map(|(code, slug)| (code.to_string(), slug.to_string())),
        )
    }

    /// Maps a region code to its routing cluster and profile-site slug.
    /// Unknown codes come back unchanged in both fields.
    pub fn normalize(&self, region: &str) -> NormalizedRegion {
        let routing = match self.routing.get(region) {
            Some(cluster) => Routing::Cluster(*cluster),
            None => Routing::Passthrough(region.to_string()),
        };
        let display_slug = self
            .slugs
            .get(region)
            .cloned()
            .unwrap_or_else(|| region.to_string());

        NormalizedRegion {
            routing,
            display_slug,
        }
    }

    /// Known region codes, sorted, for listings.
    pub fn known_regions(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .routing
            .keys()
            .chain(self.slugs.keys())
            .map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }
}

pub fn normalize_region(region: &str) -> NormalizedRegion {
    STANDARD_REGIONS.normalize(region)
}
