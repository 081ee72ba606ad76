//! Recommendation seeding and the accept/repeat cycle.
//!
//! A cycle samples up to [`SEED_SIZE`] values of the chosen [`SeedKind`] from
//! the playlist, asks Spotify for recommendations and drops every track that
//! is already in the playlist. The caller then picks which tracks to keep and
//! whether to run another cycle.
//!
//! Every cycle of a session samples from the track set the engine was built
//! with. Tracks accepted in earlier cycles are written to the playlist but do
//! not take part in later seeds or in the novelty filter.

use std::{collections::HashSet, fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    curation::{
        aggregate::artists_of, mutate::add_to_playlist,
        playlist::fetch_distinct_genres_of_tracks, sampler::sample_with,
    },
    error::Result,
    spotify::SpotifyApi,
    types::{Playlist, Track},
};

/// Maximum number of values in a seed.
pub const SEED_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Artists,
    Genres,
    Tracks,
}

impl SeedKind {
    pub const ALL: [SeedKind; 3] = [SeedKind::Artists, SeedKind::Genres, SeedKind::Tracks];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedKind::Artists => "artists",
            SeedKind::Genres => "genres",
            SeedKind::Tracks => "tracks",
        }
    }

    /// Query parameter carrying the seed values, e.g. `seed_artists`.
    pub fn query_param(&self) -> String {
        format!("seed_{}", self.as_str())
    }
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artists" | "artist" => Ok(SeedKind::Artists),
            "genres" | "genre" => Ok(SeedKind::Genres),
            "tracks" | "track" => Ok(SeedKind::Tracks),
            other => Err(format!(
                "Invalid seed '{}'. Valid seeds are: artists, genres, tracks",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSeed {
    pub kind: SeedKind,
    pub values: Vec<String>,
}

impl RecommendationSeed {
    /// The single `seed_<kind>` parameter with comma joined values.
    pub fn params(&self) -> Vec<(String, String)> {
        vec![(self.kind.query_param(), self.values.join(","))]
    }
}

/// Decisions the user makes between cycles.
pub trait CycleDecision {
    /// Chooses which of the novel recommendations to append to the playlist.
    fn accept(&mut self, recommended: &[Track]) -> Result<Vec<Track>>;

    /// Whether another cycle should run.
    fn again(&mut self) -> Result<bool>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub seed: RecommendationSeed,
    pub recommended: usize,
    pub accepted: usize,
}

pub struct RecommendationEngine<'a, A: SpotifyApi + ?Sized, R: Rng = StdRng> {
    api: &'a A,
    kind: SeedKind,
    tracks: Vec<Track>,
    known_ids: HashSet<String>,
    rng: R,
}

impl<'a, A: SpotifyApi + ?Sized> RecommendationEngine<'a, A, StdRng> {
    pub fn new(api: &'a A, tracks: Vec<Track>, kind: SeedKind) -> Self {
        Self::with_rng(api, tracks, kind, StdRng::from_os_rng())
    }
}

impl<'a, A: SpotifyApi + ?Sized, R: Rng> RecommendationEngine<'a, A, R> {
    pub fn with_rng(api: &'a A, tracks: Vec<Track>, kind: SeedKind, rng: R) -> Self {
        let known_ids = tracks.iter().map(|t| t.id.clone()).collect();
        Self {
            api,
            kind,
            tracks,
            known_ids,
            rng,
        }
    }

    pub fn kind(&self) -> SeedKind {
        self.kind
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Samples the seed values for the next request.
    ///
    /// Artists are drawn from every artist credit, so artists appearing on many
    /// tracks are more likely to be picked. Genres need an artist detail lookup
    /// and are deduplicated before sampling.
    pub async fn select_seed(&mut self) -> Result<RecommendationSeed> {
        let values = match self.kind {
            SeedKind::Artists => {
                let artists = artists_of(&self.tracks);
                sample_with(&artists, SEED_SIZE, &mut self.rng)
                    .into_iter()
                    .map(|a| a.id)
                    .collect()
            }
            SeedKind::Genres => {
                let genres = fetch_distinct_genres_of_tracks(self.api, &self.tracks).await?;
                sample_with(&genres, SEED_SIZE, &mut self.rng)
            }
            SeedKind::Tracks => sample_with(&self.tracks, SEED_SIZE, &mut self.rng)
                .into_iter()
                .map(|t| t.id)
                .collect(),
        };

        Ok(RecommendationSeed {
            kind: self.kind,
            values,
        })
    }

    /// Requests recommendations for `seed` and keeps only tracks not yet in the playlist.
    pub async fn recommend_for(&self, seed: &RecommendationSeed) -> Result<Vec<Track>> {
        let recommended = self.api.recommendations(&seed.params()).await?;
        Ok(self.novel(recommended))
    }

    /// One full cycle: seed, request, novelty filter.
    pub async fn recommend(&mut self) -> Result<(RecommendationSeed, Vec<Track>)> {
        let seed = self.select_seed().await?;
        let tracks = self.recommend_for(&seed).await?;
        Ok((seed, tracks))
    }

    /// Drops tracks whose id is already in the playlist, keeping service order.
    pub fn novel(&self, recommended: Vec<Track>) -> Vec<Track> {
        recommended
            .into_iter()
            .filter(|t| !self.known_ids.contains(&t.id))
            .collect()
    }

    /// Runs cycles until `decision` declines another one.
    ///
    /// Accepted tracks are written before the next cycle starts. The first
    /// failing call ends the session with its error.
    pub async fn run_session<D>(
        &mut self,
        playlist: &Playlist,
        decision: &mut D,
    ) -> Result<Vec<CycleReport>>
    where
        D: CycleDecision + ?Sized,
    {
        let mut reports = Vec::new();

        loop {
            let (seed, recommended) = self.recommend().await?;
            let accepted = decision.accept(&recommended)?;
            if !accepted.is_empty() {
                add_to_playlist(self.api, playlist, &accepted).await?;
            }

            reports.push(CycleReport {
                seed,
                recommended: recommended.len(),
                accepted: accepted.len(),
            });

            if !decision.again()? {
                break;
            }
        }

        Ok(reports)
    }
}
