mod common;

use std::collections::{HashSet, VecDeque};

use rand::{SeedableRng, rngs::StdRng};
use sporlist::curation::*;
use sporlist::error::{CurateError, Result};
use sporlist::types::Track;

use common::{Call, FakeSpotify, artist, artist_with_genres, playlist, track};

/// Accepts recommendations by id and answers "again" from a script.
struct ScriptedDecision {
    accept_ids: VecDeque<Vec<&'static str>>,
    again: VecDeque<bool>,
    offered: Vec<Vec<String>>,
}

impl ScriptedDecision {
    fn new(accept_ids: Vec<Vec<&'static str>>, again: Vec<bool>) -> Self {
        Self {
            accept_ids: accept_ids.into(),
            again: again.into(),
            offered: Vec::new(),
        }
    }
}

impl CycleDecision for ScriptedDecision {
    fn accept(&mut self, recommended: &[Track]) -> Result<Vec<Track>> {
        self.offered
            .push(recommended.iter().map(|t| t.id.clone()).collect());
        let wanted = self.accept_ids.pop_front().unwrap_or_default();
        Ok(recommended
            .iter()
            .filter(|t| wanted.contains(&t.id.as_str()))
            .cloned()
            .collect())
    }

    fn again(&mut self) -> Result<bool> {
        Ok(self.again.pop_front().unwrap_or(false))
    }
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(1234)
}

fn seed_values(call: &Call) -> (String, Vec<String>) {
    match call {
        Call::Recommendations(params) => {
            assert_eq!(params.len(), 1, "exactly one seed parameter");
            let (name, joined) = &params[0];
            let values = if joined.is_empty() {
                Vec::new()
            } else {
                joined.split(',').map(String::from).collect()
            };
            (name.clone(), values)
        }
        other => panic!("expected a recommendations call, got {:?}", other),
    }
}

#[tokio::test]
async fn test_novelty_filter_drops_known_tracks() {
    let a = artist("x", "X");
    let playlist_tracks = vec![track("A", &[a.clone()]), track("B", &[a.clone()])];
    let api = FakeSpotify::new().with_recommendations(vec![
        track("A", &[a.clone()]),
        track("C", &[a.clone()]),
        track("D", &[a.clone()]),
    ]);

    let mut engine =
        RecommendationEngine::with_rng(&api, playlist_tracks, SeedKind::Tracks, seeded());
    let (_, tracks) = engine.recommend().await.unwrap();

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["C", "D"]);
}

#[tokio::test]
async fn test_novelty_filter_keeps_service_order() {
    let a = artist("x", "X");
    let api = FakeSpotify::new();
    let engine = RecommendationEngine::with_rng(
        &api,
        vec![track("B", &[a.clone()])],
        SeedKind::Tracks,
        seeded(),
    );

    let kept = engine.novel(vec![
        track("Z", &[a.clone()]),
        track("B", &[a.clone()]),
        track("M", &[a.clone()]),
        track("A", &[a.clone()]),
    ]);

    let ids: Vec<&str> = kept.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["Z", "M", "A"]);
}

#[tokio::test]
async fn test_track_seed_samples_five_track_ids() {
    let a = artist("x", "X");
    let tracks: Vec<Track> = (0..12).map(|i| track(&format!("t{}", i), &[a.clone()])).collect();
    let api = FakeSpotify::new();

    let mut engine = RecommendationEngine::with_rng(&api, tracks.clone(), SeedKind::Tracks, seeded());
    engine.recommend().await.unwrap();

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    let (name, values) = seed_values(&calls[0]);
    assert_eq!(name, "seed_tracks");
    assert_eq!(values.len(), SEED_SIZE);
    let unique: HashSet<&String> = values.iter().collect();
    assert_eq!(unique.len(), SEED_SIZE);
    let ids: HashSet<String> = tracks.iter().map(|t| t.id.clone()).collect();
    assert!(values.iter().all(|v| ids.contains(v)));
}

#[tokio::test]
async fn test_artist_seed_uses_artist_ids() {
    let tracks = vec![
        track("1", &[artist("a", "A"), artist("b", "B")]),
        track("2", &[artist("c", "C")]),
    ];
    let api = FakeSpotify::new();

    let mut engine = RecommendationEngine::with_rng(&api, tracks, SeedKind::Artists, seeded());
    let seed = engine.select_seed().await.unwrap();

    assert_eq!(seed.kind, SeedKind::Artists);
    let mut values = seed.values.clone();
    values.sort();
    assert_eq!(values, vec!["a", "b", "c"]);
    assert_eq!(
        seed.params()[0].0,
        "seed_artists",
        "artist seeds go out as seed_artists"
    );
    // no lookup needed for artist seeds
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_genre_seed_fetches_details_and_dedups() {
    let tracks = vec![
        track("1", &[artist("a", "A")]),
        track("2", &[artist("b", "B"), artist("a", "A")]),
    ];
    let api = FakeSpotify::new()
        .with_artist(artist_with_genres("a", "A", &["rock", "pop"]))
        .with_artist(artist_with_genres("b", "B", &["pop", "jazz"]));

    let mut engine = RecommendationEngine::with_rng(&api, tracks, SeedKind::Genres, seeded());
    engine.recommend().await.unwrap();

    let calls = api.calls();
    assert_eq!(
        calls[0],
        Call::Artists(vec!["a".to_string(), "b".to_string()])
    );
    let (name, mut values) = seed_values(&calls[1]);
    assert_eq!(name, "seed_genres");
    values.sort();
    assert_eq!(values, vec!["jazz", "pop", "rock"]);
}

#[tokio::test]
async fn test_seed_params_are_comma_joined() {
    let seed = RecommendationSeed {
        kind: SeedKind::Genres,
        values: vec!["rock".to_string(), "jazz".to_string()],
    };

    assert_eq!(
        seed.params(),
        vec![("seed_genres".to_string(), "rock,jazz".to_string())]
    );
}

#[tokio::test]
async fn test_recommendation_failure_surfaces() {
    let a = artist("x", "X");
    let mut api = FakeSpotify::new();
    api.fail_recommendations = true;

    let mut engine =
        RecommendationEngine::with_rng(&api, vec![track("A", &[a])], SeedKind::Tracks, seeded());
    let err = engine.recommend().await.unwrap_err();

    assert!(matches!(err, CurateError::Service { .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_add_to_playlist_refreshes_then_adds_all_uris() {
    let a = artist("x", "X");
    let pl = playlist("p1", 2);
    let api = FakeSpotify::new();

    add_to_playlist(&api, &pl, &[track("C", &[a.clone()]), track("D", &[a])])
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![
            Call::RefreshCredential,
            Call::AddTracks(
                "p1".to_string(),
                vec!["spotify:track:C".to_string(), "spotify:track:D".to_string()]
            ),
        ]
    );
}

#[tokio::test]
async fn test_add_to_playlist_aborts_when_refresh_fails() {
    let a = artist("x", "X");
    let mut api = FakeSpotify::new();
    api.fail_refresh = true;

    let err = add_to_playlist(&api, &playlist("p1", 0), &[track("C", &[a])])
        .await
        .unwrap_err();

    assert!(matches!(err, CurateError::Auth(_)));
    assert_eq!(api.calls(), vec![Call::RefreshCredential]);
}

#[tokio::test]
async fn test_session_adds_accepted_and_repeats_on_original_tracks() {
    let a = artist("x", "X");
    let pl = playlist("p1", 2);
    let original = vec![track("A", &[a.clone()]), track("B", &[a.clone()])];
    let api = FakeSpotify::new().with_recommendations(vec![
        track("A", &[a.clone()]),
        track("C", &[a.clone()]),
        track("D", &[a.clone()]),
    ]);
    let mut decision = ScriptedDecision::new(vec![vec!["C"], vec![]], vec![true, false]);

    let mut engine =
        RecommendationEngine::with_rng(&api, original.clone(), SeedKind::Tracks, seeded());
    let reports = engine.run_session(&pl, &mut decision).await.unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].recommended, 2);
    assert_eq!(reports[0].accepted, 1);
    assert_eq!(reports[1].accepted, 0);

    // C was added in the first cycle but is still offered again: the track
    // set stays the one the session started with.
    assert_eq!(decision.offered, vec![vec!["C", "D"], vec!["C", "D"]]);
    assert_eq!(engine.tracks(), &original[..]);

    let calls = api.calls();
    let adds: Vec<&Call> = calls
        .iter()
        .filter(|c| matches!(c, Call::AddTracks(..)))
        .collect();
    assert_eq!(
        adds,
        vec![&Call::AddTracks(
            "p1".to_string(),
            vec!["spotify:track:C".to_string()]
        )]
    );

    // each cycle completes its write before the next request
    let kinds: Vec<&str> = calls
        .iter()
        .map(|c| match c {
            Call::Recommendations(_) => "recommend",
            Call::RefreshCredential => "refresh",
            Call::AddTracks(..) => "add",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["recommend", "refresh", "add", "recommend"]);
}

#[tokio::test]
async fn test_session_without_acceptance_never_writes() {
    let a = artist("x", "X");
    let api = FakeSpotify::new().with_recommendations(vec![track("C", &[a.clone()])]);
    let mut decision = ScriptedDecision::new(vec![vec![]], vec![false]);

    let mut engine =
        RecommendationEngine::with_rng(&api, vec![track("A", &[a])], SeedKind::Tracks, seeded());
    let reports = engine
        .run_session(&playlist("p1", 1), &mut decision)
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert!(
        api.calls()
            .iter()
            .all(|c| matches!(c, Call::Recommendations(_)))
    );
}

#[test]
fn test_seed_kind_parse_and_display() {
    assert_eq!("artists".parse::<SeedKind>(), Ok(SeedKind::Artists));
    assert_eq!("GENRES".parse::<SeedKind>(), Ok(SeedKind::Genres));
    assert_eq!(" track ".parse::<SeedKind>(), Ok(SeedKind::Tracks));
    assert!("albums".parse::<SeedKind>().is_err());

    for kind in SeedKind::ALL {
        assert_eq!(kind.to_string().parse::<SeedKind>(), Ok(kind));
        assert_eq!(kind.query_param(), format!("seed_{}", kind));
    }
}
