use sporlist::curation::Count;
use sporlist::types::{Artist, FrequencyEntry, Playlist, Track, TracksRef};
use sporlist::utils::*;

fn create_test_playlist(name: &str, description: &str, public: bool, total: u64) -> Playlist {
    Playlist {
        id: format!("{}_id", name),
        name: name.to_string(),
        description: description.to_string(),
        public,
        tracks: TracksRef { total },
    }
}

fn create_test_track(name: &str, artists: &[&str], preview_url: Option<&str>) -> Track {
    Track {
        id: format!("{}_id", name),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| Artist {
                id: format!("{}_id", a),
                name: a.to_string(),
                genres: Vec::new(),
            })
            .collect(),
        uri: format!("spotify:track:{}_id", name),
        preview_url: preview_url.map(String::from),
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    assert_eq!(verifier.len(), 128);
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(verifier, generate_code_verifier());
}

#[test]
fn test_generate_code_challenge() {
    let challenge = generate_code_challenge("test_verifier_123");

    assert!(!challenge.is_empty());
    assert_eq!(challenge, generate_code_challenge("test_verifier_123"));
    assert_ne!(challenge, generate_code_challenge("different_verifier"));
    // URL-safe base64 without padding
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_format_playlist() {
    let public = create_test_playlist("Road Trip", "songs for the car", true, 42);
    assert_eq!(
        format_playlist(&public),
        "Road Trip | songs for the car | Public | 42 tracks"
    );

    let private = create_test_playlist("Focus", "", false, 0);
    assert_eq!(format_playlist(&private), "Focus | Private | 0 tracks");
}

#[test]
fn test_format_track() {
    let with_preview = create_test_track(
        "Song",
        &["Artist A", "Artist B"],
        Some("https://p.scdn.co/mp3-preview/abc"),
    );
    assert_eq!(
        format_track(&with_preview),
        "Song | Artist A, Artist B | Link: https://p.scdn.co/mp3-preview/abc"
    );

    let without_preview = create_test_track("Other", &["Solo"], None);
    assert_eq!(format_track(&without_preview), "Other | Solo | Link: -");
}

#[test]
fn test_frequency_rows_are_ranked_from_one() {
    let entries = vec![
        FrequencyEntry {
            key: "rock".to_string(),
            count: 3,
        },
        FrequencyEntry {
            key: "pop".to_string(),
            count: 2,
        },
    ];

    let rows = frequency_rows(&entries);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rank, 1);
    assert_eq!(rows[0].name, "rock");
    assert_eq!(rows[0].times, 3);
    assert_eq!(rows[1].rank, 2);
    assert_eq!(rows[1].name, "pop");
}

#[test]
fn test_playlist_rows() {
    let rows = playlist_rows(&[create_test_playlist("Mix", "", false, 7)]);

    assert_eq!(rows[0].visibility, "Private");
    assert_eq!(rows[0].tracks, 7);
    assert_eq!(rows[0].id, "Mix_id");
}

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("10"), Ok(Count::Top(10)));
    assert_eq!(parse_count(" 3 "), Ok(Count::Top(3)));
    assert_eq!(parse_count("all"), Ok(Count::All));
    assert_eq!(parse_count("ALL"), Ok(Count::All));
    assert!(parse_count("0").is_err());
    assert!(parse_count("-5").is_err());
    assert!(parse_count("many").is_err());
}

#[test]
fn test_deserialize_playlist_with_null_fields() {
    let json = r#"{
        "id": "p1",
        "name": "Untitled",
        "description": null,
        "public": null,
        "tracks": { "total": 3 }
    }"#;

    let playlist: Playlist = serde_json::from_str(json).unwrap();

    assert_eq!(playlist.description, "");
    assert!(!playlist.public);
    assert_eq!(playlist.tracks.total, 3);
}

#[test]
fn test_deserialize_track_without_genres_or_preview() {
    let json = r#"{
        "id": "t1",
        "name": "Song",
        "uri": "spotify:track:t1",
        "preview_url": null,
        "artists": [{ "id": "a1", "name": "Artist" }]
    }"#;

    let track: Track = serde_json::from_str(json).unwrap();

    assert_eq!(track.preview_url, None);
    assert!(track.artists[0].genres.is_empty());
}

#[test]
fn test_track_rows() {
    let tracks = vec![
        create_test_track("Song", &["Artist A", "Artist B"], Some("https://p.scdn.co/x")),
        create_test_track("Other", &["Solo"], None),
    ];

    let rows = track_rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Song");
    assert_eq!(rows[0].artists, "Artist A, Artist B");
    assert_eq!(rows[0].preview, "https://p.scdn.co/x");
    assert_eq!(rows[1].preview, "-");
}
