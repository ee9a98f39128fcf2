use chrono::{FixedOffset, TimeZone, Utc};
use chronolist::config::parse_chunk_size;
use chronolist::types::{
    GetUserPlaylistsResponse, Page, PlaylistRef, PlaylistTracksResponse, Track,
};
use chronolist::utils::*;

// Helper function to create a test playlist reference
fn create_test_playlist(id: &str, name: &str, owner_id: &str) -> PlaylistRef {
    PlaylistRef {
        id: id.to_string(),
        name: name.to_string(),
        owner_id: owner_id.to_string(),
    }
}

#[test]
fn test_track_uri() {
    assert_eq!(
        track_uri("4uLU6hMCjMI75M1A2tKUQC"),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
}

#[test]
fn test_parse_added_at() {
    let parsed = parse_added_at("2021-07-04T18:22:05Z").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2021, 7, 4, 18, 22, 5).unwrap());

    // Epoch is a valid value, not a sentinel
    assert!(parse_added_at("1970-01-01T00:00:00Z").is_some());

    // Only second precision UTC with a trailing Z is accepted
    assert!(parse_added_at("2021-07-04T18:22:05").is_none());
    assert!(parse_added_at("2021-07-04T18:22:05.000Z").is_none());
    assert!(parse_added_at("2021-07-04T18:22:05+00:00").is_none());
    assert!(parse_added_at("2021-13-04T18:22:05Z").is_none());
    assert!(parse_added_at("").is_none());
}

#[test]
fn test_playlist_description() {
    let created = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
        .unwrap();

    assert_eq!(
        playlist_description(created),
        "Chronological list of sorted playlists created on 09/03/2024 at 07:05:01"
    );
}

#[test]
fn test_owned_playlists() {
    let playlists = vec![
        create_test_playlist("1", "Road Trip", "me"),
        create_test_playlist("2", "Discover Weekly", "spotify"),
        create_test_playlist("3", "Roadhouse Blues", "me"),
        create_test_playlist("4", "Gym", "me"),
    ];

    let owned = owned_playlists(playlists.clone(), "me", None);
    let ids: Vec<&str> = owned.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    // Search is case-insensitive and keeps the original order
    let found = owned_playlists(playlists, "me", Some("ROAD"));
    let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_playlist_table_rows() {
    let rows = playlist_table_rows(&[create_test_playlist("abc", "Mix", "me")]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Mix");
    assert_eq!(rows[0].id, "abc");
}

#[test]
fn test_parse_chunk_size() {
    assert_eq!(parse_chunk_size(None), 80);
    assert_eq!(parse_chunk_size(Some("50")), 50);
    assert_eq!(parse_chunk_size(Some(" 25 ")), 25);
    assert_eq!(parse_chunk_size(Some("0")), 80);
    assert_eq!(parse_chunk_size(Some("-3")), 80);
    assert_eq!(parse_chunk_size(Some("lots")), 80);
}

#[test]
fn test_playlist_tracks_response_into_page() {
    let json = r#"{
        "items": [
            {
                "added_at": "2020-02-01T10:00:00Z",
                "track": {
                    "id": "t1",
                    "name": "Song",
                    "artists": [{ "name": "First" }, { "name": "Second" }]
                }
            },
            {
                "added_at": "2020-02-02T10:00:00Z",
                "track": { "id": null, "name": "Local File", "artists": [{ "name": "Me" }] }
            },
            {
                "added_at": "2020-02-03T10:00:00Z",
                "track": null
            },
            {
                "added_at": null,
                "track": { "id": "t4", "name": "No Artists", "artists": [] }
            }
        ],
        "next": "https://api.spotify.com/v1/playlists/p/tracks?offset=100&limit=100"
    }"#;

    let response: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    let page: Page<Track> = response.into();

    assert_eq!(
        page.next.as_deref(),
        Some("https://api.spotify.com/v1/playlists/p/tracks?offset=100&limit=100")
    );
    assert_eq!(page.items.len(), 4);

    assert_eq!(page.items[0].id.as_deref(), Some("t1"));
    assert_eq!(page.items[0].primary_artist_name, "First");
    assert_eq!(page.items[0].title, "Song");
    assert_eq!(page.items[0].added_at, "2020-02-01T10:00:00Z");

    // Local files keep artist and title but have no id
    assert_eq!(page.items[1].id, None);
    assert_eq!(page.items[1].primary_artist_name, "Me");

    // Removed recordings keep only the timestamp
    assert_eq!(page.items[2].id, None);
    assert_eq!(page.items[2].title, "");
    assert_eq!(page.items[2].added_at, "2020-02-03T10:00:00Z");

    // A missing timestamp becomes empty and is rejected later by the sorter
    assert_eq!(page.items[3].added_at, "");
    assert_eq!(page.items[3].primary_artist_name, "");
}

#[test]
fn test_episodes_in_playlist_have_no_track_id() {
    let json = r#"{
        "items": [
            {
                "added_at": "2020-02-01T10:00:00Z",
                "track": { "id": "t1", "name": "Song", "type": "track", "artists": [{ "name": "A" }] }
            },
            {
                "added_at": "2020-02-02T10:00:00Z",
                "track": { "id": "e1", "name": "Episode 12", "type": "episode", "artists": [] }
            }
        ],
        "next": null
    }"#;

    let response: PlaylistTracksResponse = serde_json::from_str(json).unwrap();
    let page: Page<Track> = response.into();

    assert_eq!(page.items[0].id.as_deref(), Some("t1"));

    // Episodes keep their place in the timeline but are never appended
    assert_eq!(page.items[1].id, None);
    assert_eq!(page.items[1].title, "Episode 12");
    assert_eq!(page.items[1].added_at, "2020-02-02T10:00:00Z");
}

#[test]
fn test_user_playlists_response_into_page() {
    let json = r#"{
        "items": [
            { "id": "p1", "name": "Mine", "owner": { "id": "me" } },
            { "id": "p2", "name": "Theirs", "owner": { "id": "you" } }
        ],
        "next": null
    }"#;

    let response: GetUserPlaylistsResponse = serde_json::from_str(json).unwrap();
    let page: Page<PlaylistRef> = response.into();

    assert_eq!(page.next, None);
    assert_eq!(
        page.items,
        vec![
            create_test_playlist("p1", "Mine", "me"),
            create_test_playlist("p2", "Theirs", "you"),
        ]
    );
}
