use super::scan::scan;
use super::metadata::{TagNames, resolve_names, split_artist_title, title_case};
use super::*;
use crate::config::LibrarySettings;
use std::fs;
use tempfile::tempdir;

#[test]
fn split_prefers_artist_dash_title_for_long_or_lowercase_right_half() {
    assert_eq!(
        split_artist_title("queen - bohemian rhapsody"),
        Some(("queen".to_string(), "bohemian rhapsody".to_string()))
    );
    assert_eq!(
        split_artist_title("Radiohead - Everything In Its Right Place"),
        Some((
            "Radiohead".to_string(),
            "Everything In Its Right Place".to_string()
        ))
    );
}

#[test]
fn split_treats_short_capitalized_right_half_as_artist() {
    assert_eq!(
        split_artist_title("blinding lights - The Weeknd"),
        Some(("The Weeknd".to_string(), "blinding lights".to_string()))
    );
}

#[test]
fn split_needs_spaced_dash() {
    assert_eq!(split_artist_title("no-dash-here"), None);
    assert_eq!(split_artist_title(" - Title"), None);
    assert_eq!(split_artist_title("Plain Title"), None);
}

#[test]
fn title_case_capitalizes_each_word() {
    assert_eq!(title_case("one more time"), "One More Time");
    assert_eq!(title_case("  DAFT   punk "), "Daft Punk");
    assert_eq!(title_case(""), "");
}

#[test]
fn tags_win_over_filename() {
    let tags = TagNames {
        title: Some("Real Title".into()),
        artist: Some("AC/DC".into()),
    };
    let (title, artist) = resolve_names("x - y.mp3", "x - y", tags);
    assert_eq!(title, "Real Title");
    assert_eq!(artist, "AC/DC");
}

#[test]
fn missing_tag_fields_are_filled_from_filename() {
    let tags = TagNames {
        title: Some("Tagged".into()),
        artist: None,
    };
    let (title, artist) = resolve_names("air - la femme d'argent.mp3", "air - la femme d'argent", tags);
    assert_eq!(title, "Tagged");
    assert_eq!(artist, "Air");
}

#[test]
fn names_never_empty() {
    let (title, artist) = resolve_names(".mp3", "", TagNames::default());
    assert_eq!(title, ".mp3");
    assert_eq!(artist, "Unknown");
}

#[test]
fn stem_strips_extension() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("Song.Name.mp3"), b"x").unwrap();
    let tracks = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(tracks[0].stem(), "Song.Name");
}

#[test]
fn index_is_memoized_until_invalidated() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();

    let index = LibraryIndex::new(dir.path(), LibrarySettings::default());
    assert_eq!(index.tracks().len(), 1);

    fs::write(dir.path().join("b.mp3"), b"x").unwrap();
    assert_eq!(index.tracks().len(), 1, "snapshot must not see new files");

    index.invalidate();
    assert_eq!(index.tracks().len(), 2);

    fs::write(dir.path().join("c.mp3"), b"x").unwrap();
    assert_eq!(index.rescan(), 3);
}

#[test]
fn find_by_file_name_is_exact() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.mp3"), b"x").unwrap();
    fs::write(dir.path().join("b.mp3"), b"x").unwrap();

    let index = LibraryIndex::new(dir.path(), LibrarySettings::default());
    let (pos, track) = index.find_by_file_name("b.mp3").unwrap();
    assert_eq!(pos, 1);
    assert_eq!(track.file_name, "b.mp3");
    assert!(index.find_by_file_name("B.mp3").is_none());
    assert!(index.find_by_file_name("b").is_none());
}
