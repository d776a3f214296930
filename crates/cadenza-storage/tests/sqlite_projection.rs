use chrono::{Duration, SubsecRound, Utc};
use serde_json::json;

use cadenza_core::domain::*;
use cadenza_core::ports::LibraryRepository;
use cadenza_core::services::{Argon2Hasher, LibraryService, NewAccount, RegistrationError, RegistrationService};
use cadenza_core::ReadModelProjector;
use cadenza_storage::SqliteLibraryRepository;
use cadenza_storage::config::StorageConfig;

fn repo() -> SqliteLibraryRepository {
  SqliteLibraryRepository::open_in_memory().expect("in-memory database")
}

fn artist(repo: &SqliteLibraryRepository, name: &str) -> Artist {
  let artist = Artist::new(name);
  repo.save_artist(&artist).unwrap();
  artist
}

#[test]
fn song_round_trips_with_its_credits() {
  let repo = repo();
  let alice = artist(&repo, "Alice");
  let bob = artist(&repo, "Bob");
  let song = Song::new("Nightfall").with_main_artists([alice.id]).with_collaborators([alice.id, bob.id]);
  repo.save_song(&song).unwrap();

  assert_eq!(repo.find_song(song.id).unwrap(), Some(song.clone()));
  assert_eq!(repo.song_artists(song.id).unwrap().len(), 3);

  let record = ReadModelProjector::new(&repo).project_song(&song).unwrap();
  assert_eq!(record.artists, vec!["Alice", "Bob"]);
}

#[test]
fn saving_a_song_again_replaces_its_credits() {
  let repo = repo();
  let alice = artist(&repo, "Alice");
  let bob = artist(&repo, "Bob");
  let mut song = Song::new("Draft").with_main_artists([alice.id]);
  repo.save_song(&song).unwrap();

  song.name = "Final".into();
  song.main_artist_ids = vec![bob.id];
  repo.save_song(&song).unwrap();

  let record = ReadModelProjector::new(&repo).project_song(&song).unwrap();
  assert_eq!(serde_json::to_value(record).unwrap(), json!({ "name": "Final", "artists": ["Bob"] }));
}

#[test]
fn repeated_credit_in_one_role_is_stored_once() {
  let repo = repo();
  let alice = artist(&repo, "Alice");
  let song = Song::new("Echo").with_main_artists([alice.id, alice.id]);
  repo.save_song(&song).unwrap();

  assert_eq!(repo.song_artists(song.id).unwrap().len(), 1);
  assert_eq!(repo.find_song(song.id).unwrap().unwrap().main_artist_ids, vec![alice.id]);
}

#[test]
fn playlist_keeps_membership_order_and_status() {
  let repo = repo();
  let b = Song::new("B");
  let a = Song::new("A");
  repo.save_song(&a).unwrap();
  repo.save_song(&b).unwrap();
  let chill = Playlist::new("Chill", PlaylistStatus::from_code("pub")).with_songs([a.id, b.id]);
  let drafts = Playlist::new("Drafts", PlaylistStatus::from_code("priv")).with_songs([b.id, a.id]);
  repo.save_playlist(&chill).unwrap();
  repo.save_playlist(&drafts).unwrap();

  let projector = ReadModelProjector::new(&repo);

  assert_eq!(
    serde_json::to_value(projector.project_playlist(&chill).unwrap()).unwrap(),
    json!({ "name": "Chill", "status": "public", "songs": ["A", "B"] })
  );
  assert_eq!(
    serde_json::to_value(projector.project_playlist(&drafts).unwrap()).unwrap(),
    json!({ "name": "Drafts", "status": "private", "songs": ["B", "A"] })
  );
  assert_eq!(repo.find_playlist(drafts.id).unwrap(), Some(drafts));
}

#[test]
fn played_playlist_embeds_resolved_artists() {
  let repo = repo();
  let c = artist(&repo, "C");
  let x = Song::new("X").with_main_artists([c.id]);
  let y = Song::new("Y");
  repo.save_song(&x).unwrap();
  repo.save_song(&y).unwrap();
  let playlist = Playlist::new("Mix", PlaylistStatus::Private).with_songs([x.id, y.id]);
  repo.save_playlist(&playlist).unwrap();

  let user = User { id: UserId::new(), username: "ana".into(), email: "ana@example.com".into(), password: "h".into() };
  repo.save_user(&user).unwrap();
  let played = PlayedPlaylist::now(playlist.id);
  repo.save_played_playlist(&played).unwrap();
  let user_played = UserPlayedPlaylist::new(user.id, played.id);
  repo.save_user_played_playlist(&user_played).unwrap();

  let projector = ReadModelProjector::new(&repo);
  let expected = json!({
    "playlist_name": "Mix",
    "songs": [
      { "song_name": "X", "artist_names": ["C"] },
      { "song_name": "Y", "artist_names": [] },
    ],
  });

  assert_eq!(serde_json::to_value(projector.project_played_playlist(&played).unwrap()).unwrap(), expected);
  assert_eq!(serde_json::to_value(projector.project_user_played_playlist(&user_played).unwrap()).unwrap(), expected);
  assert_eq!(repo.find_user_played_playlist(user_played.id).unwrap(), Some(user_played));
}

#[test]
fn user_song_history_is_newest_first() {
  let repo = repo();
  let alice = artist(&repo, "Alice");
  let first = Song::new("First").with_main_artists([alice.id]);
  let second = Song::new("Second");
  repo.save_song(&first).unwrap();
  repo.save_song(&second).unwrap();
  let user = User { id: UserId::new(), username: "bo".into(), email: "bo@example.com".into(), password: "h".into() };
  repo.save_user(&user).unwrap();

  // Stored with microsecond precision.
  let now = Utc::now().trunc_subsecs(6);
  for (song, at) in [(&first, now - Duration::minutes(5)), (&second, now)] {
    let played = PlayedSong { id: PlayedSongId::new(), song: song.id, played_at: at };
    repo.save_played_song(&played).unwrap();
    assert_eq!(repo.find_played_song(played.id).unwrap().unwrap().played_at, at);
    repo.save_user_played_song(&UserPlayedSong::new(user.id, played.id)).unwrap();
  }

  let history = LibraryService::new(repo).user_song_history(user.id).unwrap();

  assert_eq!(
    serde_json::to_value(history).unwrap(),
    json!([
      { "song_name": "Second", "artist_name": [] },
      { "song_name": "First", "artist_name": ["Alice"] },
    ])
  );
}

#[test]
fn profile_round_trips() {
  let repo = repo();
  let user = User { id: UserId::new(), username: "cy".into(), email: "cy@example.com".into(), password: "h".into() };
  repo.save_user(&user).unwrap();
  let profile = Profile { bio: Some("drums".into()), ..Profile::empty(user.id) };
  repo.save_profile(&profile).unwrap();

  assert_eq!(repo.find_profile(profile.id).unwrap(), Some(profile));
}

#[test]
fn registration_over_sqlite_hashes_and_projects_without_password() {
  let svc = RegistrationService::new(repo(), Argon2Hasher::default());

  let mismatch = svc.register(NewAccount {
    email: "dee@example.com".into(),
    username: "dee".into(),
    password: "one".into(),
    password2: "two".into(),
  });
  assert!(matches!(mismatch, Err(RegistrationError::PasswordMismatch)));
  assert!(svc.repository().find_user_by_username("dee").unwrap().is_none());

  let user = svc
    .register(NewAccount {
      email: "dee@example.com".into(),
      username: "dee".into(),
      password: "s3cret".into(),
      password2: "s3cret".into(),
    })
    .unwrap();

  let stored = svc.repository().find_user_by_username("dee").unwrap().unwrap();
  assert_eq!(stored.id, user.id);
  assert_ne!(stored.password, "s3cret");

  let value = serde_json::to_value(ReadModelProjector::new(svc.repository()).project_user(&stored)).unwrap();
  assert_eq!(value, json!({ "id": user.id.to_string(), "username": "dee", "email": "dee@example.com" }));
}

#[test]
fn file_database_with_wal_reopens_with_data() {
  let tmp = tempfile::tempdir().unwrap();
  let cfg = StorageConfig { db_path: tmp.path().join("library.db"), journal_mode: Some("WAL".into()) };
  let artist = Artist::new("Persisted");

  {
    let repo = SqliteLibraryRepository::from_config(&cfg).unwrap();
    repo.save_artist(&artist).unwrap();
  }

  let reopened = SqliteLibraryRepository::from_config(&cfg).unwrap();
  assert_eq!(reopened.list_artists().unwrap(), vec![artist]);
}
