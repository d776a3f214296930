use std::error::Error;

use cadenza_config::logging::{self, LoggingConfig};
use cadenza_core::ReadModelProjector;
use cadenza_core::domain::*;
use cadenza_core::ports::LibraryRepository;
use cadenza_core::services::{Argon2Hasher, NewAccount, RegistrationService};
use cadenza_storage::SqliteLibraryRepository;
use serde::Serialize;

fn print<T: Serialize>(label: &str, value: &T) -> Result<(), Box<dyn Error>> {
  println!("{label}:\n{}\n", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
  logging::init(&LoggingConfig::load()?);

  // DATABASE_URL (from the environment or a .env file) wins over cadenza.toml.
  dotenvy::dotenv().ok();
  let repo = match std::env::var("DATABASE_URL") {
    Ok(url) => SqliteLibraryRepository::new(&url)?,
    Err(_) => SqliteLibraryRepository::new_from_config()?,
  };

  let alice = Artist::new("Alice");
  let bob = Artist::new("Bob");
  repo.save_artist(&alice)?;
  repo.save_artist(&bob)?;

  let nightfall = Song::new("Nightfall").with_main_artists([alice.id]).with_collaborators([alice.id, bob.id]);
  let daybreak = Song::new("Daybreak").with_main_artists([bob.id]);
  repo.save_song(&nightfall)?;
  repo.save_song(&daybreak)?;

  let chill = Playlist::new("Chill", PlaylistStatus::Published).with_songs([nightfall.id, daybreak.id]);
  repo.save_playlist(&chill)?;

  let registration = RegistrationService::new(repo, Argon2Hasher::default());
  let username = format!("smoke-{}", UserId::new());
  let user = registration.register(NewAccount {
    email: format!("{username}@example.com"),
    username,
    password: "smoke-password".into(),
    password2: "smoke-password".into(),
  })?;
  let repo = registration.repository();

  let played_song = PlayedSong::now(nightfall.id);
  repo.save_played_song(&played_song)?;
  let user_played_song = UserPlayedSong::new(user.id, played_song.id);
  repo.save_user_played_song(&user_played_song)?;

  let played_playlist = PlayedPlaylist::now(chill.id);
  repo.save_played_playlist(&played_playlist)?;
  let user_played_playlist = UserPlayedPlaylist::new(user.id, played_playlist.id);
  repo.save_user_played_playlist(&user_played_playlist)?;

  let projector = ReadModelProjector::new(repo);
  print("user", &projector.project_user(&user))?;
  print("artist", &projector.project_artist(&alice))?;
  print("song", &projector.project_song(&nightfall)?)?;
  print("playlist", &projector.project_playlist(&chill)?)?;
  print("played song", &projector.project_played_song(&played_song)?)?;
  print("user played song", &projector.project_user_played_song(&user_played_song)?)?;
  print("played playlist", &projector.project_played_playlist(&played_playlist)?)?;
  print("user played playlist", &projector.project_user_played_playlist(&user_played_playlist)?)?;

  Ok(())
}
