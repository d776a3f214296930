pub mod artist;
pub mod artist_role;
pub mod history;
pub mod ids;
pub mod playlist;
pub mod song;
pub mod user;

pub use artist::Artist;
pub use artist_role::{ArtistRole, CreditedArtist};
pub use history::{PlayedPlaylist, PlayedSong, UserPlayedPlaylist, UserPlayedSong};
pub use ids::{
  ArtistId, PlayedPlaylistId, PlayedSongId, PlaylistId, ProfileId, SongId, UserId, UserPlayedPlaylistId,
  UserPlayedSongId,
};
pub use playlist::{Playlist, PlaylistStatus};
pub use song::Song;
pub use user::{Profile, User};
