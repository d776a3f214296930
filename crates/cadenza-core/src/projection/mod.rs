//! Read-model assembly: domain entities in, client-facing records out.

mod projector;
mod records;

pub use projector::{ReadModelProjector, distinct_artist_names};
pub use records::{
  ArtistRecord, PlayedPlaylistRecord, PlayedSongRecord, PlaylistRecord, PlaylistSongEntry, ProfileRecord, SongRecord,
  UserRecord,
};
