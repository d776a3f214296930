use crate::domain::{
  Artist, ArtistId, CreditedArtist, PlayedPlaylist, PlayedPlaylistId, PlayedSong, PlayedSongId, Playlist, PlaylistId,
  Profile, ProfileId, Song, SongId, User, UserId, UserPlayedPlaylist, UserPlayedPlaylistId, UserPlayedSong,
  UserPlayedSongId,
};
use crate::errors::CoreError;

/// Port de persistencia de la biblioteca.
///
/// El proyector solo usa la parte de lectura; las escrituras existen para el
/// flujo de registro y para quien alimenta la biblioteca (gestión de
/// playlists, tracking de reproducciones).
pub trait LibraryRepository {
  // --- Métodos de Comando (Escritura) ---
  fn save_user(&self, user: &User) -> Result<(), CoreError>;
  fn save_profile(&self, profile: &Profile) -> Result<(), CoreError>;
  fn save_artist(&self, artist: &Artist) -> Result<(), CoreError>;
  /// Guarda la canción y reemplaza sus créditos.
  fn save_song(&self, song: &Song) -> Result<(), CoreError>;
  /// Guarda la playlist y reemplaza su lista de canciones.
  fn save_playlist(&self, playlist: &Playlist) -> Result<(), CoreError>;
  fn save_played_song(&self, played: &PlayedSong) -> Result<(), CoreError>;
  fn save_user_played_song(&self, played: &UserPlayedSong) -> Result<(), CoreError>;
  fn save_played_playlist(&self, played: &PlayedPlaylist) -> Result<(), CoreError>;
  fn save_user_played_playlist(&self, played: &UserPlayedPlaylist) -> Result<(), CoreError>;

  // --- Métodos de Consulta (Lectura) por ID ---
  fn find_user(&self, id: UserId) -> Result<Option<User>, CoreError>;
  fn find_user_by_username(&self, username: &str) -> Result<Option<User>, CoreError>;
  fn find_profile(&self, id: ProfileId) -> Result<Option<Profile>, CoreError>;
  fn find_artist(&self, id: ArtistId) -> Result<Option<Artist>, CoreError>;
  fn find_song(&self, id: SongId) -> Result<Option<Song>, CoreError>;
  fn find_playlist(&self, id: PlaylistId) -> Result<Option<Playlist>, CoreError>;
  fn find_played_song(&self, id: PlayedSongId) -> Result<Option<PlayedSong>, CoreError>;
  fn find_user_played_song(&self, id: UserPlayedSongId) -> Result<Option<UserPlayedSong>, CoreError>;
  fn find_played_playlist(&self, id: PlayedPlaylistId) -> Result<Option<PlayedPlaylist>, CoreError>;
  fn find_user_played_playlist(&self, id: UserPlayedPlaylistId) -> Result<Option<UserPlayedPlaylist>, CoreError>;

  // --- Relaciones ---
  /// Todos los artistas acreditados en la canción, en cualquier rol.
  ///
  /// Un artista acreditado en ambos roles aparece dos veces; deduplicar es
  /// trabajo del llamador.
  fn song_artists(&self, song: SongId) -> Result<Vec<CreditedArtist>, CoreError>;
  /// Canciones de la playlist en orden de pertenencia.
  fn playlist_songs(&self, playlist: PlaylistId) -> Result<Vec<Song>, CoreError>;

  // --- Métodos de Consulta (Lectura) de Listado ---
  fn list_artists(&self) -> Result<Vec<Artist>, CoreError>;
  fn list_songs(&self) -> Result<Vec<Song>, CoreError>;
  fn list_playlists(&self) -> Result<Vec<Playlist>, CoreError>;
  /// Reproducciones de canciones del usuario, la más reciente primero.
  fn list_user_played_songs(&self, user: UserId) -> Result<Vec<UserPlayedSong>, CoreError>;
  /// Reproducciones de playlists del usuario, la más reciente primero.
  fn list_user_played_playlists(&self, user: UserId) -> Result<Vec<UserPlayedPlaylist>, CoreError>;
}
