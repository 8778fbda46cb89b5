/// External subject ids (users, bots and chats) are 64-bit integers issued
/// by the identity source.
pub type UserId = i64;

/// External chat ids share the subject id space; a chat id is stored in the
/// subject slot of a group-marker grant.
pub type ChatId = i64;

/// Playlist ids are time-sortable UUIDv7 strings.
pub type PlaylistId = String;

/// Track ids are opaque external catalog ids.
pub type TrackId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
