pub mod audio_track;
pub mod audio_track_playlist;
pub mod containers;
pub mod cue_point;
pub mod enums;
pub mod error;
pub mod image;
pub mod logo_overlay;
pub mod playlist;
pub mod rendition;
pub mod video;

pub use audio_track::AudioTrack;
pub use audio_track_playlist::AudioTrackPlaylist;
pub use containers::{ItemCollection, ResultContainer};
pub use cue_point::CuePoint;
pub use error::ApiError;
pub use image::Image;
pub use logo_overlay::LogoOverlay;
pub use playlist::Playlist;
pub use rendition::Rendition;
pub use video::Video;
