use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::{audio_track::AudioTrack, enums::PlaylistType};

/// A playlist of audio tracks. Track ids follow the same explicit-only rule
/// as video playlists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioTrackPlaylist {
    pub id: i64,
    pub account_id: i64,
    pub reference_id: Option<String>,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub playlist_type: PlaylistType,
    pub audio_track_ids: Vec<i64>,
    pub audio_tracks: Vec<AudioTrack>,
}

impl Entity for AudioTrackPlaylist {
    const TYPE_NAME: &'static str = "AudioTrackPlaylist";

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "id",
            |p, v| {
                p.id = v.i64()?;
                Ok(())
            },
            |p, _| Ok((p.id != 0).then(|| WireValue::from(p.id))),
        ),
        Field::new(
            "referenceId",
            |p, v| {
                p.reference_id = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(text(&p.reference_id)),
        ),
        Field::new(
            "name",
            |p, v| {
                p.name = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(text(&p.name)),
        ),
        Field::new(
            "shortDescription",
            |p, v| {
                p.short_description = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(text(&p.short_description)),
        ),
        Field::new(
            "playlistType",
            |p, v| {
                p.playlist_type = v.wire_enum()?;
                Ok(())
            },
            |p, _| encode_enum(p.playlist_type),
        ),
        Field::new(
            "audioTrackIds",
            |p, v| {
                p.audio_track_ids = v.i64s()?;
                Ok(())
            },
            |p, _| {
                let explicit = !p.playlist_type.is_smart() && !p.audio_track_ids.is_empty();
                Ok(explicit.then(|| WireValue::from(p.audio_track_ids.clone())))
            },
        ),
        Field::read_only("accountId", |p, v| {
            p.account_id = v.i64()?;
            Ok(())
        }),
        Field::read_only("thumbnailURL", |p, v| {
            p.thumbnail_url = Some(v.string()?);
            Ok(())
        }),
        Field::read_only("audioTracks", |p, v| {
            p.audio_tracks = v.entities()?;
            Ok(())
        }),
    ];
}
