use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, nullable, WireValue},
};

use super::{
    enums::{PlaylistType, TagInclusionRule},
    video::Video,
};

/// A playlist is an ordered collection of videos.
///
/// Explicit playlists list their videos by id. Smart playlists (any other
/// [`PlaylistType`]) are filled by the server from `filter_tags`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    pub account_id: i64,
    pub filter_tags: Vec<String>,
    /// Assigned by the server on creation; `0` for a playlist not yet created.
    pub id: i64,
    /// Required when creating. At most 100 characters.
    pub name: Option<String>,
    pub playlist_type: PlaylistType,
    /// User-assigned id, at most 150 characters. Lookups by reference id
    /// cannot handle commas.
    pub reference_id: Option<String>,
    pub short_description: Option<String>,
    pub tag_inclusion_rule: TagInclusionRule,
    pub thumbnail_url: Option<String>,
    pub video_ids: Vec<i64>,
    /// Full videos, populated by read calls only. Writes use `video_ids`.
    pub videos: Vec<Video>,
}

impl Entity for Playlist {
    const TYPE_NAME: &'static str = "Playlist";

    const FIELDS: &'static [Field<Self>] = &[
        Field::read_only("accountId", |p, v| {
            p.account_id = v.i64()?;
            Ok(())
        }),
        Field::new(
            "filterTags",
            |p, v| {
                p.filter_tags = v.strings()?;
                Ok(())
            },
            |p, _| Ok(Some(WireValue::from(p.filter_tags.clone()))),
        ),
        Field::new(
            "name",
            |p, v| {
                p.name = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(Some(nullable(&p.name))),
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
            "referenceId",
            |p, v| {
                p.reference_id = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(Some(nullable(&p.reference_id))),
        ),
        Field::new(
            "shortDescription",
            |p, v| {
                p.short_description = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(Some(nullable(&p.short_description))),
        ),
        Field::new(
            "thumbnailURL",
            |p, v| {
                p.thumbnail_url = Some(v.string()?);
                Ok(())
            },
            |p, _| Ok(Some(nullable(&p.thumbnail_url))),
        ),
        Field::new(
            "id",
            |p, v| {
                p.id = v.i64()?;
                Ok(())
            },
            |p, _| Ok((p.id != 0).then(|| WireValue::from(p.id))),
        ),
        // Omitted when `None`, so an update keeps the rule the server already has.
        Field::new(
            "tagInclusionRule",
            |p, v| {
                p.tag_inclusion_rule = v.wire_enum()?;
                Ok(())
            },
            |p, _| encode_enum(p.tag_inclusion_rule),
        ),
        // The server rejects video ids on smart playlists.
        Field::new(
            "videoIds",
            |p, v| {
                p.video_ids = v.i64s()?;
                Ok(())
            },
            |p, _| {
                let explicit = !p.playlist_type.is_smart() && !p.video_ids.is_empty();
                Ok(explicit.then(|| WireValue::from(p.video_ids.clone())))
            },
        ),
        Field::read_only("videos", |p, v| {
            p.videos = v.entities()?;
            Ok(())
        }),
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::CodecError;
    use crate::serialization::registry::CodecRegistry;

    fn registry() -> CodecRegistry {
        CodecRegistry::standard().unwrap()
    }

    fn sample() -> Playlist {
        Playlist {
            filter_tags: vec!["sports".to_string(), "live".to_string()],
            id: 1802,
            name: Some("Highlights".to_string()),
            playlist_type: PlaylistType::Explicit,
            reference_id: Some("hl-1".to_string()),
            short_description: Some("best of".to_string()),
            tag_inclusion_rule: TagInclusionRule::Or,
            thumbnail_url: Some("http://cdn/thumb.jpg".to_string()),
            video_ids: vec![9, 4, 7],
            ..Default::default()
        }
    }

    #[test]
    fn test_decode_read_response() {
        let playlist: Playlist = registry()
            .decode(&json!({
                "id": 1802,
                "accountId": 55,
                "name": "Highlights",
                "referenceId": null,
                "playlistType": "NEWEST_TO_OLDEST",
                "filterTags": ["sports"],
                "videoIds": [3, 2, 1],
                "videos": [{ "id": 3, "name": "three" }, { "id": 2 }, { "id": 1 }]
            }))
            .unwrap();
        assert_eq!(playlist.account_id, 55);
        assert_eq!(playlist.reference_id, None);
        assert_eq!(playlist.playlist_type, PlaylistType::NewestToOldest);
        assert_eq!(playlist.tag_inclusion_rule, TagInclusionRule::None);
        let ids: Vec<i64> = playlist.videos.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(playlist.videos[0].name.as_deref(), Some("three"));
    }

    #[test]
    fn test_round_trip() {
        let registry = registry();
        let playlist = sample();
        let decoded: Playlist = registry.decode(&registry.encode(&playlist).unwrap()).unwrap();
        assert_eq!(decoded, playlist);
    }

    #[test]
    fn test_encode_key_order() {
        let wire = registry().encode(&sample()).unwrap();
        let keys: Vec<&String> = wire.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            [
                "filterTags",
                "name",
                "playlistType",
                "referenceId",
                "shortDescription",
                "thumbnailURL",
                "id",
                "tagInclusionRule",
                "videoIds"
            ]
        );
    }

    #[test]
    fn test_tag_inclusion_none_is_omitted() {
        let playlist = Playlist {
            tag_inclusion_rule: TagInclusionRule::None,
            ..sample()
        };
        let wire = registry().encode(&playlist).unwrap();
        assert!(!wire.as_object().unwrap().contains_key("tagInclusionRule"));

        let wire = registry().encode(&sample()).unwrap();
        assert_eq!(wire["tagInclusionRule"], "OR");
    }

    #[test]
    fn test_explicit_playlist_sends_video_ids_in_order() {
        let wire = registry().encode(&sample()).unwrap();
        assert_eq!(wire["videoIds"], json!([9, 4, 7]));
    }

    #[test]
    fn test_smart_playlist_never_sends_video_ids() {
        let registry = registry();
        for kind in [
            PlaylistType::OldestToNewest,
            PlaylistType::Alphabetical,
            PlaylistType::PlaysTotal,
            PlaylistType::PlaysTrailingWeek,
        ] {
            let playlist = Playlist {
                playlist_type: kind,
                ..sample()
            };
            let wire = registry.encode(&playlist).unwrap();
            assert!(!wire.as_object().unwrap().contains_key("videoIds"));
        }
    }

    #[test]
    fn test_empty_explicit_playlist_omits_video_ids() {
        let playlist = Playlist {
            video_ids: Vec::new(),
            ..sample()
        };
        let wire = registry().encode(&playlist).unwrap();
        assert!(!wire.as_object().unwrap().contains_key("videoIds"));
    }

    #[test]
    fn test_new_playlist_omits_id_but_sends_nulls() {
        let wire = registry().encode(&Playlist::default()).unwrap();
        let map = wire.as_object().unwrap();
        assert!(!map.contains_key("id"));
        assert_eq!(map["name"], WireValue::Null);
        assert_eq!(map["playlistType"], "EXPLICIT");
        assert!(!map.contains_key("accountId"));
        assert!(!map.contains_key("videos"));
    }

    #[test]
    fn test_extra_key_is_ignored() {
        let registry = registry();
        let base = json!({ "id": 1, "name": "n", "playlistType": "EXPLICIT" });
        let mut extended = base.clone();
        extended["brandNewServerField"] = json!({ "nested": true });
        let a: Playlist = registry.decode(&base).unwrap();
        let b: Playlist = registry.decode(&extended).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_playlist_type_fails() {
        let err = registry()
            .decode::<Playlist>(&json!({ "playlistType": "SHUFFLED" }))
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownEnumToken {
                enum_name: "PlaylistType",
                ..
            }
        ));
    }

    #[test]
    fn test_string_id_is_coerced() {
        let playlist: Playlist = registry().decode(&json!({ "id": "42" })).unwrap();
        assert_eq!(playlist.id, 42);
    }

    #[test]
    fn test_out_of_range_id_is_rejected() {
        let registry = registry();
        let err = registry
            .decode::<Playlist>(&json!({ "id": 1e30 }))
            .unwrap_err();
        assert!(matches!(err, CodecError::DecodeTypeMismatch { ref key, .. } if key == "id"));

        let err = registry
            .from_str::<Playlist>(r#"{"id": 9223372036854775808}"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::DecodeTypeMismatch { ref key, .. } if key == "id"));
    }
}
