use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::enums::{ControllerType, VideoCodec, VideoContainer};

/// One encoding of a video. Remote renditions point at assets hosted elsewhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendition {
    pub url: Option<String>,
    pub reference_id: Option<String>,
    pub display_name: Option<String>,
    pub remote_url: Option<String>,
    pub remote_stream_name: Option<String>,
    /// Bits per second.
    pub encoding_rate: i64,
    pub frame_height: i32,
    pub frame_width: i32,
    pub size: i64,
    /// Milliseconds.
    pub video_duration: i64,
    pub audio_only: bool,
    pub video_codec: VideoCodec,
    pub video_container: VideoContainer,
    pub controller_type: ControllerType,
}

impl Entity for Rendition {
    const TYPE_NAME: &'static str = "Rendition";

    const FIELDS: &'static [Field<Self>] = &[
        Field::read_only("url", |r, v| {
            r.url = Some(v.string()?);
            Ok(())
        }),
        Field::new(
            "referenceId",
            |r, v| {
                r.reference_id = Some(v.string()?);
                Ok(())
            },
            |r, _| Ok(text(&r.reference_id)),
        ),
        Field::new(
            "displayName",
            |r, v| {
                r.display_name = Some(v.string()?);
                Ok(())
            },
            |r, _| Ok(text(&r.display_name)),
        ),
        Field::new(
            "remoteUrl",
            |r, v| {
                r.remote_url = Some(v.string()?);
                Ok(())
            },
            |r, _| Ok(text(&r.remote_url)),
        ),
        Field::new(
            "remoteStreamName",
            |r, v| {
                r.remote_stream_name = Some(v.string()?);
                Ok(())
            },
            |r, _| Ok(text(&r.remote_stream_name)),
        ),
        Field::new(
            "encodingRate",
            |r, v| {
                r.encoding_rate = v.i64()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.encoding_rate))),
        ),
        Field::new(
            "frameHeight",
            |r, v| {
                r.frame_height = v.i32()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.frame_height))),
        ),
        Field::new(
            "frameWidth",
            |r, v| {
                r.frame_width = v.i32()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.frame_width))),
        ),
        Field::new(
            "size",
            |r, v| {
                r.size = v.i64()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.size))),
        ),
        Field::new(
            "videoDuration",
            |r, v| {
                r.video_duration = v.i64()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.video_duration))),
        ),
        Field::new(
            "audioOnly",
            |r, v| {
                r.audio_only = v.bool()?;
                Ok(())
            },
            |r, _| Ok(Some(WireValue::from(r.audio_only))),
        ),
        Field::new(
            "videoCodec",
            |r, v| {
                r.video_codec = v.wire_enum()?;
                Ok(())
            },
            |r, _| encode_enum(r.video_codec),
        ),
        Field::new(
            "videoContainer",
            |r, v| {
                r.video_container = v.wire_enum()?;
                Ok(())
            },
            |r, _| encode_enum(r.video_container),
        ),
        Field::new(
            "controllerType",
            |r, v| {
                r.controller_type = v.wire_enum()?;
                Ok(())
            },
            |r, _| encode_enum(r.controller_type),
        ),
    ];
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::serialization::registry::CodecRegistry;

    #[test]
    fn test_remote_rendition_round_trip() {
        let registry = CodecRegistry::standard().unwrap();
        let rendition = Rendition {
            remote_url: Some("rtmp://edge/live".to_string()),
            remote_stream_name: Some("mp4:show".to_string()),
            encoding_rate: 800_000,
            frame_height: 360,
            frame_width: 640,
            size: 1_048_576,
            video_duration: 60_000,
            video_codec: VideoCodec::H264,
            video_container: VideoContainer::Mp4,
            controller_type: ControllerType::LimelightLive,
            ..Default::default()
        };
        let wire = registry.encode(&rendition).unwrap();
        assert_eq!(wire["controllerType"], "LIMELIGHT_LIVE");
        assert!(wire.get("url").is_none());
        assert_eq!(registry.decode::<Rendition>(&wire).unwrap(), rendition);
    }

    #[test]
    fn test_audio_only_from_string() {
        let registry = CodecRegistry::standard().unwrap();
        let rendition: Rendition = registry
            .decode(&json!({ "audioOnly": "true", "url": "http://cdn/a.mp3" }))
            .unwrap();
        assert!(rendition.audio_only);
        assert_eq!(rendition.url.as_deref(), Some("http://cdn/a.mp3"));
    }
}
