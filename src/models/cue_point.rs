use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::enums::CuePointType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CuePoint {
    pub id: i64,
    pub name: Option<String>,
    pub video_id: i64,
    /// Offset from the start of the video, in milliseconds.
    pub time: i64,
    pub force_stop: bool,
    pub cue_type: CuePointType,
    pub metadata: Option<String>,
}

impl Entity for CuePoint {
    const TYPE_NAME: &'static str = "CuePoint";

    const FIELDS: &'static [Field<Self>] = &[
        Field::read_only("id", |c, v| {
            c.id = v.i64()?;
            Ok(())
        }),
        Field::new(
            "name",
            |c, v| {
                c.name = Some(v.string()?);
                Ok(())
            },
            |c, _| Ok(text(&c.name)),
        ),
        Field::new(
            "videoId",
            |c, v| {
                c.video_id = v.i64()?;
                Ok(())
            },
            |c, _| Ok((c.video_id != 0).then(|| WireValue::from(c.video_id))),
        ),
        Field::new(
            "time",
            |c, v| {
                c.time = v.i64()?;
                Ok(())
            },
            |c, _| Ok(Some(WireValue::from(c.time))),
        ),
        Field::new(
            "forceStop",
            |c, v| {
                c.force_stop = v.bool()?;
                Ok(())
            },
            |c, _| Ok(Some(WireValue::from(c.force_stop))),
        ),
        Field::new(
            "type",
            |c, v| {
                c.cue_type = v.wire_enum()?;
                Ok(())
            },
            |c, _| encode_enum(c.cue_type),
        ),
        Field::new(
            "metadata",
            |c, v| {
                c.metadata = Some(v.string()?);
                Ok(())
            },
            |c, _| Ok(text(&c.metadata)),
        ),
    ];
}
