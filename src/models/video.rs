use std::collections::BTreeMap;

use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireMap, WireValue},
};

use super::{
    cue_point::CuePoint,
    enums::{Economics, ItemState},
    logo_overlay::LogoOverlay,
    rendition::Rendition,
};

/// A video and its metadata. Dates are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Video {
    pub id: i64,
    pub account_id: i64,
    pub name: Option<String>,
    pub reference_id: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub link_url: Option<String>,
    pub link_text: Option<String>,
    pub tags: Vec<String>,
    pub economics: Economics,
    pub item_state: ItemState,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub custom_fields: BTreeMap<String, String>,
    pub creation_date: Option<i64>,
    pub published_date: Option<i64>,
    pub last_modified_date: Option<i64>,
    pub flv_url: Option<String>,
    pub renditions: Vec<Rendition>,
    pub ios_renditions: Vec<Rendition>,
    pub video_full_length: Option<Rendition>,
    pub flv_full_length: Option<Rendition>,
    pub video_still_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub length: i64,
    pub plays_total: i64,
    pub plays_trailing_week: i64,
    pub cue_points: Vec<CuePoint>,
    pub logo_overlay: Option<LogoOverlay>,
}

// Writes take dates as millisecond strings.
fn date(value: Option<i64>) -> Option<WireValue> {
    value.map(|millis| WireValue::from(millis.to_string()))
}

impl Entity for Video {
    const TYPE_NAME: &'static str = "Video";

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "id",
            |x, v| {
                x.id = v.i64()?;
                Ok(())
            },
            |x, _| Ok((x.id != 0).then(|| WireValue::from(x.id))),
        ),
        Field::new(
            "name",
            |x, v| {
                x.name = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.name)),
        ),
        Field::new(
            "referenceId",
            |x, v| {
                x.reference_id = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.reference_id)),
        ),
        Field::new(
            "shortDescription",
            |x, v| {
                x.short_description = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.short_description)),
        ),
        Field::new(
            "longDescription",
            |x, v| {
                x.long_description = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.long_description)),
        ),
        Field::new(
            "linkURL",
            |x, v| {
                x.link_url = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.link_url)),
        ),
        Field::new(
            "linkText",
            |x, v| {
                x.link_text = Some(v.string()?);
                Ok(())
            },
            |x, _| Ok(text(&x.link_text)),
        ),
        Field::new(
            "tags",
            |x, v| {
                x.tags = v.strings()?;
                Ok(())
            },
            |x, _| Ok(Some(WireValue::from(x.tags.clone()))),
        ),
        Field::new(
            "economics",
            |x, v| {
                x.economics = v.wire_enum()?;
                Ok(())
            },
            |x, _| encode_enum(x.economics),
        ),
        Field::new(
            "itemState",
            |x, v| {
                x.item_state = v.wire_enum()?;
                Ok(())
            },
            |x, _| encode_enum(x.item_state),
        ),
        Field::new(
            "startDate",
            |x, v| {
                x.start_date = Some(v.millis()?);
                Ok(())
            },
            |x, _| Ok(date(x.start_date)),
        ),
        Field::new(
            "endDate",
            |x, v| {
                x.end_date = Some(v.millis()?);
                Ok(())
            },
            |x, _| Ok(date(x.end_date)),
        ),
        Field::new(
            "customFields",
            |x, v| {
                x.custom_fields = v.string_map()?;
                Ok(())
            },
            |x, _| {
                if x.custom_fields.is_empty() {
                    return Ok(None);
                }
                let fields: WireMap = x
                    .custom_fields
                    .iter()
                    .map(|(k, v)| (k.clone(), WireValue::from(v.as_str())))
                    .collect();
                Ok(Some(WireValue::Object(fields)))
            },
        ),
        Field::read_only("accountId", |x, v| {
            x.account_id = v.i64()?;
            Ok(())
        }),
        Field::read_only("creationDate", |x, v| {
            x.creation_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("publishedDate", |x, v| {
            x.published_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("lastModifiedDate", |x, v| {
            x.last_modified_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("FLVURL", |x, v| {
            x.flv_url = Some(v.string()?);
            Ok(())
        }),
        Field::read_only("renditions", |x, v| {
            x.renditions = v.entities()?;
            Ok(())
        }),
        Field::read_only("IOSRenditions", |x, v| {
            x.ios_renditions = v.entities()?;
            Ok(())
        }),
        Field::read_only("videoFullLength", |x, v| {
            x.video_full_length = Some(v.entity()?);
            Ok(())
        }),
        Field::read_only("FLVFullLength", |x, v| {
            x.flv_full_length = Some(v.entity()?);
            Ok(())
        }),
        Field::read_only("videoStillURL", |x, v| {
            x.video_still_url = Some(v.string()?);
            Ok(())
        }),
        Field::read_only("thumbnailURL", |x, v| {
            x.thumbnail_url = Some(v.string()?);
            Ok(())
        }),
        Field::read_only("length", |x, v| {
            x.length = v.i64()?;
            Ok(())
        }),
        Field::read_only("playsTotal", |x, v| {
            x.plays_total = v.i64()?;
            Ok(())
        }),
        Field::read_only("playsTrailingWeek", |x, v| {
            x.plays_trailing_week = v.i64()?;
            Ok(())
        }),
        Field::read_only("cuePoints", |x, v| {
            x.cue_points = v.entities()?;
            Ok(())
        }),
        Field::read_only("logoOverlay", |x, v| {
            x.logo_overlay = Some(v.entity()?);
            Ok(())
        }),
    ];
}
