use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::enums::{Economics, ItemState};

/// An audio-only media item. Dates are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AudioTrack {
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
    pub creation_date: Option<i64>,
    pub published_date: Option<i64>,
    pub last_modified_date: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub length: i64,
    pub plays_total: i64,
    pub plays_trailing_week: i64,
}

impl Entity for AudioTrack {
    const TYPE_NAME: &'static str = "AudioTrack";

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "id",
            |a, v| {
                a.id = v.i64()?;
                Ok(())
            },
            |a, _| Ok((a.id != 0).then(|| WireValue::from(a.id))),
        ),
        Field::new(
            "name",
            |a, v| {
                a.name = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.name)),
        ),
        Field::new(
            "referenceId",
            |a, v| {
                a.reference_id = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.reference_id)),
        ),
        Field::new(
            "shortDescription",
            |a, v| {
                a.short_description = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.short_description)),
        ),
        Field::new(
            "longDescription",
            |a, v| {
                a.long_description = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.long_description)),
        ),
        Field::new(
            "linkURL",
            |a, v| {
                a.link_url = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.link_url)),
        ),
        Field::new(
            "linkText",
            |a, v| {
                a.link_text = Some(v.string()?);
                Ok(())
            },
            |a, _| Ok(text(&a.link_text)),
        ),
        Field::new(
            "tags",
            |a, v| {
                a.tags = v.strings()?;
                Ok(())
            },
            |a, _| Ok(Some(WireValue::from(a.tags.clone()))),
        ),
        Field::new(
            "economics",
            |a, v| {
                a.economics = v.wire_enum()?;
                Ok(())
            },
            |a, _| encode_enum(a.economics),
        ),
        Field::new(
            "itemState",
            |a, v| {
                a.item_state = v.wire_enum()?;
                Ok(())
            },
            |a, _| encode_enum(a.item_state),
        ),
        Field::read_only("accountId", |a, v| {
            a.account_id = v.i64()?;
            Ok(())
        }),
        Field::read_only("creationDate", |a, v| {
            a.creation_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("publishedDate", |a, v| {
            a.published_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("lastModifiedDate", |a, v| {
            a.last_modified_date = Some(v.millis()?);
            Ok(())
        }),
        Field::read_only("thumbnailURL", |a, v| {
            a.thumbnail_url = Some(v.string()?);
            Ok(())
        }),
        Field::read_only("length", |a, v| {
            a.length = v.i64()?;
            Ok(())
        }),
        Field::read_only("playsTotal", |a, v| {
            a.plays_total = v.i64()?;
            Ok(())
        }),
        Field::read_only("playsTrailingWeek", |a, v| {
            a.plays_trailing_week = v.i64()?;
            Ok(())
        }),
    ];
}
