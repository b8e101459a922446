use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::enums::ImageType;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Image {
    pub id: i64,
    pub reference_id: Option<String>,
    pub image_type: ImageType,
    pub remote_url: Option<String>,
    pub display_name: Option<String>,
}

impl Entity for Image {
    const TYPE_NAME: &'static str = "Image";

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "id",
            |i, v| {
                i.id = v.i64()?;
                Ok(())
            },
            |i, _| Ok((i.id != 0).then(|| WireValue::from(i.id))),
        ),
        Field::new(
            "referenceId",
            |i, v| {
                i.reference_id = Some(v.string()?);
                Ok(())
            },
            |i, _| Ok(text(&i.reference_id)),
        ),
        Field::new(
            "type",
            |i, v| {
                i.image_type = v.wire_enum()?;
                Ok(())
            },
            |i, _| encode_enum(i.image_type),
        ),
        Field::new(
            "remoteUrl",
            |i, v| {
                i.remote_url = Some(v.string()?);
                Ok(())
            },
            |i, _| Ok(text(&i.remote_url)),
        ),
        Field::new(
            "displayName",
            |i, v| {
                i.display_name = Some(v.string()?);
                Ok(())
            },
            |i, _| Ok(text(&i.display_name)),
        ),
    ];
}
