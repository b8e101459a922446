use crate::serialization::{
    item::{Entity, Field},
    wire::{encode_enum, text, WireValue},
};

use super::{enums::LogoOverlayAlignment, image::Image};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogoOverlay {
    pub id: i64,
    pub image: Option<Image>,
    pub tooltip: Option<String>,
    pub link_url: Option<String>,
    pub alignment: LogoOverlayAlignment,
}

impl Entity for LogoOverlay {
    const TYPE_NAME: &'static str = "LogoOverlay";

    const FIELDS: &'static [Field<Self>] = &[
        Field::new(
            "id",
            |l, v| {
                l.id = v.i64()?;
                Ok(())
            },
            |l, _| Ok((l.id != 0).then(|| WireValue::from(l.id))),
        ),
        Field::new(
            "image",
            |l, v| {
                l.image = Some(v.entity()?);
                Ok(())
            },
            |l, registry| match &l.image {
                Some(image) => Ok(Some(registry.encode::<Image>(image)?)),
                None => Ok(None),
            },
        ),
        Field::new(
            "tooltip",
            |l, v| {
                l.tooltip = Some(v.string()?);
                Ok(())
            },
            |l, _| Ok(text(&l.tooltip)),
        ),
        Field::new(
            "linkURL",
            |l, v| {
                l.link_url = Some(v.string()?);
                Ok(())
            },
            |l, _| Ok(text(&l.link_url)),
        ),
        Field::new(
            "alignment",
            |l, v| {
                l.alignment = v.wire_enum()?;
                Ok(())
            },
            |l, _| encode_enum(l.alignment),
        ),
    ];
}
