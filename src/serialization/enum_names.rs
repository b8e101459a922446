use std::fmt::Debug;

use crate::error::CodecError;

/// Bidirectional table between enum values and their MAPI wire tokens.
///
/// Tokens are matched exactly. An enum may name one `unset` value that has no
/// wire token at all; field rules omit the key instead of sending it.
#[derive(Debug)]
pub struct EnumNameMap<E: 'static> {
    name: &'static str,
    entries: &'static [(E, &'static str)],
    unset: Option<E>,
}

impl<E> EnumNameMap<E>
where
    E: Copy + PartialEq + Debug + 'static,
{
    pub const fn new(name: &'static str, entries: &'static [(E, &'static str)]) -> Self {
        Self {
            name,
            entries,
            unset: None,
        }
    }

    pub const fn with_unset(
        name: &'static str,
        entries: &'static [(E, &'static str)],
        unset: E,
    ) -> Self {
        Self {
            name,
            entries,
            unset: Some(unset),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [(E, &'static str)] {
        self.entries
    }

    pub fn is_unset(&self, value: E) -> bool {
        self.unset == Some(value)
    }

    pub fn to_wire_name(&self, value: E) -> Result<&'static str, CodecError> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, token)| *token)
            .ok_or_else(|| CodecError::UnknownEnumToken {
                enum_name: self.name,
                token: format!("{:?}", value),
            })
    }

    pub fn from_wire_name(&self, token: &str) -> Result<E, CodecError> {
        self.entries
            .iter()
            .find(|(_, candidate)| *candidate == token)
            .map(|(value, _)| *value)
            .ok_or_else(|| CodecError::UnknownEnumToken {
                enum_name: self.name,
                token: token.to_string(),
            })
    }
}

pub trait WireEnum: Copy + PartialEq + Debug + Send + Sync + 'static {
    const NAMES: EnumNameMap<Self>;

    fn to_wire_name(self) -> Result<&'static str, CodecError> {
        Self::NAMES.to_wire_name(self)
    }

    fn from_wire_name(token: &str) -> Result<Self, CodecError> {
        Self::NAMES.from_wire_name(token)
    }
}

/// Declares a wire enum together with its token table.
///
/// ```ignore
/// wire_enum! {
///     pub enum ItemState: "ItemState" {
///         #[default]
///         Active => "ACTIVE",
///         Inactive => "INACTIVE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $wire_name:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::serialization::enum_names::WireEnum for $name {
            const NAMES: $crate::serialization::enum_names::EnumNameMap<Self> =
                $crate::serialization::enum_names::EnumNameMap::new(
                    $wire_name,
                    &[$(($name::$variant, $token)),+],
                );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{PlaylistType, TagInclusionRule, VideoCodec};

    fn assert_total<E: WireEnum>() {
        for (value, token) in E::NAMES.entries() {
            assert_eq!(value.to_wire_name().unwrap(), *token);
            assert_eq!(E::from_wire_name(token).unwrap(), *value);
        }
    }

    #[test]
    fn test_round_trip_every_token() {
        assert_total::<PlaylistType>();
        assert_total::<TagInclusionRule>();
        assert_total::<VideoCodec>();
    }

    #[test]
    fn test_override_token() {
        assert_eq!(PlaylistType::PlaysTotal.to_wire_name().unwrap(), "PLAYSTOTAL");
        assert_eq!(
            PlaylistType::PlaysTrailingWeek.to_wire_name().unwrap(),
            "PLAYS_TRAILING_WEEK"
        );
    }

    #[test]
    fn test_unknown_token_fails() {
        let err = PlaylistType::from_wire_name("PLAYS_TOTAL").unwrap_err();
        assert!(matches!(
            err,
            CodecError::UnknownEnumToken {
                enum_name: "PlaylistType",
                ..
            }
        ));
        assert!(PlaylistType::from_wire_name("explicit").is_err());
    }

    #[test]
    fn test_unset_has_no_token() {
        assert!(TagInclusionRule::NAMES.is_unset(TagInclusionRule::None));
        assert!(TagInclusionRule::None.to_wire_name().is_err());
        assert!(TagInclusionRule::from_wire_name("NONE").is_err());
    }
}
