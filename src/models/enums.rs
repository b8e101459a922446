use crate::serialization::enum_names::{EnumNameMap, WireEnum};
use crate::wire_enum;

wire_enum! {
    /// How a playlist picks and orders its videos. Anything but `Explicit` is a
    /// smart playlist whose contents the server decides.
    pub enum PlaylistType: "PlaylistType" {
        #[default]
        Explicit => "EXPLICIT",
        OldestToNewest => "OLDEST_TO_NEWEST",
        NewestToOldest => "NEWEST_TO_OLDEST",
        StartDateOldestToNewest => "START_DATE_OLDEST_TO_NEWEST",
        StartDateNewestToOldest => "START_DATE_NEWEST_TO_OLDEST",
        Alphabetical => "ALPHABETICAL",
        PlaysTotal => "PLAYSTOTAL",
        PlaysTrailingWeek => "PLAYS_TRAILING_WEEK",
    }
}

impl PlaylistType {
    pub fn is_smart(self) -> bool {
        self != Self::Explicit
    }
}

/// Whether a smart playlist's videos must carry all of its filter tags or any of them.
///
/// `None` is never transmitted: leaving the key out keeps whatever rule the
/// server already stores for the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagInclusionRule {
    #[default]
    None,
    And,
    Or,
}

impl WireEnum for TagInclusionRule {
    const NAMES: EnumNameMap<Self> = EnumNameMap::with_unset(
        "TagInclusionRule",
        &[(Self::And, "AND"), (Self::Or, "OR")],
        Self::None,
    );
}

wire_enum! {
    pub enum ItemState: "ItemState" {
        #[default]
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Deleted => "DELETED",
    }
}

wire_enum! {
    pub enum Economics: "Economics" {
        #[default]
        Free => "FREE",
        AdSupported => "AD_SUPPORTED",
    }
}

wire_enum! {
    pub enum VideoCodec: "VideoCodec" {
        #[default]
        Undefined => "UNDEFINED",
        None => "NONE",
        Sorenson => "SORENSON",
        On2 => "ON2",
        H264 => "H264",
    }
}

wire_enum! {
    pub enum VideoContainer: "VideoContainer" {
        #[default]
        Flv => "FLV",
        Mp4 => "MP4",
        M2ts => "M2TS",
    }
}

wire_enum! {
    pub enum ControllerType: "ControllerType" {
        #[default]
        Default => "DEFAULT",
        AkamaiStreaming => "AKAMAI_STREAMING",
        AkamaiSecureStreaming => "AKAMAI_SECURE_STREAMING",
        AkamaiLive => "AKAMAI_LIVE",
        AkamaiHd => "AKAMAI_HD",
        AkamaiHdLive => "AKAMAI_HD_LIVE",
        LimelightLive => "LIMELIGHT_LIVE",
        LimelightMediavault => "LIMELIGHT_MEDIAVAULT",
    }
}

wire_enum! {
    pub enum ImageType: "ImageType" {
        #[default]
        Thumbnail => "THUMBNAIL",
        VideoStill => "VIDEO_STILL",
        SyndicationStill => "SYNDICATION_STILL",
        Background => "BACKGROUND",
        Logo => "LOGO",
        LogoOverlay => "LOGO_OVERLAY",
    }
}

wire_enum! {
    pub enum LogoOverlayAlignment: "LogoOverlayAlignment" {
        TopRight => "TOP_RIGHT",
        TopLeft => "TOP_LEFT",
        #[default]
        BottomRight => "BOTTOM_RIGHT",
        BottomLeft => "BOTTOM_LEFT",
    }
}

wire_enum! {
    pub enum CuePointType: "CuePointType" {
        #[default]
        Ad => "AD",
        Code => "CODE",
        Chapter => "CHAPTER",
    }
}

wire_enum! {
    /// Processing state of an uploaded video, returned by `get_upload_status`.
    pub enum UploadStatus: "UploadStatus" {
        #[default]
        Uploading => "UPLOADING",
        Processing => "PROCESSING",
        Complete => "COMPLETE",
        Error => "ERROR",
    }
}

/// Wire tables of every enum, keyed by enum name.
pub fn wire_tables() -> Vec<(&'static str, Vec<&'static str>)> {
    fn tokens<E: WireEnum>() -> (&'static str, Vec<&'static str>) {
        (
            E::NAMES.name(),
            E::NAMES.entries().iter().map(|(_, token)| *token).collect(),
        )
    }

    vec![
        tokens::<PlaylistType>(),
        tokens::<TagInclusionRule>(),
        tokens::<ItemState>(),
        tokens::<Economics>(),
        tokens::<VideoCodec>(),
        tokens::<VideoContainer>(),
        tokens::<ControllerType>(),
        tokens::<ImageType>(),
        tokens::<LogoOverlayAlignment>(),
        tokens::<CuePointType>(),
        tokens::<UploadStatus>(),
    ]
}
