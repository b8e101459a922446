use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;

use crate::error::CodecError;
use crate::models::{
    audio_track::AudioTrack,
    audio_track_playlist::AudioTrackPlaylist,
    containers::{ItemCollection, ResultContainer},
    cue_point::CuePoint,
    enums::UploadStatus,
    error::ApiError,
    image::Image,
    logo_overlay::LogoOverlay,
    playlist::Playlist,
    rendition::Rendition,
    video::Video,
};

use super::{
    containers::{CollectionCodec, EnumCodec, EnvelopeCodec, ScalarCodec, WireScalar},
    enum_names::WireEnum,
    item::{Entity, ItemCodec},
    wire::WireValue,
    Codec, RESULT_KEY,
};

static GLOBAL: OnceLock<CodecRegistry> = OnceLock::new();

/// Installs the standard registry for the process and returns it.
///
/// Later calls return the already installed registry.
pub fn init() -> Result<&'static CodecRegistry, CodecError> {
    if let Some(registry) = GLOBAL.get() {
        return Ok(registry);
    }
    let registry = CodecRegistry::standard()?;
    Ok(GLOBAL.get_or_init(|| registry))
}

struct Entry {
    type_name: &'static str,
    // Holds a `Box<dyn Codec<T>>` for the keyed `T`.
    codec: Box<dyn Any + Send + Sync>,
}

/// Closed table of codecs keyed by the Rust type they produce.
pub struct CodecRegistry {
    codecs: HashMap<TypeId, Entry>,
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.codecs.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("CodecRegistry").field("codecs", &names).finish()
    }
}

impl CodecRegistry {
    pub fn builder() -> CodecRegistryBuilder {
        CodecRegistryBuilder::default()
    }

    /// Every type the media API reads or writes.
    pub fn standard() -> Result<Self, CodecError> {
        let mut builder = Self::builder();
        register_standard(&mut builder);
        builder.build()
    }

    pub fn resolve<T: 'static>(&self) -> Result<&dyn Codec<T>, CodecError> {
        self.codecs
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.codec.downcast_ref::<Box<dyn Codec<T>>>())
            .map(|codec| codec.as_ref())
            .ok_or(CodecError::CodecNotFound {
                type_name: type_name::<T>(),
            })
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn decode<T: 'static>(&self, value: &WireValue) -> Result<T, CodecError> {
        self.resolve::<T>()?.decode(value, self)
    }

    pub fn encode<T: 'static>(&self, item: &T) -> Result<WireValue, CodecError> {
        self.resolve::<T>()?.encode(item, self)
    }

    pub fn from_str<T: 'static>(&self, body: &str) -> Result<T, CodecError> {
        let value: WireValue = serde_json::from_str(body)?;
        self.decode(&value)
    }

    pub fn to_string<T: 'static>(&self, item: &T) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.encode(item)?)?)
    }
}

#[derive(Default)]
pub struct CodecRegistryBuilder {
    codecs: HashMap<TypeId, Entry>,
    duplicates: Vec<&'static str>,
}

impl CodecRegistryBuilder {
    pub fn register<T, C>(&mut self, codec: C) -> &mut Self
    where
        T: 'static,
        C: Codec<T> + 'static,
    {
        let type_name = type_name::<T>();
        let boxed: Box<dyn Codec<T>> = Box::new(codec);
        let entry = Entry {
            type_name,
            codec: Box::new(boxed),
        };
        if self.codecs.insert(TypeId::of::<T>(), entry).is_some() {
            self.duplicates.push(type_name);
        }
        self
    }

    pub fn entity<T: Entity>(&mut self) -> &mut Self {
        self.register::<T, _>(ItemCodec::<T>::new())
    }

    pub fn collection<T: Send + Sync + 'static>(&mut self) -> &mut Self {
        self.register::<ItemCollection<T>, _>(CollectionCodec::<T>::new())
    }

    pub fn envelope<T: Default + Send + Sync + 'static>(
        &mut self,
        payload_key: &'static str,
    ) -> &mut Self {
        self.register::<ResultContainer<T>, _>(EnvelopeCodec::<T>::new(payload_key))
    }

    pub fn scalar<T: WireScalar>(&mut self) -> &mut Self {
        self.register::<T, _>(ScalarCodec::<T>::new())
    }

    pub fn wire_enum<E: WireEnum>(&mut self) -> &mut Self {
        self.register::<E, _>(EnumCodec::<E>::new())
    }

    pub fn build(self) -> Result<CodecRegistry, CodecError> {
        if let Some(&type_name) = self.duplicates.first() {
            return Err(CodecError::DuplicateCodec { type_name });
        }
        debug!("codec registry built with {} codecs", self.codecs.len());
        Ok(CodecRegistry {
            codecs: self.codecs,
        })
    }
}

fn register_standard(builder: &mut CodecRegistryBuilder) {
    // individual items
    builder
        .entity::<Video>()
        .entity::<AudioTrack>()
        .entity::<Rendition>()
        .entity::<Playlist>()
        .entity::<ApiError>()
        .entity::<CuePoint>()
        .entity::<Image>()
        .entity::<LogoOverlay>()
        .entity::<AudioTrackPlaylist>();

    // bare payloads of write responses
    builder
        .scalar::<i64>()
        .scalar::<Vec<i64>>()
        .wire_enum::<UploadStatus>();

    // collections of items
    builder
        .collection::<Video>()
        .collection::<AudioTrack>()
        .collection::<Playlist>()
        .collection::<AudioTrackPlaylist>();

    // items contained within the write response envelope
    builder
        .envelope::<i64>(RESULT_KEY)
        .envelope::<Vec<i64>>(RESULT_KEY)
        .envelope::<UploadStatus>(RESULT_KEY)
        .envelope::<AudioTrack>(RESULT_KEY)
        .envelope::<Video>(RESULT_KEY)
        .envelope::<Playlist>(RESULT_KEY)
        .envelope::<Image>(RESULT_KEY)
        .envelope::<LogoOverlay>(RESULT_KEY)
        .envelope::<AudioTrackPlaylist>(RESULT_KEY);

    // collections contained within the write response envelope
    builder
        .envelope::<ItemCollection<Video>>(RESULT_KEY)
        .envelope::<ItemCollection<AudioTrack>>(RESULT_KEY)
        .envelope::<ItemCollection<Playlist>>(RESULT_KEY)
        .envelope::<ItemCollection<AudioTrackPlaylist>>(RESULT_KEY);
}
