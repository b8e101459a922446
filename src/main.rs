use std::{
    fmt::Debug,
    io::Read,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand, ValueEnum};
use serde_derive::Serialize;

use mapi_codec::{
    models::{
        enums::{wire_tables, UploadStatus},
        AudioTrack, AudioTrackPlaylist, Image, ItemCollection, LogoOverlay, Playlist,
        ResultContainer, Video,
    },
    CodecError, CodecRegistry,
};

#[derive(Parser, Debug)]
#[command(name = "mapi-codec", about = "Decode and re-encode Media API payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a response body as the given kind.
    Decode {
        #[arg(value_enum)]
        kind: Kind,
        /// Read the body from this file instead of stdin.
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the value encoded back to wire JSON instead of the typed value.
        #[arg(long)]
        roundtrip: bool,
        /// Print wire JSON on a single line.
        #[arg(long)]
        compact: bool,
    },
    /// List the wire tokens of every enum.
    Enums,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Video,
    Playlist,
    AudioTrack,
    AudioTrackPlaylist,
    Videos,
    Playlists,
    AudioTracks,
    AudioTrackPlaylists,
    WriteId,
    WriteIds,
    WriteUploadStatus,
    WriteVideo,
    WritePlaylist,
    WriteAudioTrack,
    WriteAudioTrackPlaylist,
    WriteImage,
    WriteLogoOverlay,
    WriteVideos,
    WritePlaylists,
    WriteAudioTracks,
    WriteAudioTrackPlaylists,
}

#[derive(Serialize)]
struct EnumTable {
    name: &'static str,
    tokens: Vec<&'static str>,
}

struct Output {
    roundtrip: bool,
    compact: bool,
}

fn read_body(file: Option<&Path>) -> Result<String, anyhow::Error> {
    let body = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            body
        }
    };
    Ok(body)
}

fn show<T: Debug + 'static>(
    registry: &CodecRegistry,
    body: &str,
    output: &Output,
) -> Result<(), CodecError> {
    let value: T = registry.from_str(body)?;
    if !output.roundtrip {
        println!("{:#?}", value);
        return Ok(());
    }
    let wire = registry.encode(&value)?;
    if output.compact {
        println!("{}", serde_json::to_string(&wire)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&wire)?);
    }
    Ok(())
}

fn decode(
    registry: &CodecRegistry,
    kind: Kind,
    body: &str,
    output: &Output,
) -> Result<(), CodecError> {
    match kind {
        Kind::Video => show::<Video>(registry, body, output),
        Kind::Playlist => show::<Playlist>(registry, body, output),
        Kind::AudioTrack => show::<AudioTrack>(registry, body, output),
        Kind::AudioTrackPlaylist => show::<AudioTrackPlaylist>(registry, body, output),
        Kind::Videos => show::<ItemCollection<Video>>(registry, body, output),
        Kind::Playlists => show::<ItemCollection<Playlist>>(registry, body, output),
        Kind::AudioTracks => show::<ItemCollection<AudioTrack>>(registry, body, output),
        Kind::AudioTrackPlaylists => {
            show::<ItemCollection<AudioTrackPlaylist>>(registry, body, output)
        }
        Kind::WriteId => show::<ResultContainer<i64>>(registry, body, output),
        Kind::WriteIds => show::<ResultContainer<Vec<i64>>>(registry, body, output),
        Kind::WriteUploadStatus => show::<ResultContainer<UploadStatus>>(registry, body, output),
        Kind::WriteVideo => show::<ResultContainer<Video>>(registry, body, output),
        Kind::WritePlaylist => show::<ResultContainer<Playlist>>(registry, body, output),
        Kind::WriteAudioTrack => show::<ResultContainer<AudioTrack>>(registry, body, output),
        Kind::WriteAudioTrackPlaylist => {
            show::<ResultContainer<AudioTrackPlaylist>>(registry, body, output)
        }
        Kind::WriteImage => show::<ResultContainer<Image>>(registry, body, output),
        Kind::WriteLogoOverlay => show::<ResultContainer<LogoOverlay>>(registry, body, output),
        Kind::WriteVideos => show::<ResultContainer<ItemCollection<Video>>>(registry, body, output),
        Kind::WritePlaylists => {
            show::<ResultContainer<ItemCollection<Playlist>>>(registry, body, output)
        }
        Kind::WriteAudioTracks => {
            show::<ResultContainer<ItemCollection<AudioTrack>>>(registry, body, output)
        }
        Kind::WriteAudioTrackPlaylists => {
            show::<ResultContainer<ItemCollection<AudioTrackPlaylist>>>(registry, body, output)
        }
    }
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Decode {
            kind,
            file,
            roundtrip,
            compact,
        } => {
            let registry = mapi_codec::init()?;
            let body = read_body(file.as_deref())?;
            let output = Output { roundtrip, compact };
            if let Err(err) = decode(registry, kind, &body, &output) {
                if let Some(fault) = err.remote_fault() {
                    for (depth, cause) in fault.chain().enumerate() {
                        let label = if depth == 0 { "remote fault" } else { "caused by" };
                        eprintln!("{}: {}", label, cause);
                    }
                    std::process::exit(2);
                }
                return Err(err.into());
            }
        }
        Command::Enums => {
            let tables: Vec<EnumTable> = wire_tables()
                .into_iter()
                .map(|(name, tokens)| EnumTable { name, tokens })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
    }

    Ok(())
}
