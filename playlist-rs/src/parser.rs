use std::{error::Error, fmt::Display, mem::take};

use lazy_static::lazy_static;
use log::{info, warn};
use regex::Regex;
use smol_str::SmolStr;

use crate::format::{ChannelRecord, PlaylistDocument, directives};

/// Problems that drop a line but never stop the transcoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscodeWarning {
    MalformedMetadata(SmolStr),
}

impl Display for TranscodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedMetadata(line) => write!(f, "failed to parse metadata line: {}", line),
        }
    }
}

impl Error for TranscodeWarning {}

lazy_static! {
    /// Duration, then a lazily matched attribute blob up to the first comma that leaves a name behind
    static ref EXTINF_REGEX: Regex =
        Regex::new(r"^#EXTINF:-?\d+\s*(.*?),(.+)").expect("Regular expression error");
    static ref GROUP_TITLE_REGEX: Regex =
        Regex::new(r#"group-title="([^"]+)""#).expect("Regular expression error");
    static ref TVG_ID_REGEX: Regex =
        Regex::new(r#"tvg-id="([^"]+)""#).expect("Regular expression error");
    static ref TVG_LOGO_REGEX: Regex =
        Regex::new(r#"tvg-logo="([^"]+)""#).expect("Regular expression error");
}

fn search_attribute(regex: &Regex, attributes: &str) -> SmolStr {
    regex
        .captures(attributes)
        .and_then(|x| x.get(1))
        .map(|x| SmolStr::new(x.as_str()))
        .unwrap_or_default()
}

fn parse_metadata(line: &str) -> Option<ChannelRecord> {
    let (_, [attributes, name]) = EXTINF_REGEX.captures(line)?.extract();

    Some(ChannelRecord::pending(
        strip(name),
        search_attribute(&GROUP_TITLE_REGEX, attributes),
        search_attribute(&TVG_ID_REGEX, attributes),
        search_attribute(&TVG_LOGO_REGEX, attributes),
    ))
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Unicode whitespace plus the FS/GS/RS/US control separators
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn strip(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

/// Splits raw playlist text into stripped lines.
///
/// `\r\n` yields an extra empty line, which the transcoder ignores anyway.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_boundary).map(strip)
}

/// Result of one transcoding pass
#[derive(Debug, Clone, Default)]
pub struct Transcoded {
    pub document: PlaylistDocument,
    /// Number of channel blocks written into `document`
    pub emitted: usize,
    pub warnings: Vec<TranscodeWarning>,
}

/// Line-by-line accumulator. Holds at most one pending channel: the last
/// `#EXTINF` seen that has not been consumed by a location line yet.
#[derive(Debug, Default)]
pub struct Transcoder {
    document: PlaylistDocument,
    current: ChannelRecord,
    emitted: usize,
    warnings: Vec<TranscodeWarning>,
}

impl Transcoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consuming form of [`Transcoder::push_line`], for folding over lines.
    pub fn feed(mut self, line: &str) -> Self {
        self.push_line(line);
        self
    }

    pub fn push_line(&mut self, line: &str) {
        let line = strip(line);

        if line.starts_with(directives::EXTINF_PREFIX) {
            match parse_metadata(line) {
                Some(channel) => {
                    info!("Parsed channel: {}", channel.name);
                    // an unconsumed channel is dropped here
                    self.current = channel;
                }
                None => {
                    let warning = TranscodeWarning::MalformedMetadata(line.into());
                    warn!("{}", warning);
                    self.warnings.push(warning);
                }
            }
        } else if !line.is_empty() && !line.starts_with(directives::COMMENT) {
            // location line, orphan ones keep the empty defaults
            let mut channel = take(&mut self.current);
            channel.url = line.into();
            info!("Added URL: {}", channel.url);

            self.document.push(channel);
            self.emitted += 1;
        }
    }

    pub fn finish(self) -> Transcoded {
        Transcoded {
            document: self.document,
            emitted: self.emitted,
            warnings: self.warnings,
        }
    }
}

/// Re-parses a whole playlist text into a normalized document.
pub fn transcode(text: impl AsRef<str>) -> Transcoded {
    split_lines(text.as_ref())
        .fold(Transcoder::new(), Transcoder::feed)
        .finish()
}
