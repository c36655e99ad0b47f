//! # playlist-rs
//! A library for re-parsing IPTV m3u playlists into a normalized form
//!
//! Every channel is re-emitted as
//! `#EXTINF:-1 group-title="..." tvg-id="..." tvg-logo="...",name` followed by its url.
//!
//! # Example
//! ```rust
//! use playlist_rs::transcode;
//!
//! let result = transcode(r#"
//! #EXTM3U x-tvg-url="test"
//! #EXTINF:10 tvg-id="a" group-title="News",A
//! http://example.com/A.m3u8"#);
//!
//! assert_eq!(result.emitted, 1);
//! assert!(result.warnings.is_empty());
//! println!("{}", result.document);
//! ```

mod builder;
pub mod format;
mod parser;
pub use parser::*;
