mod channel;
mod playlist;
pub use channel::*;
pub use playlist::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    /// `#EXTINF` followed by its value separator
    pub const EXTINF_PREFIX: &str = "#EXTINF:";
    pub const COMMENT: char = '#';
    /// Every emitted entry carries this duration, whatever the source said
    pub const NORMALIZED_DURATION: i32 = -1;
}
