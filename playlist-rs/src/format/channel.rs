use smol_str::SmolStr;

/// A single channel, built from an `#EXTINF` line and the location line after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Display name, everything after the attribute separator comma
    pub name: SmolStr,
    pub group_title: SmolStr,
    pub tvg_id: SmolStr,
    pub tvg_logo: SmolStr,
    /// Stream location, empty until the content line is consumed
    pub url: SmolStr,
}

impl ChannelRecord {
    /// A record holding only a name and its three attributes, waiting for its url.
    pub fn pending(
        name: impl Into<SmolStr>,
        group_title: impl Into<SmolStr>,
        tvg_id: impl Into<SmolStr>,
        tvg_logo: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            group_title: group_title.into(),
            tvg_id: tvg_id.into(),
            tvg_logo: tvg_logo.into(),
            url: SmolStr::default(),
        }
    }
}
