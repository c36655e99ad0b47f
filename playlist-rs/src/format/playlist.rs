use crate::format::ChannelRecord;

/// The normalized playlist: a `#EXTM3U` header followed by one
/// `#EXTINF` + url block per channel, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDocument {
    /// Channels of this playlist
    pub(crate) channels: Vec<ChannelRecord>,
}

impl PlaylistDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, channel: ChannelRecord) {
        self.channels.push(channel);
    }

    pub fn channels(&self) -> &[ChannelRecord] {
        &self.channels
    }

    /// Number of channel entries, the header not included
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
