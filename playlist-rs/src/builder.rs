use std::{fmt::Display, iter};

use crate::format::{ChannelRecord, PlaylistDocument, directives};

impl ChannelRecord {
    /// `#EXTINF:-1 group-title="..." tvg-id="..." tvg-logo="...",name`
    pub fn extinf_line(&self) -> String {
        format!(
            "{}:{} group-title=\"{}\" tvg-id=\"{}\" tvg-logo=\"{}\",{}",
            directives::EXTINF,
            directives::NORMALIZED_DURATION,
            self.group_title,
            self.tvg_id,
            self.tvg_logo,
            self.name
        )
    }
}

impl PlaylistDocument {
    /// Every line of the document, header first, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        iter::once(directives::EXTM3U.to_owned()).chain(
            self.channels
                .iter()
                .flat_map(|it| [it.extinf_line(), it.url.to_string()]),
        )
    }
}

impl Display for PlaylistDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        writeln!(f, "{}", directives::EXTM3U)?;

        // channels
        for it in self.channels.iter() {
            it.fmt(f)?;
        }

        Ok(())
    }
}

impl Display for ChannelRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.extinf_line())?;
        writeln!(f, "{}", self.url)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{ChannelRecord, PlaylistDocument};

    #[test]
    fn test_empty_document() {
        let document = PlaylistDocument::new();
        assert_eq!(document.to_string(), "#EXTM3U\n");
        assert_eq!(document.lines().collect::<Vec<_>>(), vec!["#EXTM3U"]);
    }

    #[test]
    fn test_lines_match_display() {
        let mut document = PlaylistDocument::new();
        let mut channel = ChannelRecord::pending("A", "News", "a", "");
        channel.url = "http://example.com/a.m3u8".into();
        document.push(channel);
        document.push(ChannelRecord {
            url: "http://example.com/b.m3u8".into(),
            ..Default::default()
        });

        let joined = document
            .lines()
            .map(|x| x + "\n")
            .collect::<String>();
        assert_eq!(joined, document.to_string());
        assert_eq!(
            document.lines().nth(1).unwrap(),
            "#EXTINF:-1 group-title=\"News\" tvg-id=\"a\" tvg-logo=\"\",A"
        );
        assert_eq!(
            document.lines().nth(3).unwrap(),
            "#EXTINF:-1 group-title=\"\" tvg-id=\"\" tvg-logo=\"\","
        );
    }
}
