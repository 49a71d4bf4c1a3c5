#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

impl SubtitleFormat {
    pub fn extension(self) -> &'static str {
        match self {
            SubtitleFormat::Srt => "srt",
            SubtitleFormat::Vtt => "vtt",
        }
    }
}

/// One emitted subtitle entry. A track normally maps to one caption; with
/// bumpers enabled it may map to two, sharing the same text.
#[derive(Debug)]
pub struct Caption {
    pub sequence_number: usize,
    pub show_at: f64,
    pub hide_at: f64,
    pub artist: String,
    pub title: String,
}
