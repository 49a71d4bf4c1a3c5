/// One track scanned out of a cue sheet.
#[derive(Debug, Default, PartialEq)]
pub struct Track {
    pub artist: String,
    pub title: String,
    /// Position within the source media where the track starts, in seconds,
    /// as declared by the track's INDEX marker.
    pub start_offset: f64,
}

/// The parsed cue sheet: tracks in file order, plus the nominal total
/// duration VirtualDJ stores in the top-level TITLE field.
#[derive(Debug)]
pub struct CueSheet {
    pub tracks: Vec<Track>,
    pub duration: f64,
}
