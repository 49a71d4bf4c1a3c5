use crate::cue::{CueSheet, Track};

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::error::VerboseError;
use nom::IResult;

/// Classification of one trimmed cue-sheet line. Payloads borrow the
/// remainder of the line after the keyword and its separating space.
enum CueLine<'a> {
    TrackBoundary,
    Title(&'a str),
    Performer(&'a str),
    Index(&'a str),
}

pub struct Parser;
impl Parser {
    pub fn new() -> Self {
        Self {}
    }

    /// Scans the cue text into tracks. Never fails: lines that match none of
    /// the known keywords (REM, FILE, stray junk) are dropped silently, and
    /// malformed stamps decode to zero.
    pub fn parse(&mut self, input: &str) -> CueSheet {
        let mut tracks = Vec::new();
        let mut track: Option<Track> = None;
        let mut duration = 0.0;

        for raw_line in input.split('\n') {
            let line = raw_line.trim();
            let parsed = match cue_line(line) {
                Ok((_, parsed)) => parsed,
                Err(_) => continue,
            };
            match parsed {
                CueLine::TrackBoundary => {
                    if let Some(done) = track.take() {
                        tracks.push(done);
                    }
                    track = Some(Track::default());
                }
                CueLine::Title(text) => match track.as_mut() {
                    Some(track) => track.title = text.replace('"', ""),
                    // The top-level TITLE is not a title: VirtualDJ stores the
                    // session's total duration there, as a clock stamp.
                    None => {
                        duration = stamp_seconds(&after_last_space(text).replace('"', ""))
                    }
                },
                CueLine::Performer(text) => {
                    if let Some(track) = track.as_mut() {
                        track.artist = text.replace('"', "");
                    }
                }
                CueLine::Index(text) => {
                    if let Some(track) = track.as_mut() {
                        // Repeated INDEX lines for one track: last one wins.
                        track.start_offset = stamp_seconds(after_last_space(text));
                    }
                }
            }
        }
        // The final track has no boundary line after it.
        if let Some(done) = track.take() {
            tracks.push(done);
        }

        CueSheet { tracks, duration }
    }
}

fn cue_line(input: &str) -> IResult<&str, CueLine<'_>, VerboseError<&str>> {
    alt((track_boundary, title_line, performer_line, index_line))(input)
}

fn track_boundary(input: &str) -> IResult<&str, CueLine<'_>, VerboseError<&str>> {
    let (rest, _) = tag("TRACK ")(input)?;
    Ok((rest, CueLine::TrackBoundary))
}

fn title_line(input: &str) -> IResult<&str, CueLine<'_>, VerboseError<&str>> {
    let (rest, _) = tag("TITLE ")(input)?;
    Ok(("", CueLine::Title(rest)))
}

fn performer_line(input: &str) -> IResult<&str, CueLine<'_>, VerboseError<&str>> {
    let (rest, _) = tag("PERFORMER ")(input)?;
    Ok(("", CueLine::Performer(rest)))
}

fn index_line(input: &str) -> IResult<&str, CueLine<'_>, VerboseError<&str>> {
    let (rest, _) = tag("INDEX ")(input)?;
    Ok(("", CueLine::Index(rest)))
}

fn after_last_space(text: &str) -> &str {
    match text.rfind(' ') {
        Some(i) => &text[i + 1..],
        None => text,
    }
}

/// Decodes a colon-separated clock stamp into seconds.
///
/// Cue index stamps are MM:SS:FF, so a three-segment stamp decodes as
/// `minutes * 60 + seconds` with the frame count dropped. Existing VirtualDJ
/// cue files depend on this layout; resist turning it into an hh:mm:ss
/// parser. Four segments are HH:MM:SS:FF (frames again dropped), two are
/// MM:SS, and any other shape decodes to zero, as do non-numeric segments.
fn stamp_seconds(stamp: &str) -> f64 {
    let mut segments: Vec<i64> = stamp
        .split(':')
        .map(|segment| segment.parse().unwrap_or(0))
        .collect();
    if segments.len() == 2 {
        segments.push(0);
    }
    match segments.len() {
        3 => (segments[0] * 60 + segments[1]) as f64,
        4 => (segments[0] * 3600 + segments[1] * 60 + segments[2]) as f64,
        _ => 0.0,
    }
}
