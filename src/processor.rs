use crate::cue::CueSheet;
use crate::formatter;
use crate::subtitle::Caption;

pub struct ProcessOpts {
    pub delay: f64,
    pub trim: f64,
    /// Fixed display duration in seconds; negative means unset, in which
    /// case a caption stays up until shortly before the next track.
    pub duration: f64,
    pub offset: f64,
    pub bumpers: bool,
    pub uppercase_artist: bool,
    pub uppercase_title: bool,
    pub ignore_parenthetical: bool,
}

/// Windows shorter than this are reported as degenerate. A bumper also needs
/// at least this much display time to be worth emitting.
const MIN_WINDOW: f64 = 0.1;

/// Turns parsed tracks into timed captions. Degenerate windows (overlapping
/// or out-of-order index stamps, aggressive trim values) are warned about but
/// still emitted as computed; only an overlapping end bumper is dropped.
pub fn process(sheet: CueSheet, opts: &ProcessOpts) -> Vec<Caption> {
    let mut captions = Vec::new();

    for (i, track) in sheet.tracks.iter().enumerate() {
        let show_at = track.start_offset + opts.offset + opts.delay;
        // After the last track the sheet's nominal duration stands in for
        // the next track's start.
        let next_start = match sheet.tracks.get(i + 1) {
            Some(next) => next.start_offset,
            None => sheet.duration,
        };
        let hide_at = if opts.duration >= 0.0 {
            show_at + opts.duration
        } else {
            next_start + opts.offset - opts.trim
        };

        let artist = formatter::artist(&track.artist, opts.uppercase_artist);
        let title = formatter::title(&track.title, opts.uppercase_title, opts.ignore_parenthetical);

        if hide_at - show_at < MIN_WINDOW {
            eprintln!("Warning: track {} \"{}\" duration too short.", i + 1, title);
        }

        captions.push(Caption {
            sequence_number: 0,
            show_at,
            hide_at,
            artist: artist.clone(),
            title: title.clone(),
        });

        if opts.bumpers && opts.duration > MIN_WINDOW {
            let bumper_at = next_start + opts.offset - opts.trim - opts.duration;
            if bumper_at <= hide_at {
                eprintln!(
                    "Warning: track {} \"{}\" end bumper overlaps, skipping.",
                    i + 1,
                    title
                );
            } else {
                captions.push(Caption {
                    sequence_number: 0,
                    show_at: bumper_at,
                    hide_at: bumper_at + opts.duration,
                    artist,
                    title,
                });
            }
        }
    }

    generate_seqnum(captions)
}

fn generate_seqnum(captions: Vec<Caption>) -> Vec<Caption> {
    let mut seqnum = 0;
    captions
        .into_iter()
        .map(|mut c| {
            seqnum += 1;
            c.sequence_number = seqnum;
            c
        })
        .collect()
}
