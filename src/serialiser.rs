use crate::formatter;
use crate::subtitle::{Caption, SubtitleFormat};
use crate::template::Template;

use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

pub struct SerialiseOpts {
    pub format: SubtitleFormat,
    pub template: Option<Template>,
    pub title_first: bool,
    pub vtt_style: Option<String>,
}

/// Header line identifying generated WebVTT documents.
const VTT_HEADER: &str = "WEBVTT - Created by cue2srt / silverspex";

pub fn serialise<W: Write>(captions: &[Caption], opts: &SerialiseOpts, dst: W) -> Result<()> {
    let mut writer = BufWriter::new(dst);
    writer
        .write_all(render(captions, opts).as_bytes())
        .context("Failed to write to output.")?;
    writer.flush().context("Failed to write to output.")?;
    Ok(())
}

/// Assembles the document as an ordered list of pieces joined with CRLF.
/// The last piece is a caption's empty block separator, so the document ends
/// with a single line terminator rather than a trailing blank line.
pub fn render(captions: &[Caption], opts: &SerialiseOpts) -> String {
    let mut pieces: Vec<String> = Vec::new();

    if opts.format == SubtitleFormat::Vtt {
        pieces.push(VTT_HEADER.to_string());
        pieces.push(String::new());
    }

    for caption in captions {
        pieces.push(caption.sequence_number.to_string());
        pieces.push(time_range(caption, opts));
        match &opts.template {
            Some(template) => pieces.push(template.expand(&caption.artist, &caption.title)),
            None => {
                if opts.title_first {
                    pieces.push(caption.title.clone());
                    pieces.push(caption.artist.clone());
                } else {
                    pieces.push(caption.artist.clone());
                    pieces.push(caption.title.clone());
                }
            }
        }
        pieces.push(String::new());
    }

    pieces.join("\r\n")
}

fn time_range(caption: &Caption, opts: &SerialiseOpts) -> String {
    let mut line = format!(
        "{} --> {}",
        formatter::timestamp(caption.show_at, opts.format),
        formatter::timestamp(caption.hide_at, opts.format)
    );
    if opts.format == SubtitleFormat::Vtt {
        if let Some(style) = &opts.vtt_style {
            line.push(' ');
            line.push_str(style);
        }
    }
    line
}
