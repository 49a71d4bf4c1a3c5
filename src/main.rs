mod cue;
mod error;
mod formatter;
mod parser;
mod processor;
mod serialiser;
mod subtitle;
mod template;

use crate::error::CuevertError;
use crate::parser::Parser;
use crate::processor::ProcessOpts;
use crate::serialiser::SerialiseOpts;
use crate::subtitle::SubtitleFormat;
use crate::template::Template;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

/// Inputs larger than this are rejected before reading.
const MAX_INPUT_SIZE: u64 = 10_485_760;

fn main() {
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
        }
    }
}

#[derive(ClapParser)]
#[command(about = "Convert VirtualDJ CUE files into SRT or WebVTT video subtitles")]
struct Cli {
    #[arg(value_name = "CUEFILE", help = "The cue file to convert.")]
    input: PathBuf,
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Specify a path for the output file that overrides the default."
    )]
    output: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = 5.0,
        allow_negative_numbers = true,
        help = "Delay, in seconds, for when the title should show."
    )]
    delay: f64,
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = 5.0,
        allow_negative_numbers = true,
        help = "Hide the title this number of seconds before the track finishes."
    )]
    trim: f64,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = -1.0,
        allow_negative_numbers = true,
        help = "Duration of the title, in seconds (overrides trim). -1 for the complete track."
    )]
    duration: f64,
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        help = "Positive or negative offset in seconds for time correction."
    )]
    offset: f64,
    #[arg(long, help = "Upper-case the artist.")]
    ucartist: bool,
    #[arg(long, help = "Upper-case the title.")]
    uctitle: bool,
    #[arg(long, help = "Switch order, title on top.")]
    titlefirst: bool,
    #[arg(long, help = "Ignore content in parenthesis.")]
    ignorepar: bool,
    #[arg(
        long,
        help = "Show the title a second time near the end of the track. Requires --duration."
    )]
    bumpers: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "Use a template file for title and artist. Overrides title/artist options."
    )]
    template: Option<PathBuf>,
    #[arg(short = 'x', long, help = "Overwrite the output file if it already exists.")]
    overwrite: bool,
    #[arg(long, help = "Output to pipe (STDOUT). Overrides the output file.")]
    pipe: bool,
    #[arg(long, help = "Output WebVTT instead of SubRip.")]
    vtt: bool,
    #[arg(
        long,
        value_name = "STYLE",
        help = "Append a cue style annotation to WebVTT time ranges."
    )]
    style: Option<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let metadata = fs::metadata(&cli.input)
        .context(format!("Could not open this file: '{}'", cli.input.display()))?;
    if metadata.len() > MAX_INPUT_SIZE {
        return Err(CuevertError::TooLarge(metadata.len()).into());
    }
    let data = fs::read_to_string(&cli.input)
        .context(format!("Could not open this file: '{}'", cli.input.display()))?;
    if !data.starts_with("PERFORMER") {
        return Err(CuevertError::NotACueFile.into());
    }

    let mut parser = Parser::new();
    let sheet = parser.parse(&data);
    if sheet.tracks.is_empty() {
        eprintln!("No tracks to build subtitles from. Nothing to save...");
        return Ok(());
    }
    eprintln!("Parsed {} tracks.", sheet.tracks.len());

    // The template must load before any subtitle content is computed.
    let template = match &cli.template {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .context(format!("Could not load template file: '{}'", path.display()))?;
            Some(Template::parse(&raw)?)
        }
        None => None,
    };

    let format = if cli.vtt {
        SubtitleFormat::Vtt
    } else {
        SubtitleFormat::Srt
    };
    // An explicit --style beats a #VTT: directive from the template.
    let vtt_style = cli
        .style
        .clone()
        .or_else(|| template.as_ref().and_then(|t| t.vtt_style.clone()));

    let captions = processor::process(
        sheet,
        &ProcessOpts {
            delay: cli.delay,
            trim: cli.trim,
            duration: cli.duration,
            offset: cli.offset,
            bumpers: cli.bumpers,
            uppercase_artist: cli.ucartist,
            uppercase_title: cli.uctitle,
            ignore_parenthetical: cli.ignorepar,
        },
    );

    let opts = SerialiseOpts {
        format,
        template,
        title_first: cli.titlefirst,
        vtt_style,
    };

    if cli.pipe {
        let dst = io::stdout();
        serialiser::serialise(&captions, &opts, dst)?;
        return Ok(());
    }

    let out_path = match cli.output {
        Some(path) => path,
        None => cli.input.with_extension(format.extension()),
    };
    if !cli.overwrite && out_path.exists() {
        return Err(CuevertError::OutputExists(out_path).into());
    }

    let file = fs::File::create(&out_path)
        .context(format!("Could not save to file: '{}'", out_path.display()))?;
    serialiser::serialise(&captions, &opts, file)?;
    eprintln!("Output: {}", out_path.display());
    eprintln!("Done!");

    Ok(())
}
