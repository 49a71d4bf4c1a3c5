use std::error::Error;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CuevertError {
    NotACueFile,
    TooLarge(u64),
    OutputExists(PathBuf),
}

impl Error for CuevertError {}

impl fmt::Display for CuevertError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CuevertError::NotACueFile => {
                write!(fmt, "Sorry, need a VirtualDJ CUE file as input.")
            }
            CuevertError::TooLarge(size) => {
                write!(fmt, "Input file is too large ({} bytes, max 10485760).", size)
            }
            CuevertError::OutputExists(path) => write!(
                fmt,
                "Output file '{}' already exists. Aborting... Also see option \"-x, --overwrite\".",
                path.display()
            ),
        }
    }
}
