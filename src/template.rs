use anyhow::{Context, Result};
use regex::{Captures, Regex};

/// A loaded caption template. Comment lines are stripped when the template is
/// parsed; the surviving lines form one CRLF-joined block in which the
/// literal tokens TITLE and ARTIST are replaced per caption.
pub struct Template {
    text: String,
    placeholders: Regex,
    pub vtt_style: Option<String>,
}

impl Template {
    pub fn parse(raw: &str) -> Result<Template> {
        let raw = raw.replace('\r', "");

        // Comment lines may carry a "#VTT:<style>" directive supplying a
        // default cue style; the first one found wins.
        let mut vtt_style = None;
        for line in raw.split('\n') {
            if !line.starts_with('#') {
                continue;
            }
            let squeezed: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if let Some(style) = squeezed.strip_prefix("#VTT:") {
                if !style.is_empty() {
                    vtt_style = Some(style.to_string());
                    break;
                }
            }
        }

        let text = raw
            .split('\n')
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\r\n");

        let placeholders =
            Regex::new("TITLE|ARTIST").context("Invalid placeholder pattern.")?;

        Ok(Template {
            text,
            placeholders,
            vtt_style,
        })
    }

    /// Substitutes each matched token independently. There is no word
    /// boundary around the tokens, so `ARTISTTITLE` expands to both values
    /// back to back.
    pub fn expand(&self, artist: &str, title: &str) -> String {
        self.placeholders
            .replace_all(&self.text, |caps: &Captures| {
                if &caps[0] == "ARTIST" {
                    artist.to_string()
                } else {
                    title.to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines_are_dropped() {
        let template = Template::parse("# layout v2\nARTIST\nTITLE\n").unwrap();

        assert_eq!(template.expand("A", "T"), "A\r\nT\r\n");
    }

    #[test]
    fn indented_hash_is_not_a_comment() {
        let template = Template::parse(" # ARTIST").unwrap();

        assert_eq!(template.expand("A", "T"), " # A");
    }

    #[test]
    fn tokens_expand_without_word_boundaries() {
        let template = Template::parse("ARTISTTITLE").unwrap();

        assert_eq!(template.expand("A", "T"), "AT");
    }

    #[test]
    fn token_inside_word_is_replaced() {
        let template = Template::parse("SUBTITLE by ARTIST").unwrap();

        assert_eq!(template.expand("A", "T"), "SUBT by A");
    }

    #[test]
    fn expansion_handles_empty_values() {
        let template = Template::parse("ARTIST - TITLE").unwrap();

        assert_eq!(template.expand("", "Song"), " - Song");
    }

    #[test]
    fn first_vtt_directive_wins() {
        let template =
            Template::parse("# VTT: line:85%\n#VTT:align:start\nTITLE\n").unwrap();

        assert_eq!(template.vtt_style.as_deref(), Some("line:85%"));
    }

    #[test]
    fn directive_whitespace_is_squeezed_before_matching() {
        let template = Template::parse("#  VTT : line:85%\nTITLE\n").unwrap();

        assert_eq!(template.vtt_style.as_deref(), Some("line:85%"));
    }

    #[test]
    fn plain_comments_set_no_style() {
        let template = Template::parse("# just a note\nTITLE\n").unwrap();

        assert!(template.vtt_style.is_none());
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let template = Template::parse("# note\r\nARTIST\r\nTITLE\r\n").unwrap();

        assert_eq!(template.expand("A", "T"), "A\r\nT\r\n");
    }
}
