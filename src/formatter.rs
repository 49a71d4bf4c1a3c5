use crate::subtitle::SubtitleFormat;

pub fn artist(raw: &str, uppercase: bool) -> String {
    if uppercase {
        raw.to_uppercase()
    } else {
        raw.to_string()
    }
}

/// Applies the title transforms: optional upper-casing first, then trimming
/// and parenthesis handling. Opening brackets count as parentheses. When
/// parentheticals are ignored, a title that itself starts with `(` is left
/// alone, since truncating it would leave nothing to display.
pub fn title(raw: &str, uppercase: bool, ignore_parenthetical: bool) -> String {
    let text = if uppercase {
        raw.to_uppercase()
    } else {
        raw.to_string()
    };
    let text = text.trim().replace('[', "(");
    if ignore_parenthetical && !text.starts_with('(') {
        let kept = match text.find('(') {
            Some(i) => &text[..i],
            None => &text[..],
        };
        kept.trim().to_string()
    } else {
        text
    }
}

/// Renders whole seconds as a fixed-width clock stamp. Sub-second precision
/// is never tracked, so the milliseconds are always literal zeroes; only the
/// separator differs between the two output syntaxes.
pub fn timestamp(seconds: f64, format: SubtitleFormat) -> String {
    let total_secs = seconds.floor() as i64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let separator = match format {
        SubtitleFormat::Srt => ',',
        SubtitleFormat::Vtt => '.',
    };
    format!("{:02}:{:02}:{:02}{}000", hours, minutes, secs, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_timestamp {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (seconds, format, expected) = $value;

                assert_eq!(timestamp(seconds, format), expected);
            }
        )*
        }
    }

    test_timestamp! {
        test_timestamp_zero: (0.0, SubtitleFormat::Srt, "00:00:00,000"),
        test_timestamp_seconds: (59.0, SubtitleFormat::Srt, "00:00:59,000"),
        test_timestamp_minutes: (62.0, SubtitleFormat::Srt, "00:01:02,000"),
        test_timestamp_hours: (3723.0, SubtitleFormat::Srt, "01:02:03,000"),
        test_timestamp_fraction_floored: (95.9, SubtitleFormat::Srt, "00:01:35,000"),
        test_timestamp_vtt_separator: (3723.0, SubtitleFormat::Vtt, "01:02:03.000"),
        test_timestamp_two_digit_hours: (36_061.0, SubtitleFormat::Vtt, "10:01:01.000"),
    }

    macro_rules! test_title {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, uppercase, ignore_parenthetical, expected) = $value;

                assert_eq!(title(input, uppercase, ignore_parenthetical), expected);
            }
        )*
        }
    }

    test_title! {
        test_title_passthrough: ("Song", false, false, "Song"),
        test_title_trimmed: ("  Song  ", false, false, "Song"),
        test_title_parenthetical_kept: ("Song (Live)", false, false, "Song (Live)"),
        test_title_parenthetical_dropped: ("Song (Live)", false, true, "Song"),
        test_title_leading_parenthesis_kept: ("(Intro) Song", false, true, "(Intro) Song"),
        // Only the opening bracket is normalised to a parenthesis.
        test_title_bracket_normalised: ("Song [Remix]", false, false, "Song (Remix]"),
        test_title_bracket_dropped: ("Song [Remix]", false, true, "Song"),
        test_title_leading_bracket_kept: ("[Intro] Song", false, true, "(Intro] Song"),
        test_title_uppercased: ("Song (Live)", true, true, "SONG"),
        test_title_empty: ("", false, true, ""),
    }

    #[test]
    fn artist_uppercase_is_optional() {
        assert_eq!(artist("Some Artist", false), "Some Artist");
        assert_eq!(artist("Some Artist", true), "SOME ARTIST");
    }

    #[test]
    fn formatting_is_deterministic() {
        let first = title("Song (Live)", true, true);
        let second = title("Song (Live)", true, true);

        assert_eq!(first, second);
        assert_eq!(artist("a", true), artist("a", true));
    }
}
