use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected seconds or hh:mm:ss, got {0} parts")]
    WrongPartCount(usize),
    #[error("\"{0}\" is not a non-negative number")]
    NotANumber(String),
    #[error("minutes must be below 60")]
    MinutesOutOfRange,
    #[error("seconds must be below 60")]
    SecondsOutOfRange,
}

/// Accepts either a bare number of seconds ("90") or "hh:mm:ss".
/// Hours are unbounded, minutes and seconds must stay below 60.
pub fn parse(input: &str) -> Result<u64, ParseError> {
    let parts: Vec<&str> = input.trim().split(':').collect();

    match parts.len() {
        1 => parse_component(parts[0]),
        3 => {
            let hours = parse_component(parts[0])?;
            let minutes = parse_component(parts[1])?;
            let seconds = parse_component(parts[2])?;

            if minutes >= 60 {
                return Err(ParseError::MinutesOutOfRange);
            }
            if seconds >= 60 {
                return Err(ParseError::SecondsOutOfRange);
            }

            // minutes and seconds are < 60 here, so only the hours term can
            // overflow; saturate rather than panic on absurd-but-valid input
            Ok(hours
                .saturating_mul(3600)
                .saturating_add(minutes * 60 + seconds))
        }
        n => Err(ParseError::WrongPartCount(n)),
    }
}

fn parse_component(token: &str) -> Result<u64, ParseError> {
    let token = token.trim();
    token
        .parse::<u64>()
        .map_err(|_| ParseError::NotANumber(token.to_string()))
}

pub fn format(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_seconds() {
        assert_eq!(parse("90"), Ok(90));
        assert_eq!(format(90), "00:01:30");
        assert_eq!(parse("0"), Ok(0));
    }

    #[test]
    fn colon_form() {
        assert_eq!(parse("1:2:3"), Ok(3723));
        assert_eq!(format(3723), "01:02:03");
        assert_eq!(parse("00:00:00"), Ok(0));
        assert_eq!(parse(" 10:00:00 "), Ok(36000));
    }

    #[test]
    fn minutes_and_seconds_bounded() {
        assert_eq!(parse("0:60:00"), Err(ParseError::MinutesOutOfRange));
        assert_eq!(parse("0:00:60"), Err(ParseError::SecondsOutOfRange));
        assert_eq!(parse("100:59:59"), Ok(100 * 3600 + 59 * 60 + 59));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse("-1:00:00"), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse("abc"), Err(ParseError::NotANumber(_))));
        assert!(matches!(parse(""), Err(ParseError::NotANumber(_))));
        assert_eq!(parse("1:2"), Err(ParseError::WrongPartCount(2)));
        assert_eq!(parse("1:2:3:4"), Err(ParseError::WrongPartCount(4)));
        assert!(matches!(parse("1.5"), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn huge_hours_saturate_instead_of_overflowing() {
        // hours fit u64 but the seconds conversion would overflow
        assert_eq!(parse("10000000000000000000:00:01"), Ok(u64::MAX));
        // hours beyond u64 are rejected as non-numeric
        assert!(matches!(
            parse("99999999999999999999:00:00"),
            Err(ParseError::NotANumber(_))
        ));
    }

    #[test]
    fn hours_never_truncate() {
        assert_eq!(format(360000), "100:00:00");
        assert_eq!(parse(&format(360000)), Ok(360000));
    }

    #[test]
    fn round_trips_normalized() {
        for input in ["90", "1:2:3", "0", "12:34:56", "99:00:01"] {
            let secs = parse(input).unwrap();
            assert_eq!(parse(&format(secs)), Ok(secs));
        }
    }
}
