//! Step grammar for `simulate --steps`.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// One user or timer action applied to a headless slider.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Next,
    Prev,
    /// `go:N`
    GoTo(isize),
    /// `tick`: one autoplay interval elapses.
    Tick,
    /// `resize:W` or `resize:W:C`
    Resize { window: f32, container: Option<f32> },
    /// `scroll:o1/o2/...` with an optional `@leading` edge.
    Scroll { offsets: Vec<f32>, leading: f32 },
}

#[derive(Debug, Error, PartialEq)]
pub enum StepParseError {
    #[error("unknown step '{0}' (expected next, prev, go:N, tick, resize:W[:C], scroll:o1/o2[@edge])")]
    Unknown(String),
    #[error("step '{step}' has an invalid number '{value}'")]
    InvalidNumber { step: String, value: String },
    #[error("step '{0}' needs at least one offset")]
    NoOffsets(String),
}

fn number<T: FromStr>(step: &str, value: &str) -> Result<T, StepParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| StepParseError::InvalidNumber {
            step: step.to_string(),
            value: value.to_string(),
        })
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let step = raw.trim();
        let (head, rest) = match step.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (step, None),
        };

        match (head.to_ascii_lowercase().as_str(), rest) {
            ("next", None) => Ok(Step::Next),
            ("prev", None) => Ok(Step::Prev),
            ("tick", None) => Ok(Step::Tick),
            ("go", Some(target)) => Ok(Step::GoTo(number(step, target)?)),
            ("resize", Some(widths)) => {
                let (window, container) = match widths.split_once(':') {
                    Some((window, container)) => {
                        (number(step, window)?, Some(number(step, container)?))
                    }
                    None => (number(step, widths)?, None),
                };
                Ok(Step::Resize { window, container })
            }
            ("scroll", Some(body)) => {
                let (offsets, leading) = match body.split_once('@') {
                    Some((offsets, leading)) => (offsets, number(step, leading)?),
                    None => (body, 0.0),
                };
                let offsets = offsets
                    .split('/')
                    .filter(|value| !value.trim().is_empty())
                    .map(|value| number(step, value))
                    .collect::<Result<Vec<f32>, _>>()?;
                if offsets.is_empty() {
                    return Err(StepParseError::NoOffsets(step.to_string()));
                }
                Ok(Step::Scroll { offsets, leading })
            }
            _ => Err(StepParseError::Unknown(step.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Next => f.write_str("next"),
            Step::Prev => f.write_str("prev"),
            Step::GoTo(target) => write!(f, "go:{target}"),
            Step::Tick => f.write_str("tick"),
            Step::Resize {
                window,
                container: Some(container),
            } => write!(f, "resize:{window}:{container}"),
            Step::Resize { window, container: None } => write!(f, "resize:{window}"),
            Step::Scroll { offsets, leading } => {
                let joined = offsets
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("/");
                write!(f, "scroll:{joined}@{leading}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_steps() {
        assert_eq!("next".parse::<Step>(), Ok(Step::Next));
        assert_eq!(" PREV ".parse::<Step>(), Ok(Step::Prev));
        assert_eq!("tick".parse::<Step>(), Ok(Step::Tick));
        assert_eq!("go:-2".parse::<Step>(), Ok(Step::GoTo(-2)));
    }

    #[test]
    fn parses_resize_with_and_without_container() {
        assert_eq!(
            "resize:900".parse::<Step>(),
            Ok(Step::Resize {
                window: 900.0,
                container: None
            })
        );
        assert_eq!(
            "resize:1300:1240".parse::<Step>(),
            Ok(Step::Resize {
                window: 1300.0,
                container: Some(1240.0)
            })
        );
    }

    #[test]
    fn parses_scroll_offsets_and_edge() {
        assert_eq!(
            "scroll:50/5/40".parse::<Step>(),
            Ok(Step::Scroll {
                offsets: vec![50.0, 5.0, 40.0],
                leading: 0.0
            })
        );
        assert_eq!(
            "scroll:-120/10@24".parse::<Step>(),
            Ok(Step::Scroll {
                offsets: vec![-120.0, 10.0],
                leading: 24.0
            })
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(matches!(
            "jump".parse::<Step>(),
            Err(StepParseError::Unknown(_))
        ));
        assert!(matches!(
            "next:1".parse::<Step>(),
            Err(StepParseError::Unknown(_))
        ));
        assert!(matches!(
            "go:x".parse::<Step>(),
            Err(StepParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "scroll:@3".parse::<Step>(),
            Err(StepParseError::NoOffsets(_))
        ));
    }
}
