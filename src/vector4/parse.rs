use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use super::Vector4;
use crate::diagnostics::check_nan;

const COMPONENT_NAMES: [char; 4] = ['x', 'y', 'z', 'w'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseVector4Error {
    MalformedToken(String),
    UnknownComponent(String),
    DuplicateComponent(char),
    MissingComponent(char),
    InvalidNumber {
        component: char,
        source: ParseFloatError,
    },
}

impl fmt::Display for ParseVector4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedToken(token) => {
                write!(f, "expected `component=value`, got `{token}`")
            }
            Self::UnknownComponent(name) => write!(f, "unknown vector component `{name}`"),
            Self::DuplicateComponent(name) => write!(f, "component `{name}` given more than once"),
            Self::MissingComponent(name) => write!(f, "missing component `{name}`"),
            Self::InvalidNumber { component, source } => {
                write!(f, "invalid value for component `{component}`: {source}")
            }
        }
    }
}

impl std::error::Error for ParseVector4Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidNumber { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn component_index(name: &str) -> Option<usize> {
    let mut chars = name.chars();
    let first = chars.next()?.to_ascii_lowercase();
    if chars.next().is_some() {
        return None;
    }
    COMPONENT_NAMES.iter().position(|&c| c == first)
}

/// Parses the `Display` format, e.g. `x=1.000 y=2.000 z=3.000 w=4.000`.
///
/// Components may appear in any order. `w` is optional and defaults to 1.
impl FromStr for Vector4 {
    type Err = ParseVector4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values: [Option<f32>; 4] = [None; 4];

        for token in s.split_whitespace() {
            let (name, value) = token
                .split_once('=')
                .ok_or_else(|| ParseVector4Error::MalformedToken(token.to_string()))?;
            let index = component_index(name)
                .ok_or_else(|| ParseVector4Error::UnknownComponent(name.to_string()))?;
            let component = COMPONENT_NAMES[index];
            if values[index].is_some() {
                return Err(ParseVector4Error::DuplicateComponent(component));
            }
            let parsed = value
                .parse::<f32>()
                .map_err(|source| ParseVector4Error::InvalidNumber { component, source })?;
            values[index] = Some(parsed);
        }

        let mut output = Vector4::new(0.0, 0.0, 0.0, values[3].unwrap_or(1.0));
        for i in 0..3 {
            output[i] = values[i].ok_or(ParseVector4Error::MissingComponent(COMPONENT_NAMES[i]))?;
        }
        check_nan(&output);
        Ok(output)
    }
}
