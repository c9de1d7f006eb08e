//! Version numbers and the lookup tables that translate between them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An error from parsing a [`VersionTuple`][] out of a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    /// The string had no components at all
    #[error("version string is empty")]
    Empty,
    /// More than major.minor.subminor.build
    #[error("version '{version}' has more than 4 components")]
    TooManyComponents {
        /// The input
        version: String,
    },
    /// One of the components wasn't a non-negative integer
    #[error("version '{version}' has an invalid component '{component}'")]
    InvalidComponent {
        /// The input
        version: String,
        /// The bad component
        component: String,
    },
}

/// A version number of the form `major[.minor[.subminor[.build]]]`
///
/// An absent component is *not* the same as a zero component: `10.15` and
/// `10.15.0` are different values, render differently, and look up different
/// [`VersionMap`][] keys. Ordering is lexicographic, with an absent component
/// ordered before any present one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionTuple {
    major: u32,
    minor: Option<u32>,
    subminor: Option<u32>,
    build: Option<u32>,
}

impl VersionTuple {
    /// `major`
    pub const fn new(major: u32) -> Self {
        Self {
            major,
            minor: None,
            subminor: None,
            build: None,
        }
    }

    /// `major.minor`
    pub const fn with_minor(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: None,
            build: None,
        }
    }

    /// `major.minor.subminor`
    pub const fn with_subminor(major: u32, minor: u32, subminor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: Some(subminor),
            build: None,
        }
    }

    /// `major.minor.subminor.build`
    pub const fn with_build(major: u32, minor: u32, subminor: u32, build: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
            subminor: Some(subminor),
            build: Some(build),
        }
    }

    /// The major component
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// The minor component, if one was given
    pub const fn minor(&self) -> Option<u32> {
        self.minor
    }

    /// The subminor component, if one was given
    pub const fn subminor(&self) -> Option<u32> {
        self.subminor
    }

    /// The build component, if one was given
    pub const fn build(&self) -> Option<u32> {
        self.build
    }

    /// This version with the build component dropped
    pub const fn without_build(self) -> Self {
        Self {
            build: None,
            ..self
        }
    }

    /// Whether this is exactly `0`, i.e. what you get from an OS name with no
    /// version digits
    pub const fn is_empty(&self) -> bool {
        self.major == 0 && self.minor.is_none() && self.subminor.is_none() && self.build.is_none()
    }

    /// (major, minor, subminor) with absent components read as 0
    pub fn components(&self) -> (u32, u32, u32) {
        (
            self.major,
            self.minor.unwrap_or(0),
            self.subminor.unwrap_or(0),
        )
    }

    /// Numeric "older than major.minor", reading absent components as 0
    pub fn is_older_than(&self, major: u32, minor: u32) -> bool {
        let (self_major, self_minor, _) = self.components();
        (self_major, self_minor) < (major, minor)
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        for component in [self.minor, self.subminor, self.build].into_iter().flatten() {
            write!(f, ".{component}")?;
        }
        Ok(())
    }
}

impl FromStr for VersionTuple {
    type Err = ParseVersionError;

    fn from_str(version: &str) -> Result<Self, Self::Err> {
        if version.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        let mut parsed = Vec::with_capacity(4);
        for component in version.split('.') {
            let value = component
                .parse::<u32>()
                .map_err(|_| ParseVersionError::InvalidComponent {
                    version: version.to_owned(),
                    component: component.to_owned(),
                })?;
            parsed.push(value);
        }
        match parsed[..] {
            [major] => Ok(Self::new(major)),
            [major, minor] => Ok(Self::with_minor(major, minor)),
            [major, minor, subminor] => Ok(Self::with_subminor(major, minor, subminor)),
            [major, minor, subminor, build] => {
                Ok(Self::with_build(major, minor, subminor, build))
            }
            _ => Err(ParseVersionError::TooManyComponents {
                version: version.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for VersionTuple {
    type Error = ParseVersionError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionTuple> for String {
    fn from(value: VersionTuple) -> Self {
        value.to_string()
    }
}

impl JsonSchema for VersionTuple {
    fn schema_name() -> String {
        "VersionTuple".to_owned()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

/// A table from one platform's version numbers to another's
///
/// Keys are version strings without a build component (`"10.15"`,
/// `"10.15.1"`). Lookups are exact; the truncating fallback lives with the
/// code that remaps versions, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VersionMap(BTreeMap<String, VersionTuple>);

impl VersionMap {
    /// Look up the exact string form of `version`
    pub fn get(&self, version: &VersionTuple) -> Option<VersionTuple> {
        self.0.get(&version.to_string()).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(VersionTuple, VersionTuple)> for VersionMap {
    fn from_iter<T: IntoIterator<Item = (VersionTuple, VersionTuple)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(from, to)| (from.without_build().to_string(), to))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for input in ["10", "10.15", "10.15.4", "10.15.4.19"] {
            let version: VersionTuple = input.parse().unwrap();
            assert_eq!(version.to_string(), input);
        }
        let version: VersionTuple = "13.1.2".parse().unwrap();
        assert_eq!(version.major(), 13);
        assert_eq!(version.minor(), Some(1));
        assert_eq!(version.subminor(), Some(2));
        assert_eq!(version.build(), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<VersionTuple>(), Err(ParseVersionError::Empty));
        assert!(matches!(
            "1.2.3.4.5".parse::<VersionTuple>(),
            Err(ParseVersionError::TooManyComponents { .. })
        ));
        assert!(matches!(
            "10.x".parse::<VersionTuple>(),
            Err(ParseVersionError::InvalidComponent { component, .. }) if component == "x"
        ));
        assert!(matches!(
            "10..1".parse::<VersionTuple>(),
            Err(ParseVersionError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn absent_is_not_zero() {
        let short = VersionTuple::with_minor(10, 15);
        let padded = VersionTuple::with_subminor(10, 15, 0);
        assert_ne!(short, padded);
        assert!(short < padded);
        assert_ne!(short.to_string(), padded.to_string());
        assert_eq!(short.components(), padded.components());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(VersionTuple::with_minor(10, 14) < VersionTuple::with_minor(10, 15));
        assert!(VersionTuple::with_subminor(10, 15, 9) < VersionTuple::new(11));
        assert!(VersionTuple::with_minor(12, 1).is_older_than(12, 2));
        assert!(!VersionTuple::with_minor(12, 2).is_older_than(12, 2));
        assert!(VersionTuple::new(0).is_older_than(12, 2));
    }

    #[test]
    fn without_build() {
        let version = VersionTuple::with_build(10, 15, 1, 42);
        assert_eq!(version.without_build(), VersionTuple::with_subminor(10, 15, 1));
    }

    #[test]
    fn serde_as_string() {
        let version = VersionTuple::with_minor(5, 3);
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""5.3""#);
        let back: VersionTuple = serde_json::from_str(r#""5.3""#).unwrap();
        assert_eq!(back, version);
        assert!(serde_json::from_str::<VersionTuple>(r#""five""#).is_err());
    }

    #[test]
    fn version_map_lookup_is_exact() {
        let map: VersionMap = [(
            VersionTuple::with_build(10, 15, 0, 7),
            VersionTuple::with_minor(13, 1),
        )]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get(&VersionTuple::with_subminor(10, 15, 0)),
            Some(VersionTuple::with_minor(13, 1))
        );
        assert_eq!(map.get(&VersionTuple::with_minor(10, 15)), None);
    }
}
