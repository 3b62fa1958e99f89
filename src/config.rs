//! Section-based settings sources.

use crate::{
    error::{Error, Result},
    ini,
};
use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

/// A key/value store partitioned into named sections.
pub trait SectionSource {
    /// Looks up `key` in `section`. Returns `None` when either is absent.
    fn get(&self, section: &str, key: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

impl Section {
    /// Case-insensitive lookup. A repeated key resolves to its last value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}

/// Settings sections read from an INI or JSON5 document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Reads a settings file. `.json5` and `.json` files are parsed as JSON5,
    /// everything else as INI.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json5") || ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json5_str(&text)
        } else {
            Self::from_ini_str(&text)
        }
    }

    pub fn from_ini_str(text: &str) -> Result<Self> {
        ini::parse(text)
    }

    /// Parses a JSON5 object of objects, e.g.
    /// `{ "CARLA/Sensor/Lidar": { SensorType: "LIDAR_RAY_CAST", Channels: 64 } }`.
    pub fn from_json5_str(text: &str) -> Result<Self> {
        let document: BTreeMap<String, BTreeMap<String, Scalar>> = json5::from_str(text)?;
        let mut sections = Self::default();
        for (name, entries) in document {
            sections.ensure(&name);
            for (key, value) in entries {
                sections.insert(&name, key, value.to_string());
            }
        }
        Ok(sections)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }

    /// Appends an entry, creating the section on first use.
    pub fn insert(&mut self, section: &str, key: impl Into<String>, value: impl Into<String>) {
        self.ensure(section)
            .entries
            .push((key.into(), value.into()));
    }

    pub(crate) fn ensure(&mut self, name: &str) -> &mut Section {
        let index = match self
            .sections
            .iter()
            .position(|section| section.name.eq_ignore_ascii_case(name))
        {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    entries: vec![],
                });
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }
}

impl SectionSource for Sections {
    fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }
}

/// A JSON5 leaf value, kept as the string a settings key would hold.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}
