use crate::common::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier such as `minecraft:desert`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    pub fn new(namespace: &str, path: &str) -> DomainResult<Self> {
        let input = format!("{}:{}", namespace, path);
        if namespace.is_empty() || !namespace.chars().all(valid_namespace_char) {
            return Err(invalid(&input, "namespace must match [a-z0-9_.-]+"));
        }
        if path.is_empty() || !path.chars().all(valid_path_char) {
            return Err(invalid(&input, "path must match [a-z0-9_.-/]+"));
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Shorthand for an identifier in the default namespace.
    pub fn minecraft(path: &str) -> DomainResult<Self> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn valid_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn valid_path_char(c: char) -> bool {
    valid_namespace_char(c) || c == '/'
}

fn invalid(input: &str, reason: &str) -> DomainError {
    DomainError::InvalidResourceLocation {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for ResourceLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some(("", path)) => Self::minecraft(path).map_err(|_| invalid(s, "invalid path")),
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::minecraft(s),
        }
    }
}

impl TryFrom<String> for ResourceLocation {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceLocation> for String {
    fn from(value: ResourceLocation) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}
