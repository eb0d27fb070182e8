use snafu::Snafu;

use crate::tree::{Rule, SEPARATOR, rules};

/// Relative directory that every emitted path is placed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir(String);

impl BaseDir {
    /// `.` and the empty string mean "no prefix" and yield `None`.
    pub fn parse(raw: &str) -> Result<Option<Self>, BaseDirError> {
        let trimmed = raw.trim();
        let fail = |rule| BaseDirError {
            base_dir: raw.to_string(),
            rule,
        };

        if trimmed.starts_with(SEPARATOR) {
            return Err(fail(Rule::AbsolutePath));
        }

        let segments = trimmed
            .trim_end_matches(SEPARATOR)
            .split(SEPARATOR)
            .filter(|segment| *segment != "." && !trimmed.is_empty())
            .map(|segment| rules::check_segment(segment).map(|()| segment))
            .collect::<Result<Vec<_>, _>>()
            .map_err(fail)?;

        if segments.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self(segments.join("/"))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn join(&self, path: &str) -> String {
        format!("{}{SEPARATOR}{path}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("Invalid base directory '{base_dir}': {rule}"))]
pub struct BaseDirError {
    pub base_dir: String,
    pub rule: Rule,
}
