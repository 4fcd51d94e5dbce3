use serde::Deserialize;
use std::fs;

use crate::error::IdforgeError;
use crate::logger::Logger;

/// Rank in the four-tier administrative hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaLevel {
    Province,
    City,
    County,
    Town,
}

impl AreaLevel {
    /// Maps the dataset's "1".."4" level codes. Anything else is an
    /// unrecognized level and the entry is dropped from every index.
    pub fn from_code(code: &str) -> Option<AreaLevel> {
        match code {
            "1" => Some(AreaLevel::Province),
            "2" => Some(AreaLevel::City),
            "3" => Some(AreaLevel::County),
            "4" => Some(AreaLevel::Town),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AreaRecord {
    pub code: String,
    pub name: String,
    pub level: AreaLevel,
    /// Code of the containing area; empty at province level.
    pub parent_code: String,
}

#[derive(Debug, Deserialize)]
struct RawArea {
    code: Option<String>,
    name: Option<String>,
    level: Option<String>,
    parent_code: Option<String>,
}

/// Loads the administrative-area dataset: a JSON array of objects with
/// string fields `code`, `name`, `level` ("1".."4") and `parent_code`.
///
/// A missing field on any entry fails the whole load; an empty array is a
/// valid (if useless) dataset and succeeds.
pub fn load_area_data(path: &str, logger: &Logger) -> Result<Vec<AreaRecord>, IdforgeError> {
    logger.info(&format!("Loading area dataset from {}...", path));
    let content =
        fs::read_to_string(path).map_err(|e| IdforgeError::DatasetRead(e.to_string()))?;
    let raw: Vec<RawArea> =
        serde_json::from_str(&content).map_err(|e| IdforgeError::DatasetParse(e.to_string()))?;

    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for (index, entry) in raw.into_iter().enumerate() {
        let code = entry
            .code
            .ok_or(IdforgeError::MissingField { index, field: "code" })?;
        let name = entry
            .name
            .ok_or(IdforgeError::MissingField { index, field: "name" })?;
        let level_code = entry
            .level
            .ok_or(IdforgeError::MissingField { index, field: "level" })?;
        let parent_code = entry.parent_code.ok_or(IdforgeError::MissingField {
            index,
            field: "parent_code",
        })?;

        match AreaLevel::from_code(&level_code) {
            Some(level) => records.push(AreaRecord {
                code,
                name,
                level,
                parent_code,
            }),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        logger.warning(&format!(
            "Dropped {} area entries with unrecognized level values.",
            dropped
        ));
    }
    logger.info(&format!("Loaded {} area records.", records.len()));
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_dataset() {
        let path = write_temp(
            "idforge_loader_ok.json",
            r#"[
                {"code": "110000", "name": "北京市", "level": "1", "parent_code": ""},
                {"code": "110100", "name": "市辖区", "level": "2", "parent_code": "110000"}
            ]"#,
        );
        let records = load_area_data(path.to_str().unwrap(), &Logger::new(true)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, AreaLevel::Province);
        assert_eq!(records[1].parent_code, "110000");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_field_fails_with_entry_position() {
        let path = write_temp(
            "idforge_loader_missing.json",
            r#"[{"code": "110000", "name": "北京市", "level": "1", "parent_code": ""},
               {"code": "110100", "level": "2", "parent_code": "110000"}]"#,
        );
        let err = load_area_data(path.to_str().unwrap(), &Logger::new(true)).unwrap_err();
        match err {
            IdforgeError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "name");
            }
            other => panic!("expected MissingField, got {:?}", other),
        }
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn unrecognized_level_is_dropped_not_fatal() {
        let path = write_temp(
            "idforge_loader_level.json",
            r#"[{"code": "110000", "name": "北京市", "level": "1", "parent_code": ""},
               {"code": "999999", "name": "nowhere", "level": "9", "parent_code": ""}]"#,
        );
        let records = load_area_data(path.to_str().unwrap(), &Logger::new(true)).unwrap();
        assert_eq!(records.len(), 1);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn empty_array_is_distinct_from_load_failure() {
        let path = write_temp("idforge_loader_empty.json", "[]");
        let records = load_area_data(path.to_str().unwrap(), &Logger::new(true)).unwrap();
        assert!(records.is_empty());
        fs::remove_file(path).unwrap();

        let err = load_area_data("/nonexistent/area.json", &Logger::new(true)).unwrap_err();
        assert!(matches!(err, IdforgeError::DatasetRead(_)));
    }

    #[test]
    fn garbage_json_is_a_parse_error() {
        let path = write_temp("idforge_loader_garbage.json", "{not json");
        let err = load_area_data(path.to_str().unwrap(), &Logger::new(true)).unwrap_err();
        assert!(matches!(err, IdforgeError::DatasetParse(_)));
        fs::remove_file(path).unwrap();
    }
}
