use std::collections::HashMap;

use super::loader::{AreaLevel, AreaRecord};

/// Read-only index over the administrative-area hierarchy.
///
/// Built once from the flat dataset, then only queried. Children are looked
/// up by parent code through per-level maps, never via back-references, so
/// records whose parent code resolves nowhere are simply unreachable.
pub struct AreaIndex {
    by_code: HashMap<String, AreaRecord>,
    provinces: Vec<AreaRecord>,
    cities: HashMap<String, Vec<AreaRecord>>,
    counties: HashMap<String, Vec<AreaRecord>>,
    towns: HashMap<String, Vec<AreaRecord>>,
}

impl AreaIndex {
    pub fn from_records(records: Vec<AreaRecord>) -> Self {
        let mut index = AreaIndex {
            by_code: HashMap::with_capacity(records.len()),
            provinces: Vec::new(),
            cities: HashMap::new(),
            counties: HashMap::new(),
            towns: HashMap::new(),
        };
        for record in records {
            // Last write wins on duplicate codes.
            index.by_code.insert(record.code.clone(), record.clone());
            match record.level {
                AreaLevel::Province => index.provinces.push(record),
                AreaLevel::City => index
                    .cities
                    .entry(record.parent_code.clone())
                    .or_default()
                    .push(record),
                AreaLevel::County => index
                    .counties
                    .entry(record.parent_code.clone())
                    .or_default()
                    .push(record),
                AreaLevel::Town => index
                    .towns
                    .entry(record.parent_code.clone())
                    .or_default()
                    .push(record),
            }
        }
        index
    }

    /// Province-level entries in dataset encounter order.
    pub fn provinces(&self) -> &[AreaRecord] {
        &self.provinces
    }

    /// Entries of `level` whose parent code equals `parent_code`. Empty for
    /// provinces (they have no parent) and for unknown parents.
    pub fn children_of(&self, parent_code: &str, level: AreaLevel) -> &[AreaRecord] {
        let map = match level {
            AreaLevel::Province => return &[],
            AreaLevel::City => &self.cities,
            AreaLevel::County => &self.counties,
            AreaLevel::Town => &self.towns,
        };
        map.get(parent_code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get(&self, code: &str) -> Option<&AreaRecord> {
        self.by_code.get(code)
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(code: &str, name: &str, level: AreaLevel, parent: &str) -> AreaRecord {
        AreaRecord {
            code: code.to_string(),
            name: name.to_string(),
            level,
            parent_code: parent.to_string(),
        }
    }

    #[test]
    fn groups_children_by_parent_and_level() {
        let index = AreaIndex::from_records(vec![
            rec("110000", "北京市", AreaLevel::Province, ""),
            rec("120000", "天津市", AreaLevel::Province, ""),
            rec("110100", "市辖区", AreaLevel::City, "110000"),
            rec("110101", "东城区", AreaLevel::County, "110100"),
            rec("110102", "西城区", AreaLevel::County, "110100"),
            rec("110101001", "东华门街道", AreaLevel::Town, "110101"),
        ]);
        assert_eq!(index.provinces().len(), 2);
        assert_eq!(index.provinces()[0].code, "110000");
        assert_eq!(index.children_of("110000", AreaLevel::City).len(), 1);
        assert_eq!(index.children_of("110100", AreaLevel::County).len(), 2);
        assert_eq!(index.children_of("110101", AreaLevel::Town).len(), 1);
        assert!(index.children_of("120000", AreaLevel::City).is_empty());
        assert!(index.children_of("unknown", AreaLevel::Town).is_empty());
    }

    #[test]
    fn duplicate_codes_last_write_wins() {
        let index = AreaIndex::from_records(vec![
            rec("110000", "old name", AreaLevel::Province, ""),
            rec("110000", "北京市", AreaLevel::Province, ""),
        ]);
        assert_eq!(index.get("110000").unwrap().name, "北京市");
        // Both entries still appear in the province list, in encounter order.
        assert_eq!(index.provinces().len(), 2);
    }

    #[test]
    fn orphan_records_are_loaded_but_unreachable() {
        let index = AreaIndex::from_records(vec![
            rec("110000", "北京市", AreaLevel::Province, ""),
            rec("330100", "杭州市", AreaLevel::City, "330000"),
        ]);
        assert!(index.get("330100").is_some());
        assert!(index.children_of("110000", AreaLevel::City).is_empty());
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = AreaIndex::from_records(Vec::new());
        assert!(index.is_empty());
        assert!(index.provinces().is_empty());
    }
}
