use chrono::{Datelike, Local};
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;

use super::checksum;
use super::dates;
use crate::area::{AreaIndex, AreaLevel, AreaRecord};
use crate::error::IdforgeError;

/// Requested gender for the sequence code. `Any` leaves the parity digit
/// unconstrained; the reported gender always follows the digit that was
/// actually drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderPref {
    Male,
    Female,
    Any,
}

impl FromStr for GenderPref {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(GenderPref::Male),
            "female" | "f" => Ok(GenderPref::Female),
            "any" | "random" => Ok(GenderPref::Any),
            other => Err(format!("unknown gender preference '{}'", other)),
        }
    }
}

/// One synthetic identity record. Flat and serializable; the caller owns it
/// and renders or persists it however it likes.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedRecord {
    pub id_card: String,
    pub area_code: String,
    pub birthdate: String,
    pub age: i32,
    pub gender: String,
    pub nation: String,
    pub province: String,
    pub city: String,
    pub county: String,
    pub town: String,
    pub house_number: String,
    pub full_address: String,
    pub issuing_authority: String,
    pub issue_date: String,
    pub expiry_date: String,
}

const HAN: &str = "汉";

// The 55 recognized minority nations; drawn uniformly for the 8% non-Han case.
static MINORITY_NATIONS: [&str; 55] = [
    "壮", "回", "满", "维吾尔", "苗", "彝", "土家", "藏", "蒙古", "侗",
    "布依", "瑶", "白", "朝鲜", "哈尼", "黎", "哈萨克", "傣", "畲", "傈僳",
    "东乡", "仡佬", "拉祜", "佤", "水", "纳西", "羌", "土", "仫佬", "锡伯",
    "柯尔克孜", "景颇", "达斡尔", "撒拉", "布朗", "毛南", "塔吉克", "普米",
    "阿昌", "怒", "鄂温克", "京", "基诺", "德昂", "保安", "俄罗斯", "裕固",
    "乌孜别克", "门巴", "鄂伦春", "独龙", "赫哲", "高山", "珞巴", "塔塔尔",
];

const ODD_DIGITS: [u8; 5] = [1, 3, 5, 7, 9];
const EVEN_DIGITS: [u8; 5] = [0, 2, 4, 6, 8];

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [AreaRecord]) -> Option<&'a AreaRecord> {
    if pool.is_empty() {
        None
    } else {
        Some(&pool[rng.random_range(0..pool.len())])
    }
}

/// Assembles checksum-valid identity numbers with consistent biographical
/// and issuance metadata from a read-only [`AreaIndex`].
pub struct IdCardGenerator {
    index: AreaIndex,
}

impl IdCardGenerator {
    /// Construction never fails; an empty dataset defers the failure to
    /// [`generate`](Self::generate), which reports `EmptyAreaData`.
    pub fn new(records: Vec<AreaRecord>) -> Self {
        IdCardGenerator {
            index: AreaIndex::from_records(records),
        }
    }

    pub fn index(&self) -> &AreaIndex {
        &self.index
    }

    pub fn generate<R: Rng>(
        &self,
        gender: GenderPref,
        rng: &mut R,
    ) -> Result<GeneratedRecord, IdforgeError> {
        let provinces = self.index.provinces();
        if provinces.is_empty() {
            return Err(IdforgeError::EmptyAreaData);
        }
        let province = &provinces[rng.random_range(0..provinces.len())];

        // Walk down the hierarchy as far as the dataset allows; a missing
        // level truncates the chain there.
        let city = pick(rng, self.index.children_of(&province.code, AreaLevel::City));
        let county =
            city.and_then(|c| pick(rng, self.index.children_of(&c.code, AreaLevel::County)));
        let town =
            county.and_then(|c| pick(rng, self.index.children_of(&c.code, AreaLevel::Town)));

        // First six characters of the deepest resolved code. The town level
        // never contributes to the number, only to the address.
        let deepest_code = county
            .map(|c| c.code.as_str())
            .or(city.map(|c| c.code.as_str()))
            .unwrap_or(province.code.as_str());
        let area_code: String = deepest_code.chars().take(6).collect();

        let birth = dates::random_birthdate(rng, dates::DEFAULT_MIN_AGE, dates::DEFAULT_MAX_AGE);

        let sequence = match gender {
            GenderPref::Any => format!("{:03}", rng.random_range(0..=999)),
            GenderPref::Male => format!(
                "{:02}{}",
                rng.random_range(0..=99),
                ODD_DIGITS[rng.random_range(0..ODD_DIGITS.len())]
            ),
            GenderPref::Female => format!(
                "{:02}{}",
                rng.random_range(0..=99),
                EVEN_DIGITS[rng.random_range(0..EVEN_DIGITS.len())]
            ),
        };

        let body = format!("{}{}{}", area_code, birth.format("%Y%m%d"), sequence);
        let check_char = match checksum::check_char(&body) {
            Some(c) => c,
            // Only reachable when a dataset code is shorter than six digits
            // or contains non-digits.
            None => {
                return Err(IdforgeError::DatasetParse(format!(
                    "area code '{}' does not yield a 17-digit body",
                    area_code
                )))
            }
        };
        let id_card = format!("{}{}", body, check_char);

        let (issue_date, expiry_date) = dates::issuance_window(rng, birth);

        let mut full_address = String::new();
        full_address.push_str(&province.name);
        for part in [&city, &county, &town] {
            if let Some(area) = part {
                full_address.push_str(&area.name);
            }
        }
        let house_number = format!("{}号", rng.random_range(1..=200));
        full_address.push_str(&house_number);

        let authority_seat = county
            .map(|c| c.name.as_str())
            .or(city.map(|c| c.name.as_str()))
            .unwrap_or(province.name.as_str());
        let issuing_authority = format!("{}公安局", authority_seat);

        let nation = if rng.random::<f64>() < 0.92 {
            HAN
        } else {
            MINORITY_NATIONS[rng.random_range(0..MINORITY_NATIONS.len())]
        };

        // Reported gender comes from the drawn parity digit, not the request.
        let parity_digit = sequence.as_bytes()[2] - b'0';
        let gender_label = if parity_digit % 2 == 1 { "男" } else { "女" };

        Ok(GeneratedRecord {
            id_card,
            area_code,
            birthdate: birth.format("%Y-%m-%d").to_string(),
            age: Local::now().year() - birth.year(),
            gender: gender_label.to_string(),
            nation: nation.to_string(),
            province: province.name.clone(),
            city: city.map(|c| c.name.clone()).unwrap_or_default(),
            county: county.map(|c| c.name.clone()).unwrap_or_default(),
            town: town.map(|t| t.name.clone()).unwrap_or_default(),
            house_number,
            full_address,
            issuing_authority,
            issue_date,
            expiry_date,
        })
    }

    /// Checksum validation of an externally supplied number. Shares nothing
    /// with generation besides the checksum itself.
    pub fn validate(&self, number: &str) -> bool {
        checksum::validate(number)
    }
}
