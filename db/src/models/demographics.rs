use crate::db::Db;
use crate::models::users::User;
use crate::utils::errors::DatabaseError;
use serde::Serialize;
use std::collections::HashMap;

const UNSPECIFIED: &str = "Unspecified";

const AGE_RANGES: [&str; 8] = ["<18", "18-24", "25-34", "35-44", "45-54", "55-64", "65+", UNSPECIFIED];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BucketCount {
    pub label: String,
    pub count: u32,
    pub percentage: f64,
}

/// Dashboard widget aggregation over the full user directory (not just
/// purchasers). Pure read-side: percentages are of the total user count and
/// sum to ~100 modulo rounding.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Demographics {
    pub age: Vec<BucketCount>,
    pub gender: Vec<BucketCount>,
    pub domicile: Vec<BucketCount>,
}

impl Demographics {
    pub fn report(conn: &Db) -> Result<Demographics, DatabaseError> {
        let users = User::all(conn)?;
        Ok(Demographics {
            age: bucket_counts(&users, |u| age_range(u.age).to_string(), Some(&AGE_RANGES)),
            gender: bucket_counts(&users, |u| label_or_unspecified(&u.gender), None),
            domicile: bucket_counts(&users, |u| label_or_unspecified(&u.domicile), None),
        })
    }
}

fn age_range(age: Option<i32>) -> &'static str {
    match age {
        None => UNSPECIFIED,
        Some(a) if a < 18 => "<18",
        Some(a) if a <= 24 => "18-24",
        Some(a) if a <= 34 => "25-34",
        Some(a) if a <= 44 => "35-44",
        Some(a) if a <= 54 => "45-54",
        Some(a) if a <= 64 => "55-64",
        Some(_) => "65+",
    }
}

fn label_or_unspecified(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => UNSPECIFIED.to_string(),
    }
}

fn bucket_counts<F>(users: &[User], label_for: F, fixed_order: Option<&[&str]>) -> Vec<BucketCount>
where
    F: Fn(&User) -> String,
{
    let mut counts: HashMap<String, u32> = HashMap::new();
    for user in users {
        *counts.entry(label_for(user)).or_insert(0) += 1;
    }

    let total = users.len() as f64;
    let mut labels: Vec<String> = match fixed_order {
        Some(order) => order
            .iter()
            .filter(|l| counts.contains_key(**l))
            .map(|l| l.to_string())
            .collect(),
        None => {
            let mut labels: Vec<String> = counts.keys().cloned().collect();
            labels.sort();
            labels
        }
    };

    labels
        .drain(..)
        .map(|label| {
            let count = counts[&label];
            BucketCount {
                label,
                count,
                percentage: round_percentage(count as f64 * 100.0 / total),
            }
        })
        .collect()
}

fn round_percentage(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
