#![allow(dead_code)]

use autorank_core::{Index, Record};
use std::path::{Path, PathBuf};

pub fn sample_records() -> Vec<Record> {
    vec![
        Record::new("June_Sales", 80),
        Record::new("Sales", 250),
        Record::new("June_Revenue", 30),
        Record::new("Sep_Salary", 120),
        Record::new("Revenue", 100),
        Record::new("April_Sales", 50),
        Record::new("April_Revenue", 60),
        Record::new("Salary_Net", 200),
        Record::new("May_Revenue", 70),
        Record::new("Aug_Sep_Revenue_Net", 110),
        Record::new("May_Sales", 90),
        Record::new("May_Sales", 300),
    ]
}

pub fn sample_index() -> Index {
    Index::build_from_records(sample_records())
}

/// Write the sample records as `name,score` lines
pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("data.csv");
    let body: String = sample_records()
        .iter()
        .map(|r| format!("{}\n", r))
        .collect();
    std::fs::write(&path, body).unwrap();
    path
}
