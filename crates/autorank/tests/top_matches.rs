mod common;

use autorank_core::{Index, MalformedPolicy, QueryEngine};
use common::{sample_index, write_sample_csv};

#[test]
fn test_documented_queries() {
    let index = sample_index();
    let engine = QueryEngine::new(&index);

    let cases: [(&str, usize, &[&str]); 7] = [
        ("sal", 4, &["May_Sales", "Sales", "Salary_Net", "Sep_Salary"]),
        ("Sales", 3, &["May_Sales", "Sales", "May_Sales"]),
        ("REVENUE", 3, &["Aug_Sep_Revenue_Net", "Revenue", "May_Revenue"]),
        ("rev", 2, &["Aug_Sep_Revenue_Net", "Revenue"]),
        ("s", 4, &["May_Sales", "Sales", "Salary_Net", "Sep_Salary"]),
        ("xyz", 2, &[]),
        ("", 3, &["May_Sales", "Sales", "Salary_Net"]),
    ];

    for (prefix, k, expected) in cases {
        assert_eq!(
            engine.top_matches(prefix, k),
            expected,
            "prefix {:?} k {}",
            prefix,
            k
        );
    }
}

#[test]
fn test_same_name_different_scores_both_survive() {
    let index = sample_index();
    let engine = QueryEngine::new(&index);

    let scores: Vec<u64> = engine
        .top_records("may_sales", 10)
        .iter()
        .filter(|r| r.name == "May_Sales")
        .map(|r| r.score)
        .collect();
    assert!(scores.is_empty(), "underscore is not part of any token");

    let scores: Vec<u64> = engine
        .top_records("may", 10)
        .iter()
        .filter(|r| r.name == "May_Sales")
        .map(|r| r.score)
        .collect();
    assert_eq!(scores, vec![300, 90]);
}

#[test]
fn test_queries_against_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_sample_csv(dir.path());

    let (index, report) = Index::open(&csv, MalformedPolicy::Abort).unwrap();
    assert_eq!(report.records, 12);

    let engine = QueryEngine::new(&index);
    assert_eq!(
        engine.top_matches("sal", 4),
        vec!["May_Sales", "Sales", "Salary_Net", "Sep_Salary"]
    );
}

#[test]
fn test_independent_indices_side_by_side() {
    let full = sample_index();
    let small = Index::build_from_records([autorank_core::Record::new("Sales_Tax", 999)]);

    assert_eq!(QueryEngine::new(&small).top_matches("sal", 1), vec!["Sales_Tax"]);
    assert_eq!(QueryEngine::new(&full).top_matches("sal", 1), vec!["May_Sales"]);
}

#[test]
fn test_concurrent_readers() {
    let index = sample_index();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["sal", "rev", "net", ""]
            .into_iter()
            .map(|prefix| {
                let index = &index;
                scope.spawn(move || QueryEngine::new(index).top_matches(prefix, 3))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().len() <= 3);
        }
    });
}
