use insta::assert_snapshot;

use groupbal::core::{Category, partition};
use groupbal::error::GbError;
use groupbal::input::TableOptions;
use groupbal::input::table::parse_table;

fn table_error(text: &str) -> GbError {
    parse_table(text, TableOptions::default()).unwrap_err()
}

#[test]
fn test_error_zero_groups() {
    let err = partition(&[Category::new("A").with_item("a1", 1)], 0).unwrap_err();
    assert_snapshot!(err.to_string(), @"Invalid input: group count must be at least 1");
}

#[test]
fn test_error_empty_category() {
    let categories = vec![Category::new("A").with_item("a1", 1), Category::new("B")];
    let err = partition(&categories, 2).unwrap_err();
    assert_snapshot!(err.to_string(), @"Invalid input: category 'B' has no items");
}

#[test]
fn test_error_duplicate_category() {
    let categories = vec![
        Category::new("A").with_item("a1", 1),
        Category::new("A").with_item("a2", 2),
    ];
    let err = partition(&categories, 2).unwrap_err();
    assert_snapshot!(err.to_string(), @"Invalid input: duplicate category 'A'");
}

#[test]
fn test_error_bad_weight() {
    let err = table_error("A,\nBlock,Q\na1,10\na2,ten\n");
    assert_snapshot!(
        err.to_string(),
        @"Table error on line 4: weight 'ten' of item 'a2' is not a non-negative integer"
    );
}

#[test]
fn test_error_stray_pair() {
    let err = table_error("A,\nBlock,Q\na1,1,x1,2\n");
    assert_snapshot!(
        err.to_string(),
        @"Table error on line 3: item 'x1' sits in column pair 2 but only 1 categories are named"
    );
}

#[test]
fn test_structured_error_message() {
    let err = table_error("A,\nBlock,Q\na1,-4\n");
    let structured = err.to_structured();
    assert_snapshot!(
        structured.message,
        @"Table error on line 3: weight '-4' of item 'a1' is not a non-negative integer"
    );
    assert_snapshot!(
        structured.suggestion,
        @"Fix line 3 of the table. Weights must be non-negative integers and every (item, weight) pair must sit under a category column"
    );
}
