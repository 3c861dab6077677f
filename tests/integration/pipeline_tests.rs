use groupbal::core::{BalanceMode, Group, PartitionOptions, partition, partition_with};
use groupbal::input::{InputFormat, TableOptions, load_categories};
use groupbal::test_utils::fixtures::{SITE_TABLE, SMALL_TABLE, UnitTestFixture};
use groupbal::test_utils::logging::TestLogger;

fn sums(groups: &[Group]) -> Vec<u64> {
    groups.iter().map(Group::sum).collect()
}

fn names(group: &Group) -> Vec<&str> {
    group.items().iter().map(|item| item.name()).collect()
}

#[test]
fn site_table_four_groups() {
    let log = TestLogger::new("site_table_four_groups");
    let fixture = UnitTestFixture::new();
    let path = fixture.create_table("site", SITE_TABLE);

    let categories = load_categories(&path, None, TableOptions::default()).unwrap();
    log.log_input("categories", &categories);

    let raw = partition_with(&categories, 4, PartitionOptions::unbalanced()).unwrap();
    log.log_groups("after allocation", raw.groups());
    assert_eq!(sums(raw.groups()), vec![265, 270, 235, 320]);

    let balanced = partition(&categories, 4).unwrap();
    log.log_groups("after balancing", balanced.groups());
    log.log_expected(&vec![265, 290, 265, 270]);
    log.log_actual(&sums(balanced.groups()));

    assert_eq!(sums(balanced.groups()), vec![265, 290, 265, 270]);
    assert_eq!(names(&balanced.groups()[3]), vec!["n1", "e2"]);
    assert_eq!(balanced.swap_count(), 4);
    assert_eq!(balanced.balance_report().unwrap().sweeps, 1);
    assert_eq!(balanced.spread(), 25);

    // One pass already settles this input; a repeated pass finds nothing.
    let options = PartitionOptions {
        mode: BalanceMode::UntilStable,
        ..PartitionOptions::default()
    };
    let stable = partition_with(&categories, 4, options).unwrap();
    assert_eq!(stable.groups(), balanced.groups());
    assert_eq!(stable.swap_count(), 4);
    assert_eq!(stable.balance_report().unwrap().sweeps, 2);
    log.pass();
}

#[test]
fn site_table_fewer_groups_need_no_swaps() {
    let log = TestLogger::new("site_table_fewer_groups_need_no_swaps");
    let categories =
        groupbal::input::table::parse_table(SITE_TABLE, TableOptions::default()).unwrap();

    for (k, expected) in [(2, vec![550, 540]), (3, vec![350, 355, 385])] {
        let result = partition(&categories, k).unwrap();
        log.log_groups(&format!("k = {k}"), result.groups());
        assert_eq!(sums(result.groups()), expected);
        assert_eq!(result.swap_count(), 0);
    }
    log.pass();
}

#[test]
fn table_and_documents_agree() {
    let log = TestLogger::new("table_and_documents_agree");
    let fixture = UnitTestFixture::new();
    let table = fixture.create_table("small", SMALL_TABLE);
    let json = fixture.create_file(
        "small.json",
        r#"{"categories": [
            {"name": "A", "items": [{"name": "a1", "weight": 10}, {"name": "a2", "weight": 4}]},
            {"name": "B", "items": [{"name": "b1", "weight": 6}]}
        ]}"#,
    );
    let yaml = fixture.create_file(
        "small.yml",
        "categories:\n  - name: A\n    items:\n      - { name: a1, weight: 10 }\n      - { name: a2, weight: 4 }\n  - name: B\n    items:\n      - { name: b1, weight: 6 }\n",
    );

    let options = TableOptions::default();
    let from_table = load_categories(&table, None, options).unwrap();
    let from_json = load_categories(&json, None, options).unwrap();
    let from_yaml = load_categories(&yaml, Some(InputFormat::Yaml), options).unwrap();

    assert_eq!(from_table, from_json);
    assert_eq!(from_table, from_yaml);
    log.pass();
}

#[test]
fn semicolon_table_with_single_header_row() {
    let fixture = UnitTestFixture::new();
    let path = fixture.create_table("semi", "A;;B;\na1;10;b1;6\na2;4;;\n");
    let options = TableOptions {
        delimiter: b';',
        header_rows: 1,
    };

    let categories = load_categories(&path, None, options).unwrap();
    let result = partition(&categories, 2).unwrap();
    assert_eq!(sums(result.groups()), vec![10, 10]);
    assert_eq!(names(&result.groups()[0]), vec!["b1", "a2"]);
}
