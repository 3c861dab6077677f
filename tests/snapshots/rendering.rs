use insta::assert_snapshot;

use groupbal::cli::formatters::{GroupListing, render_summary};
use groupbal::core::{InputSummary, PartitionReport, partition};
use groupbal::input::TableOptions;
use groupbal::input::table::parse_table;
use groupbal::test_utils::fixtures::{SITE_TABLE, SMALL_TABLE};

/// Plain listing with the tab runs made visible.
fn listing(table: &str, k: usize, show_swaps: bool) -> String {
    console::set_colors_enabled(false);
    let categories = parse_table(table, TableOptions::default()).unwrap();
    let report = PartitionReport::new(&partition(&categories, k).unwrap(), show_swaps);
    GroupListing::new(&report, "m³/h", "l/h")
        .with_swaps(show_swaps)
        .render(false)
        .replace(" \t\t", " | ")
}

#[test]
fn test_small_table_listing() {
    assert_snapshot!(listing(SMALL_TABLE, 2, false), @r"
    ================= group: 1 - Q: 10 m³/h =================
    Block: b1 | Antenna: B | Q: 6 l/h
    Block: a2 | Antenna: A | Q: 4 l/h

    ================= group: 2 - Q: 10 m³/h =================
    Block: a1 | Antenna: A | Q: 10 l/h

    Summary
    -------
    Groups       2
    Total        20 m³/h
    Spread       0 m³/h
    Swaps        0
    ");
}

#[test]
fn test_site_table_listing_with_swaps() {
    assert_snapshot!(listing(SITE_TABLE, 4, true), @r"
    ================= group: 1 - Q: 265 m³/h =================
    Block: s3 | Antenna: South | Q: 90 l/h
    Block: n3 | Antenna: North | Q: 45 l/h
    Block: e5 | Antenna: East | Q: 95 l/h
    Block: e3 | Antenna: East | Q: 35 l/h

    ================= group: 2 - Q: 290 m³/h =================
    Block: s1 | Antenna: South | Q: 60 l/h
    Block: n4 | Antenna: North | Q: 30 l/h
    Block: e1 | Antenna: East | Q: 200 l/h

    ================= group: 3 - Q: 265 m³/h =================
    Block: s2 | Antenna: South | Q: 75 l/h
    Block: n2 | Antenna: North | Q: 80 l/h
    Block: e4 | Antenna: East | Q: 110 l/h

    ================= group: 4 - Q: 270 m³/h =================
    Block: n1 | Antenna: North | Q: 120 l/h
    Block: e2 | Antenna: East | Q: 150 l/h

    Swaps
    -----
    - [East] e4 (group 1) <-> e5 (group 3): gap 30 -> 0
    - [North] n4 (group 1) <-> n3 (group 2): gap 20 -> 10
    - [East] e2 (group 2) <-> e1 (group 4): gap 65 -> 35
    - [South] s2 (group 2) <-> s1 (group 3): gap 55 -> 25

    Summary
    -------
    Groups       4
    Total        1090 m³/h
    Spread       25 m³/h
    Swaps        4
    ");
}

#[test]
fn test_input_summary() {
    console::set_colors_enabled(false);
    let categories = parse_table(SITE_TABLE, TableOptions::default()).unwrap();
    let text = render_summary(&InputSummary::new(&categories, 4), "m³/h");
    assert_snapshot!(text, @r"
    Input OK

    Groups       4
    Categories   3
    Items        12
    Total        1090 m³/h
    Per group    272.50 m³/h

    Categories
    ----------
    - North: 4 items, 275 m³/h
    - South: 3 items, 225 m³/h
    - East: 5 items, 590 m³/h
    ");
}
