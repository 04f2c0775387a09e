use pretty_assertions::assert_eq;
use translit_core::{
    layout::parse_table_json, standard_end_points, Converter, Direction, Error, LayoutError,
    LayoutFile, Mode,
};

const LAYOUTS_DATA: &str = r#"
# sample layout data file
ru.description=Russian translit
ru.case_sensitive=false
ru.layout=[["sh","ш"],["s","с"],["h","х"],["a","а"],["'","ь",true]]

uk.description=Armenian translit
uk.case_sensitive=true
uk.layout=[["a","ա"]]
"#;

#[test]
fn test_load_layout_from_file() {
    let file = LayoutFile::parse(LAYOUTS_DATA);
    let layout = file.layout("ru").unwrap();

    assert_eq!(layout.name, "ru");
    assert_eq!(layout.description, "Russian translit");
    assert!(!layout.case_sensitive);
    assert_eq!(layout.table.len(), 5);
    assert!(layout.table[4].special_case);

    let converter = Converter::new(&layout, Direction::Forward);
    assert_eq!(converter.convert_plain("sha"), "ша");
}

#[test]
fn test_list_is_sorted_by_description() {
    let file = LayoutFile::parse(LAYOUTS_DATA);
    let list = file.list();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "uk");
    assert_eq!(list[0].description, "Armenian translit");
    assert_eq!(list[1].name, "ru");
}

#[test]
fn test_missing_layout_and_keys() {
    let file = LayoutFile::parse(LAYOUTS_DATA);
    assert!(matches!(file.layout("xx"), Err(LayoutError::NotFound(_))));

    let partial = LayoutFile::parse("p.description=Partial\np.layout=[]\n");
    assert!(matches!(
        partial.layout("p"),
        Err(LayoutError::MissingKey { key: "case_sensitive", .. })
    ));
}

#[test]
fn test_bad_case_flag() {
    let file = LayoutFile::parse(
        "x.description=X\nx.case_sensitive=yes\nx.layout=[]\n",
    );
    assert!(matches!(file.layout("x"), Err(LayoutError::BadCaseFlag { .. })));
}

#[test]
fn test_malformed_table_fails_whole_load() {
    // one bad row poisons the entire table, no partial result
    assert!(matches!(
        parse_table_json(r#"[["a","б"],["c"]]"#),
        Err(LayoutError::InvalidEntry { index: 1, .. })
    ));
    assert!(matches!(
        parse_table_json(r#"[["a","б",“x”]]"#),
        Err(LayoutError::BadTableJson(_))
    ));
    assert!(matches!(
        parse_table_json(r#"[["a","б","x"]]"#),
        Err(LayoutError::InvalidEntry { index: 0, .. })
    ));
}

#[test]
fn test_layout_error_converts_to_crate_error() {
    let file = LayoutFile::parse("");
    let err: Error = file.layout("nope").unwrap_err().into();
    assert!(matches!(err, Error::Layout(LayoutError::NotFound(_))));
}

#[test]
fn test_duplicate_rows_keep_first_definition() {
    let table = parse_table_json(r#"[["a","ф"],["A","х"]]"#).unwrap();
    let converter = Converter::from_table(&table, false, Direction::Forward);
    assert_eq!(converter.convert_plain("aA"), "фФ");
}

#[test]
fn test_standard_end_points() {
    let file = LayoutFile::parse(LAYOUTS_DATA);
    let layout = file.layout("ru").unwrap();
    let end_points = standard_end_points(&layout);

    let commands: Vec<&str> = end_points.iter().map(|e| e.command_key.as_str()).collect();
    assert_eq!(
        commands,
        vec!["cmd_fromtranslit", "cmd_totranslit", "cmd_togglemode", "cmd_togglemodeall"]
    );
    assert_eq!(end_points[0].mode, Mode::Batch);
    assert_eq!(end_points[2].mode, Mode::Map);
    assert_eq!(end_points[3].mode, Mode::MapAll);

    // batch-forward and the toggles share one converter instance
    assert!(std::sync::Arc::ptr_eq(
        &end_points[0].converter,
        &end_points[2].converter
    ));
    assert_eq!(end_points[0].converter.convert_plain("sha"), "ша");
    assert_eq!(end_points[1].converter.convert_plain("ша"), "sha");
}
