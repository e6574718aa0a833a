// tests/client_table.rs
//
// Extraction against parsed HTML, end to end through HtmlDocument.
//
use client_ids::{
    ClientRecord, ExtractError, ExtractOptions, HtmlDocument, extract_clients, extract_from_html,
    index_by_name,
};

const FIXTURE: &str = include_str!("fixtures/clients.html");

fn rec(id: &str, name: &str) -> ClientRecord {
    ClientRecord { id: id.into(), name: name.into() }
}

fn fixture_doc() -> HtmlDocument {
    HtmlDocument::parse(FIXTURE, &ExtractOptions::default()).unwrap()
}

#[test]
fn two_row_scenario() {
    let html = r#"
        <table>
          <tr data-id="1"><td class="column-name">Acme Corp</td></tr>
          <tr data-id="2"><td class="column-name">Initech</td></tr>
        </table>
    "#;
    let got = extract_from_html(html, r#"["Acme Corp"]"#, &ExtractOptions::default()).unwrap();
    assert_eq!(got, vec![rec("1", "Acme Corp")]);
}

#[test]
fn empty_request_on_full_page() {
    let got = extract_clients(&fixture_doc(), "[]").unwrap();
    assert!(got.is_empty());
}

#[test]
fn page_order_and_duplicates() {
    let got = extract_clients(&fixture_doc(), r#"["Umbrella","Acme Corp","Initech"]"#).unwrap();
    assert_eq!(
        got,
        vec![
            rec("4411", "Acme Corp"),
            rec("4412", "Initech"),
            rec("4415", "Umbrella"),
            rec("4416", "Acme Corp"),
        ]
    );
}

#[test]
fn header_row_is_not_a_client() {
    // The <th class="column-name">Name</th> row has no data-id.
    let got = extract_clients(&fixture_doc(), r#"["Name"]"#).unwrap();
    assert!(got.is_empty());
}

#[test]
fn entities_are_decoded_before_matching() {
    let got = extract_clients(&fixture_doc(), r#"["Globex & Sons"]"#).unwrap();
    assert_eq!(got, vec![rec("4414", "Globex & Sons")]);

    let got = extract_clients(&fixture_doc(), r#"["Globex &amp; Sons"]"#).unwrap();
    assert!(got.is_empty());
}

#[test]
fn nameless_row_only_matches_placeholder() {
    let got = extract_clients(&fixture_doc(), r#"["Vendor"]"#).unwrap();
    assert!(got.is_empty());

    let got = extract_clients(&fixture_doc(), r#"["N/A"]"#).unwrap();
    assert_eq!(got, vec![rec("4413", "N/A")]);
}

#[test]
fn malformed_names_fail_before_parsing_page() {
    let mut opts = ExtractOptions::default();
    // Would fail to compile if the page were touched first.
    opts.row_selector = "tr[[".into();
    let err = extract_from_html(FIXTURE, "not json", &opts).unwrap_err();
    assert!(matches!(err, ExtractError::Names(_)));
}

#[test]
fn no_rows_is_not_an_error() {
    let got = extract_from_html("<p>nothing here</p>", r#"["Acme Corp"]"#, &ExtractOptions::default())
        .unwrap();
    assert!(got.is_empty());
}

#[test]
fn whitespace_in_name_cell_is_significant() {
    let html = r#"
        <table>
          <tr data-id="1"><td class="column-name">
            Acme Corp
          </td></tr>
        </table>
    "#;
    let got = extract_from_html(html, r#"["Acme Corp"]"#, &ExtractOptions::default()).unwrap();
    assert!(got.is_empty());
}

#[test]
fn repeated_extraction_is_stable() {
    let doc = fixture_doc();
    let a = extract_clients(&doc, r#"["Acme Corp","Initech"]"#).unwrap();
    let b = extract_clients(&doc, r#"["Acme Corp","Initech"]"#).unwrap();
    assert_eq!(a, b);
}

#[test]
fn index_keeps_last_acme() {
    let got = extract_clients(&fixture_doc(), r#"["Acme Corp","Initech"]"#).unwrap();
    let index = index_by_name(got);
    assert_eq!(index.get("Acme Corp").map(String::as_str), Some("4416"));
    assert_eq!(index.get("Initech").map(String::as_str), Some("4412"));
}

#[test]
fn custom_layout() {
    let html = r#"
        <ul>
          <li data-client="a1"><span class="label">Acme Corp</span></li>
          <li data-client="b2"><span class="label">Initech</span></li>
        </ul>
    "#;
    let mut opts = ExtractOptions::default();
    opts.row_selector = "li[data-client]".into();
    opts.id_attr = "data-client".into();
    opts.name_selector = "span.label".into();

    let got = extract_from_html(html, r#"["Initech"]"#, &opts).unwrap();
    assert_eq!(got, vec![rec("b2", "Initech")]);
}
