use dom_weft::{Document, Error, NodeKind};

#[test]
fn children_form_an_ordered_list() {
    let doc = Document::parse("<html><body><a><b></b><c></c><d></d></a></body></html>");
    let a = doc.query("a").at(0).unwrap();

    let children = a.children();
    assert_eq!(children.len(), 3);

    let tags: Vec<_> = children.iter().map(|node| node.tag_name()).collect();
    assert_eq!(
        tags,
        vec![
            Some("b".to_string()),
            Some("c".to_string()),
            Some("d".to_string())
        ]
    );
}

#[test]
fn negative_indices_count_from_the_end() {
    let doc = Document::parse("<html><body><a><b></b><c></c><d></d></a></body></html>");
    let children = doc.query("a").at(0).unwrap().children();

    assert_eq!(children.at(-1).unwrap(), children.at(2).unwrap());
    assert_eq!(children.at(-3).unwrap(), children.at(0).unwrap());
    assert_eq!(children.at(-1).unwrap().tag_name(), Some("d".to_string()));

    assert!(children.has(0));
    assert!(children.has(-3));
    assert!(!children.has(3));
    assert!(!children.has(-4));
}

#[test]
fn out_of_bounds_index_is_an_error() {
    let doc = Document::parse("<html><body><a><b></b><c></c><d></d></a></body></html>");
    let children = doc.query("a").at(0).unwrap().children();

    match children.at(3) {
        Err(Error::IndexOutOfBounds { index, len }) => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("expected IndexOutOfBounds, got {other:?}"),
    }

    match children.at(-4) {
        Err(Error::IndexOutOfBounds { index, .. }) => assert_eq!(index, -4),
        other => panic!("expected IndexOutOfBounds, got {other:?}"),
    }
}

#[test]
fn proxy_operations_on_empty_list_signal_emptiness() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let children = doc.query("a").at(0).unwrap().children();
    assert!(children.is_empty());

    // Every proxy operation raises EmptyList naming the method, never a
    // bare out-of-bounds from the representative lookup.
    let err = children.document().unwrap_err();
    assert!(matches!(err, Error::EmptyList { method: "document" }));

    let err = children.content().unwrap_err();
    assert!(err.to_string().contains("content"));

    assert!(matches!(
        children.import("x").unwrap_err(),
        Error::EmptyList { method: "import" }
    ));
    assert!(matches!(
        children.set_content("x").unwrap_err(),
        Error::EmptyList { method: "set_content" }
    ));
    assert!(matches!(
        children.before("x").unwrap_err(),
        Error::EmptyList { method: "before" }
    ));
    assert!(matches!(
        children.append("x").unwrap_err(),
        Error::EmptyList { method: "append" }
    ));
    assert!(matches!(
        children.prepend("x").unwrap_err(),
        Error::EmptyList { method: "prepend" }
    ));
    assert!(matches!(
        children.replace("x").unwrap_err(),
        Error::EmptyList { method: "replace" }
    ));
    assert!(matches!(
        children.after("x").unwrap_err(),
        Error::EmptyList { method: "after" }
    ));
    assert!(matches!(
        children.importable_node().unwrap_err(),
        Error::EmptyList { .. }
    ));
}

#[test]
fn live_view_reflects_later_mutation() {
    let doc = Document::parse("<html><body><a><b></b></a></body></html>");
    let a = doc.query("a").at(0).unwrap();

    let children = a.children();
    assert_eq!(children.len(), 1);

    a.append(doc.create_element("c")).unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children.at(-1).unwrap().tag_name(), Some("c".to_string()));

    children.at(0).unwrap().detach();
    assert_eq!(children.len(), 1);
    assert_eq!(children.at(0).unwrap().tag_name(), Some("c".to_string()));
}

#[test]
fn proxy_reads_use_the_first_node() {
    let doc = Document::parse("<html><body><a>first</a><b>second</b></body></html>");
    let selection = doc.query("a, b");
    assert_eq!(selection.len(), 2);

    assert_eq!(selection.content().unwrap(), Some("first".to_string()));
    assert_eq!(selection.document().unwrap(), doc);
}

#[test]
fn before_acts_on_the_head_and_after_on_the_tail() {
    let doc = Document::parse("<html><body><a></a><b></b></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let selection = body.children();

    selection.before(doc.create_element("i")).unwrap();
    selection.after(doc.create_element("u")).unwrap();

    assert_eq!(
        body.raw_content().as_ref(),
        "<i></i><a></a><b></b><u></u>"
    );
}

#[test]
fn importable_node_clones_the_whole_selection() {
    let doc = Document::parse(
        "<html><body><a><b>1</b><c>2</c></a><target></target></body></html>",
    );
    let a = doc.query("a").at(0).unwrap();

    let fragment = a.children().importable_node().unwrap();
    assert_eq!(fragment.kind(), NodeKind::Fragment);
    assert!(fragment.parent().is_none());
    assert_eq!(fragment.children().len(), 2);

    // The originals stay put; the fragment holds clones.
    assert_eq!(a.children().len(), 2);

    let target = doc.query("target").at(0).unwrap();
    target.append(&fragment).unwrap();
    assert_eq!(target.raw_content().as_ref(), "<b>1</b><c>2</c>");
    assert_eq!(a.raw_content().as_ref(), "<b>1</b><c>2</c>");
}

#[test]
fn iteration_yields_nodes_in_document_order() {
    let doc = Document::parse("<html><body><a><b></b><c></c><d></d></a></body></html>");
    let children = doc.query("a").at(0).unwrap().children();

    let mut seen = Vec::new();
    for node in &children {
        if let Some(tag) = node.tag_name() {
            seen.push(tag);
        }
    }
    assert_eq!(seen, vec!["b", "c", "d"]);
}
