use dom_weft::{Document, Error};

#[test]
fn duplicate_produces_adjacent_clones() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    let results = a.duplicate(3).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(body.raw_content().as_ref(), "<a></a><a></a><a></a>");
    // Document order under the parent matches the produced order, with the
    // original at the head.
    assert_eq!(results.at(0).unwrap(), a);
    assert_eq!(results.nodes(), body.children().nodes());
}

#[test]
fn duplicate_once_is_a_no_op() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    let results = a.duplicate(1).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results.at(0).unwrap(), a);
    assert_eq!(body.children().len(), 1);
    assert_eq!(body.raw_content().as_ref(), "<a></a>");
}

#[test]
fn duplicate_zero_is_invalid() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let a = doc.query("a").at(0).unwrap();

    assert!(matches!(
        a.duplicate(0).unwrap_err(),
        Error::InvalidDuplicateCount
    ));
}

#[test]
fn duplicate_keeps_the_original_position_among_siblings() {
    let doc = Document::parse("<html><body><i></i><a></a><u></u></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    a.duplicate(2).unwrap();

    assert_eq!(
        body.raw_content().as_ref(),
        "<i></i><a></a><a></a><u></u>"
    );
}

#[test]
fn duplicate_copies_the_whole_subtree() {
    let doc = Document::parse(r#"<html><body><a id="x"><b>inner</b></a></body></html>"#);
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    a.duplicate(2).unwrap();

    assert_eq!(
        body.raw_content().as_ref(),
        r#"<a id="x"><b>inner</b></a><a id="x"><b>inner</b></a>"#
    );
}

#[test]
fn duplicate_of_a_detached_node_stays_detached() {
    let doc = Document::parse("<html><body></body></html>");
    let detached = doc.create_element("a");

    let results = detached.duplicate(3).unwrap();

    assert_eq!(results.len(), 3);
    for node in &results {
        assert!(node.parent().is_none());
    }
    // Nothing leaked into the document.
    assert_eq!(doc.query("a").len(), 0);
}

#[test]
fn repeat_fills_each_copy_from_its_item() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    let results = a.repeat([1, 2, 3]).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(body.raw_content().as_ref(), "<a>1</a><a>2</a><a>3</a>");
}

#[test]
fn repeat_with_invokes_the_callback_per_pair() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    let results = a
        .repeat_with([1, 2, 3], |node, item| {
            node.set_content(item * 2)?;
            Ok(())
        })
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(body.raw_content().as_ref(), "<a>2</a><a>4</a><a>6</a>");
}

#[test]
fn repeat_over_an_empty_sequence_touches_nothing() {
    let doc = Document::parse("<html><body><a>keep</a></body></html>");
    let body = doc.query("body").at(0).unwrap();
    let a = doc.query("a").at(0).unwrap();

    let results = a.repeat(Vec::<i32>::new()).unwrap();

    assert_eq!(results.len(), 0);
    assert_eq!(body.raw_content().as_ref(), "<a>keep</a>");
}

#[test]
fn repeat_pairs_items_positionally() {
    let doc = Document::parse("<html><body><a></a></body></html>");
    let a = doc.query("a").at(0).unwrap();

    let results = a.repeat(["alpha", "beta", "gamma"]).unwrap();

    let contents: Vec<_> = results.iter().map(|node| node.content()).collect();
    assert_eq!(
        contents,
        vec![
            Some("alpha".to_string()),
            Some("beta".to_string()),
            Some("gamma".to_string())
        ]
    );
}
