use super::*;

#[test]
fn binding_group_preserves_insertion_order() {
    let mut group = BindingGroup::new();
    group.add("load", "fn1");
    group.add_bool("progressElement", true);
    group.add("loadingItems", "LoadingItems");

    let keys: Vec<&str> = group.entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec!["load", "progressElement", "loadingItems"]);
    assert_eq!(
        group.to_descriptor(),
        "{ load: fn1, progressElement: true, loadingItems: LoadingItems }"
    );
}

#[test]
fn empty_group_renders_empty_literal() {
    let group = BindingGroup::new();
    assert!(group.is_empty());
    assert_eq!(group.to_descriptor(), "{ }");
}

#[test]
fn get_returns_entry_by_key() {
    let mut group = BindingGroup::new();
    group.add_bool("progressElement", true);
    assert_eq!(group.get("progressElement"), Some("true"));
    assert_eq!(group.get("loadingItems"), None);
}

#[test]
fn postback_function_issues_one_deferred_call_with_forwarded_args() {
    let script = postback_function(&CommandBinding::new("orders:load"));

    assert_eq!(
        script,
        "(function(){var ar=[].slice.call(arguments);\
         return window.setTimeout(function(){return lzp.postback(\"orders:load\",$element,ar);},0);})"
    );
    // Exactly one postback call in the generated body.
    assert_eq!(script.matches("lzp.postback(").count(), 1);
    assert!(script.contains("window.setTimeout"));
    assert!(script.contains("[].slice.call(arguments)"));
}

#[test]
fn postback_function_quotes_hostile_command_names() {
    let script = postback_function(&CommandBinding::new("x\");alert(1);//"));
    assert!(script.contains("lzp.postback(\"x\\\");alert(1);//\""));
}

#[test]
fn js_string_escapes_quotes_and_backslashes() {
    assert_eq!(js_string("plain"), "\"plain\"");
    assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
    assert_eq!(js_string("a\\b"), "\"a\\\\b\"");
}
