// tests/filter_integration_tests.rs
use anyhow::Result;
use serde_json::json;
use wordscrub::{BadWordFilter, FilterConfig};

fn default_filter() -> Result<BadWordFilter> {
    BadWordFilter::with_defaults()
}

fn filter_also_checking(extra: Vec<&str>) -> Result<BadWordFilter> {
    BadWordFilter::new(FilterConfig::default().with_also_check(extra))
}

/// Cleaning an html-wrapped string must leave the markup alone.
#[test]
fn html_wrapper_is_preserved() -> Result<()> {
    let filter = filter_also_checking(vec!["bad word"])?;
    assert_eq!(
        filter.clean("<h3>bad word</h3>some text"),
        "<h3>b******d</h3>some text"
    );
    Ok(())
}

#[test]
fn bad_words_are_cleaned_with_default_mask() -> Result<()> {
    let filter = default_filter()?;
    assert_eq!(filter.clean("shit"), "s**t");
    assert_eq!(filter.clean("fuck"), "f**k");
    assert_eq!(filter.clean("dickhead"), "d******d");
    assert_eq!(filter.clean("ass"), "a**");
    Ok(())
}

#[test]
fn custom_replacement_is_preferred_over_asterisks() -> Result<()> {
    let filter = filter_also_checking(vec!["replace me"])?;
    let replace_with = "#!<>*&";
    assert_eq!(filter.clean_with("replace me", replace_with), replace_with);
    Ok(())
}

/// Words touching special characters are treated the same as words
/// surrounded by spaces.
#[test]
fn special_characters_are_ignored() -> Result<()> {
    let filter = filter_also_checking(vec!["replace me"])?;
    assert_eq!(filter.clean("#replace me"), "#r********e");
    assert_eq!(filter.clean("^replace me"), "^r********e");
    assert_eq!(filter.clean("%replace me"), "%r********e");
    assert_eq!(filter.clean("$replace me"), "$r********e");
    assert_eq!(filter.clean("@replace me"), "@r********e");
    assert_eq!(filter.clean("!replace me"), "!r********e");
    assert_eq!(filter.clean("replace me!"), "r********e!");
    assert_eq!(filter.clean("(replace me)"), "(r********e)");
    assert_eq!(filter.clean("<replace me>"), "<r********e>");
    Ok(())
}

/// Tokens that merely contain a bad word must not match.
#[test]
fn partial_matches_dont_get_cleaned() -> Result<()> {
    let filter = default_filter()?;
    let text = "I am an ASSociative professor";
    assert_eq!(filter.clean(text), text);
    Ok(())
}

#[test]
fn is_dirty_finds_dirty_string() -> Result<()> {
    let filter = default_filter()?;
    assert!(!filter.is_dirty("my very clean string"));
    assert!(filter.is_dirty("my very fucking dirty string"));
    Ok(())
}

#[test]
fn can_get_list_of_dirty_words_from_string() -> Result<()> {
    let filter = default_filter()?;
    assert_eq!(
        filter.dirty_words("my very fucking dirty string"),
        vec!["fucking"]
    );
    assert_eq!(
        filter.dirty_words("my very fucking shitty dirty string"),
        vec!["fucking", "shitty"]
    );
    Ok(())
}

#[test]
fn dirty_words_preserve_input_case() -> Result<()> {
    let filter = default_filter()?;
    assert_eq!(filter.dirty_words("utterly FUCKING dirty"), vec!["FUCKING"]);
    Ok(())
}

#[test]
fn can_get_list_of_dirty_keys_from_structure() -> Result<()> {
    let filter = default_filter()?;
    let value = json!({
        "0": "this is a clean string",
        "1": "this shit is dirty",
        "2": "fuck yo couch",
        "3": "actually that is a nice couch!",
        "filth": "another shitty string",
    });
    assert_eq!(filter.dirty_keys(&value), vec!["1", "2", "filth"]);
    Ok(())
}

#[test]
fn nested_structures_report_dotted_paths() -> Result<()> {
    let filter = default_filter()?;
    let value = json!({
        "post": {
            "title": "a fine title",
            "comments": ["nice one", "what a shitty take"],
        },
    });
    assert_eq!(filter.dirty_keys(&value), vec!["post.comments.1"]);
    assert!(filter.is_dirty_value(&value));
    Ok(())
}

#[test]
fn cleaning_a_structure_preserves_shape() -> Result<()> {
    let filter = default_filter()?;
    let value = json!({
        "title": "a fine title",
        "count": 3,
        "flags": [true, null],
        "body": "a fucking rant",
    });
    let cleaned = filter.scrub_value(&value);
    assert_eq!(
        cleaned,
        json!({
            "title": "a fine title",
            "count": 3,
            "flags": [true, null],
            "body": "a f*****g rant",
        })
    );
    Ok(())
}

#[test]
fn cleaning_a_structure_with_custom_replacement() -> Result<()> {
    let filter = default_filter()?;
    let value = json!(["fuck yo couch", "a nice couch"]);
    assert_eq!(
        filter.scrub_value_with(&value, "[redacted]"),
        json!(["[redacted] yo couch", "a nice couch"])
    );
    Ok(())
}

#[test]
fn clean_is_idempotent() -> Result<()> {
    let filter = default_filter()?;
    let once = filter.clean("a fucking shitty day");
    assert_eq!(filter.clean(&once), once);
    Ok(())
}

#[test]
fn empty_inputs_are_clean() -> Result<()> {
    let filter = default_filter()?;
    assert!(!filter.is_dirty(""));
    assert!(!filter.is_dirty_value(&json!({})));
    assert!(!filter.is_dirty_value(&json!([])));
    assert!(filter.dirty_keys(&json!({})).is_empty());
    Ok(())
}

#[test]
fn scrub_and_clean_are_aliases() -> Result<()> {
    let filter = default_filter()?;
    assert_eq!(filter.scrub("shit"), filter.clean("shit"));
    Ok(())
}
