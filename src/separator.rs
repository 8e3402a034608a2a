use ahash::AHashSet;
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

// Lazy so that we don't have to compile it more than once
// Matches opening tags such as `<Counter>` or `<div className="p-2">`. A `<`
// followed by `/` or whitespace never starts a match, so closing tags are
// skipped. Fragments are not: `[^/\s]` accepts the `>` of `<>`, so a fragment
// followed by text is consumed into one match ending at the next `>`, while a
// trailing `<>` with no later `>` does not match. No nesting or balance
// tracking, so a tag inside a string literal or comment still counts as a tag.
static OPENING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^/\s][^>]*>").unwrap());

/// Separators for JavaScript syntax boundaries, tried front-to-back.
pub const JS_SEPARATORS: [&str; 22] = [
    "\nexport ",
    " export ",
    "\nfunction ",
    "\nasync function ",
    " async function ",
    "\nconst ",
    "\nlet ",
    "\nvar ",
    "\nclass ",
    " class ",
    "\nif ",
    " if ",
    "\nfor ",
    " for ",
    "\nwhile ",
    " while ",
    "\nswitch ",
    " switch ",
    "\ncase ",
    " case ",
    "\ndefault ",
    " default ",
];

/// Last-resort separators when neither component tags nor JavaScript syntax
/// boundaries are present.
pub const FALLBACK_SEPARATORS: [&str; 4] = ["<>", "\n\n", "&&\n", "||\n"];

/// Produce the full separator list for a single document: caller-supplied base
/// separators first, then JavaScript syntax boundaries, then the component
/// tags found in this text, then universal fallbacks.
///
/// Derived fresh on every call. Nothing from one document's tags can carry
/// over into the list used for the next one.
pub fn derive_separators(base: &[String], text: &str) -> Vec<String> {
    base.iter()
        .cloned()
        .chain(JS_SEPARATORS.iter().map(ToString::to_string))
        .chain(component_separators(text))
        .chain(FALLBACK_SEPARATORS.iter().map(ToString::to_string))
        .collect()
}

/// Scan the text for opening component tags and convert each unique tag name
/// into a separator of the form `<Name`.
///
/// The separators are ordered center-out: the tag nearest the middle of the
/// first-seen sequence sorts first, with its neighbors alternating outward.
/// Ties at equal distance keep their first-seen order.
fn component_separators(text: &str) -> impl Iterator<Item = String> {
    let separators = component_tags(text)
        .map(|tag| format!("<{tag}"))
        .collect::<Vec<_>>();
    let middle = separators.len() / 2;
    separators
        .into_iter()
        .enumerate()
        .sorted_by_key(|(index, _)| middle.abs_diff(*index))
        .map(|(_, separator)| separator)
        .unique()
}

/// All unique tag names in the text, in first-seen order.
///
/// A tag name is the first whitespace-delimited word of an opening tag match,
/// with any `<`, `>`, or newline characters stripped from its ends.
fn component_tags(text: &str) -> impl Iterator<Item = String> + '_ {
    let mut seen = AHashSet::new();
    OPENING_TAG.find_iter(text).filter_map(move |mat| {
        let tag = mat
            .as_str()
            .split_whitespace()
            .next()?
            .trim_matches(['<', '>', '\n']);
        if tag.is_empty() || seen.contains(tag) {
            return None;
        }
        seen.insert(tag.to_string());
        Some(tag.to_string())
    })
}
