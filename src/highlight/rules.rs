//! Ordered highlight passes
//!
//! Each language has a fixed sequence of (rule, category) passes. A pass
//! scans only spans that are still uncategorized and splits every match out
//! into its own categorized span. Because categorized spans are never
//! revisited, earlier passes take precedence: a keyword claimed by pass one
//! can break a string-literal match in pass two. The pass order below is
//! part of the visual contract and is pinned by tests.

use std::ops::Range;

use super::languages::LanguageId;
use super::spans::{Category, Highlighted, Span};

const JAVA_KEYWORDS: &[&str] = &[
    "public", "private", "class", "return", "new", "void", "String", "int", "if", "else",
];

const JS_KEYWORDS: &[&str] = &[
    "const", "let", "var", "function", "return", "if", "else", "import", "export", "from",
    "async", "await",
];

/// A single lexical rule: finds the next match in `text` at or after `from`
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// `@` followed by a word-character run (Java annotations)
    Annotation,
    /// Whole-token match against a fixed keyword list
    Keywords(&'static [&'static str]),
    /// Non-greedy quoted literal, no escape handling
    Quoted(char),
    /// `//` to end of line
    LineComment,
    /// Bare digit run with word boundaries on both sides
    Integer,
}

/// One step of the pipeline
struct Pass {
    rule: Rule,
    category: Category,
}

const fn pass(rule: Rule, category: Category) -> Pass {
    Pass { rule, category }
}

const JAVA_PASSES: &[Pass] = &[
    pass(Rule::Annotation, Category::Keyword),
    pass(Rule::Keywords(JAVA_KEYWORDS), Category::Keyword),
    pass(Rule::Quoted('"'), Category::String),
    pass(Rule::LineComment, Category::Comment),
    pass(Rule::Integer, Category::Number),
];

const JS_PASSES: &[Pass] = &[
    pass(Rule::Keywords(JS_KEYWORDS), Category::Keyword),
    pass(Rule::Quoted('\''), Category::String),
    pass(Rule::Quoted('"'), Category::String),
    pass(Rule::LineComment, Category::Comment),
    pass(Rule::Integer, Category::Number),
];

fn passes_for(language: LanguageId) -> &'static [Pass] {
    match language {
        LanguageId::Java => JAVA_PASSES,
        LanguageId::JavaScript | LanguageId::TypeScript => JS_PASSES,
        LanguageId::PlainText | LanguageId::Json => &[],
    }
}

/// Highlight `code` according to the fixed pass pipeline for `language`.
///
/// Pure function: same input always yields the same spans. Languages with
/// no highlighting rules come back as a single uncategorized span.
pub fn highlight(code: &str, language: LanguageId) -> Highlighted {
    let passes = passes_for(language);
    if passes.is_empty() {
        return Highlighted::plain(code);
    }

    let mut spans = Highlighted::plain(code).spans;
    for pass in passes {
        spans = apply_pass(spans, pass);
    }
    Highlighted { spans }
}

/// Run one pass over the span list, splitting matches out of uncategorized
/// spans and leaving categorized spans untouched.
fn apply_pass(spans: Vec<Span>, pass: &Pass) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.category != Category::Text {
            out.push(span);
            continue;
        }
        split_matches(&span.text, pass, &mut out);
    }
    out
}

/// Split every match of `pass.rule` in `text` into its own span.
///
/// Boundary checks (word boundaries, line ends) are local to `text`: span
/// edges count as boundaries, which is what sequential rewriting gives you.
fn split_matches(text: &str, pass: &Pass, out: &mut Vec<Span>) {
    let mut cursor = 0;
    while let Some(m) = pass.rule.find(text, cursor) {
        if m.start > cursor {
            out.push(Span::text(&text[cursor..m.start]));
        }
        out.push(Span::new(&text[m.clone()], pass.category));
        cursor = m.end;
    }
    if cursor < text.len() {
        out.push(Span::text(&text[cursor..]));
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// True if position `at` (byte offset) sits on a word boundary of `text`
fn boundary_before(text: &str, at: usize) -> bool {
    text[..at].chars().next_back().is_none_or(|c| !is_word_char(c))
}

fn boundary_after(text: &str, at: usize) -> bool {
    text[at..].chars().next().is_none_or(|c| !is_word_char(c))
}

impl Rule {
    /// Find the next match in `text` at or after byte offset `from`
    fn find(&self, text: &str, from: usize) -> Option<Range<usize>> {
        match *self {
            Rule::Annotation => find_annotation(text, from),
            Rule::Keywords(keywords) => find_keyword(text, from, keywords),
            Rule::Quoted(quote) => find_quoted(text, from, quote),
            Rule::LineComment => find_line_comment(text, from),
            Rule::Integer => find_integer(text, from),
        }
    }
}

fn find_annotation(text: &str, from: usize) -> Option<Range<usize>> {
    let mut search = from;
    while let Some(rel) = text[search..].find('@') {
        let start = search + rel;
        let after_at = start + 1;
        let word_len: usize = text[after_at..]
            .chars()
            .take_while(|&c| is_word_char(c))
            .map(char::len_utf8)
            .sum();
        if word_len > 0 {
            return Some(start..after_at + word_len);
        }
        search = after_at;
    }
    None
}

fn find_keyword(text: &str, from: usize, keywords: &[&str]) -> Option<Range<usize>> {
    let mut best: Option<Range<usize>> = None;
    for kw in keywords {
        let mut search = from;
        while let Some(rel) = text[search..].find(kw) {
            let start = search + rel;
            let end = start + kw.len();
            if boundary_before(text, start) && boundary_after(text, end) {
                // Earliest match wins; on a tie keep the longer keyword
                let better = match &best {
                    None => true,
                    Some(b) => start < b.start || (start == b.start && end > b.end),
                };
                if better {
                    best = Some(start..end);
                }
                break;
            }
            search = start + 1;
        }
    }
    best
}

fn find_quoted(text: &str, from: usize, quote: char) -> Option<Range<usize>> {
    let open = text[from..].find(quote)? + from;
    let body = open + quote.len_utf8();
    let close = text[body..].find(quote)? + body;
    Some(open..close + quote.len_utf8())
}

fn find_line_comment(text: &str, from: usize) -> Option<Range<usize>> {
    let start = text[from..].find("//")? + from;
    let end = text[start..]
        .find('\n')
        .map(|rel| start + rel)
        .unwrap_or(text.len());
    Some(start..end)
}

fn find_integer(text: &str, from: usize) -> Option<Range<usize>> {
    let mut search = from;
    loop {
        let rel = text[search..].find(|c: char| c.is_ascii_digit())?;
        let start = search + rel;
        let len = text[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .count();
        let end = start + len;
        if boundary_before(text, start) && boundary_after(text, end) {
            return Some(start..end);
        }
        // Inside an identifier like `user2fa`; skip past the digit run
        search = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(h: &Highlighted) -> Vec<(&str, Category)> {
        h.spans
            .iter()
            .map(|s| (s.text.as_str(), s.category))
            .collect()
    }

    #[test]
    fn test_java_keywords_and_numbers() {
        let h = highlight("public class Foo { return 1; }", LanguageId::Java);
        assert_eq!(
            categories(&h),
            vec![
                ("public", Category::Keyword),
                (" ", Category::Text),
                ("class", Category::Keyword),
                (" Foo { ", Category::Text),
                ("return", Category::Keyword),
                (" ", Category::Text),
                ("1", Category::Number),
                ("; }", Category::Text),
            ]
        );
    }

    #[test]
    fn test_java_annotation() {
        let h = highlight("@GetMapping(\"/users\")", LanguageId::Java);
        assert_eq!(h.spans[0], Span::new("@GetMapping", Category::Keyword));
        assert_eq!(h.spans[2], Span::new("\"/users\"", Category::String));
    }

    #[test]
    fn test_js_keyword_string_comment() {
        let h = highlight("const x = 'hi'; // comment", LanguageId::JavaScript);
        assert_eq!(
            categories(&h),
            vec![
                ("const", Category::Keyword),
                (" x = ", Category::Text),
                ("'hi'", Category::String),
                ("; ", Category::Text),
                ("// comment", Category::Comment),
            ]
        );
    }

    #[test]
    fn test_typescript_uses_js_passes() {
        let a = highlight("await fetch('/api/users')", LanguageId::TypeScript);
        let b = highlight("await fetch('/api/users')", LanguageId::JavaScript);
        assert_eq!(a, b);
        assert_eq!(a.spans[0], Span::new("await", Category::Keyword));
    }

    #[test]
    fn test_unrecognized_language_passthrough() {
        let code = "const x = 1; // untouched";
        let h = highlight(code, LanguageId::PlainText);
        assert_eq!(h.spans, vec![Span::text(code)]);
        let h = highlight(code, LanguageId::Json);
        assert_eq!(h.spans, vec![Span::text(code)]);
    }

    #[test]
    fn test_keywords_are_whole_tokens() {
        // `classy` and `returned` must not match `class`/`return`
        let h = highlight("classy returned", LanguageId::Java);
        assert!(h.is_plain());
    }

    #[test]
    fn test_keyword_inside_string_wins_over_string() {
        // The keyword pass runs before the string pass, so a keyword inside
        // a literal is claimed first and the literal match breaks apart.
        // Pinned deliberately: this mirrors the fixed pass ordering.
        let h = highlight("'a const b'", LanguageId::JavaScript);
        let keyword: Vec<_> = h.spans_of(Category::Keyword).collect();
        assert_eq!(keyword, vec![&Span::new("const", Category::Keyword)]);
        assert!(h.spans_of(Category::String).next().is_none());
    }

    #[test]
    fn test_comment_inside_string_stays_string() {
        // String pass runs before the comment pass
        let h = highlight("const u = 'http://x';", LanguageId::JavaScript);
        let strings: Vec<_> = h.spans_of(Category::String).collect();
        assert_eq!(strings, vec![&Span::new("'http://x'", Category::String)]);
        assert!(h.spans_of(Category::Comment).next().is_none());
    }

    #[test]
    fn test_comment_runs_to_end_of_line_only() {
        let h = highlight("// first\nlet x;", LanguageId::JavaScript);
        assert_eq!(h.spans[0], Span::new("// first", Category::Comment));
        assert_eq!(h.spans[2], Span::new("let", Category::Keyword));
    }

    #[test]
    fn test_integer_word_boundaries() {
        let h = highlight("id2x = 42;", LanguageId::JavaScript);
        let numbers: Vec<_> = h.spans_of(Category::Number).collect();
        assert_eq!(numbers, vec![&Span::new("42", Category::Number)]);
    }

    #[test]
    fn test_unterminated_string_not_matched() {
        let h = highlight("let s = 'oops", LanguageId::JavaScript);
        assert!(h.spans_of(Category::String).next().is_none());
    }

    #[test]
    fn test_split_is_lossless() {
        let code = "@PostMapping(\"/users\")\npublic ResponseEntity<User> createUser(@RequestBody User user) {\n    return ResponseEntity.status(201).body(user); // created\n}";
        let h = highlight(code, LanguageId::Java);
        assert_eq!(h.plain_text(), code);
    }

    #[test]
    fn test_pure_function() {
        let code = "const users = await response.json();";
        assert_eq!(
            highlight(code, LanguageId::TypeScript),
            highlight(code, LanguageId::TypeScript)
        );
    }
}
