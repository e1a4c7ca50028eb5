use std::collections::HashSet;

use crate::error::{Result, SceneError};
use crate::types::{SceneDoc, SceneLine};

/// Suffix character marking the fallback-language variant of a command.
pub const FALLBACK_LANG: char = 'E';

/// Parses scene definition text into a document.
///
/// `filename` is used for diagnostics only; `lang` is the active language
/// character matched against `.X` command suffixes.
pub fn parse_scene(text: &str, filename: &str, lang: char) -> Result<SceneDoc> {
    let mut doc = SceneDoc::new(filename);
    let mut translatable: HashSet<String> = HashSet::new();
    let mut line_number = 0usize;

    for raw in text.lines() {
        line_number += 1;

        let mut line = raw.replace('\t', " ");
        // Comments run to end of line. Not quote-aware: a `//` inside a
        // quoted value still starts a comment.
        if let Some(pos) = line.find("//") {
            line.truncate(pos);
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (token, remainder) = match line.find(' ') {
            Some(pos) => (&line[..pos], line[pos + 1..].trim()),
            None => (line, ""),
        };

        let mut command = token;
        if token.len() > 2 && token.as_bytes()[token.len() - 2] == b'.' {
            let base = &token[..token.len() - 2];
            let lang_char = token.as_bytes()[token.len() - 1] as char;
            command = base;

            if lang_char == FALLBACK_LANG && !translatable.contains(base) {
                translatable.insert(base.to_string());
            } else if lang_char == lang {
                // A later active-language line overrides whatever was kept
                // for this command so far.
                if translatable.contains(base) {
                    doc.remove_command(base);
                }
                translatable.insert(base.to_string());
            } else {
                continue;
            }
        }

        let mut scene_line = SceneLine::new(line_number, command);
        parse_params(&mut scene_line, remainder, filename, line_number)?;
        doc.add_line(scene_line);
    }

    Ok(doc)
}

/// Extracts `name=value` pairs from the remainder of a line.
fn parse_params(
    line: &mut SceneLine,
    remainder: &str,
    filename: &str,
    line_number: usize,
) -> Result<()> {
    let mut rest = remainder;
    while !rest.is_empty() {
        let Some(eq) = rest.find('=') else {
            // Trailing bare token: recorded under its own text.
            let token = rest.trim();
            line.add_param(token, token);
            break;
        };
        let name = rest[..eq].trim();
        let tail = rest[eq + 1..].trim();

        let (value, resume) = if let Some(quote) = leading_quote(tail) {
            let close = tail[1..]
                .find(quote)
                .ok_or_else(|| SceneError::UnterminatedQuote {
                    quote,
                    path: filename.to_string(),
                    line: line_number,
                })?;
            (&tail[1..close + 1], close + 2)
        } else {
            unquoted_span(tail)
        };

        line.add_param(name, value.trim());

        if resume >= tail.len() {
            break;
        }
        rest = tail[resume..].trim();
    }
    Ok(())
}

fn leading_quote(tail: &str) -> Option<char> {
    match tail.as_bytes().first() {
        Some(b'"') => Some('"'),
        Some(b'\'') => Some('\''),
        _ => None,
    }
}

/// Value span of an unquoted parameter. The value runs up to the whitespace
/// gap preceding the next parameter's name (found by scanning forward to the
/// next `=` and backing over the name), or to the end of the remainder.
fn unquoted_span(tail: &str) -> (&str, usize) {
    let Some(eq) = tail.find('=') else {
        return (tail, tail.len());
    };
    let before = &tail[..eq];
    match before.trim_end().rfind(is_ws) {
        Some(w) => (&tail[..w], w + 1),
        None => (&tail[..eq + 1], eq + 1),
    }
}

fn is_ws(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let doc = parse_scene("Title text=\"Hello\" rank=3\n", "", 'E').unwrap();
        assert_eq!(doc.lines.len(), 1);
        let line = &doc.lines[0];
        assert_eq!(line.command, "Title");
        assert_eq!(line.line_number, 1);
        assert_eq!(line.get_param("text"), Some("Hello"));
        assert_eq!(line.get_param("rank"), Some("3"));
    }

    #[test]
    fn test_normalization_is_semantically_neutral() {
        let plain = parse_scene("Title text=\"Hello\"\n", "", 'E').unwrap();
        let noisy = parse_scene("\t  Title\ttext=\"Hello\"   // a comment\n", "", 'E').unwrap();
        assert_eq!(plain.lines[0].command, noisy.lines[0].command);
        assert_eq!(plain.lines[0].params, noisy.lines[0].params);
    }

    #[test]
    fn test_blank_and_comment_lines_skipped_but_counted() {
        let text = "// header comment\n\nTitle text=\"Hi\"\n";
        let doc = parse_scene(text, "", 'E').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].line_number, 3);
    }

    #[test]
    fn test_quoted_value_keeps_equals_and_spaces() {
        let doc = parse_scene("Msg text=\"a = b c\" next='d e'\n", "", 'E').unwrap();
        let line = &doc.lines[0];
        assert_eq!(line.get_param("text"), Some("a = b c"));
        assert_eq!(line.get_param("next"), Some("d e"));
    }

    #[test]
    fn test_unquoted_values_split_before_next_name() {
        let doc = parse_scene("CreateObject pos=10;20 dir = 1.5 type=Barrier\n", "", 'E').unwrap();
        let line = &doc.lines[0];
        assert_eq!(line.get_param("pos"), Some("10;20"));
        assert_eq!(line.get_param("dir"), Some("1.5"));
        assert_eq!(line.get_param("type"), Some("Barrier"));
    }

    #[test]
    fn test_multibyte_param_name_after_unquoted_value() {
        let doc = parse_scene("Msg a=1 café=x\n", "", 'E').unwrap();
        let line = &doc.lines[0];
        assert_eq!(line.get_param("a"), Some("1"));
        assert_eq!(line.get_param("café"), Some("x"));
    }

    #[test]
    fn test_multibyte_unquoted_value() {
        let doc = parse_scene("Msg text=élan über next=2\n", "", 'E').unwrap();
        let line = &doc.lines[0];
        assert_eq!(line.get_param("text"), Some("élan über"));
        assert_eq!(line.get_param("next"), Some("2"));
    }

    #[test]
    fn test_unterminated_quote_reports_location() {
        let err = parse_scene("Ok a=1\nBad text=\"oops\n", "scene.txt", 'E').unwrap_err();
        match err {
            SceneError::UnterminatedQuote { quote, path, line } => {
                assert_eq!(quote, '"');
                assert_eq!(path, "scene.txt");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_single_quote() {
        let err = parse_scene("Bad text='oops\n", "s.txt", 'E').unwrap_err();
        assert!(matches!(
            err,
            SceneError::UnterminatedQuote { quote: '\'', line: 1, .. }
        ));
    }

    #[test]
    fn test_comment_marker_inside_quotes_still_comments() {
        // `//` is not quote-aware, so the quote is left unclosed.
        let err = parse_scene("Title text=\"a//b\"\n", "s.txt", 'E').unwrap_err();
        assert!(matches!(err, SceneError::UnterminatedQuote { .. }));
    }

    #[test]
    fn test_localization_active_overrides_fallback() {
        let text = "Foo.E text=\"hello\"\nFoo.F text=\"bonjour\"\n";
        let doc = parse_scene(text, "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].command, "Foo");
        assert_eq!(doc.lines[0].get_param("text"), Some("bonjour"));
    }

    #[test]
    fn test_localization_fallback_alone_survives() {
        let doc = parse_scene("Foo.E text=\"hello\"\n", "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].command, "Foo");
        assert_eq!(doc.lines[0].get_param("text"), Some("hello"));
    }

    #[test]
    fn test_localization_other_language_dropped() {
        let doc = parse_scene("Foo.D text=\"hallo\"\n", "", 'F').unwrap();
        assert!(doc.lines.is_empty());
        assert!(doc.get("Foo").is_err());
    }

    #[test]
    fn test_localization_fallback_after_active_is_dropped() {
        let text = "Foo.F text=\"bonjour\"\nFoo.E text=\"hello\"\n";
        let doc = parse_scene(text, "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].get_param("text"), Some("bonjour"));
    }

    #[test]
    fn test_localization_repeated_active_keeps_last() {
        let text = "Foo.F text=\"un\"\nFoo.F text=\"deux\"\n";
        let doc = parse_scene(text, "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].get_param("text"), Some("deux"));
    }

    #[test]
    fn test_unsuffixed_commands_not_deduplicated() {
        let text = "Object type=Me\nObject type=Titanium\n";
        let doc = parse_scene(text, "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 2);
        assert_eq!(doc.get("Object").unwrap().get_param("type"), Some("Me"));
    }

    #[test]
    fn test_override_renumbers_surviving_lines() {
        let text = "Before a=1\nFoo.E text=\"hello\"\nFoo.F text=\"bonjour\"\nAfter b=2\n";
        let doc = parse_scene(text, "", 'F').unwrap();
        let commands: Vec<_> = doc.lines.iter().map(|l| l.command.as_str()).collect();
        assert_eq!(commands, vec!["Before", "Foo", "After"]);
        for (i, line) in doc.lines.iter().enumerate() {
            assert_eq!(line.doc_index, Some(i));
        }
    }

    #[test]
    fn test_short_token_not_treated_as_suffix() {
        // ".E" alone is too short to carry a suffix.
        let doc = parse_scene(".E a=1\n", "", 'F').unwrap();
        assert_eq!(doc.lines.len(), 1);
        assert_eq!(doc.lines[0].command, ".E");
    }
}
