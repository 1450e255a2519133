//! Hand-written recursive-descent parser for the passfile text format.
//!
//! The format is line-oriented at the top (domain blocks, sequence blocks,
//! comments) and character-oriented inside a sequence body, where segments
//! are parsed as `identifier(param, ...)` with typed parameter literals.
//!
//! Parsing a file never fails as a whole: any entry that cannot be parsed
//! is logged as a warning and skipped, and the rest of the file still
//! loads. Syntax errors carry the offending character and its position.

use tracing::warn;

use crate::passfile::{find_forbidden_symbol, Domain, Passfile, User};
use crate::sequence::{Param, Segment, Sequence};

/// Error type for syntax errors in a single configuration entry.
#[derive(Debug, Clone)]
pub enum ParseError {
    UnexpectedSymbol { found: char, at: usize, context: &'static str },
    UnexpectedEof { at: usize, context: &'static str },
    Malformed(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnexpectedSymbol { found, at, context } => {
                write!(f, "unexpected symbol '{}' at position {} in {}", found, at, context)
            }
            ParseError::UnexpectedEof { at, context } => {
                write!(f, "unexpected end of input at position {} in {}", at, context)
            }
            ParseError::Malformed(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

fn skip_whitespace(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    i
}

fn parse_identifier(chars: &[char], mut i: usize) -> Result<(usize, String), ParseError> {
    if i >= chars.len() {
        return Err(ParseError::UnexpectedEof { at: i, context: "identifier" });
    }
    let first = chars[i];
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(ParseError::UnexpectedSymbol { found: first, at: i, context: "identifier" });
    }
    let mut ident = String::new();
    ident.push(first);
    i += 1;
    while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
        ident.push(chars[i]);
        i += 1;
    }
    Ok((i, ident))
}

fn parse_string_literal(chars: &[char], mut i: usize) -> Result<(usize, String), ParseError> {
    if i >= chars.len() {
        return Err(ParseError::UnexpectedEof { at: i, context: "string literal" });
    }
    if chars[i] != '"' {
        return Err(ParseError::UnexpectedSymbol {
            found: chars[i],
            at: i,
            context: "string literal",
        });
    }
    i += 1;
    let mut literal = String::new();
    while i < chars.len() && chars[i] != '"' {
        literal.push(chars[i]);
        i += 1;
    }
    if i >= chars.len() {
        return Err(ParseError::UnexpectedEof { at: i, context: "unterminated string literal" });
    }
    Ok((i + 1, literal))
}

fn parse_number(chars: &[char], mut i: usize) -> Result<(usize, i64), ParseError> {
    let mut digits = String::new();
    while i < chars.len() && chars[i].is_ascii_digit() {
        digits.push(chars[i]);
        i += 1;
    }
    match digits.parse() {
        Ok(number) => Ok((i, number)),
        Err(_) => Err(ParseError::Malformed(format!("number '{}' is out of range", digits))),
    }
}

fn parse_param(chars: &[char], i: usize) -> Result<(usize, Param), ParseError> {
    let i = skip_whitespace(chars, i);
    let Some(&c) = chars.get(i) else {
        return Err(ParseError::UnexpectedEof { at: i, context: "segment parameter" });
    };
    if c == '$' {
        let (i, ident) = parse_identifier(chars, i + 1)?;
        Ok((i, Param::Field(ident)))
    } else if c.is_ascii_digit() {
        let (i, number) = parse_number(chars, i)?;
        Ok((i, Param::Number(number)))
    } else {
        let (i, literal) = parse_string_literal(chars, i)?;
        Ok((i, Param::Str(literal)))
    }
}

fn parse_params(chars: &[char], i: usize) -> Result<(usize, Vec<Param>), ParseError> {
    let mut i = skip_whitespace(chars, i);
    match chars.get(i) {
        None => return Err(ParseError::UnexpectedEof { at: i, context: "segment parameters" }),
        Some('(') => i += 1,
        Some(&found) => {
            return Err(ParseError::UnexpectedSymbol { found, at: i, context: "segment parameters" })
        }
    }

    let mut params = Vec::new();
    i = skip_whitespace(chars, i);
    if chars.get(i) == Some(&')') {
        return Ok((i + 1, params));
    }
    loop {
        let (next, param) = parse_param(chars, i)?;
        params.push(param);
        i = skip_whitespace(chars, next);
        match chars.get(i) {
            Some(')') => return Ok((i + 1, params)),
            Some(',') => i += 1,
            None => return Err(ParseError::UnexpectedEof { at: i, context: "segment parameters" }),
            Some(&found) => {
                return Err(ParseError::UnexpectedSymbol {
                    found,
                    at: i,
                    context: "segment parameters, expected ')' or ','",
                })
            }
        }
    }
}

fn parse_segment(chars: &[char], i: usize) -> Result<(usize, Segment), ParseError> {
    let i = skip_whitespace(chars, i);
    let (i, function) = parse_identifier(chars, i)?;
    let (i, parameters) = parse_params(chars, i)?;
    Ok((i, Segment { function, parameters }))
}

/// Parse a whitespace-joined segment stream: `identifier(params)` repeated
/// to the end of the input.
pub fn parse_segments(stream: &str) -> Result<Vec<Segment>, ParseError> {
    let chars: Vec<char> = stream.chars().collect();
    let mut segments = Vec::new();
    let mut i = 0;
    loop {
        i = skip_whitespace(&chars, i);
        if i >= chars.len() {
            return Ok(segments);
        }
        let (next, segment) = parse_segment(&chars, i)?;
        segments.push(segment);
        i = next;
    }
}

fn parse_sequence_header(line: &str) -> Result<(String, bool), ParseError> {
    let Some(begin) = line.find('[') else {
        return Err(ParseError::Malformed("missing '[' in sequence header".into()));
    };
    let Some(end) = line.find(']') else {
        return Err(ParseError::Malformed("missing ']' in sequence header".into()));
    };
    if end < begin {
        return Err(ParseError::Malformed("']' must come after '[' in sequence header".into()));
    }

    let mut name = &line[begin + 1..end];
    if let Some(symbol) = find_forbidden_symbol(name) {
        return Err(ParseError::Malformed(format!(
            "forbidden symbol '{}' in sequence name '{}'",
            symbol, name
        )));
    }

    let mut is_default = false;
    if let Some(stripped) = name.strip_prefix('+') {
        is_default = true;
        name = stripped;
        if name.is_empty() {
            return Err(ParseError::Malformed("sequence name cannot be empty".into()));
        }
    }
    Ok((name.to_string(), is_default))
}

/// Parse one sequence block: a `[name]` / `[+name]` header line followed by
/// body lines up to the next blank line, which are whitespace-joined into a
/// single segment stream.
fn parse_sequence_block(lines: &[&str], start: usize) -> Result<(usize, Sequence), ParseError> {
    let (name, is_default) = parse_sequence_header(lines[start])?;

    let mut end = start + 1;
    while end < lines.len() && !lines[end].trim().is_empty() {
        end += 1;
    }
    let stream =
        lines[start + 1..end].iter().map(|line| line.trim()).collect::<Vec<_>>().join(" ");

    let mut sequence = Sequence::with_segments(name, parse_segments(&stream)?);
    sequence.is_default = is_default;
    Ok((end, sequence))
}

fn parse_domain_name(line: &str) -> Result<String, ParseError> {
    let trimmed = line.trim();
    let Some(name) = trimmed.strip_suffix(':') else {
        return Err(ParseError::Malformed(format!("domain line '{}' must end with ':'", trimmed)));
    };
    if let Some(symbol) = find_forbidden_symbol(name) {
        return Err(ParseError::Malformed(format!(
            "forbidden symbol '{}' in domain name '{}'",
            symbol, name
        )));
    }
    Ok(name.to_string())
}

/// Parse one domain block: a `name:` line followed by indented
/// `<user> - <sequence>` lines. Blank lines inside the block are skipped;
/// the block ends at the first non-indented line.
fn parse_domain_block(lines: &[&str], start: usize) -> Result<(usize, Domain), ParseError> {
    let mut domain = Domain::new(parse_domain_name(lines[start])?);

    let mut i = start + 1;
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        if !line.starts_with('\t') && !line.starts_with(' ') {
            break;
        }

        let trimmed = line.trim();
        // An empty user name is written `- sequence`; pad it so the
        // separator split sees both sides.
        let normalized =
            if trimmed.starts_with('-') { format!(" {}", trimmed) } else { trimmed.to_string() };
        let parts: Vec<&str> = normalized.split(" - ").map(str::trim).collect();
        if parts.len() != 2 {
            return Err(ParseError::Malformed(format!(
                "invalid user entry '{}' in domain '{}'",
                trimmed, domain.name
            )));
        }

        let (user_name, sequence_name) = (parts[0], parts[1]);
        for name in [user_name, sequence_name] {
            if let Some(symbol) = find_forbidden_symbol(name) {
                return Err(ParseError::Malformed(format!(
                    "forbidden symbol '{}' in name '{}'",
                    symbol, name
                )));
            }
        }
        domain.add_user(User::new(user_name, sequence_name));
        i += 1;
    }
    Ok((i, domain))
}

/// The sequence synthesized when a file defines no `good_password`.
fn fallback_sequence() -> Sequence {
    Sequence::with_segments(
        "good_password",
        vec![
            Segment::new(
                "init",
                vec![
                    Param::Field("key".into()),
                    Param::Field("domain".into()),
                    Param::Field("user".into()),
                ],
            ),
            Segment::new("diceware_short", vec![]),
            Segment::new("capitalize_some", vec![]),
            Segment::new("add_some_simple_special_characters", vec![]),
        ],
    )
}

/// Parse a complete passfile.
///
/// Entry-level errors (a malformed block, a duplicate name, a second
/// default) are logged as warnings and skipped; the rest of the file still
/// loads. After parsing, a `good_password` fallback sequence is synthesized
/// if the file did not define one, and becomes the default if the file
/// marked none.
pub fn parse_passfile(text: &str) -> Passfile {
    let lines: Vec<&str> = text.lines().collect();
    let mut passfile = Passfile::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() || line.starts_with('#') {
            i += 1;
            continue;
        }

        if line.starts_with('[') {
            match parse_sequence_block(&lines, i) {
                Ok((next, sequence)) => {
                    i = next;
                    if passfile.sequences.contains_key(&sequence.name) {
                        warn!(line = i + 1, "duplicate sequence name '{}', skipping", sequence.name);
                        i += 1;
                    } else if sequence.is_default && !passfile.default.is_empty() {
                        warn!(
                            line = i + 1,
                            "multiple default sequences not allowed: '{}' and '{}' are both \
                             marked with '+', skipping '{}'",
                            sequence.name,
                            passfile.default,
                            sequence.name
                        );
                        i += 1;
                    } else {
                        if sequence.is_default {
                            passfile.default = sequence.name.clone();
                        }
                        passfile.sequences.insert(sequence.name.clone(), sequence);
                    }
                }
                Err(error) => {
                    warn!(line = i + 1, "skipping sequence entry: {}", error);
                    i += 1;
                }
            }
        } else if !line.starts_with(' ') && !line.starts_with('\t') {
            match parse_domain_block(&lines, i) {
                Ok((next, domain)) => {
                    i = next;
                    if passfile.domains.contains_key(&domain.name) {
                        warn!(line = i + 1, "duplicate domain name '{}', skipping", domain.name);
                        i += 1;
                    } else {
                        passfile.domains.insert(domain.name.clone(), domain);
                    }
                }
                Err(error) => {
                    warn!(line = i + 1, "skipping domain entry: {}", error);
                    i += 1;
                }
            }
        } else {
            warn!(
                line = i + 1,
                "skipping entry: unexpected symbol '{}' at start of line",
                line.chars().next().unwrap_or(' ')
            );
            i += 1;
        }
    }

    if !passfile.sequences.contains_key("good_password") {
        let fallback = fallback_sequence();
        passfile.sequences.insert(fallback.name.clone(), fallback);
    }
    if passfile.default.is_empty() {
        passfile.default = "good_password".into();
    }
    passfile
}

impl Passfile {
    /// Parse configuration text; see [`parse_passfile`].
    pub fn parse(text: &str) -> Self {
        parse_passfile(text)
    }
}
