//! Shell command grammar.
//!
//! Commands follow the classic record-cabinet syntax: `create` and `edit`
//! take comma-separated `field=value` pairs, `insert` takes parenthesized
//! field and value lists, and `delete`/`update`/`select` take SQL-ish
//! `where` expressions. A `where` expression is a list of equality
//! conditions joined by `and` within a clause and `or` between clauses;
//! values may be single-quoted.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use filecab_types::{FieldAssignment, FieldValue, QueryClause, RecordField, RecordId};

use crate::io::FileFormat;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(Vec<(RecordField, FieldValue)>),
    Edit(RecordId, Vec<(RecordField, FieldValue)>),
    Insert(Vec<(RecordField, FieldValue)>),
    Find(RecordField, String),
    List,
    Select {
        projection: Vec<RecordField>,
        clauses: Vec<QueryClause>,
    },
    Update {
        assignments: Vec<FieldAssignment>,
        query: QueryClause,
    },
    Delete {
        query: QueryClause,
    },
    Remove(RecordId),
    Purge,
    Stat,
    Export {
        format: FileFormat,
        path: PathBuf,
    },
    Import {
        format: FileFormat,
        path: PathBuf,
    },
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Quoted(String),
    Eq,
    Comma,
    LParen,
    RParen,
}

impl Token {
    /// The textual payload of a word or quoted token.
    fn text(&self) -> Option<&str> {
        match self {
            Token::Word(s) | Token::Quoted(s) => Some(s),
            _ => None,
        }
    }

    /// True for a bare word equal to `keyword`, case-insensitively.
    /// Quoted tokens are never keywords.
    fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Word(s) if s.eq_ignore_ascii_case(keyword))
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            ' ' | '\t' => {
                chars.next();
            }
            '=' => {
                chars.next();
                tokens.push(Token::Eq);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            '\'' => {
                chars.next();
                let mut value = String::new();
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => value.push(ch),
                        None => bail!("unterminated quoted value"),
                    }
                }
                tokens.push(Token::Quoted(value));
            }
            _ => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if matches!(ch, ' ' | '\t' | '=' | ',' | '(' | ')' | '\'') {
                        break;
                    }
                    word.push(ch);
                    chars.next();
                }
                tokens.push(Token::Word(word));
            }
        }
    }

    Ok(tokens)
}

/// Parse one shell line into a command.
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "exit" => Ok(Command::Exit),
        "help" => Ok(Command::Help),
        "list" => Ok(Command::List),
        "purge" => Ok(Command::Purge),
        "stat" => Ok(Command::Stat),
        "remove" => {
            let id = rest
                .parse::<RecordId>()
                .map_err(|_| anyhow!("remove expects a record id, got '{}'", rest))?;
            Ok(Command::Remove(id))
        }
        "create" => Ok(Command::Create(parse_pairs(&tokenize(rest)?)?)),
        "edit" => {
            let (id_part, pairs_part) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| anyhow!("usage: edit <id> field=value, ..."))?;
            let id = id_part
                .parse::<RecordId>()
                .map_err(|_| anyhow!("edit expects a record id, got '{}'", id_part))?;
            Ok(Command::Edit(id, parse_pairs(&tokenize(pairs_part)?)?))
        }
        "insert" => parse_insert(&tokenize(rest)?),
        "find" => {
            let tokens = tokenize(rest)?;
            match tokens.as_slice() {
                [field, value] => {
                    let field = parse_field(field)?;
                    let value = value
                        .text()
                        .ok_or_else(|| anyhow!("usage: find <field> <value>"))?;
                    Ok(Command::Find(field, value.to_string()))
                }
                _ => bail!("usage: find <field> <value>"),
            }
        }
        "delete" => {
            let tokens = tokenize(rest)?;
            let (keyword, condition) = tokens
                .split_first()
                .ok_or_else(|| anyhow!("usage: delete where field='value' [and ...]"))?;
            if !keyword.is_keyword("where") {
                bail!("usage: delete where field='value' [and ...]");
            }
            let mut clauses = parse_where(condition)?;
            if clauses.len() != 1 {
                bail!("delete supports a single and-combined condition");
            }
            Ok(Command::Delete {
                query: clauses.remove(0),
            })
        }
        "update" => parse_update(&tokenize(rest)?),
        "select" => parse_select(&tokenize(rest)?),
        "export" => {
            let (format, path) = parse_file_args(rest, "export")?;
            Ok(Command::Export { format, path })
        }
        "import" => {
            let (format, path) = parse_file_args(rest, "import")?;
            Ok(Command::Import { format, path })
        }
        "" => bail!("empty command"),
        unknown => bail!("There is no '{}' command. See 'help'.", unknown),
    }
}

fn parse_field(token: &Token) -> Result<RecordField> {
    let name = token
        .text()
        .ok_or_else(|| anyhow!("expected a field name"))?;
    Ok(RecordField::from_str(name)?)
}

/// Comma-separated `field=value` pairs.
fn parse_pairs(tokens: &[Token]) -> Result<Vec<(RecordField, FieldValue)>> {
    let mut pairs = Vec::new();
    let mut rest = tokens;

    loop {
        match rest {
            [field, Token::Eq, value, tail @ ..] => {
                let field = parse_field(field)?;
                let raw = value
                    .text()
                    .ok_or_else(|| anyhow!("expected a value for field '{}'", field))?;
                pairs.push((field, field.parse_value(raw)?));

                rest = match tail {
                    [] => break,
                    [Token::Comma, tail @ ..] => tail,
                    _ => bail!("expected ',' between field=value pairs"),
                };
            }
            _ => bail!("expected field=value pairs"),
        }
    }

    if pairs.is_empty() {
        bail!("expected at least one field=value pair");
    }
    Ok(pairs)
}

/// A `where` expression: conditions joined by `and` within a clause and
/// `or` between clauses.
fn parse_where(tokens: &[Token]) -> Result<Vec<QueryClause>> {
    let mut clauses = Vec::new();
    let mut pairs: Vec<(RecordField, FieldValue)> = Vec::new();
    let mut rest = tokens;

    loop {
        match rest {
            [field, Token::Eq, value, tail @ ..] => {
                let field = parse_field(field)?;
                let raw = value
                    .text()
                    .ok_or_else(|| anyhow!("expected a value for field '{}'", field))?;
                pairs.push((field, field.parse_value(raw)?));

                match tail {
                    [] => break,
                    [joiner, tail @ ..] if joiner.is_keyword("and") => rest = tail,
                    [joiner, tail @ ..] if joiner.is_keyword("or") => {
                        clauses.push(QueryClause::from_pairs(std::mem::take(&mut pairs))?);
                        rest = tail;
                    }
                    _ => bail!("expected 'and' or 'or' between conditions"),
                }
            }
            _ => bail!("expected field='value' condition"),
        }
    }

    clauses.push(QueryClause::from_pairs(pairs)?);
    Ok(clauses)
}

/// `insert (field, ...) values ('value', ...)`
fn parse_insert(tokens: &[Token]) -> Result<Command> {
    let usage = || anyhow!("usage: insert (id, field, ...) values ('1', 'value', ...)");

    let mut rest = tokens;
    let fields = parse_paren_list(&mut rest).ok_or_else(usage)?;

    match rest.split_first() {
        Some((keyword, tail)) if keyword.is_keyword("values") => rest = tail,
        _ => return Err(usage()),
    }
    let values = parse_paren_list(&mut rest).ok_or_else(usage)?;

    if !rest.is_empty() {
        return Err(usage());
    }
    if fields.len() != values.len() {
        bail!(
            "insert lists {} fields but {} values",
            fields.len(),
            values.len()
        );
    }

    let mut pairs = Vec::with_capacity(fields.len());
    for (field, raw) in fields.iter().zip(&values) {
        let field = RecordField::from_str(field)?;
        pairs.push((field, field.parse_value(raw)?));
    }
    if !pairs.iter().any(|(field, _)| *field == RecordField::Id) {
        bail!("insert requires the id field");
    }
    Ok(Command::Insert(pairs))
}

/// A parenthesized, comma-separated list of words or quoted values.
/// Consumes through the closing paren; returns None on malformed input.
fn parse_paren_list(rest: &mut &[Token]) -> Option<Vec<String>> {
    match rest.split_first() {
        Some((Token::LParen, tail)) => *rest = tail,
        _ => return None,
    }

    let mut items = Vec::new();
    loop {
        match rest.split_first() {
            Some((Token::RParen, tail)) => {
                *rest = tail;
                return Some(items);
            }
            Some((Token::Comma, tail)) if !items.is_empty() => *rest = tail,
            Some((token, tail)) => {
                items.push(token.text()?.to_string());
                *rest = tail;
            }
            None => return None,
        }
    }
}

/// `update set field='value', ... where field='value' [and ...]`
fn parse_update(tokens: &[Token]) -> Result<Command> {
    let usage = || anyhow!("usage: update set field='value', ... where field='value' [and ...]");

    let rest = match tokens.split_first() {
        Some((keyword, tail)) if keyword.is_keyword("set") => tail,
        _ => return Err(usage()),
    };

    let where_at = rest
        .iter()
        .position(|token| token.is_keyword("where"))
        .ok_or_else(usage)?;
    let (set_tokens, where_tokens) = rest.split_at(where_at);

    let assignments: Vec<FieldAssignment> = parse_pairs(set_tokens)?
        .into_iter()
        .map(|(field, value)| FieldAssignment::new(field, value))
        .collect();

    let mut clauses = parse_where(&where_tokens[1..])?;
    if clauses.len() != 1 {
        bail!("update supports a single and-combined condition");
    }

    Ok(Command::Update {
        assignments,
        query: clauses.remove(0),
    })
}

/// `select [field, ...] [where ...]`
fn parse_select(tokens: &[Token]) -> Result<Command> {
    let where_at = tokens.iter().position(|token| token.is_keyword("where"));
    let (projection_tokens, clause_tokens) = match where_at {
        Some(at) => (&tokens[..at], &tokens[at + 1..]),
        None => (tokens, &[] as &[Token]),
    };

    let mut projection = Vec::new();
    let mut expect_field = true;
    for token in projection_tokens {
        match token {
            Token::Comma if !expect_field => expect_field = true,
            _ if expect_field => {
                projection.push(parse_field(token)?);
                expect_field = false;
            }
            _ => bail!("expected ',' between projected fields"),
        }
    }
    if expect_field && !projection.is_empty() {
        bail!("trailing ',' in the projection list");
    }

    let clauses = if clause_tokens.is_empty() {
        Vec::new()
    } else {
        parse_where(clause_tokens)?
    };

    Ok(Command::Select { projection, clauses })
}

fn parse_file_args(rest: &str, verb: &str) -> Result<(FileFormat, PathBuf)> {
    let (format_part, path_part) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("usage: {} <csv|xml> <path>", verb))?;
    let format = FileFormat::from_str(format_part)?;
    let path = PathBuf::from(path_part.trim());
    Ok((format, path))
}
