//! Session document codec
//!
//! Converts a [`SessionData`] to and from its single-string form:
//!
//! ```text
//! document          := lists_section "-" variables_section
//! lists_section     := ( "^" list_name "]" element* )*
//! element           := type_digit "." content "]"
//! variables_section := ( "^" var_name "]" type_digit "." content "]" )*
//! ```
//!
//! An empty session encodes to exactly `-`. The codec knows nothing about
//! obfuscation; callers shift the encoded text themselves.

use crate::crypto::SEPARATOR;
use crate::error::{SessionError, SessionResult};
use crate::models::{ScalarType, SessionData, SessionList, Variable};

const NAME_START: char = '^';
const TERMINATOR: char = ']';
const TYPE_SEPARATOR: char = '.';

/// Encode a session into the document format
pub fn encode(data: &SessionData) -> String {
    let mut out = String::new();

    for list in &data.lists {
        out.push(NAME_START);
        out.push_str(&list.name);
        out.push(TERMINATOR);
        for entry in list.entries() {
            push_typed(&mut out, entry.kind, &entry.content);
        }
    }

    out.push(SEPARATOR);

    for var in &data.variables {
        out.push(NAME_START);
        out.push_str(&var.name);
        out.push(TERMINATOR);
        push_typed(&mut out, var.kind, &var.content);
    }

    out
}

fn push_typed(out: &mut String, kind: ScalarType, content: &str) {
    out.push(kind.tag());
    out.push(TYPE_SEPARATOR);
    out.push_str(content);
    out.push(TERMINATOR);
}

/// Decode a document into a session
pub fn decode(document: &str) -> SessionResult<SessionData> {
    let split = find_section_separator(document).ok_or_else(|| {
        SessionError::Parse("missing section separator '-' between lists and variables".into())
    })?;

    let (lists_part, rest) = document.split_at(split);
    let variables_part = &rest[SEPARATOR.len_utf8()..];

    Ok(SessionData {
        lists: decode_lists(lists_part)?,
        variables: decode_variables(variables_part)?,
    })
}

/// Byte offset of the `-` that separates the two sections
///
/// It is the first `-` at the very start or directly after a `]`.
/// A `-` inside content always follows `.` or a digit (negative numbers,
/// exponents) or another content character, never a terminator.
fn find_section_separator(document: &str) -> Option<usize> {
    let mut prev: Option<char> = None;
    for (pos, c) in document.char_indices() {
        if c == SEPARATOR && (prev.is_none() || prev == Some(TERMINATOR)) {
            return Some(pos);
        }
        prev = Some(c);
    }
    None
}

fn decode_variables(part: &str) -> SessionResult<Vec<Variable>> {
    let mut variables = Vec::new();

    for segment in part.split(NAME_START).skip(1) {
        if segment.is_empty() {
            continue;
        }
        let (name, body) = segment.split_once(TERMINATOR).ok_or_else(|| {
            SessionError::Parse(format!("unterminated variable name in '{}'", segment))
        })?;
        let body = body.strip_suffix(TERMINATOR).unwrap_or(body);
        let (kind, content) = decode_typed(body)?;
        variables.push(Variable {
            name: name.to_string(),
            kind,
            content: content.to_string(),
        });
    }

    Ok(variables)
}

fn decode_lists(part: &str) -> SessionResult<Vec<SessionList>> {
    let mut lists = Vec::new();
    let mut current: Option<SessionList> = None;

    for segment in part.split(TERMINATOR) {
        if let Some(name) = segment.strip_prefix(NAME_START) {
            if let Some(done) = current.take() {
                lists.push(done);
            }
            current = Some(SessionList::new(name));
        } else if segment.is_empty() {
            // boundary; only trailing splits produce these
            if let Some(done) = current.take() {
                lists.push(done);
            }
        } else {
            let list = current.as_mut().ok_or_else(|| {
                SessionError::Parse(format!("element '{}' appears outside any list", segment))
            })?;
            let (kind, content) = decode_typed(segment)?;
            list.push_content(kind, content.to_string());
        }
    }

    if let Some(done) = current.take() {
        lists.push(done);
    }

    Ok(lists)
}

/// Split `d.content` into its tag and content
fn decode_typed(body: &str) -> SessionResult<(ScalarType, &str)> {
    let (tag, content) = body.split_once(TYPE_SEPARATOR).ok_or_else(|| {
        SessionError::Parse(format!("missing type separator in '{}'", body))
    })?;
    let kind = ScalarType::from_tag(tag)
        .ok_or_else(|| SessionError::Parse(format!("unknown type tag '{}'", tag)))?;
    if !kind.accepts(content) {
        return Err(SessionError::Parse(format!(
            "'{}' is not a valid {}",
            content, kind
        )));
    }
    Ok((kind, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scalar;
    use proptest::prelude::*;

    #[test]
    fn test_empty_store_encodes_to_separator() {
        assert_eq!(encode(&SessionData::new()), "-");
        assert_eq!(decode("-").unwrap(), SessionData::new());
    }

    #[test]
    fn test_scores_scenario() {
        let mut data = SessionData::new();
        data.add_list("Scores");
        let scores = data.list_mut("Scores").unwrap();
        scores.push(&Scalar::Int(10));
        scores.push(&Scalar::Int(20));
        scores.remove_at(0);

        let doc = encode(&data);
        assert_eq!(doc, "^Scores]1.20]-");

        let decoded = decode(&doc).unwrap();
        let list = decoded.list("Scores").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entry(0).unwrap().content, "20");
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_encode_lists_and_variables() {
        let mut data = SessionData::new();
        data.add_list("A");
        data.list_mut("A").unwrap().push(&Scalar::from("x"));
        data.add_list("B");
        data.set_variable("Volume", &Scalar::Float(0.5));
        data.set_variable("Name", &Scalar::from("bob"));

        assert_eq!(encode(&data), "^A]0.x]^B]-^Volume]2.0.5]^Name]0.bob]");
    }

    #[test]
    fn test_decode_variables_only() {
        let data = decode("-^Volume]2.1]^Lives]1.3]").unwrap();
        assert!(data.lists.is_empty());
        assert_eq!(data.variables.len(), 2);
        assert_eq!(data.variable("Lives").unwrap().value().unwrap(), Scalar::Int(3));
    }

    #[test]
    fn test_decode_empty_lists_keep_their_names() {
        let data = decode("^A]^B]1.4]^C]-").unwrap();
        let names: Vec<_> = data.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert!(data.list("A").unwrap().is_empty());
        assert_eq!(data.list("B").unwrap().len(), 1);
    }

    #[test]
    fn test_negative_numbers_and_fractions_survive() {
        let mut data = SessionData::new();
        data.add_list("Deltas");
        let list = data.list_mut("Deltas").unwrap();
        list.push(&Scalar::Int(-7));
        list.push(&Scalar::Float(-0.25));
        data.set_variable("Offset", &Scalar::Int(-1));
        data.set_variable("Title", &Scalar::from("a-b.c"));

        let doc = encode(&data);
        assert_eq!(doc, "^Deltas]1.-7]2.-0.25]-^Offset]1.-1]^Title]0.a-b.c]");
        assert_eq!(decode(&doc).unwrap(), data);
    }

    #[test]
    fn test_decode_accepts_exponent_floats() {
        let data = decode("^F]2.1E-05]-").unwrap();
        let entry = data.list("F").unwrap().entry(0).unwrap();
        assert_eq!(entry.value().unwrap(), Scalar::Float(0.00001));
    }

    #[test]
    fn test_decode_empty_string_values() {
        let data = decode("^L]0.]-^V]0.]").unwrap();
        assert_eq!(data.list("L").unwrap().entry(0).unwrap().content, "");
        assert_eq!(data.variable("V").unwrap().content, "");
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(decode(""), Err(SessionError::Parse(_))));
        assert!(matches!(decode("^A]1.x]-"), Err(SessionError::Parse(_))));
        assert!(matches!(decode("^A]7.1]-"), Err(SessionError::Parse(_))));
        assert!(matches!(decode("1.1]-"), Err(SessionError::Parse(_))));
        assert!(matches!(decode("-^V]11]"), Err(SessionError::Parse(_))));
    }

    #[derive(Debug, Clone)]
    enum Op {
        CreateList(u8),
        RemoveList(u8),
        Add(u8, Scalar),
        RemoveAt(u8, usize),
        RemoveValue(u8, Scalar, bool),
        Set(u8, Scalar),
    }

    fn scalar_strategy() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            "[a-zA-Z0-9 .\\-_]{0,12}".prop_map(Scalar::Str),
            any::<i32>().prop_map(Scalar::Int),
            (-1.0e6f32..1.0e6f32).prop_map(Scalar::Float),
        ]
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..4u8).prop_map(Op::CreateList),
            (0..4u8).prop_map(Op::RemoveList),
            (0..4u8, scalar_strategy()).prop_map(|(l, v)| Op::Add(l, v)),
            (0..4u8, 0..6usize).prop_map(|(l, i)| Op::RemoveAt(l, i)),
            (0..4u8, scalar_strategy(), any::<bool>())
                .prop_map(|(l, v, all)| Op::RemoveValue(l, v, all)),
            (0..4u8, scalar_strategy()).prop_map(|(n, v)| Op::Set(n, v)),
        ]
    }

    fn apply(data: &mut SessionData, op: Op) {
        let name = |n: u8| format!("n{}", n);
        match op {
            Op::CreateList(l) => {
                data.add_list(&name(l));
            }
            Op::RemoveList(l) => {
                data.remove_list(&name(l));
            }
            Op::Add(l, v) => {
                if let Some(list) = data.list_mut(&name(l)) {
                    list.push(&v);
                }
            }
            Op::RemoveAt(l, i) => {
                if let Some(list) = data.list_mut(&name(l)) {
                    list.remove_at(i);
                }
            }
            Op::RemoveValue(l, v, all) => {
                if let Some(list) = data.list_mut(&name(l)) {
                    list.remove_matching(&v, all);
                }
            }
            Op::Set(n, v) => {
                data.set_variable(&format!("v-{}", n), &v);
            }
        }
    }

    proptest! {
        #[test]
        fn decode_inverts_encode(ops in prop::collection::vec(op_strategy(), 0..48)) {
            let mut data = SessionData::new();
            for op in ops {
                apply(&mut data, op);
            }
            let decoded = decode(&encode(&data)).unwrap();
            prop_assert_eq!(decoded, data);
        }
    }
}
