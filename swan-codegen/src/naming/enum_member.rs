//! Enum case naming as an ordered table of rules; the first rule that
//! produces a name wins.

use swan_core::{camelize, capitalize_fully};
use tracing::trace;

use super::{IdentifierKind, Namer, Rename, RenameReason, Resolved};

/// Spelled-out names for values that are a single symbol.
const SYMBOL_NAMES: &[(&str, &str)] = &[
    ("$", "Dollar"),
    ("^", "Caret"),
    ("|", "Pipe"),
    ("=", "Equal"),
    ("*", "Star"),
    ("-", "Minus"),
    ("&", "Ampersand"),
    ("%", "Percent"),
    ("#", "Hash"),
    ("@", "At"),
    ("!", "Exclamation"),
    ("+", "Plus"),
    (":", "Colon"),
    (">", "Greater_Than"),
    ("<", "Less_Than"),
    (".", "Period"),
    ("_", "Underscore"),
    ("?", "Question_Mark"),
    (",", "Comma"),
    ("'", "Quote"),
    ("\"", "Double_Quote"),
    ("/", "Slash"),
    ("\\", "Back_Slash"),
    ("(", "Left_Parenthesis"),
    (")", "Right_Parenthesis"),
    ("{", "Left_Curly_Bracket"),
    ("}", "Right_Curly_Bracket"),
    ("[", "Left_Square_Bracket"),
    ("]", "Right_Square_Bracket"),
    ("~", "Tilde"),
    ("`", "Backtick"),
    ("<=", "Less_Than_Or_Equal_To"),
    (">=", "Greater_Than_Or_Equal_To"),
    ("!=", "Not_Equal"),
];

/// Datatypes whose enum cases get the `number` prefix.
const NUMERIC_TYPES: &[&str] = &["Int", "Int32", "Int64", "Float", "Double"];

/// Word separators for the fallback rule.
const FALLBACK_DELIMITERS: &[char] = &['-', '_', ' ', ':', '(', ')'];

/// Working state threaded through the rules.
struct EnumCandidate<'v> {
    name: String,
    datatype: &'v str,
    /// Set once the name has been camel-cased in place.
    camelized: bool,
}

/// A named step of the decision table.
struct EnumRule {
    name: &'static str,
    /// Set for rules that decorate the value rather than spell it.
    reason: Option<RenameReason>,
    apply: fn(&mut EnumCandidate<'_>, &Namer<'_>) -> Option<String>,
}

const ENUM_RULES: &[EnumRule] = &[
    EnumRule {
        name: "empty",
        reason: None,
        apply: empty,
    },
    EnumRule {
        name: "leading-number",
        reason: Some(RenameReason::LeadingDigit),
        apply: leading_number,
    },
    EnumRule {
        name: "symbol",
        reason: None,
        apply: symbol,
    },
    EnumRule {
        name: "camel-case",
        reason: None,
        apply: camel_case,
    },
    EnumRule {
        name: "reserved",
        reason: Some(RenameReason::ReservedWord),
        apply: reserved,
    },
    EnumRule {
        name: "numeric",
        reason: None,
        apply: numeric,
    },
    EnumRule {
        name: "camelized",
        reason: None,
        apply: camelized,
    },
    EnumRule {
        name: "fallback",
        reason: None,
        apply: fallback,
    },
];

pub(super) fn resolve(namer: &Namer<'_>, value: &str, datatype: &str) -> Resolved {
    let mut candidate = EnumCandidate {
        name: value.to_string(),
        datatype,
        camelized: false,
    };

    for rule in ENUM_RULES {
        let Some(name) = (rule.apply)(&mut candidate, namer) else {
            continue;
        };
        trace!(rule = rule.name, value, name = %name, "resolved enum case");
        return match rule.reason {
            Some(reason) => Resolved::renamed(Rename::new(
                IdentifierKind::EnumMember,
                value,
                name,
                reason,
            )),
            None => Resolved::plain(name),
        };
    }
    Resolved::plain(candidate.name)
}

fn empty(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    candidate.name.is_empty().then(|| "empty".to_string())
}

fn leading_number(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    let digits = candidate
        .name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(candidate.name.len());
    if digits == 0 {
        return None;
    }

    let (number, rest) = candidate.name.split_at(digits);
    Some(format!("_{}{}", number, camelize(rest, false)))
}

fn symbol(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    SYMBOL_NAMES
        .iter()
        .find(|(symbol, _)| *symbol == candidate.name)
        .map(|(_, alias)| camelize(&capitalize_fully(&alias.to_uppercase(), &[' ']), true))
}

fn camel_case(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    if is_upper_camel(&candidate.name) {
        candidate.name = camelize(&candidate.name, true);
        candidate.camelized = true;
    }
    None
}

fn reserved(candidate: &mut EnumCandidate<'_>, namer: &Namer<'_>) -> Option<String> {
    let lowercase = candidate.name.to_lowercase();
    namer
        .reserved()
        .is_reserved(&lowercase)
        .then(|| namer.reserved().escape(&lowercase))
}

fn numeric(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    NUMERIC_TYPES
        .contains(&candidate.datatype)
        .then(|| format!("number{}", spell_number(&candidate.name)))
}

fn camelized(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    candidate.camelized.then(|| candidate.name.clone())
}

fn fallback(candidate: &mut EnumCandidate<'_>, _: &Namer<'_>) -> Option<String> {
    let words: String = capitalize_fully(&candidate.name.to_lowercase(), FALLBACK_DELIMITERS)
        .chars()
        .filter(|c| !FALLBACK_DELIMITERS.contains(c))
        .collect();
    Some(camelize(&words, true))
}

/// Matches `[A-Z][a-z0-9]+[a-zA-Z0-9]*`.
fn is_upper_camel(name: &str) -> bool {
    let mut chars = name.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return false;
    };
    first.is_ascii_uppercase()
        && (second.is_ascii_lowercase() || second.is_ascii_digit())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Spell out sign and decimal point; other runs are type-cased.
fn spell_number(value: &str) -> String {
    let mut spelled = String::with_capacity(value.len() + 8);
    let mut segment = String::new();

    for c in value.chars() {
        let word = match c {
            '-' => "minus",
            '+' => "plus",
            '.' => "dot",
            _ => {
                segment.push(c);
                continue;
            }
        };
        spelled.push_str(&camelize(&segment, false));
        segment.clear();
        spelled.push_str(word);
    }
    spelled.push_str(&camelize(&segment, false));
    spelled
}
