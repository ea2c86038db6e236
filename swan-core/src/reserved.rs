//! Reserved-word table with optional explicit remaps.

use std::collections::{BTreeMap, HashSet};

/// Swift keywords, standard library names, and generator-reserved identifiers.
pub const SWIFT_RESERVED_WORDS: &[&str] = &[
    // names used by the generated client
    "ErrorResponse", "Response",
    // Objective-C compatibility
    "id", "description", "NSArray", "NSURL", "CGFloat", "NSSet", "NSString", "NSInteger",
    "NSUInteger", "NSError", "NSDictionary",
    // keywords used in declarations
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import",
    "init", "inout", "internal", "let", "open", "operator", "private", "protocol", "public",
    "static", "struct", "subscript", "typealias", "var",
    // keywords used in statements
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough", "for",
    "guard", "if", "in", "repeat", "return", "switch", "where", "while",
    // keywords used in expressions and types
    "as", "Any", "catch", "false", "is", "nil", "rethrows", "super", "self", "Self", "throw",
    "throws", "true", "try",
    // keywords used in patterns
    "_",
    // keywords that begin with a number sign
    "#available", "#colorLiteral", "#column", "#else", "#elseif", "#endif", "#file",
    "#fileLiteral", "#function", "#if", "#imageLiteral", "#line", "#selector", "#sourceLocation",
    // keywords reserved in particular contexts
    "associativity", "convenience", "dynamic", "didSet", "final", "get", "infix", "indirect",
    "lazy", "left", "mutating", "none", "nonmutating", "optional", "override", "postfix",
    "precedence", "prefix", "Protocol", "required", "right", "set", "Type", "unowned", "weak",
    "willSet",
    // numbers and basic values
    "Bool", "Int", "Double", "Float", "Range", "ClosedRange", "Error", "Optional",
    // special-use numeric types
    "UInt", "UInt8", "UInt16", "UInt32", "UInt64", "Int8", "Int16", "Int32", "Int64", "Float80",
    "Float32", "Float64",
    // strings and text
    "String", "Character", "Unicode", "StaticString",
    // collections
    "Array", "Dictionary", "Set", "OptionSet", "CountableRange", "CountableClosedRange",
    // common Foundation types
    "URL", "Data", "Codable", "Encodable", "Decodable",
    // other reserved names
    "Void", "AnyObject", "Class", "dynamicType", "COLUMN", "FILE", "FUNCTION", "LINE",
];

/// A set of words that cannot be emitted as identifiers, plus explicit
/// replacements for some of them.
///
/// Lookups are exact and case-sensitive. A word with a configured
/// replacement is reserved even if it is not in the base word list.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: HashSet<String>,
    mappings: BTreeMap<String, String>,
}

impl ReservedWords {
    /// The Swift reserved-word table with no remaps.
    pub fn swift() -> Self {
        Self::new(SWIFT_RESERVED_WORDS.iter().copied())
    }

    /// Build a table from a list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            mappings: BTreeMap::new(),
        }
    }

    /// Add explicit replacements (word -> replacement).
    pub fn with_mappings<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.mappings
            .extend(mappings.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Check if a word is reserved.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.words.contains(word) || self.mappings.contains_key(word)
    }

    /// Get the explicit replacement for a word, if one is configured.
    pub fn mapping(&self, word: &str) -> Option<&str> {
        self.mappings.get(word).map(String::as_str)
    }

    /// Escape a word with the default policy: the explicit replacement if
    /// one exists, otherwise an underscore prefix.
    pub fn escape(&self, word: &str) -> String {
        match self.mapping(word) {
            Some(replacement) => replacement.to_string(),
            None => format!("_{}", word),
        }
    }
}
