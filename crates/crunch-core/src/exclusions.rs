//! Words that must never be mangled nor emitted as short codes.

use std::collections::HashSet;

/// Set of protected words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    words: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// JavaScript reserved words plus globals and members commonly reached
    /// from game code.
    pub fn javascript() -> Self {
        JS_RESERVED.iter().chain(JS_GLOBALS).chain(JS_MEMBERS).copied().collect()
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

const JS_RESERVED: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "let", "new", "null", "of", "package", "private", "protected",
    "public", "return", "static", "super", "switch", "this", "throw", "true",
    "try", "typeof", "var", "void", "while", "with", "yield", "async", "get",
    "set", "arguments", "eval", "undefined", "NaN", "Infinity",
];

const JS_GLOBALS: &[&str] = &[
    "window", "document", "console", "Math", "Date", "JSON", "Object", "Array",
    "String", "Number", "Boolean", "Symbol", "Map", "Set", "WeakMap", "Promise",
    "Error", "RegExp", "Image", "Audio", "AudioContext", "Float32Array",
    "Uint8Array", "Int16Array", "localStorage", "navigator", "performance",
    "requestAnimationFrame", "setTimeout", "clearTimeout", "setInterval",
    "clearInterval", "parseInt", "parseFloat", "isNaN", "alert", "onload",
    "addEventListener", "removeEventListener",
];

const JS_MEMBERS: &[&str] = &[
    "length", "push", "pop", "shift", "unshift", "splice", "slice", "concat",
    "join", "split", "indexOf", "forEach", "map", "filter", "reduce", "sort",
    "keys", "values", "prototype", "constructor", "call", "apply", "bind",
    "toString", "log", "warn", "error", "floor", "ceil", "round", "random",
    "min", "max", "abs", "sqrt", "sin", "cos", "atan2", "PI", "now",
    "getElementById", "createElement", "appendChild", "getContext", "canvas",
    "width", "height", "style", "body", "fillRect", "fillStyle", "strokeStyle",
    "beginPath", "closePath", "moveTo", "lineTo", "arc", "fill", "stroke",
    "save", "restore", "translate", "rotate", "scale", "drawImage", "font",
    "fillText", "globalAlpha", "keyCode", "key", "type", "target", "x", "y",
];
