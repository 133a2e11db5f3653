//! Canonical tech names: maps the many spellings an LLM produces onto one display label.
//!
//! The table is ORDERED and the first matching rule wins. Several patterns
//! overlap on purpose: "react native" also matches the React prefix rule, and
//! "java spring boot" matches both Spring and Java. Reordering the table
//! changes results, so new rules go directly above any broader rule they
//! overlap with.
//!
//! Patterns are tested against the lower-cased, cleaned candidate. Every
//! canonical name must map to itself so normalization is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// One `(pattern, canonical name)` entry of the synonym table.
#[derive(Debug)]
pub struct CanonicalRule {
    pub pattern: Regex,
    pub canonical: &'static str,
}

impl CanonicalRule {
    fn new(pattern: &str, canonical: &'static str) -> Self {
        Self {
            // Patterns are compile-time literals covered by tests.
            pattern: Regex::new(pattern).unwrap(),
            canonical,
        }
    }
}

const RULE_SOURCES: &[(&str, &str)] = &[
    // JS runtimes and frameworks before the bare JavaScript rule
    (r"^node([\s.-]?js)?$|\bnode[\s.-]?js\b", "Node.js"),
    (r"^next([\s.-]?js)?$|\bnext[\s.-]?js\b", "Next.js"),
    (r"^express([\s.-]?js)?$|\bexpress[\s.-]?js\b", "Express"),
    // React family: specific forms before the React prefix rule
    (r"\breact[\s-]?native\b", "React Native"),
    (r"\breact testing library\b|^testing[\s-]library$", "React Testing Library"),
    (r"^react([\s.-]?js)?\b|\breact[\s.-]?js\b", "React"),
    // State management
    (r"\bredux\b", "Redux"),
    (r"\bzustand\b", "Zustand"),
    (r"\bmobx\b", "MobX"),
    (r"^vue([\s.-]?js)?\b|\bvue[\s.-]?js\b", "Vue.js"),
    (r"^angular([\s.-]?js)?\b|\bangular[\s.-]?js\b", "Angular"),
    (r"^ts$|\btypescript\b", "TypeScript"),
    (r"^(js|es\d+)$|\b(javascript|ecmascript)\b|(^|\s)js\b", "JavaScript"),
    // Datastores
    (r"\bpostgres(ql)?\b|^psql$", "PostgreSQL"),
    (r"\bmysql\b", "MySQL"),
    (r"\bsqlite\d*\b", "SQLite"),
    (r"\bmongo(db)?\b", "MongoDB"),
    (r"\bredis\b", "Redis"),
    (r"\bgraph\s?ql\b", "GraphQL"),
    // Infrastructure
    (r"\bdocker\b", "Docker"),
    (r"\b(kubernetes|k8s)\b", "Kubernetes"),
    (r"\b(aws|amazon web services)\b", "AWS"),
    (r"\bazure\b", "Azure"),
    (r"\b(gcp|google cloud)\b", "GCP"),
    // Python: frameworks and pytest before the language rule
    (r"\bdjango\b", "Django"),
    (r"\bflask\b", "Flask"),
    (r"\bfast\s?api\b", "FastAPI"),
    (r"\bpytest\b", "Pytest"),
    (r"\bpython\d*\b", "Python"),
    // JVM: Spring and JUnit before Java
    (r"\bspring(\s?boot)?\b", "Spring"),
    (r"\bjunit\d*\b", "JUnit"),
    (r"\bjava\b", "Java"),
    (r"^(c#|c sharp|csharp)$", "C#"),
    (r"\basp\.net\b|(^|\s)\.net\b|\bdotnet\b", ".NET"),
    (r"^(go|golang)$|\bgolang\b", "Go"),
    (r"\brust(lang)?\b", "Rust"),
    (r"\btailwind(\s?css)?\b", "Tailwind CSS"),
    // Testing
    (r"\bjest\b", "Jest"),
    (r"\bvitest\b", "Vitest"),
    (r"\bcypress\b", "Cypress"),
    (r"\bplaywright\b", "Playwright"),
];

/// The default rule table, compiled once.
pub static CANONICAL_RULES: Lazy<Vec<CanonicalRule>> = Lazy::new(|| {
    RULE_SOURCES
        .iter()
        .map(|&(pattern, canonical)| CanonicalRule::new(pattern, canonical))
        .collect()
});

static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[-*•·–—+]+\s*)+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trims, strips leading bullet/dash markers (nested ones too) and collapses whitespace runs.
pub fn clean(raw: &str) -> String {
    let trimmed = raw.trim();
    let unbulleted = BULLET_PREFIX.replace(trimmed, "");
    WHITESPACE_RUN
        .replace_all(unbulleted.trim(), " ")
        .into_owned()
}

/// Upper-cases the first character only; the rest keeps its casing.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonical name for one raw candidate using the default table.
pub fn canonicalize(raw: &str) -> String {
    canonicalize_with(&CANONICAL_RULES, raw)
}

/// Canonical name for one raw candidate: first matching rule, otherwise the
/// cleaned string with its first character capitalized. May be empty.
pub fn canonicalize_with(rules: &[CanonicalRule], raw: &str) -> String {
    let cleaned = clean(raw);
    let lowered = cleaned.to_lowercase();

    rules
        .iter()
        .find(|rule| rule.pattern.is_match(&lowered))
        .map(|rule| rule.canonical.to_string())
        .unwrap_or_else(|| capitalize_first(&cleaned))
}
