//! Hash domain and source governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has the expected count
//! 2. Domain byte strings are unique and follow `STACKER::*::V1\0`
//! 3. No raw `STACKER::` domain literals in production source outside `hash_domain.rs`
//! 4. No `deny_unknown_fields` in production source (configs stay extensible)
//! 5. No `.unwrap()` / `.expect(` in production source

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use stacker_kernel::proof::hash::HashDomain;

const PRODUCTION_DIRS: [&str; 3] = [
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
    concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
];

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        5,
        "expected 5 domain variants; if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_bytes_unique_and_well_formed() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain}");
        assert!(bytes.starts_with(b"STACKER::"), "{domain} does not start with STACKER::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} does not end with ::V1\\0");
    }
}

#[test]
fn production_dirs_exist() {
    for dir in PRODUCTION_DIRS {
        assert!(Path::new(dir).is_dir(), "{dir} missing");
    }
}

#[test]
fn no_raw_domain_literals_outside_authority() {
    let violations = scan_production("b\"STACKER::", Some("hash_domain.rs"));
    assert!(
        violations.is_empty(),
        "raw STACKER:: domain literals found outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_deny_unknown_fields_in_production_code() {
    let violations = scan_production("deny_unknown_fields", None);
    assert!(
        violations.is_empty(),
        "deny_unknown_fields found in production code:\n{}",
        violations.join("\n")
    );
}

#[test]
fn no_unwrap_or_expect_in_production_code() {
    let mut violations = scan_production(".unwrap()", None);
    violations.extend(scan_production(".expect(", None));
    assert!(
        violations.is_empty(),
        "panicking accessors found in production code:\n{}",
        violations.join("\n")
    );
}

fn scan_production(pattern: &str, authority_file: Option<&str>) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in PRODUCTION_DIRS {
        for path in walkdir(Path::new(dir)) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if authority_file.is_some() && path.file_name().and_then(|n| n.to_str()) == authority_file {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            scan_source(&path, &content, pattern, &mut violations);
        }
    }
    violations
}

/// Report non-comment lines containing `pattern`, skipping `#[cfg(test)]`
/// blocks via brace-depth tracking.
fn scan_source(path: &Path, content: &str, pattern: &str, violations: &mut Vec<String>) {
    let mut brace_depth: usize = 0;
    let mut skip_depth: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.chars().filter(|&c| c == '{').count();
        let closes = line.chars().filter(|&c| c == '}').count();
        if cfg_test_pending && opens > 0 {
            skip_depth = Some(brace_depth);
            cfg_test_pending = false;
        }
        brace_depth = brace_depth.saturating_add(opens).saturating_sub(closes);

        if let Some(depth) = skip_depth {
            if brace_depth <= depth {
                skip_depth = None;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        if trimmed.contains(pattern) {
            violations.push(format!("  {}:{}: {}", path.display(), i + 1, trimmed));
        }
    }
}

/// Recursive directory walk.
fn walkdir(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                results.extend(walkdir(&path));
            } else {
                results.push(path);
            }
        }
    }
    results
}
