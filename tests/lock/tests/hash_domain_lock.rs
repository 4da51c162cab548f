//! Hash domain governance lock tests.
//!
//! Proves:
//! 1. Canonical domain set has the expected count
//! 2. All domain byte strings are unique
//! 3. All domains follow `QUARTERTURN::*::V1\0`
//! 4. No raw `QUARTERTURN::` domain literals in production source outside `hash_domain.rs`

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use quarterturn_kernel::proof::hash_domain::HashDomain;

#[test]
fn hash_domain_canonical_set_count() {
    assert_eq!(
        HashDomain::ALL.len(),
        4,
        "if you added a new domain, update this count"
    );
}

#[test]
fn hash_domain_all_unique_bytes() {
    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        assert!(
            seen.insert(domain.as_bytes()),
            "duplicate domain bytes: {domain}"
        );
    }
}

#[test]
fn hash_domain_all_follow_naming_convention() {
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(bytes.starts_with(b"QUARTERTURN::"), "{domain} prefix");
        assert!(bytes.ends_with(b"::V1\0"), "{domain} suffix");
    }
}

/// The only file allowed to spell out domain bytes is `hash_domain.rs`.
#[test]
fn no_raw_domain_literals_outside_authority() {
    let production_dirs = [
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../kernel/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../search/src"),
        concat!(env!("CARGO_MANIFEST_DIR"), "/../../harness/src"),
    ];
    let pattern = "b\"QUARTERTURN::";
    let mut violations = Vec::new();
    let mut scanned = 0;

    for dir in production_dirs {
        for path in rust_files(Path::new(dir)) {
            scanned += 1;
            if path.file_name().and_then(|n| n.to_str()) == Some("hash_domain.rs") {
                continue;
            }
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };
            for (i, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if !trimmed.starts_with("//") && trimmed.contains(pattern) {
                    violations.push(format!("  {}:{}: {trimmed}", path.display(), i + 1));
                }
            }
        }
    }

    assert!(scanned > 10, "scanned only {scanned} files; wrong paths?");
    assert!(
        violations.is_empty(),
        "raw domain literals outside hash_domain.rs:\n{}",
        violations.join("\n")
    );
}

fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let Ok(entries) = std::fs::read_dir(dir) else {
        return out;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            out.extend(rust_files(&path));
        } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
            out.push(path);
        }
    }
    out
}
