/// Content linter — validates a content pack (or directory of packs)
/// before it ships.
///
/// Usage: content_linter <pack.ron | pack_dir> [--builtin]
///
/// With `--builtin` the packs are merged onto the builtin pools first,
/// matching what the desk does at startup; without it the packs must be
/// complete on their own.

use headline_engine::core::content::ContentSet;
use headline_engine::schema::headline::SubjectKind;
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: content_linter <pack.ron | pack_dir> [--builtin]");
        process::exit(0);
    }

    let target = &args[1];
    let on_builtin = args.iter().any(|a| a == "--builtin");

    let mut content = if on_builtin {
        ContentSet::builtin()
    } else {
        ContentSet::default()
    };

    let target_path = Path::new(target);
    if target_path.is_file() {
        match ContentSet::load_from_ron(target_path) {
            Ok(pack) => content.merge(pack),
            Err(e) => {
                eprintln!("ERROR: failed to load pack: {}", e);
                process::exit(1);
            }
        }
    } else if target_path.is_dir() {
        load_packs_from_dir(target_path, &mut content);
    } else {
        eprintln!("ERROR: path '{}' does not exist", target);
        process::exit(1);
    }

    let (errors, warnings) = lint_content(&content);

    println!("\n=== Content Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }

    for warning in &warnings {
        println!("WARNING: {}", warning);
    }

    for error in &errors {
        println!("ERROR: {}", error);
    }

    print_pool_summary(&content);

    println!(
        "\nSummary: {} errors, {} warnings",
        errors.len(),
        warnings.len()
    );

    if errors.is_empty() {
        process::exit(0);
    } else {
        process::exit(1);
    }
}

fn load_packs_from_dir(dir: &Path, content: &mut ContentSet) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                match ContentSet::load_from_ron(&path) {
                    Ok(pack) => {
                        println!("  Loaded: {}", path.display());
                        content.merge(pack);
                    }
                    Err(e) => {
                        eprintln!("  ERROR loading {}: {}", path.display(), e);
                    }
                }
            }
        }
    }
}

fn lint_content(content: &ContentSet) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = content.validate() {
        errors.push(e.to_string());
    }

    // Duplicates within each pool
    let pools: [(&str, &[String]); 5] = [
        ("celebrities", &content.celebrities),
        ("fictional", &content.fictional),
        ("concepts", &content.concepts),
        ("actions", &content.actions),
        ("places", &content.places),
    ];
    for (name, pool) in pools {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for entry in pool {
            if !seen.insert(entry.as_str()) {
                warnings.push(format!("duplicate entry in '{}': {:?}", name, entry));
            }
        }
    }

    // Subjects duplicated across categories get double their expected
    // weight; worth flagging even though it is not fatal.
    let mut subject_seen: FxHashSet<&str> = FxHashSet::default();
    for kind in SubjectKind::ALL {
        for entry in content.subject_pool(kind) {
            if !subject_seen.insert(entry.as_str()) {
                warnings.push(format!(
                    "subject {:?} appears in more than one category",
                    entry
                ));
            }
        }
    }

    let mut template_seen: FxHashSet<String> = FxHashSet::default();
    for template in &content.templates {
        if !template_seen.insert(template.source()) {
            warnings.push(format!("duplicate template {:?}", template.source()));
        }
    }

    (errors, warnings)
}

fn print_pool_summary(content: &ContentSet) {
    println!("\nPool sizes:");
    println!("  celebrities: {:>4}", content.celebrities.len());
    println!("  fictional:   {:>4}", content.fictional.len());
    println!("  concepts:    {:>4}", content.concepts.len());
    println!("  actions:     {:>4}", content.actions.len());
    println!("  places:      {:>4}", content.places.len());
    println!("  templates:   {:>4}", content.templates.len());

    // Category-first selection gives every category equal weight, so
    // per-item probability differs between categories of unequal size.
    println!("\nPer-item draw probability by subject category:");
    for kind in SubjectKind::ALL {
        let pool = content.subject_pool(kind);
        if pool.is_empty() {
            continue;
        }
        println!(
            "  {:<10} 1 in {}",
            format!("{}:", kind.label()),
            3 * pool.len()
        );
    }
}
