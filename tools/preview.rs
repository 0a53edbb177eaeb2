/// Preview — interactive generation shell for testing content packs.
///
/// Usage: preview [--content <pack.ron>]... [--seed <n>]
///
/// Commands:
///   gen [n]     — generate n headlines (default 1)
///   history     — print the session history
///   clear       — clear the history (counter survives)
///   stats       — print the session stats line
///   seed <n>    — rebuild the generator with a fixed seed
///   help        — list commands
///   quit        — exit

use headline_engine::core::generator::HeadlineGenerator;
use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_usage();
        return;
    }

    let mut packs: Vec<String> = Vec::new();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--content" if i + 1 < args.len() => {
                i += 1;
                packs.push(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return;
            }
        }
        i += 1;
    }

    let mut generator = match build_generator(&packs, seed) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!("Headline preview shell. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["gen"] => print_headlines(&mut generator, 1),
            ["gen", n] => match n.parse::<usize>() {
                Ok(count) => print_headlines(&mut generator, count),
                Err(_) => eprintln!("gen expects a number"),
            },
            ["history"] => {
                if generator.history().is_empty() {
                    println!("(history is empty)");
                }
                for entry in generator.history().entries() {
                    println!("{}", entry.display_line());
                }
            }
            ["clear"] => {
                generator.clear_history();
                println!("History cleared.");
            }
            ["stats"] => println!("{}", generator.stats_line()),
            ["seed", n] => match n.parse::<u64>() {
                Ok(value) => match build_generator(&packs, Some(value)) {
                    Ok(g) => {
                        generator = g;
                        println!("Reseeded with {}.", value);
                    }
                    Err(e) => eprintln!("ERROR: {}", e),
                },
                Err(_) => eprintln!("seed expects a number"),
            },
            ["help"] => print_usage(),
            ["quit"] | ["exit"] | ["q"] => break,
            other => eprintln!("Unknown command: '{}' (try 'help')", other.join(" ")),
        }
    }
}

fn build_generator(
    packs: &[String],
    seed: Option<u64>,
) -> Result<HeadlineGenerator, headline_engine::core::content::ContentError> {
    let mut builder = HeadlineGenerator::builder();
    for pack in packs {
        builder = builder.content_pack(pack);
    }
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    builder.build()
}

fn print_headlines(generator: &mut HeadlineGenerator, count: usize) {
    for _ in 0..count {
        let headline = generator.generate();
        println!("[{}] {}", headline.kind.label(), headline.text);
    }
}

fn print_usage() {
    println!("Usage: preview [--content <pack.ron>]... [--seed <n>]");
    println!();
    println!("Commands:");
    println!("  gen [n]     generate n headlines (default 1)");
    println!("  history     print the session history");
    println!("  clear       clear the history (counter survives)");
    println!("  stats       print the session stats line");
    println!("  seed <n>    rebuild the generator with a fixed seed");
    println!("  help        list commands");
    println!("  quit        exit");
}
