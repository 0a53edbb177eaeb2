/// Quick desk example — drive the engine without the TUI.
///
/// Generates a short run of headlines from the builtin pack plus the
/// shipped tech-gully pack, then prints the session history and stats.
///
/// Run with: cargo run --example quick_desk

use headline_engine::core::generator::HeadlineGenerator;

fn main() {
    let mut generator = HeadlineGenerator::builder()
        .content_pack("content/tech_gully.ron")
        .seed(2026)
        .build()
        .expect("failed to assemble content pools");

    println!("--- Five fresh headlines ---");
    for _ in 0..5 {
        let headline = generator.generate();
        println!("[{}] {}", headline.kind.label(), headline.text);
    }

    println!("\n--- Session history ---");
    for entry in generator.history().entries() {
        println!("{}", entry.display_line());
    }

    println!("\n{}", generator.stats_line());
}
