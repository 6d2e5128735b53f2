/// Prime digit-replacement family search — CLI
///
/// Usage:
///   digit-family-hunt [N]
///
/// N is the target family size (2-10). With no argument, the target is read
/// from an interactive prompt on stdin.
use std::io::{self, Write};
use std::time::Instant;

use digit_family_hunt::{find_family, MAX_TARGET, MIN_TARGET};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let n = match args.first() {
        Some(raw) => parse_target(raw),
        None => prompt_target(),
    };

    let start = Instant::now();
    match find_family(n) {
        Ok(result) => {
            println!("First prime family with at least {n} members:");
            println!("  Template = {}", result.template);
            println!("  Members:");
            for member in &result.members {
                println!("    {member}");
            }
            println!();
            println!("Digit length:    {}", result.digit_length);
            println!("Primes scanned:  {}", result.primes_scanned);
            println!("Highest checked: {}", result.highest_checked);
            println!("Wall time:       {:.3}s", start.elapsed().as_secs_f64());
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn prompt_target() -> u32 {
    print!("Enter a family size ({MIN_TARGET}-{MAX_TARGET}): ");
    io::stdout().flush().expect("flush stdout");
    let mut line = String::new();
    io::stdin().read_line(&mut line).expect("read stdin");
    parse_target(line.trim())
}

fn parse_target(raw: &str) -> u32 {
    match raw.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Not an integer: {raw}");
            std::process::exit(1);
        }
    }
}
