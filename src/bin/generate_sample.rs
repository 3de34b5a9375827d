use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic transcription export for trying out sign-tally.
#[derive(Parser, Debug)]
struct Args {
    /// Root folder to create
    #[arg(default_value = "sample_export")]
    root: PathBuf,

    /// Number of documents
    #[arg(short, long, default_value_t = 12)]
    documents: usize,

    /// Lines per document
    #[arg(short, long, default_value_t = 40)]
    lines: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

const WORDS: &[&str] = &[
    "der", "die", "das", "und", "Rechenmaschine", "Programm", "Speicher", "Relais",
    "Zahl", "Befehl", "Ergebnis", "Plan", "Kalkül", "Gleitkomma", "Addition",
    "Multiplikation", "Wert", "Größe", "für", "mit", "ist", "nicht", "wird", "über",
    "Stelle", "Bedingung", "Schaltung", "Lochstreifen", "Ausgabe", "Eingabe",
];

const SIGNS: &[&str] = &[".", ",", ":", ";", "=", "+", "-", "(", ")", "/", "×", "→"];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

fn generate_line(rng: &mut SimpleRng) -> String {
    let mut parts: Vec<String> = Vec::new();
    for _ in 0..3 + rng.below(8) {
        match rng.below(10) {
            0 => parts.push(rng.below(2000).to_string()),
            1 => parts.push(rng.pick(SIGNS).to_string()),
            _ => parts.push(rng.pick(WORDS).to_string()),
        }
    }
    parts.join(" ")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SimpleRng::new(args.seed);

    for doc in 0..args.documents {
        let dir = args.root.join(format!("doc_{doc:03}"));
        fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

        let key = format!("NL_207_{:04}", 100 + doc);
        let text: Vec<String> = (0..args.lines).map(|_| generate_line(&mut rng)).collect();

        fs::write(dir.join(format!("{key}.txt")), text.join("\n"))
            .with_context(|| format!("writing {key}.txt"))?;
        fs::write(dir.join("metadata.xml"), format!("<doc id=\"{key}\"/>\n"))
            .with_context(|| format!("writing metadata for {key}"))?;
    }

    println!(
        "Wrote {} documents ({} lines each) to {}",
        args.documents,
        args.lines,
        args.root.display()
    );
    Ok(())
}
