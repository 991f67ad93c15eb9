use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Language, Lexicon, MoveGenerator, Rack, TileSet};

const WORDS: &[&str] = &[
    "casa", "casas", "caso", "casos", "cosa", "cosas", "masa", "masas", "mesa", "mesas", "chico",
    "chica", "llave", "llaves", "carro", "carros", "perro", "perros", "as", "saca", "ca", "oca",
];

/// All words of 2 to 5 letters over a small alphabet, to get a lexicon of some size.
fn generated_words() -> Vec<String> {
    let alphabet = ["A", "C", "E", "L", "O", "R", "S", "T"];
    let mut words = vec![String::new()];
    let mut all = Vec::new();
    for _ in 0..5 {
        words = words
            .iter()
            .flat_map(|w| alphabet.iter().map(move |l| format!("{}{}", w, l)))
            .collect();
        all.extend(words.iter().filter(|w| w.len() > 1).cloned());
    }
    all
}

fn bench_from_words(c: &mut Criterion) {
    c.bench_function("lexicon.from_words", |b| {
        b.iter(|| Lexicon::from_words(Language::Spanish, WORDS))
    });
}

fn bench_from_generated_words(c: &mut Criterion) {
    let words = generated_words();
    c.bench_function("lexicon.from_generated_words", |b| {
        b.iter(|| Lexicon::from_words(Language::English, &words))
    });
}

fn bench_is_word(c: &mut Criterion) {
    let lexicon = Lexicon::from_words(Language::English, generated_words());
    c.bench_function("lexicon.is_word", |b| {
        b.iter(|| {
            ["CASTLE", "ROSE", "TORO", "XYZ", "SECRETS"]
                .iter()
                .filter(|w| lexicon.is_word(w))
                .count()
        })
    });
}

fn bench_candidate_words(c: &mut Criterion) {
    let tileset = TileSet::new(Language::English);
    let lexicon = Lexicon::from_words(Language::English, generated_words());
    let generator = MoveGenerator::new(&lexicon, &tileset);
    let rack = Rack::parse("carotes", tileset.tokenizer()).unwrap();
    c.bench_function("movegen.candidate_words", |b| {
        b.iter(|| generator.candidate_words(&rack))
    });
}

criterion_group!(
    benches,
    bench_from_words,
    bench_from_generated_words,
    bench_is_word,
    bench_candidate_words
);
criterion_main!(benches);
