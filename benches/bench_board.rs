use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Language, Lexicon, MoveGenerator, Rack, TileSet};

const WORDS: &[&str] = &[
    "casa", "casas", "caso", "casos", "cosa", "cosas", "masa", "masas", "mesa", "mesas", "chico",
    "chica", "llave", "llaves", "carro", "carros", "perro", "perros", "as", "sa", "sacas", "ca",
    "oca", "ocas", "saco", "sacos", "loca", "locas", "cal", "sal", "mal", "mas", "mes", "ola",
];

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "........M......",
    "........A......",
    "........S......",
    ".......CASA....",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn bench_best_move(c: &mut Criterion, name: &str, letters: &str) {
    let tileset = TileSet::new(Language::Spanish);
    let lexicon = Lexicon::from_words(Language::Spanish, WORDS);
    let board = Board::new(Language::Spanish)
        .with_state_from_strings(TEST_STATE)
        .unwrap();
    let generator = MoveGenerator::new(&lexicon, &tileset);
    let rack = Rack::parse(letters, tileset.tokenizer()).unwrap();
    c.bench_function(&format!("board.best_move.{}", name), |b| {
        b.iter(|| generator.best_move(&rack, &board))
    });
    c.bench_function(&format!("board.all_moves.{}", name), |b| {
        b.iter(|| generator.all_moves(&rack, &board))
    });
}

fn bench_anchors(c: &mut Criterion) {
    let board = Board::new(Language::Spanish)
        .with_state_from_strings(TEST_STATE)
        .unwrap();
    c.bench_function("board.anchors", |b| b.iter(|| board.anchors()));
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_anchors(c);
    bench_best_move(c, "1", "casol");
    bench_best_move(c, "2", "sacoml");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_main!(benches);
