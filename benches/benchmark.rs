//! Benchmarks for graph_textrank

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use graph_textrank::nlp::TextPreprocessor;
use graph_textrank::*;

/// Sample text for benchmarking
const SAMPLE_TEXT: &str = r#"
Machine learning is a subset of artificial intelligence that provides systems
the ability to automatically learn and improve from experience without being explicitly
programmed. Machine learning focuses on the development of computer programs that can
access data and use it to learn for themselves.

The process of learning begins with observations or data, such as examples, direct
experience, or instruction, in order to look for patterns in data and make better
decisions in the future based on the examples that we provide. The primary aim is to
allow the computers to learn automatically without human intervention or assistance
and adjust actions accordingly.

Deep learning is a subset of machine learning that uses artificial neural networks
with representation learning. The learning can be supervised, semi-supervised or
unsupervised. Deep learning has been applied to various fields including computer
vision, speech recognition, natural language processing, and drug design.

Natural language processing is a subfield of linguistics, computer science,
and artificial intelligence concerned with the interactions between computers and
human language. Language processing techniques are used to analyze, understand, and
generate human language in a valuable way. Key applications include sentiment analysis,
machine translation, and text summarization.
"#;

const STOP_WORDS: &[&str] = &[
    "a", "and", "as", "be", "been", "can", "for", "in", "is", "it", "of", "or", "that", "the",
    "to", "with",
];

fn encoded_tokens(repeat: usize) -> Vec<TokenId> {
    let preprocessor = TextPreprocessor::with_stop_words(STOP_WORDS.iter().copied());
    let tokens = preprocessor.preprocess_text(&SAMPLE_TEXT.repeat(repeat));
    let mut encoder = TextEncoder::new();
    encoder.encode(&tokens).unwrap_or_default()
}

fn benchmark_preprocessing(c: &mut Criterion) {
    let preprocessor = TextPreprocessor::with_stop_words(STOP_WORDS.iter().copied());

    c.bench_function("preprocess_sample", |b| {
        b.iter(|| preprocessor.preprocess_text(black_box(SAMPLE_TEXT)))
    });

    let sentences = SentencePreprocessor::new(preprocessor);
    c.bench_function("split_sentences_sample", |b| {
        b.iter(|| sentences.get_sentences(black_box(SAMPLE_TEXT)))
    });
}

fn benchmark_graph_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_from_tokens");
    for size in [1, 5, 10].iter() {
        let tokens = encoded_tokens(*size);
        group.throughput(Throughput::Elements(tokens.len() as u64));

        group.bench_with_input(BenchmarkId::new("matrix", size), &tokens, |b, tokens| {
            b.iter(|| {
                let mut graph = TokenMatrixGraph::new();
                graph.fill_from_tokens(black_box(tokens), 3).map(|_| graph)
            })
        });
        group.bench_with_input(BenchmarkId::new("edge_list", size), &tokens, |b, tokens| {
            b.iter(|| {
                let mut graph = TokenEdgeListGraph::new();
                graph.fill_from_tokens(black_box(tokens), 3).map(|_| graph)
            })
        });
    }
    group.finish();
}

fn benchmark_ranking(c: &mut Criterion) {
    let tokens = encoded_tokens(5);

    let mut matrix = TokenMatrixGraph::new();
    let mut edges = TokenEdgeListGraph::new();
    if matrix.fill_from_tokens(&tokens, 3).is_err() {
        return;
    }
    if edges.fill_from_tokens(&tokens, 3).is_err() {
        return;
    }
    let _ = edges.fill_positions(&tokens);
    let _ = edges.calculate_position_weights();

    let mut group = c.benchmark_group("train");
    group.bench_function("vanilla_matrix", |b| {
        b.iter(|| {
            let mut ranker = TextRank::vanilla(black_box(&matrix));
            ranker.train()
        })
    });
    group.bench_function("vanilla_edge_list", |b| {
        b.iter(|| {
            let mut ranker = TextRank::vanilla(black_box(&edges));
            ranker.train()
        })
    });
    group.bench_function("position_biased_edge_list", |b| {
        b.iter(|| {
            let mut ranker = TextRank::position_biased(black_box(&edges));
            ranker.train()
        })
    });
    group.finish();
}

fn benchmark_keyword_extraction(c: &mut Criterion) {
    let preprocessor = TextPreprocessor::with_stop_words(STOP_WORDS.iter().copied());
    let tokens = preprocessor.preprocess_text(SAMPLE_TEXT);
    let extractor = KeywordExtractor::new(RankConfig::default());

    c.bench_function("extract_keywords", |b| {
        b.iter(|| {
            let mut encoder = TextEncoder::new();
            extractor.extract(black_box(&tokens), &mut encoder)
        })
    });

    c.bench_function("compare_all_combinations", |b| {
        b.iter(|| {
            let mut encoder = TextEncoder::new();
            extractor.compare_all(black_box(&tokens), &mut encoder)
        })
    });
}

fn benchmark_summarization(c: &mut Criterion) {
    let preprocessor =
        SentencePreprocessor::new(TextPreprocessor::with_stop_words(STOP_WORDS.iter().copied()));
    let config = RankConfig::default().with_top_n(3);

    let mut group = c.benchmark_group("summarize_by_size");
    for size in [1, 5, 10].iter() {
        let text = SAMPLE_TEXT.repeat(*size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| summarizer::summarize(black_box(text), &preprocessor, &config))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_preprocessing,
    benchmark_graph_building,
    benchmark_ranking,
    benchmark_keyword_extraction,
    benchmark_summarization,
);
criterion_main!(benches);
