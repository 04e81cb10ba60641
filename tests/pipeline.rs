use std::io::Cursor;

use tagcloud::rank::select_top;
use tagcloud::tokenizer::tokenize;
use tagcloud::{
    render, CloudConfig, CloudGenerator, CountBounds, FontScale, FrequencyMap, RankedEntry,
    SeparatorSet, TagCloud, TagCloudError, Vocabulary,
};

fn generate(text: &str, words: i64) -> tagcloud::Result<String> {
    let generator = CloudGenerator::new(CloudConfig::default());
    let artefacts = generator.generate_from_reader(Cursor::new(text), "input.txt", words)?;
    render::to_html(&artefacts.cloud, generator.config())
}

#[test]
fn tokens_reconstruct_every_line() {
    let separators = SeparatorSet::canonical();
    for line in [
        "",
        "x",
        "!!",
        "Hello, <world> & [friends] {of} ~mine~ #1 @home $5 + 3 = 8; ok: yes",
        "ünïcödé·words stay whole",
    ] {
        let rebuilt: String = tokenize(line, separators).map(|token| token.text).collect();
        assert_eq!(rebuilt, line);
    }
}

#[test]
fn aggregation_and_selection_of_the_reference_sentence() {
    let map = FrequencyMap::from_text("the cat the dog the");
    assert_eq!(map.get("the"), Some(3));
    assert_eq!(map.get("cat"), Some(1));
    assert_eq!(map.get("dog"), Some(1));

    let selection = select_top(map.clone(), 2).expect("selection");
    assert_eq!(
        selection.entries(),
        &[RankedEntry::new("the", 3), RankedEntry::new("cat", 1)]
    );

    let oversized = select_top(map, 5).expect("selection");
    assert_eq!(
        oversized.vocabulary(),
        Vocabulary::Insufficient {
            requested: 5,
            available: 3
        }
    );
}

#[test]
fn font_scale_reference_values() {
    let scale = FontScale::with_default_sizes(CountBounds { min: 1, max: 5 });
    assert_eq!(scale.size_for(5), 48);
    assert_eq!(scale.size_for(1), 11);

    let single = select_top(FrequencyMap::from_text("solo solo solo"), 1).expect("selection");
    let cloud = TagCloud::from_selection(single, "solo.txt", 11, 48);
    assert_eq!(cloud.entries[0].font_size, 11);
}

#[test]
fn tied_words_render_alphabetically() {
    let text = "zebra ".repeat(10) + &"ant ".repeat(10);
    let html = generate(&text, 2).expect("html");
    let ant = html.find(">ant</span>").expect("ant rendered");
    let zebra = html.find(">zebra</span>").expect("zebra rendered");
    assert!(ant < zebra);
}

#[test]
fn pipeline_output_is_byte_identical_across_runs() {
    let text = "one two three two three three four four four four\nfive, five; FIVE. five! five?";
    let first = generate(text, 3).expect("first run");
    let second = generate(text, 3).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn zero_words_render_an_empty_container() {
    let html = generate("plenty of words in here", 0).expect("html");
    assert!(html.contains("<h2>Top 0 words in input.txt</h2>"));
    assert!(html.contains("<p class=\"cbox\">\n</p>"));
    assert!(!html.contains("<span"));
}

#[test]
fn negative_word_count_is_fatal() {
    let err = generate("a b c", -1).expect_err("negative count");
    assert!(matches!(err, TagCloudError::NegativeWordCount(-1)));
}
