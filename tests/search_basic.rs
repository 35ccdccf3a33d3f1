use sufbench::{
    LibsaisBuilder, NaiveScanner, OccurrenceCounter, SortingBuilder, SuffixArray,
    SuffixArrayBuilder, SuffixArraySearcher, Text,
};

fn create_text() -> Text {
    Text::from(b"cccaaagggttt".as_slice())
}

fn count_all_strategies(text: &Text, query: &[u8]) -> [usize; 3] {
    let libsais: SuffixArray<i32> = LibsaisBuilder.build(text).unwrap();
    let sorting: SuffixArray<i64> = SortingBuilder.build(text).unwrap();

    [
        NaiveScanner::new(text).count(query),
        SuffixArraySearcher::new(text, &libsais).count(query),
        SuffixArraySearcher::new(text, &sorting).count(query),
    ]
}

static BASIC_QUERY: &[u8] = b"gg";
static FRONT_QUERY: &[u8] = b"c";
static WRAPPING_QUERY: &[u8] = b"ta";

#[test]
fn basic_search() {
    assert_eq!(count_all_strategies(&create_text(), BASIC_QUERY), [2, 2, 2]);
}

#[test]
fn text_front_search() {
    assert_eq!(count_all_strategies(&create_text(), FRONT_QUERY), [3, 3, 3]);
}

#[test]
fn search_no_wrapping() {
    assert_eq!(count_all_strategies(&create_text(), WRAPPING_QUERY), [0, 0, 0]);
}

#[test]
fn overlapping_occurrences() {
    let text = Text::from(b"aaaa".as_slice());
    assert_eq!(count_all_strategies(&text, b"aa"), [3, 3, 3]);
}

#[test]
fn empty_pattern_has_no_occurrences() {
    assert_eq!(count_all_strategies(&create_text(), b""), [0, 0, 0]);
    assert_eq!(count_all_strategies(&Text::default(), b""), [0, 0, 0]);
}

#[test]
fn pattern_longer_than_text() {
    assert_eq!(
        count_all_strategies(&create_text(), b"cccaaagggttta"),
        [0, 0, 0]
    );
}

#[test]
fn full_text_match() {
    let text = create_text();
    assert_eq!(count_all_strategies(&text, text.as_slice()), [1, 1, 1]);
}

#[test]
fn concatenated_records() {
    // occurrences across record borders are counted, the records are not separated
    let text = Text::from_records([b"ACGTAC".as_slice(), b"GTACGT"]);
    assert_eq!(count_all_strategies(&text, b"ACGT"), [3, 3, 3]);
    assert_eq!(count_all_strategies(&text, b"CG"), [3, 3, 3]);
}

#[test]
fn locate_matches_naive_positions() {
    let text = Text::from(b"ACGTTACGTTTACG".as_slice());
    let suffix_array: SuffixArray<i32> = LibsaisBuilder.build(&text).unwrap();
    let searcher = SuffixArraySearcher::new(&text, &suffix_array);

    let mut located: Vec<_> = searcher.locate(b"ACG").collect();
    located.sort_unstable();
    let naive: Vec<_> = NaiveScanner::new(&text).positions(b"ACG").collect();

    assert_eq!(located, naive);
    assert_eq!(naive, [0, 5, 11]);
}
